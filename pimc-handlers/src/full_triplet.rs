use pimc_geometry::BoxSides;
use pimc_potentials::PeriodicTripletDistancePotential;
use pimc_worldlines::Worldlines;

use crate::trait_worldline_energy::{RefreshableHandler, WorldlineEnergy};

/// Sums a triplet potential over every unordered pair of "other" particles in bead `(i, t)`'s
/// timeslice, forming the triple `(i, j, k)`.
pub struct FullTripletHandler<P, const NDIM: usize> {
    potential: PeriodicTripletDistancePotential<P, NDIM>,
}

impl<P, const NDIM: usize> FullTripletHandler<P, NDIM>
where
    P: Fn(f64, f64, f64) -> f64,
{
    pub fn new(potential: PeriodicTripletDistancePotential<P, NDIM>) -> Self {
        FullTripletHandler { potential }
    }
}

impl<P, const NDIM: usize> WorldlineEnergy<NDIM> for FullTripletHandler<P, NDIM>
where
    P: Fn(f64, f64, f64) -> f64,
{
    fn bead_energy(&self, worldlines: &Worldlines<NDIM>, i: usize, t: usize) -> f64 {
        let slice = worldlines.timeslice(t);
        let pi = slice[i];
        let others: Vec<usize> = (0..slice.len()).filter(|&j| j != i).collect();
        let mut sum = 0.0;
        for (a, &j) in others.iter().enumerate() {
            for &k in &others[a + 1..] {
                sum += self.potential.within_box_cutoff(&pi, &slice[j], &slice[k]);
            }
        }
        sum
    }
}

impl<P, const NDIM: usize> RefreshableHandler<NDIM> for FullTripletHandler<P, NDIM> {
    fn refresh(&mut self, _worldlines: &Worldlines<NDIM>, _box_sides: &BoxSides<NDIM>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pimc_geometry::Point;

    #[test]
    fn bead_energy_sums_over_every_unordered_pair_of_others() {
        let positions = vec![
            Point::<2>::new([0.0, 0.0]),
            Point::<2>::new([1.0, 0.0]),
            Point::<2>::new([0.0, 1.0]),
            Point::<2>::new([1.0, 1.0]),
        ];
        let wl = Worldlines::<2>::from_initial_positions(1, positions).unwrap();
        let box_sides = BoxSides::<2>::new([10.0, 10.0]).unwrap();
        let handler =
            FullTripletHandler::new(PeriodicTripletDistancePotential::new(|_, _, _| 1.0, box_sides));
        // 3 "other" particles -> C(3,2) = 3 triples, each contributing 1.0
        let e = handler.bead_energy(&wl, 0, 0);
        assert!((e - 3.0).abs() < 1e-12);
    }
}
