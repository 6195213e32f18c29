use pimc_geometry::BoxSides;
use pimc_potentials::PeriodicTwoBodyPointPotential;
use pimc_worldlines::Worldlines;

use crate::trait_worldline_energy::{RefreshableHandler, WorldlineEnergy};

/// Sums a pair potential between bead `(i, t)` and every other particle's bead at the same
/// timeslice, under periodic boundary conditions with a minimum-image cutoff.
pub struct FullPairHandler<P, const NDIM: usize> {
    potential: PeriodicTwoBodyPointPotential<P, NDIM>,
}

impl<P, const NDIM: usize> FullPairHandler<P, NDIM>
where
    P: Fn(f64) -> f64,
{
    pub fn new(potential: PeriodicTwoBodyPointPotential<P, NDIM>) -> Self {
        FullPairHandler { potential }
    }
}

impl<P, const NDIM: usize> WorldlineEnergy<NDIM> for FullPairHandler<P, NDIM>
where
    P: Fn(f64) -> f64,
{
    fn bead_energy(&self, worldlines: &Worldlines<NDIM>, i: usize, t: usize) -> f64 {
        let slice = worldlines.timeslice(t);
        let pi = slice[i];
        let mut sum = 0.0;
        for (j, pj) in slice.iter().enumerate() {
            if j != i {
                sum += self.potential.within_box_cutoff(&pi, pj);
            }
        }
        sum
    }
}

impl<P, const NDIM: usize> RefreshableHandler<NDIM> for FullPairHandler<P, NDIM> {
    fn refresh(&mut self, _worldlines: &Worldlines<NDIM>, _box_sides: &BoxSides<NDIM>) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use pimc_geometry::Point;

    #[test]
    fn bead_energy_sums_over_every_other_particle() {
        let positions = vec![
            Point::<2>::new([0.0, 0.0]),
            Point::<2>::new([1.0, 0.0]),
            Point::<2>::new([0.0, 1.0]),
        ];
        let wl = Worldlines::<2>::from_initial_positions(1, positions).unwrap();
        let box_sides = BoxSides::<2>::new([10.0, 10.0]).unwrap();
        let handler = FullPairHandler::new(PeriodicTwoBodyPointPotential::new(|r: f64| r, box_sides));
        let e = handler.bead_energy(&wl, 0, 0);
        assert!((e - 2.0).abs() < 1e-12);
    }
}
