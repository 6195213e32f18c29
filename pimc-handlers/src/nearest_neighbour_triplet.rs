use pimc_geometry::BoxSides;
use pimc_potentials::PeriodicTripletDistancePotential;
use pimc_worldlines::{refresh_centroid_adjacency, AdjacencyMatrix, Worldlines};

use crate::error::HandlerError;
use crate::trait_worldline_energy::{RefreshableHandler, WorldlineEnergy};

/// Same as [`crate::FullTripletHandler`] but restricted to unordered pairs drawn from `i`'s
/// adjacency row, forming the triple `(i, j, k)`.
pub struct NearestNeighbourTripletHandler<P, const NDIM: usize> {
    potential: PeriodicTripletDistancePotential<P, NDIM>,
    adjacency: AdjacencyMatrix,
    cutoff: f64,
}

impl<P, const NDIM: usize> NearestNeighbourTripletHandler<P, NDIM>
where
    P: Fn(f64, f64, f64) -> f64,
{
    pub fn new(
        potential: PeriodicTripletDistancePotential<P, NDIM>,
        n_particles: usize,
        cutoff: f64,
    ) -> Result<Self, HandlerError> {
        if cutoff <= 0.0 {
            return Err(HandlerError::NonPositiveCutoff(cutoff));
        }
        Ok(NearestNeighbourTripletHandler { potential, adjacency: AdjacencyMatrix::new(n_particles), cutoff })
    }
}

impl<P, const NDIM: usize> WorldlineEnergy<NDIM> for NearestNeighbourTripletHandler<P, NDIM>
where
    P: Fn(f64, f64, f64) -> f64,
{
    fn bead_energy(&self, worldlines: &Worldlines<NDIM>, i: usize, t: usize) -> f64 {
        let slice = worldlines.timeslice(t);
        let pi = slice[i];
        let row = self.adjacency.neighbours(i);
        let mut sum = 0.0;
        for (a, &j) in row.iter().enumerate() {
            for &k in &row[a + 1..] {
                sum += self.potential.within_box_cutoff(&pi, &slice[j], &slice[k]);
            }
        }
        sum
    }
}

impl<P, const NDIM: usize> RefreshableHandler<NDIM> for NearestNeighbourTripletHandler<P, NDIM> {
    fn refresh(&mut self, worldlines: &Worldlines<NDIM>, box_sides: &BoxSides<NDIM>) {
        refresh_centroid_adjacency(worldlines, box_sides, &mut self.adjacency, self.cutoff);
    }

    fn adjacency_matrix(&self) -> Option<&AdjacencyMatrix> {
        Some(&self.adjacency)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pimc_geometry::Point;

    #[test]
    fn bead_energy_counts_every_unordered_pair_in_the_row() {
        let positions = vec![
            Point::<2>::new([0.0, 0.0]),
            Point::<2>::new([1.0, 0.0]),
            Point::<2>::new([0.0, 1.0]),
            Point::<2>::new([1.0, 1.0]),
        ];
        let wl = Worldlines::<2>::from_initial_positions(1, positions).unwrap();
        let box_sides = BoxSides::<2>::new([20.0, 20.0]).unwrap();
        let mut handler = NearestNeighbourTripletHandler::new(
            PeriodicTripletDistancePotential::new(|_, _, _| 1.0, box_sides),
            4,
            2.0,
        )
        .unwrap();
        handler.refresh(&wl, &box_sides);
        // particles 1,2,3 are all within the cutoff of 0 -> C(3,2) = 3 triples
        assert_eq!(handler.bead_energy(&wl, 0, 0), 3.0);
    }
}
