use pimc_geometry::BoxSides;
use pimc_potentials::PeriodicTwoBodyPointPotential;
use pimc_worldlines::{refresh_centroid_adjacency, AdjacencyMatrix, Worldlines};

use crate::error::HandlerError;
use crate::trait_worldline_energy::{RefreshableHandler, WorldlineEnergy};

/// Same as [`crate::FullPairHandler`] but restricted to the particles listed in `i`'s row of a
/// centroid adjacency matrix, refreshed once per block (or more often, if the cutoff is tight).
pub struct NearestNeighbourPairHandler<P, const NDIM: usize> {
    potential: PeriodicTwoBodyPointPotential<P, NDIM>,
    adjacency: AdjacencyMatrix,
    cutoff: f64,
}

impl<P, const NDIM: usize> NearestNeighbourPairHandler<P, NDIM>
where
    P: Fn(f64) -> f64,
{
    pub fn new(
        potential: PeriodicTwoBodyPointPotential<P, NDIM>,
        n_particles: usize,
        cutoff: f64,
    ) -> Result<Self, HandlerError> {
        if cutoff <= 0.0 {
            return Err(HandlerError::NonPositiveCutoff(cutoff));
        }
        Ok(NearestNeighbourPairHandler { potential, adjacency: AdjacencyMatrix::new(n_particles), cutoff })
    }
}

impl<P, const NDIM: usize> WorldlineEnergy<NDIM> for NearestNeighbourPairHandler<P, NDIM>
where
    P: Fn(f64) -> f64,
{
    fn bead_energy(&self, worldlines: &Worldlines<NDIM>, i: usize, t: usize) -> f64 {
        let slice = worldlines.timeslice(t);
        let pi = slice[i];
        self.adjacency
            .neighbours(i)
            .iter()
            .map(|&j| self.potential.within_box_cutoff(&pi, &slice[j]))
            .sum()
    }
}

impl<P, const NDIM: usize> RefreshableHandler<NDIM> for NearestNeighbourPairHandler<P, NDIM> {
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
    fn bead_energy_uses_only_adjacency_row() {
        let positions = vec![
            Point::<2>::new([0.0, 0.0]),
            Point::<2>::new([1.0, 0.0]),
            Point::<2>::new([5.0, 5.0]),
        ];
        let wl = Worldlines::<2>::from_initial_positions(1, positions).unwrap();
        let box_sides = BoxSides::<2>::new([20.0, 20.0]).unwrap();
        let mut handler =
            NearestNeighbourPairHandler::new(PeriodicTwoBodyPointPotential::new(|_: f64| 1.0, box_sides), 3, 2.0)
                .unwrap();
        handler.refresh(&wl, &box_sides);
        // particle 2 is out of range, so only particle 1 contributes
        assert_eq!(handler.bead_energy(&wl, 0, 0), 1.0);
    }

    #[test]
    fn rejects_non_positive_cutoff() {
        let box_sides = BoxSides::<2>::new([10.0, 10.0]).unwrap();
        let result =
            NearestNeighbourPairHandler::new(PeriodicTwoBodyPointPotential::new(|_: f64| 1.0, box_sides), 3, 0.0);
        assert!(result.is_err());
    }
}
