use pimc_geometry::{distance, shift_points_together, BoxSides};
use pimc_worldlines::{refresh_centroid_adjacency, AdjacencyMatrix, Worldlines};

use crate::error::HandlerError;
use crate::trait_worldline_energy::{RefreshableHandler, WorldlineEnergy};

/// Sums a four-body potential over every unordered triple drawn from `i`'s adjacency row,
/// forming the quadruplet `(i, j, k, l)`. The potential is evaluated on the six pairwise
/// distances `[d_ij, d_ik, d_il, d_jk, d_jl, d_kl]`, already folded to the minimum image.
pub struct NearestNeighbourQuadrupletHandler<P, const NDIM: usize> {
    potential: P,
    box_sides: BoxSides<NDIM>,
    adjacency: AdjacencyMatrix,
    cutoff: f64,
}

impl<P, const NDIM: usize> NearestNeighbourQuadrupletHandler<P, NDIM>
where
    P: Fn(&[f64; 6]) -> f64,
{
    pub fn new(
        potential: P,
        box_sides: BoxSides<NDIM>,
        n_particles: usize,
        cutoff: f64,
    ) -> Result<Self, HandlerError> {
        if cutoff <= 0.0 {
            return Err(HandlerError::NonPositiveCutoff(cutoff));
        }
        Ok(NearestNeighbourQuadrupletHandler {
            potential,
            box_sides,
            adjacency: AdjacencyMatrix::new(n_particles),
            cutoff,
        })
    }
}

impl<P, const NDIM: usize> WorldlineEnergy<NDIM> for NearestNeighbourQuadrupletHandler<P, NDIM>
where
    P: Fn(&[f64; 6]) -> f64,
{
    fn bead_energy(&self, worldlines: &Worldlines<NDIM>, i: usize, t: usize) -> f64 {
        let slice = worldlines.timeslice(t);
        let pi = slice[i];
        let row = self.adjacency.neighbours(i);
        let mut sum = 0.0;
        for (a, &j) in row.iter().enumerate() {
            for (b, &k) in row[a + 1..].iter().enumerate() {
                for &l in &row[a + 1 + b + 1..] {
                    let points = [pi, slice[j], slice[k], slice[l]];
                    let shifted = shift_points_together(0, &self.box_sides, &points);
                    let sides = [
                        distance(&shifted[0], &shifted[1]),
                        distance(&shifted[0], &shifted[2]),
                        distance(&shifted[0], &shifted[3]),
                        distance(&shifted[1], &shifted[2]),
                        distance(&shifted[1], &shifted[3]),
                        distance(&shifted[2], &shifted[3]),
                    ];
                    sum += (self.potential)(&sides);
                }
            }
        }
        sum
    }
}

impl<P, const NDIM: usize> RefreshableHandler<NDIM> for NearestNeighbourQuadrupletHandler<P, NDIM> {
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
    fn bead_energy_counts_every_unordered_triple_in_the_row() {
        let positions = vec![
            Point::<3>::new([0.0, 0.0, 0.0]),
            Point::<3>::new([1.0, 0.0, 0.0]),
            Point::<3>::new([0.0, 1.0, 0.0]),
            Point::<3>::new([0.0, 0.0, 1.0]),
            Point::<3>::new([1.0, 1.0, 1.0]),
        ];
        let wl = Worldlines::<3>::from_initial_positions(1, positions).unwrap();
        let box_sides = BoxSides::<3>::new([20.0, 20.0, 20.0]).unwrap();
        let mut handler =
            NearestNeighbourQuadrupletHandler::new(|_: &[f64; 6]| 1.0, box_sides, 5, 2.0).unwrap();
        handler.refresh(&wl, &box_sides);
        // particles 1,2,3,4 all within cutoff of 0 -> C(4,3) = 4 quadruplets
        assert_eq!(handler.bead_energy(&wl, 0, 0), 4.0);
    }
}
