use std::any::Any;

use pimc_geometry::{distance_periodic, distance_squared_periodic, BoxSides, Point};
use pimc_sim::Observer;
use pimc_worldlines::Worldlines;

use crate::error::EstimatorError;

/// Mean periodic distance (or squared distance) between each particle's centroid and its lattice
/// reference position, averaged over particles.
pub struct CentroidDistanceEstimator<const NDIM: usize> {
    lattice_positions: Vec<Point<NDIM>>,
    box_sides: BoxSides<NDIM>,
    squared: bool,
    name: String,
    values: Vec<f64>,
}

impl<const NDIM: usize> CentroidDistanceEstimator<NDIM> {
    /// `n_particles` is the particle count of every `Worldlines` this estimator will ever
    /// observe; it is checked once here rather than on every `observe()` call.
    pub fn new(
        lattice_positions: Vec<Point<NDIM>>,
        box_sides: BoxSides<NDIM>,
        squared: bool,
        n_particles: usize,
    ) -> Result<Self, EstimatorError> {
        if lattice_positions.len() != n_particles {
            return Err(EstimatorError::LatticeSizeMismatch { found: lattice_positions.len(), expected: n_particles });
        }
        Ok(CentroidDistanceEstimator {
            lattice_positions,
            box_sides,
            squared,
            name: if squared { "centroid_rms".to_string() } else { "centroid_abs".to_string() },
            values: Vec::new(),
        })
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn drain_values(&mut self) -> Vec<f64> {
        std::mem::take(&mut self.values)
    }
}

impl<const NDIM: usize> Observer for CentroidDistanceEstimator<NDIM> {
    type S = Worldlines<NDIM>;

    fn observe(&mut self, worldlines: &Worldlines<NDIM>) {
        let n_particles = worldlines.n_particles();
        let mut sum = 0.0;
        for i in 0..n_particles {
            let centroid = worldlines.centroid(i);
            sum += if self.squared {
                distance_squared_periodic(&centroid, &self.lattice_positions[i], &self.box_sides)
            } else {
                distance_periodic(&centroid, &self.lattice_positions[i], &self.box_sides)
            };
        }
        self.values.push(sum / n_particles as f64);
    }

    fn flush(&mut self) {
        self.values.clear();
    }

    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stationary_centroid_gives_zero_distance() {
        let lattice = vec![Point::<2>::new([0.0, 0.0]), Point::<2>::new([1.0, 0.0])];
        let box_sides = BoxSides::<2>::new([10.0, 10.0]).unwrap();
        let wl = Worldlines::<2>::from_initial_positions(4, lattice.clone()).unwrap();
        let mut est = CentroidDistanceEstimator::new(lattice, box_sides, true, 2).unwrap();
        est.observe(&wl);
        assert_eq!(est.values()[0], 0.0);
    }

    #[test]
    fn rejects_mismatched_lattice_size() {
        let lattice = vec![Point::<2>::new([0.0, 0.0])];
        let box_sides = BoxSides::<2>::new([10.0, 10.0]).unwrap();
        assert!(CentroidDistanceEstimator::new(lattice, box_sides, false, 2).is_err());
    }
}
