use std::any::Any;

use pimc_geometry::{distance_periodic, BoxSides, Point};
use pimc_grids::Histogram;
use pimc_sim::Observer;
use pimc_worldlines::Worldlines;

/// Bins periodic pairwise distances into a [`Histogram`], either of every bead pair within each
/// timeslice (the bead radial distribution function) or of particle centroids (the centroid
/// radial distribution function). Shell-volume normalization is a write-time concern left to the
/// writer that eventually serializes the histogram.
pub struct RadialDistributionEstimator<const NDIM: usize> {
    box_sides: BoxSides<NDIM>,
    histogram: Histogram,
    use_centroids: bool,
    name: String,
}

impl<const NDIM: usize> RadialDistributionEstimator<NDIM> {
    pub fn new(box_sides: BoxSides<NDIM>, histogram: Histogram, use_centroids: bool) -> Self {
        let name = if use_centroids { "centroid_rdf".to_string() } else { "rdf".to_string() };
        RadialDistributionEstimator { box_sides, histogram, use_centroids, name }
    }

    pub fn histogram(&self) -> &Histogram {
        &self.histogram
    }

    fn bin_all_pairs(&mut self, points: &[Point<NDIM>]) {
        for a in 0..points.len() {
            for b in (a + 1)..points.len() {
                let d = distance_periodic(&points[a], &points[b], &self.box_sides);
                let _ = self.histogram.add(d, 1);
            }
        }
    }
}

impl<const NDIM: usize> Observer for RadialDistributionEstimator<NDIM> {
    type S = Worldlines<NDIM>;

    fn observe(&mut self, worldlines: &Worldlines<NDIM>) {
        if self.use_centroids {
            let centroids: Vec<Point<NDIM>> = (0..worldlines.n_particles()).map(|i| worldlines.centroid(i)).collect();
            self.bin_all_pairs(&centroids);
        } else {
            for t in 0..worldlines.n_timeslices() {
                let slice = worldlines.timeslice(t).to_vec();
                self.bin_all_pairs(&slice);
            }
        }
    }

    fn flush(&mut self) {}

    fn name(&self) -> &str {
        &self.name
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}
