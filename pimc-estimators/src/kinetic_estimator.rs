use std::any::Any;

use pimc_sim::Observer;
use pimc_worldlines::Worldlines;

/// Primitive kinetic energy estimator.
///
/// `E_kin = N*P*NDIM/(2*tau) - 1/(4*lambda*tau^2) * sum_{i,t} (x_{i,t+1} - x_{i,t})^2`, the
/// standard primitive-action estimator for the total kinetic energy of `N` worldlines discretized
/// into `P` timeslices, summed over every particle and every adjacent bead pair of the (closed)
/// imaginary-time ring.
pub struct PrimitiveKineticEstimator<const NDIM: usize> {
    lambda: f64,
    tau: f64,
    name: String,
    values: Vec<f64>,
}

impl<const NDIM: usize> PrimitiveKineticEstimator<NDIM> {
    pub fn new(lambda: f64, tau: f64) -> Self {
        PrimitiveKineticEstimator { lambda, tau, name: "kinetic".to_string(), values: Vec::new() }
    }

    pub fn values(&self) -> &[f64] {
        &self.values
    }

    pub fn drain_values(&mut self) -> Vec<f64> {
        std::mem::take(&mut self.values)
    }
}

impl<const NDIM: usize> Observer for PrimitiveKineticEstimator<NDIM> {
    type S = Worldlines<NDIM>;

    fn observe(&mut self, worldlines: &Worldlines<NDIM>) {
        let n_particles = worldlines.n_particles();
        let n_timeslices = worldlines.n_timeslices();
        let classical = (NDIM * n_particles * n_timeslices) as f64 / (2.0 * self.tau);

        let mut spring_sum = 0.0;
        for i in 0..n_particles {
            for t in 0..n_timeslices {
                let t_next = (t + 1) % n_timeslices;
                let delta = worldlines.get(t_next, i) - worldlines.get(t, i);
                spring_sum += delta.norm_squared();
            }
        }
        let quantum = spring_sum / (4.0 * self.lambda * self.tau * self.tau);

        self.values.push(classical - quantum);
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
    use pimc_geometry::Point;

    #[test]
    fn static_worldlines_yield_the_purely_classical_term() {
        let positions = vec![Point::<2>::new([0.0, 0.0]), Point::<2>::new([1.0, 0.0])];
        let wl = Worldlines::<2>::from_initial_positions(4, positions).unwrap();
        let mut est = PrimitiveKineticEstimator::<2>::new(1.0, 0.1);
        est.observe(&wl);
        let expected = (2 * 2 * 4) as f64 / (2.0 * 0.1);
        assert!((est.values()[0] - expected).abs() < 1e-10);
    }

    #[test]
    fn drain_values_empties_the_buffer() {
        let positions = vec![Point::<2>::new([0.0, 0.0])];
        let wl = Worldlines::<2>::from_initial_positions(2, positions).unwrap();
        let mut est = PrimitiveKineticEstimator::<2>::new(1.0, 0.1);
        est.observe(&wl);
        est.observe(&wl);
        assert_eq!(est.drain_values().len(), 2);
        assert!(est.values().is_empty());
    }
}
