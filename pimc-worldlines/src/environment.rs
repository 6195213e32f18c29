/// Derived thermodynamic constants shared by every move performer and estimator.
///
/// `beta = 1/(k_B T)`, `tau = beta / n_timeslices` is the imaginary-time step between adjacent
/// beads, and `lambda = hbar^2 / (2m)` sets the free-particle diffusion constant used by the
/// single-bead and bisection proposal distributions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Environment {
    beta: f64,
    tau: f64,
    lambda: f64,
    n_particles: usize,
    n_timeslices: usize,
}

impl Environment {
    pub fn new(temperature: f64, lambda: f64, n_particles: usize, n_timeslices: usize) -> Self {
        let beta = 1.0 / temperature;
        let tau = beta / n_timeslices as f64;
        Environment {
            beta,
            tau,
            lambda,
            n_particles,
            n_timeslices,
        }
    }

    pub fn beta(&self) -> f64 {
        self.beta
    }

    pub fn tau(&self) -> f64 {
        self.tau
    }

    pub fn lambda(&self) -> f64 {
        self.lambda
    }

    pub fn n_particles(&self) -> usize {
        self.n_particles
    }

    pub fn n_timeslices(&self) -> usize {
        self.n_timeslices
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tau_is_beta_over_timeslice_count() {
        let env = Environment::new(2.0, 0.5, 10, 8);
        assert_eq!(env.beta(), 0.5);
        assert!((env.tau() - 0.0625).abs() < 1e-12);
    }
}
