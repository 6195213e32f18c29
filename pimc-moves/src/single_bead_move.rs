use std::ops::Range;

use pimc_montecarlo::{AcceptanceCriterion, AcceptanceStatistics, EngineRng, Mover};
use pimc_sim::{Energy, System};
use pimc_worldlines::Worldlines;

use crate::error::MoveError;

/// Displaces a single bead to the midpoint of its two imaginary-time neighbours plus Gaussian
/// noise with standard deviation `sigma_scale * sqrt(lambda * tau)`.
pub struct SingleBeadMove {
    lambda: f64,
    tau: f64,
    sigma_scale: f64,
    rng: EngineRng,
    succ_rate: AcceptanceStatistics,
}

impl SingleBeadMove {
    pub fn new(lambda: f64, tau: f64) -> Result<Self, MoveError> {
        Self::from_seed(lambda, tau, rand_seed())
    }

    pub fn from_seed(lambda: f64, tau: f64, seed: u64) -> Result<Self, MoveError> {
        if lambda <= 0.0 || tau <= 0.0 {
            return Err(MoveError::NonPositiveStepSize(lambda.min(tau)));
        }
        Ok(SingleBeadMove {
            lambda,
            tau,
            sigma_scale: 1.0,
            rng: EngineRng::from_seed(seed),
            succ_rate: AcceptanceStatistics::default(),
        })
    }

    fn sigma(&self) -> f64 {
        (self.sigma_scale * self.lambda * self.tau).sqrt()
    }

    pub fn rng_seed_state(&self) -> (u64, u64) {
        self.rng.seed_state()
    }

    pub fn restore_rng(&mut self, seed: u64, draws: u64) {
        self.rng = EngineRng::restore(seed, draws);
    }
}

impl<E, const NDIM: usize> Mover<Worldlines<NDIM>, E> for SingleBeadMove
where
    E: Energy<Worldlines<NDIM>>,
{
    fn perturb(
        &mut self,
        system: &mut Worldlines<NDIM>,
        energy: &E,
        acc: &mut dyn AcceptanceCriterion,
    ) -> Option<Range<usize>> {
        let n_timeslices = system.n_timeslices();
        let i = self.rng.gen_index(system.get_size());
        let t = self.rng.gen_index(n_timeslices);
        let t_minus = (t + n_timeslices - 1) % n_timeslices;
        let t_plus = (t + 1) % n_timeslices;

        let old_bead = system.get(t, i);
        let old_energy = energy.energy_by_pos(system, i);

        let midpoint = (system.get(t_minus, i) + system.get(t_plus, i)) / 2.0;
        let sigma = self.sigma();
        let mut proposed = midpoint;
        for k in 0..NDIM {
            proposed[k] += self.rng.gen_gaussian(sigma);
        }
        system.set(t, i, proposed);

        let new_energy = energy.energy_by_pos(system, i);
        if acc.check(old_energy, new_energy) {
            self.succ_rate.n_succ += 1;
            Some(i..i)
        } else {
            system.set(t, i, old_bead);
            self.succ_rate.n_failed += 1;
            None
        }
    }

    fn acceptance_statistics(&self) -> AcceptanceStatistics {
        self.succ_rate.clone()
    }

    fn max_range(&self) -> f64 {
        self.sigma_scale
    }

    fn set_max_range(&mut self, new_val: f64) {
        self.sigma_scale = new_val;
    }
}

fn rand_seed() -> u64 {
    use rand::Rng;
    rand::thread_rng().gen()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pimc_geometry::{BoxSides, Point};
    use pimc_handlers::{FullPairHandler, HandlerEnergy};
    use pimc_montecarlo::MetropolisCriterion;
    use pimc_potentials::PeriodicTwoBodyPointPotential;

    #[test]
    fn accepted_move_leaves_neighbouring_beads_untouched() {
        let box_sides = BoxSides::<2>::new([50.0, 50.0]).unwrap();
        let handler = FullPairHandler::new(PeriodicTwoBodyPointPotential::new(|_: f64| 0.0, box_sides));
        let energy = HandlerEnergy::new(handler, "pair");

        let positions = vec![Point::<2>::new([0.0, 0.0]), Point::<2>::new([5.0, 5.0])];
        let mut wl = Worldlines::<2>::from_initial_positions(4, positions).unwrap();
        let before = wl.clone();
        let mut mover = SingleBeadMove::from_seed(1.0, 0.1, 1).unwrap();
        let mut acc = MetropolisCriterion::new(1.0);

        let moved = mover.perturb(&mut wl, &energy, &mut acc).unwrap();
        let i = moved.start;
        let mut n_changed = 0;
        for t in 0..wl.n_timeslices() {
            if wl.get(t, i) != before.get(t, i) {
                n_changed += 1;
            }
        }
        assert_eq!(n_changed, 1, "single-bead move must touch exactly one timeslice");
    }

    #[test]
    fn rejects_non_positive_physical_constants() {
        assert!(SingleBeadMove::new(0.0, 1.0).is_err());
        assert!(SingleBeadMove::new(1.0, 0.0).is_err());
    }
}
