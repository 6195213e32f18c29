use std::ops::Range;

use pimc_geometry::Point;
use pimc_montecarlo::{AcceptanceCriterion, AcceptanceStatistics, EngineRng, Mover};
use pimc_sim::{Energy, System};
use pimc_worldlines::Worldlines;

use crate::error::MoveError;

/// Translates every bead of a randomly chosen particle's worldline by the same random
/// displacement drawn from `[-s, s)^NDIM`.
pub struct CenterOfMassMove<const NDIM: usize> {
    max_step: f64,
    rng: EngineRng,
    succ_rate: AcceptanceStatistics,
}

impl<const NDIM: usize> CenterOfMassMove<NDIM> {
    pub fn new(max_step: f64) -> Result<Self, MoveError> {
        Self::from_seed(max_step, rand_seed())
    }

    pub fn from_seed(max_step: f64, seed: u64) -> Result<Self, MoveError> {
        if max_step <= 0.0 {
            return Err(MoveError::NonPositiveStepSize(max_step));
        }
        Ok(CenterOfMassMove { max_step, rng: EngineRng::from_seed(seed), succ_rate: AcceptanceStatistics::default() })
    }

    pub fn rng_seed_state(&self) -> (u64, u64) {
        self.rng.seed_state()
    }

    pub fn restore_rng(&mut self, seed: u64, draws: u64) {
        self.rng = EngineRng::restore(seed, draws);
    }
}

impl<E, const NDIM: usize> Mover<Worldlines<NDIM>, E> for CenterOfMassMove<NDIM>
where
    E: Energy<Worldlines<NDIM>>,
{
    fn perturb(
        &mut self,
        system: &mut Worldlines<NDIM>,
        energy: &E,
        acc: &mut dyn AcceptanceCriterion,
    ) -> Option<Range<usize>> {
        let i = self.rng.gen_index(system.get_size());

        let old_energy = energy.energy_by_pos(system, i);
        let old_worldline: Vec<Point<NDIM>> = system.worldline(i).collect();

        let mut displacement = Point::<NDIM>::origin();
        for k in 0..NDIM {
            displacement[k] = self.rng.gen_range(-self.max_step, self.max_step);
        }
        for t in 0..system.n_timeslices() {
            let moved = system.get(t, i) + displacement;
            system.set(t, i, moved);
        }

        let new_energy = energy.energy_by_pos(system, i);
        if acc.check(old_energy, new_energy) {
            self.succ_rate.n_succ += 1;
            Some(i..i)
        } else {
            for (t, bead) in old_worldline.into_iter().enumerate() {
                system.set(t, i, bead);
            }
            self.succ_rate.n_failed += 1;
            None
        }
    }

    fn acceptance_statistics(&self) -> AcceptanceStatistics {
        self.succ_rate.clone()
    }

    fn max_range(&self) -> f64 {
        self.max_step
    }

    fn set_max_range(&mut self, new_val: f64) {
        self.max_step = new_val;
    }
}

/// Single non-reproducible seed draw used only when a mover is built without an explicit seed
/// (outside of a checkpointed simulation run).
fn rand_seed() -> u64 {
    use rand::Rng;
    rand::thread_rng().gen()
}
