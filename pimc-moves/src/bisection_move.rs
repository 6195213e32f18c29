use std::ops::Range;

use pimc_geometry::Point;
use pimc_montecarlo::{AcceptanceCriterion, AcceptanceStatistics, EngineRng, Mover};
use pimc_sim::{Energy, System};
use pimc_worldlines::Worldlines;

use crate::bisection_level_manager::BisectionLevelManager;
use crate::error::MoveError;

/// Multi-level bisection move: with probability `upper_level_frac` operates at
/// `lower_level + 1`, otherwise at `lower_level`. Within a level, each sublevel's midpoints are
/// proposed and accepted/rejected together (via whole-worldline energy recompute, since
/// unperturbed timeslices contribute identically before and after and cancel in the acceptance
/// ratio); any sublevel rejection aborts the whole move and restores every bead the move had
/// touched.
pub struct BisectionMove {
    upper_level_frac: f64,
    lower_level: usize,
    lambda: f64,
    tau: f64,
    rng: EngineRng,
    succ_rate: AcceptanceStatistics,
}

impl BisectionMove {
    pub fn new(upper_level_frac: f64, lower_level: usize, lambda: f64, tau: f64) -> Result<Self, MoveError> {
        Self::from_seed(upper_level_frac, lower_level, lambda, tau, rand_seed())
    }

    pub fn from_seed(
        upper_level_frac: f64,
        lower_level: usize,
        lambda: f64,
        tau: f64,
        seed: u64,
    ) -> Result<Self, MoveError> {
        if lower_level < 1 {
            return Err(MoveError::LowerLevelTooSmall(lower_level));
        }
        if !(0.0..1.0).contains(&upper_level_frac) {
            return Err(MoveError::UpperLevelFracOutOfRange(upper_level_frac));
        }
        Ok(BisectionMove {
            upper_level_frac,
            lower_level,
            lambda,
            tau,
            rng: EngineRng::from_seed(seed),
            succ_rate: AcceptanceStatistics::default(),
        })
    }

    pub fn level_params(&self) -> (f64, usize) {
        (self.upper_level_frac, self.lower_level)
    }

    pub fn set_level_params(&mut self, upper_level_frac: f64, lower_level: usize) {
        self.upper_level_frac = upper_level_frac;
        self.lower_level = lower_level.max(1);
    }

    pub fn rng_seed_state(&self) -> (u64, u64) {
        self.rng.seed_state()
    }

    pub fn restore_rng(&mut self, seed: u64, draws: u64) {
        self.rng = EngineRng::restore(seed, draws);
    }
}

impl<E, const NDIM: usize> Mover<Worldlines<NDIM>, E> for BisectionMove
where
    E: Energy<Worldlines<NDIM>>,
{
    fn perturb(
        &mut self,
        system: &mut Worldlines<NDIM>,
        energy: &E,
        acc: &mut dyn AcceptanceCriterion,
    ) -> Option<Range<usize>> {
        let level = if self.rng.gen_bool(self.upper_level_frac) { self.lower_level + 1 } else { self.lower_level };

        let n_particles = system.get_size();
        let n_timeslices = system.n_timeslices();
        let i = self.rng.gen_index(n_particles);
        let t0 = self.rng.gen_index(n_timeslices);
        let manager = BisectionLevelManager::new(level, t0, n_timeslices);

        let cached: Vec<(usize, Point<NDIM>)> =
            manager.segment_timeslices().into_iter().map(|t| (t, system.get(t, i))).collect();

        for s in 0..manager.n_sublevels() {
            let triples = manager.triples_at_sublevel(s);
            let sigma = manager.sigma(s, self.lambda, self.tau);

            let old_energy = energy.energy_by_pos(system, i);
            let proposed: Vec<(usize, Point<NDIM>)> = triples
                .iter()
                .map(|&(left, mid, right)| {
                    let midpoint = (system.get(left, i) + system.get(right, i)) / 2.0;
                    let mut value = midpoint;
                    for k in 0..NDIM {
                        value[k] += self.rng.gen_gaussian(sigma);
                    }
                    (mid, value)
                })
                .collect();

            for &(mid, value) in &proposed {
                system.set(mid, i, value);
            }

            let new_energy = energy.energy_by_pos(system, i);
            if !acc.check(old_energy, new_energy) {
                for &(t, bead) in &cached {
                    system.set(t, i, bead);
                }
                self.succ_rate.n_failed += 1;
                return None;
            }
        }

        self.succ_rate.n_succ += 1;
        Some(i..i)
    }

    fn acceptance_statistics(&self) -> AcceptanceStatistics {
        self.succ_rate.clone()
    }

    fn max_range(&self) -> f64 {
        self.upper_level_frac
    }

    fn set_max_range(&mut self, new_val: f64) {
        self.upper_level_frac = new_val.clamp(0.0, 1.0 - f64::EPSILON);
    }
}

fn rand_seed() -> u64 {
    use rand::Rng;
    rand::thread_rng().gen()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pimc_geometry::BoxSides;
    use pimc_handlers::{FullPairHandler, HandlerEnergy};
    use pimc_montecarlo::MetropolisCriterion;
    use pimc_potentials::PeriodicTwoBodyPointPotential;

    #[test]
    fn accepted_move_only_touches_interior_beads_of_the_segment() {
        let box_sides = BoxSides::<2>::new([50.0, 50.0]).unwrap();
        let handler = FullPairHandler::new(PeriodicTwoBodyPointPotential::new(|_: f64| 0.0, box_sides));
        let energy = HandlerEnergy::new(handler, "pair");

        let positions = vec![Point::<2>::new([0.0, 0.0]), Point::<2>::new([5.0, 5.0])];
        let mut wl = Worldlines::<2>::from_initial_positions(8, positions).unwrap();
        let before = wl.clone();
        let mut mover = BisectionMove::from_seed(0.0, 2, 1.0, 0.1, 1).unwrap();
        let mut acc = MetropolisCriterion::new(1.0);

        let moved = mover.perturb(&mut wl, &energy, &mut acc).unwrap();
        let i = moved.start;
        let mut n_changed = 0;
        for t in 0..wl.n_timeslices() {
            if wl.get(t, i) != before.get(t, i) {
                n_changed += 1;
            }
        }
        // level 2 -> 2^2 - 1 = 3 interior beads moved
        assert_eq!(n_changed, 3);
        assert_eq!(mover.acceptance_statistics().n_succ, 1);
    }

    #[test]
    fn rejects_invalid_construction_parameters() {
        assert!(BisectionMove::new(0.5, 0, 1.0, 0.1).is_err());
        assert!(BisectionMove::new(1.0, 2, 1.0, 0.1).is_err());
    }
}
