use pimc_geometry::BoxSides;
use pimc_handlers::{
    CompositeHandler, HandlerEnergy, NearestNeighbourPairHandler, NearestNeighbourQuadrupletHandler,
    NearestNeighbourTripletHandler,
};
use pimc_potentials::{
    AxilrodTellerMutoPotential, LennardJonesPotential, PeriodicTripletDistancePotential,
    PeriodicTwoBodyPointPotential,
};

use crate::config::SimulationConfig;
use crate::error::DriverError;

const NDIM: usize = 3;

type PairPotentialFn = Box<dyn Fn(f64) -> f64 + Send + Sync>;
type TripletPotentialFn = Box<dyn Fn(f64, f64, f64) -> f64 + Send + Sync>;
type QuadPotentialFn = Box<dyn Fn(&[f64; 6]) -> f64 + Send + Sync>;

pub type PairHandler = NearestNeighbourPairHandler<PairPotentialFn, NDIM>;
pub type TripletHandler = NearestNeighbourTripletHandler<TripletPotentialFn, NDIM>;
pub type QuadrupletHandler = NearestNeighbourQuadrupletHandler<QuadPotentialFn, NDIM>;

/// The handler composed for the live simulation loop: always a Lennard-Jones pair term, an
/// optional Axilrod-Teller-Muto triplet term, and no quadruplet term (the four-body extrapolated
/// potential needs a trained rescaling model, which is out of scope per §1 and only wired up by
/// the offline `evaluate_worldline` binary).
pub type SimulationHandler = CompositeHandler<PairHandler, TripletHandler, QuadrupletHandler>;
pub type SimulationEnergy = HandlerEnergy<SimulationHandler>;

/// Builds the pair potential shared by both the live simulation handler and the pair energy
/// estimator's independent copy.
fn lennard_jones(box_sides: BoxSides<NDIM>) -> PeriodicTwoBodyPointPotential<PairPotentialFn, NDIM> {
    let lj = LennardJonesPotential::warnecke2010();
    PeriodicTwoBodyPointPotential::new(Box::new(move |r: f64| lj.evaluate(r)) as PairPotentialFn, box_sides)
}

fn axilrod_teller_muto(
    c9_coefficient: f64,
    box_sides: BoxSides<NDIM>,
) -> Result<PeriodicTripletDistancePotential<TripletPotentialFn, NDIM>, DriverError> {
    let atm = AxilrodTellerMutoPotential::new(c9_coefficient)?;
    Ok(PeriodicTripletDistancePotential::new(
        Box::new(move |a: f64, b: f64, c: f64| atm.evaluate(a, b, c)) as TripletPotentialFn,
        box_sides,
    ))
}

pub fn build_simulation_handler(
    config: &SimulationConfig,
    n_particles: usize,
    box_sides: BoxSides<NDIM>,
) -> Result<SimulationHandler, DriverError> {
    let pair = PairHandler::new(lennard_jones(box_sides), n_particles, config.pair_cutoff())?;
    let triplet = if config.enable_triplet {
        Some(TripletHandler::new(
            axilrod_teller_muto(config.c9_coefficient, box_sides)?,
            n_particles,
            config.triplet_cutoff(),
        )?)
    } else {
        None
    };
    Ok(CompositeHandler::new(pair, triplet, None))
}

/// A second, independently-refreshed pair handler instance for [`pimc_estimators::PotentialEnergyEstimator`].
/// Estimators own their handler (they implement `Observer`, which takes no extra mutable state),
/// so they cannot share the adjacency matrix the move performers refresh; this keeps every
/// consumer self-sufficient at the cost of one redundant neighbour search per block.
pub fn build_pair_estimator_handler(
    config: &SimulationConfig,
    n_particles: usize,
    box_sides: BoxSides<NDIM>,
) -> Result<PairHandler, DriverError> {
    Ok(PairHandler::new(lennard_jones(box_sides), n_particles, config.pair_cutoff())?)
}

pub fn build_triplet_estimator_handler(
    config: &SimulationConfig,
    n_particles: usize,
    box_sides: BoxSides<NDIM>,
) -> Result<TripletHandler, DriverError> {
    Ok(TripletHandler::new(
        axilrod_teller_muto(config.c9_coefficient, box_sides)?,
        n_particles,
        config.triplet_cutoff(),
    )?)
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    fn base_config() -> SimulationConfig {
        SimulationConfig {
            first_block_index: 0,
            last_block_index: 10,
            n_equilibrium_blocks: 2,
            n_passes: 1,
            n_timeslices: 8,
            bisection_level: 2,
            centre_of_mass_step_size: 0.1,
            bisection_ratio: 0.5,
            density: 1.0,
            temperature: 2.0,
            lambda: 12.03,
            lattice_constant: 3.6,
            box_side_0: 10.0,
            box_side_1: 10.0,
            box_side_2: 10.0,
            initial_positions_filepath: PathBuf::from("lattice.dat"),
            output_dirpath: PathBuf::from("out"),
            checkpoint_filepath: PathBuf::from("out/checkpoint.toml"),
            prng_state_filepath: PathBuf::from("out/rng.txt"),
            worldline_snapshot_dirpath: PathBuf::from("out/snapshots"),
            writer_batch_size: 5,
            n_save_worldlines_every: 10,
            enable_triplet: true,
            c9_coefficient: 1.0,
            n_rdf_bins: 50,
            rdf_max_distance: 5.0,
        }
    }

    fn box_sides() -> BoxSides<NDIM> {
        BoxSides::new([10.0, 10.0, 10.0]).unwrap()
    }

    #[test]
    fn builds_a_simulation_handler_with_a_triplet_term() {
        let config = base_config();
        let handler = build_simulation_handler(&config, 4, box_sides()).unwrap();
        let _ = handler;
    }

    #[test]
    fn builds_a_simulation_handler_without_a_triplet_term() {
        let mut config = base_config();
        config.enable_triplet = false;
        let handler = build_simulation_handler(&config, 4, box_sides()).unwrap();
        let _ = handler;
    }

    #[test]
    fn builds_independent_pair_and_triplet_estimator_handlers() {
        let config = base_config();
        assert!(build_pair_estimator_handler(&config, 4, box_sides()).is_ok());
        assert!(build_triplet_estimator_handler(&config, 4, box_sides()).is_ok());
    }

    #[test]
    fn rejects_a_non_positive_cutoff() {
        let mut config = base_config();
        config.lattice_constant = 0.0;
        assert!(build_pair_estimator_handler(&config, 4, box_sides()).is_err());
    }
}
