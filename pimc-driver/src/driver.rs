use std::path::PathBuf;
use std::time::Instant;

use log::{debug, info};

use pimc_estimators::{CentroidDistanceEstimator, PotentialEnergyEstimator, PrimitiveKineticEstimator};
use pimc_geometry::BoxSides;
use pimc_grids::{Histogram, OutOfRangePolicy};
use pimc_handlers::RefreshableHandler;
use pimc_io::{BufferedBlockWriter, Checkpoint};
use pimc_montecarlo::{MetropolisCriterion, Mover};
use pimc_moves::{
    AcceptPercentageRange, BisectionLevelMoveAdjuster, BisectionMove, CenterOfMassMove, DirectionIfAcceptTooLow,
    MoveSuccessTracker, NoMovesPolicy, SingleBeadMove, SingleValueMoveAdjuster,
};
use pimc_sim::Observer;
use pimc_worldlines::{Environment, Worldlines};

use crate::config::SimulationConfig;
use crate::error::DriverError;
use crate::handlers::{
    build_pair_estimator_handler, build_simulation_handler, build_triplet_estimator_handler, SimulationEnergy,
};
use crate::lattice::read_initial_positions;

const NDIM: usize = 3;

/// The RNG draw count and seed of every named source, persisted together so a resumed run's
/// draws are indistinguishable from an uninterrupted one.
struct RngRoster {
    com: CenterOfMassMove<NDIM>,
    single_bead: SingleBeadMove,
    bisection: BisectionMove,
    criterion: MetropolisCriterion,
}

impl RngRoster {
    fn seed_states(&self) -> Vec<(String, u64, u64)> {
        let (com_seed, com_draws) = self.com.rng_seed_state();
        let (sb_seed, sb_draws) = self.single_bead.rng_seed_state();
        let (bi_seed, bi_draws) = self.bisection.rng_seed_state();
        let (mc_seed, mc_draws) = self.criterion.rng_seed_state();
        vec![
            ("com_move".to_string(), com_seed, com_draws),
            ("single_bead_move".to_string(), sb_seed, sb_draws),
            ("bisection_move".to_string(), bi_seed, bi_draws),
            ("metropolis".to_string(), mc_seed, mc_draws),
        ]
    }

    fn restore(&mut self, states: &[(String, u64, u64)]) {
        for (name, seed, draws) in states {
            match name.as_str() {
                "com_move" => self.com.restore_rng(*seed, *draws),
                "single_bead_move" => self.single_bead.restore_rng(*seed, *draws),
                "bisection_move" => self.bisection.restore_rng(*seed, *draws),
                "metropolis" => self.criterion = MetropolisCriterion::from_seed_state(self.criterion.temperature, *seed, *draws),
                _ => {}
            }
        }
    }
}

/// Runs the configured block/pass schedule end to end: equilibration, production, periodic
/// flushing, and a final flush of whatever production data the last partial batch accumulated.
pub fn run(config: &SimulationConfig) -> Result<(), DriverError> {
    std::fs::create_dir_all(&config.output_dirpath).map_err(pimc_io::EngineError::from)?;
    std::fs::create_dir_all(&config.worldline_snapshot_dirpath).map_err(pimc_io::EngineError::from)?;

    let box_sides = BoxSides::<NDIM>::new([config.box_side_0, config.box_side_1, config.box_side_2])?;
    let lattice_positions = read_initial_positions(&config.initial_positions_filepath)?;
    let n_particles = lattice_positions.len();

    let checkpoint = if config.checkpoint_filepath.exists() {
        Checkpoint::read(&config.checkpoint_filepath)?
    } else {
        Checkpoint::fresh()
    };

    let mut worldlines = if checkpoint.is_at_least_one_worldline_index_saved {
        let path = snapshot_path(&config.worldline_snapshot_dirpath, checkpoint.most_recent_saved_worldline_index);
        let (_, restored, _) = pimc_io::read_worldline_snapshot::<NDIM>(&path)?;
        restored
    } else {
        Worldlines::<NDIM>::from_initial_positions(config.n_timeslices, lattice_positions.clone())?
    };

    let environment = Environment::new(config.temperature, config.lambda, n_particles, config.n_timeslices);
    let start_block =
        if checkpoint.most_recent_block_index > 0 { checkpoint.most_recent_block_index + 1 } else { config.first_block_index };

    let mut roster = RngRoster {
        com: CenterOfMassMove::<NDIM>::new(config.centre_of_mass_step_size)?,
        single_bead: SingleBeadMove::new(config.lambda, environment.tau())?,
        bisection: BisectionMove::new(config.bisection_ratio, config.bisection_level, config.lambda, environment.tau())?,
        criterion: MetropolisCriterion::new(config.temperature),
    };
    if config.prng_state_filepath.exists() {
        let states = pimc_io::read_prng_state(&config.prng_state_filepath)?;
        roster.restore(&states);
    }

    let simulation_handler = build_simulation_handler(config, n_particles, box_sides)?;
    let mut energy = SimulationEnergy::new(simulation_handler, "pimc");
    energy.handler_mut().refresh(&worldlines, &box_sides);

    let mut pair_estimator =
        PotentialEnergyEstimator::new(build_pair_estimator_handler(config, n_particles, box_sides)?, 2, "pair");
    let mut triplet_estimator = if config.enable_triplet {
        Some(PotentialEnergyEstimator::new(
            build_triplet_estimator_handler(config, n_particles, box_sides)?,
            3,
            "triplet",
        ))
    } else {
        None
    };
    let mut kinetic_estimator = PrimitiveKineticEstimator::<NDIM>::new(config.lambda, environment.tau());
    let mut centroid_estimator =
        CentroidDistanceEstimator::new(lattice_positions.clone(), box_sides, true, n_particles)?;
    let mut bead_rdf = Histogram::new(config.n_rdf_bins, 0.0, config.rdf_max_distance, OutOfRangePolicy::Drop)?;
    let mut centroid_rdf = Histogram::new(config.n_rdf_bins, 0.0, config.rdf_max_distance, OutOfRangePolicy::Drop)?;

    let mut energy_writer = BufferedBlockWriter::<3>::new(
        config.output_dirpath.join("energies.dat"),
        Some("# block kinetic pair triplet".to_string()),
    );
    let mut centroid_writer = BufferedBlockWriter::<1>::new(
        config.output_dirpath.join("centroid_rms.dat"),
        Some("# block centroid_rms_distance".to_string()),
    );
    let mut timing_writer = BufferedBlockWriter::<3>::new(
        config.output_dirpath.join("timing.dat"),
        Some("# block seconds millis micros".to_string()),
    );

    let com_adjuster = SingleValueMoveAdjuster::new(
        AcceptPercentageRange::new(0.3, 0.5)?,
        0.1 * config.centre_of_mass_step_size.max(1e-6),
        DirectionIfAcceptTooLow::Negative,
        Some(1e-6),
        None,
        NoMovesPolicy::Drop,
    )?;
    let single_bead_adjuster = SingleValueMoveAdjuster::new(
        AcceptPercentageRange::new(0.3, 0.5)?,
        0.1,
        DirectionIfAcceptTooLow::Negative,
        Some(1e-6),
        None,
        NoMovesPolicy::Drop,
    )?;
    let bisection_adjuster =
        BisectionLevelMoveAdjuster::new(AcceptPercentageRange::new(0.3, 0.5)?, 0.05, NoMovesPolicy::Drop)?;

    let mut com_tracker = MoveSuccessTracker::new();
    let mut single_bead_tracker = MoveSuccessTracker::new();
    let mut bisection_tracker = MoveSuccessTracker::new();
    let equilibration_locked = checkpoint.is_equilibration_complete;

    let mut last_saved_worldline_index = checkpoint.most_recent_saved_worldline_index;
    let mut any_worldline_saved = checkpoint.is_at_least_one_worldline_index_saved;

    for block in start_block..config.last_block_index {
        let is_production = block >= config.n_equilibrium_blocks;

        energy.handler_mut().refresh(&worldlines, &box_sides);
        pair_estimator.refresh(&worldlines, &box_sides);
        if let Some(triplet) = triplet_estimator.as_mut() {
            triplet.refresh(&worldlines, &box_sides);
        }

        let start = Instant::now();
        for _pass in 0..config.n_passes {
            run_one_pass(&mut roster, &mut worldlines, &energy, n_particles, config.n_timeslices);
        }
        let elapsed = start.elapsed();

        if is_production {
            kinetic_estimator.observe(&worldlines);
            pair_estimator.observe(&worldlines);
            if let Some(triplet) = triplet_estimator.as_mut() {
                triplet.observe(&worldlines);
            }
            centroid_estimator.observe(&worldlines);
            bin_rdf(&mut bead_rdf, &mut centroid_rdf, &worldlines, &box_sides);

            let kinetic = kinetic_estimator.drain_values().into_iter().next().unwrap_or(0.0);
            let pair = pair_estimator.drain_values().into_iter().next().unwrap_or(0.0);
            let triplet = triplet_estimator
                .as_mut()
                .and_then(|e| e.drain_values().into_iter().next())
                .unwrap_or(0.0);
            energy_writer.push(block, [kinetic, pair, triplet]);

            let centroid = centroid_estimator.drain_values().into_iter().next().unwrap_or(0.0);
            centroid_writer.push(block, [centroid]);

            if block % config.n_save_worldlines_every == 0 {
                let path = snapshot_path(&config.worldline_snapshot_dirpath, block);
                pimc_io::write_worldline_snapshot(&path, block, &worldlines, &box_sides)?;
                last_saved_worldline_index = block;
                any_worldline_saved = true;
            }
        } else if !equilibration_locked {
            adjust_step_sizes(
                &mut roster,
                &com_adjuster,
                &single_bead_adjuster,
                &bisection_adjuster,
                &com_tracker,
                &single_bead_tracker,
                &bisection_tracker,
            )?;
        }

        com_tracker.reset(&roster.com.acceptance_statistics());
        single_bead_tracker.reset(&roster.single_bead.acceptance_statistics());
        bisection_tracker.reset(&roster.bisection.acceptance_statistics());

        let secs = elapsed.as_secs() as f64;
        let millis = (elapsed.subsec_millis()) as f64;
        let micros = (elapsed.subsec_micros() % 1000) as f64;
        timing_writer.push(block, [secs, millis, micros]);
        debug!("block {block} done in {elapsed:.2?}");

        if (block + 1) % config.writer_batch_size == 0 || block + 1 == config.last_block_index {
            energy_writer.flush()?;
            centroid_writer.flush()?;
            timing_writer.flush()?;
            pimc_io::write_histogram_atomic(&config.output_dirpath.join("rdf.dat"), &bead_rdf)?;
            pimc_io::write_histogram_atomic(&config.output_dirpath.join("centroid_rdf.dat"), &centroid_rdf)?;
            pimc_io::write_prng_state(&config.prng_state_filepath, &roster.seed_states())?;

            let checkpoint = Checkpoint {
                most_recent_block_index: block,
                most_recent_saved_worldline_index: last_saved_worldline_index,
                is_at_least_one_worldline_index_saved: any_worldline_saved,
                is_equilibration_complete: block + 1 >= config.n_equilibrium_blocks,
            };
            checkpoint.write_atomic(&config.checkpoint_filepath)?;
            info!("flushed through block {block}");
        }
    }

    Ok(())
}

fn snapshot_path(dirpath: &std::path::Path, block_index: usize) -> PathBuf {
    dirpath.join(format!("block_{block_index:08}.dat"))
}

fn run_one_pass(
    roster: &mut RngRoster,
    worldlines: &mut Worldlines<NDIM>,
    energy: &SimulationEnergy,
    n_particles: usize,
    n_timeslices: usize,
) {
    for _ in 0..n_particles {
        let _ = roster.com.perturb(worldlines, energy, &mut roster.criterion);
    }
    for _ in 0..(n_particles * n_timeslices) {
        let _ = roster.single_bead.perturb(worldlines, energy, &mut roster.criterion);
    }
    for _ in 0..(n_particles * n_timeslices) {
        let _ = roster.bisection.perturb(worldlines, energy, &mut roster.criterion);
    }
}

fn bin_rdf(
    bead_rdf: &mut Histogram,
    centroid_rdf: &mut Histogram,
    worldlines: &Worldlines<NDIM>,
    box_sides: &BoxSides<NDIM>,
) {
    use pimc_geometry::distance_periodic;
    for t in 0..worldlines.n_timeslices() {
        let slice = worldlines.timeslice(t);
        for a in 0..slice.len() {
            for b in (a + 1)..slice.len() {
                let _ = bead_rdf.add(distance_periodic(&slice[a], &slice[b], box_sides), 1);
            }
        }
    }
    let centroids: Vec<_> = (0..worldlines.n_particles()).map(|i| worldlines.centroid(i)).collect();
    for a in 0..centroids.len() {
        for b in (a + 1)..centroids.len() {
            let _ = centroid_rdf.add(distance_periodic(&centroids[a], &centroids[b], box_sides), 1);
        }
    }
}

fn adjust_step_sizes(
    roster: &mut RngRoster,
    com_adjuster: &SingleValueMoveAdjuster,
    single_bead_adjuster: &SingleValueMoveAdjuster,
    bisection_adjuster: &BisectionLevelMoveAdjuster,
    com_tracker: &MoveSuccessTracker,
    single_bead_tracker: &MoveSuccessTracker,
    bisection_tracker: &MoveSuccessTracker,
) -> Result<(), DriverError> {
    let com_rate = com_tracker.rate_since(&roster.com.acceptance_statistics());
    let new_com_step = com_adjuster.adjust(roster.com.max_range(), com_rate)?;
    roster.com.set_max_range(new_com_step);

    let sb_rate = single_bead_tracker.rate_since(&roster.single_bead.acceptance_statistics());
    let new_sb_scale = single_bead_adjuster.adjust(roster.single_bead.max_range(), sb_rate)?;
    roster.single_bead.set_max_range(new_sb_scale);

    let bi_rate = bisection_tracker.rate_since(&roster.bisection.acceptance_statistics());
    let (frac, level) = roster.bisection.level_params();
    let (new_frac, new_level) = bisection_adjuster.adjust(frac, level, bi_rate)?;
    roster.bisection.set_level_params(new_frac, new_level);

    Ok(())
}
