use std::env;
use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use serde::Deserialize;

use pimc_driver::error::DriverError;
use pimc_geometry::BoxSides;
use pimc_handlers::{FullPairHandler, FullTripletHandler};
use pimc_estimators::PotentialEnergyEstimator;
use pimc_io::{read_worldline_snapshot, write_atomic, EngineError};
use pimc_potentials::{AxilrodTellerMutoPotential, LennardJonesPotential, PeriodicTripletDistancePotential, PeriodicTwoBodyPointPotential};
use pimc_sim::Observer;

const NDIM: usize = 3;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
/// Re-evaluates potential energies of previously saved worldline snapshots.
struct Args {
    /// path to this tool's own TOML configuration file
    config_path: PathBuf,
    #[clap(short, long)]
    verbose: bool,
}

/// Offline diagnostic configuration: distinct from [`pimc_driver::SimulationConfig`] because this
/// tool replays already-saved snapshots rather than driving a live simulation.
#[derive(Debug, Deserialize)]
struct EvaluationConfig {
    abs_output_dirpath: PathBuf,
    abs_worldlines_dirpath: PathBuf,
    block_indices: Vec<usize>,

    n_cells_dim_0: usize,
    n_cells_dim_1: usize,
    n_cells_dim_2: usize,
    lattice_constant: f64,
    c9_coefficient: f64,

    evaluate_two_body: bool,
    evaluate_three_body: bool,
    evaluate_four_body: bool,

    abs_two_body_filepath: PathBuf,
    abs_three_body_filepath: PathBuf,
    abs_four_body_filepath: PathBuf,
}

impl EvaluationConfig {
    fn load(path: &std::path::Path) -> Result<Self, DriverError> {
        let text = fs::read_to_string(path).map_err(EngineError::from)?;
        Ok(toml::from_str(&text).map_err(EngineError::from)?)
    }

    fn box_sides(&self) -> Result<BoxSides<NDIM>, DriverError> {
        Ok(BoxSides::new([
            self.n_cells_dim_0 as f64 * self.lattice_constant,
            self.n_cells_dim_1 as f64 * self.lattice_constant,
            self.n_cells_dim_2 as f64 * self.lattice_constant,
        ])?)
    }
}

fn snapshot_path(dirpath: &std::path::Path, block_index: usize) -> PathBuf {
    dirpath.join(format!("block_{block_index:08}.dat"))
}

fn run(config: &EvaluationConfig) -> Result<(), DriverError> {
    fs::create_dir_all(&config.abs_output_dirpath).map_err(EngineError::from)?;
    let box_sides = config.box_sides()?;

    if config.evaluate_four_body {
        return Err(DriverError::UnsupportedRequest(
            "four-body re-evaluation needs a trained rescaling model artifact, which this tool does not load"
                .to_string(),
        ));
    }

    let mut two_body_lines = Vec::new();
    let mut three_body_lines = Vec::new();

    for &block_index in &config.block_indices {
        let path = snapshot_path(&config.abs_worldlines_dirpath, block_index);
        let (_, worldlines, _) = read_worldline_snapshot::<NDIM>(&path)?;

        if config.evaluate_two_body {
            let lj = LennardJonesPotential::warnecke2010();
            let handler =
                FullPairHandler::new(PeriodicTwoBodyPointPotential::new(move |r: f64| lj.evaluate(r), box_sides));
            let mut estimator = PotentialEnergyEstimator::new(handler, 2, "pair");
            estimator.observe(&worldlines);
            let energy = estimator.drain_values().into_iter().next().unwrap_or(0.0);
            two_body_lines.push(format!("{block_index} {energy:e}"));
            info!("block {block_index}: two-body energy {energy:e}");
        }

        if config.evaluate_three_body {
            let atm = AxilrodTellerMutoPotential::new(config.c9_coefficient)?;
            let handler = FullTripletHandler::new(PeriodicTripletDistancePotential::new(
                move |a: f64, b: f64, c: f64| atm.evaluate(a, b, c),
                box_sides,
            ));
            let mut estimator = PotentialEnergyEstimator::new(handler, 3, "triplet");
            estimator.observe(&worldlines);
            let energy = estimator.drain_values().into_iter().next().unwrap_or(0.0);
            three_body_lines.push(format!("{block_index} {energy:e}"));
            info!("block {block_index}: three-body energy {energy:e}");
        }
    }

    if config.evaluate_two_body {
        write_atomic(&config.abs_two_body_filepath, &(two_body_lines.join("\n") + "\n"))?;
    }
    if config.evaluate_three_body {
        write_atomic(&config.abs_three_body_filepath, &(three_body_lines.join("\n") + "\n"))?;
    }

    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();
    unsafe {
        if env::var("RUST_LOG").is_err() {
            env::set_var("RUST_LOG", "info");
        }
        if args.verbose {
            env::set_var("RUST_LOG", "debug");
        }
    }
    env_logger::init();

    let config = match EvaluationConfig::load(&args.config_path) {
        Ok(config) => config,
        Err(err) => {
            error!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("evaluation aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
