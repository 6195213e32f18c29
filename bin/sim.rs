use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use log::error;

use pimc_driver::config::SimulationConfig;
use pimc_driver::driver;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
/// Runs a PIMC simulation from a TOML configuration file.
struct Args {
    /// path to the simulation's TOML configuration file
    config_path: PathBuf,
    /// be more verbose and log program actions on the screen
    #[clap(short, long)]
    verbose: bool,
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

    let config = match SimulationConfig::load(&args.config_path) {
        Ok(config) => config,
        Err(err) => {
            error!("invalid configuration: {err}");
            return ExitCode::FAILURE;
        }
    };

    match driver::run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("simulation aborted: {err}");
            ExitCode::FAILURE
        }
    }
}
