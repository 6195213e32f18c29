use std::path::PathBuf;

use serde::Deserialize;

use crate::error::ConfigError;

/// The simulation's sole run-time configuration, deserialized from a TOML file via `serde` and
/// validated immediately afterwards (§3/§6 of the design). Every quantity named here is required;
/// there are no implicit defaults for physical parameters.
#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    pub first_block_index: usize,
    pub last_block_index: usize,
    pub n_equilibrium_blocks: usize,
    pub n_passes: usize,
    pub n_timeslices: usize,
    pub bisection_level: usize,

    pub centre_of_mass_step_size: f64,
    pub bisection_ratio: f64,
    pub density: f64,
    pub temperature: f64,

    /// `hbar^2 / (2*m)` for the simulated species, in the engine's internal units.
    pub lambda: f64,
    /// Nearest-neighbour lattice spacing; drives the pair/triplet adjacency cutoffs (§4.C).
    pub lattice_constant: f64,

    pub box_side_0: f64,
    pub box_side_1: f64,
    pub box_side_2: f64,

    /// Whitespace-separated `x y z` lines, one per particle: the classical lattice start.
    pub initial_positions_filepath: PathBuf,

    pub output_dirpath: PathBuf,
    pub checkpoint_filepath: PathBuf,
    pub prng_state_filepath: PathBuf,
    pub worldline_snapshot_dirpath: PathBuf,

    pub writer_batch_size: usize,
    pub n_save_worldlines_every: usize,

    pub enable_triplet: bool,
    #[serde(default)]
    pub c9_coefficient: f64,

    pub n_rdf_bins: usize,
    pub rdf_max_distance: f64,
}

impl SimulationConfig {
    pub fn load(path: &std::path::Path) -> Result<Self, crate::error::DriverError> {
        let text = std::fs::read_to_string(path).map_err(pimc_io::EngineError::from)?;
        let config: SimulationConfig = toml::from_str(&text).map_err(pimc_io::EngineError::from)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.last_block_index <= self.first_block_index {
            return Err(ConfigError::EmptyBlockRange { first: self.first_block_index, last: self.last_block_index });
        }
        if self.n_equilibrium_blocks > self.last_block_index {
            return Err(ConfigError::EquilibrationExceedsRun {
                n_equilibrium: self.n_equilibrium_blocks,
                last: self.last_block_index,
            });
        }
        for (field, value) in [
            ("n_passes", self.n_passes),
            ("n_timeslices", self.n_timeslices),
            ("bisection_level", self.bisection_level),
            ("writer_batch_size", self.writer_batch_size),
            ("n_save_worldlines_every", self.n_save_worldlines_every),
            ("n_rdf_bins", self.n_rdf_bins),
        ] {
            if value == 0 {
                return Err(ConfigError::NonPositiveInteger { field, found: 0 });
            }
        }
        if self.bisection_level < 1 {
            return Err(ConfigError::NonPositiveInteger { field: "bisection_level", found: 0 });
        }
        if !(0.0..1.0).contains(&self.bisection_ratio) {
            return Err(ConfigError::OutOfUnitRange { field: "bisection_ratio", found: self.bisection_ratio });
        }
        for (field, value) in [
            ("centre_of_mass_step_size", self.centre_of_mass_step_size),
            ("density", self.density),
            ("temperature", self.temperature),
            ("lambda", self.lambda),
            ("lattice_constant", self.lattice_constant),
            ("box_side_0", self.box_side_0),
            ("box_side_1", self.box_side_1),
            ("box_side_2", self.box_side_2),
            ("rdf_max_distance", self.rdf_max_distance),
        ] {
            if value <= 0.0 {
                return Err(ConfigError::NonPositiveFloat { field, found: value });
            }
        }
        Ok(())
    }

    pub fn pair_cutoff(&self) -> f64 {
        2.2 * self.lattice_constant
    }

    pub fn triplet_cutoff(&self) -> f64 {
        1.1 * self.lattice_constant
    }
}

#[cfg(test)]
mod tests {
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
            enable_triplet: false,
            c9_coefficient: 0.0,
            n_rdf_bins: 50,
            rdf_max_distance: 5.0,
        }
    }

    #[test]
    fn accepts_a_well_formed_config() {
        assert!(base_config().validate().is_ok());
    }

    #[test]
    fn rejects_an_empty_block_range() {
        let mut config = base_config();
        config.last_block_index = config.first_block_index;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_equilibration_longer_than_the_run() {
        let mut config = base_config();
        config.n_equilibrium_blocks = config.last_block_index + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_bisection_ratio_outside_unit_range() {
        let mut config = base_config();
        config.bisection_ratio = 1.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn rejects_non_positive_temperature() {
        let mut config = base_config();
        config.temperature = 0.0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn derived_cutoffs_scale_with_the_lattice_constant() {
        let config = base_config();
        assert!((config.pair_cutoff() - 7.92).abs() < 1e-9);
        assert!((config.triplet_cutoff() - 3.96).abs() < 1e-9);
    }
}
