use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::atomic_write::write_atomic;
use crate::error::EngineError;

/// Progress marker consulted on startup to resume an interrupted run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Checkpoint {
    pub most_recent_block_index: usize,
    pub most_recent_saved_worldline_index: usize,
    pub is_at_least_one_worldline_index_saved: bool,
    pub is_equilibration_complete: bool,
}

impl Checkpoint {
    pub fn fresh() -> Self {
        Checkpoint {
            most_recent_block_index: 0,
            most_recent_saved_worldline_index: 0,
            is_at_least_one_worldline_index_saved: false,
            is_equilibration_complete: false,
        }
    }

    pub fn write_atomic(&self, path: &Path) -> Result<(), EngineError> {
        let contents = toml::to_string_pretty(self)?;
        write_atomic(path, &contents)
    }

    pub fn read(path: &Path) -> Result<Self, EngineError> {
        let contents = fs::read_to_string(path)?;
        Ok(toml::from_str(&contents)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_disk() {
        let dir = std::env::temp_dir().join(format!("pimc-io-checkpoint-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("checkpoint.toml");

        let checkpoint = Checkpoint {
            most_recent_block_index: 17,
            most_recent_saved_worldline_index: 3,
            is_at_least_one_worldline_index_saved: true,
            is_equilibration_complete: true,
        };
        checkpoint.write_atomic(&path).unwrap();
        let restored = Checkpoint::read(&path).unwrap();
        assert_eq!(restored, checkpoint);

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn fresh_checkpoint_starts_before_equilibration() {
        let checkpoint = Checkpoint::fresh();
        assert!(!checkpoint.is_equilibration_complete);
        assert!(!checkpoint.is_at_least_one_worldline_index_saved);
    }
}
