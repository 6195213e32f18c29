use std::fs;
use std::path::Path;

use crate::atomic_write::write_atomic;
use crate::error::EngineError;

/// Persists a set of named `(seed, draws)` pairs, one per source of randomness in the engine
/// (each mover, the acceptance criterion...). `pimc_montecarlo::EngineRng` reconstructs its exact
/// state from such a pair by re-seeding and replaying `draws` raw draws.
pub fn write_prng_state(path: &Path, states: &[(String, u64, u64)]) -> Result<(), EngineError> {
    let mut lines = Vec::with_capacity(states.len());
    for (name, seed, draws) in states {
        lines.push(format!("{name} {seed} {draws}"));
    }
    let contents = lines.join("\n") + "\n";
    write_atomic(path, &contents)
}

pub fn read_prng_state(path: &Path) -> Result<Vec<(String, u64, u64)>, EngineError> {
    let contents = fs::read_to_string(path)?;
    let mut states = Vec::new();
    for line in contents.lines() {
        let mut parts = line.split_whitespace();
        let name = parts
            .next()
            .ok_or_else(|| EngineError::MalformedPrngState(line.to_string()))?
            .to_string();
        let seed: u64 = parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| EngineError::MalformedPrngState(line.to_string()))?;
        let draws: u64 = parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| EngineError::MalformedPrngState(line.to_string()))?;
        states.push((name, seed, draws));
    }
    Ok(states)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_every_named_rng() {
        let dir = std::env::temp_dir().join(format!("pimc-io-prng-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rng_state.txt");

        let states = vec![
            ("metropolis".to_string(), 42u64, 1000u64),
            ("com_move".to_string(), 7u64, 250u64),
        ];
        write_prng_state(&path, &states).unwrap();
        let restored = read_prng_state(&path).unwrap();
        assert_eq!(restored, states);

        fs::remove_dir_all(&dir).ok();
    }
}
