use std::fs;
use std::path::Path;

use pimc_geometry::Point;

use crate::error::{ConfigError, DriverError};

/// Reads the classical lattice start: one whitespace-separated `x y z` line per particle.
/// Generating that lattice from a Bravais unit cell is out of scope (§1); this engine only
/// consumes already-produced positions.
pub fn read_initial_positions(path: &Path) -> Result<Vec<Point<3>>, DriverError> {
    let contents = fs::read_to_string(path).map_err(pimc_io::EngineError::from)?;
    let mut positions = Vec::new();
    for line in contents.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let mut coords = [0.0; 3];
        for (k, token) in line.split_whitespace().enumerate().take(3) {
            coords[k] = token.parse().map_err(|_| {
                DriverError::Config(ConfigError::EmptyInitialPositions(format!(
                    "malformed coordinate line: {line}"
                )))
            })?;
        }
        positions.push(Point::<3>::new(coords));
    }
    if positions.is_empty() {
        return Err(DriverError::Config(ConfigError::EmptyInitialPositions(path.display().to_string())));
    }
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_one_point_per_nonblank_line() {
        let dir = std::env::temp_dir().join(format!("pimc-driver-lattice-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("lattice.dat");
        fs::write(&path, "# header\n0.0 0.0 0.0\n1.8 1.8 0.0\n\n").unwrap();

        let positions = read_initial_positions(&path).unwrap();
        assert_eq!(positions.len(), 2);
        assert_eq!(positions[1], Point::<3>::new([1.8, 1.8, 0.0]));

        fs::remove_dir_all(&dir).ok();
    }

    #[test]
    fn rejects_an_empty_file() {
        let dir = std::env::temp_dir().join(format!("pimc-driver-lattice-empty-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("empty.dat");
        fs::write(&path, "# nothing here\n").unwrap();

        assert!(read_initial_positions(&path).is_err());

        fs::remove_dir_all(&dir).ok();
    }
}
