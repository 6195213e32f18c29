use std::fs;
use std::path::Path;

use pimc_grids::Histogram;

use crate::atomic_write::write_atomic;
use crate::error::EngineError;

/// Atomically (re)writes a histogram to `path` using [`Histogram::to_lines`]'s
/// `<policy> <n_bins> <min> <max>` header followed by one count per line.
pub fn write_histogram_atomic(path: &Path, histogram: &Histogram) -> Result<(), EngineError> {
    let contents = histogram.to_lines().join("\n") + "\n";
    write_atomic(path, &contents)
}

pub fn read_histogram(path: &Path) -> Result<Histogram, EngineError> {
    let contents = fs::read_to_string(path)?;
    Ok(Histogram::from_lines(contents.lines().map(|l| l.to_string()))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pimc_grids::OutOfRangePolicy;

    #[test]
    fn round_trips_through_disk() {
        let dir = std::env::temp_dir().join(format!("pimc-io-hist-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("rdf.dat");

        let mut h = Histogram::new(4, 0.0, 8.0, OutOfRangePolicy::Drop).unwrap();
        h.add(1.0, 3).unwrap();
        write_histogram_atomic(&path, &h).unwrap();

        let restored = read_histogram(&path).unwrap();
        assert_eq!(restored.bins(), h.bins());

        fs::remove_dir_all(&dir).ok();
    }
}
