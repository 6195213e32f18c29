use std::fs;
use std::path::Path;

use pimc_geometry::{BoxSides, Point};
use pimc_worldlines::Worldlines;

use crate::atomic_write::write_atomic;
use crate::error::EngineError;

/// Atomically writes a worldline snapshot: a comment header, then
/// `<block_index> <ndim> <n_particles> <n_timeslices> <box side 0>...<box side NDIM-1>`,
/// then `n_timeslices * n_particles` lines of `NDIM` floats each, in timeslice-major order.
pub fn write_worldline_snapshot<const NDIM: usize>(
    path: &Path,
    block_index: usize,
    worldlines: &Worldlines<NDIM>,
    box_sides: &BoxSides<NDIM>,
) -> Result<(), EngineError> {
    let mut lines = Vec::with_capacity(2 + worldlines.n_timeslices() * worldlines.n_particles());
    lines.push("# pimc worldline snapshot".to_string());

    let mut header = format!("{} {} {} {}", block_index, NDIM, worldlines.n_particles(), worldlines.n_timeslices());
    for side in box_sides.sides() {
        header.push(' ');
        header.push_str(&format!("{:e}", side));
    }
    lines.push(header);

    for bead in worldlines.flat_beads() {
        let coords: Vec<String> = (0..NDIM).map(|k| format!("{:e}", bead[k])).collect();
        lines.push(coords.join(" "));
    }

    let contents = lines.join("\n") + "\n";
    write_atomic(path, &contents)
}

/// Returns `(block_index, worldlines, box_sides)`.
pub fn read_worldline_snapshot<const NDIM: usize>(
    path: &Path,
) -> Result<(usize, Worldlines<NDIM>, BoxSides<NDIM>), EngineError> {
    let contents = fs::read_to_string(path)?;
    let mut lines = contents.lines().filter(|l| !l.starts_with('#'));

    let header = lines
        .next()
        .ok_or_else(|| EngineError::MalformedSnapshot("missing header line".to_string()))?;
    let mut parts = header.split_whitespace();
    let parse_usize = |s: Option<&str>| -> Result<usize, EngineError> {
        s.and_then(|v| v.parse().ok()).ok_or_else(|| EngineError::MalformedSnapshot(header.to_string()))
    };
    let block_index = parse_usize(parts.next())?;
    let ndim = parse_usize(parts.next())?;
    if ndim != NDIM {
        return Err(EngineError::MalformedSnapshot(format!("snapshot has NDIM {ndim}, expected {NDIM}")));
    }
    let n_particles = parse_usize(parts.next())?;
    let n_timeslices = parse_usize(parts.next())?;

    let mut sides = [0.0; NDIM];
    for side in sides.iter_mut() {
        *side = parts
            .next()
            .and_then(|v| v.parse().ok())
            .ok_or_else(|| EngineError::MalformedSnapshot(header.to_string()))?;
    }
    let box_sides = BoxSides::new(sides).map_err(|e| EngineError::MalformedSnapshot(e.to_string()))?;

    let mut beads = Vec::with_capacity(n_timeslices * n_particles);
    for line in lines {
        let mut coords = [0.0; NDIM];
        for (k, token) in line.split_whitespace().enumerate().take(NDIM) {
            coords[k] = token
                .parse()
                .map_err(|_| EngineError::MalformedSnapshot(format!("bad bead line: {line}")))?;
        }
        beads.push(Point::<NDIM>::new(coords));
    }

    let worldlines = Worldlines::<NDIM>::from_flat_beads(n_timeslices, n_particles, beads)?;
    Ok((block_index, worldlines, box_sides))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_a_snapshot_exactly() {
        let dir = std::env::temp_dir().join(format!("pimc-io-snap-{}", std::process::id()));
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("block_0042.dat");

        let positions = vec![Point::<2>::new([0.0, 0.0]), Point::<2>::new([1.5, -2.5])];
        let worldlines = Worldlines::<2>::from_initial_positions(3, positions).unwrap();
        let box_sides = BoxSides::<2>::new([10.0, 10.0]).unwrap();

        write_worldline_snapshot(&path, 42, &worldlines, &box_sides).unwrap();
        let (block_index, restored, restored_box) = read_worldline_snapshot::<2>(&path).unwrap();

        assert_eq!(block_index, 42);
        assert_eq!(restored_box, box_sides);
        for t in 0..worldlines.n_timeslices() {
            for i in 0..worldlines.n_particles() {
                assert_eq!(restored.get(t, i), worldlines.get(t, i));
            }
        }

        fs::remove_dir_all(&dir).ok();
    }
}
