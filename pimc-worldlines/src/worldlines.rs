use crate::error::WorldlineError;
use pimc_geometry::Point;

/// Bead storage for all particles across all imaginary-time slices.
///
/// Beads are stored timeslice-major: `beads[t * n_particles + i]` is the bead of particle `i` at
/// timeslice `t`. This keeps every [`Worldlines::timeslice`] a contiguous slice, which is
/// load-bearing for the interaction handlers' hot loops (they iterate all particles of one
/// timeslice while evaluating a move).
#[derive(Clone, Debug)]
pub struct Worldlines<const NDIM: usize> {
    n_timeslices: usize,
    n_particles: usize,
    beads: Vec<Point<NDIM>>,
}

impl<const NDIM: usize> Worldlines<NDIM> {
    /// Builds a classical start: every timeslice is initialized to the same lattice positions.
    pub fn from_initial_positions(
        n_timeslices: usize,
        positions: Vec<Point<NDIM>>,
    ) -> Result<Self, WorldlineError> {
        let n_particles = positions.len();
        let mut beads = Vec::with_capacity(n_timeslices * n_particles);
        for _ in 0..n_timeslices {
            beads.extend_from_slice(&positions);
        }
        Ok(Worldlines {
            n_timeslices,
            n_particles,
            beads,
        })
    }

    /// Restores worldlines from an already flattened, timeslice-major bead list (e.g. a
    /// previously saved snapshot).
    pub fn from_flat_beads(
        n_timeslices: usize,
        n_particles: usize,
        beads: Vec<Point<NDIM>>,
    ) -> Result<Self, WorldlineError> {
        let expected = n_timeslices * n_particles;
        if beads.len() != expected {
            return Err(WorldlineError::SnapshotSizeMismatch {
                found: beads.len(),
                expected,
            });
        }
        Ok(Worldlines {
            n_timeslices,
            n_particles,
            beads,
        })
    }

    pub fn n_timeslices(&self) -> usize {
        self.n_timeslices
    }

    pub fn n_particles(&self) -> usize {
        self.n_particles
    }

    #[inline]
    fn flat_index(&self, t: usize, i: usize) -> usize {
        t * self.n_particles + i
    }

    pub fn get(&self, t: usize, i: usize) -> Point<NDIM> {
        self.beads[self.flat_index(t, i)]
    }

    pub fn set(&mut self, t: usize, i: usize, point: Point<NDIM>) {
        let idx = self.flat_index(t, i);
        self.beads[idx] = point;
    }

    /// The contiguous row of every particle's bead at timeslice `t`.
    pub fn timeslice(&self, t: usize) -> &[Point<NDIM>] {
        let start = self.flat_index(t, 0);
        &self.beads[start..start + self.n_particles]
    }

    pub fn timeslice_mut(&mut self, t: usize) -> &mut [Point<NDIM>] {
        let start = self.flat_index(t, 0);
        &mut self.beads[start..start + self.n_particles]
    }

    /// An iterator over all of particle `i`'s beads, in timeslice order (the worldline is closed:
    /// timeslice `n_timeslices - 1` and `0` are adjacent for the purposes of every mover, though
    /// this iterator simply yields them in linear order).
    pub fn worldline(&self, i: usize) -> impl Iterator<Item = Point<NDIM>> + '_ {
        (0..self.n_timeslices).map(move |t| self.get(t, i))
    }

    /// Arithmetic mean of particle `i`'s beads across all timeslices.
    pub fn centroid(&self, i: usize) -> Point<NDIM> {
        let mut sum = Point::<NDIM>::origin();
        for bead in self.worldline(i) {
            sum += bead;
        }
        sum / self.n_timeslices as f64
    }

    /// Flat, timeslice-major view of every bead, in the order persisted by the snapshot writer.
    pub fn flat_beads(&self) -> &[Point<NDIM>] {
        &self.beads
    }
}

impl<const NDIM: usize> pimc_sim::System for Worldlines<NDIM> {
    /// Here "size" is the number of particles: movers index a particle, not a single bead.
    fn get_size(&self) -> usize {
        self.n_particles
    }

    /// Copies particle `i`'s entire worldline (every timeslice) from `rhs`.
    fn copy_from(&mut self, i: usize, rhs: &Self) {
        for t in 0..self.n_timeslices {
            let value = rhs.get(t, i);
            self.set(t, i, value);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Worldlines<2> {
        let positions = vec![
            Point::<2>::new([0.0, 0.0]),
            Point::<2>::new([1.0, 0.0]),
        ];
        Worldlines::from_initial_positions(3, positions).unwrap()
    }

    #[test]
    fn timeslice_contiguity_holds() {
        let w = sample();
        // first element address of slice t+1 is exactly one Point past the end of slice t
        let t0 = w.timeslice(0);
        let t1 = w.timeslice(1);
        let end_of_t0 = t0.as_ptr() as usize + t0.len() * std::mem::size_of::<Point<2>>();
        assert_eq!(end_of_t0, t1.as_ptr() as usize);
    }

    #[test]
    fn centroid_of_classical_start_equals_lattice_position() {
        let w = sample();
        assert_eq!(w.centroid(1), Point::<2>::new([1.0, 0.0]));
    }

    #[test]
    fn copy_from_copies_only_the_named_particle() {
        use pimc_sim::System;

        let mut a = sample();
        let mut b = sample();
        b.set(0, 1, Point::<2>::new([9.0, 9.0]));
        b.set(1, 1, Point::<2>::new([9.0, 9.0]));
        b.set(2, 1, Point::<2>::new([9.0, 9.0]));

        a.copy_from(1, &b);
        assert_eq!(a.get(0, 1), Point::<2>::new([9.0, 9.0]));
        assert_eq!(a.get(0, 0), Point::<2>::new([0.0, 0.0]));
        assert_eq!(a.get_size(), 2);
    }

    #[test]
    fn flat_round_trip_preserves_layout() {
        let w = sample();
        let restored =
            Worldlines::<2>::from_flat_beads(w.n_timeslices(), w.n_particles(), w.flat_beads().to_vec())
                .unwrap();
        for t in 0..w.n_timeslices() {
            for i in 0..w.n_particles() {
                assert_eq!(w.get(t, i), restored.get(t, i));
            }
        }
    }
}
