use crate::error::WorldlineError;
use pimc_grids::Grid2D;

/// Per-particle neighbour lists used as a centroid proximity cache.
///
/// For a fixed particle count `n`, an `n x n` index grid plus an `n`-entry length vector.
/// [`AdjacencyMatrix::neighbours`] yields the first `len[i]` entries of row `i`. A row can hold at
/// most `n - 1` real neighbours; adding more than `n` entries indicates a cutoff misconfiguration
/// and is rejected rather than silently truncated.
#[derive(Clone, Debug)]
pub struct AdjacencyMatrix {
    n_particles: usize,
    index_grid: Grid2D<usize>,
    sizes: Vec<usize>,
}

impl AdjacencyMatrix {
    pub fn new(n_particles: usize) -> Self {
        AdjacencyMatrix {
            n_particles,
            index_grid: Grid2D::new(n_particles, n_particles),
            sizes: vec![0; n_particles],
        }
    }

    pub fn n_particles(&self) -> usize {
        self.n_particles
    }

    fn check_in_bounds(&self, i: usize) -> Result<(), WorldlineError> {
        if i >= self.n_particles {
            return Err(WorldlineError::AdjacencyIndexOutOfRange {
                index: i,
                n_particles: self.n_particles,
            });
        }
        Ok(())
    }

    pub fn clear(&mut self, i_part: usize) -> Result<(), WorldlineError> {
        self.check_in_bounds(i_part)?;
        self.sizes[i_part] = 0;
        Ok(())
    }

    pub fn clear_all(&mut self) {
        for b in self.sizes.iter_mut() {
            *b = 0;
        }
    }

    pub fn add_neighbour(&mut self, i_source: usize, i_target: usize) -> Result<(), WorldlineError> {
        self.check_in_bounds(i_source)?;
        self.check_in_bounds(i_target)?;
        if self.sizes[i_source] >= self.n_particles {
            return Err(WorldlineError::AdjacencyRowFull {
                particle: i_source,
                n_particles: self.n_particles,
            });
        }
        let slot = self.sizes[i_source];
        self.index_grid.set(i_source, slot, i_target);
        self.sizes[i_source] += 1;
        Ok(())
    }

    pub fn add_symmetric(&mut self, i: usize, j: usize) -> Result<(), WorldlineError> {
        self.add_neighbour(i, j)?;
        self.add_neighbour(j, i)?;
        Ok(())
    }

    pub fn neighbours(&self, i_source: usize) -> &[usize] {
        &self.index_grid.row(i_source)[..self.sizes[i_source]]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn symmetric_insertion_is_visible_both_ways() {
        let mut adj = AdjacencyMatrix::new(4);
        adj.add_symmetric(0, 2).unwrap();
        assert_eq!(adj.neighbours(0), &[2]);
        assert_eq!(adj.neighbours(2), &[0]);
        assert!(adj.neighbours(1).is_empty());
    }

    #[test]
    fn clear_resets_a_single_row() {
        let mut adj = AdjacencyMatrix::new(3);
        adj.add_symmetric(0, 1).unwrap();
        adj.clear(0).unwrap();
        assert!(adj.neighbours(0).is_empty());
        assert_eq!(adj.neighbours(1), &[0]);
    }

    #[test]
    fn clear_all_empties_every_row() {
        let mut adj = AdjacencyMatrix::new(3);
        adj.add_symmetric(0, 1).unwrap();
        adj.add_symmetric(1, 2).unwrap();
        adj.clear_all();
        for i in 0..3 {
            assert!(adj.neighbours(i).is_empty());
        }
    }

    #[test]
    fn rejects_out_of_bounds_indices() {
        let mut adj = AdjacencyMatrix::new(2);
        assert!(adj.add_neighbour(0, 5).is_err());
    }
}
