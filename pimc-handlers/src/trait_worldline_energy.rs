use pimc_geometry::BoxSides;
use pimc_worldlines::{AdjacencyMatrix, Worldlines};

/// A handler evaluates the energy contribution of one bead `(i, t)` to the rest of its
/// timeslice, under whatever interaction order (pair, triplet, quadruplet...) it implements.
///
/// This is the unit move performers actually call: `perturb()` needs the energy before and
/// after moving a single bead (or a whole worldline), never the full system energy.
pub trait WorldlineEnergy<const NDIM: usize> {
    fn bead_energy(&self, worldlines: &Worldlines<NDIM>, i: usize, t: usize) -> f64;

    /// Sum of `bead_energy(i, t)` over every bead of particle `i`'s worldline.
    fn worldline_energy(&self, worldlines: &Worldlines<NDIM>, i: usize) -> f64 {
        (0..worldlines.n_timeslices())
            .map(|t| self.bead_energy(worldlines, i, t))
            .sum()
    }

    /// Sum over every bead of every particle. Each pair/triplet/quadruplet is counted once per
    /// bead it touches times the number of its members (`bead_energy` does not itself divide by
    /// multiplicity), matching the convention used by the rest of this handler family: callers
    /// wanting the non-double-counted total divide by the interaction order.
    fn total_energy(&self, worldlines: &Worldlines<NDIM>) -> f64 {
        (0..worldlines.n_particles())
            .map(|i| self.worldline_energy(worldlines, i))
            .sum()
    }
}

/// Handlers that cache a centroid adjacency matrix implement this so the driver's once-per-block
/// refresh protocol can rebuild every order's matrix with its own cutoff.
pub trait RefreshableHandler<const NDIM: usize> {
    fn refresh(&mut self, worldlines: &Worldlines<NDIM>, box_sides: &BoxSides<NDIM>);
    fn adjacency_matrix(&self) -> Option<&AdjacencyMatrix> {
        None
    }
}
