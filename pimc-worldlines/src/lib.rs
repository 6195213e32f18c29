//! Worldline bead storage, derived thermodynamic constants and the centroid adjacency matrix.

mod adjacency;
mod environment;
mod error;
mod neighbour_discovery;
mod worldlines;

pub use adjacency::AdjacencyMatrix;
pub use environment::Environment;
pub use error::WorldlineError;
pub use neighbour_discovery::refresh_centroid_adjacency;
pub use worldlines::Worldlines;
