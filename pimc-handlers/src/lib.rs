//! Per-bead interaction handlers: full pair/triplet sums, nearest-neighbour variants backed by a
//! centroid adjacency matrix, a composite that bundles several orders, and an adapter exposing
//! any handler as a generic `pimc_sim::Energy`.

mod composite;
mod energy_adapter;
mod error;
mod full_pair;
mod full_triplet;
mod nearest_neighbour_pair;
mod nearest_neighbour_quadruplet;
mod nearest_neighbour_triplet;
mod trait_worldline_energy;

pub use composite::CompositeHandler;
pub use energy_adapter::HandlerEnergy;
pub use error::HandlerError;
pub use full_pair::FullPairHandler;
pub use full_triplet::FullTripletHandler;
pub use nearest_neighbour_pair::NearestNeighbourPairHandler;
pub use nearest_neighbour_quadruplet::NearestNeighbourQuadrupletHandler;
pub use nearest_neighbour_triplet::NearestNeighbourTripletHandler;
pub use trait_worldline_energy::{RefreshableHandler, WorldlineEnergy};
