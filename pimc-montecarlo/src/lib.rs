
// Import the classes from the separate files
mod acceptance_statistics;
mod adaptive_mc_protocol;
mod engine_rng;
mod isothermal_mc;
mod metropolis_criterion;
mod trait_acceptance_criterion;
mod trait_mover;
mod trait_sampler;

// Re-export the classes to make them accessible from outside the module
pub use acceptance_statistics::*;
pub use adaptive_mc_protocol::*;
pub use engine_rng::EngineRng;
pub use isothermal_mc::*;
pub use metropolis_criterion::*;
pub use trait_acceptance_criterion::*;
pub use trait_mover::*;
pub use trait_sampler::*;
