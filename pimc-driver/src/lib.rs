pub mod config;
pub mod driver;
pub mod error;
pub mod handlers;
pub mod lattice;

pub use config::SimulationConfig;
pub use error::{ConfigError, DriverError};
