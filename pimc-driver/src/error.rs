use thiserror::Error;

/// Configuration problems detected while validating a deserialized `SimulationConfig`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("'{field}' must be a positive integer, found {found}")]
    NonPositiveInteger { field: &'static str, found: i64 },

    #[error("'{field}' must lie in [0, 1), found {found}")]
    OutOfUnitRange { field: &'static str, found: f64 },

    #[error("'{field}' must be strictly positive, found {found}")]
    NonPositiveFloat { field: &'static str, found: f64 },

    #[error("first_block_index ({first}) must be < last_block_index ({last})")]
    EmptyBlockRange { first: usize, last: usize },

    #[error("n_equilibrium_blocks ({n_equilibrium}) must be <= last_block_index ({last})")]
    EquilibrationExceedsRun { n_equilibrium: usize, last: usize },

    #[error("initial positions file '{0}' contains no particles")]
    EmptyInitialPositions(String),
}

/// Unifies every concern the driver can fail on: configuration, I/O/persistence, geometry
/// preconditions and the domain errors raised by moves, handlers and potentials. Move rejections
/// are never represented here; they are an ordinary `Mover::perturb` outcome.
#[derive(Error, Debug)]
pub enum DriverError {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Io(#[from] pimc_io::EngineError),

    #[error(transparent)]
    Geometry(#[from] pimc_geometry::GeometryError),

    #[error(transparent)]
    Worldline(#[from] pimc_worldlines::WorldlineError),

    #[error(transparent)]
    Handler(#[from] pimc_handlers::HandlerError),

    #[error(transparent)]
    Move(#[from] pimc_moves::MoveError),

    #[error(transparent)]
    Potential(#[from] pimc_potentials::PotentialError),

    #[error(transparent)]
    Estimator(#[from] pimc_estimators::EstimatorError),

    #[error("unsupported request: {0}")]
    UnsupportedRequest(String),
}
