use thiserror::Error;

/// The single error type returned by every writer/reader in this crate.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("histogram error: {0}")]
    Grid(#[from] pimc_grids::GridError),

    #[error("worldline error: {0}")]
    Worldline(#[from] pimc_worldlines::WorldlineError),

    #[error("could not parse checkpoint TOML: {0}")]
    CheckpointDeserialize(#[from] toml::de::Error),

    #[error("could not serialize checkpoint TOML: {0}")]
    CheckpointSerialize(#[from] toml::ser::Error),

    #[error("malformed snapshot header: {0}")]
    MalformedSnapshot(String),

    #[error("malformed PRNG state file: {0}")]
    MalformedPrngState(String),
}
