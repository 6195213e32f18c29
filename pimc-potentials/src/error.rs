use thiserror::Error;

/// Errors raised while constructing or evaluating an interaction potential.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PotentialError {
    #[error("the Lennard-Jones well depth must be positive, found {0:e}")]
    NonPositiveWellDepth(f64),
    #[error("the Lennard-Jones particle size must be positive, found {0:e}")]
    NonPositiveParticleSize(f64),
    #[error("the Axilrod-Teller-Muto C9 coefficient must be non-negative, found {0:e}")]
    NegativeC9Coefficient(f64),
    #[error("the Bade four-body dispersion coefficient must be non-negative, found {0:e}")]
    NegativeBadeCoefficient(f64),
    #[error("tabulated potential needs at least two energy samples, found {0}")]
    NotEnoughSamples(usize),
}
