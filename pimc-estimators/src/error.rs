use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EstimatorError {
    #[error("lattice reference has {found} positions, worldlines carry {expected} particles")]
    LatticeSizeMismatch { found: usize, expected: usize },
}
