use thiserror::Error;

/// Errors raised while constructing or validating geometric primitives.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeometryError {
    #[error("box side must be strictly positive, found {side} at axis {axis}")]
    NonPositiveSide { axis: usize, side: f64 },

    #[error("lattice constant must be strictly positive, found {0}")]
    NonPositiveLatticeConstant(f64),
}
