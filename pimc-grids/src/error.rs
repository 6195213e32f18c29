use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum GridError {
    #[error("grid shape must have every dimension >= 1, found {0:?}")]
    EmptyShape(Vec<usize>),

    #[error("index {index:?} out of bounds for shape {shape:?}")]
    IndexOutOfBounds { index: Vec<usize>, shape: Vec<usize> },

    #[error("histogram range is invalid: min ({min}) must be < max ({max})")]
    InvalidRange { min: f64, max: f64 },

    #[error("histogram must have at least one bin, found {0}")]
    NoBins(usize),

    #[error("value {value} is outside histogram range [{min}, {max})")]
    OutOfRange { value: f64, min: f64, max: f64 },

    #[error("interpolator requires at least two samples, found {0}")]
    NotEnoughSamples(usize),

    #[error("interpolator argument {value} is outside table range [{min}, {max}]")]
    InterpolatorOutOfRange { value: f64, min: f64, max: f64 },
}
