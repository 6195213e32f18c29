use thiserror::Error;

#[derive(Debug, Error)]
pub enum HandlerError {
    #[error("neighbour cutoff must be positive, got {0}")]
    NonPositiveCutoff(f64),
}
