use thiserror::Error;

#[derive(Debug, Error)]
pub enum MoveError {
    #[error("move step size must be positive, got {0}")]
    NonPositiveStepSize(f64),
    #[error("bisection lower_level must be >= 1, got {0}")]
    LowerLevelTooSmall(usize),
    #[error("upper_level_frac must lie in [0, 1), got {0}")]
    UpperLevelFracOutOfRange(f64),
    #[error("accept percentage range [{0}, {1}] is not a valid, ordered sub-range of [0, 1]")]
    InvalidAcceptPercentageRange(f64, f64),
    #[error("adjuster requested to fail when no moves were attempted this block")]
    NoMovesAttempted,
}
