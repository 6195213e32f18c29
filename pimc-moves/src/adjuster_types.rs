use crate::error::MoveError;

/// The target acceptance-rate band an adjuster tries to keep a mover inside.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AcceptPercentageRange {
    pub lo: f64,
    pub hi: f64,
}

impl AcceptPercentageRange {
    pub fn new(lo: f64, hi: f64) -> Result<Self, MoveError> {
        if !(0.0..=1.0).contains(&lo) || !(0.0..=1.0).contains(&hi) || lo > hi {
            return Err(MoveError::InvalidAcceptPercentageRange(lo, hi));
        }
        Ok(AcceptPercentageRange { lo, hi })
    }
}

/// Which way to move the adjusted value when the observed acceptance rate is below `lo`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DirectionIfAcceptTooLow {
    Positive,
    Negative,
}

/// What to do when a block recorded zero attempts for a mover.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoMovesPolicy {
    /// Leave the adjusted value unchanged.
    Drop,
    /// Report an error instead of guessing.
    Fail,
}
