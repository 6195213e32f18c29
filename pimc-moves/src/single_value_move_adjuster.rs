use crate::adjuster_types::{AcceptPercentageRange, DirectionIfAcceptTooLow, NoMovesPolicy};
use crate::error::MoveError;

/// Nudges a mover's single scalar parameter (a step size, a cutoff...) toward a target
/// acceptance-rate band.
pub struct SingleValueMoveAdjuster {
    range: AcceptPercentageRange,
    step: f64,
    direction_if_too_low: DirectionIfAcceptTooLow,
    lower_limit: Option<f64>,
    upper_limit: Option<f64>,
    no_moves_policy: NoMovesPolicy,
}

impl SingleValueMoveAdjuster {
    pub fn new(
        range: AcceptPercentageRange,
        step: f64,
        direction_if_too_low: DirectionIfAcceptTooLow,
        lower_limit: Option<f64>,
        upper_limit: Option<f64>,
        no_moves_policy: NoMovesPolicy,
    ) -> Result<Self, MoveError> {
        if step <= 0.0 {
            return Err(MoveError::NonPositiveStepSize(step));
        }
        Ok(SingleValueMoveAdjuster { range, step, direction_if_too_low, lower_limit, upper_limit, no_moves_policy })
    }

    /// Returns the adjusted value given the current one and the observed acceptance rate
    /// (`None` when no attempts were recorded this block).
    pub fn adjust(&self, current_value: f64, rate: Option<f64>) -> Result<f64, MoveError> {
        let rate = match rate {
            Some(r) => r,
            None => {
                return match self.no_moves_policy {
                    NoMovesPolicy::Drop => Ok(current_value),
                    NoMovesPolicy::Fail => Err(MoveError::NoMovesAttempted),
                }
            }
        };

        let sign = match self.direction_if_too_low {
            DirectionIfAcceptTooLow::Positive => 1.0,
            DirectionIfAcceptTooLow::Negative => -1.0,
        };

        let mut new_value = current_value;
        if rate < self.range.lo {
            new_value += sign * self.step;
        } else if rate > self.range.hi {
            new_value -= sign * self.step;
        }

        if let Some(lo) = self.lower_limit {
            new_value = new_value.max(lo);
        }
        if let Some(hi) = self.upper_limit {
            new_value = new_value.min(hi);
        }
        Ok(new_value)
    }
}
