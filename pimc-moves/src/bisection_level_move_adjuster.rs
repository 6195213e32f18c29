use crate::adjuster_types::{AcceptPercentageRange, NoMovesPolicy};
use crate::error::MoveError;

/// Adjusts the bisection move's `(upper_level_frac, lower_level)` pair toward a target
/// acceptance band. The fraction is the primary dial; when a step would push it out of `[0, 1)`
/// the overflow carries into `lower_level` and the fraction wraps, mirroring how a digit carries
/// in a two-digit counter. `lower_level` never drops below 1: an attempted decrement there
/// clamps the whole pair to `(0.0, 1)` instead.
pub struct BisectionLevelMoveAdjuster {
    range: AcceptPercentageRange,
    step: f64,
    no_moves_policy: NoMovesPolicy,
}

impl BisectionLevelMoveAdjuster {
    pub fn new(range: AcceptPercentageRange, step: f64, no_moves_policy: NoMovesPolicy) -> Result<Self, MoveError> {
        if step <= 0.0 {
            return Err(MoveError::NonPositiveStepSize(step));
        }
        Ok(BisectionLevelMoveAdjuster { range, step, no_moves_policy })
    }

    pub fn adjust(
        &self,
        upper_level_frac: f64,
        lower_level: usize,
        rate: Option<f64>,
    ) -> Result<(f64, usize), MoveError> {
        let rate = match rate {
            Some(r) => r,
            None => {
                return match self.no_moves_policy {
                    NoMovesPolicy::Drop => Ok((upper_level_frac, lower_level)),
                    NoMovesPolicy::Fail => Err(MoveError::NoMovesAttempted),
                }
            }
        };

        let mut frac = upper_level_frac;
        let mut level = lower_level;

        if rate < self.range.lo {
            frac -= self.step;
        } else if rate > self.range.hi {
            frac += self.step;
        } else {
            return Ok((frac, level));
        }

        if frac < 0.0 {
            if level <= 1 {
                frac = 0.0;
                level = 1;
            } else {
                level -= 1;
                frac = 1.0 - self.step;
            }
        } else if frac >= 1.0 {
            level += 1;
            frac = self.step;
        }

        Ok((frac, level))
    }
}
