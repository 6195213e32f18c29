use pimc_grids::RegularLinearInterpolator;

use crate::error::PotentialError;

/// Whether the tabulated pair potential falls through to an analytic C6/r^6 tail beyond the
/// last tabulated squared distance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LongRangeCheck {
    On,
    Off,
}

/// A tabulated two-body potential indexed by squared distance, interpolated linearly across
/// the tabulated range. With `LongRangeCheck::On`, distances beyond the last tabulated point
/// fall back to a C6/r^6 multipole tail whose coefficient is fitted from the last two samples.
#[derive(Debug, Clone)]
pub struct FshPairPotential {
    interpolator: RegularLinearInterpolator,
    c6_multipole_coeff: f64,
    r2_max: f64,
    long_range_check: LongRangeCheck,
}

impl FshPairPotential {
    pub fn new(
        energies: Vec<f64>,
        r2_min: f64,
        r2_max: f64,
        long_range_check: LongRangeCheck,
    ) -> Result<Self, PotentialError> {
        if energies.len() < 2 {
            return Err(PotentialError::NotEnoughSamples(energies.len()));
        }
        let c6_multipole_coeff = calculate_c6_multipole_coeff(&energies, r2_min, r2_max);
        let interpolator = RegularLinearInterpolator::new(energies, r2_min, r2_max)
            .expect("length already checked above");
        Ok(FshPairPotential { interpolator, c6_multipole_coeff, r2_max, long_range_check })
    }

    pub fn evaluate(&self, dist_squared: f64) -> f64 {
        match self.long_range_check {
            LongRangeCheck::Off => self
                .interpolator
                .evaluate(dist_squared)
                .unwrap_or_else(|_| self.tail(dist_squared)),
            LongRangeCheck::On => {
                if dist_squared >= self.r2_max {
                    self.tail(dist_squared)
                } else {
                    self.interpolator
                        .evaluate(dist_squared)
                        .expect("dist_squared < r2_max is within the tabulated range")
                }
            }
        }
    }

    fn tail(&self, dist_squared: f64) -> f64 {
        let dist_pow6 = dist_squared * dist_squared * dist_squared;
        self.c6_multipole_coeff / dist_pow6
    }
}

/// Fits the C6 coefficient of a 1/r^6 tail from the last two tabulated energy samples, so the
/// tail meets the table continuously (though not necessarily with a continuous derivative).
fn calculate_c6_multipole_coeff(energies: &[f64], r2_min: f64, r2_max: f64) -> f64 {
    let size = energies.len();
    let r2_step = (r2_max - r2_min) / (size - 1) as f64;

    let energy_step = energies[size - 1] - energies[size - 2];

    let r2_last = r2_max;
    let r2_sec_last = r2_max - r2_step;

    let r2_term0 = r2_sec_last * r2_sec_last * r2_sec_last;
    let r2_term1 = r2_last * r2_last * r2_last;

    energy_step / (1.0 / r2_term0 - 1.0 / r2_term1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_too_few_samples() {
        let err = FshPairPotential::new(vec![1.0], 0.0, 1.0, LongRangeCheck::On);
        assert!(matches!(err, Err(PotentialError::NotEnoughSamples(1))));
    }

    #[test]
    fn interpolates_within_table() {
        let pot =
            FshPairPotential::new(vec![10.0, 5.0, 0.0], 1.0, 3.0, LongRangeCheck::Off).unwrap();
        assert!((pot.evaluate(2.0) - 5.0).abs() < 1e-12);
    }

    #[test]
    fn falls_back_to_tail_beyond_table_with_check_on() {
        let pot =
            FshPairPotential::new(vec![10.0, 5.0, 1.0], 1.0, 3.0, LongRangeCheck::On).unwrap();
        let inside = pot.evaluate(2.9);
        let outside = pot.evaluate(3.0);
        assert!(inside.is_finite());
        assert!(outside.is_finite());
    }
}
