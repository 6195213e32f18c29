use crate::error::FourBodyError;
use crate::smoothstep::{is_same_sign, smooth_01};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrapolationEnergies {
    pub lower: f64,
    pub upper: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrapolationDistanceInfo {
    pub r_short_range: f64,
    pub r_lower: f64,
    pub r_upper: f64,
}

/// Extrapolates linearly between two anchor energies at `r_lower`/`r_upper` down to
/// `r_short_range`.
#[derive(Debug, Clone, Copy)]
pub struct LinearEnergyExtrapolator {
    energies: ExtrapolationEnergies,
    distances: ExtrapolationDistanceInfo,
}

impl LinearEnergyExtrapolator {
    pub fn new(energies: ExtrapolationEnergies, distances: ExtrapolationDistanceInfo) -> Self {
        LinearEnergyExtrapolator { energies, distances }
    }

    pub fn slope(&self) -> f64 {
        (self.energies.upper - self.energies.lower) / (self.distances.r_upper - self.distances.r_lower)
    }

    pub fn energy(&self) -> f64 {
        let dist_shift = self.distances.r_short_range - self.distances.r_lower;
        self.energies.lower + self.slope() * dist_shift
    }
}

/// Extrapolates exponentially between two anchor energies, floored in magnitude to avoid a
/// singular logarithm when an anchor energy is (numerically) zero.
#[derive(Debug, Clone, Copy)]
pub struct ExponentialEnergyExtrapolator {
    energies: ExtrapolationEnergies,
    distances: ExtrapolationDistanceInfo,
    abs_energy_floor: f64,
}

impl ExponentialEnergyExtrapolator {
    pub fn new(
        energies: ExtrapolationEnergies,
        distances: ExtrapolationDistanceInfo,
    ) -> Result<Self, FourBodyError> {
        Self::with_floor(energies, distances, 1.0e-8)
    }

    pub fn with_floor(
        energies: ExtrapolationEnergies,
        distances: ExtrapolationDistanceInfo,
        abs_energy_floor: f64,
    ) -> Result<Self, FourBodyError> {
        if abs_energy_floor <= 0.0 {
            return Err(FourBodyError::NonPositiveEnergyFloor(abs_energy_floor));
        }
        Ok(ExponentialEnergyExtrapolator { energies, distances, abs_energy_floor })
    }

    pub fn slope(&self) -> f64 {
        let lower_floor = self.abs_energy_floor.max(self.energies.lower.abs());
        let upper_floor = self.abs_energy_floor.max(self.energies.upper.abs());

        let log_energy_sep = (upper_floor / lower_floor).ln();
        let log_distance_sep = self.distances.r_upper - self.distances.r_lower;

        -log_energy_sep / log_distance_sep
    }

    pub fn energy(&self) -> f64 {
        let dist_shift = self.distances.r_short_range - self.distances.r_lower;
        self.energies.lower * (-self.slope() * dist_shift).exp()
    }

    pub fn is_magnitude_increasing_with_distance(&self) -> bool {
        self.slope() < 0.0
    }
}

/// Builds the two synthetic short-range anchor samples (scaled towards the tabulated edge of
/// the short-range bracket) from a raw six-side-length sample.
#[derive(Debug, Clone, Copy)]
pub struct ShortRangeDataPreparer {
    side_lower: f64,
    side_upper: f64,
}

impl ShortRangeDataPreparer {
    pub fn new(scaling_step: f64, short_range_cutoff: f64) -> Result<Self, FourBodyError> {
        if scaling_step <= 0.0 {
            return Err(FourBodyError::NonPositiveScalingStep(scaling_step));
        }
        if short_range_cutoff <= 0.0 {
            return Err(FourBodyError::NonPositiveShortRangeCutoff(short_range_cutoff));
        }
        Ok(ShortRangeDataPreparer {
            side_lower: short_range_cutoff,
            side_upper: short_range_cutoff + scaling_step,
        })
    }

    /// Requires (without checking) `0 < shortest_side <= short_range_cutoff`.
    pub fn prepare(&self, side_lengths: &[f64; 6]) -> ([f64; 6], [f64; 6], ExtrapolationDistanceInfo) {
        let side_shortest = side_lengths.iter().cloned().fold(f64::INFINITY, f64::min);
        let scaling_ratio_lower = self.side_lower / side_shortest;
        let scaling_ratio_upper = self.side_upper / side_shortest;

        let scale = |ratio: f64| {
            let mut out = [0.0; 6];
            for i in 0..6 {
                out[i] = ratio * side_lengths[i];
            }
            out
        };

        let sample_lower = scale(scaling_ratio_lower);
        let sample_upper = scale(scaling_ratio_upper);

        let distance_info = ExtrapolationDistanceInfo {
            r_short_range: side_shortest,
            r_lower: self.side_lower,
            r_upper: self.side_upper,
        };

        (sample_lower, sample_upper, distance_info)
    }
}

/// Blends linear and exponential short-range extrapolation according to the exponential
/// extrapolator's slope, falling back to linear whenever the exponential form is ill-behaved.
#[derive(Debug, Clone, Copy)]
pub struct ShortRangeEnergyCorrector {
    slope_min: f64,
    slope_max: f64,
}

impl ShortRangeEnergyCorrector {
    pub fn new(slope_min: f64, slope_max: f64) -> Result<Self, FourBodyError> {
        if slope_min <= 0.0 || slope_max <= 0.0 {
            return Err(FourBodyError::NonPositiveSlopeBound(slope_min, slope_max));
        }
        if slope_min >= slope_max {
            return Err(FourBodyError::SlopeOutOfOrder(slope_min, slope_max));
        }
        Ok(ShortRangeEnergyCorrector { slope_min, slope_max })
    }

    pub fn correct(
        &self,
        energies: ExtrapolationEnergies,
        distances: ExtrapolationDistanceInfo,
    ) -> f64 {
        let linear = LinearEnergyExtrapolator::new(energies, distances);

        if !is_same_sign(energies.lower, energies.upper) {
            return linear.energy();
        }

        let expon = ExponentialEnergyExtrapolator::new(energies, distances)
            .expect("the hard-coded default energy floor is always positive");

        if expon.is_magnitude_increasing_with_distance() {
            return linear.energy();
        }

        let slope = expon.slope();
        if slope <= self.slope_min {
            expon.energy()
        } else if slope >= self.slope_max {
            linear.energy()
        } else {
            let frac_linear = smooth_01(slope, self.slope_min, self.slope_max);
            let frac_expon = 1.0 - frac_linear;
            frac_linear * linear.energy() + frac_expon * expon.energy()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linear_extrapolator_reduces_to_anchor_at_r_lower() {
        let energies = ExtrapolationEnergies { lower: 1.0, upper: 3.0 };
        let distances = ExtrapolationDistanceInfo { r_short_range: 2.0, r_lower: 2.0, r_upper: 2.25 };
        let lin = LinearEnergyExtrapolator::new(energies, distances);
        assert!((lin.energy() - 1.0).abs() < 1e-12);
    }

    #[test]
    fn corrector_uses_linear_for_opposite_sign_anchors() {
        let corrector = ShortRangeEnergyCorrector::new(6.0, 8.0).unwrap();
        let energies = ExtrapolationEnergies { lower: -1.0, upper: 1.0 };
        let distances = ExtrapolationDistanceInfo { r_short_range: 2.0, r_lower: 2.2, r_upper: 2.25 };
        let e = corrector.correct(energies, distances);
        let linear = LinearEnergyExtrapolator::new(energies, distances).energy();
        assert!((e - linear).abs() < 1e-12);
    }

    #[test]
    fn data_preparer_scales_toward_cutoff_bracket() {
        let preparer = ShortRangeDataPreparer::new(0.05, 2.2).unwrap();
        let sides = [1.0, 1.1, 1.2, 1.3, 1.4, 1.5];
        let (lower, upper, info) = preparer.prepare(&sides);
        assert!((info.r_short_range - 1.0).abs() < 1e-12);
        assert!((info.r_lower - 2.2).abs() < 1e-12);
        assert!((info.r_upper - 2.25).abs() < 1e-12);
        assert!((lower[0] - 2.2).abs() < 1e-9);
        assert!((upper[0] - 2.25).abs() < 1e-9);
    }

    #[test]
    fn rejects_invalid_slope_bounds() {
        assert!(ShortRangeEnergyCorrector::new(-1.0, 8.0).is_err());
        assert!(ShortRangeEnergyCorrector::new(8.0, 6.0).is_err());
    }
}
