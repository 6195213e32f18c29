use crate::smoothstep::mean_of_six;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InteractionCutoffDistances {
    pub lower_short_distance: f64,
    pub upper_short_distance: f64,
    pub lower_mixed_distance: f64,
    pub upper_mixed_distance: f64,
}

impl InteractionCutoffDistances {
    /// The cutoffs baked into the trained rescaling model; see [`crate::constants`].
    pub fn from_model_constants() -> Self {
        InteractionCutoffDistances {
            lower_short_distance: crate::constants::LOWER_SHORT_DISTANCE,
            upper_short_distance: crate::constants::UPPER_SHORT_DISTANCE,
            lower_mixed_distance: crate::constants::LOWER_MIXED_DISTANCE,
            upper_mixed_distance: crate::constants::UPPER_MIXED_DISTANCE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InteractionRange {
    AbinitioShort,
    AbinitioShortmid,
    AbinitioMid,
    MixedShort,
    MixedShortmid,
    MixedMid,
    Long,
}

/// Classifies a six-tuple of pairwise distances by the mean of the six distances (inside or
/// outside the mixed-range bracket) and, within that choice, by how many distances fall below
/// the short-range cutoffs.
///
/// The reference implementation's branch lambdas here (`is_short`/`is_shortmid`) are missing
/// terminating semicolons in the source, a compile error; this reimplements the evidently
/// intended behaviour.
pub fn classify_interaction_range(
    side_lengths: &[f64; 6],
    cutoffs: &InteractionCutoffDistances,
) -> InteractionRange {
    use InteractionRange as IR;

    let average_side_length = mean_of_six(side_lengths);

    if average_side_length > cutoffs.upper_mixed_distance {
        return IR::Long;
    }

    let is_short = side_lengths.iter().any(|&x| x < cutoffs.lower_short_distance);
    let is_shortmid = side_lengths
        .iter()
        .any(|&x| x >= cutoffs.lower_short_distance && x < cutoffs.upper_short_distance);

    let is_abinitio = average_side_length < cutoffs.lower_mixed_distance;

    if is_abinitio {
        if is_short {
            IR::AbinitioShort
        } else if is_shortmid {
            IR::AbinitioShortmid
        } else {
            IR::AbinitioMid
        }
    } else if is_short {
        IR::MixedShort
    } else if is_shortmid {
        IR::MixedShortmid
    } else {
        IR::MixedMid
    }
}

/// How many rescaling-model inference rows a sample of this range requires.
pub fn interaction_range_size_allocation(ir: InteractionRange) -> usize {
    use InteractionRange as IR;
    match ir {
        IR::Long => 0,
        IR::AbinitioMid | IR::MixedMid => 1,
        IR::AbinitioShort | IR::MixedShort => 2,
        IR::AbinitioShortmid | IR::MixedShortmid => 3,
    }
}

pub fn is_partly_short(ir: InteractionRange) -> bool {
    use InteractionRange as IR;
    matches!(ir, IR::AbinitioShort | IR::AbinitioShortmid | IR::MixedShort | IR::MixedShortmid)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cutoffs() -> InteractionCutoffDistances {
        InteractionCutoffDistances::from_model_constants()
    }

    #[test]
    fn long_range_when_average_exceeds_upper_mixed() {
        let sides = [5.0; 6];
        assert_eq!(classify_interaction_range(&sides, &cutoffs()), InteractionRange::Long);
    }

    #[test]
    fn abinitio_short_when_average_low_and_one_side_ultra_short() {
        let sides = [2.1, 3.0, 3.0, 3.0, 3.0, 3.0];
        assert_eq!(classify_interaction_range(&sides, &cutoffs()), InteractionRange::AbinitioShort);
    }

    #[test]
    fn mixed_mid_when_average_high_but_below_long_cutoff() {
        let sides = [4.3; 6];
        assert_eq!(classify_interaction_range(&sides, &cutoffs()), InteractionRange::MixedMid);
    }

    #[test]
    fn size_allocation_matches_range() {
        assert_eq!(interaction_range_size_allocation(InteractionRange::Long), 0);
        assert_eq!(interaction_range_size_allocation(InteractionRange::AbinitioMid), 1);
        assert_eq!(interaction_range_size_allocation(InteractionRange::MixedShort), 2);
        assert_eq!(interaction_range_size_allocation(InteractionRange::AbinitioShortmid), 3);
    }
}
