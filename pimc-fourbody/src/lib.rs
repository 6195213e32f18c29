//! The batched four-body extrapolated potential: interaction-range classification, the
//! minimum-permutation canonicalizer, short-/long-range analytic corrections, and the trained
//! rescaling model abstraction that stitches them together.

pub mod constants;
mod error;
mod extrapolated_potential;
mod interaction_range;
mod long_range;
mod permutation;
mod rescaling;
mod short_range;
mod smoothstep;

pub use error::FourBodyError;
pub use extrapolated_potential::{BufferedExtrapolatedPotential, ExtrapolatedPotential};
pub use interaction_range::{
    classify_interaction_range, interaction_range_size_allocation, is_partly_short,
    InteractionCutoffDistances, InteractionRange,
};
pub use long_range::{tetrahedron_from_six_distances, LongRangeEnergyCorrector};
pub use permutation::{approximate_minimum_permutation, minimum_permutation, transform_sample};
pub use rescaling::{
    ForwardEnergyRescaler, IdentityRescalingModel, LinearMap, LinearRescalingModel,
    RescalingEnergyModel, RescalingFunction, RescalingLimits, RescalingModel, ReverseEnergyRescaler,
};
pub use short_range::{
    ExponentialEnergyExtrapolator, ExtrapolationDistanceInfo, ExtrapolationEnergies,
    LinearEnergyExtrapolator, ShortRangeDataPreparer, ShortRangeEnergyCorrector,
};
pub use smoothstep::smooth_01;
