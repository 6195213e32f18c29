//! Constants tied to the trained four-body rescaling model and its extrapolation bracket.
//!
//! These are not user-tunable: changing them invalidates the rescaling model's training-time
//! normalization. They live in code, not in the TOML config, for the same reason the source
//! keeps them as compile-time constants rather than file-configurable parameters.

pub const MIN_SIDELENGTH: f64 = 2.2;
pub const MAX_SIDELENGTH: f64 = 4.5;

pub const STANDARDIZE_FROM_LEFT: f64 = 0.0;
pub const STANDARDIZE_FROM_RIGHT: f64 = 1.0 / MIN_SIDELENGTH;
pub const STANDARDIZE_TO_LEFT: f64 = 0.0;
pub const STANDARDIZE_TO_RIGHT: f64 = 1.0;

pub const BADE_COEFF_MIDZUNO_KIHARA: f64 = 33760.087_994_870_81;
pub const BADE_COEFF_AVDZ: f64 = 31666.962_539_188_82;
pub const BADE_COEFF_AVTZ: f64 = 29492.812_872_319_14;

pub const SHORT_RANGE_CORRECT_SLOPE_MIN: f64 = 6.0;
pub const SHORT_RANGE_CORRECT_SLOPE_MAX: f64 = 8.0;

pub const RESCALING_EXPON_COEFF: f64 = 3_180_260.750_0;
pub const RESCALING_EXPON_DECAY: f64 = 4.623_057;
pub const RESCALING_DISP_COEFF: f64 = 4220.011;

pub const REVERSE_RESCALING_LIMITS_TO_LEFT: f64 = -1.0;
pub const REVERSE_RESCALING_LIMITS_TO_RIGHT: f64 = 1.0;
pub const REVERSE_RESCALING_LIMITS_FROM_LEFT: f64 = -3.261_990_308_761_596_7;
pub const REVERSE_RESCALING_LIMITS_FROM_RIGHT: f64 = 8.645_921_707_153_32;

pub const SHORT_RANGE_SCALING_STEP: f64 = 0.01;

pub const LOWER_SHORT_DISTANCE: f64 = 2.2;
pub const UPPER_SHORT_DISTANCE: f64 = 2.25;
pub const LOWER_MIXED_DISTANCE: f64 = 4.0;
pub const UPPER_MIXED_DISTANCE: f64 = 4.5;
