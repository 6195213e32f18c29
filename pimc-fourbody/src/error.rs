use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FourBodyError {
    #[error("the short-range scaling step must be positive, found {0:e}")]
    NonPositiveScalingStep(f64),
    #[error("the short-range cutoff must be positive, found {0:e}")]
    NonPositiveShortRangeCutoff(f64),
    #[error("the absolute energy floor must be positive, found {0:e}")]
    NonPositiveEnergyFloor(f64),
    #[error("short-range extrapolation slope bounds must be positive, found min={0:e} max={1:e}")]
    NonPositiveSlopeBound(f64, f64),
    #[error("the minimum slope {0:e} must be smaller than the maximum slope {1:e}")]
    SlopeOutOfOrder(f64, f64),
    #[error("the sample buffer capacity must be positive, found {0}")]
    NonPositiveBufferSize(usize),
    #[error("input and side-length-group batches have different sizes: {0} vs {1}")]
    MismatchedBatchSizes(usize, usize),
}
