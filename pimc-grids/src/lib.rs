//! Dense row-major grids, counting histograms and uniform interpolators used by the tabulated
//! potentials and structural estimators.

mod error;
mod grid2d;
mod grid3d;
mod histogram;
mod interpolate;

pub use error::GridError;
pub use grid2d::Grid2D;
pub use grid3d::Grid3D;
pub use histogram::{Histogram, OutOfRangePolicy};
pub use interpolate::{RegularLinearInterpolator, TrilinearInterpolator};
