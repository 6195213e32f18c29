//! Cartesian points, periodic boxes, and the minimum-image distance kernels shared by every
//! interaction potential and move performer in the engine.

mod boxsides;
mod error;
mod measure;
mod point;

pub use boxsides::BoxSides;
pub use error::GeometryError;
pub use measure::{
    distance, distance_periodic, distance_squared, distance_squared_periodic, periodic_fold,
    shift_points_together,
};
pub use point::Point;
