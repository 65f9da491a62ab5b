pub mod interval;
pub mod polygon_2d;
pub mod tolerance;
pub mod vector_2d;

pub use interval::{Interval, IntervalType};
pub use tolerance::{Tolerance, DEFAULT_PRECISION};
pub use vector_2d::VectorExt;

/// 2D point type.
pub type Point2 = nalgebra::Point2<f64>;

/// 2D vector type.
pub type Vector2 = nalgebra::Vector2<f64>;

/// 2x2 matrix, used to solve line-line systems.
pub type Matrix2 = nalgebra::Matrix2<f64>;

/// 3x3 homogeneous transformation matrix.
pub type Matrix3 = nalgebra::Matrix3<f64>;
