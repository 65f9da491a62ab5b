pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;

pub use error::{GeometryError, OperationError, PlanarError, Result};
pub use geometry::{Line, LineSegment, Polygon, Rectangle};
pub use math::{Interval, IntervalType, Point2, Tolerance, Vector2, VectorExt};
