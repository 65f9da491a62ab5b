use thiserror::Error;

/// Top-level error type for the planar geometry crate.
#[derive(Debug, Error, PartialEq)]
pub enum PlanarError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Operation(#[from] OperationError),
}

/// Construction-invariant violations of the geometric value types.
#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("zero-length direction vector")]
    NullVector,

    #[error("polygon segments {first} and {second} intersect each other")]
    SelfIntersectingPolygon { first: usize, second: usize },

    #[error("a polygon needs at least 3 points, got {count}")]
    TooFewPoints { count: usize },

    #[error("({left}, {top}) must be top left compared to ({right}, {bottom})")]
    MalformedRectangle {
        left: f64,
        top: f64,
        right: f64,
        bottom: f64,
    },

    #[error("precision must be a non-negative number, got {0}")]
    NegativePrecision(f64),
}

/// Precondition violations when running operations on valid geometry.
#[derive(Debug, Error, PartialEq)]
pub enum OperationError {
    #[error("no line segment found starting from ({x}, {y})")]
    SegmentNotFound { x: f64, y: f64 },

    #[error("direction must not be the null vector")]
    NullDirection,

    #[error("polygons do not overlap")]
    NoOverlap,

    #[error("boundary walk did not close after {steps} steps")]
    MergeDidNotConverge { steps: usize },
}

/// Convenience type alias for results using [`PlanarError`].
pub type Result<T> = std::result::Result<T, PlanarError>;
