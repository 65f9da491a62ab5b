use crate::error::Result;
use crate::geometry::Polygon;
use crate::math::{Matrix3, Point2, Tolerance, Vector2};

/// An affine map of the plane, stored as a homogeneous 3x3 matrix.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transformation {
    matrix: Matrix3,
}

impl Transformation {
    #[must_use]
    pub fn new(matrix: Matrix3) -> Self {
        Self { matrix }
    }

    /// Starts an empty (identity) builder.
    #[must_use]
    pub fn builder() -> TransformationBuilder {
        TransformationBuilder::default()
    }

    #[must_use]
    pub fn matrix(&self) -> &Matrix3 {
        &self.matrix
    }

    #[must_use]
    pub fn apply_to_point(&self, p: &Point2) -> Point2 {
        let h = self.matrix * p.to_homogeneous();
        Point2::new(h.x, h.y)
    }

    /// Maps every vertex and rebuilds the polygon.
    ///
    /// # Errors
    ///
    /// Propagates validation errors of [`Polygon::from_points`], e.g. when a
    /// degenerate map collapses the outline.
    pub fn apply_to_polygon(&self, polygon: &Polygon, tol: Tolerance) -> Result<Polygon> {
        let points: Vec<Point2> = polygon
            .points()
            .iter()
            .map(|p| self.apply_to_point(p))
            .collect();
        Polygon::from_points(&points, tol)
    }
}

/// Collects transformation steps; the first step added is applied first.
#[derive(Debug, Clone, Default)]
pub struct TransformationBuilder {
    steps: Vec<Matrix3>,
}

impl TransformationBuilder {
    /// Adds a clockwise rotation about the origin (y-up frame).
    #[must_use]
    pub fn with_rotation_degrees(mut self, degrees: f64) -> Self {
        self.steps.push(Matrix3::new_rotation(-degrees.to_radians()));
        self
    }

    #[must_use]
    pub fn with_translation(mut self, x: f64, y: f64) -> Self {
        self.steps.push(Matrix3::new_translation(&Vector2::new(x, y)));
        self
    }

    #[must_use]
    pub fn build(&self) -> Transformation {
        let matrix = self
            .steps
            .iter()
            .fold(Matrix3::identity(), |acc, step| step * acc);
        Transformation::new(matrix)
    }
}
