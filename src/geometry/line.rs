use crate::error::{GeometryError, Result};
use crate::math::{Matrix2, Point2, Vector2, VectorExt};

/// An infinite line defined by a point and a direction vector.
///
/// The parametric form is: `P(t) = point + t * direction`. The direction is
/// kept as given, not normalised.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Line {
    point: Point2,
    direction: Vector2,
}

impl Line {
    /// Creates a new line through `point` along `direction`.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NullVector` if the direction is exactly zero.
    pub fn new(point: Point2, direction: Vector2) -> Result<Self> {
        if direction.is_null() {
            return Err(GeometryError::NullVector.into());
        }
        Ok(Self { point, direction })
    }

    #[must_use]
    pub fn point(&self) -> &Point2 {
        &self.point
    }

    #[must_use]
    pub fn direction(&self) -> &Vector2 {
        &self.direction
    }

    /// Point at parameter `t`.
    #[must_use]
    pub fn point_at(&self, t: f64) -> Point2 {
        self.point + self.direction * t
    }

    /// Parameter `t` of the orthogonal projection of `p` onto this line.
    #[must_use]
    pub fn project_factor(&self, p: &Point2) -> f64 {
        (p - self.point).dot(&self.direction) / self.direction.norm_squared()
    }

    /// Orthogonal projection of `p` onto this line.
    #[must_use]
    pub fn project(&self, p: &Point2) -> Point2 {
        self.point_at(self.project_factor(p))
    }

    #[must_use]
    pub fn project_distance_square(&self, p: &Point2) -> f64 {
        (self.project(p) - p).norm_squared()
    }

    #[must_use]
    pub fn project_distance(&self, p: &Point2) -> f64 {
        self.project_distance_square(p).sqrt()
    }

    /// Intersection point with another line.
    ///
    /// Solves `[d1 | -d2] * (t1, t2) = p2 - p1`. Returns `None` only when the
    /// system matrix is singular, i.e. the directions are exactly parallel.
    #[must_use]
    pub fn intersect(&self, other: &Line) -> Option<Point2> {
        let system = Matrix2::from_columns(&[self.direction, -other.direction]);
        let inverse = system.try_inverse()?;
        let params = inverse * (other.point - self.point);
        Some(self.point_at(params.x))
    }
}
