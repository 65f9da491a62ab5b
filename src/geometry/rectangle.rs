use crate::error::{GeometryError, OperationError, Result};
use crate::math::{Point2, Tolerance, Vector2, VectorExt};

use super::Polygon;

/// An axis-aligned rectangle given by its top-left and bottom-right corners.
///
/// `top_left` has the smaller coordinates on both axes (y grows downwards).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rectangle {
    top_left: Point2,
    bottom_right: Point2,
}

impl Rectangle {
    /// Creates a rectangle from its corners.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::MalformedRectangle` if `top_left` lies right of
    /// or below `bottom_right`.
    pub fn new(top_left: Point2, bottom_right: Point2) -> Result<Self> {
        if top_left.x > bottom_right.x || top_left.y > bottom_right.y {
            return Err(GeometryError::MalformedRectangle {
                left: top_left.x,
                top: top_left.y,
                right: bottom_right.x,
                bottom: bottom_right.y,
            }
            .into());
        }
        Ok(Self {
            top_left,
            bottom_right,
        })
    }

    /// Rectangle spanned by already ordered extents.
    pub(crate) fn from_extents(min: Point2, max: Point2) -> Self {
        Self {
            top_left: min,
            bottom_right: max,
        }
    }

    /// Creates a rectangle from corner coordinates.
    ///
    /// # Errors
    ///
    /// See [`Rectangle::new`].
    pub fn from_values(left: f64, top: f64, right: f64, bottom: f64) -> Result<Self> {
        Self::new(Point2::new(left, top), Point2::new(right, bottom))
    }

    #[must_use]
    pub fn top_left(&self) -> &Point2 {
        &self.top_left
    }

    #[must_use]
    pub fn bottom_right(&self) -> &Point2 {
        &self.bottom_right
    }

    #[must_use]
    pub fn width(&self) -> f64 {
        self.bottom_right.x - self.top_left.x
    }

    #[must_use]
    pub fn height(&self) -> f64 {
        self.bottom_right.y - self.top_left.y
    }

    #[must_use]
    pub fn middle(&self) -> Point2 {
        nalgebra::center(&self.top_left, &self.bottom_right)
    }

    #[must_use]
    pub fn translate(&self, offset: &Vector2) -> Self {
        Self {
            top_left: self.top_left + offset,
            bottom_right: self.bottom_right + offset,
        }
    }

    /// Whether the interiors intersect. Rectangles sharing only an edge or a
    /// corner do not overlap.
    #[must_use]
    pub fn overlap(&self, other: &Rectangle) -> bool {
        self.top_left.x < other.bottom_right.x
            && other.top_left.x < self.bottom_right.x
            && self.top_left.y < other.bottom_right.y
            && other.top_left.y < self.bottom_right.y
    }

    /// Smallest translation along `direction` that moves `self` off `other`.
    ///
    /// Returns the null vector when the rectangles do not overlap. Otherwise
    /// each axis with a non-zero direction component yields the multiple of
    /// `direction` that puts one of our edges on the opposite edge of `other`;
    /// the smallest positive multiple wins.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::NullDirection` if `direction` is the null vector.
    pub fn separation_vector(&self, other: &Rectangle, direction: &Vector2) -> Result<Vector2> {
        if direction.is_null() {
            return Err(OperationError::NullDirection.into());
        }
        if !self.overlap(other) {
            return Ok(Vector2::zeros());
        }
        let candidates = [
            safe_div(other.bottom_right.x - self.top_left.x, direction.x),
            safe_div(other.top_left.x - self.bottom_right.x, direction.x),
            safe_div(other.bottom_right.y - self.top_left.y, direction.y),
            safe_div(other.top_left.y - self.bottom_right.y, direction.y),
        ];
        let factor = candidates
            .into_iter()
            .flatten()
            .filter(|f| *f > 0.0)
            .fold(f64::INFINITY, f64::min);
        if factor.is_finite() {
            Ok(direction * factor)
        } else {
            Ok(Vector2::zeros())
        }
    }

    /// The rectangle as a four-cornered polygon.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::SelfIntersectingPolygon` for a rectangle with
    /// zero width or height.
    pub fn to_polygon(&self, tol: Tolerance) -> Result<Polygon> {
        let (l, t) = (self.top_left.x, self.top_left.y);
        let (r, b) = (self.bottom_right.x, self.bottom_right.y);
        Polygon::from_points(
            &[
                Point2::new(l, t),
                Point2::new(r, t),
                Point2::new(r, b),
                Point2::new(l, b),
            ],
            tol,
        )
    }
}

#[allow(clippy::float_cmp)]
fn safe_div(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator)
    }
}
