use crate::error::Result;
use crate::math::{Interval, IntervalType, Point2, Tolerance, Vector2, VectorExt};

use super::Line;

/// A bounded piece of a line, from `p1` (t = 0) to `p2` (t = 1).
///
/// Degenerate segments with `p1 == p2` are allowed. They have no supporting
/// line, never intersect another segment and contain only their own point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LineSegment {
    pub p1: Point2,
    pub p2: Point2,
}

impl LineSegment {
    #[must_use]
    pub fn new(p1: Point2, p2: Point2) -> Self {
        Self { p1, p2 }
    }

    #[must_use]
    pub fn from_values(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self::new(Point2::new(x1, y1), Point2::new(x2, y2))
    }

    /// The vector from `p1` to `p2`.
    #[must_use]
    pub fn as_vector(&self) -> Vector2 {
        self.p2 - self.p1
    }

    #[must_use]
    pub fn length(&self) -> f64 {
        self.as_vector().norm()
    }

    #[must_use]
    pub fn midpoint(&self) -> Point2 {
        nalgebra::center(&self.p1, &self.p2)
    }

    /// The same segment traversed from `p2` to `p1`.
    #[must_use]
    pub fn flip(&self) -> Self {
        Self::new(self.p2, self.p1)
    }

    #[must_use]
    pub fn translate(&self, dx: f64, dy: f64) -> Self {
        let offset = Vector2::new(dx, dy);
        Self::new(self.p1 + offset, self.p2 + offset)
    }

    /// The part of this segment from `p` to `p2`.
    #[must_use]
    pub fn start_from(&self, p: Point2) -> Self {
        Self::new(p, self.p2)
    }

    /// Whether both endpoints match within tolerance, in order.
    #[must_use]
    pub fn approx_eq(&self, other: &LineSegment, tol: Tolerance) -> bool {
        tol.eq_points(&self.p1, &other.p1) && tol.eq_points(&self.p2, &other.p2)
    }

    /// The infinite line through this segment.
    ///
    /// # Errors
    ///
    /// Returns `GeometryError::NullVector` for a degenerate segment.
    pub fn supporting_line(&self) -> Result<Line> {
        Line::new(self.p1, self.as_vector())
    }

    /// The point of this segment closest to `p`.
    #[must_use]
    pub fn closest_point(&self, p: &Point2) -> Point2 {
        let Ok(line) = self.supporting_line() else {
            return self.p1;
        };
        let factor = line.project_factor(p);
        if factor >= 1.0 {
            self.p2
        } else if factor <= 0.0 {
            self.p1
        } else {
            line.point_at(factor)
        }
    }

    /// Whether `p` lies on the infinite line through this segment.
    #[must_use]
    pub fn on_line(&self, p: &Point2, tol: Tolerance) -> bool {
        match self.supporting_line() {
            Ok(line) => line.project_distance_square(p) <= tol.precision_squared(),
            Err(_) => tol.eq_points(&self.p1, p),
        }
    }

    /// Whether `p` lies on this segment, with `interval` deciding whether
    /// the endpoints themselves count.
    #[must_use]
    pub fn contains_point(&self, p: &Point2, interval: IntervalType, tol: Tolerance) -> bool {
        let d = self.as_vector();
        let w = p - self.p1;
        let along = w.dot(&d);
        if along < 0.0 || along > d.norm_squared() + tol.precision_squared() {
            return false;
        }
        if w.perp(&d).abs() > tol.precision() {
            return false;
        }
        if d.is_null() {
            return interval != IntervalType::Open && tol.eq_points(p, &self.p1);
        }
        let excluded_start = !interval.includes_start() && tol.eq_points(p, &self.p1);
        let excluded_end = !interval.includes_end() && tol.eq_points(p, &self.p2);
        !(excluded_start || excluded_end)
    }

    /// Closed-interval intersection with another segment.
    #[must_use]
    pub fn intersect(&self, other: &LineSegment, tol: Tolerance) -> Option<Point2> {
        self.intersect_with(other, IntervalType::Closed, IntervalType::Closed, tol)
    }

    /// Intersection with another segment where each side decides whether its
    /// endpoints count. Returns `None` for parallel segments.
    #[must_use]
    pub fn intersect_with(
        &self,
        other: &LineSegment,
        other_interval: IntervalType,
        this_interval: IntervalType,
        tol: Tolerance,
    ) -> Option<Point2> {
        let this_line = self.supporting_line().ok()?;
        let other_line = other.supporting_line().ok()?;
        this_line.intersect(&other_line).filter(|p| {
            other.contains_point(p, other_interval, tol)
                && self.contains_point(p, this_interval, tol)
        })
    }

    /// Intersection that ignores hits on `self.p1` or `other.p1`.
    ///
    /// Consecutive segments of a closed chain always meet at a start point,
    /// so this only reports crossings between them that are not that joint.
    #[must_use]
    pub fn intersect_half_open(&self, other: &LineSegment, tol: Tolerance) -> Option<Point2> {
        self.intersect(other, tol)
            .filter(|p| !tol.eq_points(p, &self.p1) && !tol.eq_points(p, &other.p1))
    }

    /// Whether a ray from `p` in the +x direction crosses this segment.
    ///
    /// `interval_type` refers to `p1`/`p2` of this segment and decides
    /// whether a ray through an endpoint counts.
    #[must_use]
    pub fn right_of_point(&self, p: &Point2, interval_type: IntervalType) -> bool {
        let (top, bottom, span_type) = if self.p1.y <= self.p2.y {
            (self.p1, self.p2, interval_type)
        } else {
            (self.p2, self.p1, interval_type.flipped())
        };
        if !Interval::new(top.y, bottom.y, span_type).contains(p.y) {
            return false;
        }
        #[allow(clippy::float_cmp)]
        let horizontal = top.y == bottom.y;
        if horizontal {
            return p.x < top.x && p.x < bottom.x;
        }
        (bottom - top).perp(&(p - top)) >= 0.0
    }

    /// Whether the segments intersect or one contains an endpoint of the other.
    ///
    /// Unlike [`LineSegment::intersect`] this also reports collinear overlap.
    #[must_use]
    pub fn overlap(&self, other: &LineSegment, tol: Tolerance) -> bool {
        let closed = IntervalType::Closed;
        self.intersect(other, tol).is_some()
            || self.contains_point(&other.p1, closed, tol)
            || self.contains_point(&other.p2, closed, tol)
            || other.contains_point(&self.p1, closed, tol)
            || other.contains_point(&self.p2, closed, tol)
    }

    #[must_use]
    pub fn parallel(&self, other: &LineSegment, tol: Tolerance) -> bool {
        self.as_vector().parallel(&other.as_vector(), tol)
    }

    /// Whether the segments meet at one of `other`'s endpoints.
    #[must_use]
    pub fn intersect_at_ends(&self, other: &LineSegment, tol: Tolerance) -> bool {
        self.intersect(other, tol)
            .is_some_and(|p| tol.eq_points(&p, &other.p1) || tol.eq_points(&p, &other.p2))
    }
}
