use tracing::debug;

use crate::error::Result;
use crate::geometry::{Line, Polygon};
use crate::math::{Point2, Tolerance, VectorExt};

/// Grows a polygon by moving every edge outwards by a fixed distance.
///
/// # Algorithm
///
/// 1. Shift each edge along its outward normal, keeping it as an infinite line.
/// 2. Intersect each shifted line with the next one; the intersections are the
///    new vertices. Consecutive lines that are parallel yield no vertex.
///
/// Negative sizes shrink the polygon. This is a per-edge offset, not a
/// Minkowski sum: concave polygons or large sizes can produce crossing edges,
/// which the polygon constructor then rejects.
#[derive(Debug)]
pub struct PolygonSwell<'a> {
    polygon: &'a Polygon,
    size: f64,
}

impl<'a> PolygonSwell<'a> {
    /// Creates a new swell operation.
    #[must_use]
    pub fn new(polygon: &'a Polygon, size: f64) -> Self {
        Self { polygon, size }
    }

    /// Executes the swell.
    ///
    /// # Errors
    ///
    /// Propagates validation errors of [`Polygon::from_points`] for the grown
    /// outline (self-intersection, or fewer than 3 vertices left).
    pub fn execute(&self, tol: Tolerance) -> Result<Polygon> {
        let lines: Vec<Line> = self
            .polygon
            .segments()
            .iter()
            .filter_map(|ls| {
                let direction = ls.as_vector();
                // Outward for a clockwise chain.
                let grow = -direction.clockwise_perpendicular().normed()? * self.size;
                Line::new(ls.p1 + grow, direction).ok()
            })
            .collect();

        let n = lines.len();
        let points: Vec<Point2> = (0..n)
            .filter_map(|i| lines[i].intersect(&lines[(i + 1) % n]))
            .collect();

        debug!(
            size = self.size,
            edges = n,
            vertices = points.len(),
            "swelled polygon"
        );
        Polygon::from_points(&points, tol)
    }
}
