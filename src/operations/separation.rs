use tracing::debug;

use crate::error::{OperationError, Result};
use crate::geometry::Polygon;
use crate::math::{Tolerance, Vector2, VectorExt};

/// Computes the translation along a direction that moves one polygon off another.
///
/// # Algorithm
///
/// 1. **Reject**: polygons whose bounds or outlines do not overlap need no move.
/// 2. **Coarse**: move the bounding boxes apart along `direction`
///    ([`Rectangle::separation_vector`](crate::geometry::Rectangle::separation_vector)).
///    This clears the polygons but usually overshoots, since a polygon does
///    not fill its bounding box.
/// 3. **Fine**: from the coarse position, cast rays from every vertex of the
///    moved polygon back against `direction` onto the obstacle, and from every
///    obstacle vertex along `direction` onto the moved polygon. The shortest
///    hit is the slack; moving back by it brings the polygons into contact.
#[derive(Debug)]
pub struct SeparationVector<'a> {
    moving: &'a Polygon,
    obstacle: &'a Polygon,
    direction: Vector2,
}

impl<'a> SeparationVector<'a> {
    /// Creates a new separation query for moving `moving` off `obstacle`.
    #[must_use]
    pub fn new(moving: &'a Polygon, obstacle: &'a Polygon, direction: Vector2) -> Self {
        Self {
            moving,
            obstacle,
            direction,
        }
    }

    /// Executes the query, returning a multiple of the direction.
    ///
    /// # Errors
    ///
    /// - `OperationError::NullDirection` if the direction is the null vector
    /// - validation errors when translating the moving polygon
    pub fn execute(&self, tol: Tolerance) -> Result<Vector2> {
        let Some(unit) = self.direction.normed() else {
            return Err(OperationError::NullDirection.into());
        };

        let moving_bounds = self.moving.bounds();
        let obstacle_bounds = self.obstacle.bounds();
        if !moving_bounds.overlap(&obstacle_bounds) || !self.moving.overlap(self.obstacle, tol) {
            return Ok(Vector2::zeros());
        }

        let coarse = moving_bounds.separation_vector(&obstacle_bounds, &self.direction)?;
        let moved = self.moving.translate(coarse.x, coarse.y, tol)?;

        let back = -self.direction;
        let slack = moved
            .points()
            .into_iter()
            .filter_map(|p| self.obstacle.distance_to_perimeter(&p, &back, tol))
            .chain(
                self.obstacle
                    .points()
                    .into_iter()
                    .filter_map(|p| moved.distance_to_perimeter(&p, &self.direction, tol)),
            )
            .fold(f64::INFINITY, f64::min);

        if !slack.is_finite() {
            debug!(x = coarse.x, y = coarse.y, "no slack after coarse separation");
            return Ok(coarse);
        }
        let result = coarse - unit * slack;
        debug!(slack, x = result.x, y = result.y, "separation vector");
        Ok(result)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use approx::assert_relative_eq;

    use super::*;
    use crate::error::PlanarError;

    fn tol() -> Tolerance {
        Tolerance::default()
    }

    fn polygon(coords: &[[f64; 2]]) -> Polygon {
        Polygon::from_coords(coords, tol()).unwrap()
    }

    fn square(x: f64, y: f64, size: f64) -> Polygon {
        polygon(&[[x, y], [x + size, y], [x + size, y + size], [x, y + size]])
    }

    #[test]
    fn disjoint_polygons_need_no_move() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(3.0, 0.0, 1.0);
        let v = a.separation_vector(&b, &Vector2::new(1.0, 0.0), tol()).unwrap();
        assert!(v.is_null());
    }

    #[test]
    fn touching_polygons_need_no_move() {
        let a = square(0.0, 0.0, 1.0);
        let b = square(1.0, 0.0, 1.0);
        let v = a.separation_vector(&b, &Vector2::new(1.0, 0.0), tol()).unwrap();
        assert!(v.is_null());
    }

    #[test]
    fn overlapping_squares_match_bounding_boxes() {
        let a = square(0.0, 0.0, 2.0);
        let b = square(1.0, 0.5, 2.0);
        let left = a.separation_vector(&b, &Vector2::new(-1.0, 0.0), tol()).unwrap();
        assert_relative_eq!(left, Vector2::new(-1.0, 0.0), epsilon = 1e-9);
        let right = a.separation_vector(&b, &Vector2::new(2.0, 0.0), tol()).unwrap();
        assert_relative_eq!(right, Vector2::new(3.0, 0.0), epsilon = 1e-9);
    }

    #[test]
    fn slack_under_a_slanted_edge_is_removed() {
        let a = square(0.0, 0.0, 2.0);
        let wedge = polygon(&[[1.0, 1.0], [4.0, -2.0], [4.0, 4.0]]);
        // Bounding boxes clear after moving up by 4; the wedge itself only
        // reaches y = 0 within the square's width.
        let v = a.separation_vector(&wedge, &Vector2::new(0.0, -1.0), tol()).unwrap();
        assert_relative_eq!(v, Vector2::new(0.0, -2.0), epsilon = 1e-9);

        let moved = a.translate(v.x, v.y, tol()).unwrap();
        assert!(!moved.contains_any_point_of(&wedge, tol()));
        assert!(!wedge.contains_any_point_of(&moved, tol()));
    }

    #[test]
    fn null_direction_rejected() {
        let a = square(0.0, 0.0, 1.0);
        let err = a.separation_vector(&a, &Vector2::zeros(), tol()).unwrap_err();
        assert_eq!(err, PlanarError::Operation(OperationError::NullDirection));
    }
}
