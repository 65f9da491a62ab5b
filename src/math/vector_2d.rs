use super::{Tolerance, Vector2};

/// Operations on [`Vector2`] that nalgebra does not provide directly.
///
/// The 2D cross product is nalgebra's `perp`: `a.perp(&b) = a.x * b.y - a.y * b.x`.
pub trait VectorExt {
    /// Exact test for `(0, 0)`, no tolerance applied.
    fn is_null(&self) -> bool;

    /// The vector turned a quarter clockwise (y-up frame): `(x, y) -> (y, -x)`.
    fn clockwise_perpendicular(&self) -> Vector2;

    /// Whether the cross product with `other` is within the squared precision.
    fn parallel(&self, other: &Vector2, tol: Tolerance) -> bool;

    /// Unit vector in the same direction, `None` for the null vector.
    fn normed(&self) -> Option<Vector2>;

    /// Rotates clockwise by `degrees` (y-up frame).
    fn rotate_degrees(&self, degrees: f64) -> Vector2;
}

impl VectorExt for Vector2 {
    #[allow(clippy::float_cmp)]
    fn is_null(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    fn clockwise_perpendicular(&self) -> Vector2 {
        Vector2::new(self.y, -self.x)
    }

    fn parallel(&self, other: &Vector2, tol: Tolerance) -> bool {
        self.perp(other).abs() <= tol.precision_squared()
    }

    fn normed(&self) -> Option<Vector2> {
        if self.is_null() {
            return None;
        }
        Some(self / self.norm())
    }

    fn rotate_degrees(&self, degrees: f64) -> Vector2 {
        nalgebra::Rotation2::new(-degrees.to_radians()) * self
    }
}
