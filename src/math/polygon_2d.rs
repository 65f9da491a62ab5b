use super::{Point2, Vector2};

/// Sum of cross products of consecutive edge directions of a closed chain.
///
/// Each term is `|a| * |b| * sin(turn)`, so the sign follows the dominant
/// turning direction of the chain.
#[must_use]
pub fn turn_sum(directions: &[Vector2]) -> f64 {
    let n = directions.len();
    let mut sum = 0.0;
    for i in 0..n {
        let j = (i + 1) % n;
        sum += directions[i].perp(&directions[j]);
    }
    sum
}

/// Whether a closed chain of edge directions winds clockwise.
///
/// Clockwise here means a negative [`turn_sum`].
#[must_use]
pub fn is_clockwise(directions: &[Vector2]) -> bool {
    turn_sum(directions) < 0.0
}

/// Component-wise minimum and maximum of a set of points.
///
/// Returns `None` for an empty slice.
#[must_use]
pub fn point_extents(points: &[Point2]) -> Option<(Point2, Point2)> {
    let first = points.first()?;
    let mut min = *first;
    let mut max = *first;
    for pt in &points[1..] {
        min.x = min.x.min(pt.x);
        min.y = min.y.min(pt.y);
        max.x = max.x.max(pt.x);
        max.y = max.y.max(pt.y);
    }
    Some((min, max))
}

/// Closed-chain edge directions: `points[i + 1] - points[i]`, wrapping around.
#[must_use]
pub fn edge_directions(points: &[Point2]) -> Vec<Vector2> {
    let n = points.len();
    (0..n).map(|i| points[(i + 1) % n] - points[i]).collect()
}
