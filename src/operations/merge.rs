use tracing::{debug, trace};

use crate::error::{OperationError, Result};
use crate::geometry::Polygon;
use crate::math::{IntervalType, Point2, Tolerance};

/// Which input polygon the boundary walk is currently following.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Side {
    First,
    Second,
}

impl Side {
    fn other(self) -> Self {
        match self {
            Self::First => Self::Second,
            Self::Second => Self::First,
        }
    }
}

/// Position of the walk: following segment `segment` of `side`, starting at `start`.
#[derive(Debug, Clone, Copy)]
struct WalkState {
    side: Side,
    segment: usize,
    start: Point2,
}

/// Computes the outer boundary of two overlapping polygons.
///
/// # Algorithm
///
/// 1. Start at a vertex of the first polygon that lies outside the second and
///    off its boundary, or the other way round if the first has none.
/// 2. Walk the current polygon's boundary. When the current segment is
///    crossed by the other polygon, emit the crossing closest to the
///    segment's start and continue on the other polygon from there.
///    Otherwise emit the segment's end and move to the next segment.
/// 3. Stop as soon as an emitted point was already recorded.
///
/// Both polygons share the same (clockwise) orientation, so hopping at a
/// crossing always continues along the outside of the union. Overlaps that
/// produce more than one outer loop are not supported; the walk then either
/// returns one of the loops or fails with `MergeDidNotConverge`.
#[derive(Debug)]
pub struct PolygonMerge<'a> {
    first: &'a Polygon,
    second: &'a Polygon,
}

impl<'a> PolygonMerge<'a> {
    /// Creates a new merge operation.
    #[must_use]
    pub fn new(first: &'a Polygon, second: &'a Polygon) -> Self {
        Self { first, second }
    }

    /// Executes the merge.
    ///
    /// If one polygon lies inside the other, possibly touching its boundary,
    /// the enclosing polygon is returned.
    ///
    /// # Errors
    ///
    /// - `OperationError::NoOverlap` if the polygons do not overlap (touching
    ///   along an edge is not an overlap)
    /// - `OperationError::MergeDidNotConverge` if the walk does not close or
    ///   finds no vertex to start from
    /// - validation errors of [`Polygon::from_points`] for the merged outline
    pub fn execute(&self, tol: Tolerance) -> Result<Polygon> {
        let (first, second) = (self.first, self.second);
        if !first.overlap(second, tol) && !second.overlap(first, tol) {
            return Err(OperationError::NoOverlap.into());
        }
        if encloses(second, first, tol) {
            debug!("first polygon lies inside the second");
            return Ok(second.clone());
        }
        if encloses(first, second, tol) {
            debug!("second polygon lies inside the first");
            return Ok(first.clone());
        }

        let Some((side, segment)) = [Side::First, Side::Second].into_iter().find_map(|side| {
            let other = self.polygon(side.other());
            self.polygon(side)
                .segments()
                .iter()
                .position(|ls| !other.covers_point(&ls.p1, tol))
                .map(|index| (side, index))
        }) else {
            debug!("every vertex touches the other polygon");
            return Err(OperationError::MergeDidNotConverge { steps: 0 }.into());
        };

        let start = self.polygon(side).segments()[segment].p1;
        let mut points = vec![start];
        let mut state = WalkState {
            side,
            segment,
            start,
        };
        let max_steps = 4 * (first.len() + second.len()) + 4;
        debug!(
            first = first.len(),
            second = second.len(),
            start = ?side,
            "merging polygons"
        );

        for _ in 0..max_steps {
            let (next, point) = self.step(&state, tol);
            if points.iter().any(|p| tol.eq_points(p, &point)) {
                debug!(vertices = points.len(), "boundary walk closed");
                return Polygon::from_points(&points, tol);
            }
            trace!(x = point.x, y = point.y, side = ?next.side, "walk step");
            points.push(point);
            state = next;
        }

        Err(OperationError::MergeDidNotConverge { steps: max_steps }.into())
    }

    fn polygon(&self, side: Side) -> &'a Polygon {
        match side {
            Side::First => self.first,
            Side::Second => self.second,
        }
    }

    /// Advances the walk by one emitted point.
    fn step(&self, state: &WalkState, tol: Tolerance) -> (WalkState, Point2) {
        let current = self.polygon(state.side);
        let other_side = state.side.other();
        let other = self.polygon(other_side);
        let segment = current.segments()[state.segment].start_from(state.start);

        if let Some((hit_index, hit)) = other.first_intersection_segment_and_point(&segment, tol) {
            let hit_segment = other.segments()[hit_index];
            // A hit on the far end leaves nothing of that segment to follow.
            let next = if tol.eq_points(&hit, &hit_segment.p2) {
                WalkState {
                    side: other_side,
                    segment: other.next_segment_index(hit_index),
                    start: hit_segment.p2,
                }
            } else {
                WalkState {
                    side: other_side,
                    segment: hit_index,
                    start: hit,
                }
            };
            return (next, hit);
        }

        let next = WalkState {
            side: state.side,
            segment: current.next_segment_index(state.segment),
            start: segment.p2,
        };
        (next, segment.p2)
    }
}

/// Whether every vertex and edge midpoint of `inner` lies inside or on
/// `outer`, with no edge of `inner` crossing an edge of `outer`.
fn encloses(outer: &Polygon, inner: &Polygon, tol: Tolerance) -> bool {
    let open = IntervalType::Open;
    inner.segments().iter().all(|ls| {
        outer.covers_point(&ls.p1, tol)
            && outer.covers_point(&ls.midpoint(), tol)
            && outer
                .segments()
                .iter()
                .all(|o| ls.intersect_with(o, open, open, tol).is_none())
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::error::PlanarError;

    fn tol() -> Tolerance {
        Tolerance::default()
    }

    fn polygon(coords: &[[f64; 2]]) -> Polygon {
        Polygon::from_coords(coords, tol()).unwrap()
    }

    fn square(size: f64) -> Polygon {
        polygon(&[[0.0, 0.0], [size, 0.0], [size, size], [0.0, size]])
    }

    fn has_vertex(pol: &Polygon, x: f64, y: f64) -> bool {
        pol.points()
            .iter()
            .any(|p| tol().eq_points(p, &Point2::new(x, y)))
    }

    #[test]
    fn merge_overlapping_squares() {
        let a = square(2.0);
        let b = a.translate(1.0, 1.0, tol()).unwrap();
        let merged = a.merge(&b, tol()).unwrap();

        let expected = polygon(&[
            [0.0, 0.0],
            [2.0, 0.0],
            [2.0, 1.0],
            [3.0, 1.0],
            [3.0, 3.0],
            [1.0, 3.0],
            [1.0, 2.0],
            [0.0, 2.0],
        ]);
        assert_eq!(merged.len(), 8);
        assert!(merged.approx_eq(&expected, tol()));
    }

    #[test]
    fn merge_is_symmetric_in_shape() {
        let a = square(2.0);
        let b = a.translate(1.0, 1.0, tol()).unwrap();
        let ab = a.merge(&b, tol()).unwrap();
        let ba = b.merge(&a, tol()).unwrap();
        assert!(ab.approx_eq(&ba, tol()));
    }

    #[test]
    fn merge_crossing_rectangles() {
        let horizontal = polygon(&[[-2.0, 0.0], [2.0, 0.0], [2.0, 1.0], [-2.0, 1.0]]);
        let vertical = polygon(&[[0.0, -2.0], [1.0, -2.0], [1.0, 2.0], [0.0, 2.0]]);
        let merged = horizontal.merge(&vertical, tol()).unwrap();
        assert_eq!(merged.len(), 12);
        for (x, y) in [(0.0, 0.0), (1.0, 0.0), (1.0, 1.0), (0.0, 1.0)] {
            assert!(has_vertex(&merged, x, y), "missing ({x}, {y})");
        }
        assert!(merged.contains_point(&Point2::new(0.5, 0.5), tol()));
        assert!(merged.contains_point(&Point2::new(0.5, -1.5), tol()));
        assert!(merged.contains_point(&Point2::new(-1.5, 0.5), tol()));
        assert!(!merged.contains_point(&Point2::new(1.5, 1.5), tol()));
    }

    #[test]
    fn merge_returns_enclosing_polygon() {
        let small = square(1.0);
        let big = small.swell(5.0, tol()).unwrap();
        assert_eq!(small.merge(&big, tol()).unwrap(), big);
        assert_eq!(big.merge(&small, tol()).unwrap(), big);
    }

    #[test]
    fn merge_with_inscribed_polygon_returns_outer() {
        let outer = square(2.0);
        let diamond = polygon(&[[1.0, 0.0], [2.0, 1.0], [1.0, 2.0], [0.0, 1.0]]);
        assert_eq!(outer.merge(&diamond, tol()).unwrap(), outer);
        assert_eq!(diamond.merge(&outer, tol()).unwrap(), outer);
    }

    #[test]
    fn enclosure_checks_edges_between_touching_vertices() {
        let l_shape = polygon(&[
            [0.0, 0.0],
            [2.0, 0.0],
            [2.0, 1.0],
            [1.0, 1.0],
            [1.0, 2.0],
            [0.0, 2.0],
        ]);
        // Every corner sits on the L, but the slanted edge cuts across its notch.
        let across_notch = polygon(&[[0.0, 0.0], [2.0, 0.0], [2.0, 1.0], [1.0, 2.0], [0.0, 2.0]]);
        assert!(!encloses(&l_shape, &across_notch, tol()));
        assert!(encloses(&across_notch, &l_shape, tol()));
        assert!(encloses(&square(2.0), &l_shape, tol()));
    }

    #[test]
    fn merge_without_overlap_fails() {
        let a = square(1.0);
        let far = a.translate(2.0, 0.0, tol()).unwrap();
        assert_eq!(
            a.merge(&far, tol()).unwrap_err(),
            PlanarError::Operation(OperationError::NoOverlap)
        );
    }

    #[test]
    fn merge_of_edge_touching_squares_fails() {
        let a = square(1.0);
        let neighbour = a.translate(1.0, 0.0, tol()).unwrap();
        assert_eq!(
            a.merge(&neighbour, tol()).unwrap_err(),
            PlanarError::Operation(OperationError::NoOverlap)
        );
    }

    #[test]
    fn merge_through_a_vertex() {
        let a = square(2.0);
        let diamond = polygon(&[[2.0, 0.0], [3.0, 1.0], [2.0, 2.0], [1.0, 1.0]]);
        let merged = a.merge(&diamond, tol()).unwrap();
        assert!(has_vertex(&merged, 3.0, 1.0));
        assert!(has_vertex(&merged, 0.0, 0.0));
        assert!(!has_vertex(&merged, 1.0, 1.0));
        assert!(merged.contains_point(&Point2::new(2.5, 1.0), tol()));
    }
}
