use tracing::debug;

use crate::error::{GeometryError, OperationError, Result};
use crate::math::polygon_2d::{is_clockwise, point_extents};
use crate::math::{IntervalType, Point2, Tolerance, Vector2};
use crate::operations::{PolygonMerge, PolygonSwell, SeparationVector, Transformation};

use super::{Line, LineSegment, Rectangle};

/// A simple polygon stored as a closed, clockwise chain of line segments.
///
/// Invariants, established by [`Polygon::from_points`]:
/// - `segments[i].p2 == segments[i + 1].p1`, wrapping around;
/// - no two segments cross except at the joint they share;
/// - the chain has a negative turn sum (see [`is_clockwise`]).
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    segments: Vec<LineSegment>,
}

impl Polygon {
    /// Creates a polygon through `points`, closing the last point to the first.
    ///
    /// Counter-clockwise input is reversed so the stored chain is clockwise.
    ///
    /// # Errors
    ///
    /// - `GeometryError::TooFewPoints` for fewer than 3 points
    /// - `GeometryError::SelfIntersectingPolygon` if two segments cross
    pub fn from_points(points: &[Point2], tol: Tolerance) -> Result<Self> {
        if points.len() < 3 {
            return Err(GeometryError::TooFewPoints {
                count: points.len(),
            }
            .into());
        }
        let n = points.len();
        let segments: Vec<LineSegment> = (0..n)
            .map(|i| LineSegment::new(points[i], points[(i + 1) % n]))
            .collect();

        if let Some((first, second)) = find_self_intersection(&segments, tol) {
            return Err(GeometryError::SelfIntersectingPolygon { first, second }.into());
        }

        let directions: Vec<Vector2> = segments.iter().map(LineSegment::as_vector).collect();
        if is_clockwise(&directions) {
            Ok(Self { segments })
        } else {
            let segments = segments.iter().rev().map(LineSegment::flip).collect();
            Ok(Self { segments })
        }
    }

    /// Creates a polygon from `[x, y]` pairs.
    ///
    /// # Errors
    ///
    /// See [`Polygon::from_points`].
    pub fn from_coords(coords: &[[f64; 2]], tol: Tolerance) -> Result<Self> {
        let points: Vec<Point2> = coords.iter().map(|c| Point2::new(c[0], c[1])).collect();
        Self::from_points(&points, tol)
    }

    #[must_use]
    pub fn segments(&self) -> &[LineSegment] {
        &self.segments
    }

    /// The vertices in stored (clockwise) order.
    #[must_use]
    pub fn points(&self) -> Vec<Point2> {
        self.segments.iter().map(|ls| ls.p1).collect()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.segments.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// Index of the segment following segment `index` in the chain.
    #[must_use]
    pub fn next_segment_index(&self, index: usize) -> usize {
        (index + 1) % self.segments.len()
    }

    /// The segment whose start point is `p`.
    ///
    /// # Errors
    ///
    /// Returns `OperationError::SegmentNotFound` if no segment starts at `p`.
    pub fn segment_from(&self, p: &Point2, tol: Tolerance) -> Result<&LineSegment> {
        self.segments
            .iter()
            .find(|ls| tol.eq_points(&ls.p1, p))
            .ok_or_else(|| OperationError::SegmentNotFound { x: p.x, y: p.y }.into())
    }

    /// A copy of this polygon moved by `(dx, dy)`.
    ///
    /// # Errors
    ///
    /// Propagates validation errors of [`Polygon::from_points`].
    pub fn translate(&self, dx: f64, dy: f64, tol: Tolerance) -> Result<Self> {
        let offset = Vector2::new(dx, dy);
        let points: Vec<Point2> = self.segments.iter().map(|ls| ls.p1 + offset).collect();
        Self::from_points(&points, tol)
    }

    /// Applies a transformation to every vertex.
    ///
    /// # Errors
    ///
    /// Propagates validation errors of [`Polygon::from_points`].
    pub fn transform(&self, transformation: &Transformation, tol: Tolerance) -> Result<Self> {
        transformation.apply_to_polygon(self, tol)
    }

    /// Whether `p` lies strictly inside the polygon. Points on the boundary
    /// are not contained.
    #[must_use]
    pub fn contains_point(&self, p: &Point2, tol: Tolerance) -> bool {
        if self
            .segments
            .iter()
            .any(|ls| ls.contains_point(p, IntervalType::Closed, tol))
        {
            return false;
        }
        let crossings = self
            .segments
            .iter()
            .filter(|ls| ls.right_of_point(p, lower_end_only(ls)) && !ls.on_line(p, tol))
            .count();
        crossings % 2 == 1
    }

    /// Whether `p` lies inside the polygon or on its boundary.
    #[must_use]
    pub fn covers_point(&self, p: &Point2, tol: Tolerance) -> bool {
        self.segments
            .iter()
            .any(|ls| ls.contains_point(p, IntervalType::Closed, tol))
            || self.contains_point(p, tol)
    }

    /// Whether any vertex of `other` lies inside this polygon.
    #[must_use]
    pub fn contains_any_point_of(&self, other: &Polygon, tol: Tolerance) -> bool {
        other
            .segments
            .iter()
            .any(|ls| self.contains_point(&ls.p1, tol))
    }

    /// All points where `segment` meets the boundary, without duplicates.
    #[must_use]
    pub fn intersect(&self, segment: &LineSegment, tol: Tolerance) -> Vec<Point2> {
        let mut hits: Vec<Point2> = Vec::new();
        for p in self.segments.iter().filter_map(|ls| ls.intersect(segment, tol)) {
            if !hits.iter().any(|h| tol.eq_points(h, &p)) {
                hits.push(p);
            }
        }
        hits
    }

    /// The boundary hit closest to `segment.p1`.
    #[must_use]
    pub fn first_intersection(&self, segment: &LineSegment, tol: Tolerance) -> Option<Point2> {
        let start = segment.p1;
        self.intersect(segment, tol)
            .into_iter()
            .min_by(|a, b| {
                nalgebra::distance_squared(&start, a)
                    .total_cmp(&nalgebra::distance_squared(&start, b))
            })
    }

    /// Boundary hits of `segment` together with the index of the boundary
    /// segment hit. Hits on the start point of either segment are skipped.
    #[must_use]
    pub fn intersection_segments_and_points(
        &self,
        segment: &LineSegment,
        tol: Tolerance,
    ) -> Vec<(usize, Point2)> {
        self.segments
            .iter()
            .enumerate()
            .filter_map(|(i, ls)| ls.intersect_half_open(segment, tol).map(|p| (i, p)))
            .collect()
    }

    /// The entry of [`Polygon::intersection_segments_and_points`] closest to
    /// `segment.p1`.
    #[must_use]
    pub fn first_intersection_segment_and_point(
        &self,
        segment: &LineSegment,
        tol: Tolerance,
    ) -> Option<(usize, Point2)> {
        let start = segment.p1;
        self.intersection_segments_and_points(segment, tol)
            .into_iter()
            .min_by(|(_, a), (_, b)| {
                nalgebra::distance_squared(&start, a)
                    .total_cmp(&nalgebra::distance_squared(&start, b))
            })
    }

    /// The point on the perimeter closest to `p`.
    #[must_use]
    pub fn closest_point(&self, p: &Point2) -> Point2 {
        let mut best = self.segments[0].closest_point(p);
        let mut best_dist = nalgebra::distance_squared(p, &best);
        for ls in &self.segments[1..] {
            let candidate = ls.closest_point(p);
            let dist = nalgebra::distance_squared(p, &candidate);
            if dist < best_dist {
                best = candidate;
                best_dist = dist;
            }
        }
        best
    }

    /// Distance from `p` to the perimeter, travelling along `direction`.
    ///
    /// Returns `None` if the ray does not hit the boundary or `direction` is null.
    #[must_use]
    pub fn distance_to_perimeter(
        &self,
        p: &Point2,
        direction: &Vector2,
        tol: Tolerance,
    ) -> Option<f64> {
        let ray = Line::new(*p, *direction).ok()?;
        self.segments
            .iter()
            .filter_map(|ls| {
                let hit = ray.intersect(&ls.supporting_line().ok()?)?;
                if !ls.contains_point(&hit, IntervalType::Closed, tol) {
                    return None;
                }
                let offset = hit - p;
                (offset.dot(direction) >= 0.0).then(|| offset.norm())
            })
            .min_by(f64::total_cmp)
    }

    /// Smallest axis-aligned rectangle enclosing all vertices.
    #[must_use]
    pub fn bounds(&self) -> Rectangle {
        let (min, max) =
            point_extents(&self.points()).unwrap_or((Point2::origin(), Point2::origin()));
        Rectangle::from_extents(min, max)
    }

    /// Middle of the bounding rectangle.
    #[must_use]
    pub fn middle(&self) -> Point2 {
        self.bounds().middle()
    }

    /// Whether both polygons consist of the same segments, in any order.
    #[must_use]
    pub fn approx_eq(&self, other: &Polygon, tol: Tolerance) -> bool {
        self.segments.len() == other.segments.len()
            && self
                .segments
                .iter()
                .all(|ls| other.segments.iter().any(|o| o.approx_eq(ls, tol)))
    }

    /// Whether the polygons share interior area.
    ///
    /// Polygons that only touch along an edge or at a shared vertex do not
    /// overlap. A vertex of `other` lying inside one of our edges does count,
    /// so a polygon inscribed in this one is detected. The converse, our
    /// vertex inside an edge of `other`, is not checked.
    #[must_use]
    pub fn overlap(&self, other: &Polygon, tol: Tolerance) -> bool {
        if self.approx_eq(other, tol) {
            return true;
        }
        if self.contains_any_point_of(other, tol) || other.contains_any_point_of(self, tol) {
            return true;
        }
        self.segments.iter().any(|ls| {
            other.segments.iter().any(|o| {
                ls.intersect_with(o, IntervalType::Closed, IntervalType::Open, tol)
                    .is_some()
            })
        })
    }

    /// Union of two overlapping polygons, see [`PolygonMerge`].
    ///
    /// # Errors
    ///
    /// See [`PolygonMerge::execute`].
    pub fn merge(&self, other: &Polygon, tol: Tolerance) -> Result<Polygon> {
        PolygonMerge::new(self, other).execute(tol)
    }

    /// This polygon grown outwards by `size`, see [`PolygonSwell`].
    ///
    /// # Errors
    ///
    /// See [`PolygonSwell::execute`].
    pub fn swell(&self, size: f64, tol: Tolerance) -> Result<Polygon> {
        PolygonSwell::new(self, size).execute(tol)
    }

    /// Translation along `direction` that moves this polygon off `other`,
    /// see [`SeparationVector`].
    ///
    /// # Errors
    ///
    /// See [`SeparationVector::execute`].
    pub fn separation_vector(
        &self,
        other: &Polygon,
        direction: &Vector2,
        tol: Tolerance,
    ) -> Result<Vector2> {
        SeparationVector::new(self, other, *direction).execute(tol)
    }
}

/// Index pair of the first two segments that cross away from a shared start point.
fn find_self_intersection(segments: &[LineSegment], tol: Tolerance) -> Option<(usize, usize)> {
    for (i, first) in segments.iter().enumerate() {
        for (j, second) in segments.iter().enumerate().skip(i + 1) {
            if second.intersect_half_open(first, tol).is_some() {
                debug!(first = i, second = j, "polygon segments cross");
                return Some((i, j));
            }
        }
    }
    None
}

/// Ray-crossing mode that keeps only the endpoint with the smaller y, so a
/// ray through a vertex is counted once.
fn lower_end_only(ls: &LineSegment) -> IntervalType {
    if ls.p1.y <= ls.p2.y {
        IntervalType::OpenEnd
    } else {
        IntervalType::OpenStart
    }
}
