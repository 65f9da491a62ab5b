#![allow(clippy::unwrap_used)]

use approx::assert_relative_eq;
use planar::{
    GeometryError, Interval, IntervalType, LineSegment, OperationError, PlanarError, Point2,
    Polygon, Rectangle, Tolerance, Vector2, VectorExt,
};

fn init_tracing() {
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into());
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_test_writer()
        .try_init();
}

fn tol() -> Tolerance {
    Tolerance::default()
}

fn unit_square() -> Polygon {
    Polygon::from_coords(&[[0.0, 0.0], [1.0, 0.0], [1.0, 1.0], [0.0, 1.0]], tol()).unwrap()
}

#[test]
fn interval_boundaries() {
    assert!(!Interval::new(0.0, 1.0, IntervalType::Open).contains(0.0));
    assert!(Interval::new(0.0, 1.0, IntervalType::Closed).contains(1.0));
    assert!(!Interval::new(1.0, 1.0, IntervalType::Open).contains(1.0));
    assert!(Interval::new(1.0, 1.0, IntervalType::OpenEnd).contains(1.0));
}

#[test]
fn crossing_segments_meet_in_the_middle() {
    let vertical = LineSegment::from_values(0.0, 0.0, 0.0, 2.0);
    let horizontal = LineSegment::from_values(-1.0, 1.0, 1.0, 1.0);
    let p = vertical.intersect(&horizontal, tol()).unwrap();
    assert_relative_eq!(p, Point2::new(0.0, 1.0));
}

#[test]
fn square_contains_centre_only() {
    let pol = unit_square();
    assert!(pol.contains_point(&Point2::new(0.5, 0.5), tol()));
    assert!(!pol.contains_point(&Point2::new(-0.5, 0.5), tol()));
}

#[test]
fn corner_touching_rectangles() {
    let a = Rectangle::from_values(0.0, 0.0, 1.0, 1.0).unwrap();
    let b = Rectangle::from_values(1.0, 1.0, 2.0, 2.0).unwrap();
    assert!(!a.overlap(&b));
    let v = a.separation_vector(&b, &Vector2::new(1.0, 1.0)).unwrap();
    assert!(v.is_null());
}

#[test]
fn edge_touching_squares_do_not_merge() {
    init_tracing();
    let a = unit_square();
    let b = a.translate(1.0, 0.0, tol()).unwrap();
    assert!(!a.overlap(&b, tol()));
    assert_eq!(
        a.merge(&b, tol()).unwrap_err(),
        PlanarError::Operation(OperationError::NoOverlap)
    );
}

#[test]
fn bowtie_is_rejected() {
    let err = Polygon::from_coords(&[[0.0, 0.0], [1.0, 1.0], [1.0, 0.0], [0.0, 1.0]], tol())
        .unwrap_err();
    assert!(matches!(
        err,
        PlanarError::Geometry(GeometryError::SelfIntersectingPolygon { .. })
    ));
}

#[test]
fn construction_errors_are_distinguishable() {
    assert_eq!(
        planar::Line::new(Point2::origin(), Vector2::zeros()).unwrap_err(),
        PlanarError::Geometry(GeometryError::NullVector)
    );
    assert!(matches!(
        Rectangle::from_values(2.0, 0.0, 1.0, 1.0).unwrap_err(),
        PlanarError::Geometry(GeometryError::MalformedRectangle { .. })
    ));
    assert_eq!(
        Tolerance::new(-1e-3).unwrap_err(),
        PlanarError::Geometry(GeometryError::NegativePrecision(-1e-3))
    );
}

#[test]
fn coarser_tolerance_changes_point_equality() {
    let loose = Tolerance::new(0.1).unwrap();
    let ls = LineSegment::from_values(0.0, 0.0, 1.0, 0.0);
    let near = Point2::new(0.5, 0.05);
    assert!(ls.contains_point(&near, IntervalType::Closed, loose));
    assert!(!ls.contains_point(&near, IntervalType::Closed, tol()));
}

#[test]
fn swell_merge_and_separate() {
    init_tracing();
    let a = unit_square().swell(0.5, tol()).unwrap();
    let b = a.translate(1.0, 0.5, tol()).unwrap();
    let merged = a.merge(&b, tol()).unwrap();
    let bounds = merged.bounds();
    assert_relative_eq!(bounds.width(), 3.0, epsilon = 1e-9);
    assert_relative_eq!(bounds.height(), 2.5, epsilon = 1e-9);
    assert_eq!(merged.len(), 8);

    let push = a.separation_vector(&b, &Vector2::new(-1.0, 0.0), tol()).unwrap();
    assert_relative_eq!(push, Vector2::new(-1.0, 0.0), epsilon = 1e-9);
    // The pushed square rests against `b`, touching it without sharing area.
    let apart = a.translate(push.x, push.y, tol()).unwrap();
    assert!(!apart.contains_any_point_of(&b, tol()));
    assert!(!b.contains_any_point_of(&apart, tol()));
}
