use voroffset::core::math::{
    line_point_equidistant, ray_point_distance, EquidistantPoints::*, Vector2,
};
use voroffset::core::traits::FuzzyEq;

/// Checks both outputs land at distance `d` from the line and from the point.
fn assert_round_trip(a: Vector2<f64>, b: Vector2<f64>, pt: Vector2<f64>, d: f64) {
    let check = |s: Vector2<f64>| {
        assert!(
            (ray_point_distance(a, b - a, s) - d).abs() < 1e-8,
            "line distance off at {:?}",
            s
        );
        assert!(((s - pt).length() - d).abs() < 1e-8, "point distance off at {:?}", s);
    };
    match line_point_equidistant(a, b, pt, d) {
        NoPoints => panic!("expected solutions for {:?} {:?} {:?}", pt, d, a),
        OnePoint(s) => check(s),
        TwoPoints(s0, s1) => {
            check(s0);
            check(s1);
        }
    }
}

#[test]
fn horizontal_line() {
    let a = Vector2::new(0.0, 0.0);
    let b = Vector2::new(10.0, 0.0);
    let pt = Vector2::new(5.0, 6.0);
    match line_point_equidistant(a, b, pt, 5.0) {
        TwoPoints(s0, s1) => {
            let expected = 24.0f64.sqrt();
            assert!(s0.fuzzy_eq(Vector2::new(5.0 - expected, 5.0)));
            assert!(s1.fuzzy_eq(Vector2::new(5.0 + expected, 5.0)));
        }
        other => panic!("expected two points, got {:?}", other),
    }
}

#[test]
fn solutions_stay_on_the_point_side() {
    let a = Vector2::new(0.0, 0.0);
    let b = Vector2::new(10.0, 0.0);
    let below = Vector2::new(5.0, -6.0);
    match line_point_equidistant(a, b, below, 5.0) {
        TwoPoints(s0, s1) => {
            assert!(s0.y.fuzzy_eq(-5.0));
            assert!(s1.y.fuzzy_eq(-5.0));
        }
        other => panic!("expected two points, got {:?}", other),
    }
}

#[test]
fn tangential_distance_gives_the_midpoint() {
    let a = Vector2::new(0.0, 0.0);
    let b = Vector2::new(10.0, 0.0);
    let pt = Vector2::new(3.0, 6.0);
    match line_point_equidistant(a, b, pt, 3.0) {
        OnePoint(s) => assert!(s.fuzzy_eq(Vector2::new(3.0, 3.0))),
        other => panic!("expected one point, got {:?}", other),
    }
}

#[test]
fn point_too_far_has_no_solutions() {
    let a = Vector2::new(0.0, 0.0);
    let b = Vector2::new(10.0, 0.0);
    let pt = Vector2::new(5.0, 100.0);
    assert!(matches!(line_point_equidistant(a, b, pt, 5.0), NoPoints));
}

#[test]
fn round_trips() {
    assert_round_trip(
        Vector2::new(0.0, 0.0),
        Vector2::new(10.0, 0.0),
        Vector2::new(5.0, 6.0),
        4.0,
    );
    // Steep line exercises the axis swap.
    assert_round_trip(
        Vector2::new(0.0, 0.0),
        Vector2::new(1.0, 50.0),
        Vector2::new(30.0, 20.0),
        20.0,
    );
    assert_round_trip(
        Vector2::new(-20.0, -10.0),
        Vector2::new(35.0, 40.0),
        Vector2::new(30.0, -25.0),
        31.0,
    );
}
