//! Shared fixtures and property helpers for the integration tests.
//!
//! The fixtures are hand-derived Voronoi diagrams of small closed contours, fed through
//! [Diagram::from_parts] so every test run also validates the structural contract.
#![allow(dead_code)]

use voroffset::contour::{Line, Point, Polygon};
use voroffset::core::math::seg_point_distance;
use voroffset::diagram::{Diagram, HalfEdgeSpec, SiteCategory};

/// Shorthand for building a half-edge spec.
pub fn he(cell: usize, vertex0: Option<usize>, next: usize, secondary: bool) -> HalfEdgeSpec {
    HalfEdgeSpec {
        cell,
        vertex0,
        next,
        secondary,
        curved: false,
    }
}

/// Raw diagram parts of the axis aligned rectangle (0,0)-(100,0)-(100,60)-(0,60), outer
/// boundary counter clockwise.
///
/// Interior skeleton: corner bisector diagonals meeting the horizontal centerline at
/// U = (30,30) and V = (70,30). Exterior: one pair of perpendicular secondary rays per
/// corner. 6 vertices, 13 edge pairs, 8 cells (4 corner points + 4 segments).
#[allow(clippy::type_complexity)]
pub fn rectangle_parts() -> (
    Vec<(f64, f64)>,
    Vec<(usize, SiteCategory)>,
    Vec<HalfEdgeSpec>,
    Vec<Line>,
) {
    let contour = voroffset::polygon![(0, 0), (100, 0), (100, 60), (0, 60)];
    let lines = contour.lines();

    let vertices = vec![
        (0.0, 0.0),    // v0: corner A
        (100.0, 0.0),  // v1: corner B
        (100.0, 60.0), // v2: corner C
        (0.0, 60.0),   // v3: corner D
        (30.0, 30.0),  // v4: U
        (70.0, 30.0),  // v5: V
    ];

    let cells = vec![
        (0, SiteCategory::SegmentStart), // c0: point A
        (1, SiteCategory::SegmentStart), // c1: point B
        (2, SiteCategory::SegmentStart), // c2: point C
        (3, SiteCategory::SegmentStart), // c3: point D
        (0, SiteCategory::Segment),      // c4: bottom
        (1, SiteCategory::Segment),      // c5: right
        (2, SiteCategory::Segment),      // c6: top
        (3, SiteCategory::Segment),      // c7: left
    ];

    let edges = vec![
        he(7, Some(0), 7, false),   // e0:  A -> U
        he(4, Some(4), 10, false),  // e1:  U -> A
        he(4, Some(1), 9, false),   // e2:  B -> V
        he(5, Some(5), 16, false),  // e3:  V -> B
        he(5, Some(2), 3, false),   // e4:  C -> V
        he(6, Some(5), 18, false),  // e5:  V -> C
        he(6, Some(3), 8, false),   // e6:  D -> U
        he(7, Some(4), 24, false),  // e7:  U -> D
        he(6, Some(4), 5, false),   // e8:  U -> V
        he(4, Some(5), 1, false),   // e9:  V -> U
        he(4, Some(0), 15, true),   // e10: A -> inf (down, x = 0)
        he(0, None, 12, true),      // e11: inf -> A
        he(0, Some(0), 11, true),   // e12: A -> inf (west, y = 0)
        he(7, None, 0, true),       // e13: inf -> A
        he(1, Some(1), 17, true),   // e14: B -> inf (down, x = 100)
        he(4, None, 2, true),       // e15: inf -> B
        he(5, Some(1), 21, true),   // e16: B -> inf (east, y = 0)
        he(1, None, 14, true),      // e17: inf -> B
        he(6, Some(2), 23, true),   // e18: C -> inf (up, x = 100)
        he(2, None, 20, true),      // e19: inf -> C
        he(2, Some(2), 19, true),   // e20: C -> inf (east, y = 60)
        he(5, None, 4, true),       // e21: inf -> C
        he(3, Some(3), 25, true),   // e22: D -> inf (up, x = 0)
        he(6, None, 6, true),       // e23: inf -> D
        he(7, Some(3), 13, true),   // e24: D -> inf (west, y = 60)
        he(3, None, 22, true),      // e25: inf -> D
    ];

    (vertices, cells, edges, lines)
}

pub fn rectangle_diagram() -> (Diagram<f64>, Vec<Line>) {
    let (vertices, cells, edges, lines) = rectangle_parts();
    let diagram = Diagram::from_parts(vertices, cells, edges).expect("rectangle fixture is valid");
    (diagram, lines)
}

/// Raw diagram parts of the triangle (0,0)-(100,0)-(50,100), outer boundary counter
/// clockwise.
///
/// Interior skeleton: three corner bisectors meeting at the incenter
/// I = (50, 30.9017...). Exterior: one pair of perpendicular secondary rays per corner.
/// 4 vertices, 9 edge pairs, 6 cells.
#[allow(clippy::type_complexity)]
pub fn triangle_parts() -> (
    Vec<(f64, f64)>,
    Vec<(usize, SiteCategory)>,
    Vec<HalfEdgeSpec>,
    Vec<Line>,
) {
    let contour = voroffset::polygon![(0, 0), (100, 0), (50, 100)];
    let lines = contour.lines();

    // Inradius of the triangle: area / semiperimeter.
    let incenter_y = 30.901699437494745;
    let vertices = vec![
        (0.0, 0.0),          // v0: T0
        (100.0, 0.0),        // v1: T1
        (50.0, 100.0),       // v2: T2
        (50.0, incenter_y),  // v3: incenter
    ];

    let cells = vec![
        (0, SiteCategory::SegmentStart), // c0: point T0
        (1, SiteCategory::SegmentStart), // c1: point T1
        (2, SiteCategory::SegmentStart), // c2: point T2
        (0, SiteCategory::Segment),      // c3: bottom
        (1, SiteCategory::Segment),      // c4: right
        (2, SiteCategory::Segment),      // c5: left
    ];

    let edges = vec![
        he(5, Some(0), 5, false),  // e0:  T0 -> I
        he(3, Some(3), 6, false),  // e1:  I -> T0
        he(3, Some(1), 1, false),  // e2:  T1 -> I
        he(4, Some(3), 12, false), // e3:  I -> T1
        he(4, Some(2), 3, false),  // e4:  T2 -> I
        he(5, Some(3), 16, false), // e5:  I -> T2
        he(3, Some(0), 11, true),  // e6:  T0 -> inf (down)
        he(0, None, 8, true),      // e7:  inf -> T0
        he(0, Some(0), 7, true),   // e8:  T0 -> inf (upper left)
        he(5, None, 0, true),      // e9:  inf -> T0
        he(1, Some(1), 13, true),  // e10: T1 -> inf (down)
        he(3, None, 2, true),      // e11: inf -> T1
        he(4, Some(1), 15, true),  // e12: T1 -> inf (upper right)
        he(1, None, 10, true),     // e13: inf -> T1
        he(2, Some(2), 17, true),  // e14: T2 -> inf (upper right)
        he(4, None, 4, true),      // e15: inf -> T2
        he(5, Some(2), 9, true),   // e16: T2 -> inf (upper left)
        he(2, None, 14, true),     // e17: inf -> T2
    ];

    (vertices, cells, edges, lines)
}

pub fn triangle_diagram() -> (Diagram<f64>, Vec<Line>) {
    let (vertices, cells, edges, lines) = triangle_parts();
    let diagram = Diagram::from_parts(vertices, cells, edges).expect("triangle fixture is valid");
    (diagram, lines)
}

/// Minimum distance from `pt` to the contour (over all segments).
pub fn contour_distance(lines: &[Line], pt: Point) -> f64 {
    lines
        .iter()
        .map(|line| seg_point_distance(line.a.pos::<f64>(), line.b.pos::<f64>(), pt.pos::<f64>()))
        .fold(f64::MAX, f64::min)
}

/// Asserts the offset distance properties on every vertex of every polygon: no vertex
/// undercuts the offset beyond the discretization and rounding tolerance, and every vertex
/// stays within rounding of the exact offset.
pub fn assert_offset_distances(
    polygons: &[Polygon],
    lines: &[Line],
    offset_distance: f64,
    discretization_error: f64,
) {
    // Output coordinates are rounded to integers.
    let rounding = std::f64::consts::SQRT_2 / 2.0 + 1e-3;
    for poly in polygons {
        for &pt in &poly.points {
            let dist = contour_distance(lines, pt);
            assert!(
                dist >= offset_distance - discretization_error - rounding,
                "vertex {:?} undercuts the offset: {} < {}",
                pt,
                dist,
                offset_distance
            );
            assert!(
                dist <= offset_distance + rounding,
                "vertex {:?} overshoots the offset: {} > {}",
                pt,
                dist,
                offset_distance
            );
        }
    }
}

/// Asserts a polygon is a closed ring with at least three distinct points and the expected
/// winding (`ccw` true for counter clockwise).
pub fn assert_closed_ring(poly: &Polygon, ccw: bool) {
    let mut distinct = poly.points.clone();
    distinct.dedup();
    if distinct.last() == distinct.first() && distinct.len() > 1 {
        distinct.pop();
    }
    assert!(
        distinct.len() >= 3,
        "ring has fewer than 3 distinct points: {:?}",
        poly.points
    );
    assert_eq!(
        poly.is_ccw(),
        ccw,
        "ring winding mismatch, signed area {}",
        poly.signed_area::<f64>()
    );
}

/// Asserts two rings are equal up to rotation of the starting point.
pub fn assert_ring_eq(actual: &Polygon, expected: &[(i64, i64)]) {
    let expected: Vec<Point> = expected.iter().map(|&(x, y)| Point::new(x, y)).collect();
    assert_eq!(
        actual.points.len(),
        expected.len(),
        "ring length mismatch: {:?} vs {:?}",
        actual.points,
        expected
    );
    let start = actual
        .points
        .iter()
        .position(|&p| p == expected[0])
        .unwrap_or_else(|| panic!("{:?} not found in {:?}", expected[0], actual.points));
    for (i, &want) in expected.iter().enumerate() {
        let got = actual.points[(start + i) % actual.points.len()];
        assert_eq!(got, want, "ring mismatch at offset {}", i);
    }
}
