mod test_utils;

use test_utils::rectangle_diagram;
use voroffset::core::math::Vector2;
use voroffset::offset::{
    annotate_inside_outside, edge_offset_contour_intersections, signed_vertex_distances,
    EdgeIntersection,
};

fn states(intersections: &[EdgeIntersection<f64>]) -> (usize, usize, usize) {
    let mut none = 0;
    let mut visited = 0;
    let mut points = 0;
    for state in intersections {
        match state {
            EdgeIntersection::None => none += 1,
            EdgeIntersection::Visited => visited += 1,
            EdgeIntersection::Point(_) => points += 1,
        }
    }
    (none, visited, points)
}

#[test]
fn outward_offset_crosses_the_secondary_rays() {
    let (diagram, lines) = rectangle_diagram();
    let annotations = annotate_inside_outside(&diagram, &lines).unwrap();
    let distances = signed_vertex_distances(&diagram, &lines, &annotations).unwrap();
    let intersections =
        edge_offset_contour_intersections(&diagram, &lines, &distances, 20.0).unwrap();

    // The interior skeleton (5 edge pairs) lies behind the contour for an outward offset;
    // each of the 8 secondary rays is crossed once, on its outgoing half.
    let (none, visited, points) = states(&intersections);
    assert_eq!(points, 8);
    assert_eq!(visited, 8);
    assert_eq!(none, 10);

    // Crossing of the downward ray at the first corner.
    assert_eq!(
        intersections[10].point(),
        Some(Vector2::new(0.0, -20.0)),
        "expected the crossing 20 below the corner"
    );
    assert!(matches!(intersections[11], EdgeIntersection::Visited));
    // Crossing of the eastward ray at the second corner.
    assert_eq!(intersections[16].point(), Some(Vector2::new(120.0, 0.0)));
}

#[test]
fn inward_offset_crosses_the_interior_diagonals() {
    let (diagram, lines) = rectangle_diagram();
    let annotations = annotate_inside_outside(&diagram, &lines).unwrap();
    let distances = signed_vertex_distances(&diagram, &lines, &annotations).unwrap();
    let intersections =
        edge_offset_contour_intersections(&diagram, &lines, &distances, -20.0).unwrap();

    // All infinite edges are behind the contour for an inward offset; the four corner
    // diagonals are each crossed once, two thirds of the way to the skeleton.
    let (none, visited, points) = states(&intersections);
    assert_eq!(points, 4);
    assert_eq!(visited, 4);
    assert_eq!(none, 18);

    let expected = [
        (0, Vector2::new(20.0, 20.0)),
        (2, Vector2::new(80.0, 20.0)),
        (4, Vector2::new(80.0, 40.0)),
        (6, Vector2::new(20.0, 40.0)),
    ];
    for (edge, want) in expected {
        let got = intersections[edge].point().unwrap();
        assert!(got.fuzzy_eq(want), "edge {}: {:?} != {:?}", edge, got, want);
    }
}

#[test]
fn offset_beyond_every_feature_has_no_crossings() {
    let (diagram, lines) = rectangle_diagram();
    let annotations = annotate_inside_outside(&diagram, &lines).unwrap();
    let distances = signed_vertex_distances(&diagram, &lines, &annotations).unwrap();

    // Inward offsets at or past the inradius of the rectangle collapse entirely; the
    // boundary case (exactly the skeleton distance) is excluded by the far-end tie break.
    for delta in [-30.0, -45.0] {
        let intersections =
            edge_offset_contour_intersections(&diagram, &lines, &distances, delta).unwrap();
        let (_, _, points) = states(&intersections);
        assert_eq!(points, 0, "no crossings expected for delta {}", delta);
    }
}

#[test]
fn tangent_edges_are_left_unclassified() {
    let (diagram, lines) = rectangle_diagram();
    let annotations = annotate_inside_outside(&diagram, &lines).unwrap();
    let distances = signed_vertex_distances(&diagram, &lines, &annotations).unwrap();
    let intersections =
        edge_offset_contour_intersections(&diagram, &lines, &distances, -20.0).unwrap();

    // The centerline edge joins the two equidistant skeleton vertices; the offset curve
    // runs parallel to it and never crosses.
    assert!(matches!(intersections[8], EdgeIntersection::None));
    assert!(matches!(intersections[9], EdgeIntersection::None));
}
