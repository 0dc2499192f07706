mod test_utils;

use test_utils::{rectangle_diagram, triangle_diagram};
use voroffset::assert_fuzzy_eq;
use voroffset::offset::{annotate_inside_outside, signed_vertex_distances, VertexCategory};

#[test]
fn rectangle_vertex_distances() {
    let (diagram, lines) = rectangle_diagram();
    let annotations = annotate_inside_outside(&diagram, &lines).unwrap();
    let distances = signed_vertex_distances(&diagram, &lines, &annotations).unwrap();

    // Corners are on the contour, the skeleton vertices sit 30 units inside.
    assert_eq!(&distances[..4], &[0.0; 4]);
    assert_fuzzy_eq!(distances[4], -30.0);
    assert_fuzzy_eq!(distances[5], -30.0);
}

#[test]
fn triangle_vertex_distances() {
    let (diagram, lines) = triangle_diagram();
    let annotations = annotate_inside_outside(&diagram, &lines).unwrap();
    let distances = signed_vertex_distances(&diagram, &lines, &annotations).unwrap();

    assert_eq!(&distances[..3], &[0.0; 3]);
    // The incenter is one inradius inside the contour.
    assert_fuzzy_eq!(distances[3], -30.901699437494745);
}

#[test]
fn distance_sign_agrees_with_vertex_category() {
    for (diagram, lines) in [rectangle_diagram(), triangle_diagram()] {
        let annotations = annotate_inside_outside(&diagram, &lines).unwrap();
        let distances = signed_vertex_distances(&diagram, &lines, &annotations).unwrap();
        for v in 0..diagram.num_vertices() {
            match annotations.vertex(v) {
                VertexCategory::Inside => assert!(distances[v] < 0.0),
                VertexCategory::Outside => assert!(distances[v] > 0.0),
                VertexCategory::OnContour => assert_eq!(distances[v], 0.0),
                VertexCategory::Unknown => panic!("unannotated vertex {}", v),
            }
        }
    }
}
