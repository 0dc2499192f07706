//! Signed distance from every Voronoi vertex to the nearest contour site.

use super::annotate::{Annotations, VertexCategory};
use crate::contour::Line;
use crate::core::{math::ray_point_distance, traits::Real};
use crate::diagram::Diagram;
use crate::error::{DiagramError, Result};

/// Computes the distance from each Voronoi vertex to its nearest source site, negated for
/// vertices inside the contour and zero for vertices on it.
///
/// A vertex incident to at least one point cell is nearest to that cell's contour point; a
/// vertex shared only by segment cells is equidistant from those segments, so the
/// perpendicular distance to any of them (the first incident one is used) applies.
///
/// The diagram must be annotated; the result satisfies
/// `sign(distance) < 0 <=> Inside` and `distance == 0 <=> OnContour`.
pub fn signed_vertex_distances<T>(
    diagram: &Diagram<T>,
    lines: &[Line],
    annotations: &Annotations,
) -> Result<Vec<T>>
where
    T: Real,
{
    let cells = diagram.cells();
    let mut out = vec![T::zero(); diagram.num_vertices()];
    for (vertex_idx, vertex) in diagram.vertices().iter().enumerate() {
        let dist = match annotations.vertex(vertex_idx) {
            VertexCategory::OnContour => T::zero(),
            VertexCategory::Unknown => {
                return Err(DiagramError::MissingAnnotation {
                    entity: "vertex",
                    index: vertex_idx,
                }
                .into())
            }
            category => {
                let point_cell = diagram
                    .vertex_edges(vertex_idx)
                    .map(|edge| diagram.edge_cell(edge))
                    .find(|&cell| cells[cell].contains_point());
                let dist = match point_cell {
                    Some(cell) => {
                        (cells[cell].contour_point(lines).pos::<T>() - vertex.pos()).length()
                    }
                    None => {
                        let cell = diagram.edge_cell(vertex.incident_edge());
                        let line = &lines[cells[cell].source_index()];
                        ray_point_distance(line.a.pos(), line.vector(), vertex.pos())
                    }
                };
                if category == VertexCategory::Inside {
                    -dist
                } else {
                    dist
                }
            }
        };
        out[vertex_idx] = dist;
    }
    Ok(out)
}
