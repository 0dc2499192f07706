//! Inside/outside annotation of the Voronoi diagram with respect to the source contour.
//!
//! Every vertex, half-edge, and cell is classified purely from the geometry (no offset
//! distance involved), in three phases:
//!
//! - phase A seeds categories from infinite edges (always outside) and from finite edges
//!   adjacent to a segment cell (sidedness against the segment),
//! - phase B propagates across edges separating two point cells whose tail vertex is
//!   already classified,
//! - phase C drains a cell stack, flooding the remaining point cell neighborhoods.
//!
//! `Boundary` is sticky for segment cells; point cells may only be `Inside` or `Outside`
//! and any contradiction is a precondition failure of the diagram.

use crate::contour::{Line, Point};
use crate::core::traits::Real;
use crate::diagram::Diagram;
use crate::error::{DiagramError, Result, Warning};

/// Classification of a Voronoi vertex against the contour.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum VertexCategory {
    #[default]
    Unknown,
    Inside,
    Outside,
    OnContour,
}

/// Classification of a half-edge by where its head vertex sits relative to the contour.
///
/// A half-edge and its twin need not agree: one may point to the contour while the other
/// points inside or outside.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum EdgeCategory {
    #[default]
    Unknown,
    PointsInside,
    PointsOutside,
    PointsToContour,
}

/// Classification of a Voronoi cell against the contour.
///
/// Only segment cells may be `Boundary` (their region straddles the contour through the
/// owning segment); point cells are strictly `Inside` or `Outside`.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default)]
pub enum CellCategory {
    #[default]
    Unknown,
    Inside,
    Outside,
    Boundary,
}

/// Per-entity annotation state, held in side arrays indexed by the diagram's entity ids.
///
/// The diagram itself stays immutable; annotations are reset (or rebuilt) per offset run.
#[derive(Debug, Clone, Default)]
pub struct Annotations {
    vertices: Vec<VertexCategory>,
    edges: Vec<EdgeCategory>,
    cells: Vec<CellCategory>,
    warnings: Vec<Warning>,
}

impl Annotations {
    /// Fresh all-`Unknown` annotation arrays sized for `diagram`.
    pub fn for_diagram<T>(diagram: &Diagram<T>) -> Self
    where
        T: Real,
    {
        Annotations {
            vertices: vec![VertexCategory::Unknown; diagram.num_vertices()],
            edges: vec![EdgeCategory::Unknown; diagram.num_edges()],
            cells: vec![CellCategory::Unknown; diagram.num_cells()],
            warnings: Vec::new(),
        }
    }

    #[inline]
    pub fn vertex(&self, vertex: usize) -> VertexCategory {
        self.vertices[vertex]
    }

    #[inline]
    pub fn edge(&self, edge: usize) -> EdgeCategory {
        self.edges[edge]
    }

    #[inline]
    pub fn cell(&self, cell: usize) -> CellCategory {
        self.cells[cell]
    }

    /// Recoverable conditions hit while annotating.
    #[inline]
    pub fn warnings(&self) -> &[Warning] {
        &self.warnings
    }

    /// Returns `true` when no entity is left `Unknown`.
    pub fn is_complete(&self) -> bool {
        self.vertices.iter().all(|&v| v != VertexCategory::Unknown)
            && self.edges.iter().all(|&e| e != EdgeCategory::Unknown)
            && self.cells.iter().all(|&c| c != CellCategory::Unknown)
    }

    /// Clears every category back to `Unknown`.
    pub fn reset(&mut self) {
        self.vertices.fill(VertexCategory::Unknown);
        self.edges.fill(EdgeCategory::Unknown);
        self.cells.fill(CellCategory::Unknown);
        self.warnings.clear();
    }

    fn set_vertex(&mut self, vertex: usize, category: VertexCategory) -> Result<()> {
        debug_assert!(category != VertexCategory::Unknown);
        let current = self.vertices[vertex];
        if current != VertexCategory::Unknown && current != category {
            return Err(DiagramError::ContradictoryAnnotation {
                entity: "vertex",
                index: vertex,
            }
            .into());
        }
        self.vertices[vertex] = category;
        Ok(())
    }

    fn set_edge(&mut self, edge: usize, category: EdgeCategory) -> Result<()> {
        debug_assert!(category != EdgeCategory::Unknown);
        let current = self.edges[edge];
        if current != EdgeCategory::Unknown && current != category {
            return Err(DiagramError::ContradictoryAnnotation {
                entity: "edge",
                index: edge,
            }
            .into());
        }
        self.edges[edge] = category;
        Ok(())
    }

    /// Updates a cell category, promoting conflicting inside/outside updates of a segment
    /// cell to the sticky `Boundary`. Returns `true` if the stored category changed.
    fn set_cell<T>(
        &mut self,
        diagram: &Diagram<T>,
        cell: usize,
        category: CellCategory,
    ) -> Result<bool>
    where
        T: Real,
    {
        debug_assert!(category != CellCategory::Unknown);
        let current = self.cells[cell];
        let category = match (current, category) {
            (CellCategory::Boundary, _) => return Ok(false),
            (CellCategory::Outside, CellCategory::Inside)
            | (CellCategory::Inside, CellCategory::Outside) => CellCategory::Boundary,
            (_, new) => new,
        };
        if category == CellCategory::Boundary && diagram.cells()[cell].contains_point() {
            // A point cell may never straddle the contour.
            return Err(DiagramError::ContradictoryAnnotation {
                entity: "cell",
                index: cell,
            }
            .into());
        }
        if current == category {
            return Ok(false);
        }
        self.cells[cell] = category;
        Ok(true)
    }
}

/// Clears all annotations back to `Unknown`, ready for re-annotation.
pub fn reset_inside_outside_annotations(annotations: &mut Annotations) {
    annotations.reset();
}

/// Classifies every vertex, half-edge, and cell of `diagram` against the contour described
/// by `lines`.
///
/// Deterministic in the diagram's entity order and idempotent. Returns the populated side
/// arrays; failures indicate a diagram that violates its structural preconditions.
pub fn annotate_inside_outside<T>(diagram: &Diagram<T>, lines: &[Line]) -> Result<Annotations>
where
    T: Real,
{
    diagram.validate_sites(lines)?;

    let mut state = Annotations::for_diagram(diagram);
    let cells = diagram.cells();

    // Phase A: seed from infinite edges and from finite edges next to a segment cell.
    for edge_idx in 0..diagram.num_edges() {
        let twin_idx = diagram.twin(edge_idx);
        if diagram.vertex1(edge_idx).is_none() {
            // Infinite edge separating two point sites or a point site and a segment site.
            // It is always outside and references one valid vertex.
            let Some(v0) = diagram.vertex0(edge_idx) else {
                return Err(DiagramError::MalformedEdge { edge: edge_idx }.into());
            };
            debug_assert!(diagram.edges()[edge_idx].is_linear());
            state.set_edge(edge_idx, EdgeCategory::PointsOutside)?;
            // The opposite half of an infinite edge heads back to the contour.
            state.set_edge(twin_idx, EdgeCategory::PointsToContour)?;
            state.set_vertex(v0, VertexCategory::OnContour)?;
            if diagram.edges()[edge_idx].is_secondary() {
                let (mut point_cell, mut segment_cell) =
                    (diagram.edge_cell(edge_idx), diagram.edge_cell(twin_idx));
                if cells[point_cell].contains_segment() {
                    std::mem::swap(&mut point_cell, &mut segment_cell);
                }
                if !cells[point_cell].contains_point() {
                    return Err(DiagramError::SecondaryCellMismatch { edge: edge_idx }.into());
                }
                // The cell of a contour end point reached by an infinite edge is outside;
                // the segment cell it borders straddles the contour.
                state.set_cell(diagram, point_cell, CellCategory::Outside)?;
                state.set_cell(diagram, segment_cell, CellCategory::Boundary)?;
            }
        } else if let Some(v0) = diagram.vertex0(edge_idx) {
            let Some(v1) = diagram.vertex1(edge_idx) else {
                return Err(DiagramError::MalformedEdge { edge: edge_idx }.into());
            };
            let mut cell_idx = diagram.edge_cell(edge_idx);
            if !cells[cell_idx].contains_segment() {
                cell_idx = diagram.edge_cell(twin_idx);
            }
            if !cells[cell_idx].contains_segment() {
                // Both cells belong to point sites; classified by phases B and C.
                continue;
            }
            let line = &lines[cells[cell_idx].source_index()];
            let cell2_idx = if cell_idx == diagram.edge_cell(edge_idx) {
                diagram.edge_cell(twin_idx)
            } else {
                diagram.edge_cell(edge_idx)
            };

            // If the edge is pinned to the contour, one of its ends coincides with a
            // contour point. Find that point if it exists.
            let mut pt_on_contour: Option<Point> = None;
            if cell_idx == diagram.edge_cell(edge_idx)
                && cells[diagram.edge_cell(twin_idx)].contains_segment()
            {
                // Constrained bisector of two segments; they may share a contour point.
                let line2 = &lines[cells[cell2_idx].source_index()];
                if line.a == line2.b {
                    pt_on_contour = Some(line.a);
                } else if line.b == line2.a {
                    pt_on_contour = Some(line.b);
                }
            } else if diagram.edges()[edge_idx].is_secondary() {
                // A secondary edge starts at the contour point shared by its two sites.
                pt_on_contour = Some(cells[cell2_idx].contour_point(lines));
            }

            if let Some(pt) = pt_on_contour {
                let v0_matches = Point::from_vector2(diagram.vertex_point(v0)) == pt;
                let v1_matches = Point::from_vector2(diagram.vertex_point(v1)) == pt;
                let v1_on_contour = match (v0_matches, v1_matches) {
                    (true, true) => {
                        // Both ends round to the contour point; keep the end further away
                        // from it as the interior one.
                        state
                            .warnings
                            .push(Warning::DegenerateContourTouch { edge: edge_idx });
                        let d0 = (diagram.vertex_point(v0) - pt.pos()).length_squared();
                        let d1 = (diagram.vertex_point(v1) - pt.pos()).length_squared();
                        d0 > d1
                    }
                    (true, false) => false,
                    (false, true) => true,
                    (false, false) => {
                        return Err(DiagramError::ContourPointMismatch { edge: edge_idx }.into())
                    }
                };
                if v1_on_contour {
                    state.set_edge(edge_idx, EdgeCategory::PointsToContour)?;
                    state.set_vertex(v1, VertexCategory::OnContour)?;
                    continue;
                }
            }

            // v1 is off the contour; classify it by its side of the segment site.
            let side = (diagram.vertex_point(v1) - line.a.pos()).perp_dot(line.vector());
            if side == T::zero() {
                // No Voronoi edge may connect two vertices of the input polygons.
                return Err(DiagramError::EdgeJoinsContour { edge: edge_idx }.into());
            }
            let vc = if side > T::zero() {
                VertexCategory::Outside
            } else {
                VertexCategory::Inside
            };
            state.set_vertex(v1, vc)?;
            state.set_edge(
                edge_idx,
                if vc == VertexCategory::Outside {
                    EdgeCategory::PointsOutside
                } else {
                    EdgeCategory::PointsInside
                },
            )?;
            if pt_on_contour.is_some() {
                state.set_vertex(v0, VertexCategory::OnContour)?;
                state.set_edge(twin_idx, EdgeCategory::PointsToContour)?;
            }
            let cc = if vc == VertexCategory::Outside {
                CellCategory::Outside
            } else {
                CellCategory::Inside
            };
            state.set_cell(
                diagram,
                cell_idx,
                if pt_on_contour.is_some() {
                    CellCategory::Boundary
                } else {
                    cc
                },
            )?;
            state.set_cell(
                diagram,
                cell2_idx,
                if pt_on_contour.is_some() && cells[cell2_idx].contains_segment() {
                    CellCategory::Boundary
                } else {
                    cc
                },
            )?;
        }
    }

    // Phase B: one round of propagation across edges separating two point cells.
    let mut cell_queue: Vec<usize> = Vec::new();
    for edge_idx in 0..diagram.num_edges() {
        debug_assert_eq!(
            state.edge(edge_idx) == EdgeCategory::Unknown,
            state.edge(diagram.twin(edge_idx)) == EdgeCategory::Unknown,
        );
        if state.edge(edge_idx) != EdgeCategory::Unknown {
            continue;
        }
        let twin_idx = diagram.twin(edge_idx);
        let (Some(v0), Some(v1)) = (diagram.vertex0(edge_idx), diagram.vertex1(edge_idx)) else {
            return Err(DiagramError::MalformedEdge { edge: edge_idx }.into());
        };
        debug_assert!(
            cells[diagram.edge_cell(edge_idx)].contains_point()
                && cells[diagram.edge_cell(twin_idx)].contains_point()
        );
        let vc = state.vertex(v0);
        if vc == VertexCategory::Unknown {
            continue;
        }
        if vc == VertexCategory::OnContour {
            return Err(DiagramError::ContradictoryAnnotation {
                entity: "vertex",
                index: v0,
            }
            .into());
        }
        state.set_vertex(v1, vc)?;
        let ec = if vc == VertexCategory::Outside {
            EdgeCategory::PointsOutside
        } else {
            EdgeCategory::PointsInside
        };
        state.set_edge(edge_idx, ec)?;
        state.set_edge(twin_idx, ec)?;
        let cc = if vc == VertexCategory::Outside {
            CellCategory::Outside
        } else {
            CellCategory::Inside
        };
        for cell_idx in [diagram.edge_cell(edge_idx), diagram.edge_cell(twin_idx)] {
            if state.set_cell(diagram, cell_idx, cc)? {
                cell_queue.push(cell_idx);
            }
        }
    }

    // Phase C: seed fill over the remaining point cells, LIFO drain.
    while let Some(cell_idx) = cell_queue.pop() {
        let cc = state.cell(cell_idx);
        debug_assert!(matches!(cc, CellCategory::Inside | CellCategory::Outside));
        let ec = if cc == CellCategory::Outside {
            EdgeCategory::PointsOutside
        } else {
            EdgeCategory::PointsInside
        };
        let vc = if cc == CellCategory::Outside {
            VertexCategory::Outside
        } else {
            VertexCategory::Inside
        };
        for edge_idx in diagram.cell_edges(cell_idx).collect::<Vec<_>>() {
            if state.edge(edge_idx) != EdgeCategory::Unknown {
                continue;
            }
            let twin_idx = diagram.twin(edge_idx);
            debug_assert!(cells[diagram.edge_cell(twin_idx)].contains_point());
            state.set_edge(edge_idx, ec)?;
            state.set_edge(twin_idx, ec)?;
            for vertex in [diagram.vertex0(edge_idx), diagram.vertex1(edge_idx)]
                .into_iter()
                .flatten()
            {
                if state.vertex(vertex) == VertexCategory::Unknown {
                    state.set_vertex(vertex, vc)?;
                }
            }
            let cell2_idx = diagram.edge_cell(twin_idx);
            if state.cell(cell2_idx) != cc && state.set_cell(diagram, cell2_idx, cc)? {
                cell_queue.push(cell2_idx);
            }
        }
    }

    // Everything must be classified by now; a leftover Unknown means the diagram has a
    // region unreachable from any seed.
    if let Some(v) = state
        .vertices
        .iter()
        .position(|&c| c == VertexCategory::Unknown)
    {
        return Err(DiagramError::MissingAnnotation {
            entity: "vertex",
            index: v,
        }
        .into());
    }
    if let Some(e) = state.edges.iter().position(|&c| c == EdgeCategory::Unknown) {
        return Err(DiagramError::MissingAnnotation {
            entity: "edge",
            index: e,
        }
        .into());
    }
    if let Some(c) = state.cells.iter().position(|&c| c == CellCategory::Unknown) {
        return Err(DiagramError::MissingAnnotation {
            entity: "cell",
            index: c,
        }
        .into());
    }

    Ok(state)
}
