//! Half-edge Voronoi diagram model.
//!
//! Construction of the diagram is an external concern: a Voronoi builder (for example a
//! boost polygon style sweep over the contour segments and their end points) produces the
//! planar subdivision and hands it to [Diagram::from_parts], which validates the structural
//! contract the offset algorithms rely on:
//!
//! - twin half-edges are stored at consecutive even/odd indices, so `twin(e) == e ^ 1`,
//! - `next` links cycle counter clockwise around each cell (cell interior on the left),
//! - the head of a half-edge is the tail of its `next` (absent vertices pair at infinity),
//! - every vertex and cell has an incident edge.
//!
//! The structure is immutable after construction; per-entity algorithm state lives in side
//! arrays indexed by the entity ids (plain `usize` indices into the flat storage).

use crate::contour::Line;
use crate::core::{math::Vector2, traits::Real};
use crate::error::DiagramError;

/// Category of the source site owning a Voronoi cell.
///
/// Each input segment generates three cells: one for the open segment and one for each of
/// its end points.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum SiteCategory {
    /// Cell of the open segment itself.
    Segment,
    /// Cell of the segment's start point `a`.
    SegmentStart,
    /// Cell of the segment's end point `b`.
    SegmentEnd,
}

/// Voronoi vertex: a position equidistant from three or more sites.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    x: T,
    y: T,
    incident_edge: usize,
}

impl<T> Vertex<T>
where
    T: Real,
{
    #[inline]
    pub fn x(&self) -> T {
        self.x
    }

    #[inline]
    pub fn y(&self) -> T {
        self.y
    }

    #[inline]
    pub fn pos(&self) -> Vector2<T> {
        Vector2::new(self.x, self.y)
    }

    /// One of the half-edges with this vertex as its tail; the rest are reachable through
    /// [Diagram::rot_next].
    #[inline]
    pub fn incident_edge(&self) -> usize {
        self.incident_edge
    }
}

/// Directed half-edge of the diagram.
#[derive(Debug, Clone)]
pub struct Edge {
    cell: usize,
    vertex0: Option<usize>,
    next: usize,
    prev: usize,
    secondary: bool,
    curved: bool,
}

impl Edge {
    /// Cell this half-edge winds around (the cell lies on its left).
    #[inline]
    pub fn cell(&self) -> usize {
        self.cell
    }

    /// Tail vertex, absent for the incoming half of an infinite edge.
    #[inline]
    pub fn vertex0(&self) -> Option<usize> {
        self.vertex0
    }

    /// Following half-edge counter clockwise around the cell.
    #[inline]
    pub fn next(&self) -> usize {
        self.next
    }

    /// Preceding half-edge counter clockwise around the cell.
    #[inline]
    pub fn prev(&self) -> usize {
        self.prev
    }

    /// Secondary edges arise from a segment sharing an end point with its point site; they
    /// lie on the contour itself rather than in the Voronoi skeleton.
    #[inline]
    pub fn is_secondary(&self) -> bool {
        self.secondary
    }

    #[inline]
    pub fn is_primary(&self) -> bool {
        !self.secondary
    }

    /// Curved edges are parabolic arcs separating a point cell from a segment cell.
    #[inline]
    pub fn is_curved(&self) -> bool {
        self.curved
    }

    #[inline]
    pub fn is_linear(&self) -> bool {
        !self.curved
    }
}

/// Voronoi cell owned by one site.
#[derive(Debug, Clone)]
pub struct Cell {
    source_index: usize,
    category: SiteCategory,
    incident_edge: usize,
}

impl Cell {
    /// Index of the owning site's segment in the input line list.
    #[inline]
    pub fn source_index(&self) -> usize {
        self.source_index
    }

    #[inline]
    pub fn source_category(&self) -> SiteCategory {
        self.category
    }

    /// One of the half-edges winding around this cell.
    #[inline]
    pub fn incident_edge(&self) -> usize {
        self.incident_edge
    }

    #[inline]
    pub fn contains_point(&self) -> bool {
        !matches!(self.category, SiteCategory::Segment)
    }

    #[inline]
    pub fn contains_segment(&self) -> bool {
        matches!(self.category, SiteCategory::Segment)
    }

    /// The contour point owning this point cell.
    #[inline]
    pub fn contour_point(&self, lines: &[Line]) -> crate::contour::Point {
        debug_assert!(self.contains_point());
        let line = &lines[self.source_index];
        match self.category {
            SiteCategory::SegmentEnd => line.b,
            _ => line.a,
        }
    }
}

/// Input description of one half-edge for [Diagram::from_parts].
///
/// Half-edges come in twin pairs at consecutive indices; `prev` links, vertex incident
/// edges, and cell incident edges are derived during construction.
#[derive(Debug, Copy, Clone)]
pub struct HalfEdgeSpec {
    /// Cell the half-edge winds around.
    pub cell: usize,
    /// Tail vertex, `None` for the incoming half of an infinite edge.
    pub vertex0: Option<usize>,
    /// Following half-edge counter clockwise around the cell.
    pub next: usize,
    pub secondary: bool,
    pub curved: bool,
}

/// Immutable half-edge Voronoi diagram of the contour segments and their end points.
#[derive(Debug, Clone)]
pub struct Diagram<T> {
    vertices: Vec<Vertex<T>>,
    edges: Vec<Edge>,
    cells: Vec<Cell>,
}

impl<T> Diagram<T>
where
    T: Real,
{
    /// Builds and validates a diagram from the raw parts a Voronoi construction produced.
    ///
    /// `prev` links are derived by inverting `next`; each vertex and cell gets its first
    /// referencing half-edge as incident edge. Violations of the structural contract are
    /// reported as [DiagramError].
    pub fn from_parts(
        vertices: Vec<(T, T)>,
        cells: Vec<(usize, SiteCategory)>,
        half_edges: Vec<HalfEdgeSpec>,
    ) -> Result<Self, DiagramError> {
        if half_edges.len() % 2 != 0 {
            return Err(DiagramError::UnpairedHalfEdges(half_edges.len()));
        }

        let mut edges: Vec<Edge> = half_edges
            .iter()
            .map(|spec| Edge {
                cell: spec.cell,
                vertex0: spec.vertex0,
                next: spec.next,
                prev: usize::MAX,
                secondary: spec.secondary,
                curved: spec.curved,
            })
            .collect();

        for (i, edge) in edges.iter().enumerate() {
            if edge.cell >= cells.len() {
                return Err(DiagramError::DanglingIndex {
                    edge: i,
                    what: "cell",
                    index: edge.cell,
                });
            }
            if let Some(v) = edge.vertex0 {
                if v >= vertices.len() {
                    return Err(DiagramError::DanglingIndex {
                        edge: i,
                        what: "vertex",
                        index: v,
                    });
                }
            }
            if edge.next >= edges.len() {
                return Err(DiagramError::DanglingIndex {
                    edge: i,
                    what: "edge",
                    index: edge.next,
                });
            }
        }

        for pair in (0..edges.len()).step_by(2) {
            let (e, t) = (&edges[pair], &edges[pair + 1]);
            if e.secondary != t.secondary || e.curved != t.curved {
                return Err(DiagramError::TwinFlagMismatch { edge: pair });
            }
            if e.vertex0.is_none() && t.vertex0.is_none() {
                return Err(DiagramError::IsolatedEdgePair { pair });
            }
        }

        // Derive prev by inverting next; every edge must be the next of exactly one edge.
        for i in 0..edges.len() {
            let next = edges[i].next;
            if edges[next].cell != edges[i].cell {
                return Err(DiagramError::NextLeavesCell { edge: i });
            }
            if edges[next].prev != usize::MAX {
                return Err(DiagramError::BrokenCellCycle { edge: next });
            }
            edges[next].prev = i;
        }
        debug_assert!(edges.iter().all(|e| e.prev != usize::MAX));

        // Head of an edge is the tail of its next (twin pairs put the head at index ^ 1).
        for i in 0..edges.len() {
            let head = edges[i ^ 1].vertex0;
            let next_tail = edges[edges[i].next].vertex0;
            if head != next_tail {
                return Err(DiagramError::DisconnectedEdges { edge: i });
            }
        }

        let mut vertices: Vec<Vertex<T>> = vertices
            .into_iter()
            .map(|(x, y)| Vertex {
                x,
                y,
                incident_edge: usize::MAX,
            })
            .collect();
        for (i, edge) in edges.iter().enumerate() {
            if let Some(v) = edge.vertex0 {
                if vertices[v].incident_edge == usize::MAX {
                    vertices[v].incident_edge = i;
                }
            }
        }
        if let Some(v) = vertices.iter().position(|v| v.incident_edge == usize::MAX) {
            return Err(DiagramError::IsolatedVertex { vertex: v });
        }

        let mut cells: Vec<Cell> = cells
            .into_iter()
            .map(|(source_index, category)| Cell {
                source_index,
                category,
                incident_edge: usize::MAX,
            })
            .collect();
        for (i, edge) in edges.iter().enumerate() {
            if cells[edge.cell].incident_edge == usize::MAX {
                cells[edge.cell].incident_edge = i;
            }
        }
        if let Some(c) = cells.iter().position(|c| c.incident_edge == usize::MAX) {
            return Err(DiagramError::EmptyCell { cell: c });
        }

        // Each cell's edges must form a single cycle through its incident edge.
        let mut on_incident_cycle = vec![false; edges.len()];
        for cell in &cells {
            let start = cell.incident_edge;
            let mut e = start;
            loop {
                on_incident_cycle[e] = true;
                e = edges[e].next;
                if e == start {
                    break;
                }
            }
        }
        if let Some(e) = on_incident_cycle.iter().position(|&v| !v) {
            return Err(DiagramError::BrokenCellCycle { edge: e });
        }

        Ok(Diagram {
            vertices,
            edges,
            cells,
        })
    }

    #[inline]
    pub fn vertices(&self) -> &[Vertex<T>] {
        &self.vertices
    }

    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    #[inline]
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    #[inline]
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    #[inline]
    pub fn num_cells(&self) -> usize {
        self.cells.len()
    }

    /// Twin half-edge on the opposite side, by index arithmetic.
    #[inline]
    pub fn twin(&self, edge: usize) -> usize {
        edge ^ 1
    }

    /// Tail vertex of the half-edge.
    #[inline]
    pub fn vertex0(&self, edge: usize) -> Option<usize> {
        self.edges[edge].vertex0
    }

    /// Head vertex of the half-edge (the twin's tail).
    #[inline]
    pub fn vertex1(&self, edge: usize) -> Option<usize> {
        self.edges[edge ^ 1].vertex0
    }

    #[inline]
    pub fn next(&self, edge: usize) -> usize {
        self.edges[edge].next
    }

    #[inline]
    pub fn prev(&self, edge: usize) -> usize {
        self.edges[edge].prev
    }

    /// Next half-edge counter clockwise around the tail vertex of `edge`.
    #[inline]
    pub fn rot_next(&self, edge: usize) -> usize {
        self.twin(self.prev(edge))
    }

    /// Index of the cell the half-edge winds around.
    #[inline]
    pub fn edge_cell(&self, edge: usize) -> usize {
        self.edges[edge].cell
    }

    #[inline]
    pub fn is_finite(&self, edge: usize) -> bool {
        self.vertex0(edge).is_some() && self.vertex1(edge).is_some()
    }

    #[inline]
    pub fn is_infinite(&self, edge: usize) -> bool {
        !self.is_finite(edge)
    }

    /// Position of a vertex by index.
    #[inline]
    pub fn vertex_point(&self, vertex: usize) -> Vector2<T> {
        self.vertices[vertex].pos()
    }

    /// Iterates the half-edges winding around `cell`, starting at its incident edge.
    pub fn cell_edges(&self, cell: usize) -> impl Iterator<Item = usize> + '_ {
        CycleIter {
            diagram: self,
            start: self.cells[cell].incident_edge,
            current: Some(self.cells[cell].incident_edge),
            rotate: false,
        }
    }

    /// Iterates the half-edges with their tail at `vertex`, starting at its incident edge.
    pub fn vertex_edges(&self, vertex: usize) -> impl Iterator<Item = usize> + '_ {
        CycleIter {
            diagram: self,
            start: self.vertices[vertex].incident_edge,
            current: Some(self.vertices[vertex].incident_edge),
            rotate: true,
        }
    }

    /// Validates the site metadata of the diagram against the input segments: source
    /// indices in range and every secondary edge separating a point cell from a segment
    /// cell whose segment owns the point.
    pub fn validate_sites(&self, lines: &[Line]) -> Result<(), DiagramError> {
        for (i, cell) in self.cells.iter().enumerate() {
            if cell.source_index >= lines.len() {
                return Err(DiagramError::SourceIndexOutOfRange {
                    cell: i,
                    index: cell.source_index,
                    len: lines.len(),
                });
            }
        }
        for pair in (0..self.edges.len()).step_by(2) {
            if !self.edges[pair].secondary {
                continue;
            }
            let cell = &self.cells[self.edges[pair].cell];
            let cell2 = &self.cells[self.edges[pair + 1].cell];
            if cell.contains_point() == cell2.contains_point() {
                return Err(DiagramError::SecondaryCellMismatch { edge: pair });
            }
            let (point_cell, segment_cell) = if cell.contains_point() {
                (cell, cell2)
            } else {
                (cell2, cell)
            };
            let pt = point_cell.contour_point(lines);
            let segment = &lines[segment_cell.source_index];
            if pt != segment.a && pt != segment.b {
                return Err(DiagramError::SecondaryEndpointMismatch { edge: pair });
            }
        }
        Ok(())
    }
}

struct CycleIter<'a, T> {
    diagram: &'a Diagram<T>,
    start: usize,
    current: Option<usize>,
    rotate: bool,
}

impl<'a, T> Iterator for CycleIter<'a, T>
where
    T: Real,
{
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        let current = self.current?;
        let next = if self.rotate {
            self.diagram.rot_next(current)
        } else {
            self.diagram.next(current)
        };
        self.current = if next == self.start { None } else { Some(next) };
        Some(current)
    }
}
