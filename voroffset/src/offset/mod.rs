//! Offset extraction over an annotated Voronoi diagram.
//!
//! The pipeline runs annotation, the signed vertex distance field, the per-edge
//! intersection solver, and the contour tracer, in that order; each stage consumes only
//! the outputs of earlier stages plus the immutable diagram and the input segments.
//! [offset] drives the whole pipeline; the individual stages are public for callers that
//! reuse annotations and distances across several offset distances of one diagram.

mod annotate;
mod distance;
mod intersect;
mod trace;

pub use annotate::{
    annotate_inside_outside, reset_inside_outside_annotations, Annotations, CellCategory,
    EdgeCategory, VertexCategory,
};
pub use distance::signed_vertex_distances;
pub use intersect::edge_offset_contour_intersections;
pub use trace::trace_offset_contours;

use crate::contour::{assemble_polygons, Line, Polygon};
use crate::core::{math::Vector2, traits::Real};
use crate::diagram::Diagram;
use crate::error::{OffsetError, Result, Warning};

/// Distance tolerance for consistency checks, in scaled coordinate units.
#[inline]
pub(crate) fn scaled_epsilon<T>() -> T
where
    T: Real,
{
    T::from(1e-3).unwrap()
}

/// Per-half-edge intersection state produced by [edge_offset_contour_intersections].
#[derive(Debug, Copy, Clone, PartialEq)]
pub enum EdgeIntersection<T>
where
    T: Real,
{
    /// Not classified; the edge never became a candidate.
    None,
    /// Classified, no crossing on this half-edge (its twin may still carry one).
    Visited,
    /// The offset curve crosses this half-edge at the point, entering the cell the
    /// half-edge winds around.
    Point(Vector2<T>),
}

impl<T> EdgeIntersection<T>
where
    T: Real,
{
    /// Returns the crossing point if one is recorded.
    #[inline]
    pub fn point(&self) -> Option<Vector2<T>> {
        match self {
            EdgeIntersection::Point(p) => Some(*p),
            _ => None,
        }
    }

    #[inline]
    pub fn is_point(&self) -> bool {
        matches!(self, EdgeIntersection::Point(_))
    }
}

/// Options controlling offset extraction.
#[derive(Debug, Clone)]
pub struct OffsetOptions<T>
where
    T: Real,
{
    /// Maximum sagitta deviation allowed when discretizing arcs around contour points.
    pub discretization_error: T,
}

impl<T> OffsetOptions<T>
where
    T: Real,
{
    pub fn new(discretization_error: T) -> Self {
        OffsetOptions {
            discretization_error,
        }
    }
}

/// Polygons extracted by an offset run, together with the recoverable conditions hit on
/// the way.
#[derive(Debug, Clone, Default)]
pub struct OffsetResult {
    /// Closed output polygons; outer contours counter clockwise, holes clockwise.
    pub polygons: Vec<Polygon>,
    /// Side channel for conditions that degraded but did not fail the run.
    pub warnings: Vec<Warning>,
}

/// Offsets the contour described by `lines` by the signed distance `offset_distance`,
/// annotating the diagram and computing vertex distances internally.
///
/// Positive distances offset outward, negative inward. `discretization_error` bounds the
/// sagitta of the discretized arcs around contour corners and must be positive. An offset
/// larger than every feature of the contour yields an empty polygon list.
pub fn offset<T>(
    diagram: &Diagram<T>,
    lines: &[Line],
    offset_distance: T,
    discretization_error: T,
) -> Result<Vec<Polygon>>
where
    T: Real,
{
    if offset_distance == T::zero() {
        // The level set at distance zero is the contour itself.
        return Ok(assemble_polygons(lines));
    }
    let annotations = annotate_inside_outside(diagram, lines)?;
    let distances = signed_vertex_distances(diagram, lines, &annotations)?;
    let options = OffsetOptions::new(discretization_error);
    offset_with_annotations(
        diagram,
        lines,
        &annotations,
        &distances,
        offset_distance,
        &options,
    )
    .map(|result| result.polygons)
}

/// Offset extraction over a pre-annotated diagram with a precomputed signed distance
/// field, for running several offset distances against one diagram.
pub fn offset_with_annotations<T>(
    diagram: &Diagram<T>,
    lines: &[Line],
    annotations: &Annotations,
    vertex_distances: &[T],
    offset_distance: T,
    options: &OffsetOptions<T>,
) -> Result<OffsetResult>
where
    T: Real,
{
    if options.discretization_error <= T::zero() {
        return Err(OffsetError::InvalidDiscretization(
            options
                .discretization_error
                .to_f64()
                .unwrap_or(f64::NAN),
        )
        .into());
    }
    debug_assert!(annotations.is_complete());
    if offset_distance == T::zero() {
        return Ok(OffsetResult {
            polygons: assemble_polygons(lines),
            warnings: Vec::new(),
        });
    }
    let mut warnings = Vec::new();
    let mut edge_points = intersect::intersections_with_warnings(
        diagram,
        lines,
        vertex_distances,
        offset_distance,
        &mut warnings,
    )?;
    let polygons = trace::trace_offset_contours(
        diagram,
        lines,
        &mut edge_points,
        offset_distance,
        options.discretization_error,
    )?;
    Ok(OffsetResult { polygons, warnings })
}
