//! Error and warning types surfaced by the offset engine.

use crate::contour::Polygon;
use thiserror::Error;

/// Top-level error type for the voroffset engine.
#[derive(Debug, Error)]
pub enum VoroffsetError {
    #[error(transparent)]
    Diagram(#[from] DiagramError),

    #[error(transparent)]
    Trace(#[from] TraceError),

    #[error(transparent)]
    Offset(#[from] OffsetError),
}

/// Precondition failures of the Voronoi diagram or of its annotation.
///
/// These indicate an invalid input structure, not a transient fault; the caller must fix the
/// diagram (or the contour it was built from) rather than retry.
#[derive(Debug, Error)]
pub enum DiagramError {
    #[error("half-edge count {0} is odd; twins must be stored as consecutive even/odd pairs")]
    UnpairedHalfEdges(usize),

    #[error("half-edge {edge} disagrees with its twin on the secondary/curved flags")]
    TwinFlagMismatch { edge: usize },

    #[error("half-edge {edge} references {what} index {index} which is out of range")]
    DanglingIndex {
        edge: usize,
        what: &'static str,
        index: usize,
    },

    #[error("half-edge {edge} has a next link into a different cell")]
    NextLeavesCell { edge: usize },

    #[error("half-edge {edge} is not part of a consistent cell cycle")]
    BrokenCellCycle { edge: usize },

    #[error("half-edge {edge} head does not match the tail of its next edge")]
    DisconnectedEdges { edge: usize },

    #[error("edge pair at {pair} has no finite vertex")]
    IsolatedEdgePair { pair: usize },

    #[error("vertex {vertex} has no incident edge")]
    IsolatedVertex { vertex: usize },

    #[error("cell {cell} has no incident edge")]
    EmptyCell { cell: usize },

    #[error("cell {cell} source index {index} is out of range for {len} input segments")]
    SourceIndexOutOfRange {
        cell: usize,
        index: usize,
        len: usize,
    },

    #[error("secondary edge {edge} does not separate a point cell from a segment cell")]
    SecondaryCellMismatch { edge: usize },

    #[error("secondary edge {edge} point site is not an end point of the paired segment site")]
    SecondaryEndpointMismatch { edge: usize },

    #[error("neither end of edge {edge} lies on the contour point it is attached to")]
    ContourPointMismatch { edge: usize },

    #[error("voronoi edge {edge} connects two contour vertices")]
    EdgeJoinsContour { edge: usize },

    #[error("contradictory annotation for {entity} {index}")]
    ContradictoryAnnotation { entity: &'static str, index: usize },

    #[error("{entity} {index} is missing its annotation")]
    MissingAnnotation { entity: &'static str, index: usize },

    #[error("half-edge {edge} violates the half-edge structure contract")]
    MalformedEdge { edge: usize },
}

/// Failures while stitching offset intersections into closed polygons.
#[derive(Debug, Error)]
pub enum TraceError {
    /// The walk from `seed_edge` never found a next intersection to continue with. The
    /// partially traced polygon is carried for diagnostics.
    #[error("offset contour starting at edge {seed_edge} could not be closed")]
    OpenLoop { seed_edge: usize, partial: Polygon },
}

/// Invalid offset parameters or degenerate numeric evaluation.
#[derive(Debug, Error)]
pub enum OffsetError {
    #[error("discretization error must be positive, got {0}")]
    InvalidDiscretization(f64),
}

/// Recoverable conditions reported alongside results rather than failing the run.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Warning {
    /// Both Voronoi vertices of an edge round to the same contour point; the interior end
    /// was picked by larger squared distance.
    #[error("both ends of edge {edge} round to the same contour point")]
    DegenerateContourTouch { edge: usize },

    /// An edge predicted to intersect the offset curve yielded no valid root; the edge was
    /// skipped and the surrounding polygon may be dropped.
    #[error("no valid root found on edge {edge} predicted to intersect the offset curve")]
    MissingRoot { edge: usize },
}

/// Convenience alias for results using [VoroffsetError].
pub type Result<T> = std::result::Result<T, VoroffsetError>;
