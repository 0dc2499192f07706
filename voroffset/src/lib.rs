//! 2D polygon offsetting driven by a precomputed Voronoi diagram of line segment sites.
//!
//! Given a closed polygonal contour (outer boundaries counter clockwise, holes clockwise)
//! expressed as oriented integer coordinate line segments, and the Voronoi diagram of those
//! segments and their end points, this crate extracts the closed polygons lying at a signed
//! offset distance from the contour. Curved pieces of the true offset (arcs around contour
//! corners) are discretized with a bounded sagitta error.
//!
//! The diagram itself is an input: a construction collaborator populates the half-edge
//! structure in [diagram] and the algorithms in [offset] consume it read-only.

#[macro_use]
mod macros;
pub mod contour;
pub mod core;
pub mod diagram;
pub mod error;
pub mod offset;

pub use error::{DiagramError, OffsetError, Result, TraceError, VoroffsetError, Warning};
