//! Stitching per-edge offset intersections into closed output polygons.

use super::EdgeIntersection;
use crate::contour::{Line, Point, Polygon};
use crate::core::{
    math::{seg_point_distance, Vector2},
    traits::Real,
};
use crate::diagram::Diagram;
use crate::error::{OffsetError, Result, TraceError};

/// Walks the diagram cell by cell, consuming the recorded intersections and emitting closed
/// polygons.
///
/// Each crossing stored on a half-edge is where the offset curve enters that half-edge's
/// cell; within a segment cell the curve continues straight to the exit crossing, within a
/// point cell it follows a circular arc of radius `|offset_distance|` around the cell's
/// contour point, discretized so the sagitta stays below `discretization_error`. Extracted
/// outer contours come out counter clockwise, holes clockwise.
///
/// Consumed crossings are marked visited in `edge_points`; a walk that cannot reach a next
/// crossing fails with [TraceError::OpenLoop] carrying the partial polygon.
pub fn trace_offset_contours<T>(
    diagram: &Diagram<T>,
    lines: &[Line],
    edge_points: &mut [EdgeIntersection<T>],
    offset_distance: T,
    discretization_error: T,
) -> Result<Vec<Polygon>>
where
    T: Real,
{
    if discretization_error <= T::zero() {
        return Err(OffsetError::InvalidDiscretization(
            discretization_error.to_f64().unwrap_or(f64::NAN),
        )
        .into());
    }
    let d_offset = offset_distance.abs();
    debug_assert!(d_offset > T::zero());
    let cells = diagram.cells();

    let cos_ratio = ((d_offset - discretization_error) / d_offset)
        .max(-T::one())
        .min(T::one());
    let angle_step = T::two() * cos_ratio.acos();
    let cos_threshold = angle_step.cos();

    let mut out = Vec::new();
    for seed_edge in 0..diagram.num_edges() {
        let EdgeIntersection::Point(seed_pt) = edge_points[seed_edge] else {
            continue;
        };
        let mut poly = Polygon::new();
        let mut edge = seed_edge;
        let mut last_pt = seed_pt;
        loop {
            // Walk around the current cell to the next edge whose twin carries the curve
            // into the neighboring cell.
            let mut next_edge = None;
            let mut candidate = diagram.next(edge);
            while candidate != edge {
                let twin = diagram.twin(candidate);
                if let EdgeIntersection::Point(pt) = edge_points[twin] {
                    next_edge = Some((twin, pt));
                    break;
                }
                candidate = diagram.next(candidate);
            }
            let Some((next_edge, p2)) = next_edge else {
                return Err(TraceError::OpenLoop {
                    seed_edge,
                    partial: poly,
                }
                .into());
            };
            edge_points[next_edge] = EdgeIntersection::Visited;

            let p1 = last_pt;
            let cell = &cells[diagram.edge_cell(edge)];
            debug_assert!(
                (dist_to_site(cell, lines, p1) - d_offset).abs() < crate::offset::scaled_epsilon()
            );
            debug_assert!(
                (dist_to_site(cell, lines, p2) - d_offset).abs() < crate::offset::scaled_epsilon()
            );
            if cell.contains_point() {
                // Discretize the arc from p1 to p2 around the contour point. The cell is
                // convex so the swept angle is at most pi; if the chord alone stays within
                // the sagitta tolerance it is emitted as is.
                let center = cell.contour_point(lines).pos::<T>();
                let v1 = p1 - center;
                let v2 = p2 - center;
                let ccw = v1.perp_dot(v2) > T::zero();
                let cos_a = v1.dot(v2);
                let norm = v1.length() * v2.length();
                debug_assert!(norm > T::zero());
                if cos_a < cos_threshold * norm {
                    let cos_a = (cos_a / norm).max(-T::one()).min(T::one());
                    let angle = cos_a.acos();
                    let n_steps = (angle / angle_step).ceil();
                    let mut astep = angle / n_steps;
                    if !ccw {
                        astep = -astep;
                    }
                    let n_steps = n_steps.to_usize().unwrap_or(1);
                    let mut a = astep;
                    for _ in 1..n_steps {
                        let (sin_a, cos_a) = (a.sin(), a.cos());
                        let p = center
                            + Vector2::new(
                                cos_a * v1.x - sin_a * v1.y,
                                sin_a * v1.x + cos_a * v1.y,
                            );
                        poly.points.push(Point::from_vector2(p));
                        a = a + astep;
                    }
                }
            }
            let rounded = Point::from_vector2(p2);
            if poly.points.last() != Some(&rounded) {
                poly.points.push(rounded);
            }
            edge = next_edge;
            last_pt = p2;
            if edge == seed_edge {
                break;
            }
        }
        out.push(poly);
    }
    Ok(out)
}

fn dist_to_site<T>(cell: &crate::diagram::Cell, lines: &[Line], point: Vector2<T>) -> T
where
    T: Real,
{
    if cell.contains_point() {
        (cell.contour_point(lines).pos::<T>() - point).length()
    } else {
        let line = &lines[cell.source_index()];
        seg_point_distance(line.a.pos(), line.b.pos(), point)
    }
}
