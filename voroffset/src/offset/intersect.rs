//! Intersection of the offset level set with every Voronoi edge.
//!
//! For each half-edge the solver records at most one point where the curve of constant
//! contour distance crosses it. Distance along an edge between two segment cells (or along
//! a secondary edge) is linear; along an edge bordering a point cell it may dip to a
//! minimum strictly inside the edge, in which case the equidistant kernels recover up to
//! two crossings.

use super::EdgeIntersection;
use crate::contour::Line;
use crate::core::{
    math::{
        first_circle_ray_intersection_parameter, line_point_equidistant, min_max,
        point_from_parametric, point_point_equidistant, EquidistantPoints, Vector2,
    },
    traits::Real,
};
use crate::diagram::Diagram;
use crate::error::{Result, Warning};

/// Computes the intersection of the offset curve at signed distance `offset_distance` with
/// every half-edge of the diagram.
///
/// `vertex_distances` is the signed distance field of
/// [signed_vertex_distances](super::signed_vertex_distances). An edge at or beyond the
/// offset on both ends is skipped; equality at the far end is deliberately excluded so an
/// offset passing exactly through a Voronoi vertex is traced on one side only.
pub fn edge_offset_contour_intersections<T>(
    diagram: &Diagram<T>,
    lines: &[Line],
    vertex_distances: &[T],
    offset_distance: T,
) -> Result<Vec<EdgeIntersection<T>>>
where
    T: Real,
{
    let mut warnings = Vec::new();
    intersections_with_warnings(
        diagram,
        lines,
        vertex_distances,
        offset_distance,
        &mut warnings,
    )
}

pub(crate) fn intersections_with_warnings<T>(
    diagram: &Diagram<T>,
    lines: &[Line],
    vertex_distances: &[T],
    offset_distance: T,
    warnings: &mut Vec<Warning>,
) -> Result<Vec<EdgeIntersection<T>>>
where
    T: Real,
{
    let cells = diagram.cells();
    let outside = offset_distance > T::zero();
    let offset_distance2 = offset_distance * offset_distance;
    let d_offset = offset_distance.abs();
    debug_assert!(d_offset > T::zero());

    let mut out = vec![EdgeIntersection::None; diagram.num_edges()];

    for edge_idx in 0..diagram.num_edges() {
        if !matches!(out[edge_idx], EdgeIntersection::None) {
            // Classified together with its twin.
            continue;
        }
        // An absent tail is the incoming half of an infinite edge; its twin drives the
        // classification of the pair.
        let Some(v0) = diagram.vertex0(edge_idx) else {
            continue;
        };
        let twin_idx = diagram.twin(edge_idx);
        let v1 = diagram.vertex1(edge_idx);

        let mut d0 = vertex_distances[v0];
        let mut d1 = v1.map_or(Real::max_value(), |v| vertex_distances[v]);
        if d0 == d1 {
            // Tangent edge, no crossing.
            continue;
        }
        if !outside {
            // Fold the inward offset onto the outward problem: distance grows away from
            // the contour in the direction being offset.
            d0 = -d0;
            d1 = -d1;
        }
        let (dmin, dmax) = min_max(d0, d1);
        // The offset may undercut dmin, but never reaches past dmax. Equality at dmax is
        // excluded to avoid zero length contour pieces and to trace curves through a
        // Voronoi vertex consistently on one side.
        if d_offset >= dmax {
            continue;
        }

        let cell = &cells[diagram.edge_cell(edge_idx)];
        let cell2 = &cells[diagram.edge_cell(twin_idx)];
        let line0 = &lines[cell.source_index()];
        let line1 = &lines[cell2.source_index()];

        let Some(v1) = v1 else {
            // Unbounded edge; distance is monotone along it.
            if d_offset >= dmin {
                if cell.contains_point() && cell2.contains_point() {
                    let pt0 = cell.contour_point(lines).pos::<T>();
                    let pt1 = cell2.contour_point(lines).pos::<T>();
                    let dir = Vector2::new(pt0.y - pt1.y, pt1.x - pt0.x);
                    let origin = diagram.vertex_point(v0);
                    let t = first_circle_ray_intersection_parameter(pt0, d_offset, origin, dir);
                    debug_assert!(t > T::zero());
                    out[edge_idx] = EdgeIntersection::Point(origin + dir.scale(t));
                } else {
                    // Secondary ray through a segment end point, perpendicular to the
                    // segment; it starts on the contour so the crossing always exists.
                    debug_assert!(diagram.edges()[edge_idx].is_secondary());
                    let (ipt, line) = if cell.contains_segment() {
                        (cell2.contour_point(lines), line0)
                    } else {
                        (cell.contour_point(lines), line1)
                    };
                    let normal = Vector2::new(
                        T::from_coord(line.b.y - line.a.y),
                        T::from_coord(line.a.x - line.b.x),
                    )
                    .normalize();
                    out[edge_idx] = EdgeIntersection::Point(ipt.pos() + normal.scale(d_offset));
                }
            }
            // The incoming half of an unbounded edge is never intersected.
            out[twin_idx] = EdgeIntersection::Visited;
            continue;
        };

        let p0 = diagram.vertex_point(v0);
        let p1 = diagram.vertex_point(v1);
        let mut done = false;

        // Distance is linear along the bisector of two segments and along any secondary
        // edge (which starts at zero on the contour).
        let bisector = cell.contains_segment() && cell2.contains_segment();
        if bisector || diagram.edges()[edge_idx].is_secondary() {
            debug_assert!(bisector || dmin == T::zero());
            if !bisector || (dmin != dmax && d_offset >= dmin) {
                let t = ((d_offset - dmin) / (dmax - dmin))
                    .max(T::zero())
                    .min(T::one());
                if d1 < d0 {
                    out[twin_idx] = EdgeIntersection::Point(point_from_parametric(p1, p0, t));
                    out[edge_idx] = EdgeIntersection::Visited;
                } else {
                    out[edge_idx] = EdgeIntersection::Point(point_from_parametric(p0, p1, t));
                    out[twin_idx] = EdgeIntersection::Visited;
                }
                done = true;
            }
        } else {
            // Point vs point or point vs segment edge: the distance may reach a minimum
            // strictly inside the edge, where the offset can cross twice.
            let point_vs_segment = cell.contains_point() != cell2.contains_point();
            let pt0 = if cell.contains_point() {
                cell.contour_point(lines)
            } else {
                cell2.contour_point(lines)
            };
            let px = pt0.pos::<T>();

            let mut has_intersection = false;
            let mut possibly_two_points = false;
            if d_offset >= dmin {
                has_intersection = true;
            } else {
                // Both ends are beyond the offset; recover the true interior minimum
                // (tracked squared) and test against the squared offset.
                let mut refined_min2 = None;
                if point_vs_segment {
                    let line = if cell.contains_segment() { line0 } else { line1 };
                    let pt_line = line.a.pos::<T>();
                    let v_line = line.vector::<T>();
                    let t0 = (p0 - pt_line).dot(v_line);
                    let t1 = (p1 - pt_line).dot(v_line);
                    let tx = (px - pt_line).dot(v_line);
                    if (tx >= t0 && tx <= t1) || (tx >= t1 && tx <= t0) {
                        // The point site projects between the projections of the edge
                        // ends; the bisector bottoms out at half the foot distance.
                        let ft = pt_line + v_line.scale(tx / v_line.length_squared());
                        refined_min2 =
                            Some((ft - px).length_squared() * T::half() * T::half());
                    }
                } else {
                    let v = p1 - p0;
                    let l2 = v.length_squared();
                    debug_assert!(l2 > T::zero());
                    let t = v.dot(px - p0);
                    if t >= T::zero() && t <= l2 {
                        let ft = p0 + v.scale(t / l2);
                        refined_min2 = Some((ft - px).length_squared());
                    }
                }
                if let Some(min2) = refined_min2 {
                    if min2 < dmin * dmin && offset_distance2 >= min2 {
                        has_intersection = true;
                        possibly_two_points = true;
                    }
                }
            }

            if has_intersection {
                let solutions = if point_vs_segment {
                    let line = if cell.contains_segment() { line0 } else { line1 };
                    line_point_equidistant(line.a.pos(), line.b.pos(), px, d_offset)
                } else {
                    let pt1 = cell2.contour_point(lines).pos::<T>();
                    point_point_equidistant(px, pt1, d_offset)
                };
                match solutions {
                    EquidistantPoints::TwoPoints(sol0, sol1) => {
                        if possibly_two_points {
                            let v = p1 - p0;
                            let l2 = v.length_squared();
                            let (mut sol0, mut sol1) = (sol0, sol1);
                            let mut t0 = v.dot(sol0 - p0);
                            let mut t1 = v.dot(sol1 - p0);
                            if t0 > t1 {
                                std::mem::swap(&mut t0, &mut t1);
                                std::mem::swap(&mut sol0, &mut sol1);
                            }
                            let valid0 = t0 >= T::zero() && t0 <= l2;
                            let valid1 = t1 >= T::zero() && t1 <= l2;
                            match (valid0, valid1) {
                                (true, true) => {
                                    // Both crossings lie on this edge pair; the entry into
                                    // this half-edge's cell is the one at the smaller
                                    // chord parameter, the twin takes the other.
                                    out[edge_idx] = EdgeIntersection::Point(sol0);
                                    out[twin_idx] = EdgeIntersection::Point(sol1);
                                    done = true;
                                }
                                (true, false) | (false, true) => {
                                    let sol = if valid0 { sol0 } else { sol1 };
                                    let (target, other) = if d1 < d0 {
                                        (twin_idx, edge_idx)
                                    } else {
                                        (edge_idx, twin_idx)
                                    };
                                    out[target] = EdgeIntersection::Point(sol);
                                    out[other] = EdgeIntersection::Visited;
                                    done = true;
                                }
                                (false, false) => {
                                    debug_assert!(
                                        false,
                                        "predicted root missing on edge {}",
                                        edge_idx
                                    );
                                    warnings.push(Warning::MissingRoot { edge: edge_idx });
                                }
                            }
                        } else {
                            // One end is nearer than the offset; keep the root on the half
                            // leading away from it, i.e. the root furthest from the edge
                            // ends.
                            let m0 = (sol0 - p0)
                                .length_squared()
                                .max((sol0 - p1).length_squared());
                            let m1 = (sol1 - p0)
                                .length_squared()
                                .max((sol1 - p1).length_squared());
                            let sol = if m0 > m1 { sol0 } else { sol1 };
                            let (target, other) = if d1 < d0 {
                                (twin_idx, edge_idx)
                            } else {
                                (edge_idx, twin_idx)
                            };
                            out[target] = EdgeIntersection::Point(sol);
                            out[other] = EdgeIntersection::Visited;
                            done = true;
                        }
                    }
                    EquidistantPoints::OnePoint(_) => {
                        // Tangential contact; treated as no crossing.
                    }
                    EquidistantPoints::NoPoints => {
                        debug_assert!(false, "predicted root missing on edge {}", edge_idx);
                        warnings.push(Warning::MissingRoot { edge: edge_idx });
                    }
                }
            }
        }

        if !done {
            out[edge_idx] = EdgeIntersection::Visited;
            out[twin_idx] = EdgeIntersection::Visited;
        }
    }

    Ok(out)
}
