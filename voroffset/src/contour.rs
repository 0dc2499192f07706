//! Integer coordinate input/output geometry: contour points, oriented segments, and closed
//! polygons.
//!
//! Coordinates live in a scaled integer system (the reference integration maps one unit to
//! one micrometer). Intermediate arithmetic is performed in a [Real] type; results are
//! rounded back to integers.

use crate::core::{math::Vector2, traits::Real};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Point in scaled integer coordinates.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Point {
    pub x: i64,
    pub y: i64,
}

impl Point {
    #[inline]
    pub fn new(x: i64, y: i64) -> Self {
        Point { x, y }
    }

    /// Widening conversion to a floating point position.
    #[inline]
    pub fn pos<T>(&self) -> Vector2<T>
    where
        T: Real,
    {
        Vector2::new(T::from_coord(self.x), T::from_coord(self.y))
    }

    /// Rounding conversion from a floating point position.
    #[inline]
    pub fn from_vector2<T>(v: Vector2<T>) -> Self
    where
        T: Real,
    {
        Point::new(coord_from_real(v.x), coord_from_real(v.y))
    }
}

/// Rounds a floating point coordinate back to the scaled integer system.
#[inline]
pub(crate) fn coord_from_real<T>(v: T) -> i64
where
    T: Real,
{
    let r = v.round();
    debug_assert!(r.to_i64().is_some(), "coordinate not representable: {:?}", v);
    r.to_i64().unwrap_or(0)
}

/// Oriented line segment between two contour points.
///
/// Consecutive segments of a contour share end points; outer boundaries run counter
/// clockwise, holes clockwise.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Line {
    pub a: Point,
    pub b: Point,
}

impl Line {
    #[inline]
    pub fn new(a: Point, b: Point) -> Self {
        Line { a, b }
    }

    /// Direction vector from `a` to `b`.
    #[inline]
    pub fn vector<T>(&self) -> Vector2<T>
    where
        T: Real,
    {
        self.b.pos::<T>() - self.a.pos::<T>()
    }
}

/// Closed polygon as a ring of integer points; the closing segment from the last point back
/// to the first is implicit.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Polygon {
    pub points: Vec<Point>,
}

impl Polygon {
    #[inline]
    pub fn new() -> Self {
        Polygon { points: Vec::new() }
    }

    pub fn from_points(points: Vec<Point>) -> Self {
        Polygon { points }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Signed area of the ring (positive for counter clockwise orientation).
    pub fn signed_area<T>(&self) -> T
    where
        T: Real,
    {
        if self.points.is_empty() {
            return T::zero();
        }
        let mut sum = 0i128;
        for (i, p) in self.points.iter().enumerate() {
            let q = &self.points[(i + 1) % self.points.len()];
            sum += p.x as i128 * q.y as i128 - q.x as i128 * p.y as i128;
        }
        T::from(sum).unwrap() / T::two()
    }

    /// Returns `true` if the ring winds counter clockwise.
    pub fn is_ccw(&self) -> bool {
        self.signed_area::<f64>() > 0.0
    }

    /// The ring broken into its oriented segments, including the implicit closing one.
    pub fn lines(&self) -> Vec<Line> {
        let n = self.points.len();
        (0..n)
            .map(|i| Line::new(self.points[i], self.points[(i + 1) % n]))
            .collect()
    }
}

/// Breaks a set of closed polygons into the flat oriented segment soup the diagram
/// algorithms consume.
pub fn polygons_to_lines(polygons: &[Polygon]) -> Vec<Line> {
    polygons.iter().flat_map(|p| p.lines()).collect()
}

/// Reassembles closed polygons from an oriented segment soup by chaining shared end points.
///
/// The inverse of [polygons_to_lines] up to starting point; segments that do not close a
/// loop are emitted as a (still implicitly closed) partial ring.
pub fn assemble_polygons(lines: &[Line]) -> Vec<Polygon> {
    let mut successor: HashMap<Point, usize> = HashMap::with_capacity(lines.len());
    for (i, line) in lines.iter().enumerate() {
        successor.insert(line.a, i);
    }
    let mut used = vec![false; lines.len()];
    let mut out = Vec::new();
    for start in 0..lines.len() {
        if used[start] {
            continue;
        }
        let mut poly = Polygon::new();
        let mut i = start;
        loop {
            used[i] = true;
            poly.points.push(lines[i].a);
            match successor.get(&lines[i].b) {
                Some(&next) if !used[next] => i = next,
                _ => break,
            }
        }
        out.push(poly);
    }
    out
}
