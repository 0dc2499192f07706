use super::Vector2;
use crate::core::traits::Real;

/// Holds the result of solving for points equidistant from a pair of sites.
#[derive(Debug, Copy, Clone)]
pub enum EquidistantPoints<T>
where
    T: Real,
{
    /// The sites are too far apart for the requested distance.
    NoPoints,
    /// Single tangential solution.
    OnePoint(Vector2<T>),
    /// The generic case of two solutions.
    TwoPoints(Vector2<T>, Vector2<T>),
}

/// Finds up to two points at distance `d` from both `pt1` and `pt2` (the intersection of the
/// two circles of radius `d`, equivalently of the midperpendicular with either circle).
///
/// The closed form is evaluated in a frame centered at `pt2`; the x and y axes are swapped
/// when the x separation of the sites is the smaller one, so the division always happens by
/// the larger coordinate. `pt1` and `pt2` must be distinct.
///
/// # Examples
///
/// ```
/// # use voroffset::core::math::*;
/// let p1 = Vector2::<f64>::new(0.0, 0.0);
/// let p2 = Vector2::new(10.0, 0.0);
/// if let EquidistantPoints::TwoPoints(a, b) = point_point_equidistant(p1, p2, 13.0) {
///     for p in [a, b] {
///         assert!(((p - p1).length() - 13.0).abs() < 1e-9);
///         assert!(((p - p2).length() - 13.0).abs() < 1e-9);
///     }
/// } else {
///     unreachable!("expected two points");
/// }
/// ```
pub fn point_point_equidistant<T>(
    pt1: Vector2<T>,
    pt2: Vector2<T>,
    d: T,
) -> EquidistantPoints<T>
where
    T: Real,
{
    let mut cx = pt1.x - pt2.x;
    let mut cy = pt1.y - pt2.y;
    let cl = cx * cx + cy * cy;
    debug_assert!(cl > T::zero(), "point sites must be distinct");
    let discr = T::four() * d * d - cl;
    if discr < T::zero() {
        // The two circles are too far away.
        return EquidistantPoints::NoPoints;
    }
    // Avoid division by too small a coordinate.
    let xy_swapped = cx.abs() < cy.abs();
    if xy_swapped {
        std::mem::swap(&mut cx, &mut cy);
    }
    let tangential = discr == T::zero();
    let u = if tangential {
        T::zero()
    } else {
        T::half() * cx * (cl * discr).sqrt() / cl
    };
    let v = T::half() * cy - u;
    let w = T::two() * cy;
    let e = T::half() / cx;
    let f = T::half() * cy + u;
    let mut sol0 = Vector2::new(-e * (v * w - cl), v);
    let mut sol1 = Vector2::new(-e * (w * f - cl), f);
    if xy_swapped {
        std::mem::swap(&mut sol0.x, &mut sol0.y);
        std::mem::swap(&mut sol1.x, &mut sol1.y);
    }
    sol0 = sol0 + pt2;
    sol1 = sol1 + pt2;
    if tangential {
        EquidistantPoints::OnePoint(sol0)
    } else {
        EquidistantPoints::TwoPoints(sol0, sol1)
    }
}

/// Finds up to two points at distance `d` from the infinite line through `a` and `b` and
/// from the point `pt`, on the side of the line where `pt` lies.
///
/// The line equation is normalized so its normal points toward `pt`; as in
/// [point_point_equidistant] the axes are swapped for numerical stability when the line runs
/// closer to the x axis. `pt` must not lie on the line.
///
/// # Examples
///
/// ```
/// # use voroffset::core::math::*;
/// let a = Vector2::<f64>::new(0.0, 0.0);
/// let b = Vector2::new(10.0, 0.0);
/// let pt = Vector2::new(5.0, 6.0);
/// if let EquidistantPoints::TwoPoints(s0, s1) = line_point_equidistant(a, b, pt, 5.0) {
///     for p in [s0, s1] {
///         assert!((p.y - 5.0).abs() < 1e-9);
///         assert!(((p - pt).length() - 5.0).abs() < 1e-9);
///     }
/// } else {
///     unreachable!("expected two points");
/// }
/// ```
pub fn line_point_equidistant<T>(
    a: Vector2<T>,
    b: Vector2<T>,
    pt: Vector2<T>,
    d: T,
) -> EquidistantPoints<T>
where
    T: Real,
{
    let mut lv = b - a;
    let l2 = lv.length_squared();
    debug_assert!(l2 > T::zero(), "line must not be degenerate");
    let lpv = a - pt;
    let mut c = lpv.perp_dot(lv);
    debug_assert!(c != T::zero(), "point must not lie on the line");
    if c < T::zero() {
        lv = -lv;
        c = -c;
    }

    // Line equation a_coef * x + b_coef * y + c = d * sqrt(l2) in the frame centered at pt,
    // with the (a_coef, b_coef) normal pointing toward pt.
    let mut a_coef = -lv.y;
    let mut b_coef = lv.x;

    let dscaled = d * l2.sqrt();
    let s = c * (T::two() * dscaled - c);
    if s < T::zero() {
        // Distance of pt from the line is bigger than 2 * d.
        return EquidistantPoints::NoPoints;
    }
    // Avoid division by too small a coefficient.
    let xy_swapped = a_coef.abs() < b_coef.abs();
    if xy_swapped {
        std::mem::swap(&mut a_coef, &mut b_coef);
    }
    let tangential = s == T::zero();
    let u = if tangential {
        // Distance of pt from the line is exactly 2 * d.
        T::zero()
    } else {
        a_coef * s.sqrt() / l2
    };
    let e = dscaled - c;
    let f = b_coef * e / l2;
    let g = f - u;
    let h = f + u;
    let mut sol0 = Vector2::new((-b_coef * g + e) / a_coef, g);
    let mut sol1 = Vector2::new((-b_coef * h + e) / a_coef, h);
    if xy_swapped {
        std::mem::swap(&mut sol0.x, &mut sol0.y);
        std::mem::swap(&mut sol1.x, &mut sol1.y);
    }
    sol0 = sol0 + pt;
    sol1 = sol1 + pt;
    if tangential {
        EquidistantPoints::OnePoint(sol0)
    } else {
        EquidistantPoints::TwoPoints(sol0, sol1)
    }
}
