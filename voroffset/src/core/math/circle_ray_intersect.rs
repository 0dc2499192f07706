use super::Vector2;
use crate::core::traits::Real;

/// Finds the first intersection of a circle with the ray `origin + t * direction`, returned
/// as the parametric value `t` clamped to `[0, 1]`.
///
/// Solves `||origin + t * direction - center|| = radius` and returns the smaller
/// non-negative root; a tangential contact degenerates to the single closest point. The
/// caller must guarantee an intersection exists within the parameter range, i.e.
/// `radius <= max(||origin - center||, ||origin + direction - center||)`.
///
/// # Examples
///
/// ```
/// # use voroffset::core::math::*;
/// let t = first_circle_ray_intersection_parameter(
///     Vector2::<f64>::new(0.0, 0.0),
///     5.0,
///     Vector2::new(-10.0, 0.0),
///     Vector2::new(20.0, 0.0),
/// );
/// assert!((t - 0.25).abs() < 1e-12);
/// ```
pub fn first_circle_ray_intersection_parameter<T>(
    center: Vector2<T>,
    radius: T,
    origin: Vector2<T>,
    direction: Vector2<T>,
) -> T
where
    T: Real,
{
    let d = origin - center;
    debug_assert!({
        let d0 = (origin - center).length();
        let d1 = (origin + direction - center).length();
        radius < d0.max(d1) + T::fuzzy_epsilon()
    });
    let a = direction.length_squared();
    let b = T::two() * d.dot(direction);
    let c = d.length_squared() - radius * radius;
    let u = b * b - T::four() * a * c;
    if u <= T::zero() {
        // Degenerate to the single closest point.
        let t = -b / (T::two() * a);
        t.max(T::zero()).min(T::one())
    } else {
        let u = u.sqrt();
        let t0 = (-b - u) / (T::two() * a);
        let t1 = (-b + u) / (T::two() * a);
        // One of the roots shall be found inside the parameter range.
        if t1 < T::zero() {
            T::zero()
        } else if t0 > T::one() {
            T::one()
        } else if t0 > T::zero() {
            t0
        } else {
            t1
        }
    }
}
