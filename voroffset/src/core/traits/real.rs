use super::FuzzyOrd;

/// Trait representing a real number (e.g. `f64`) that can be fuzzy compared and ordered.
///
/// All floating point computation in the crate is generic over this trait. Input contour
/// coordinates are `i64`; [Real::from_coord] is the widening conversion used at the boundary.
pub trait Real:
    num_traits::real::Real
    + num_traits::Bounded
    + FuzzyOrd
    + std::default::Default
    + std::fmt::Debug
    + 'static
{
    #[inline]
    fn pi() -> Self {
        Self::from(std::f64::consts::PI).unwrap()
    }

    #[inline]
    fn two() -> Self {
        Self::one() + Self::one()
    }

    #[inline]
    fn four() -> Self {
        Self::two() + Self::two()
    }

    #[inline]
    fn half() -> Self {
        Self::one() / Self::two()
    }

    /// Widening conversion from a scaled integer coordinate.
    #[inline]
    fn from_coord(v: i64) -> Self {
        Self::from(v).unwrap()
    }

    #[inline]
    fn min_value() -> Self {
        num_traits::real::Real::min_value()
    }

    #[inline]
    fn max_value() -> Self {
        num_traits::real::Real::max_value()
    }
}

impl Real for f32 {
    #[inline]
    fn pi() -> Self {
        std::f32::consts::PI
    }

    #[inline]
    fn two() -> Self {
        2.0f32
    }

    #[inline]
    fn four() -> Self {
        4.0f32
    }

    #[inline]
    fn half() -> Self {
        0.5f32
    }
}

impl Real for f64 {
    #[inline]
    fn pi() -> Self {
        std::f64::consts::PI
    }

    #[inline]
    fn two() -> Self {
        2.0f64
    }

    #[inline]
    fn four() -> Self {
        4.0f64
    }

    #[inline]
    fn half() -> Self {
        0.5f64
    }
}
