/// Asserts two values compare fuzzy equal, with an optional explicit epsilon as the third
/// argument.
#[macro_export]
macro_rules! assert_fuzzy_eq {
    ($left:expr, $right:expr) => {{
        #[allow(unused_imports)]
        use $crate::core::traits::*;
        let (left, right) = (&$left, &$right);
        if !left.fuzzy_eq(*right) {
            panic!(
                "fuzzy equality assertion failed\n  left: {:?}\n right: {:?}",
                left, right
            );
        }
    }};
    ($left:expr, $right:expr, $eps:expr) => {{
        #[allow(unused_imports)]
        use $crate::core::traits::*;
        let (left, right, eps) = (&$left, &$right, &$eps);
        if !left.fuzzy_eq_eps(*right, *eps) {
            panic!(
                "fuzzy equality assertion failed with epsilon {:?}\n  left: {:?}\n right: {:?}",
                eps, left, right
            );
        }
    }};
}

/// Construct a closed [Polygon](crate::contour::Polygon) from a list of `(x, y)` integer
/// coordinate pairs.
///
/// # Examples
///
/// ```
/// # use voroffset::polygon;
/// # use voroffset::contour::Point;
/// let square = polygon![(0, 0), (10, 0), (10, 10), (0, 10)];
/// assert_eq!(square.len(), 4);
/// assert_eq!(square.points[2], Point::new(10, 10));
/// ```
#[macro_export]
macro_rules! polygon {
    ($(($x:expr, $y:expr)),* $(,)?) => {
        $crate::contour::Polygon::from_points(
            vec![$($crate::contour::Point::new($x, $y)),*]
        )
    };
}
