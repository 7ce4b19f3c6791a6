/// Check for equality between two components. Without an explicit epsilon the
/// tolerance covers the trigonometric and gamma round off of Oklch
/// conversions.
#[macro_export]
macro_rules! assert_component_eq {
    ($actual:expr,$expected:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = 1.0e-3);
    }};
    ($actual:expr,$expected:expr,$epsilon:expr) => {{
        approx::assert_abs_diff_eq!($actual, $expected, epsilon = $epsilon);
    }};
}
