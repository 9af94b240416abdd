/// Computes the barycentric interpolation given 3 attribute values and 3 barycentric weights:
///
///   bc0 * a + bc1 * b + bc2 * c
///
/// The attribute can be of various types: anything that can be scaled by a `f32` and summed with
/// itself (`f32`, `Vec3`, `Color`, ...). All three weights take part in the sum, so weights that
/// are only approximately normalized are not silently renormalized.
/// ```
/// use math::float::barycentric_lerp;
/// let mid = barycentric_lerp((0.0f32, 3.0, 6.0), (1.0 / 3.0, 1.0 / 3.0, 1.0 / 3.0));
/// assert!((mid - 3.0).abs() < 1e-6);
/// assert_eq!(barycentric_lerp((1.0f32, 2.0, 4.0), (0.0, 0.0, 1.0)), 4.0);
/// ```
pub fn barycentric_lerp<T>(values: (T, T, T), bc_coeffs: (f32, f32, f32)) -> T
where
    T: Copy + std::ops::Mul<f32, Output = T> + std::ops::Add<T, Output = T>,
{
    let (a, b, c) = values;
    let (bc0, bc1, bc2) = bc_coeffs;
    a * bc0 + b * bc1 + c * bc2
}

/// Interpolates a pair (e.g., a UV coordinate) component-wise.
pub fn barycentric_lerp_pair(
    values: ((f32, f32), (f32, f32), (f32, f32)), bc_coeffs: (f32, f32, f32),
) -> (f32, f32) {
    let (a, b, c) = values;
    (
        barycentric_lerp((a.0, b.0, c.0), bc_coeffs),
        barycentric_lerp((a.1, b.1, c.1), bc_coeffs),
    )
}

pub trait Inside
where
    Self: std::cmp::PartialOrd + Sized + Copy,
{
    /// Checks if `self` lies in the closed interval `[left, right]`.
    fn inside(self, interval: (Self, Self)) -> bool {
        let (left, right) = interval;
        left <= self && self <= right
    }
}

impl Inside for f32 {}

#[macro_export]
macro_rules! assert_le {
    ($left:expr, $right:expr) => {
        if $left > $right {
            panic!(
                "Assertion failed: {} <= {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}

#[macro_export]
macro_rules! assert_ge {
    ($left:expr, $right:expr) => {
        if $left < $right {
            panic!(
                "Assertion failed: {} >= {} (values: {} vs. {})",
                stringify!($left),
                stringify!($right),
                $left,
                $right
            )
        }
    };
}
