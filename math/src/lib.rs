/// Defines useful functions for common math operations, tools and constants:
/// - Barycentric interpolation on not only primitive types,
/// - Macros to check if two math quantities are less than / greater than (or equal to) each other.
pub mod float;

/// Homogeneous-coordinate maths module.
/// - Types: 3D points and vectors, 3x3 matrices.
/// - Macro `assert_close!` to compare two vectors.
pub mod hcm;
