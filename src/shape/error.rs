use crate::math::Real;

/// Indicates that a shape was built from invalid geometric data.
#[derive(thiserror::Error, Copy, Clone, Debug, PartialEq)]
pub enum ShapeError {
    /// A convex mesh must contain at least one point.
    #[error("a convex mesh must contain at least one point.")]
    EmptyConvexMesh,
    /// The point at the given index has a NaN or infinite coordinate.
    #[error("the point {0} has at least one non-finite coordinate.")]
    NonFinitePoint(usize),
    /// The cylinder base position has a NaN or infinite coordinate.
    #[error("the cylinder position has at least one non-finite coordinate.")]
    NonFinitePosition,
    /// The cylinder height or radius is negative or not finite.
    #[error("invalid cylinder dimensions (height: {height}, radius: {radius}).")]
    InvalidCylinderDimensions {
        /// The rejected height.
        height: Real,
        /// The rejected radius.
        radius: Real,
    },
    /// The cylinder axis is zero or not finite.
    #[error("the cylinder axis must be a finite non-zero vector.")]
    DegenerateAxis,
}
