//! Traits for support mapping based shapes.

use crate::math::{Point, Real, Vector};

/// Traits of convex shapes representable by a support mapping function.
///
/// Every shape is expressed directly in world space: the support point
/// already accounts for the shape's position.
pub trait SupportMap {
    /// Evaluates the support function of this shape.
    ///
    /// A support function is a function associating a vector to the shape point which maximizes
    /// their dot product. `dir` does not need to be normalized. When several points are maximal,
    /// which one is returned is implementation-defined but deterministic.
    fn furthest_point(&self, dir: &Vector<Real>) -> Point<Real>;
}

/// Shapes that can be moved rigidly by a translation.
///
/// The resolution loop relies on this to push a moving shape out of the static geometry.
pub trait Translate {
    /// Translates this shape by `delta`.
    fn translate_by(&mut self, delta: &Vector<Real>);
}

impl<T: SupportMap + ?Sized> SupportMap for &T {
    #[inline]
    fn furthest_point(&self, dir: &Vector<Real>) -> Point<Real> {
        (**self).furthest_point(dir)
    }
}
