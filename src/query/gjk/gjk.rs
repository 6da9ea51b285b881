//! The Gilbert-Johnson-Keerthi intersection test.
//!
//! GJK works on the Minkowski difference of two convex shapes: the shapes overlap if and only
//! if this difference contains the origin. Starting from an arbitrary support point, the
//! algorithm repeatedly queries the support point toward the origin and reduces its working
//! [`Simplex`] to the feature closest to the origin, until either a tetrahedron encloses the
//! origin or a support point fails to pass it.

use crate::math::Vector;
use crate::query::gjk::{minkowski_support, Simplex};
use crate::query::QueryOptions;
use crate::shape::SupportMap;

/// Results of the GJK algorithm.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum GJKResult {
    /// The shapes are intersecting.
    ///
    /// The simplex is a tetrahedron enclosing the origin, ready to seed EPA.
    Intersection,
    /// A separating direction was found: the shapes are disjoint.
    NoIntersection,
    /// The iteration bound was reached before reaching a conclusion.
    ///
    /// This is a miss, not an error: callers treat it like [`GJKResult::NoIntersection`].
    MaxIterations,
}

impl GJKResult {
    /// Is this an intersection?
    #[inline]
    pub fn is_intersection(self) -> bool {
        self == GJKResult::Intersection
    }
}

/// Tests whether two shapes intersect with the GJK algorithm.
///
/// On [`GJKResult::Intersection`], `simplex` holds the tetrahedron enclosing the origin. For any
/// other result its content is unspecified.
pub fn intersect<G1, G2>(
    g1: &G1,
    g2: &G2,
    simplex: &mut Simplex,
    options: &QueryOptions,
) -> GJKResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut dir = Vector::x();
    let support = minkowski_support(g1, g2, &dir);

    // NOTE: a zero first support is reported as disjoint even though the origin
    // belongs to the Minkowski difference in that case.
    if support.coords == Vector::zeros() {
        return GJKResult::NoIntersection;
    }

    simplex.reset(support);
    dir = -support.coords;

    for _ in 0..options.gjk_max_iterations {
        let support = minkowski_support(g1, g2, &dir);

        // The origin lies beyond the furthest point along the search direction.
        if support.coords.dot(&dir) < 0.0 {
            return GJKResult::NoIntersection;
        }

        simplex.push(support);

        if simplex.evolve(&mut dir) {
            return GJKResult::Intersection;
        }
    }

    log::trace!(
        "GJK stopped after {} iterations without a conclusion.",
        options.gjk_max_iterations
    );
    GJKResult::MaxIterations
}

/// Tests whether two shapes intersect, discarding the simplex.
pub fn intersection_test<G1, G2>(g1: &G1, g2: &G2, options: &QueryOptions) -> bool
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    intersect(g1, g2, &mut Simplex::new(), options).is_intersection()
}
