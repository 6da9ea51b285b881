use crate::math::{Real, Vector};
use crate::query::epa;
use crate::query::gjk::{self, GJKResult, Simplex};
use crate::query::QueryOptions;
use crate::shape::SupportMap;

/// The outcome of a collision query between two shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct CollisionResult {
    /// The unit penetration direction, pointing from the first shape toward the second.
    ///
    /// Zero if the shapes do not collide.
    pub normal: Vector<Real>,
    /// The penetration depth. Zero if the shapes do not collide.
    pub depth: Real,
    /// Whether the shapes overlap.
    pub collided: bool,
}

impl CollisionResult {
    /// The result of a query between disjoint shapes.
    pub fn none() -> Self {
        Self {
            normal: Vector::zeros(),
            depth: 0.0,
            collided: false,
        }
    }

    /// The translation to apply to the first shape so it stops overlapping the second.
    #[inline]
    pub fn correction(&self) -> Vector<Real> {
        -self.normal * self.depth
    }
}

impl Default for CollisionResult {
    fn default() -> Self {
        Self::none()
    }
}

/// Computes the penetration of two convex shapes, using the default [`QueryOptions`].
///
/// See [`is_collision_with_options`].
pub fn is_collision<G1, G2>(g1: &G1, g2: &G2) -> CollisionResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    is_collision_with_options(g1, g2, &QueryOptions::default())
}

/// Computes the penetration of two convex shapes.
///
/// GJK decides whether the shapes overlap. When they do, EPA extracts the penetration normal
/// and depth from the simplex GJK ended with. A GJK run that exhausts its iteration bound is
/// reported as no collision, and a non-converged EPA run is reported with its best estimate.
pub fn is_collision_with_options<G1, G2>(
    g1: &G1,
    g2: &G2,
    options: &QueryOptions,
) -> CollisionResult
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let mut simplex = Simplex::new();

    match gjk::intersect(g1, g2, &mut simplex, options) {
        GJKResult::Intersection => {
            let penetration = epa::penetration(g1, g2, &simplex, options);
            CollisionResult {
                normal: penetration.normal.into_inner(),
                depth: penetration.depth,
                collided: true,
            }
        }
        GJKResult::NoIntersection | GJKResult::MaxIterations => CollisionResult::none(),
    }
}
