use crate::math::{Real, UnitVector, Vector};
use crate::query::epa::Polytope;
use crate::query::gjk::{minkowski_support, Simplex, MAX_SIMPLEX_POINTS};
use crate::query::QueryOptions;
use crate::shape::SupportMap;

/// How an EPA run terminated.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum EpaStatus {
    /// The closest face stopped moving by more than the requested accuracy.
    Converged,
    /// The iteration bound was reached: the result is the best estimate available.
    IterationLimit,
    /// The polytope had no usable face, so the result is an arbitrary fallback.
    Degenerate,
}

/// The penetration of two overlapping shapes.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct Penetration {
    /// The penetration direction, pointing from the first shape toward the second.
    ///
    /// Translating the first shape by `-normal * depth` removes the overlap.
    pub normal: UnitVector<Real>,
    /// The penetration depth, always non-negative.
    pub depth: Real,
    /// How the computation terminated.
    pub status: EpaStatus,
}

impl Penetration {
    fn degenerate(options: &QueryOptions) -> Self {
        Self {
            normal: Vector::y_axis(),
            depth: options.epa_accuracy,
            status: EpaStatus::Degenerate,
        }
    }
}

/// Computes the penetration normal and depth of two overlapping shapes with the Expanding
/// Polytope Algorithm.
///
/// The `simplex` must be the tetrahedron enclosing the origin produced by a successful
/// [`gjk::intersect`](crate::query::gjk::intersect) on the same shapes.
///
/// The polytope starts as this tetrahedron and is repeatedly grown toward the support point of
/// the Minkowski difference in the direction of its face closest to the origin, until that face
/// lies on the boundary of the Minkowski difference up to `options.epa_accuracy`.
///
/// # Panics
/// If `simplex` does not hold exactly four points.
pub fn penetration<G1, G2>(
    g1: &G1,
    g2: &G2,
    simplex: &Simplex,
    options: &QueryOptions,
) -> Penetration
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let pts = simplex.points();
    assert_eq!(
        pts.len(),
        MAX_SIMPLEX_POINTS,
        "EPA must start from a tetrahedron."
    );

    let mut polytope = Polytope::from_tetrahedron([pts[0], pts[1], pts[2], pts[3]]);

    for _ in 0..options.epa_max_iterations {
        let Some(closest) = polytope.closest_face().copied() else {
            return Penetration::degenerate(options);
        };

        let support = minkowski_support(g1, g2, &closest.normal);
        let support_dist = support.coords.dot(&closest.normal);

        if support_dist - closest.distance < options.epa_accuracy {
            return Penetration {
                normal: closest.normal,
                depth: (support_dist + options.epa_accuracy).max(0.0),
                status: EpaStatus::Converged,
            };
        }

        let _ = polytope.expand(&support, options.winding_bias);
    }

    log::warn!(
        "EPA did not converge after {} iterations, using the closest face found so far.",
        options.epa_max_iterations
    );

    match polytope.closest_face() {
        Some(closest) => Penetration {
            normal: closest.normal,
            depth: (closest.distance + options.epa_accuracy).max(0.0),
            status: EpaStatus::IterationLimit,
        },
        None => Penetration::degenerate(options),
    }
}
