use crate::math::{Point, Real, Vector};
use crate::shape::SupportMap;

/// Computes the support point of the Minkowski difference `g1 - g2` toward the direction `dir`.
///
/// This point of the Configuration-Space Obstacle is the difference between the furthest point
/// of `g1` along `dir` and the furthest point of `g2` along `-dir`.
#[inline]
pub fn minkowski_support<G1, G2>(g1: &G1, g2: &G2, dir: &Vector<Real>) -> Point<Real>
where
    G1: ?Sized + SupportMap,
    G2: ?Sized + SupportMap,
{
    let sp1 = g1.furthest_point(dir);
    let sp2 = g2.furthest_point(&-dir);

    Point::from(sp1 - sp2)
}
