//! Support mapping based on an unordered cloud of vertices.

use crate::math::{Point, Real, Vector};
use crate::shape::{ShapeError, SupportMap, Translate};
use crate::utils;

/// A convex solid described only by its vertices.
///
/// No topology is stored: the shape is the convex hull of its points, and support queries scan
/// every vertex. This is what level geometry loaded from a scene becomes.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub struct ConvexMesh {
    points: Vec<Point<Real>>,
}

impl ConvexMesh {
    /// Creates a convex mesh from its vertices, expressed in world space.
    ///
    /// Fails if `points` is empty or contains a non-finite coordinate.
    pub fn new(points: Vec<Point<Real>>) -> Result<Self, ShapeError> {
        if points.is_empty() {
            return Err(ShapeError::EmptyConvexMesh);
        }

        if let Some(i) = points
            .iter()
            .position(|pt| !pt.coords.iter().all(|x| x.is_finite()))
        {
            return Err(ShapeError::NonFinitePoint(i));
        }

        Ok(ConvexMesh { points })
    }

    /// Creates the eight-vertex box spanning `mins` to `maxs`.
    pub fn cuboid(mins: Point<Real>, maxs: Point<Real>) -> Self {
        let points = (0..8)
            .map(|i| {
                Point::new(
                    if i & 1 == 0 { mins.x } else { maxs.x },
                    if i & 2 == 0 { mins.y } else { maxs.y },
                    if i & 4 == 0 { mins.z } else { maxs.z },
                )
            })
            .collect();

        ConvexMesh { points }
    }

    /// The vertices of this mesh.
    #[inline]
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    /// Consumes this mesh and returns its vertices.
    #[inline]
    pub fn into_points(self) -> Vec<Point<Real>> {
        self.points
    }
}

impl SupportMap for ConvexMesh {
    #[inline]
    fn furthest_point(&self, dir: &Vector<Real>) -> Point<Real> {
        utils::point_cloud_support_point(dir, &self.points)
    }
}

impl Translate for ConvexMesh {
    fn translate_by(&mut self, delta: &Vector<Real>) {
        self.points.iter_mut().for_each(|pt| *pt += delta);
    }
}
