use crate::math::{Point, Real, Vector};
use crate::shape::{ConvexMesh, Cylinder, SupportMap, Translate};

/// Enum representing every shape a scene can own.
///
/// This is the closed counterpart of the [`SupportMap`] trait: collections of heterogeneous
/// colliders are stored as `Vec<Collider>` and dispatch with a `match` instead of a vtable.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Clone)]
pub enum Collider {
    /// An upright cylinder.
    Cylinder(Cylinder),
    /// A convex cloud of vertices.
    ConvexMesh(ConvexMesh),
}

impl Collider {
    /// The cylinder wrapped by this collider, if any.
    pub fn as_cylinder(&self) -> Option<&Cylinder> {
        match self {
            Collider::Cylinder(c) => Some(c),
            _ => None,
        }
    }

    /// The convex mesh wrapped by this collider, if any.
    pub fn as_convex_mesh(&self) -> Option<&ConvexMesh> {
        match self {
            Collider::ConvexMesh(m) => Some(m),
            _ => None,
        }
    }
}

impl SupportMap for Collider {
    #[inline]
    fn furthest_point(&self, dir: &Vector<Real>) -> Point<Real> {
        match self {
            Collider::Cylinder(c) => c.furthest_point(dir),
            Collider::ConvexMesh(m) => m.furthest_point(dir),
        }
    }
}

impl Translate for Collider {
    fn translate_by(&mut self, delta: &Vector<Real>) {
        match self {
            Collider::Cylinder(c) => c.translate_by(delta),
            Collider::ConvexMesh(m) => m.translate_by(delta),
        }
    }
}

impl From<Cylinder> for Collider {
    fn from(c: Cylinder) -> Self {
        Collider::Cylinder(c)
    }
}

impl From<ConvexMesh> for Collider {
    fn from(m: ConvexMesh) -> Self {
        Collider::ConvexMesh(m)
    }
}
