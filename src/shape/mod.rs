//! Shapes supported by nudge3d.

pub use self::collider::Collider;
pub use self::convex_mesh::ConvexMesh;
pub use self::cylinder::Cylinder;
pub use self::error::ShapeError;
#[doc(inline)]
pub use self::support_map::{SupportMap, Translate};

mod collider;
mod convex_mesh;
mod cylinder;
mod error;
mod support_map;
