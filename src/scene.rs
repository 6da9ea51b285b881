//! Extraction of colliders from loaded level geometry.

use crate::math::{Point, Real};
use crate::shape::{Collider, ConvexMesh, ShapeError};

/// One sub-mesh of a loaded level, as produced by an asset loader.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct SceneMesh {
    /// A human-readable name used in error reports.
    pub name: String,
    /// The vertex positions, in world space.
    pub positions: Vec<Point<Real>>,
    /// Whether characters collide with this mesh.
    pub collidable: bool,
}

/// Errors raised while building the colliders of a scene.
#[derive(thiserror::Error, Clone, Debug, PartialEq)]
pub enum SceneError {
    /// A collidable mesh does not describe a valid convex shape.
    #[error("the collidable mesh {index} ({name:?}) is invalid: {source}")]
    InvalidMesh {
        /// The index of the mesh in the scene.
        index: usize,
        /// The name of the mesh.
        name: String,
        /// Why the mesh was rejected.
        source: ShapeError,
    },
}

/// Builds one convex mesh collider per collidable mesh of `meshes`, in order.
///
/// Vertex positions are copied: the colliders do not borrow from the scene. Meshes that are not
/// collidable are skipped.
pub fn colliders_from_scene(meshes: &[SceneMesh]) -> Result<Vec<Collider>, SceneError> {
    let colliders = meshes
        .iter()
        .enumerate()
        .filter(|(_, mesh)| mesh.collidable)
        .map(|(index, mesh)| {
            ConvexMesh::new(mesh.positions.clone())
                .map(Collider::from)
                .map_err(|source| SceneError::InvalidMesh {
                    index,
                    name: mesh.name.clone(),
                    source,
                })
        })
        .collect::<Result<Vec<_>, _>>()?;

    log::info!(
        "Loaded {} colliders from {} scene meshes.",
        colliders.len(),
        meshes.len()
    );

    Ok(colliders)
}
