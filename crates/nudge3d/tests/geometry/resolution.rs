use na::Point3;
use nudge3d::controller::{probe_ground, resolve, ResolutionOptions};
use nudge3d::query;
use nudge3d::scene::{colliders_from_scene, SceneMesh};
use nudge3d::shape::{Collider, ConvexMesh, Cylinder};

fn corner() -> Vec<Collider> {
    let floor = ConvexMesh::cuboid(Point3::new(-10.0, -1.0, -10.0), Point3::new(10.0, 0.0, 10.0));
    let wall = ConvexMesh::cuboid(Point3::new(1.0, 0.0, -10.0), Point3::new(2.0, 5.0, 10.0));
    let back = ConvexMesh::cuboid(Point3::new(-10.0, 0.0, 1.0), Point3::new(10.0, 5.0, 2.0));

    let meshes: Vec<_> = [("floor", floor), ("wall", wall), ("back", back)]
        .into_iter()
        .map(|(name, mesh)| SceneMesh {
            name: name.to_string(),
            positions: mesh.into_points(),
            collidable: true,
        })
        .collect();

    colliders_from_scene(&meshes).unwrap()
}

#[test]
fn settled_shape_overlaps_nothing() {
    let statics = corner();
    let mut body = Cylinder::new(Point3::new(0.8, -0.2, 0.7), 2.0, 0.5);

    let res = resolve(&mut body, &statics, &ResolutionOptions::default());

    assert!(res.settled);
    assert!(res.corrections >= 3);
    for shape in &statics {
        assert!(!query::is_collision(&body, shape).collided);
    }

    assert_relative_eq!(body.position.x, 0.5, epsilon = 1.0e-2);
    assert_relative_eq!(body.position.y, 0.0, epsilon = 1.0e-2);
    assert_relative_eq!(body.position.z, 0.5, epsilon = 1.0e-2);
}

#[test]
fn ground_probe_after_resolution() {
    let statics = corner();
    let mut body = Cylinder::new(Point3::new(-3.0, -0.2, -3.0), 2.0, 0.5);
    let _ = resolve(&mut body, &statics, &ResolutionOptions::default());

    let probe = Cylinder::new(body.position - na::Vector3::y() * 0.1, 0.1, 0.5);
    assert!(probe_ground(&probe, &statics));

    let lifted = Cylinder::new(body.position + na::Vector3::y(), 0.1, 0.5);
    assert!(!probe_ground(&lifted, &statics));
}
