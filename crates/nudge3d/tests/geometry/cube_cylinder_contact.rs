use na::Point3;
use nudge3d::query;
use nudge3d::shape::{ConvexMesh, Cylinder};

fn unit_cube() -> ConvexMesh {
    ConvexMesh::cuboid(Point3::origin(), Point3::new(1.0, 1.0, 1.0))
}

fn cylinder_at(x: f32, y: f32) -> Cylinder {
    Cylinder::new(Point3::new(x, y, 0.5), 1.0, 0.25)
}

#[test]
fn cylinder_resting_on_cube_face() {
    let cube = unit_cube();

    assert!(query::is_collision(&cylinder_at(0.5, 0.99), &cube).collided);
    assert!(!query::is_collision(&cylinder_at(0.5, 1.01), &cube).collided);

    let res = query::is_collision(&cylinder_at(0.5, 0.99), &cube);
    assert_relative_eq!(res.depth, 0.01, epsilon = 1.0e-3);
    assert!(res.normal.y < -0.99);
}

#[test]
fn cylinder_sliding_off_cube_edge() {
    let cube = unit_cube();
    // The cylinder rim leaves the top face once its axis passes x = 1.25.
    let edge = 1.25;

    for k in 0..=30 {
        let x = 0.5 + k as f32 * 0.05;

        if (x - edge).abs() < 0.02 {
            continue;
        }

        let res = query::is_collision(&cylinder_at(x, 0.99), &cube);
        assert_eq!(res.collided, x < edge, "x = {}", x);
    }
}

#[test]
fn cylinder_lifting_off_cube_face() {
    let cube = unit_cube();

    for k in 0..=20 {
        let y = 0.9 + k as f32 * 0.01;

        if (y - 1.0).abs() < 0.005 {
            continue;
        }

        let res = query::is_collision(&cylinder_at(0.5, y), &cube);
        assert_eq!(res.collided, y < 1.0, "y = {}", y);
    }
}
