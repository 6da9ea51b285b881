use na::{Point3, Vector3};
use nudge3d::query::{self, CollisionResult};
use nudge3d::shape::Cylinder;

fn pair(offset: Vector3<f32>) -> (Cylinder, Cylinder) {
    (
        Cylinder::new(Point3::origin(), 2.0, 1.0),
        Cylinder::new(Point3::origin() + offset, 2.0, 1.0),
    )
}

#[test]
fn overlapping_cylinders_penetrate_by_the_radial_overlap() {
    let (c1, c2) = pair(Vector3::new(0.0, 0.0, 1.5));

    let res = query::is_collision(&c1, &c2);

    assert!(res.collided);
    assert_relative_eq!(res.depth, 0.5, epsilon = 1.0e-2);
    assert_relative_eq!(res.normal, Vector3::z(), epsilon = 1.0e-2);
}

#[test]
fn distant_cylinders_do_not_collide() {
    let (c1, c2) = pair(Vector3::new(0.0, 0.0, 3.0));

    assert_eq!(query::is_collision(&c1, &c2), CollisionResult::none());
}

#[test]
fn stacked_cylinders_penetrate_along_the_axis() {
    let (c1, c2) = pair(Vector3::new(0.0, 1.75, 0.0));

    let res = query::is_collision(&c1, &c2);

    assert!(res.collided);
    assert_relative_eq!(res.depth, 0.25, epsilon = 1.0e-3);
    assert_relative_eq!(res.normal, Vector3::y(), epsilon = 1.0e-3);
}

#[test]
fn identical_queries_give_identical_results() {
    let (c1, c2) = pair(Vector3::new(0.3, 0.7, 1.1));

    let first = query::is_collision(&c1, &c2);
    for _ in 0..10 {
        assert_eq!(query::is_collision(&c1, &c2), first);
    }
}

#[test]
fn touching_cylinders_are_stable() {
    // Side by side with no gap.
    let (c1, c2) = pair(Vector3::new(0.0, 0.0, 2.0));

    let first = query::is_collision(&c1, &c2);
    for _ in 0..10 {
        assert_eq!(query::is_collision(&c1, &c2), first);
    }

    if first.collided {
        assert!(first.depth < 1.0e-2);
    }
}
