use na::{Point3, Vector3};
use nudge3d::controller::{resolve, ResolutionOptions};
use nudge3d::query;
use nudge3d::shape::{ConvexMesh, Cylinder};

fn random_cylinder(rng: &mut oorandom::Rand32) -> Cylinder {
    let position = Point3::from(Vector3::from_fn(|_, _| rng.rand_float() * 10.0 - 5.0));
    let height = 0.5 + rng.rand_float() * 4.0;
    let radius = 0.1 + rng.rand_float() * 2.0;
    Cylinder::new(position, height, radius)
}

#[test]
fn separated_shapes_never_collide() {
    let mut rng = oorandom::Rand32::new(42);

    for _ in 0..500 {
        let cylinder = random_cylinder(&mut rng);
        let gap = 0.01 + rng.rand_float();
        let size = Vector3::from_fn(|_, _| 0.1 + rng.rand_float() * 3.0);

        // A box entirely on the +x side of the cylinder.
        let mins = Point3::new(
            cylinder.position.x + cylinder.radius + gap,
            cylinder.position.y - rng.rand_float() * size.y,
            cylinder.position.z - rng.rand_float() * size.z,
        );
        let cube = ConvexMesh::cuboid(mins, mins + size);

        let res = query::is_collision(&cylinder, &cube);
        assert!(!res.collided, "{:?} and {:?} collide", cylinder, cube);
        assert_eq!(res.depth, 0.0);
        assert_eq!(res.normal, Vector3::zeros());
    }
}

#[test]
fn random_overlaps_are_resolved() {
    let mut rng = oorandom::Rand32::new(7);
    let floor = [ConvexMesh::cuboid(
        Point3::new(-20.0, -2.0, -20.0),
        Point3::new(20.0, 0.0, 20.0),
    )];

    for _ in 0..100 {
        let mut cylinder = random_cylinder(&mut rng);
        cylinder.position.y = -(0.01 + rng.rand_float() * 0.5);

        let res = query::is_collision(&cylinder, &floor[0]);
        assert!(res.collided);
        assert!(res.depth > 0.0);

        let resolution = resolve(&mut cylinder, &floor, &ResolutionOptions::default());
        assert!(resolution.settled);
        assert!(!query::is_collision(&cylinder, &floor[0]).collided);
    }
}
