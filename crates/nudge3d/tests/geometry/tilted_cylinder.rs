use na::{Point3, Vector3};
use nudge3d::query;
use nudge3d::shape::{ConvexMesh, Cylinder, SupportMap, Translate};

fn random_unit(rng: &mut oorandom::Rand32) -> Vector3<f32> {
    loop {
        let v = Vector3::from_fn(|_, _| rng.rand_float() * 2.0 - 1.0);
        if let Some(v) = v.try_normalize(0.1) {
            return v;
        }
    }
}

fn random_tilted_cylinder(rng: &mut oorandom::Rand32) -> Cylinder {
    let position = Point3::from(Vector3::from_fn(|_, _| rng.rand_float() * 10.0 - 5.0));
    let axis = random_unit(rng);
    let height = 0.5 + rng.rand_float() * 4.0;
    let radius = 0.1 + rng.rand_float() * 2.0;
    Cylinder::try_new(position, axis, height, radius).unwrap()
}

// Exact extent of the cylinder along the unit direction `n`.
fn max_extent(cylinder: &Cylinder, n: &Vector3<f32>) -> f32 {
    let cos = cylinder.axis.dot(n);
    let sin = (1.0 - cos * cos).max(0.0).sqrt();
    cylinder.center().coords.dot(n) + cylinder.half_height() * cos.abs() + cylinder.radius * sin
}

fn is_inside(cylinder: &Cylinder, p: &Point3<f32>) -> bool {
    let local = p - cylinder.position;
    let along = cylinder.axis.dot(&local);
    let across = (local - *cylinder.axis * along).norm();
    along >= -1.0e-4 && along <= cylinder.height + 1.0e-4 && across <= cylinder.radius + 1.0e-4
}

#[test]
fn near_axial_supports_stay_on_the_cylinder() {
    let mut rng = oorandom::Rand32::new(11);

    for _ in 0..1000 {
        let cylinder = random_tilted_cylinder(&mut rng);
        let noise = Vector3::from_fn(|_, _| rng.rand_float() - 0.5) * 1.0e-5;

        for dir in [*cylinder.axis + noise, -*cylinder.axis + noise] {
            let p = cylinder.furthest_point(&dir);
            assert!(is_inside(&cylinder, &p), "{:?} outside {:?}", p, cylinder);
            let best = max_extent(&cylinder, &dir.normalize()) * dir.norm();
            assert!(p.coords.dot(&dir) >= best - 1.0e-3);
        }
    }
}

#[test]
fn separated_tilted_cylinders_never_collide() {
    let mut rng = oorandom::Rand32::new(23);

    for _ in 0..1000 {
        let cylinder = random_tilted_cylinder(&mut rng);
        let n = random_unit(&mut rng);
        let gap = 0.01 + rng.rand_float() * 0.5;
        let plane = max_extent(&cylinder, &n) + gap;

        // Every vertex lies beyond the plane of normal `n` touching the cylinder, moved by `gap`.
        let points = (0..8)
            .map(|_| {
                let tangent = Vector3::from_fn(|_, _| rng.rand_float() * 6.0 - 3.0);
                let tangent = tangent - n * n.dot(&tangent);
                let offset = plane + rng.rand_float() * 2.0;
                let center = cylinder.center();
                center + tangent + n * (offset - center.coords.dot(&n))
            })
            .collect();
        let mesh = ConvexMesh::new(points).unwrap();

        let res = query::is_collision(&cylinder, &mesh);
        assert!(!res.collided, "{:?} and {:?} collide", cylinder, mesh);
    }
}

#[test]
fn tilted_overlaps_are_cleared_by_the_correction() {
    let mut rng = oorandom::Rand32::new(5);
    let floor = ConvexMesh::cuboid(
        Point3::new(-20.0, -2.0, -20.0),
        Point3::new(20.0, 0.0, 20.0),
    );

    for _ in 0..300 {
        let mut cylinder = random_tilted_cylinder(&mut rng);
        cylinder.position.y = 0.0;
        let depth = 0.01 + rng.rand_float() * 0.5;
        let lowest = -max_extent(&cylinder, &-Vector3::y());
        cylinder.translate_by(&Vector3::new(0.0, -depth - lowest, 0.0));

        let res = query::is_collision(&cylinder, &floor);
        assert!(res.collided);
        assert_relative_eq!(res.depth, depth, epsilon = 1.0e-2);
        assert_relative_eq!(res.normal, -Vector3::y(), epsilon = 1.0e-2);

        cylinder.translate_by(&res.correction());

        let after = query::is_collision(&cylinder, &floor);
        assert!(!after.collided || after.depth < 1.0e-3, "{:?} still sunk", cylinder);
        assert!(-max_extent(&cylinder, &-Vector3::y()) >= -1.0e-3);
    }
}
