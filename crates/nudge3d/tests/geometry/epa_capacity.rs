use na::{Point3, Vector3};
use nudge3d::query::epa::{EdgeBuffer, Face, Polytope, EPA_MAX_EDGES, EPA_MAX_FACES};

fn face_at(x: f32) -> Face {
    let p = Point3::new(x, 0.0, 1.0);
    Face::new(p, p + Vector3::x(), p + Vector3::y()).unwrap()
}

#[test]
fn polytope_drops_faces_past_capacity() {
    let mut polytope = Polytope::new();

    let accepted = (0..EPA_MAX_FACES + 10)
        .filter(|i| polytope.push(face_at(*i as f32 * 3.0)))
        .count();

    assert_eq!(accepted, EPA_MAX_FACES);
    assert_eq!(polytope.len(), EPA_MAX_FACES);
}

#[test]
fn edge_buffer_drops_edges_past_capacity() {
    let faces: Vec<_> = (0..EPA_MAX_EDGES).map(|i| face_at(i as f32 * 3.0)).collect();

    let horizon = EdgeBuffer::horizon(&faces);

    assert_eq!(horizon.len(), EPA_MAX_EDGES);
    assert_eq!(horizon.edges()[0], faces[0].edges()[0]);
}
