//! The bounded triangle hull expanded by EPA.

use arrayvec::ArrayVec;

use crate::math::{Point, Real, UnitVector};
use crate::utils;

/// The maximum number of boundary edges collected during one expansion step.
pub const EPA_MAX_EDGES: usize = 128;
/// The maximum number of faces of a [`Polytope`].
pub const EPA_MAX_FACES: usize = 2 * EPA_MAX_EDGES;

/// Tolerance of the point comparisons used to detect shared edges.
const EDGE_EPSILON: Real = 1.0e-4;

/// A triangular face of a [`Polytope`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Face {
    /// The vertices of this face, wound counter-clockwise around [`Face::normal`].
    pub pts: [Point<Real>; 3],
    /// The unit normal of this face.
    pub normal: UnitVector<Real>,
    /// The signed distance from the origin to the plane of this face.
    pub distance: Real,
}

impl Face {
    /// Builds the face `(a, b, c)` with the normal `(b - a) × (c - a)`.
    ///
    /// Returns `None` if the triangle has no well-defined normal.
    pub fn new(a: Point<Real>, b: Point<Real>, c: Point<Real>) -> Option<Self> {
        let normal = utils::ccw_face_normal([&a, &b, &c])?;

        Some(Self {
            pts: [a, b, c],
            normal,
            distance: a.coords.dot(&normal),
        })
    }

    /// The same face with the opposite winding.
    #[must_use]
    pub fn flipped(&self) -> Self {
        Self {
            pts: [self.pts[0], self.pts[2], self.pts[1]],
            normal: UnitVector::new_unchecked(-self.normal.into_inner()),
            distance: -self.distance,
        }
    }

    /// Is `pt` strictly on the outer side of this face's plane?
    #[inline]
    pub fn can_be_seen_by(&self, pt: &Point<Real>) -> bool {
        utils::same_direction(&(pt - self.pts[0]), &self.normal)
    }

    /// The three directed edges of this face, following its winding.
    pub fn edges(&self) -> [Edge; 3] {
        [
            Edge::new(self.pts[0], self.pts[1]),
            Edge::new(self.pts[1], self.pts[2]),
            Edge::new(self.pts[2], self.pts[0]),
        ]
    }
}

/// A directed edge between two points of a polytope.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Edge {
    /// The start point.
    pub a: Point<Real>,
    /// The end point.
    pub b: Point<Real>,
}

impl Edge {
    /// Creates the edge going from `a` to `b`.
    #[inline]
    pub fn new(a: Point<Real>, b: Point<Real>) -> Self {
        Self { a, b }
    }

    /// Does `other` join the same points as `self`, in the opposite direction?
    #[inline]
    pub fn is_reverse_of(&self, other: &Edge) -> bool {
        abs_diff_eq!(self.a, other.b, epsilon = EDGE_EPSILON)
            && abs_diff_eq!(self.b, other.a, epsilon = EDGE_EPSILON)
    }
}

/// The boundary edges of a set of faces, with a fixed capacity of [`EPA_MAX_EDGES`].
#[derive(Clone, Debug, Default)]
pub struct EdgeBuffer {
    edges: ArrayVec<Edge, EPA_MAX_EDGES>,
}

impl EdgeBuffer {
    /// Collects the edges of `faces` that are not shared, in reverse, by another face of `faces`.
    ///
    /// These edges form the boundary of the surface patch made of `faces`. Edges past the
    /// capacity of the buffer are dropped.
    pub fn horizon(faces: &[Face]) -> Self {
        let mut result = Self::default();

        for (i, face) in faces.iter().enumerate() {
            for edge in face.edges() {
                let shared = faces.iter().enumerate().any(|(j, other)| {
                    j != i && other.edges().iter().any(|e| e.is_reverse_of(&edge))
                });

                if !shared {
                    let _ = result.push(edge);
                }
            }
        }

        result
    }

    /// Adds an edge to this buffer.
    ///
    /// Returns `false` and drops the edge if the buffer is full.
    pub fn push(&mut self, edge: Edge) -> bool {
        if self.edges.try_push(edge).is_err() {
            log::debug!("EPA edge buffer is full, dropping an edge.");
            false
        } else {
            true
        }
    }

    /// The collected edges.
    #[inline]
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// The number of collected edges.
    #[inline]
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Does this buffer contain no edge?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }
}

/// A convex hull of triangles enclosing the origin, with a fixed capacity of [`EPA_MAX_FACES`].
///
/// Every face is wound so its normal points away from the interior of the hull.
#[derive(Clone, Debug, Default)]
pub struct Polytope {
    faces: ArrayVec<Face, EPA_MAX_FACES>,
}

impl Polytope {
    /// Creates an empty polytope.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds the four faces of the tetrahedron `pts`, each wound away from its opposite vertex.
    ///
    /// Faces without a well-defined normal are skipped.
    pub fn from_tetrahedron(pts: [Point<Real>; 4]) -> Self {
        // Each face followed by the index of the vertex it does not contain.
        const FACES: [([usize; 3], usize); 4] = [
            ([0, 1, 2], 3),
            ([0, 3, 1], 2),
            ([0, 2, 3], 1),
            ([1, 3, 2], 0),
        ];

        let mut result = Self::new();

        for (ids, opp) in FACES {
            if let Some(face) = Face::new(pts[ids[0]], pts[ids[1]], pts[ids[2]]) {
                let face = if face.can_be_seen_by(&pts[opp]) {
                    face.flipped()
                } else {
                    face
                };
                let _ = result.push(face);
            }
        }

        result
    }

    /// Adds a face to this polytope.
    ///
    /// Returns `false` and drops the face if the polytope is full.
    pub fn push(&mut self, face: Face) -> bool {
        if self.faces.try_push(face).is_err() {
            log::debug!("EPA polytope is full, dropping a face.");
            false
        } else {
            true
        }
    }

    /// The face with the smallest distance to the origin.
    ///
    /// On ties, the face inserted first wins.
    pub fn closest_face(&self) -> Option<&Face> {
        let mut closest: Option<&Face> = None;

        for face in &self.faces {
            if closest.map_or(true, |best| face.distance < best.distance) {
                closest = Some(face);
            }
        }

        closest
    }

    /// Grows this polytope so it includes `support`.
    ///
    /// Every face that can see `support` is removed, and the hole they leave is closed by a fan
    /// of faces joining its boundary to `support`. A new face whose plane ends up with a distance
    /// smaller than `-winding_bias` is flipped to face outward.
    ///
    /// Returns the number of faces added.
    pub fn expand(&mut self, support: &Point<Real>, winding_bias: Real) -> usize {
        let mut removed = ArrayVec::<Face, EPA_MAX_FACES>::new();
        self.faces.retain(|face| {
            if face.can_be_seen_by(support) {
                removed.push(*face);
                false
            } else {
                true
            }
        });

        let horizon = EdgeBuffer::horizon(&removed);
        let mut added = 0;

        for edge in horizon.edges() {
            let Some(face) = Face::new(edge.a, edge.b, *support) else {
                continue;
            };
            let face = if face.distance < -winding_bias {
                face.flipped()
            } else {
                face
            };

            if self.push(face) {
                added += 1;
            }
        }

        added
    }

    /// The faces of this polytope.
    #[inline]
    pub fn faces(&self) -> &[Face] {
        &self.faces
    }

    /// The number of faces of this polytope.
    #[inline]
    pub fn len(&self) -> usize {
        self.faces.len()
    }

    /// Does this polytope have no face?
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.faces.is_empty()
    }
}
