//! The working simplex of GJK and its nearest-feature reduction.

use arrayvec::ArrayVec;

use crate::math::{Point, Real, Vector, DEFAULT_EPSILON, DIM};
use crate::utils::{self, same_direction};

/// The maximum number of points of a simplex: a tetrahedron in 3D.
pub const MAX_SIMPLEX_POINTS: usize = DIM + 1;

/// A set of at most four points of the Minkowski difference of two shapes.
///
/// Points are stored from the oldest to the most recently added one: the last point is always
/// the newest support point, the one known to be the closest to the origin along the current
/// search direction. Every reduction step preserves this ordering.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Simplex {
    points: ArrayVec<Point<Real>, MAX_SIMPLEX_POINTS>,
}

impl Simplex {
    /// Creates an empty simplex.
    pub fn new() -> Self {
        Self::default()
    }

    /// Removes every point of this simplex then adds `pt`.
    pub fn reset(&mut self, pt: Point<Real>) {
        self.points.clear();
        self.points.push(pt);
    }

    /// Adds a new point to this simplex.
    ///
    /// # Panics
    /// If the simplex already holds [`MAX_SIMPLEX_POINTS`] points.
    pub fn push(&mut self, pt: Point<Real>) {
        self.points.push(pt);
    }

    /// The number of points of this simplex.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Is this simplex empty?
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// The points of this simplex, newest last.
    pub fn points(&self) -> &[Point<Real>] {
        &self.points
    }

    fn set(&mut self, pts: &[Point<Real>]) {
        self.points.clear();
        self.points.extend(pts.iter().copied());
    }

    /// Reduces this simplex to the feature closest to the origin and updates the search direction.
    ///
    /// Returns `true` if the simplex is a tetrahedron enclosing the origin. Otherwise `dir` is
    /// set to the next direction to search toward the origin.
    ///
    /// # Panics
    /// If the simplex does not have 2, 3 or 4 points.
    pub fn evolve(&mut self, dir: &mut Vector<Real>) -> bool {
        match self.points.len() {
            2 => self.line(dir),
            3 => self.triangle(dir),
            4 => self.tetrahedron(dir),
            n => panic!("GJK simplex reduction requires 2 to 4 points, found {}.", n),
        }
    }

    fn line(&mut self, dir: &mut Vector<Real>) -> bool {
        let a = self.points[1];
        let b = self.points[0];

        let ab = b - a;
        let ao = -a.coords;

        if same_direction(&ab, &ao) {
            *dir = perpendicular_toward_origin(&ab, &ao);
        } else {
            self.set(&[a]);
            *dir = ao;
        }

        false
    }

    fn triangle(&mut self, dir: &mut Vector<Real>) -> bool {
        let a = self.points[2];
        let b = self.points[1];
        let c = self.points[0];

        let ab = b - a;
        let ac = c - a;
        let ao = -a.coords;
        let abc = ab.cross(&ac);

        // Collinear points: the triangle has no plane to search from.
        if abc.norm_squared()
            <= DEFAULT_EPSILON * DEFAULT_EPSILON * ab.norm_squared() * ac.norm_squared()
        {
            self.set(&[b, a]);
            return self.line(dir);
        }

        if same_direction(&abc.cross(&ac), &ao) {
            if same_direction(&ac, &ao) {
                self.set(&[c, a]);
                *dir = perpendicular_toward_origin(&ac, &ao);
            } else {
                self.set(&[b, a]);
                return self.line(dir);
            }
        } else if same_direction(&ab.cross(&abc), &ao) {
            self.set(&[b, a]);
            return self.line(dir);
        } else if same_direction(&abc, &ao) {
            *dir = abc;
        } else {
            // Wind the triangle so that its normal faces the origin.
            self.set(&[b, c, a]);
            *dir = -abc;
        }

        false
    }

    fn tetrahedron(&mut self, dir: &mut Vector<Real>) -> bool {
        let a = self.points[3];
        let b = self.points[2];
        let c = self.points[1];
        let d = self.points[0];

        let ab = b - a;
        let ac = c - a;
        let ad = d - a;
        let ao = -a.coords;

        let abc = ab.cross(&ac);
        let acd = ac.cross(&ad);
        let adb = ad.cross(&ab);

        if same_direction(&abc, &ao) {
            self.set(&[c, b, a]);
            self.triangle(dir)
        } else if same_direction(&acd, &ao) {
            self.set(&[d, c, a]);
            self.triangle(dir)
        } else if same_direction(&adb, &ao) {
            self.set(&[b, d, a]);
            self.triangle(dir)
        } else {
            true
        }
    }
}

/// The component of `ao` orthogonal to `edge`, i.e., `edge × ao × edge`.
///
/// If the origin lies on the edge line, any direction orthogonal to the edge is returned.
fn perpendicular_toward_origin(edge: &Vector<Real>, ao: &Vector<Real>) -> Vector<Real> {
    let perp = edge.cross(ao).cross(edge);

    if perp == Vector::zeros() {
        utils::any_orthogonal(edge)
    } else {
        perp
    }
}
