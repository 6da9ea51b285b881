//! Various unsorted geometrical and logical operators.

pub use self::ccw_face_normal::ccw_face_normal;
pub use self::point_cloud_support_point::{
    point_cloud_support_point, point_cloud_support_point_id,
};

mod ccw_face_normal;
mod point_cloud_support_point;

use crate::math::{Real, Vector};

/// Returns `true` if `a` and `b` point into the same open half-space.
///
/// Orthogonal vectors (including the zero vector) are not in the same direction.
#[inline]
pub fn same_direction(a: &Vector<Real>, b: &Vector<Real>) -> bool {
    a.dot(b) > 0.0
}

/// Returns a unit vector orthogonal to `v`.
///
/// `v` must not be zero.
#[inline]
pub fn any_orthogonal(v: &Vector<Real>) -> Vector<Real> {
    // Cross with the axis least aligned with `v` to keep the result well-conditioned.
    let axis = if v.x.abs() <= v.y.abs() && v.x.abs() <= v.z.abs() {
        Vector::x()
    } else if v.y.abs() <= v.z.abs() {
        Vector::y()
    } else {
        Vector::z()
    };

    v.cross(&axis).normalize()
}
