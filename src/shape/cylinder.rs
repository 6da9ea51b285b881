//! Support mapping based Cylinder shape.

use crate::math::{Point, Real, UnitVector, Vector, DEFAULT_EPSILON};
use crate::shape::{ShapeError, SupportMap, Translate};
use crate::utils;

/// Upright cylinder, the usual bounding volume of a walking character.
///
/// The cylinder stands on its base: `position` is the center of the bottom disc and the
/// solid extends by `height` along `axis`.
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[derive(PartialEq, Debug, Copy, Clone)]
pub struct Cylinder {
    /// The center of the base disc.
    pub position: Point<Real>,
    /// The principal axis, pointing from the base toward the top.
    pub axis: UnitVector<Real>,
    /// The length of the cylinder along `axis`.
    pub height: Real,
    /// The radius of the cylinder.
    pub radius: Real,
}

impl Cylinder {
    /// Creates a new cylinder standing on `position` with its axis aligned with `+y`.
    ///
    /// # Arguments:
    /// * `height` - the length of the cylinder along the `y` axis.
    /// * `radius` - the radius of the cylinder.
    pub fn new(position: Point<Real>, height: Real, radius: Real) -> Cylinder {
        assert!(height.is_sign_positive() && radius.is_sign_positive());

        Cylinder {
            position,
            axis: Vector::y_axis(),
            height,
            radius,
        }
    }

    /// Creates a new cylinder with an arbitrary axis, validating every input.
    ///
    /// `axis` does not need to be normalized.
    pub fn try_new(
        position: Point<Real>,
        axis: Vector<Real>,
        height: Real,
        radius: Real,
    ) -> Result<Cylinder, ShapeError> {
        if !(height.is_finite() && radius.is_finite() && height >= 0.0 && radius >= 0.0) {
            return Err(ShapeError::InvalidCylinderDimensions { height, radius });
        }

        if !position.coords.iter().all(|x| x.is_finite()) {
            return Err(ShapeError::NonFinitePosition);
        }

        if !axis.iter().all(|x| x.is_finite()) {
            return Err(ShapeError::DegenerateAxis);
        }

        let axis = UnitVector::try_new(axis, DEFAULT_EPSILON).ok_or(ShapeError::DegenerateAxis)?;

        Ok(Cylinder {
            position,
            axis,
            height,
            radius,
        })
    }

    /// Half of the cylinder height.
    #[inline]
    pub fn half_height(&self) -> Real {
        self.height / 2.0
    }

    /// The center of mass of the cylinder.
    #[inline]
    pub fn center(&self) -> Point<Real> {
        self.position + *self.axis * self.half_height()
    }

    /// The center of the top disc.
    #[inline]
    pub fn top(&self) -> Point<Real> {
        self.position + *self.axis * self.height
    }
}

impl SupportMap for Cylinder {
    fn furthest_point(&self, dir: &Vector<Real>) -> Point<Real> {
        // Radial part rebuilt from its coordinates in the base plane: no axial component.
        let u = utils::any_orthogonal(&self.axis);
        let v = self.axis.cross(&u);
        let axial = self.axis.dot(dir);
        let radial = u * u.dot(dir) + v * v.dot(dir);
        let cap = self.center() + *self.axis * self.half_height().copysign(axial);

        // A direction (nearly) parallel to the axis only selects a cap center.
        match radial.try_normalize(DEFAULT_EPSILON * dir.norm()) {
            Some(radial) => cap + radial * self.radius,
            None => cap,
        }
    }
}

impl Translate for Cylinder {
    #[inline]
    fn translate_by(&mut self, delta: &Vector<Real>) {
        self.position += delta;
    }
}
