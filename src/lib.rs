/*!
nudge3d
========

**nudge3d** is a 3-dimensional narrow-phase collision library written with
the rust programming language. It answers one question for a pair of convex
solids: do they overlap, and if so, along which normal and by how much must
one of them be pushed to separate them.

The crate is built for kinematic character controllers that resolve their own
movement against static level geometry every simulation step:

* [`shape`] exposes the [`SupportMap`](shape::SupportMap) capability and the
  supported convex shapes.
* [`query`] contains GJK, EPA and the [`is_collision`](query::is_collision)
  entry point combining them.
* [`controller`] consumes collision results to push a moving shape out of the
  level, probe the ground and step a character.
* [`scene`] turns loaded level geometry into owned colliders.

*/

#![deny(non_camel_case_types)]
#![deny(unused_parens)]
#![deny(non_upper_case_globals)]
#![deny(unused_results)]
#![warn(missing_docs)]
#![warn(unused_imports)]
#![allow(missing_copy_implementations)]
#![allow(clippy::module_inception)]
#![doc(html_root_url = "http://docs.rs/nudge3d/0.1.0")]

#[cfg(all(feature = "f32", feature = "f64"))]
std::compile_error!("The `f32` and `f64` features are mutually exclusive.");

#[cfg(feature = "serde-serialize")]
#[macro_use]
extern crate serde;
#[macro_use]
extern crate approx;

pub extern crate nalgebra as na;

pub mod controller;
pub mod query;
pub mod scene;
pub mod shape;
pub mod utils;

mod real {
    /// The scalar type used throughout this crate.
    #[cfg(feature = "f64")]
    pub use f64 as Real;

    /// The scalar type used throughout this crate.
    #[cfg(feature = "f32")]
    pub use f32 as Real;
}

/// Compilation flags dependent aliases for mathematical types.
pub mod math {
    pub use super::real::*;
    pub use na::{Point3, Rotation3, UnitVector3, Vector2, Vector3};

    /// The default tolerance used for geometric operations.
    pub const DEFAULT_EPSILON: Real = Real::EPSILON;

    /// The dimension of the space.
    pub const DIM: usize = 3;

    /// The point type.
    pub use Point3 as Point;

    /// The vector type.
    pub use Vector3 as Vector;

    /// The unit vector type.
    pub use UnitVector3 as UnitVector;

    /// The rotation matrix type.
    pub use Rotation3 as Rotation;
}
