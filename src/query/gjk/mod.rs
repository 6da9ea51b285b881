//! The GJK algorithm for intersection testing.

pub use self::gjk::{intersect, intersection_test, GJKResult};
pub use self::simplex::{Simplex, MAX_SIMPLEX_POINTS};
pub use self::support::minkowski_support;

mod gjk;
mod simplex;
mod support;
