//! Non-persistent geometric queries.
//!
//! # General cases
//! The most general methods provided by this module are:
//!
//! * [`query::is_collision()`] to compute the penetration normal and depth of two shapes.
//! * [`query::intersection_test()`] to determine if two shapes are intersecting or not.
//!
//! # Specific cases
//! The [`gjk`] and [`epa`] submodules expose the two stages of [`query::is_collision()`]
//! separately, along with their working data structures.
//!
//! [`query::is_collision()`]: crate::query::is_collision
//! [`query::intersection_test()`]: crate::query::intersection_test

pub use self::collision::{is_collision, is_collision_with_options, CollisionResult};
pub use self::gjk::intersection_test;
pub use self::query_options::QueryOptions;

mod collision;
pub mod epa;
pub mod gjk;
mod query_options;
