//! Kinematic movement on top of the collision queries.
//!
//! [`resolve`] pushes a moving shape out of a set of static shapes, [`probe_ground`] tells
//! whether a thin probe touches anything, and [`CharacterController`] combines both into the
//! per-step movement of a walking, jumping character.

pub use self::character::{CharacterController, MovementInput, MovementState};
pub use self::config::ControllerConfig;
pub use self::resolve::{
    probe_ground, probe_ground_with_options, resolve, Resolution, ResolutionOptions,
};

mod character;
mod config;
mod resolve;
