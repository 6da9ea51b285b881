use crate::math::Real;
use crate::query::QueryOptions;

use super::ResolutionOptions;

/// Dimensions and movement constants of a [`CharacterController`](super::CharacterController).
///
/// Speeds are expressed in distance units per step, accelerations in distance units per step
/// squared.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde-serialize", serde(default))]
pub struct ControllerConfig {
    /// Height of the body cylinder.
    pub height: Real,
    /// Radius of the body and ground-probe cylinders.
    pub radius: Real,
    /// Height of the ground probe placed under the body.
    pub ground_depth: Real,
    /// Interpolation factor of the lateral speed toward its target, in `[0, 1]`.
    pub acceleration: Real,
    /// Lateral speed reached with a full input.
    pub max_speed: Real,
    /// Vertical speed given by a jump.
    pub jump_power: Real,
    /// Vertical speed lost every airborne step.
    pub gravity: Real,
    /// Upper bound of the falling speed.
    pub max_fall_speed: Real,
    /// The character respawns when its base goes below this height.
    pub respawn_floor: Real,
    /// Maximum number of resolution rounds per step.
    pub max_rounds: usize,
    /// Options of the collision queries.
    pub query: QueryOptions,
}

impl ControllerConfig {
    /// The resolution options derived from this configuration.
    pub fn resolution_options(&self) -> ResolutionOptions {
        ResolutionOptions {
            max_rounds: self.max_rounds,
            query: self.query,
        }
    }
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            height: 4.6,
            radius: 0.8,
            ground_depth: 0.1,
            acceleration: 0.05,
            max_speed: 0.15,
            jump_power: 0.4,
            gravity: 0.01,
            max_fall_speed: 1.5,
            respawn_floor: -100.0,
            max_rounds: ResolutionOptions::DEFAULT_MAX_ROUNDS,
            query: QueryOptions::default(),
        }
    }
}
