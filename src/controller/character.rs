use crate::math::{Point, Real, Rotation, UnitVector, Vector, Vector2};
use crate::shape::{Cylinder, ShapeError, SupportMap};

use super::{probe_ground_with_options, resolve, ControllerConfig};

/// Whether a character stands on something.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub enum MovementState {
    /// The ground probe touches a static shape: the character can jump.
    Ground,
    /// The character is falling or jumping.
    #[default]
    Air,
}

/// The player intent for one [`CharacterController::step`].
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde-serialize", derive(Serialize, Deserialize))]
pub struct MovementInput {
    /// The movement stick: `x` points to the right of the viewer, `y` toward the viewer.
    ///
    /// Any non-zero value moves at full speed, only its direction matters.
    pub axis: Vector2<Real>,
    /// Jump if the character is on the ground.
    pub jump: bool,
    /// Teleport the character to its respawn position.
    pub respawn: bool,
    /// Direction from the character toward the viewer. Only its horizontal part is used.
    pub view_direction: Vector<Real>,
}

impl Default for MovementInput {
    fn default() -> Self {
        Self {
            axis: Vector2::zeros(),
            jump: false,
            respawn: false,
            view_direction: Vector::z(),
        }
    }
}

/// A walking and jumping character, moved kinematically through static geometry.
///
/// The character is an upright body cylinder standing on its position. A thin probe cylinder
/// with the same radius sits right under the body and decides whether the character is on the
/// ground.
#[derive(Clone, Debug)]
pub struct CharacterController {
    config: ControllerConfig,
    body: Cylinder,
    probe: Cylinder,
    position: Point<Real>,
    respawn_position: Point<Real>,
    look_target: Point<Real>,
    state: MovementState,
    facing: Real,
    lateral_speed: Real,
    vertical_speed: Real,
}

impl CharacterController {
    /// Creates a character standing at `position`, which also becomes its respawn position.
    ///
    /// Fails if the body or probe dimensions of `config` are invalid.
    pub fn new(config: ControllerConfig, position: Point<Real>) -> Result<Self, ShapeError> {
        let up = Self::up();
        let body = Cylinder::try_new(position, *up, config.height, config.radius)?;
        let probe = Cylinder::try_new(
            position - *up * config.ground_depth,
            *up,
            config.ground_depth,
            config.radius,
        )?;

        Ok(Self {
            config,
            body,
            probe,
            position,
            respawn_position: position,
            look_target: position + *up * config.height,
            state: MovementState::Air,
            facing: 0.0,
            lateral_speed: 0.0,
            vertical_speed: 0.0,
        })
    }

    /// The up direction of every character.
    #[inline]
    pub fn up() -> UnitVector<Real> {
        Vector::y_axis()
    }

    /// Advances the character by one step and returns its new movement state.
    ///
    /// The body is first displaced by its current velocity, then pushed out of `statics`. The
    /// ground probe is moved under the resolved body to update the movement state.
    pub fn step<S: SupportMap>(&mut self, input: &MovementInput, statics: &[S]) -> MovementState {
        let up = Self::up();
        let cfg = self.config;

        self.vertical_speed = match self.state {
            MovementState::Ground if input.jump => cfg.jump_power,
            MovementState::Ground => 0.0,
            MovementState::Air => {
                (self.vertical_speed - cfg.gravity).clamp(-cfg.max_fall_speed, cfg.jump_power)
            }
        };

        let mut target_speed = 0.0;

        if input.axis != Vector2::zeros() {
            let axis = input.axis.normalize();
            let view = &input.view_direction;
            let angle = axis.x.atan2(axis.y) + view.x.atan2(view.z);
            self.facing = angle.sin().atan2(angle.cos());
            target_speed = cfg.max_speed;
        }

        self.lateral_speed += cfg.acceleration * (target_speed - self.lateral_speed);

        let rotation = Rotation::from_axis_angle(&up, self.facing);
        let displacement = rotation * Vector::new(0.0, self.vertical_speed, self.lateral_speed);
        self.body.position = self.position + displacement;

        let _ = resolve(&mut self.body, statics, &cfg.resolution_options());

        self.probe.position = self.body.position - *up * cfg.ground_depth;
        self.state = if probe_ground_with_options(&self.probe, statics, &cfg.query) {
            MovementState::Ground
        } else {
            MovementState::Air
        };

        if self.body.position.coords.dot(&up) < cfg.respawn_floor || input.respawn {
            self.respawn();
        }

        self.position = self.body.position;
        self.look_target = self.position + *up * cfg.height;

        self.state
    }

    /// Teleports the body to the respawn position.
    ///
    /// The new position is committed by the next [`CharacterController::step`].
    pub fn respawn(&mut self) {
        log::info!("Respawning character at {}.", self.respawn_position);
        self.body.position = self.respawn_position;
        self.vertical_speed = 0.0;
    }

    /// The configuration of this character.
    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    /// The center of the base of the character.
    pub fn position(&self) -> Point<Real> {
        self.position
    }

    /// The point a camera following this character should look at.
    pub fn look_target(&self) -> Point<Real> {
        self.look_target
    }

    /// The movement state computed by the last step.
    pub fn state(&self) -> MovementState {
        self.state
    }

    /// The facing angle around the up axis, in `(-π, π]`.
    pub fn facing(&self) -> Real {
        self.facing
    }

    /// The current forward speed.
    pub fn lateral_speed(&self) -> Real {
        self.lateral_speed
    }

    /// The current vertical speed, positive upward.
    pub fn vertical_speed(&self) -> Real {
        self.vertical_speed
    }

    /// The body cylinder.
    pub fn body(&self) -> &Cylinder {
        &self.body
    }

    /// The ground-probe cylinder.
    pub fn probe(&self) -> &Cylinder {
        &self.probe
    }

    /// Where the character goes when it respawns.
    pub fn respawn_position(&self) -> Point<Real> {
        self.respawn_position
    }

    /// Sets where the character goes when it respawns.
    pub fn set_respawn_position(&mut self, position: Point<Real>) {
        self.respawn_position = position;
    }
}
