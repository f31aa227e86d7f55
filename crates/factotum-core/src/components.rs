//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in the character crate and the sim systems.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::types::{FlipbookHandle, Rotator};

/// World placement of an actor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Transform {
    pub location: Vec3,
    pub rotation: Rotator,
}

/// Collision capsule (root component of a character).
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Capsule {
    pub half_height: f32,
    pub radius: f32,
}

/// Character movement state and tuning.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterMovement {
    pub velocity: Vec3,
    pub mode: MovementMode,
    pub gravity_scale: f32,
    pub air_control: f32,
    pub jump_z_velocity: f32,
    /// Friction while walking. Overridden by the dash.
    pub ground_friction: f32,
    pub max_walk_speed: f32,
    /// Carried for parity with the stock character. There is no flying mode.
    pub max_fly_speed: f32,
    pub max_acceleration: f32,
    pub braking_deceleration_walking: f32,
    /// Motion along this normal is removed every tick.
    pub plane_constraint_normal: Option<Vec3>,
    /// Carried for parity with the stock character. The floor is a plane, so
    /// floor checks are flat either way.
    pub use_flat_base_for_floor_checks: bool,
    /// Turn the actor toward its horizontal velocity. Ignored while the
    /// controller drives yaw.
    pub orient_rotation_to_movement: bool,
    /// Movement input accumulated since the last movement tick.
    pub pending_input: Vec3,
    /// Jump held since the last `stop_jumping`.
    pub wants_jump: bool,
    /// The current jump press has already produced a jump.
    pub jump_consumed: bool,
}

/// Which controller rotation axes the actor follows.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct UseControllerRotation {
    pub pitch: bool,
    pub yaw: bool,
    pub roll: bool,
}

/// Flipbook sprite renderer state.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Sprite {
    /// Flipbook currently shown. `None` when the asset failed to resolve.
    pub flipbook: Option<FlipbookHandle>,
    /// Clip the flipbook was selected for.
    pub clip: AnimationClip,
    pub is_replicated: bool,
}

/// Flipbook handles resolved once when the character is built.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CharacterAnimations {
    pub running: Option<FlipbookHandle>,
    pub idle: Option<FlipbookHandle>,
}

/// Spring arm holding the side-view camera.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct CameraBoom {
    pub arm_length: f32,
    pub socket_offset: Vec3,
    /// Rotation is in world space, not inherited from the pawn.
    pub absolute_rotation: bool,
    pub rotation: Rotator,
    /// Pull the camera in so the arm never passes below the floor.
    pub do_collision_test: bool,
}

/// Camera attached to the end of the boom.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct SideViewCamera {
    pub projection: ProjectionMode,
    pub ortho_width: f32,
    pub use_pawn_control_rotation: bool,
    /// World location, written by the camera system.
    pub location: Vec3,
    pub rotation: Rotator,
}

/// Facing and dash state of a side-scroller character.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct CharacterState {
    pub facing: FacingDirection,
    pub dash: DashState,
    /// Ground friction captured when the current dash started.
    pub pre_dash_friction: f32,
}

/// Player controller possessing a pawn.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct Controller {
    pub player_index: u32,
    pub control_rotation: Rotator,
}

/// Marks the pawn spawned for the player by the game mode.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerPawn;

/// Marks a spectator pawn.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Spectator;

/// Marks an actor whose state is replicated to remote sessions.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Replicated;
