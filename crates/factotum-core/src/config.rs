//! Game and character configuration.
//!
//! Every struct deserializes with `#[serde(default)]`, so a JSON file only
//! needs the fields it overrides. Defaults reproduce the stock side-scroller
//! character.

use std::path::Path;

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::enums::{PawnClass, ProjectionMode};
use crate::error::ConfigError;

/// Top-level configuration for a simulation run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Fixed tick rate used by `SimulationEngine::tick` (Hz).
    pub tick_rate: u32,
    /// Pawn class the game mode spawns for the player.
    pub default_pawn: PawnClass,
    pub input: InputConfig,
    pub character: CharacterConfig,
}

/// Binding names the character listens to.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputConfig {
    pub jump_action: String,
    pub move_axis: String,
    pub dash_action: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CharacterConfig {
    pub capsule: CapsuleConfig,
    pub movement: MovementConfig,
    pub dash: DashConfig,
    pub camera: CameraRigConfig,
    pub animations: AnimationAssetConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CapsuleConfig {
    pub half_height: f32,
    pub radius: f32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MovementConfig {
    pub gravity_scale: f32,
    pub air_control: f32,
    pub jump_z_velocity: f32,
    pub ground_friction: f32,
    pub max_walk_speed: f32,
    pub max_fly_speed: f32,
    pub max_acceleration: f32,
    pub braking_deceleration_walking: f32,
    /// `None` disables the plane lock.
    pub plane_constraint_normal: Option<Vec3>,
    pub use_flat_base_for_floor_checks: bool,
    pub orient_rotation_to_movement: bool,
}

/// Dash ability tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashConfig {
    /// Horizontal launch magnitude.
    pub impulse: f32,
    /// Relaunch once the sub-phase timer exceeds this (seconds).
    pub relaunch_interval_secs: f32,
    /// End once the total timer exceeds this (seconds).
    pub duration_secs: f32,
    /// Ground friction while dashing.
    pub dash_friction: f32,
    /// Ground friction written at dash end, unless restoring.
    pub post_dash_friction: f32,
    /// Restore the friction captured at dash start instead of writing
    /// `post_dash_friction`.
    pub restore_friction_after_dash: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraRigConfig {
    pub arm_length: f32,
    pub socket_offset: Vec3,
    pub boom_yaw: f32,
    pub do_collision_test: bool,
    pub projection: ProjectionMode,
    pub ortho_width: f32,
}

/// Asset paths of the two character flipbooks.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationAssetConfig {
    pub running: String,
    pub idle: String,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            tick_rate: TICK_RATE,
            default_pawn: PawnClass::default(),
            input: InputConfig::default(),
            character: CharacterConfig::default(),
        }
    }
}

impl Default for InputConfig {
    fn default() -> Self {
        Self {
            jump_action: JUMP_ACTION.to_string(),
            move_axis: MOVE_RIGHT_AXIS.to_string(),
            dash_action: DASH_ACTION.to_string(),
        }
    }
}

impl Default for CapsuleConfig {
    fn default() -> Self {
        Self {
            half_height: CAPSULE_HALF_HEIGHT,
            radius: CAPSULE_RADIUS,
        }
    }
}

impl Default for MovementConfig {
    fn default() -> Self {
        Self {
            gravity_scale: GRAVITY_SCALE,
            air_control: AIR_CONTROL,
            jump_z_velocity: JUMP_Z_VELOCITY,
            ground_friction: GROUND_FRICTION,
            max_walk_speed: MAX_WALK_SPEED,
            max_fly_speed: MAX_FLY_SPEED,
            max_acceleration: MAX_ACCELERATION,
            braking_deceleration_walking: BRAKING_DECELERATION_WALKING,
            plane_constraint_normal: Some(Vec3::from_array(PLANE_CONSTRAINT_NORMAL)),
            use_flat_base_for_floor_checks: true,
            orient_rotation_to_movement: false,
        }
    }
}

impl Default for DashConfig {
    fn default() -> Self {
        Self {
            impulse: DASH_IMPULSE,
            relaunch_interval_secs: DASH_RELAUNCH_INTERVAL_SECS,
            duration_secs: DASH_DURATION_SECS,
            dash_friction: DASH_GROUND_FRICTION,
            post_dash_friction: POST_DASH_GROUND_FRICTION,
            restore_friction_after_dash: false,
        }
    }
}

impl Default for CameraRigConfig {
    fn default() -> Self {
        Self {
            arm_length: CAMERA_BOOM_ARM_LENGTH,
            socket_offset: Vec3::from_array(CAMERA_BOOM_SOCKET_OFFSET),
            boom_yaw: CAMERA_BOOM_YAW,
            do_collision_test: false,
            projection: ProjectionMode::Orthographic,
            ortho_width: CAMERA_ORTHO_WIDTH,
        }
    }
}

impl Default for AnimationAssetConfig {
    fn default() -> Self {
        Self {
            running: RUNNING_ANIMATION_PATH.to_string(),
            idle: IDLE_ANIMATION_PATH.to_string(),
        }
    }
}

impl GameConfig {
    /// Read and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Parse and validate a JSON config document.
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: GameConfig = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Seconds per fixed tick.
    pub fn dt(&self) -> f32 {
        1.0 / self.tick_rate as f32
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.tick_rate == 0 {
            return Err(ConfigError::Invalid("tick_rate must be positive".into()));
        }
        for (field, name) in [
            ("input.jump_action", &self.input.jump_action),
            ("input.move_axis", &self.input.move_axis),
            ("input.dash_action", &self.input.dash_action),
        ] {
            if name.trim().is_empty() {
                return Err(ConfigError::Invalid(format!("{field} must not be empty")));
            }
        }
        self.character.validate()
    }
}

impl CharacterConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        let dash = &self.dash;
        if dash.duration_secs.is_nan() || dash.duration_secs <= 0.0 {
            return Err(ConfigError::Invalid(
                "dash.duration_secs must be positive".into(),
            ));
        }
        if dash.relaunch_interval_secs.is_nan() || dash.relaunch_interval_secs <= 0.0 {
            return Err(ConfigError::Invalid(
                "dash.relaunch_interval_secs must be positive".into(),
            ));
        }
        if !dash.impulse.is_finite() {
            return Err(ConfigError::Invalid("dash.impulse must be finite".into()));
        }
        let frictions = [
            ("movement.ground_friction", self.movement.ground_friction),
            ("dash.dash_friction", dash.dash_friction),
            ("dash.post_dash_friction", dash.post_dash_friction),
        ];
        for (field, value) in frictions {
            if value.is_nan() || value < 0.0 {
                return Err(ConfigError::Invalid(format!("{field} must not be negative")));
            }
        }
        if self.capsule.half_height < self.capsule.radius {
            return Err(ConfigError::Invalid(
                "capsule.half_height must be at least capsule.radius".into(),
            ));
        }
        Ok(())
    }
}
