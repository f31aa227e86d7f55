//! Narrow interfaces the character logic drives.
//!
//! The simulation implements these over ECS components; tests implement
//! them over plain structs.

use glam::Vec3;

use factotum_core::enums::AnimationClip;

use crate::CharacterError;

/// Movement and control surface of a possessed character.
pub trait MovementController {
    /// Current linear velocity.
    fn velocity(&self) -> Vec3;

    /// Apply an instantaneous velocity change. With an override flag set the
    /// matching velocity components are replaced instead of added to.
    fn launch(&mut self, impulse: Vec3, xy_override: bool, z_override: bool);

    fn ground_friction(&self) -> f32;

    fn set_ground_friction(&mut self, friction: f32);

    /// Queue movement input for the next movement update.
    fn add_movement_input(&mut self, direction: Vec3, scale: f32);

    /// Point the possessing controller at `yaw` degrees.
    fn set_control_yaw(&mut self, yaw: f32) -> Result<(), CharacterError>;

    fn jump(&mut self);

    fn stop_jumping(&mut self);
}

/// Sprite animation surface.
pub trait AnimationPresenter {
    /// Clip currently shown.
    fn current_clip(&self) -> AnimationClip;

    /// Show `clip`. Called even when the clip is unchanged.
    fn present(&mut self, clip: AnimationClip);
}
