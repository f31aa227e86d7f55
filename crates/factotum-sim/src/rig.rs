//! Capability adapters over ECS components.
//!
//! `CharacterRig` and `SpriteRig` borrow a character's components and
//! expose them to the character logic as `MovementController` and
//! `AnimationPresenter`.

use glam::Vec3;
use hecs::{Entity, World};

use factotum_character::capabilities::{AnimationPresenter, MovementController};
use factotum_character::CharacterError;
use factotum_core::components::*;
use factotum_core::enums::{AnimationClip, MovementMode};

pub struct CharacterRig<'a> {
    pub movement: &'a mut CharacterMovement,
    pub controller: Option<&'a mut Controller>,
}

pub struct SpriteRig<'a> {
    pub sprite: &'a mut Sprite,
    pub animations: &'a CharacterAnimations,
}

impl MovementController for CharacterRig<'_> {
    fn velocity(&self) -> Vec3 {
        self.movement.velocity
    }

    fn launch(&mut self, impulse: Vec3, xy_override: bool, z_override: bool) {
        let velocity = &mut self.movement.velocity;
        if xy_override {
            velocity.x = impulse.x;
            velocity.y = impulse.y;
        } else {
            velocity.x += impulse.x;
            velocity.y += impulse.y;
        }
        if z_override {
            velocity.z = impulse.z;
        } else {
            velocity.z += impulse.z;
        }
        self.movement.mode = MovementMode::Falling;
    }

    fn ground_friction(&self) -> f32 {
        self.movement.ground_friction
    }

    fn set_ground_friction(&mut self, friction: f32) {
        self.movement.ground_friction = friction;
    }

    fn add_movement_input(&mut self, direction: Vec3, scale: f32) {
        self.movement.pending_input += direction * scale;
    }

    fn set_control_yaw(&mut self, yaw: f32) -> Result<(), CharacterError> {
        let controller = self
            .controller
            .as_deref_mut()
            .ok_or(CharacterError::NotPossessed)?;
        controller.control_rotation.pitch = 0.0;
        controller.control_rotation.yaw = yaw;
        controller.control_rotation.roll = 0.0;
        Ok(())
    }

    fn jump(&mut self) {
        self.movement.wants_jump = true;
    }

    fn stop_jumping(&mut self) {
        self.movement.wants_jump = false;
        self.movement.jump_consumed = false;
    }
}

impl AnimationPresenter for SpriteRig<'_> {
    fn current_clip(&self) -> AnimationClip {
        self.sprite.clip
    }

    fn present(&mut self, clip: AnimationClip) {
        self.sprite.clip = clip;
        self.sprite.flipbook = match clip {
            AnimationClip::Running => self.animations.running,
            AnimationClip::Idle => self.animations.idle,
        };
    }
}

/// Run `f` against a character's state and rigs.
///
/// Returns `None` if `entity` is gone or is not a side-scroller character.
pub fn with_character<R>(
    world: &mut World,
    entity: Entity,
    f: impl FnOnce(&mut CharacterState, &mut CharacterRig<'_>, &mut SpriteRig<'_>) -> R,
) -> Option<R> {
    let (state, movement, sprite, animations, controller) = world
        .query_one_mut::<(
            &mut CharacterState,
            &mut CharacterMovement,
            &mut Sprite,
            &CharacterAnimations,
            Option<&mut Controller>,
        )>(entity)
        .ok()?;

    let mut rig = CharacterRig {
        movement,
        controller,
    };
    let mut sprite_rig = SpriteRig { sprite, animations };
    Some(f(state, &mut rig, &mut sprite_rig))
}
