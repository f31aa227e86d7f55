//! Entity spawn factories.
//!
//! Builds pawns with their full component bundles and handles possession.

use glam::Vec3;
use hecs::{Entity, World};

use factotum_core::components::*;
use factotum_core::config::CharacterConfig;
use factotum_core::enums::{AnimationClip, MovementMode};
use factotum_core::types::Rotator;

use crate::assets::AssetLibrary;

/// Spawn a side-scroller player pawn at `location`.
///
/// Flipbooks are resolved here, once; the sprite starts on the idle clip.
/// Only controller yaw drives the actor's rotation.
pub fn spawn_side_scroller_character(
    world: &mut World,
    config: &CharacterConfig,
    assets: &AssetLibrary,
    location: Vec3,
) -> Entity {
    let animations = CharacterAnimations {
        running: assets.resolve(&config.animations.running),
        idle: assets.resolve(&config.animations.idle),
    };

    let sprite = Sprite {
        flipbook: animations.idle,
        clip: AnimationClip::Idle,
        is_replicated: true,
    };

    let movement = CharacterMovement {
        velocity: Vec3::ZERO,
        mode: MovementMode::Walking,
        gravity_scale: config.movement.gravity_scale,
        air_control: config.movement.air_control,
        jump_z_velocity: config.movement.jump_z_velocity,
        ground_friction: config.movement.ground_friction,
        max_walk_speed: config.movement.max_walk_speed,
        max_fly_speed: config.movement.max_fly_speed,
        max_acceleration: config.movement.max_acceleration,
        braking_deceleration_walking: config.movement.braking_deceleration_walking,
        plane_constraint_normal: config
            .movement
            .plane_constraint_normal
            .and_then(|n| n.try_normalize()),
        use_flat_base_for_floor_checks: config.movement.use_flat_base_for_floor_checks,
        orient_rotation_to_movement: config.movement.orient_rotation_to_movement,
        pending_input: Vec3::ZERO,
        wants_jump: false,
        jump_consumed: false,
    };

    let boom = CameraBoom {
        arm_length: config.camera.arm_length,
        socket_offset: config.camera.socket_offset,
        absolute_rotation: true,
        rotation: Rotator::from_yaw(config.camera.boom_yaw),
        do_collision_test: config.camera.do_collision_test,
    };

    let camera = SideViewCamera {
        projection: config.camera.projection,
        ortho_width: config.camera.ortho_width,
        use_pawn_control_rotation: false,
        location: Vec3::ZERO,
        rotation: Rotator::default(),
    };

    let state = CharacterState {
        pre_dash_friction: config.movement.ground_friction,
        ..Default::default()
    };

    world.spawn((
        Transform {
            location,
            rotation: Rotator::default(),
        },
        Capsule {
            half_height: config.capsule.half_height,
            radius: config.capsule.radius,
        },
        movement,
        UseControllerRotation {
            pitch: false,
            yaw: true,
            roll: false,
        },
        sprite,
        animations,
        boom,
        camera,
        state,
        Replicated,
        PlayerPawn,
    ))
}

/// Spawn a bare spectator player pawn.
pub fn spawn_spectator(world: &mut World, location: Vec3) -> Entity {
    world.spawn((
        Transform {
            location,
            rotation: Rotator::default(),
        },
        Spectator,
        PlayerPawn,
    ))
}

/// Attach a player controller to `pawn`, facing the pawn's current yaw.
///
/// Returns `false` if the pawn does not exist or is already possessed.
pub fn possess(world: &mut World, pawn: Entity, player_index: u32) -> bool {
    if world.get::<&Controller>(pawn).is_ok() {
        return false;
    }
    let yaw = match world.get::<&Transform>(pawn) {
        Ok(transform) => transform.rotation.yaw,
        Err(_) => return false,
    };
    let controller = Controller {
        player_index,
        control_rotation: Rotator::from_yaw(yaw),
    };
    world.insert_one(pawn, controller).is_ok()
}

/// Detach the controller from `pawn`. Returns `false` if none was attached.
pub fn unpossess(world: &mut World, pawn: Entity) -> bool {
    world.remove_one::<Controller>(pawn).is_ok()
}
