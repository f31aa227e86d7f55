//! Character movement integration.
//!
//! A minimal kinematic host for side-scroller characters: walking
//! acceleration and braking, jumping, gravity while falling, landing on the
//! floor plane, the plane lock, and controller-driven yaw.

use glam::Vec3;
use hecs::World;

use factotum_core::components::*;
use factotum_core::constants::{FLOOR_Z, WORLD_GRAVITY_Z};
use factotum_core::enums::MovementMode;
use factotum_core::events::CharacterEvent;

/// Run one movement step for every character.
pub fn run(world: &mut World, dt: f32, events: &mut Vec<CharacterEvent>) {
    for (_entity, (transform, capsule, movement, use_rotation, controller)) in world.query_mut::<(
        &mut Transform,
        &Capsule,
        &mut CharacterMovement,
        &UseControllerRotation,
        Option<&Controller>,
    )>() {
        if let Some(controller) = controller {
            apply_controller_rotation(transform, use_rotation, controller);
        }

        let input = constrain_to_plane(movement.pending_input, movement.plane_constraint_normal)
            .clamp_length_max(1.0);
        movement.pending_input = Vec3::ZERO;

        if movement.wants_jump && !movement.jump_consumed && movement.mode == MovementMode::Walking
        {
            movement.velocity.z = movement.jump_z_velocity;
            movement.mode = MovementMode::Falling;
            movement.jump_consumed = true;
            events.push(CharacterEvent::Jumped);
        }

        match movement.mode {
            MovementMode::Walking => walk(movement, input.x, dt),
            MovementMode::Falling => fall(movement, input.x, dt),
        }

        movement.velocity =
            constrain_to_plane(movement.velocity, movement.plane_constraint_normal);
        transform.location += movement.velocity * dt;

        if movement.orient_rotation_to_movement && !use_rotation.yaw {
            orient_to_velocity(transform, movement.velocity);
        }

        let floor = FLOOR_Z + capsule.half_height;
        if movement.mode == MovementMode::Falling
            && transform.location.z <= floor
            && movement.velocity.z <= 0.0
        {
            transform.location.z = floor;
            movement.velocity.z = 0.0;
            movement.mode = MovementMode::Walking;
            events.push(CharacterEvent::Landed);
        }
    }
}

fn apply_controller_rotation(
    transform: &mut Transform,
    use_rotation: &UseControllerRotation,
    controller: &Controller,
) {
    let control = controller.control_rotation;
    if use_rotation.pitch {
        transform.rotation.pitch = control.pitch;
    }
    if use_rotation.yaw {
        transform.rotation.yaw = control.yaw;
    }
    if use_rotation.roll {
        transform.rotation.roll = control.roll;
    }
}

fn orient_to_velocity(transform: &mut Transform, velocity: Vec3) {
    let horizontal = Vec3::new(velocity.x, velocity.y, 0.0);
    if horizontal.length_squared() > f32::EPSILON {
        transform.rotation.yaw = horizontal.y.atan2(horizontal.x).to_degrees();
    }
}

/// Remove the component of `v` along the constraint normal.
pub fn constrain_to_plane(v: Vec3, normal: Option<Vec3>) -> Vec3 {
    match normal {
        Some(n) => v - n * v.dot(n),
        None => v,
    }
}

fn walk(movement: &mut CharacterMovement, input_x: f32, dt: f32) {
    let vx = movement.velocity.x;
    movement.velocity.z = 0.0;

    if input_x == 0.0 {
        movement.velocity.x = brake(
            vx,
            movement.ground_friction,
            movement.braking_deceleration_walking,
            dt,
        );
        return;
    }

    let cap = movement.max_walk_speed * input_x.abs();
    if vx.abs() > cap && vx.signum() == input_x.signum() {
        // Over the cap (e.g. after a launch): bleed speed off, never below the cap.
        let braked = brake(
            vx,
            movement.ground_friction,
            movement.braking_deceleration_walking,
            dt,
        );
        movement.velocity.x = vx.signum() * braked.abs().max(cap);
        return;
    }

    movement.velocity.x = accelerate(vx, input_x * movement.max_acceleration, cap, dt);
}

fn fall(movement: &mut CharacterMovement, input_x: f32, dt: f32) {
    movement.velocity.z += WORLD_GRAVITY_Z * movement.gravity_scale * dt;

    if input_x == 0.0 {
        return;
    }
    let cap = movement.max_walk_speed * input_x.abs();
    let acceleration = input_x * movement.max_acceleration * movement.air_control;
    movement.velocity.x = accelerate(movement.velocity.x, acceleration, cap, dt);
}

/// Input acceleration never pushes past `cap`, but keeps speed already above it.
fn accelerate(v: f32, acceleration: f32, cap: f32, dt: f32) -> f32 {
    let next = v + acceleration * dt;
    if next.abs() > cap && next.abs() > v.abs() {
        next.signum() * v.abs().max(cap)
    } else {
        next
    }
}

/// Friction plus constant braking, stopping at zero instead of reversing.
pub fn brake(v: f32, friction: f32, deceleration: f32, dt: f32) -> f32 {
    if v == 0.0 {
        return 0.0;
    }
    let next = v - (friction * v + deceleration * v.signum()) * dt;
    if next.signum() != v.signum() {
        0.0
    } else {
        next
    }
}
