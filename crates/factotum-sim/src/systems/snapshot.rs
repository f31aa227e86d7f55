//! Snapshot system: reads the ECS world and builds a `GameStateSnapshot`.
//!
//! This system is read-only; it never modifies the world.

use hecs::{Entity, World};

use factotum_core::components::*;
use factotum_core::enums::{MatchPhase, PawnClass};
use factotum_core::events::CharacterEvent;
use factotum_core::state::*;
use factotum_core::types::SimTime;

pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: MatchPhase,
    pawn_class: PawnClass,
    pawn: Option<Entity>,
    events: Vec<CharacterEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        pawn_class,
        pawn: pawn.and_then(|entity| build_character(world, entity)),
        camera: pawn.and_then(|entity| build_camera(world, entity)),
        events,
    }
}

fn build_character(world: &World, entity: Entity) -> Option<CharacterView> {
    let mut query = world
        .query_one::<(
            &Transform,
            &CharacterMovement,
            &CharacterState,
            &Sprite,
            Option<&Controller>,
            Option<&Replicated>,
        )>(entity)
        .ok()?;
    let (transform, movement, state, sprite, controller, replicated) = query.get()?;

    Some(CharacterView {
        location: transform.location,
        velocity: movement.velocity,
        speed: movement.velocity.length(),
        rotation: transform.rotation,
        movement_mode: movement.mode,
        facing: state.facing,
        is_dashing: state.dash.is_dashing(),
        dash_elapsed_secs: state.dash.elapsed_secs(),
        dash_since_launch_secs: state.dash.since_launch_secs(),
        ground_friction: movement.ground_friction,
        animation: sprite.clip,
        flipbook: sprite.flipbook,
        possessed: controller.is_some(),
        replicated: replicated.is_some() && sprite.is_replicated,
    })
}

fn build_camera(world: &World, entity: Entity) -> Option<CameraView> {
    let camera = world.get::<&SideViewCamera>(entity).ok()?;
    Some(CameraView {
        location: camera.location,
        rotation: camera.rotation,
        projection: camera.projection,
        ortho_width: camera.ortho_width,
    })
}
