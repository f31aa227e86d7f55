//! Input and tick handlers of the side-scroller character.
//!
//! Each handler mutates `CharacterState`, drives the injected capabilities,
//! and appends the resulting `CharacterEvent`s.

use glam::Vec3;

use factotum_core::components::CharacterState;
use factotum_core::config::DashConfig;
use factotum_core::enums::{DashState, FacingDirection};
use factotum_core::events::CharacterEvent;

use crate::animation::select_clip;
use crate::capabilities::{AnimationPresenter, MovementController};
use crate::dash;
use crate::CharacterError;

/// Refresh the idle/run clip from the current speed.
pub fn update_animation<M, A>(movement: &M, presenter: &mut A, events: &mut Vec<CharacterEvent>)
where
    M: MovementController + ?Sized,
    A: AnimationPresenter + ?Sized,
{
    let clip = select_clip(movement.velocity().length());
    if presenter.current_clip() != clip {
        events.push(CharacterEvent::AnimationChanged { clip });
    }
    presenter.present(clip);
}

/// Horizontal axis handler, called every frame with the held axis value.
///
/// The animation is refreshed on every call. Outside a dash, non-zero input
/// turns the controller toward the input and feeds movement; during a dash
/// the input is dropped.
pub fn move_right<M, A>(
    state: &mut CharacterState,
    value: f32,
    movement: &mut M,
    presenter: &mut A,
    events: &mut Vec<CharacterEvent>,
) where
    M: MovementController + ?Sized,
    A: AnimationPresenter + ?Sized,
{
    update_animation(movement, presenter, events);

    if state.dash.is_dashing() {
        return;
    }

    let facing = if value < 0.0 {
        Some(FacingDirection::Left)
    } else if value > 0.0 {
        Some(FacingDirection::Right)
    } else {
        None
    };

    // Unpossessed pawns keep their facing.
    if let Some(facing) = facing {
        if movement.set_control_yaw(facing.control_yaw()).is_ok() && state.facing != facing {
            state.facing = facing;
            events.push(CharacterEvent::FacingChanged { facing });
        }
    }

    movement.add_movement_input(Vec3::X, value);
}

/// Dash action handler.
///
/// Starts a dash toward the current facing: one immediate launch, ground
/// friction overridden. Ignored while a dash is already running.
pub fn trigger_dash<M>(
    state: &mut CharacterState,
    config: &DashConfig,
    movement: &mut M,
    events: &mut Vec<CharacterEvent>,
) -> Result<(), CharacterError>
where
    M: MovementController + ?Sized,
{
    if state.dash.is_dashing() {
        log::debug!(
            "dash ignored: already dashing ({:.3}s elapsed)",
            state.dash.elapsed_secs()
        );
        return Ok(());
    }

    movement.set_control_yaw(state.facing.control_yaw())?;

    events.push(CharacterEvent::DashStarted {
        facing: state.facing,
    });
    launch(state.facing, config, movement, events);

    state.dash = DashState::started();
    state.pre_dash_friction = movement.ground_friction();
    movement.set_ground_friction(config.dash_friction);
    Ok(())
}

/// Per-frame dash update.
pub fn tick_dash<M>(
    state: &mut CharacterState,
    config: &DashConfig,
    dt: f32,
    movement: &mut M,
    events: &mut Vec<CharacterEvent>,
) where
    M: MovementController + ?Sized,
{
    if !state.dash.is_dashing() {
        return;
    }

    let update = dash::evaluate(state.dash, dt, config);
    state.dash = update.state;

    log::trace!(
        "dash elapsed {:.3}s, since launch {:.3}s, friction {}",
        state.dash.elapsed_secs(),
        state.dash.since_launch_secs(),
        movement.ground_friction()
    );

    if update.ended {
        let friction = if config.restore_friction_after_dash {
            state.pre_dash_friction
        } else {
            config.post_dash_friction
        };
        movement.set_ground_friction(friction);
        events.push(CharacterEvent::DashEnded);
        log::debug!("dash ended, ground friction now {friction}");
    } else if update.relaunch {
        if let Err(err) = movement.set_control_yaw(state.facing.control_yaw()) {
            log::warn!("relaunch without turning: {err}");
        }
        launch(state.facing, config, movement, events);
    }
}

/// Jump action pressed.
pub fn jump<M: MovementController + ?Sized>(movement: &mut M) {
    movement.jump();
}

/// Jump action released.
pub fn stop_jumping<M: MovementController + ?Sized>(movement: &mut M) {
    movement.stop_jumping();
}

/// Any touch jumps.
pub fn touch_started<M: MovementController + ?Sized>(finger: u32, location: Vec3, movement: &mut M) {
    log::trace!("touch {finger} began at {location}");
    movement.jump();
}

pub fn touch_stopped<M: MovementController + ?Sized>(finger: u32, location: Vec3, movement: &mut M) {
    log::trace!("touch {finger} ended at {location}");
    movement.stop_jumping();
}

fn launch<M>(
    facing: FacingDirection,
    config: &DashConfig,
    movement: &mut M,
    events: &mut Vec<CharacterEvent>,
) where
    M: MovementController + ?Sized,
{
    let impulse = dash::launch_impulse(facing, config);
    log::debug!("launching character with {impulse}");
    movement.launch(impulse, true, false);
    events.push(CharacterEvent::Launched {
        impulse_x: impulse.x,
    });
}
