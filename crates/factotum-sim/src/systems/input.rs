//! Input dispatch: routes bound input to the player pawn's handlers.
//!
//! Action and touch edges are handled as they arrive; held axes are
//! dispatched once per tick.

use hecs::{Entity, World};

use factotum_character::character;
use factotum_core::commands::InputEvent;
use factotum_core::config::DashConfig;
use factotum_core::enums::InputPhase;
use factotum_core::events::CharacterEvent;

use crate::input::{BoundAction, InputBindings};
use crate::rig::with_character;

/// Handle one input event for `pawn`.
pub fn dispatch_event(
    world: &mut World,
    pawn: Entity,
    bindings: &mut InputBindings,
    dash_config: &DashConfig,
    event: InputEvent,
    events: &mut Vec<CharacterEvent>,
) {
    match event {
        InputEvent::Axis { name, value } => {
            if !bindings.set_axis(&name, value) {
                log::debug!("ignoring unbound axis {name:?}");
            }
        }
        InputEvent::Action { name, phase } => {
            let Some(action) = bindings.action(&name) else {
                log::debug!("ignoring unbound action {name:?}");
                return;
            };
            let handled = with_character(world, pawn, |state, rig, _sprite| {
                match (action, phase) {
                    (BoundAction::Jump, InputPhase::Pressed) => character::jump(rig),
                    (BoundAction::Jump, InputPhase::Released) => character::stop_jumping(rig),
                    (BoundAction::Dash, InputPhase::Pressed) => {
                        if let Err(err) = character::trigger_dash(state, dash_config, rig, events) {
                            log::warn!("dash dropped: {err}");
                        }
                    }
                    (BoundAction::Dash, InputPhase::Released) => {}
                }
            });
            if handled.is_none() {
                log::debug!("pawn cannot handle {action:?}");
            }
        }
        InputEvent::Touch {
            phase,
            finger,
            location,
        } => {
            with_character(world, pawn, |_state, rig, _sprite| match phase {
                InputPhase::Pressed => character::touch_started(finger, location, rig),
                InputPhase::Released => character::touch_stopped(finger, location, rig),
            });
        }
    }
}

/// Feed the held movement axis to the pawn. Runs every tick, including
/// ticks where the axis is zero, so the animation is refreshed each frame.
pub fn dispatch_axes(
    world: &mut World,
    pawn: Entity,
    bindings: &InputBindings,
    events: &mut Vec<CharacterEvent>,
) {
    let value = bindings.move_axis_value();
    with_character(world, pawn, |state, rig, sprite| {
        character::move_right(state, value, rig, sprite, events);
    });
}
