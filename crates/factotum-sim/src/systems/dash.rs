//! Dash system: advances every active dash by one frame.

use hecs::World;

use factotum_character::character::tick_dash;
use factotum_core::components::{CharacterMovement, CharacterState, Controller};
use factotum_core::config::DashConfig;
use factotum_core::events::CharacterEvent;

use crate::rig::CharacterRig;

pub fn run(world: &mut World, config: &DashConfig, dt: f32, events: &mut Vec<CharacterEvent>) {
    for (_entity, (state, movement, controller)) in world.query_mut::<(
        &mut CharacterState,
        &mut CharacterMovement,
        Option<&mut Controller>,
    )>() {
        let mut rig = CharacterRig {
            movement,
            controller,
        };
        tick_dash(state, config, dt, &mut rig, events);
    }
}
