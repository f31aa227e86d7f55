//! Commands sent from the host loop to the simulation.
//!
//! Commands are queued and processed at the next tick boundary.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::InputPhase;

/// All commands the engine accepts.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum EngineCommand {
    /// Spawn the game mode's default pawn and possess it.
    StartMatch,
    Pause,
    Resume,
    /// Possess the player pawn with player 0 (no-op if already possessed).
    Possess,
    /// Release the player pawn's controller.
    Unpossess,
    /// Raw input routed through the input bindings.
    Input { event: InputEvent },
}

/// Input as delivered by the platform layer, addressed by binding name.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum InputEvent {
    /// Digital action edge (e.g. `Jump`, `Dash`).
    Action { name: String, phase: InputPhase },
    /// New held value for an analog axis (e.g. `MoveRight`).
    Axis { name: String, value: f32 },
    /// Touch screen edge.
    Touch {
        phase: InputPhase,
        finger: u32,
        location: Vec3,
    },
}

impl InputEvent {
    pub fn pressed(name: impl Into<String>) -> Self {
        InputEvent::Action {
            name: name.into(),
            phase: InputPhase::Pressed,
        }
    }

    pub fn released(name: impl Into<String>) -> Self {
        InputEvent::Action {
            name: name.into(),
            phase: InputPhase::Released,
        }
    }

    pub fn axis(name: impl Into<String>, value: f32) -> Self {
        InputEvent::Axis {
            name: name.into(),
            value,
        }
    }
}

impl From<InputEvent> for EngineCommand {
    fn from(event: InputEvent) -> Self {
        EngineCommand::Input { event }
    }
}
