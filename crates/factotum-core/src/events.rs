//! Events emitted by the character for audio, effects and UI feedback.

use serde::{Deserialize, Serialize};

use crate::enums::*;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum CharacterEvent {
    /// Dash triggered.
    DashStarted { facing: FacingDirection },
    /// Horizontal launch applied (trigger or relaunch).
    Launched { impulse_x: f32 },
    /// Dash timer ran out.
    DashEnded,
    /// Sprite switched clips.
    AnimationChanged { clip: AnimationClip },
    FacingChanged { facing: FacingDirection },
    Jumped,
    Landed,
}
