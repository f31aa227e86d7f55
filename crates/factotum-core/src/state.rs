//! Game state snapshot: the complete visible state produced after each tick.

use glam::Vec3;
use serde::{Deserialize, Serialize};

use crate::enums::*;
use crate::events::CharacterEvent;
use crate::types::{FlipbookHandle, Rotator, SimTime};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: MatchPhase,
    pub pawn_class: PawnClass,
    /// The player's side-scroller character, if one is spawned.
    pub pawn: Option<CharacterView>,
    pub camera: Option<CameraView>,
    /// Character events raised during this tick, in order.
    pub events: Vec<CharacterEvent>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CharacterView {
    pub location: Vec3,
    pub velocity: Vec3,
    pub speed: f32,
    pub rotation: Rotator,
    pub movement_mode: MovementMode,
    pub facing: FacingDirection,
    pub is_dashing: bool,
    pub dash_elapsed_secs: f32,
    pub dash_since_launch_secs: f32,
    pub ground_friction: f32,
    pub animation: AnimationClip,
    pub flipbook: Option<FlipbookHandle>,
    /// Whether a controller currently possesses the pawn.
    pub possessed: bool,
    pub replicated: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraView {
    pub location: Vec3,
    pub rotation: Rotator,
    pub projection: ProjectionMode,
    pub ortho_width: f32,
}
