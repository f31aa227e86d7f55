//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

use crate::constants::{YAW_FACING_LEFT, YAW_FACING_RIGHT};

/// Which way the character last moved horizontally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FacingDirection {
    Left,
    #[default]
    Right,
}

impl FacingDirection {
    /// Sign applied to horizontal launches (+1 right, -1 left).
    pub fn sign(self) -> f32 {
        match self {
            FacingDirection::Left => -1.0,
            FacingDirection::Right => 1.0,
        }
    }

    /// Controller yaw that faces this direction (degrees).
    pub fn control_yaw(self) -> f32 {
        match self {
            FacingDirection::Left => YAW_FACING_LEFT,
            FacingDirection::Right => YAW_FACING_RIGHT,
        }
    }
}

/// The two sprite animations a side-scroller character switches between.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AnimationClip {
    #[default]
    Idle,
    Running,
}

/// Dash ability state.
///
/// `Dashing` carries both timers, so "dashing" and "timers advancing" can
/// never disagree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state")]
pub enum DashState {
    /// No dash in progress; movement input is honoured.
    #[default]
    Ready,
    /// Dash in progress.
    Dashing {
        /// Seconds since the dash was triggered.
        elapsed_secs: f32,
        /// Seconds since the last launch (trigger or relaunch).
        since_launch_secs: f32,
    },
}

impl DashState {
    /// State entered when a dash is triggered.
    pub fn started() -> Self {
        DashState::Dashing {
            elapsed_secs: 0.0,
            since_launch_secs: 0.0,
        }
    }

    pub fn is_dashing(&self) -> bool {
        matches!(self, DashState::Dashing { .. })
    }

    /// Total dash time, zero when not dashing.
    pub fn elapsed_secs(&self) -> f32 {
        match self {
            DashState::Ready => 0.0,
            DashState::Dashing { elapsed_secs, .. } => *elapsed_secs,
        }
    }

    /// Time since the last launch, zero when not dashing.
    pub fn since_launch_secs(&self) -> f32 {
        match self {
            DashState::Ready => 0.0,
            DashState::Dashing {
                since_launch_secs, ..
            } => *since_launch_secs,
        }
    }
}

/// Character movement mode.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MovementMode {
    /// On the floor; friction and braking apply.
    #[default]
    Walking,
    /// Airborne after a jump or launch; gravity applies.
    Falling,
}

/// Match (top-level) phase.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MatchPhase {
    #[default]
    WaitingToStart,
    InProgress,
    Paused,
}

/// Edge of a digital input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum InputPhase {
    Pressed,
    Released,
}

/// Pawn classes the game mode can spawn for the player.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum PawnClass {
    /// The dashing side-scroller character.
    #[default]
    SideScrollerCharacter,
    /// A bare pawn with no movement or animation.
    Spectator,
}

/// Camera projection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProjectionMode {
    Perspective,
    #[default]
    Orthographic,
}
