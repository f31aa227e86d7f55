//! Dash finite state machine.
//!
//! Pure functions over `DashState`. No ECS dependency; the caller applies
//! the resulting launches and friction changes.

use glam::Vec3;

use factotum_core::config::DashConfig;
use factotum_core::enums::{DashState, FacingDirection};

/// Output of one dash tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DashUpdate {
    pub state: DashState,
    /// A relaunch impulse is due this tick.
    pub relaunch: bool,
    /// The dash ended this tick.
    pub ended: bool,
}

/// Advance the dash by `dt` seconds.
///
/// Both timers accumulate first. Ending takes priority over relaunching,
/// so no impulse is applied on the tick the dash ends.
pub fn evaluate(state: DashState, dt: f32, config: &DashConfig) -> DashUpdate {
    let DashState::Dashing {
        elapsed_secs,
        since_launch_secs,
    } = state
    else {
        return DashUpdate {
            state,
            relaunch: false,
            ended: false,
        };
    };

    let elapsed_secs = elapsed_secs + dt;
    let since_launch_secs = since_launch_secs + dt;

    if elapsed_secs > config.duration_secs {
        return DashUpdate {
            state: DashState::Ready,
            relaunch: false,
            ended: true,
        };
    }

    if since_launch_secs > config.relaunch_interval_secs {
        return DashUpdate {
            state: DashState::Dashing {
                elapsed_secs,
                since_launch_secs: 0.0,
            },
            relaunch: true,
            ended: false,
        };
    }

    DashUpdate {
        state: DashState::Dashing {
            elapsed_secs,
            since_launch_secs,
        },
        relaunch: false,
        ended: false,
    }
}

/// Horizontal impulse for a launch toward `facing`.
pub fn launch_impulse(facing: FacingDirection, config: &DashConfig) -> Vec3 {
    Vec3::new(facing.sign() * config.impulse, 0.0, 0.0)
}
