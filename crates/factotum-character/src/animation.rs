//! Idle/run clip selection.

use factotum_core::enums::AnimationClip;

/// Running while moving at all, idle when stopped.
pub fn select_clip(speed: f32) -> AnimationClip {
    if speed > 0.0 {
        AnimationClip::Running
    } else {
        AnimationClip::Idle
    }
}
