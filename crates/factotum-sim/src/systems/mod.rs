//! ECS systems that operate on the simulation world each tick.
//!
//! Systems are plain functions over `&mut World` (or `&World` for read-only).
//! They do not own state; all state lives in components.

pub mod camera;
pub mod dash;
pub mod input;
pub mod movement;
pub mod snapshot;
