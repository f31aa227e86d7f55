//! Simulation engine for FACTOTUM.
//!
//! Owns the hecs ECS world, spawns the game mode's pawn, routes input to
//! it, runs the character systems each tick, and produces
//! `GameStateSnapshot`s.

pub mod assets;
pub mod engine;
pub mod game_mode;
pub mod input;
pub mod rig;
pub mod systems;
pub mod world_setup;

pub use engine::SimulationEngine;
pub use factotum_core as core;
