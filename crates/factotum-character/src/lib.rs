//! Side-scroller character logic for FACTOTUM.
//!
//! Implements the dash state machine, animation selection and the
//! character's input handlers. Handlers act on the world only through the
//! capability traits in [`capabilities`], so this crate has no ECS
//! dependency and is tested against plain mocks.

pub mod animation;
pub mod capabilities;
pub mod character;
pub mod dash;
pub mod error;

pub use error::CharacterError;
pub use factotum_core as core;
