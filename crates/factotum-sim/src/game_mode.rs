//! Game mode: decides which pawn the player gets.

use glam::Vec3;
use hecs::{Entity, World};

use factotum_core::config::GameConfig;
use factotum_core::constants::FLOOR_Z;
use factotum_core::enums::PawnClass;

use crate::assets::AssetLibrary;
use crate::world_setup;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameMode {
    pub default_pawn_class: PawnClass,
}

impl Default for GameMode {
    fn default() -> Self {
        Self {
            default_pawn_class: PawnClass::SideScrollerCharacter,
        }
    }
}

impl GameMode {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            default_pawn_class: config.default_pawn,
        }
    }

    /// Spawn the default pawn at the player start.
    pub fn spawn_default_pawn(
        &self,
        world: &mut World,
        config: &GameConfig,
        assets: &AssetLibrary,
    ) -> Entity {
        let start = player_start(config);
        let pawn = match self.default_pawn_class {
            PawnClass::SideScrollerCharacter => {
                world_setup::spawn_side_scroller_character(world, &config.character, assets, start)
            }
            PawnClass::Spectator => world_setup::spawn_spectator(world, start),
        };
        log::info!("spawned {:?} pawn at {start}", self.default_pawn_class);
        pawn
    }
}

/// Capsule resting on the floor at the origin.
fn player_start(config: &GameConfig) -> Vec3 {
    Vec3::new(0.0, 0.0, FLOOR_Z + config.character.capsule.half_height)
}
