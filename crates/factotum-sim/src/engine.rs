//! Simulation engine: the host loop of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, processes engine commands,
//! runs all systems, and produces `GameStateSnapshot`s. Completely headless,
//! so whole play sessions can be replayed deterministically in tests.

use std::collections::VecDeque;

use hecs::{Entity, World};

use factotum_core::commands::{EngineCommand, InputEvent};
use factotum_core::config::GameConfig;
use factotum_core::enums::MatchPhase;
use factotum_core::events::CharacterEvent;
use factotum_core::state::GameStateSnapshot;
use factotum_core::types::SimTime;

use crate::assets::AssetLibrary;
use crate::game_mode::GameMode;
use crate::input::InputBindings;
use crate::systems;
use crate::world_setup;

/// Player index of the local player.
const LOCAL_PLAYER: u32 = 0;

pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: MatchPhase,
    config: GameConfig,
    game_mode: GameMode,
    assets: AssetLibrary,
    bindings: InputBindings,
    pawn: Option<Entity>,
    command_queue: VecDeque<EngineCommand>,
    events: Vec<CharacterEvent>,
}

impl SimulationEngine {
    /// Create an engine with the stock asset library.
    pub fn new(config: GameConfig) -> Self {
        Self::with_assets(config, AssetLibrary::with_defaults())
    }

    pub fn with_assets(config: GameConfig, assets: AssetLibrary) -> Self {
        Self {
            world: World::new(),
            time: SimTime::default(),
            phase: MatchPhase::default(),
            game_mode: GameMode::from_config(&config),
            bindings: InputBindings::new(&config.input),
            config,
            assets,
            pawn: None,
            command_queue: VecDeque::new(),
            events: Vec::new(),
        }
    }

    /// Queue a command for processing at the next tick boundary.
    pub fn queue_command(&mut self, command: EngineCommand) {
        self.command_queue.push_back(command);
    }

    pub fn queue_commands(&mut self, commands: impl IntoIterator<Item = EngineCommand>) {
        self.command_queue.extend(commands);
    }

    /// Advance one fixed tick and return the resulting snapshot.
    pub fn tick(&mut self) -> GameStateSnapshot {
        self.tick_with_delta(self.config.dt())
    }

    /// Advance by a variable frame time.
    pub fn tick_with_delta(&mut self, dt: f32) -> GameStateSnapshot {
        self.process_commands();

        if self.phase == MatchPhase::InProgress {
            self.run_systems(dt);
            self.time.advance(dt);
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.game_mode.default_pawn_class,
            self.pawn,
            events,
        )
    }

    pub fn phase(&self) -> MatchPhase {
        self.phase
    }

    pub fn time(&self) -> SimTime {
        self.time
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    pub fn assets(&self) -> &AssetLibrary {
        &self.assets
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// The player's pawn, once the match has started.
    pub fn pawn(&self) -> Option<Entity> {
        self.pawn
    }

    fn process_commands(&mut self) {
        while let Some(command) = self.command_queue.pop_front() {
            self.handle_command(command);
        }
    }

    fn handle_command(&mut self, command: EngineCommand) {
        match command {
            EngineCommand::StartMatch => {
                if self.phase != MatchPhase::WaitingToStart {
                    log::debug!("match already started");
                    return;
                }
                let pawn =
                    self.game_mode
                        .spawn_default_pawn(&mut self.world, &self.config, &self.assets);
                world_setup::possess(&mut self.world, pawn, LOCAL_PLAYER);
                self.pawn = Some(pawn);
                self.bindings.reset_axes();
                self.time = SimTime::default();
                self.phase = MatchPhase::InProgress;
                log::info!("match started");
            }
            EngineCommand::Pause => {
                if self.phase == MatchPhase::InProgress {
                    self.phase = MatchPhase::Paused;
                }
            }
            EngineCommand::Resume => {
                if self.phase == MatchPhase::Paused {
                    self.phase = MatchPhase::InProgress;
                }
            }
            EngineCommand::Possess => {
                if let Some(pawn) = self.pawn {
                    if world_setup::possess(&mut self.world, pawn, LOCAL_PLAYER) {
                        log::debug!("player {LOCAL_PLAYER} possessed pawn {pawn:?}");
                    }
                }
            }
            EngineCommand::Unpossess => {
                if let Some(pawn) = self.pawn {
                    if world_setup::unpossess(&mut self.world, pawn) {
                        log::debug!("pawn {pawn:?} unpossessed");
                    }
                }
            }
            EngineCommand::Input { event } => {
                let Some(pawn) = self.pawn else {
                    log::debug!("dropping input before match start: {event:?}");
                    return;
                };
                if self.phase != MatchPhase::InProgress {
                    // Held axes keep tracking the device while paused.
                    if let InputEvent::Axis { name, value } = &event {
                        self.bindings.set_axis(name, *value);
                    } else {
                        log::debug!("dropping input while {:?}: {event:?}", self.phase);
                    }
                    return;
                }
                systems::input::dispatch_event(
                    &mut self.world,
                    pawn,
                    &mut self.bindings,
                    &self.config.character.dash,
                    event,
                    &mut self.events,
                );
            }
        }
    }

    /// Run all systems in order.
    fn run_systems(&mut self, dt: f32) {
        // 1. Held axes (movement input + animation refresh)
        if let Some(pawn) = self.pawn {
            systems::input::dispatch_axes(&mut self.world, pawn, &self.bindings, &mut self.events);
        }
        // 2. Dash timers and relaunches
        systems::dash::run(&mut self.world, &self.config.character.dash, dt, &mut self.events);
        // 3. Movement integration
        systems::movement::run(&mut self.world, dt, &mut self.events);
        // 4. Camera rig
        systems::camera::run(&mut self.world);
    }
}
