//! Timed input scripts for headless runs.

use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use factotum_core::commands::{EngineCommand, InputEvent};
use factotum_core::config::InputConfig;
use factotum_core::state::GameStateSnapshot;
use factotum_sim::SimulationEngine;

/// One command, queued once the simulation clock reaches `at_secs`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScriptStep {
    pub at_secs: f32,
    pub command: EngineCommand,
}

/// Read a JSON array of steps, ordered by time.
pub fn load(path: &Path) -> Result<Vec<ScriptStep>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read script {}", path.display()))?;
    parse(&text).with_context(|| format!("parse script {}", path.display()))
}

pub fn parse(text: &str) -> Result<Vec<ScriptStep>> {
    let mut steps: Vec<ScriptStep> = serde_json::from_str(text)?;
    if let Some(step) = steps.iter().find(|s| !s.at_secs.is_finite() || s.at_secs < 0.0) {
        anyhow::bail!("step time must be a non-negative number, got {}", step.at_secs);
    }
    steps.sort_by(|a, b| a.at_secs.total_cmp(&b.at_secs));
    Ok(steps)
}

/// Run right, dash, jump, then stop.
pub fn demo(input: &InputConfig) -> Vec<ScriptStep> {
    let step = |at_secs: f32, command: EngineCommand| ScriptStep { at_secs, command };
    vec![
        step(0.0, EngineCommand::StartMatch),
        step(0.1, InputEvent::axis(&input.move_axis, 1.0).into()),
        step(0.6, InputEvent::pressed(&input.dash_action).into()),
        step(0.65, InputEvent::released(&input.dash_action).into()),
        step(1.6, InputEvent::pressed(&input.jump_action).into()),
        step(1.8, InputEvent::released(&input.jump_action).into()),
        step(2.5, InputEvent::axis(&input.move_axis, 0.0).into()),
    ]
}

/// Drive `engine` for `seconds` of simulated time, feeding steps as their
/// time comes up. Returns the last snapshot.
pub fn run(
    engine: &mut SimulationEngine,
    steps: Vec<ScriptStep>,
    seconds: f32,
) -> GameStateSnapshot {
    let tick_rate = engine.config().tick_rate;
    let ticks = (seconds * tick_rate as f32).ceil().max(1.0) as u64;
    let mut pending = steps.into_iter().peekable();
    let mut launches = 0usize;
    let mut last = None;

    for tick in 0..ticks {
        let now = tick as f32 / tick_rate as f32;
        while let Some(step) = pending.next_if(|s| s.at_secs <= now) {
            log::debug!("t={now:.3}s queue {:?}", step.command);
            engine.queue_command(step.command);
        }

        let snapshot = engine.tick();
        for event in &snapshot.events {
            log::info!("t={:.3}s {event:?}", snapshot.time.elapsed_secs);
            if matches!(event, factotum_core::events::CharacterEvent::Launched { .. }) {
                launches += 1;
            }
        }
        last = Some(snapshot);
    }

    if pending.peek().is_some() {
        log::warn!("{} script steps never ran", pending.count());
    }
    log::info!("ran {ticks} ticks, {launches} launches");
    last.unwrap_or_else(|| engine.tick())
}
