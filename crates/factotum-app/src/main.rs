//! factotum-app: run the side-scroller simulation headless.
//!
//! Usage:
//!   factotum-app [--config <path>] [--script <path>] [--seconds <n>]
//!
//! Without a script a short demo plays. The final snapshot is printed to
//! stdout as JSON.

mod script;

use std::path::PathBuf;

use anyhow::{Context, Result};

use factotum_core::config::GameConfig;
use factotum_sim::SimulationEngine;

const DEFAULT_SECONDS: f32 = 4.0;

#[derive(Debug, Default)]
struct Args {
    config: Option<PathBuf>,
    script: Option<PathBuf>,
    seconds: Option<f32>,
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();
    while let Some(arg) = args.next() {
        let mut value = || args.next().with_context(|| format!("{arg} needs a value"));
        match arg.as_str() {
            "--config" => parsed.config = Some(value()?.into()),
            "--script" => parsed.script = Some(value()?.into()),
            "--seconds" => {
                let raw = value()?;
                let seconds: f32 = raw
                    .parse()
                    .with_context(|| format!("--seconds expects a number, got '{raw}'"))?;
                if !seconds.is_finite() || seconds <= 0.0 {
                    anyhow::bail!("--seconds must be positive, got {seconds}");
                }
                parsed.seconds = Some(seconds);
            }
            other => anyhow::bail!("unknown argument '{other}'"),
        }
    }
    Ok(parsed)
}

fn main() -> Result<()> {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_millis()
        .try_init();

    let args = parse_args(std::env::args().skip(1))?;

    let config = match &args.config {
        Some(path) => GameConfig::load(path)
            .with_context(|| format!("load config {}", path.display()))?,
        None => GameConfig::default(),
    };
    let steps = match &args.script {
        Some(path) => script::load(path)?,
        None => script::demo(&config.input),
    };
    let seconds = args.seconds.unwrap_or(DEFAULT_SECONDS);
    log::info!(
        "running {seconds}s at {} Hz, default pawn {:?}, {} script steps",
        config.tick_rate,
        config.default_pawn,
        steps.len()
    );

    let mut engine = SimulationEngine::new(config);
    let snapshot = script::run(&mut engine, steps, seconds);
    println!("{}", serde_json::to_string_pretty(&snapshot)?);
    Ok(())
}
