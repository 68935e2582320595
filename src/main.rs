//! Sky Strike headless entry point
//!
//! Runs the campaign with a scripted autopilot at full speed: a smoke
//! harness for the simulation core, not a playable build. Pass a JSON
//! level config path to fly a single custom level instead.

use std::time::{SystemTime, UNIX_EPOCH};

use sky_strike::consts::*;
use sky_strike::sim::{GameState, LevelConfig, LevelRegistry, LevelRuntime};
use sky_strike::{NullAudio, NullStage};

/// Hard cap so a stalemate level cannot spin forever (10 minutes of play)
const MAX_TICKS: u64 = TICK_HZ as u64 * 600;

fn main() {
    env_logger::init();

    let seed = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_secs())
        .unwrap_or(0);
    log::info!("Sky Strike headless run, seed {seed}");

    let mut stage = NullStage;
    let mut audio = NullAudio;

    if let Some(path) = std::env::args().nth(1) {
        match load_config(&path) {
            Ok(config) => {
                let outcome = fly_level(config, seed, &mut stage, &mut audio);
                log::info!("custom level finished: {outcome:?}");
            }
            Err(err) => {
                eprintln!("failed to load level config {path}: {err}");
                std::process::exit(1);
            }
        }
        return;
    }

    let registry = LevelRegistry::campaign();
    let mut next = registry.first().map(|(id, _)| id);
    while let Some(id) = next {
        let config = registry
            .get(id)
            .expect("campaign levels are chained")
            .clone();
        let successor = config.next_level;
        log::info!("entering level {id:?}");
        match fly_level(config, seed, &mut stage, &mut audio) {
            GameState::Win => next = successor,
            outcome => {
                log::info!("campaign ended in {outcome:?} on level {id:?}");
                return;
            }
        }
    }
    log::info!("campaign complete");
}

fn load_config(path: &str) -> Result<LevelConfig, Box<dyn std::error::Error>> {
    let text = std::fs::read_to_string(path)?;
    let config: LevelConfig = serde_json::from_str(&text)?;
    config.validate()?;
    Ok(config)
}

/// Tick one level to its outcome with a sweep-and-shoot autopilot
fn fly_level(
    config: LevelConfig,
    seed: u64,
    stage: &mut NullStage,
    audio: &mut NullAudio,
) -> GameState {
    let mut runtime = match LevelRuntime::new(config, seed, stage) {
        Ok(runtime) => runtime,
        Err(err) => {
            eprintln!("invalid level config: {err}");
            std::process::exit(1);
        }
    };
    runtime.start();

    while runtime.state() == GameState::Playing && runtime.clock() < MAX_TICKS {
        // Sweep the full height in alternating passes, firing continuously.
        let phase = runtime.clock() % 160;
        if phase == 0 {
            runtime.move_down();
        } else if phase == 80 {
            runtime.move_up();
        }
        if runtime.clock() % 3 == 0 {
            runtime.fire(stage, audio);
        }
        runtime.tick(stage, audio);
    }

    let outcome = runtime.state();
    log::info!(
        "level over: {:?} after {} ticks, {} kills, {} health left",
        outcome,
        runtime.clock(),
        runtime.player().kills(),
        runtime.player().health()
    );
    runtime.shutdown(stage);
    outcome
}
