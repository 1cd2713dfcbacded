//! Step a level headlessly and report events and final snake states.

use anyhow::Result;
use clap::Parser;
use console::style;
use serde::Serialize;
use std::path::PathBuf;

use snake_core::{BeamResult, PlayerSnapshot, Size, Snake, Vec2};
use snake_runtime::{FrameInput, LevelSimulation, SimConfig, SimEvent};

use crate::utils::{load_level, parse_point};

/// Player box edge used for contact checks.
const PLAYER_SIZE: f32 = 20.0;

/// Step a level for a number of frames
#[derive(Parser, Debug)]
pub struct Run {
    /// Level file (RON)
    #[arg(value_name = "LEVEL")]
    level: PathBuf,

    /// AI tuning overrides (TOML)
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,

    /// Number of frames to simulate
    #[arg(short, long, default_value_t = 600)]
    ticks: u64,

    /// Seconds per frame
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Stationary player position as X,Y
    #[arg(short, long, value_name = "X,Y", value_parser = parse_point)]
    player: Option<Vec2>,

    /// Sound emitted every frame at X,Y (repeatable)
    #[arg(short, long = "sound", value_name = "X,Y", value_parser = parse_point)]
    sounds: Vec<Vec2>,

    /// Phase tag reported to phase-gated snakes
    #[arg(long)]
    phase: Option<String>,

    /// Seed for random draws (overrides SNAKE_SEED)
    #[arg(long)]
    seed: Option<u64>,

    /// Stop at the first time the player is caught
    #[arg(long)]
    stop_on_catch: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: OutputFormat,
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
enum OutputFormat {
    /// Compact human-readable summary
    Summary,
    /// Full JSON report
    Json,
}

#[derive(Serialize)]
struct RunReport<'a> {
    level: &'a str,
    seed: u64,
    ticks: u64,
    events: &'a [SimEvent],
    snakes: &'a [Snake],
    beam: Option<&'a BeamResult>,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            anyhow::bail!("--dt must be a positive number of seconds, got {}", self.dt);
        }

        let (level, ai) = load_level(&self.level, self.config.as_deref())?;
        let mut config = SimConfig::from_env().with_ai(ai);
        if let Some(seed) = self.seed {
            config = config.with_seed(seed);
        }
        let seed = config.seed;
        let mut sim = LevelSimulation::new(level, config)?;

        let mut input = FrameInput::new(self.dt).with_sounds(self.sounds.clone());
        if let Some(position) = self.player {
            input = input.with_player(PlayerSnapshot::new(position, Size::square(PLAYER_SIZE)));
        }
        if let Some(phase) = &self.phase {
            input = input.with_phase(phase.clone());
        }

        let mut events = Vec::new();
        for _ in 0..self.ticks {
            let frame = sim.step(&input);
            let caught = frame
                .iter()
                .any(|event| matches!(event, SimEvent::PlayerCaught { .. }));
            events.extend(frame);
            if caught && self.stop_on_catch {
                break;
            }
        }
        tracing::info!(ticks = sim.tick(), events = events.len(), "run finished");

        let report = RunReport {
            level: sim.name(),
            seed,
            ticks: sim.tick(),
            events: &events,
            snakes: sim.snakes(),
            beam: sim.beam(),
        };
        match self.format {
            OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
            OutputFormat::Summary => print_summary(&report),
        }
        Ok(())
    }
}

fn print_summary(report: &RunReport<'_>) {
    println!(
        "{} {} (seed {}, {} frames)",
        style("Level:").bold().cyan(),
        report.level,
        report.seed,
        report.ticks
    );
    println!();

    println!("{}", style("Events:").bold().yellow());
    if report.events.is_empty() {
        println!("  (none)");
    }
    for event in report.events {
        println!("  {:>6}  {}", event.tick(), describe(event));
    }
    println!();

    println!("{}", style("Snakes:").bold().yellow());
    for snake in report.snakes {
        println!(
            "  {:<5} {:<12} at {}",
            snake.id.to_string(),
            snake.archetype().to_string(),
            snake.position()
        );
    }

    if let Some(beam) = report.beam {
        println!();
        println!(
            "{} {} reflections, crystal {}",
            style("Beam:").bold().yellow(),
            beam.reflections,
            if beam.hits_crystal { "lit" } else { "dark" }
        );
    }
}

fn describe(event: &SimEvent) -> String {
    match event {
        SimEvent::PlayerCaught { snake, .. } => format!("{} caught the player", snake),
        SimEvent::TileRotationRequested { snake, tile, .. } => {
            format!("{} rotated tile ({}, {})", snake, tile.col, tile.row)
        }
        SimEvent::SpitRequested { snake, aim, .. } => format!("{} spat toward {}", snake, aim),
        SimEvent::RainDespawned { snake, .. } => format!("{} fell out of the arena", snake),
        SimEvent::CrystalActivated { .. } => "crystal activated".to_string(),
        SimEvent::CrystalDeactivated { .. } => "crystal deactivated".to_string(),
    }
}
