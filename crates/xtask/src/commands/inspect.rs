//! Describe a level without simulating it.

use anyhow::Result;
use clap::Parser;
use console::style;
use std::path::PathBuf;

use snake_core::{Activation, AiConfig};

use crate::utils::load_level;

/// Describe a level's contents
#[derive(Parser, Debug)]
pub struct Inspect {
    /// Level file (RON)
    #[arg(value_name = "LEVEL")]
    level: PathBuf,

    /// AI tuning overrides (TOML); affects the light reflection cap
    #[arg(short, long, value_name = "CONFIG")]
    config: Option<PathBuf>,
}

impl Inspect {
    pub fn execute(self) -> Result<()> {
        let (level, ai) = load_level(&self.level, self.config.as_deref())?;

        println!("{} {}", style("Level:").bold().cyan(), level.name);
        println!(
            "{} {}x{}",
            style("Arena:").bold().cyan(),
            level.bounds.width,
            level.bounds.height
        );
        println!("{} {}", style("Walls:").bold().cyan(), level.walls.len());
        if let Some(grid) = &level.grid {
            println!(
                "{} {}x{} tiles of {}",
                style("Grid:").bold().cyan(),
                grid.cols,
                grid.rows,
                grid.tile_size
            );
        }
        println!();

        println!("{}", style("Snakes:").bold().yellow());
        let mut invalid = 0;
        for spec in &level.snakes {
            match spec.spawn() {
                Ok(snake) => println!(
                    "  {:<5} {:<12} at {} speed {} [{}]",
                    snake.id.to_string(),
                    snake.archetype().to_string(),
                    snake.position(),
                    snake.body.speed,
                    describe_activation(&snake.activation)
                ),
                Err(err) => {
                    invalid += 1;
                    println!("  {} {}", style("invalid:").red(), err);
                }
            }
        }

        if let Some(puzzle) = &level.light {
            print_light(puzzle.clone(), &level, &ai);
        }

        if invalid > 0 {
            anyhow::bail!("{} snake(s) failed validation", invalid);
        }
        Ok(())
    }
}

fn print_light(mut puzzle: snake_core::LightPuzzle, level: &snake_content::LevelData, ai: &AiConfig) {
    println!();
    println!(
        "{} {} mirror(s), crystal {}",
        style("Light:").bold().yellow(),
        puzzle.mirrors.len(),
        if puzzle.crystal.is_some() { "present" } else { "absent" }
    );
    let beam = puzzle.simulate(&level.walls, level.bounds, ai.max_reflections);
    for point in &beam.path {
        println!("  -> {}", point);
    }
    println!(
        "  {} reflections, crystal {}",
        beam.reflections,
        if beam.hits_crystal { "lit" } else { "dark" }
    );
}

fn describe_activation(activation: &Activation) -> String {
    match activation {
        Activation::Always => "always".to_string(),
        Activation::DuringPhase(phase) => format!("phase {}", phase),
        Activation::OnLevel(index) => format!("level {}", index),
    }
}
