//! Frame-by-frame host for one level.
//!
//! [`LevelSimulation`] owns the live snakes, the walls, the capability
//! oracles, and the light puzzle. Each [`LevelSimulation::step`] runs every
//! snake through `update_snake` once, turns the output signals on their state
//! into [`SimEvent`]s, applies tile rotations, removes rain that left the
//! arena, and re-traces the light beam.
use snake_content::LevelData;
use snake_core::{
    ArenaBounds, BeamResult, Behavior, LightPuzzle, PlayerSnapshot, Snake, SnakeId, TickContext,
    TileCoord, Wall, update_snake,
};

use crate::config::SimConfig;
use crate::error::{Result, RuntimeError};
use crate::events::{FrameInput, SimEvent};
use crate::oracle::{GridOracle, OracleManager, QuadrantLighting};

pub struct LevelSimulation {
    name: String,
    index: u32,
    bounds: ArenaBounds,
    walls: Vec<Wall>,
    phase: Option<String>,
    snakes: Vec<Snake>,
    light: Option<LightPuzzle>,
    beam: Option<BeamResult>,
    oracles: OracleManager,
    config: SimConfig,
    tick: u64,
}

impl LevelSimulation {
    /// Spawns every snake in `level` and builds its oracles.
    ///
    /// # Errors
    ///
    /// Fails on the first snake spec that does not validate, or on a tile
    /// grid whose tile count does not match its dimensions.
    pub fn new(level: LevelData, config: SimConfig) -> Result<Self> {
        let snakes = level
            .snakes
            .iter()
            .map(|spec| spec.spawn())
            .collect::<std::result::Result<Vec<_>, _>>()?;
        let grid = level.grid.as_ref().map(GridOracle::from_data).transpose()?;
        let lighting = QuadrantLighting::from_data(level.bounds, level.lighting);

        tracing::info!(
            level = %level.name,
            snakes = snakes.len(),
            walls = level.walls.len(),
            has_grid = grid.is_some(),
            has_light = level.light.is_some(),
            seed = config.seed,
            "level loaded"
        );

        Ok(Self {
            name: level.name,
            index: level.index,
            bounds: level.bounds,
            walls: level.walls,
            phase: level.phase,
            snakes,
            light: level.light,
            beam: None,
            oracles: OracleManager::new(grid, lighting),
            config,
            tick: 0,
        })
    }

    /// Advances the level by one frame.
    pub fn step(&mut self, input: &FrameInput) -> Vec<SimEvent> {
        let tick = self.tick;
        self.tick += 1;

        let phase = input.phase.as_deref().or(self.phase.as_deref());
        let mut ctx = TickContext::new(input.dt, &self.walls, &self.config.ai)
            .with_bounds(self.bounds)
            .with_level(self.index)
            .with_sounds(&input.sounds)
            .at_tick(tick, self.config.seed);
        if let Some(player) = input.player.as_ref() {
            ctx = ctx.with_player(player);
        }
        if let Some(phase) = phase {
            ctx = ctx.with_phase(phase);
        }
        let env = self.oracles.as_snake_env();

        let mut events = Vec::new();
        let mut rotations: Vec<(SnakeId, TileCoord)> = Vec::new();
        let mut survivors = Vec::with_capacity(self.snakes.len());

        for snake in std::mem::take(&mut self.snakes) {
            let snake = update_snake(snake, &ctx, &env);

            match &snake.behavior {
                Behavior::Plumber(state) => {
                    if let Some(tile) = state.rotation_request {
                        rotations.push((snake.id, tile));
                    }
                }
                Behavior::Spitter(state) => {
                    if let Some(aim) = state.spit_request {
                        events.push(SimEvent::SpitRequested {
                            tick,
                            snake: snake.id,
                            origin: snake.body.center(),
                            aim,
                        });
                    }
                }
                _ => {}
            }

            if snake.is_off_screen(self.bounds) {
                tracing::debug!(snake = %snake.id, "rain left the arena");
                events.push(SimEvent::RainDespawned {
                    tick,
                    snake: snake.id,
                });
                continue;
            }

            if self.config.contact_catch
                && snake.is_active(self.index, phase)
                && input
                    .player
                    .as_ref()
                    .is_some_and(|player| touches(&snake, player))
            {
                tracing::info!(snake = %snake.id, archetype = %snake.archetype(), "player caught");
                events.push(SimEvent::PlayerCaught {
                    tick,
                    snake: snake.id,
                });
            }

            survivors.push(snake);
        }
        self.snakes = survivors;

        self.apply_rotations(tick, rotations, &mut events);
        self.trace_light(tick, &mut events);
        events
    }

    fn apply_rotations(
        &mut self,
        tick: u64,
        rotations: Vec<(SnakeId, TileCoord)>,
        events: &mut Vec<SimEvent>,
    ) {
        if rotations.is_empty() {
            return;
        }
        let Some(grid) = self.oracles.grid.as_mut() else {
            tracing::warn!(count = rotations.len(), "rotation requested without a grid");
            return;
        };
        for (snake, tile) in rotations {
            if grid.rotate(tile) {
                events.push(SimEvent::TileRotationRequested { tick, snake, tile });
            } else {
                tracing::warn!(%snake, col = tile.col, row = tile.row, "rotation outside grid");
            }
        }
    }

    fn trace_light(&mut self, tick: u64, events: &mut Vec<SimEvent>) {
        let Some(puzzle) = self.light.as_mut() else {
            return;
        };
        let was_active = puzzle.crystal.is_some_and(|crystal| crystal.is_active);
        let beam = puzzle.simulate(&self.walls, self.bounds, self.config.ai.max_reflections);
        match (was_active, beam.hits_crystal) {
            (false, true) => {
                tracing::info!(reflections = beam.reflections, "crystal activated");
                events.push(SimEvent::CrystalActivated { tick });
            }
            (true, false) => {
                tracing::info!("crystal deactivated");
                events.push(SimEvent::CrystalDeactivated { tick });
            }
            _ => {}
        }
        self.beam = Some(beam);
    }

    /// Rotates a light puzzle mirror; takes effect on the next step.
    ///
    /// # Errors
    ///
    /// Fails when the level has no light puzzle or no mirror at `index`.
    pub fn rotate_mirror(&mut self, index: usize, delta_deg: f32) -> Result<()> {
        let puzzle = self.light.as_mut().ok_or(RuntimeError::NoLightPuzzle)?;
        if !puzzle.rotate_mirror(index, delta_deg) {
            return Err(RuntimeError::UnknownMirror {
                index,
                count: puzzle.mirrors.len(),
            });
        }
        tracing::debug!(index, delta_deg, "mirror rotated");
        Ok(())
    }

    /// Replaces the level's phase tag for subsequent frames.
    pub fn set_phase(&mut self, phase: Option<String>) {
        self.phase = phase;
    }

    pub fn lighting_mut(&mut self) -> &mut QuadrantLighting {
        self.oracles.lighting_mut()
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Number of frames stepped so far.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    pub fn bounds(&self) -> ArenaBounds {
        self.bounds
    }

    pub fn snakes(&self) -> &[Snake] {
        &self.snakes
    }

    pub fn snake(&self, id: SnakeId) -> Option<&Snake> {
        self.snakes.iter().find(|snake| snake.id == id)
    }

    pub fn light(&self) -> Option<&LightPuzzle> {
        self.light.as_ref()
    }

    /// Beam traced by the latest step, if the level has a light puzzle.
    pub fn beam(&self) -> Option<&BeamResult> {
        self.beam.as_ref()
    }

    pub fn grid(&self) -> Option<&GridOracle> {
        self.oracles.grid()
    }
}

fn touches(snake: &Snake, player: &PlayerSnapshot) -> bool {
    snake.bounds().intersects(&player.bounds())
}
