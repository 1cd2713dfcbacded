//! Per-tick inputs handed to every snake handler.

use crate::agent::SnakeId;
use crate::config::AiConfig;
use crate::env::compute_seed;
use crate::geometry::{ArenaBounds, Rect, Size, Vec2, Wall};

/// Read-only snapshot of the player for one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayerSnapshot {
    pub position: Vec2,
    pub size: Size,
    pub speed: f32,
    /// Instantaneous velocity in units per second. Hosts that do not track
    /// it leave it at zero, which turns target extrapolation into a no-op.
    pub velocity: Vec2,
    pub has_key: bool,
}

impl PlayerSnapshot {
    pub fn new(position: Vec2, size: Size) -> Self {
        Self {
            position,
            size,
            ..Self::default()
        }
    }

    pub fn with_velocity(mut self, velocity: Vec2) -> Self {
        self.velocity = velocity;
        self
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_origin(self.position, self.size)
    }

    /// Where the player will be after `lead` seconds at the current velocity.
    pub fn predicted_position(&self, lead: f32) -> Vec2 {
        if !self.velocity.is_finite() {
            return self.position;
        }
        self.position + self.velocity * lead
    }
}

/// Everything a handler may read during one tick.
///
/// Built by the host once per frame and shared by every snake.
#[derive(Clone, Copy, Debug)]
pub struct TickContext<'a> {
    /// Elapsed time for this tick, in seconds.
    pub dt: f32,
    /// Monotonic frame counter; feeds deterministic random draws.
    pub tick: u64,
    pub seed: u64,
    pub walls: &'a [Wall],
    pub player: Option<&'a PlayerSnapshot>,
    /// Sound positions emitted during this tick only.
    pub sounds: &'a [Vec2],
    pub level: u32,
    pub phase: Option<&'a str>,
    pub bounds: ArenaBounds,
    pub config: &'a AiConfig,
}

impl<'a> TickContext<'a> {
    pub fn new(dt: f32, walls: &'a [Wall], config: &'a AiConfig) -> Self {
        Self {
            dt,
            tick: 0,
            seed: 0,
            walls,
            player: None,
            sounds: &[],
            level: 0,
            phase: None,
            bounds: ArenaBounds::default(),
            config,
        }
    }

    pub fn with_player(mut self, player: &'a PlayerSnapshot) -> Self {
        self.player = Some(player);
        self
    }

    pub fn with_sounds(mut self, sounds: &'a [Vec2]) -> Self {
        self.sounds = sounds;
        self
    }

    pub fn with_bounds(mut self, bounds: ArenaBounds) -> Self {
        self.bounds = bounds;
        self
    }

    pub fn with_phase(mut self, phase: &'a str) -> Self {
        self.phase = Some(phase);
        self
    }

    pub fn with_level(mut self, level: u32) -> Self {
        self.level = level;
        self
    }

    pub fn at_tick(mut self, tick: u64, seed: u64) -> Self {
        self.tick = tick;
        self.seed = seed;
        self
    }

    /// Seed for one random draw made by `snake` during this tick.
    pub fn seed_for(&self, snake: SnakeId, roll: u32) -> u64 {
        compute_seed(self.seed, self.tick, snake.0, roll)
    }

    /// True when the delta can advance timers and movement.
    pub fn has_valid_delta(&self) -> bool {
        self.dt.is_finite() && self.dt > 0.0
    }
}
