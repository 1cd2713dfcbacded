//! Frame inputs and the events a step produces.

use serde::{Deserialize, Serialize};
use snake_core::{PlayerSnapshot, SnakeId, TileCoord, Vec2};

/// Everything the host observed this frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FrameInput {
    /// Seconds since the previous frame.
    pub dt: f32,
    pub player: Option<PlayerSnapshot>,
    /// Positions of noises made this frame.
    pub sounds: Vec<Vec2>,
    /// Overrides the level's phase tag for this frame.
    pub phase: Option<String>,
}

impl FrameInput {
    pub fn new(dt: f32) -> Self {
        Self {
            dt,
            ..Self::default()
        }
    }

    pub fn with_player(mut self, player: PlayerSnapshot) -> Self {
        self.player = Some(player);
        self
    }

    pub fn with_sounds(mut self, sounds: Vec<Vec2>) -> Self {
        self.sounds = sounds;
        self
    }

    pub fn with_phase(mut self, phase: impl Into<String>) -> Self {
        self.phase = Some(phase.into());
        self
    }
}

/// Something the host has to react to, stamped with the tick it happened on.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    /// A snake's bounds overlap the player's.
    PlayerCaught { tick: u64, snake: SnakeId },

    /// A plumber turned a pipe tile; the grid has already been rotated.
    TileRotationRequested {
        tick: u64,
        snake: SnakeId,
        tile: TileCoord,
    },

    /// A spitter wants a projectile fired from `origin` toward `aim`.
    SpitRequested {
        tick: u64,
        snake: SnakeId,
        origin: Vec2,
        aim: Vec2,
    },

    /// A rain snake left the arena and was removed.
    RainDespawned { tick: u64, snake: SnakeId },

    CrystalActivated { tick: u64 },

    CrystalDeactivated { tick: u64 },
}

impl SimEvent {
    pub fn tick(&self) -> u64 {
        match self {
            SimEvent::PlayerCaught { tick, .. }
            | SimEvent::TileRotationRequested { tick, .. }
            | SimEvent::SpitRequested { tick, .. }
            | SimEvent::RainDespawned { tick, .. }
            | SimEvent::CrystalActivated { tick }
            | SimEvent::CrystalDeactivated { tick } => *tick,
        }
    }
}
