//! Concrete capabilities handed to snake handlers.
//!
//! The [`OracleManager`] owns whatever the level provides and lends it out as
//! a [`SnakeEnv`] each frame. The grid is the only mutable piece: the
//! simulation applies plumber rotations to it between frames.
mod grid;
mod lighting;

use snake_core::{PcgRng, SnakeEnv};

pub use grid::GridOracle;
pub use lighting::QuadrantLighting;

#[derive(Clone, Debug)]
pub struct OracleManager {
    pub(crate) grid: Option<GridOracle>,
    pub(crate) lighting: QuadrantLighting,
    pub(crate) rng: PcgRng,
}

impl OracleManager {
    pub fn new(grid: Option<GridOracle>, lighting: QuadrantLighting) -> Self {
        Self {
            grid,
            lighting,
            rng: PcgRng, // PcgRng is stateless
        }
    }

    /// Borrows every available capability for one frame.
    pub fn as_snake_env(&self) -> SnakeEnv<'_> {
        let env = SnakeEnv::with_rng(&self.rng).with_lighting(&self.lighting);
        match &self.grid {
            Some(grid) => env.with_tiles(grid),
            None => env,
        }
    }

    pub fn grid(&self) -> Option<&GridOracle> {
        self.grid.as_ref()
    }

    pub fn lighting(&self) -> &QuadrantLighting {
        &self.lighting
    }

    pub fn lighting_mut(&mut self) -> &mut QuadrantLighting {
        &mut self.lighting
    }
}
