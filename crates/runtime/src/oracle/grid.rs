//! Rotating pipe grid served through [`snake_core::TileGridOracle`].
use snake_content::TileGridData;
use snake_core::{GridDimensions, Openings, TileCoord, TileGridOracle, Vec2};

use crate::error::{Result, RuntimeError};

/// Row-major pipe grid owned by the host.
#[derive(Clone, Debug, PartialEq)]
pub struct GridOracle {
    dimensions: GridDimensions,
    tile_size: f32,
    origin: Vec2,
    tiles: Vec<Openings>,
}

impl GridOracle {
    pub fn new(dimensions: GridDimensions, tile_size: f32, tiles: Vec<Openings>) -> Result<Self> {
        let expected = dimensions.tile_count();
        if tiles.len() != expected {
            return Err(RuntimeError::InvalidGrid {
                cols: dimensions.cols,
                rows: dimensions.rows,
                expected,
                found: tiles.len(),
            });
        }
        Ok(Self {
            dimensions,
            tile_size,
            origin: Vec2::ZERO,
            tiles,
        })
    }

    pub fn from_data(data: &TileGridData) -> Result<Self> {
        let mut grid = Self::new(
            GridDimensions::new(data.cols, data.rows),
            data.tile_size,
            data.tiles.clone(),
        )?;
        grid.origin = data.origin;
        Ok(grid)
    }

    fn index(&self, tile: TileCoord) -> Option<usize> {
        self.dimensions
            .contains(tile)
            .then(|| tile.row as usize * self.dimensions.cols as usize + tile.col as usize)
    }

    /// Turns a tile a quarter turn clockwise. Returns `false` off the grid.
    pub fn rotate(&mut self, tile: TileCoord) -> bool {
        let Some(index) = self.index(tile) else {
            return false;
        };
        let Some(openings) = self.tiles.get_mut(index) else {
            return false;
        };
        *openings = openings.rotated_clockwise();
        true
    }

    pub fn tiles(&self) -> &[Openings] {
        &self.tiles
    }
}

impl TileGridOracle for GridOracle {
    fn dimensions(&self) -> GridDimensions {
        self.dimensions
    }

    fn tile_size(&self) -> f32 {
        self.tile_size
    }

    fn openings(&self, tile: TileCoord) -> Option<Openings> {
        self.index(tile)
            .and_then(|index| self.tiles.get(index))
            .copied()
    }

    fn origin(&self) -> Vec2 {
        self.origin
    }
}
