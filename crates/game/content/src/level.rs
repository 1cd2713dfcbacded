//! Level description types.

use snake_core::{ArenaBounds, LightPuzzle, Openings, SnakeSpec, Vec2, Wall};

/// Everything needed to set up one level.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LevelData {
    pub name: String,
    /// Level index used by `Activation::OnLevel`.
    #[cfg_attr(feature = "serde", serde(default))]
    pub index: u32,
    #[cfg_attr(feature = "serde", serde(default))]
    pub bounds: ArenaBounds,
    #[cfg_attr(feature = "serde", serde(default))]
    pub walls: Vec<Wall>,
    /// Phase tag reported to `Activation::DuringPhase` snakes at start.
    #[cfg_attr(feature = "serde", serde(default))]
    pub phase: Option<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub snakes: Vec<SnakeSpec>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub light: Option<LightPuzzle>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub grid: Option<TileGridData>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub lighting: LightingData,
}

/// Pipe grid layout. `tiles` is row-major and holds `cols * rows` entries.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileGridData {
    #[cfg_attr(feature = "serde", serde(default))]
    pub origin: Vec2,
    pub tile_size: f32,
    pub cols: u32,
    pub rows: u32,
    pub tiles: Vec<Openings>,
}

impl TileGridData {
    pub fn expected_tiles(&self) -> usize {
        self.cols as usize * self.rows as usize
    }
}

/// Which parts of the arena are lit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LightingData {
    Uniform(bool),
    /// Top-left, top-right, bottom-left, bottom-right.
    Quadrants([bool; 4]),
}

impl Default for LightingData {
    fn default() -> Self {
        LightingData::Uniform(true)
    }
}
