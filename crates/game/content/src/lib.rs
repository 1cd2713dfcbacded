//! Data-driven level definitions and loaders.
//!
//! This crate describes levels as plain data and provides loaders for RON/TOML files:
//! - Level layouts: arena bounds, walls, snakes, light puzzle, pipe grid, lighting (RON)
//! - AI tuning overrides (TOML)
//!
//! Content is consumed by the runtime, which turns it into live snakes and
//! capability oracles. Snake validation happens at spawn time in `snake-core`.

pub mod level;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use level::{LevelData, LightingData, TileGridData};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, LevelLoader, LoadResult};
