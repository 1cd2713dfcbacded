//! Level file loader.
//!
//! Parses a RON level description and checks the cross-references serde
//! cannot: grid tile counts and unique snake ids. Per-snake validation is left
//! to `SnakeSpec::spawn`.

use std::collections::HashSet;
use std::path::Path;

use crate::level::LevelData;
use crate::loaders::{LoadResult, read_file};

/// Loader for level layouts from RON files.
///
/// Example:
/// ```ron
/// (
///     name: "cellar",
///     walls: [(x: 200.0, y: 0.0, width: 20.0, height: 300.0)],
///     snakes: [
///         (
///             id: 1,
///             position: (x: 40.0, y: 40.0),
///             size: (width: 20.0, height: 20.0),
///             speed: 60.0,
///             senses: (sight_range: 150.0, hearing_range: 0.0),
///             behavior: guard(patrol: Some([(x: 40.0, y: 40.0), (x: 40.0, y: 400.0)])),
///         ),
///     ],
/// )
/// ```
pub struct LevelLoader;

impl LevelLoader {
    /// Load a level from a RON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the RON file containing LevelData
    pub fn load(path: &Path) -> LoadResult<LevelData> {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Invalid level {}: {}", path.display(), e))
    }

    pub fn parse(content: &str) -> LoadResult<LevelData> {
        let level: LevelData = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level RON: {}", e))?;
        Self::validate(&level)?;
        Ok(level)
    }

    fn validate(level: &LevelData) -> LoadResult<()> {
        let bounds = level.bounds;
        if !bounds.width.is_finite()
            || !bounds.height.is_finite()
            || bounds.width <= 0.0
            || bounds.height <= 0.0
        {
            anyhow::bail!(
                "arena bounds {}x{} must be positive",
                bounds.width,
                bounds.height
            );
        }

        let mut seen = HashSet::new();
        for spec in &level.snakes {
            if !seen.insert(spec.id) {
                anyhow::bail!("duplicate snake id {}", spec.id);
            }
        }

        if let Some(grid) = &level.grid {
            if !grid.tile_size.is_finite() || grid.tile_size <= 0.0 {
                anyhow::bail!("tile_size {} must be positive", grid.tile_size);
            }
            if grid.tiles.len() != grid.expected_tiles() {
                anyhow::bail!(
                    "grid {}x{} needs {} tiles, found {}",
                    grid.cols,
                    grid.rows,
                    grid.expected_tiles(),
                    grid.tiles.len()
                );
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::level::LightingData;
    use snake_core::{Activation, BehaviorSpec, Openings, SnakeId, Vec2};
    use std::io::Write;

    const CELLAR: &str = r#"(
        name: "cellar",
        index: 2,
        walls: [(x: 200.0, y: 0.0, width: 20.0, height: 300.0)],
        snakes: [
            (
                id: 1,
                position: (x: 40.0, y: 40.0),
                size: (width: 20.0, height: 20.0),
                speed: 60.0,
                senses: (sight_range: 150.0, hearing_range: 0.0),
                behavior: guard(patrol: Some([(x: 40.0, y: 40.0), (x: 40.0, y: 400.0)])),
            ),
            (
                id: 2,
                position: (x: 300.0, y: 300.0),
                size: (width: 20.0, height: 20.0),
                speed: 40.0,
                activation: DuringPhase("blackout"),
                behavior: photophobic,
            ),
        ],
        lighting: Quadrants([true, false, true, true]),
    )"#;

    #[test]
    fn parses_a_full_level() {
        let level = LevelLoader::parse(CELLAR).expect("valid level");
        assert_eq!(level.name, "cellar");
        assert_eq!(level.index, 2);
        assert_eq!(level.walls.len(), 1);
        assert_eq!(level.snakes.len(), 2);
        assert_eq!(level.snakes[0].id, SnakeId(1));
        assert_eq!(
            level.snakes[0].behavior,
            BehaviorSpec::Guard {
                patrol: Some(vec![Vec2::new(40.0, 40.0), Vec2::new(40.0, 400.0)])
            }
        );
        assert_eq!(
            level.snakes[1].activation,
            Activation::DuringPhase("blackout".into())
        );
        assert_eq!(
            level.lighting,
            LightingData::Quadrants([true, false, true, true])
        );
        assert!(level.light.is_none());
        assert!(level.grid.is_none());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let level = r#"(
            name: "twins",
            snakes: [
                (id: 7, position: (x: 0.0, y: 0.0), size: (width: 10.0, height: 10.0), speed: 1.0, behavior: boss),
                (id: 7, position: (x: 50.0, y: 0.0), size: (width: 10.0, height: 10.0), speed: 1.0, behavior: boss),
            ],
        )"#;
        let err = LevelLoader::parse(level).expect_err("duplicate ids");
        assert!(err.to_string().contains("duplicate snake id #7"));
    }

    #[test]
    fn rejects_short_grids() {
        let level = r#"(
            name: "pipes",
            grid: Some((tile_size: 40.0, cols: 2, rows: 2, tiles: ["NORTH | SOUTH"])),
        )"#;
        let err = LevelLoader::parse(level).expect_err("short grid");
        assert!(err.to_string().contains("needs 4 tiles, found 1"));
    }

    #[test]
    fn parses_grid_openings() {
        let level = r#"(
            name: "pipes",
            grid: Some((tile_size: 40.0, cols: 2, rows: 1, tiles: ["EAST", "WEST | SOUTH"])),
        )"#;
        let grid = LevelLoader::parse(level)
            .expect("valid grid")
            .grid
            .expect("grid present");
        assert_eq!(grid.tiles, vec![Openings::EAST, Openings::WEST | Openings::SOUTH]);
        assert_eq!(grid.origin, Vec2::ZERO);
    }

    #[test]
    fn load_reports_the_file() {
        let mut file = tempfile::NamedTempFile::new().expect("temp file");
        write!(file, "(name: \"broken\", bounds: (width: 0.0, height: 10.0))").expect("write level");
        let err = LevelLoader::load(file.path()).expect_err("zero-width arena");
        let message = err.to_string();
        assert!(message.contains("Invalid level"));
        assert!(message.contains("must be positive"));
    }
}
