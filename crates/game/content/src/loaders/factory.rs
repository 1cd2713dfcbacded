//! Content factory for loading a level pack from a data directory.

use std::path::{Path, PathBuf};

use snake_core::AiConfig;

use crate::level::LevelData;
use crate::loaders::{ConfigLoader, LevelLoader, LoadResult};

/// Content factory that loads levels and tuning from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── ai.toml          (optional)
/// └── levels/
///     ├── cellar.ron
///     └── mirrors.ron
/// ```
pub struct ContentFactory {
    data_dir: PathBuf,
}

impl ContentFactory {
    /// Creates a new content factory pointing to a data directory.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    /// Load AI tuning from `ai.toml`, falling back to defaults when absent.
    pub fn load_config(&self) -> LoadResult<AiConfig> {
        let path = self.data_dir.join("ai.toml");
        if !path.exists() {
            return Ok(AiConfig::default());
        }
        ConfigLoader::load(&path)
    }

    /// Load a level from `levels/{level_name}.ron`.
    pub fn load_level(&self, level_name: &str) -> LoadResult<LevelData> {
        let path = self
            .data_dir
            .join("levels")
            .join(format!("{}.ron", level_name));
        LevelLoader::load(&path)
    }

    /// Names of every level in `levels/`, sorted.
    pub fn level_names(&self) -> LoadResult<Vec<String>> {
        let dir = self.data_dir.join("levels");
        let entries = std::fs::read_dir(&dir)
            .map_err(|e| anyhow::anyhow!("Failed to list {}: {}", dir.display(), e))?;

        let mut names = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().is_none_or(|ext| ext != "ron") {
                continue;
            }
            if let Some(stem) = path.file_stem().and_then(|stem| stem.to_str()) {
                names.push(stem.to_owned());
            }
        }
        names.sort();
        Ok(names)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}
