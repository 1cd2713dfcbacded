//! AI tuning loader.

use std::path::Path;

use snake_core::AiConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for AI tuning from TOML files.
///
/// Keys missing from the file keep their `AiConfig` defaults.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing AiConfig overrides
    pub fn load(path: &Path) -> LoadResult<AiConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<AiConfig> {
        let config: AiConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;

        for (name, value) in [
            ("lost_sight_grace", config.lost_sight_grace),
            ("search_duration", config.search_duration),
            ("dash_duration", config.dash_duration),
            ("plumber_rotation_min", config.plumber_rotation_min),
            ("plumber_rotation_max", config.plumber_rotation_max),
            ("avoidance_step", config.avoidance_step),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!("Config value {} must be non-negative, got {}", name, value);
            }
        }
        if config.plumber_rotation_min > config.plumber_rotation_max {
            anyhow::bail!(
                "plumber_rotation_min ({}) exceeds plumber_rotation_max ({})",
                config.plumber_rotation_min,
                config.plumber_rotation_max
            );
        }

        Ok(config)
    }
}
