//! Utility functions for snake-sim commands

use anyhow::{Context, Result};
use std::path::Path;

use snake_content::{ConfigLoader, LevelData, LevelLoader};
use snake_core::{AiConfig, Vec2};

/// Parses `X,Y` into a point. Used as a clap value parser.
pub fn parse_point(raw: &str) -> std::result::Result<Vec2, String> {
    let (x, y) = raw
        .split_once(',')
        .ok_or_else(|| format!("expected X,Y but got '{raw}'"))?;
    let parse = |part: &str| {
        part.trim()
            .parse::<f32>()
            .map_err(|e| format!("invalid coordinate '{}': {}", part.trim(), e))
    };
    let point = Vec2::new(parse(x)?, parse(y)?);
    if !point.is_finite() {
        return Err(format!("coordinates must be finite: '{raw}'"));
    }
    Ok(point)
}

/// Loads a level and, when given, an AI tuning file.
pub fn load_level(level: &Path, config: Option<&Path>) -> Result<(LevelData, AiConfig)> {
    let data = LevelLoader::load(level)
        .with_context(|| format!("Failed to load level: {}", level.display()))?;
    let ai = match config {
        Some(path) => ConfigLoader::load(path)
            .with_context(|| format!("Failed to load AI config: {}", path.display()))?,
        None => AiConfig::default(),
    };
    Ok((data, ai))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_points() {
        assert_eq!(parse_point("12.5, -3"), Ok(Vec2::new(12.5, -3.0)));
        assert!(parse_point("12").is_err());
        assert!(parse_point("a,b").is_err());
        assert!(parse_point("inf,0").is_err());
    }
}
