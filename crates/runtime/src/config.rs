//! Host settings for a simulation run.

use snake_core::AiConfig;

/// Environment variable that overrides the level seed.
pub const SEED_ENV_VAR: &str = "SNAKE_SEED";

#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    /// Seed for every random draw; combined with tick and snake id per draw.
    pub seed: u64,
    pub ai: AiConfig,
    /// Report `PlayerCaught` when a snake touches the player.
    pub contact_catch: bool,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            ai: AiConfig::default(),
            contact_catch: true,
        }
    }
}

impl SimConfig {
    /// Defaults, with the seed taken from `SNAKE_SEED` when it parses.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(seed) = std::env::var(SEED_ENV_VAR)
            .ok()
            .and_then(|raw| parse_seed(&raw))
        {
            config.seed = seed;
        }
        config
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    pub fn with_ai(mut self, ai: AiConfig) -> Self {
        self.ai = ai;
        self
    }
}

/// Accepts decimal or `0x`-prefixed hexadecimal.
fn parse_seed(raw: &str) -> Option<u64> {
    let raw = raw.trim();
    match raw.strip_prefix("0x").or_else(|| raw.strip_prefix("0X")) {
        Some(hex) => u64::from_str_radix(hex, 16).ok(),
        None => raw.parse().ok(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeds_parse_in_both_radixes() {
        assert_eq!(parse_seed("42"), Some(42));
        assert_eq!(parse_seed(" 0xff "), Some(255));
        assert_eq!(parse_seed("seed"), None);
    }
}
