//! Combat tuning loader.

use std::path::Path;

use brawl_core::CombatConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for combat tuning from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load combat tuning from a TOML file.
    ///
    /// Missing keys fall back to the [`CombatConfig`] defaults.
    pub fn load(path: &Path) -> LoadResult<CombatConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<CombatConfig> {
        let config: CombatConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse combat config TOML: {}", e))?;

        for (field, value) in [
            ("dash_window", config.dash_window),
            ("dash_multiplier", config.dash_multiplier),
            ("jump_speed", config.jump_speed),
        ] {
            if !value.is_finite() || value < 0.0 {
                anyhow::bail!(
                    "Invalid combat config: {} must be non-negative (got {})",
                    field,
                    value
                );
            }
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_keys_use_defaults() {
        let config = ConfigLoader::parse("jump_speed = 6.5\n").unwrap();
        assert_eq!(config.jump_speed, 6.5);
        assert_eq!(config.dash_window, CombatConfig::DEFAULT_DASH_WINDOW);
        assert_eq!(config.dash_multiplier, CombatConfig::DEFAULT_DASH_MULTIPLIER);
    }

    #[test]
    fn negative_values_are_rejected() {
        assert!(ConfigLoader::parse("dash_window = -0.1\n").is_err());
    }
}
