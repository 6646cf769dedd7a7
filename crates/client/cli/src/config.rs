//! Simulation configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Settings for one headless encounter.
#[derive(Clone, Debug, PartialEq)]
pub struct SimConfig {
    pub steps: u32,
    pub step_seconds: f32,
    /// RON profile for the player. The built-in preset is used when unset.
    pub player_profile: Option<PathBuf>,
    /// RON profile shared by every enemy. The built-in preset is used when unset.
    pub enemy_profile: Option<PathBuf>,
    /// TOML combat tuning. Defaults are used when unset.
    pub combat_config: Option<PathBuf>,
    pub enemy_count: usize,
    /// Horizontal distance between the player and the first enemy, and
    /// between consecutive enemies.
    pub enemy_spacing: f32,
    /// Input tape file. A built-in demo tape is used when unset.
    pub script: Option<PathBuf>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            steps: 600,
            step_seconds: 1.0 / 60.0,
            player_profile: None,
            enemy_profile: None,
            combat_config: None,
            enemy_count: 1,
            enemy_spacing: 3.0,
            script: None,
        }
    }
}

impl SimConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `BRAWL_STEPS` - Number of simulation steps (default: 600)
    /// - `BRAWL_STEP_SECONDS` - Seconds per step (default: 1/60)
    /// - `BRAWL_PLAYER_PROFILE` - Player profile RON file (default: built-in preset)
    /// - `BRAWL_ENEMY_PROFILE` - Enemy profile RON file (default: built-in chow_mein)
    /// - `BRAWL_COMBAT_CONFIG` - Combat tuning TOML file (default: built-in values)
    /// - `BRAWL_ENEMY_COUNT` - Enemies placed in a row (default: 1)
    /// - `BRAWL_ENEMY_SPACING` - Gap between characters (default: 3.0)
    /// - `BRAWL_SCRIPT` - Input tape file (default: demo tape)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(steps) = read_env::<u32>("BRAWL_STEPS") {
            config.steps = steps;
        }
        if let Some(seconds) = read_env::<f32>("BRAWL_STEP_SECONDS")
            .filter(|seconds| seconds.is_finite() && *seconds > 0.0)
        {
            config.step_seconds = seconds;
        }
        config.player_profile = read_path("BRAWL_PLAYER_PROFILE");
        config.enemy_profile = read_path("BRAWL_ENEMY_PROFILE");
        config.combat_config = read_path("BRAWL_COMBAT_CONFIG");
        if let Some(count) = read_env::<usize>("BRAWL_ENEMY_COUNT") {
            config.enemy_count = count;
        }
        if let Some(spacing) = read_env::<f32>("BRAWL_ENEMY_SPACING") {
            config.enemy_spacing = spacing;
        }
        config.script = read_path("BRAWL_SCRIPT");

        config
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_path(key: &str) -> Option<PathBuf> {
    env::var_os(key)
        .filter(|value| !value.is_empty())
        .map(PathBuf::from)
}
