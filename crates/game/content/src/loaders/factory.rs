//! Content factory for building profiles and tuning from data files.

use std::path::{Path, PathBuf};

use brawl_core::{CharacterProfile, CombatConfig, EnemyState, PlayerState};

use crate::loaders::{ConfigLoader, LoadResult, ProfileLoader};

/// Content factory that loads all character content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── combat.toml
/// ├── player.ron
/// └── enemies/
///     └── chow_mein.ron
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

    /// Factory over the data files shipped with this crate.
    pub fn bundled() -> Self {
        Self::new(Path::new(env!("CARGO_MANIFEST_DIR")).join("data"))
    }

    /// Load combat tuning from `combat.toml`.
    pub fn load_config(&self) -> LoadResult<CombatConfig> {
        let path = self.data_dir.join("combat.toml");
        ConfigLoader::load(&path)
    }

    /// Load the player profile from `player.ron`.
    pub fn load_player(&self) -> LoadResult<CharacterProfile<PlayerState>> {
        let path = self.data_dir.join("player.ron");
        ProfileLoader::load(&path)
    }

    /// Load an enemy profile from `enemies/{name}.ron`.
    pub fn load_enemy(&self, name: &str) -> LoadResult<CharacterProfile<EnemyState>> {
        let path = self.data_dir.join("enemies").join(format!("{}.ron", name));
        ProfileLoader::load(&path)
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data");
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
    }
}
