//! Character profile loader.
//!
//! Profiles name states by their snake_case identifiers (`"punch1"`,
//! `"air_kick"`) so one file format serves every character kind. Names are
//! resolved against the requested state set at load time.

use std::collections::BTreeMap;
use std::path::Path;
use std::str::FromStr;

use brawl_core::{
    AnimationTrack, CharacterProfile, CombatError, CompletionPolicy, DamageRules, Hitbox,
    StateSet, Stats, Vec2,
};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Frame sequence of one state as written in a profile file.
///
/// Either list `frames` explicitly (repeat a key to hold it longer) or use
/// `numbered: Some(("prefix", count))` for `prefix_0 .. prefix_{count-1}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrackSpec {
    #[serde(default)]
    pub frames: Vec<String>,
    #[serde(default)]
    pub numbered: Option<(String, usize)>,
    pub seconds_per_frame: f32,
    pub policy: CompletionPolicy,
}

/// Hitbox entry as written in a profile file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HitboxSpec {
    pub state: String,
    pub frame: usize,
    pub offset: Vec2,
    pub size: Vec2,
}

/// On-disk shape of a [`CharacterProfile`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProfileSpec {
    pub name: String,
    #[serde(default)]
    pub stats: Stats,
    /// Defaults to the rules of the character kind when omitted.
    #[serde(default)]
    pub damage: Option<DamageRules>,
    pub tracks: BTreeMap<String, TrackSpec>,
    #[serde(default)]
    pub hitboxes: Vec<HitboxSpec>,
    /// `(from, to)` pairs: a buffered attack during `from` chains into `to`.
    #[serde(default)]
    pub combos: Vec<(String, String)>,
    /// `(from, to)` pairs overriding the idle completion target.
    #[serde(default)]
    pub completions: Vec<(String, String)>,
}

impl ProfileSpec {
    /// Resolves state names and validates the result.
    pub fn resolve<S>(self) -> LoadResult<CharacterProfile<S>>
    where
        S: StateSet + FromStr,
    {
        let name = self.name;
        let state = |raw: &str| -> LoadResult<S> {
            raw.parse::<S>().map_err(|_| {
                anyhow::anyhow!("Unknown state '{}' in profile '{}'", raw, name)
            })
        };

        let mut builder = CharacterProfile::builder(name.clone()).stats(self.stats);
        if let Some(damage) = self.damage {
            builder = builder.damage(damage);
        }

        for (raw, spec) in self.tracks {
            let track = spec.into_track().map_err(|e| {
                anyhow::anyhow!("Invalid track '{}' in profile '{}': {}", raw, name, e)
            })?;
            builder = builder.track(state(&raw)?, track);
        }
        for hitbox in self.hitboxes {
            builder = builder.hitbox(
                state(&hitbox.state)?,
                hitbox.frame,
                Hitbox::new(hitbox.offset, hitbox.size),
            );
        }
        for (from, to) in self.combos {
            builder = builder.combo(state(&from)?, state(&to)?);
        }
        for (from, to) in self.completions {
            builder = builder.complete_to(state(&from)?, state(&to)?);
        }

        builder
            .build()
            .map_err(|e| {
                anyhow::anyhow!(
                    "Invalid profile '{}': {} [{}, {}]",
                    name,
                    e,
                    e.error_code(),
                    e.severity().as_str()
                )
            })
    }
}

impl TrackSpec {
    fn into_track(self) -> LoadResult<AnimationTrack> {
        match (self.numbered, self.frames.is_empty()) {
            (Some(_), false) => {
                anyhow::bail!("set either `frames` or `numbered`, not both")
            }
            (Some((prefix, count)), true) => Ok(AnimationTrack::numbered(
                &prefix,
                count,
                self.seconds_per_frame,
                self.policy,
            )),
            (None, _) => Ok(AnimationTrack::new(
                self.frames,
                self.seconds_per_frame,
                self.policy,
            )),
        }
    }
}

/// Loader for character profiles from RON files.
pub struct ProfileLoader;

impl ProfileLoader {
    /// Load and validate a profile for the character kind `S`.
    pub fn load<S>(path: &Path) -> LoadResult<CharacterProfile<S>>
    where
        S: StateSet + FromStr,
    {
        let content = read_file(path)?;
        Self::parse(&content)
            .map_err(|e| anyhow::anyhow!("Failed to load profile {}: {}", path.display(), e))
    }

    pub fn parse<S>(content: &str) -> LoadResult<CharacterProfile<S>>
    where
        S: StateSet + FromStr,
    {
        let spec: ProfileSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse profile RON: {}", e))?;
        spec.resolve()
    }
}
