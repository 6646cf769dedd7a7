//! Immutable per-character-type configuration.
//!
//! A [`CharacterProfile`] bundles everything that distinguishes one kind of
//! fighter from another: its animation tracks, hitbox schedule, transition
//! table, stats and damage rules. Profiles are validated once by
//! [`ProfileBuilder::build`] and shared read-only between instances.
mod error;

pub use error::ConfigError;

use std::collections::BTreeMap;

use crate::anim::{AnimationSet, AnimationTrack};
use crate::env::ColliderTag;
use crate::hitbox::{Hitbox, HitboxSchedule};
use crate::state::StateSet;

/// Numeric tuning of a character kind.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stats {
    pub max_health: u32,
    /// Horizontal speed while walking, in world units per second.
    pub walk_speed: f32,
    /// Horizontal distance at which an enemy notices its target.
    #[cfg_attr(feature = "serde", serde(default))]
    pub detection_range: f32,
}

impl Default for Stats {
    fn default() -> Self {
        Self {
            max_health: 3,
            walk_speed: 2.0,
            detection_range: 0.0,
        }
    }
}

/// How a landed hit affects health.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HealthModel {
    /// Each hit removes one point; reaching zero plays the defeat sequence.
    Tracked,
    /// Hits only play the hit reaction; health is never reduced.
    ReactionOnly,
}

/// When invulnerability granted by a hit reaction ends.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InvulnerabilityRelease {
    /// Cleared as soon as the hit reaction's frame index reaches `n`.
    AfterFrames(usize),
    /// Held for the whole hit reaction.
    OnExit,
}

/// Damage intake rules of a character kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRules {
    /// Collider tag that hurts this character.
    pub hostile: ColliderTag,
    pub health: HealthModel,
    pub release: InvulnerabilityRelease,
    /// Turn toward the attacker when hit.
    pub face_attacker: bool,
    /// Request a hit tint for the duration of the invulnerability.
    pub tint_on_hit: bool,
    /// Request a cosmetic hit effect at the impact point.
    pub spawn_hit_effect: bool,
}

impl DamageRules {
    pub const fn player() -> Self {
        Self {
            hostile: ColliderTag::EnemyAttack,
            health: HealthModel::ReactionOnly,
            release: InvulnerabilityRelease::OnExit,
            face_attacker: true,
            tint_on_hit: false,
            spawn_hit_effect: false,
        }
    }

    pub const fn enemy() -> Self {
        Self {
            hostile: ColliderTag::PlayerAttack,
            health: HealthModel::Tracked,
            release: InvulnerabilityRelease::AfterFrames(1),
            face_attacker: false,
            tint_on_hit: true,
            spawn_hit_effect: true,
        }
    }
}

/// Where completed sequences lead.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable<S: StateSet> {
    combos: BTreeMap<S, S>,
    completions: BTreeMap<S, S>,
}

impl<S: StateSet> TransitionTable<S> {
    pub fn new() -> Self {
        Self {
            combos: BTreeMap::new(),
            completions: BTreeMap::new(),
        }
    }

    /// Follow-up entered when `state` completes with an attack buffered.
    pub fn combo_from(&self, state: S) -> Option<S> {
        self.combos.get(&state).copied()
    }

    /// Target entered when `state` completes without a combo. Defaults to idle.
    pub fn completion_target(&self, state: S) -> S {
        self.completions.get(&state).copied().unwrap_or(S::IDLE)
    }

    pub fn combos(&self) -> impl Iterator<Item = (S, S)> + '_ {
        self.combos.iter().map(|(from, to)| (*from, *to))
    }
}

impl<S: StateSet> Default for TransitionTable<S> {
    fn default() -> Self {
        Self::new()
    }
}

/// Validated, immutable configuration of one character kind.
#[derive(Clone, Debug, PartialEq)]
pub struct CharacterProfile<S: StateSet> {
    name: String,
    tracks: AnimationSet<S>,
    hitboxes: HitboxSchedule<S>,
    transitions: TransitionTable<S>,
    stats: Stats,
    damage: DamageRules,
}

impl<S: StateSet> CharacterProfile<S> {
    pub fn builder(name: impl Into<String>) -> ProfileBuilder<S> {
        ProfileBuilder::new(name)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn tracks(&self) -> &AnimationSet<S> {
        &self.tracks
    }

    pub fn track(&self, state: S) -> Option<&AnimationTrack> {
        self.tracks.get(state)
    }

    pub fn hitboxes(&self) -> &HitboxSchedule<S> {
        &self.hitboxes
    }

    pub fn transitions(&self) -> &TransitionTable<S> {
        &self.transitions
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn damage(&self) -> &DamageRules {
        &self.damage
    }
}

/// Builder for [`CharacterProfile`]; all checks run in [`build`](Self::build).
#[derive(Clone, Debug)]
pub struct ProfileBuilder<S: StateSet> {
    name: String,
    tracks: AnimationSet<S>,
    hitboxes: Vec<(S, usize, Hitbox)>,
    transitions: TransitionTable<S>,
    stats: Stats,
    damage: Option<DamageRules>,
}

impl<S: StateSet> ProfileBuilder<S> {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tracks: AnimationSet::new(),
            hitboxes: Vec::new(),
            transitions: TransitionTable::new(),
            stats: Stats::default(),
            damage: None,
        }
    }

    pub fn track(mut self, state: S, track: AnimationTrack) -> Self {
        self.tracks.insert(state, track);
        self
    }

    pub fn hitbox(mut self, state: S, frame: usize, hitbox: Hitbox) -> Self {
        self.hitboxes.push((state, frame, hitbox));
        self
    }

    /// Buffered attack during `from` chains into `to` when `from` completes.
    pub fn combo(mut self, from: S, to: S) -> Self {
        self.transitions.combos.insert(from, to);
        self
    }

    /// Completed `from` leads to `to` instead of idle.
    pub fn complete_to(mut self, from: S, to: S) -> Self {
        self.transitions.completions.insert(from, to);
        self
    }

    pub fn stats(mut self, stats: Stats) -> Self {
        self.stats = stats;
        self
    }

    pub fn damage(mut self, rules: DamageRules) -> Self {
        self.damage = Some(rules);
        self
    }

    pub fn build(self) -> Result<CharacterProfile<S>, ConfigError> {
        let damage = self.damage.unwrap_or_else(|| {
            if S::DEFEAT.is_some() {
                DamageRules::enemy()
            } else {
                DamageRules::player()
            }
        });

        validate_stats(&self.stats)?;

        for state in S::required() {
            if !self.tracks.contains(*state) {
                return Err(ConfigError::MissingTrack {
                    state: state.to_string(),
                });
            }
        }
        for (state, track) in self.tracks.iter() {
            track.validate(state)?;
        }

        let mut hitboxes = HitboxSchedule::new();
        for (state, frame, hitbox) in self.hitboxes {
            let Some(track) = self.tracks.get(state) else {
                return Err(ConfigError::HitboxWithoutTrack {
                    state: state.to_string(),
                });
            };
            if frame >= track.len() {
                return Err(ConfigError::HitboxFrameOutOfRange {
                    state: state.to_string(),
                    frame,
                    len: track.len(),
                });
            }
            hitboxes.insert(state, frame, hitbox);
        }

        for (from, to) in self.transitions.combos() {
            if !self.tracks.contains(from) || !self.tracks.contains(to) {
                return Err(ConfigError::UnknownComboTarget {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
        }
        for (from, to) in &self.transitions.completions {
            if !self.tracks.contains(*to) {
                return Err(ConfigError::UnknownCompletionTarget {
                    from: from.to_string(),
                    to: to.to_string(),
                });
            }
        }

        if damage.health == HealthModel::Tracked {
            match S::DEFEAT {
                Some(defeat) if self.tracks.contains(defeat) => {}
                Some(defeat) => {
                    return Err(ConfigError::MissingTrack {
                        state: defeat.to_string(),
                    });
                }
                None => {
                    return Err(ConfigError::MissingDefeatState { profile: self.name });
                }
            }
        }

        Ok(CharacterProfile {
            name: self.name,
            tracks: self.tracks,
            hitboxes,
            transitions: self.transitions,
            stats: self.stats,
            damage,
        })
    }
}

fn validate_stats(stats: &Stats) -> Result<(), ConfigError> {
    if stats.max_health == 0 {
        return Err(ConfigError::InvalidHealth);
    }
    for (field, value) in [
        ("walk_speed", stats.walk_speed),
        ("detection_range", stats.detection_range),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(ConfigError::InvalidSpeed { field, value });
        }
    }
    Ok(())
}
