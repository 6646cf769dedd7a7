use std::collections::BTreeMap;
use std::sync::Arc;

use crate::profile::ConfigError;
use crate::state::StateSet;

/// What happens when a state's frame sequence reaches its end.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum CompletionPolicy {
    /// Wrap back to frame 0; never transitions on its own.
    Looping,
    /// Fire the terminal transition of the state.
    Sequence,
    /// Clamp at the final frame until an external event changes the state.
    HoldLastFrame,
}

/// Frame sequence, playback speed and completion policy of one state.
///
/// Frames are sprite keys resolved by the renderer. Repeating a key holds
/// that picture for an extra frame.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationTrack {
    frames: Vec<Arc<str>>,
    seconds_per_frame: f32,
    policy: CompletionPolicy,
}

impl AnimationTrack {
    pub fn new<I, K>(frames: I, seconds_per_frame: f32, policy: CompletionPolicy) -> Self
    where
        I: IntoIterator<Item = K>,
        K: Into<Arc<str>>,
    {
        Self {
            frames: frames.into_iter().map(Into::into).collect(),
            seconds_per_frame,
            policy,
        }
    }

    /// Track whose frames are `prefix_0 .. prefix_{count-1}`.
    pub fn numbered(
        prefix: &str,
        count: usize,
        seconds_per_frame: f32,
        policy: CompletionPolicy,
    ) -> Self {
        Self::new(
            (0..count).map(|i| format!("{prefix}_{i}")),
            seconds_per_frame,
            policy,
        )
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn last_index(&self) -> usize {
        self.frames.len().saturating_sub(1)
    }

    pub fn frames(&self) -> &[Arc<str>] {
        &self.frames
    }

    pub fn frame(&self, index: usize) -> Option<&Arc<str>> {
        self.frames.get(index)
    }

    pub fn seconds_per_frame(&self) -> f32 {
        self.seconds_per_frame
    }

    pub fn policy(&self) -> CompletionPolicy {
        self.policy
    }

    /// Seconds needed to play every frame once.
    pub fn duration(&self) -> f32 {
        self.seconds_per_frame * self.frames.len() as f32
    }

    pub(crate) fn validate<S: StateSet>(&self, state: S) -> Result<(), ConfigError> {
        if self.frames.is_empty() {
            return Err(ConfigError::EmptySequence {
                state: state.to_string(),
            });
        }
        if !self.seconds_per_frame.is_finite() || self.seconds_per_frame <= 0.0 {
            return Err(ConfigError::InvalidFrameDuration {
                state: state.to_string(),
                seconds: self.seconds_per_frame,
            });
        }
        Ok(())
    }
}

/// Animation track table of one character kind. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub struct AnimationSet<S: StateSet> {
    tracks: BTreeMap<S, AnimationTrack>,
}

impl<S: StateSet> AnimationSet<S> {
    pub fn new() -> Self {
        Self {
            tracks: BTreeMap::new(),
        }
    }

    pub fn get(&self, state: S) -> Option<&AnimationTrack> {
        self.tracks.get(&state)
    }

    pub fn contains(&self, state: S) -> bool {
        self.tracks.contains_key(&state)
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, &AnimationTrack)> {
        self.tracks.iter().map(|(state, track)| (*state, track))
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tracks.is_empty()
    }

    pub(crate) fn insert(&mut self, state: S, track: AnimationTrack) {
        self.tracks.insert(state, track);
    }
}

impl<S: StateSet> Default for AnimationSet<S> {
    fn default() -> Self {
        Self::new()
    }
}
