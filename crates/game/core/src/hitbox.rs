//! Per-frame melee hitbox placement.
//!
//! The schedule maps `(state, frame index)` to a local placement authored for
//! a right-facing character. Frames without an entry disarm the hitbox. Keying
//! by state and frame means a character can never have two hitboxes armed in
//! the same step.
use std::collections::BTreeMap;

use crate::geometry::{Facing, Vec2};
use crate::state::StateSet;

/// Local placement of the melee collider.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Hitbox {
    /// Offset from the body origin, authored facing right.
    pub offset: Vec2,
    pub size: Vec2,
}

impl Hitbox {
    pub const fn new(offset: Vec2, size: Vec2) -> Self {
        Self { offset, size }
    }

    /// Placement for `facing`: X offset negated when facing left, size kept.
    pub fn mirrored(self, facing: Facing) -> Self {
        Self {
            offset: Vec2::new(self.offset.x * facing.sign(), self.offset.y),
            size: self.size,
        }
    }
}

/// Immutable `(state, frame) → hitbox` table of one character kind.
#[derive(Clone, Debug, PartialEq)]
pub struct HitboxSchedule<S: StateSet> {
    entries: BTreeMap<(S, usize), Hitbox>,
}

impl<S: StateSet> HitboxSchedule<S> {
    pub fn new() -> Self {
        Self {
            entries: BTreeMap::new(),
        }
    }

    /// Hitbox armed on `frame` of `state`, mirrored for `facing`.
    pub fn lookup(&self, state: S, frame: usize, facing: Facing) -> Option<Hitbox> {
        self.entries
            .get(&(state, frame))
            .map(|hitbox| hitbox.mirrored(facing))
    }

    /// Frames of `state` that arm the hitbox, in ascending order.
    pub fn active_frames(&self, state: S) -> impl Iterator<Item = usize> + '_ {
        self.entries
            .keys()
            .filter(move |(s, _)| *s == state)
            .map(|(_, frame)| *frame)
    }

    pub fn iter(&self) -> impl Iterator<Item = (S, usize, Hitbox)> + '_ {
        self.entries
            .iter()
            .map(|((state, frame), hitbox)| (*state, *frame, *hitbox))
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub(crate) fn insert(&mut self, state: S, frame: usize, hitbox: Hitbox) {
        self.entries.insert((state, frame), hitbox);
    }
}

impl<S: StateSet> Default for HitboxSchedule<S> {
    fn default() -> Self {
        Self::new()
    }
}
