use std::fmt::{Debug, Display};
use std::hash::Hash;

use bitflags::bitflags;

bitflags! {
    /// Per-state flags recomputed on every state entry.
    ///
    /// Using bitflags keeps the state → flags table a single `match` per kind
    /// and makes "is this state interruptible" a one-bit test.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
    pub struct StateFlags: u8 {
        /// Character is off the ground.
        const AIRBORNE     = 1 << 0;
        /// Character is committed to an attack; new movement/attack intents
        /// are ignored and only buffered.
        const ATTACKING    = 1 << 1;
        /// Hit reaction; intents are ignored until the sequence completes.
        const HIT_REACTION = 1 << 2;
        /// Defeat sequence; completing it destroys the character.
        const DEFEAT       = 1 << 3;
    }
}

impl StateFlags {
    /// States that ignore every movement and attack intent.
    #[inline]
    pub fn is_locked(self) -> bool {
        self.intersects(Self::HIT_REACTION | Self::DEFEAT)
    }
}

/// Closed set of combat states for one character kind.
pub trait StateSet: Copy + Eq + Ord + Hash + Debug + Display + 'static {
    /// Spawn state and default target of completed sequences.
    const IDLE: Self;
    /// State entered when a hit lands and the character survives.
    const HIT_REACTION: Self;
    /// State entered when health reaches zero, if the kind can be defeated.
    const DEFEAT: Option<Self>;

    /// Flags implied by being in `self`.
    fn flags(self) -> StateFlags;

    /// States every profile of this kind must provide an animation track for.
    ///
    /// States outside this list are optional; transitions into an optional
    /// state without a track are skipped.
    fn required() -> &'static [Self];
}
