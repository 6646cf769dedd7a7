//! Frame playback: the per-step clock and the per-state track table.
mod clock;
mod track;

pub use clock::FrameClock;
pub use track::{AnimationSet, AnimationTrack, CompletionPolicy};
