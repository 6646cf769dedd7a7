//! Data-driven character content and loaders.
//!
//! This crate houses the built-in character profiles and provides loaders for
//! RON/TOML data files:
//! - Character profiles: animation tracks, hitbox schedule, combos, stats
//!   and damage rules (data-driven via RON)
//! - Combat tuning (data-driven via TOML)
//!
//! Loaded profiles are validated by `brawl-core` before they are returned, so
//! a profile that reaches the runtime can always be animated.

pub mod presets;

#[cfg(feature = "loaders")]
pub mod loaders;

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, ContentFactory, HitboxSpec, ProfileLoader, ProfileSpec, TrackSpec};
