//! Combat states and the mutable per-character runtime.
//!
//! A character kind is a [`StateSet`]: a closed enum of animation/behavior
//! modes plus a flag table describing what each mode implies (airborne,
//! attacking, hit reaction, defeat). The engine is generic over the set, so the
//! player and every enemy share one state machine.
mod enemy;
mod kind;
mod player;
mod runtime;

pub use enemy::EnemyState;
pub use kind::{StateFlags, StateSet};
pub use player::PlayerState;
pub use runtime::{CharacterRuntime, DashWindow};
