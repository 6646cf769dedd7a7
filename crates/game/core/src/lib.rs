//! Frame-driven animation and melee combat rules shared by every fighter.
//!
//! `brawl-core` owns the per-character state machine: which frame sequence is
//! playing, when frames advance, when a sequence loops, freezes or hands off to
//! the next state, when the melee hitbox is armed, and how incoming hits and
//! buffered inputs reshape the next transition. All mutation flows through
//! [`engine::CombatMachine::advance`], one call per simulation step.
//!
//! Rendering, physics, raw input polling and object cleanup are collaborators.
//! They feed the machine through [`engine::StepInput`] and consume the
//! side-effect requests carried by [`engine::StepOutcome`].
pub mod anim;
pub mod combat;
pub mod config;
pub mod engine;
pub mod env;
pub mod error;
pub mod geometry;
pub mod hitbox;
pub mod input;
pub mod profile;
pub mod state;

pub use anim::{AnimationSet, AnimationTrack, CompletionPolicy, FrameClock};
pub use combat::{DamageResolver, Hit};
pub use config::CombatConfig;
pub use engine::{
    Brain, CombatMachine, DecideContext, Decision, EnemyBrain, EnemyMachine, HitboxCommand,
    InvariantViolation, Motion, PlayerBrain, PlayerMachine, Request, SpriteFrame, StepInput,
    StepOutcome, Tint, Transition, TransitionCause,
};
pub use env::{BodyId, ColliderId, ColliderTag, EmptyWorld, Overlap, WorldQuery, touching_surface};
pub use error::{CombatError, ErrorSeverity};
pub use geometry::{Facing, Vec2};
pub use hitbox::{Hitbox, HitboxSchedule};
pub use input::{Control, Direction, IntentCollector, Intents, RawInput};
pub use profile::{
    CharacterProfile, ConfigError, DamageRules, HealthModel, InvulnerabilityRelease,
    ProfileBuilder, Stats, TransitionTable,
};
pub use state::{CharacterRuntime, DashWindow, EnemyState, PlayerState, StateFlags, StateSet};
