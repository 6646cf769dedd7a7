//! Step orchestration for a brawler encounter.
//!
//! This crate binds combat machines from `brawl-core` to physics bodies and
//! drives them one simulation step at a time. Consumers assemble an [`Arena`]
//! and call [`Arena::step`] with their physics, input, presentation and
//! lifecycle collaborators.
//!
//! Modules are organized by responsibility:
//! - [`arena`] hosts the step driver and builder
//! - [`api`] exposes the collaborator traits and error types
//! - [`event`] describes what happened during a step
pub mod api;
pub mod arena;
pub mod event;

pub use api::{
    InputSource, Lifecycle, NullPresenter, PhysicsBackend, Presenter, Result, RuntimeError,
};
pub use arena::{Arena, ArenaBuilder, StepReport};
pub use event::ArenaEvent;
