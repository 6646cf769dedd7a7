//! Public runtime API surface.
//!
//! This module gathers the types exposed to consumers of the runtime crate so
//! the arena can stay focused on step orchestration.

pub mod collaborators;
pub mod errors;

pub use collaborators::{InputSource, Lifecycle, NullPresenter, PhysicsBackend, Presenter};
pub use errors::{Result, RuntimeError};
