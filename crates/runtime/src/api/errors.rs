//! Unified error types surfaced by the runtime API.
//!
//! Stepping never fails: per-character problems are logged and skipped. These
//! errors come from assembling an [`Arena`](crate::Arena).
use brawl_core::BodyId;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum RuntimeError {
    #[error("arena requires a player before building")]
    MissingPlayer,

    #[error("{body} is bound to more than one character")]
    DuplicateBody { body: BodyId },
}
