//! Invariant violations detected while stepping a machine.

use crate::error::{CombatError, ErrorSeverity};

/// Internal inconsistencies the machine repairs on the spot.
///
/// These never abort a step. The machine clamps or skips, logs the violation
/// at `warn` level and carries on with the repaired value.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("frame index {index} out of bounds for '{state}' ({len} frames)")]
    FrameIndexOutOfBounds {
        state: String,
        index: usize,
        len: usize,
    },

    #[error("elapsed time {elapsed} is not a finite, non-negative number")]
    InvalidElapsed { elapsed: f32 },

    #[error("state '{state}' has no frame sequence")]
    UntrackedState { state: String },

    #[error("step outcome is full, dropped {what}")]
    OutcomeOverflow { what: &'static str },
}

impl CombatError for InvariantViolation {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UntrackedState { .. } => ErrorSeverity::Degraded,
            _ => ErrorSeverity::Internal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::FrameIndexOutOfBounds { .. } => "INVARIANT_FRAME_INDEX_OUT_OF_BOUNDS",
            Self::InvalidElapsed { .. } => "INVARIANT_INVALID_ELAPSED",
            Self::UntrackedState { .. } => "INVARIANT_UNTRACKED_STATE",
            Self::OutcomeOverflow { .. } => "INVARIANT_OUTCOME_OVERFLOW",
        }
    }
}
