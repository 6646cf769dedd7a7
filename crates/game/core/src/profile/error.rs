//! Profile validation errors.

use crate::error::{CombatError, ErrorSeverity};

/// Defects found while building a [`CharacterProfile`](super::CharacterProfile).
///
/// All of them are raised at load time so that no character can reach frame
/// advance with an unusable track.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A state every profile of this kind must provide has no track.
    #[error("missing frame sequence for reachable state '{state}'")]
    MissingTrack { state: String },

    /// A track has no frames.
    #[error("frame sequence for state '{state}' is empty")]
    EmptySequence { state: String },

    /// A frame duration that would never advance, or advance forever.
    #[error("state '{state}' has invalid seconds-per-frame {seconds}")]
    InvalidFrameDuration { state: String, seconds: f32 },

    /// A hitbox is scheduled on a frame the track does not have.
    #[error("hitbox scheduled on frame {frame} of '{state}', which has only {len} frames")]
    HitboxFrameOutOfRange {
        state: String,
        frame: usize,
        len: usize,
    },

    /// A hitbox is scheduled for a state without a track.
    #[error("hitbox scheduled for state '{state}', which has no frame sequence")]
    HitboxWithoutTrack { state: String },

    /// A combo link names a state without a track.
    #[error("combo link '{from}' -> '{to}' references a state without a frame sequence")]
    UnknownComboTarget { from: String, to: String },

    /// A completion override names a state without a track.
    #[error("completion of '{from}' targets '{to}', which has no frame sequence")]
    UnknownCompletionTarget { from: String, to: String },

    /// Numeric health tracking on a kind that has no defeat state.
    #[error("profile '{profile}' tracks health but its character kind has no defeat state")]
    MissingDefeatState { profile: String },

    #[error("max health must be at least 1")]
    InvalidHealth,

    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidSpeed { field: &'static str, value: f32 },
}

impl CombatError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidHealth | Self::InvalidSpeed { .. } => ErrorSeverity::Validation,
            _ => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::MissingTrack { .. } => "CONFIG_MISSING_TRACK",
            Self::EmptySequence { .. } => "CONFIG_EMPTY_SEQUENCE",
            Self::InvalidFrameDuration { .. } => "CONFIG_INVALID_FRAME_DURATION",
            Self::HitboxFrameOutOfRange { .. } => "CONFIG_HITBOX_FRAME_OUT_OF_RANGE",
            Self::HitboxWithoutTrack { .. } => "CONFIG_HITBOX_WITHOUT_TRACK",
            Self::UnknownComboTarget { .. } => "CONFIG_UNKNOWN_COMBO_TARGET",
            Self::UnknownCompletionTarget { .. } => "CONFIG_UNKNOWN_COMPLETION_TARGET",
            Self::MissingDefeatState { .. } => "CONFIG_MISSING_DEFEAT_STATE",
            Self::InvalidHealth => "CONFIG_INVALID_HEALTH",
            Self::InvalidSpeed { .. } => "CONFIG_INVALID_SPEED",
        }
    }
}
