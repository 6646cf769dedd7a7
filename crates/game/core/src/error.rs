//! Common error infrastructure for brawl-core.
//!
//! Domain-specific errors live next to the code that raises them:
//! [`ConfigError`](crate::profile::ConfigError) is produced while a character
//! profile is built, [`InvariantViolation`](crate::engine::InvariantViolation)
//! is raised (and corrected in place) while a step runs.
//!
//! Configuration defects surface before any character becomes active. A step
//! never fails: the machine clamps or skips, logs the violation with its
//! [`CombatError::error_code`] and [`ErrorSeverity`], and carries on.

/// How much a violation costs the character it happened to.
///
/// Nothing here is retried. Load-time errors reject the profile; step-time
/// violations are repaired before the step returns.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The step went on without one of its effects.
    ///
    /// Example: a transition into a state with no frame sequence is skipped.
    Degraded,

    /// A tuning value is out of range.
    ///
    /// Examples: negative walk speed, zero max health
    Validation,

    /// The machine repaired an inconsistency in its own bookkeeping.
    ///
    /// Examples: frame index past the end of its sequence.
    Internal,

    /// The profile cannot be used at all.
    ///
    /// Examples: missing frame sequence for a required state
    Fatal,
}

impl ErrorSeverity {
    /// Lower-case label used in log fields and error messages.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Degraded => "degraded",
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }
}

/// Common trait for all brawl-core errors.
///
/// Implementors use `#[derive(thiserror::Error)]` for `Display` and give each
/// variant a stable upper-case code.
pub trait CombatError: core::fmt::Display + core::fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier of the variant, logged as the `code` field.
    ///
    /// Defaults to the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
