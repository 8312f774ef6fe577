//! Shared error classification.
//!
//! Each module owns its error enum (`StatsError`, `CharacterError`,
//! `ConfigError`, `EncounterError`). They all implement [`CombatError`] so
//! drivers can decide how to react without matching every variant.

use core::fmt;

/// Who is at fault for an error.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// The caller passed bad input (empty roster, zero level, unknown name).
    /// Retrying with the same input fails the same way.
    Validation,

    /// Engine state disagrees with itself; worth a bug report.
    Internal,

    /// An encounter invariant broke mid-round. The encounter must be dropped.
    Fatal,
}

impl ErrorSeverity {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
            Self::Fatal => "fatal",
        }
    }

    /// True when the engine, not the caller, is to blame.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Implemented by every error enum of the crate.
pub trait CombatError: fmt::Display + fmt::Debug {
    fn severity(&self) -> ErrorSeverity;

    /// Stable identifier such as `ENCOUNTER_INVALID_ROSTER`.
    ///
    /// Tests and drivers match on it instead of message text.
    fn error_code(&self) -> &'static str;
}
