//! Error types for encounter setup and round resolution.

use crate::character::{CharacterId, Team};
use crate::config::ConfigError;
use crate::error::{CombatError, ErrorSeverity};

/// Errors surfaced while creating or running an encounter.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum EncounterError {
    #[error("invalid engine config: {0}")]
    InvalidConfig(#[from] ConfigError),

    #[error("invalid roster: {team} has no members")]
    InvalidRoster { team: Team },

    #[error("invalid character state: {id} enters the encounter with {current_hp} hp")]
    InvalidCharacterState { id: CharacterId, current_hp: i32 },

    #[error("character {id} appears more than once in the encounter")]
    DuplicateCharacter { id: CharacterId },

    #[error("character {id} does not take part in this encounter")]
    UnknownCharacter { id: CharacterId },

    #[error("weighted draw over {candidates} candidates selected nothing")]
    WeightedDrawExhausted { candidates: usize },
}

impl CombatError for EncounterError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            Self::InvalidConfig(_)
            | Self::InvalidRoster { .. }
            | Self::InvalidCharacterState { .. }
            | Self::DuplicateCharacter { .. }
            | Self::UnknownCharacter { .. } => ErrorSeverity::Validation,
            Self::WeightedDrawExhausted { .. } => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidConfig(_) => "ENCOUNTER_INVALID_CONFIG",
            Self::InvalidRoster { .. } => "ENCOUNTER_INVALID_ROSTER",
            Self::InvalidCharacterState { .. } => "ENCOUNTER_INVALID_CHARACTER_STATE",
            Self::DuplicateCharacter { .. } => "ENCOUNTER_DUPLICATE_CHARACTER",
            Self::UnknownCharacter { .. } => "ENCOUNTER_UNKNOWN_CHARACTER",
            Self::WeightedDrawExhausted { .. } => "ENCOUNTER_WEIGHTED_DRAW_EXHAUSTED",
        }
    }
}
