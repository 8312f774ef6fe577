//! Encounter log entries.
//!
//! The log is append-only and is the only record of what happened in an
//! encounter. Characters referenced by entries are snapshots taken at the
//! moment the entry was produced.

use strum::Display;

use crate::character::{Action, CharacterId, Team};

use super::state::Combatant;

/// Coarse classification of log entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogEntryKind {
    General,
    Action,
    Death,
    Win,
}

/// Snapshot of a character as seen by a log entry.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterRef {
    pub id: CharacterId,
    pub name: Option<String>,
    pub team: Team,
    pub current_hp: i32,
    pub max_hp: i32,
}

impl CharacterRef {
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.id.to_string(),
        }
    }
}

impl From<&Combatant> for CharacterRef {
    fn from(combatant: &Combatant) -> Self {
        let character = combatant.character();
        Self {
            id: character.id,
            name: character.name.clone(),
            team: combatant.team(),
            current_hp: character.current_hp,
            max_hp: character.max_hp,
        }
    }
}

/// An attack attempt.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionRecord {
    pub attacker: CharacterRef,
    /// Defender as it was before the attack landed.
    pub defender: CharacterRef,
    pub action: Action,
    pub missed: bool,
    /// Zero on a miss.
    pub damage: i32,
}

/// Payload of a log entry.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LogEvent {
    /// Opens every round with the drawn turn order.
    RoundSummary { order: Vec<CharacterRef> },
    /// Remaining hit points of a character that was just hit.
    HitPoints { character: CharacterRef },
    Action(ActionRecord),
    Death { killed: CharacterRef },
    /// Always the last entry of an encounter.
    Win { team: Team },
}

impl LogEvent {
    pub const fn kind(&self) -> LogEntryKind {
        match self {
            Self::RoundSummary { .. } | Self::HitPoints { .. } => LogEntryKind::General,
            Self::Action(_) => LogEntryKind::Action,
            Self::Death { .. } => LogEntryKind::Death,
            Self::Win { .. } => LogEntryKind::Win,
        }
    }
}

/// A single line of the encounter log.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LogEntry {
    pub round: u32,
    /// Human-readable description.
    pub message: String,
    pub event: LogEvent,
}

impl LogEntry {
    pub const fn kind(&self) -> LogEntryKind {
        self.event.kind()
    }

    pub fn action(&self) -> Option<&ActionRecord> {
        match &self.event {
            LogEvent::Action(record) => Some(record),
            _ => None,
        }
    }

    pub fn killed(&self) -> Option<&CharacterRef> {
        match &self.event {
            LogEvent::Death { killed } => Some(killed),
            _ => None,
        }
    }

    pub fn winner(&self) -> Option<Team> {
        match self.event {
            LogEvent::Win { team } => Some(team),
            _ => None,
        }
    }
}
