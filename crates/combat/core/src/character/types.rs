use std::fmt;

use strum::{Display, EnumIter};
use uuid::Uuid;

use crate::stats::BaseStats;

use super::action::Action;
use super::policy::SharedPolicy;

/// Unique identifier of a character.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CharacterId(pub Uuid);

impl CharacterId {
    /// Generates a fresh random (v4) identifier.
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }

    pub const fn from_u128(value: u128) -> Self {
        Self(Uuid::from_u128(value))
    }
}

impl fmt::Display for CharacterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Side of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    #[strum(to_string = "Team A")]
    TeamA,
    #[strum(to_string = "Team B")]
    TeamB,
}

impl Team {
    pub const fn opponent(self) -> Self {
        match self {
            Self::TeamA => Self::TeamB,
            Self::TeamB => Self::TeamA,
        }
    }
}

/// A stat-bearing combatant, independent of any encounter.
#[derive(Clone)]
pub struct Character {
    pub id: CharacterId,
    pub name: Option<String>,
    pub level: u32,
    pub stats: BaseStats,
    /// May drop below zero during the round that kills the character.
    pub current_hp: i32,
    pub max_hp: i32,
    /// Never empty for characters built by the factory.
    pub actions: Vec<Action>,
    /// When absent, actions have to be queued by the caller every round.
    pub policy: Option<SharedPolicy>,
}

impl Character {
    pub fn is_alive(&self) -> bool {
        self.current_hp > 0
    }

    pub fn is_autonomous(&self) -> bool {
        self.policy.is_some()
    }

    /// Name used in log messages, falling back to the id.
    pub fn display_name(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.id.to_string(),
        }
    }

    /// Asks the policy for this round's action.
    ///
    /// Returns `None` for characters without a policy.
    pub fn choose_action(&self) -> Option<Action> {
        self.policy
            .as_ref()
            .and_then(|policy| policy.choose_action(&self.actions))
    }
}

impl fmt::Debug for Character {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Character")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("level", &self.level)
            .field("stats", &self.stats)
            .field("current_hp", &self.current_hp)
            .field("max_hp", &self.max_hp)
            .field("actions", &self.actions)
            .field("autonomous", &self.is_autonomous())
            .finish()
    }
}
