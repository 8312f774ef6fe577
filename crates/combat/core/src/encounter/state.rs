//! Participants of an encounter and read-only snapshots of them.

use std::fmt;

use uuid::Uuid;

use crate::character::{Action, Character, CharacterId, Team};
use crate::combat::apply_damage;
use crate::config::StatsModifiers;
use crate::stats::{BaseStats, CombatStats};

/// Unique identifier of an encounter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterId(pub Uuid);

impl EncounterId {
    pub fn generate() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for EncounterId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A character enrolled in an encounter.
///
/// Combat stats and team are fixed on entry; only hit points change, and
/// only through the owning encounter.
pub struct Combatant {
    character: Character,
    stats: CombatStats,
    team: Team,
}

impl Combatant {
    pub(crate) fn enroll(character: Character, team: Team, modifiers: &StatsModifiers) -> Self {
        let stats = CombatStats::derive(&character.stats, modifiers);
        Self {
            character,
            stats,
            team,
        }
    }

    pub fn character(&self) -> &Character {
        &self.character
    }

    pub fn id(&self) -> CharacterId {
        self.character.id
    }

    pub fn stats(&self) -> &CombatStats {
        &self.stats
    }

    pub fn team(&self) -> Team {
        self.team
    }

    pub fn current_hp(&self) -> i32 {
        self.character.current_hp
    }

    pub fn is_alive(&self) -> bool {
        self.character.is_alive()
    }

    pub(crate) fn take_damage(&mut self, damage: i32) {
        self.character.current_hp = apply_damage(self.character.current_hp, damage);
    }

    /// Gives the character back, with the hit points it ended with.
    pub fn into_character(self) -> Character {
        self.character
    }
}

impl fmt::Debug for Combatant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Combatant")
            .field("character", &self.character)
            .field("stats", &self.stats)
            .field("team", &self.team)
            .finish()
    }
}

/// Serializable view of a combatant (policies are not part of it).
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatantState {
    pub id: CharacterId,
    pub name: Option<String>,
    pub level: u32,
    pub team: Team,
    pub stats: BaseStats,
    pub combat_stats: CombatStats,
    pub current_hp: i32,
    pub max_hp: i32,
    pub actions: Vec<Action>,
    pub autonomous: bool,
}

impl From<&Combatant> for CombatantState {
    fn from(combatant: &Combatant) -> Self {
        let character = &combatant.character;
        Self {
            id: character.id,
            name: character.name.clone(),
            level: character.level,
            team: combatant.team,
            stats: character.stats.clone(),
            combat_stats: combatant.stats.clone(),
            current_hp: character.current_hp,
            max_hp: character.max_hp,
            actions: character.actions.clone(),
            autonomous: character.is_autonomous(),
        }
    }
}

/// Serializable view of a whole encounter.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EncounterState {
    pub id: EncounterId,
    /// Round that the next tick will resolve.
    pub round: u32,
    pub concluded: bool,
    pub team_a: Vec<CombatantState>,
    pub team_b: Vec<CombatantState>,
}
