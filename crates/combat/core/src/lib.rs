//! Deterministic round-based combat resolution.
//!
//! `skirmish-core` turns character templates into stat-bearing characters and
//! resolves battles between two teams of them. Everything random flows through
//! one seedable generator per encounter, so the same seed, rosters and queued
//! actions always reproduce the same log.
//!
//! ```text
//! CombatEngine ── factory() ──► CharacterFactory ──► Character
//!      │
//!      └── create_*_encounter(team_a, team_b) ──► Encounter ── tick() ──► LogEntry*
//! ```
pub mod character;
pub mod combat;
pub mod config;
pub mod encounter;
pub mod engine;
pub mod env;
pub mod error;
pub mod stats;

pub use character::{
    Action, ActionId, ActionPolicy, Character, CharacterError, CharacterFactory, CharacterId,
    CharacterOverrides, CharacterTemplate, DamageModifiers, FirstActionPolicy, SharedPolicy, Team,
    first_action,
};
pub use combat::{AttackOutcome, AttackResult, resolve_attack};
pub use config::{
    ArmorConfig, ConfigError, DamageConfig, EngineConfig, StatsModifiers, TargetSelection,
};
pub use encounter::{
    ActionRecord, CharacterRef, Combatant, CombatantState, Encounter, EncounterError, EncounterId,
    EncounterState, LogEntry, LogEntryKind, LogEvent, LogObserver, TickOutcome,
};
pub use engine::CombatEngine;
pub use env::{CombatRng, RngOracle};
pub use error::{CombatError, ErrorSeverity};
pub use stats::{Archetype, BaseStats, CombatStats, DamageRange, StatsError, Subtype};
