//! Stat derivation pipeline.
//!
//! # Architecture
//!
//! ```text
//! [ Template: archetype + subtype + level ]
//!      ↓  EngineConfig (points per level, damage/armor progression)
//! [ Baseline Stats ]      player-facing, fixed at creation
//!      ↓  StatsModifiers
//! [ Combat Stats ]        encounter-internal, frozen at encounter start
//! ```
//!
//! Every step is a pure function of its inputs and the engine configuration.

pub mod archetype;
pub mod base;
pub mod combat;

pub use archetype::{Archetype, StatAllocation, StatsError, Subtype};
pub use base::{
    BaseStats, DamageRange, MIN_DAMAGE_RATIO, armor_for, derive_base_stats, max_damage, max_hp_for,
    stat_points_total,
};
pub use combat::CombatStats;
