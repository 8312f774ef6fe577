//! Baseline stats - the player-facing attributes of a character.
//!
//! Baseline stats are fixed when a character is generated and are the only
//! stat input an encounter receives. Everything the combat loop uses is
//! derived from them (see [`super::CombatStats`]).

use crate::config::EngineConfig;

use super::archetype::{Archetype, Subtype};

/// Ratio between minimum and maximum rolled damage.
pub const MIN_DAMAGE_RATIO: f64 = 0.9;

/// Inclusive damage roll range.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageRange {
    pub min: i32,
    pub max: i32,
}

impl DamageRange {
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Range whose minimum is [`MIN_DAMAGE_RATIO`] of `max`.
    pub fn from_max(max: i32) -> Self {
        Self {
            min: (f64::from(max) * MIN_DAMAGE_RATIO).round() as i32,
            max,
        }
    }

    pub const fn is_valid(&self) -> bool {
        self.min >= 0 && self.min <= self.max
    }
}

/// Player-facing character attributes.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BaseStats {
    pub damage: DamageRange,
    pub armor: f64,
    /// Drives attack power and armor penetration.
    pub power: f64,
    /// Drives hit rating, initiative and dodge.
    pub dexterity: f64,
    /// Drives maximum hit points.
    pub stamina: f64,
}

impl BaseStats {
    /// Generates baseline stats for an archetype/subtype at the given level.
    pub fn derive(
        archetype: Archetype,
        subtype: Subtype,
        level: u32,
        config: &EngineConfig,
    ) -> Self {
        let allocation = archetype.allocation();
        let points = stat_points_total(level, config);

        Self {
            damage: DamageRange::from_max(max_damage(level, subtype, config)),
            armor: armor_for(level, subtype, config),
            power: allocation.power * points,
            dexterity: allocation.dexterity * points,
            stamina: allocation.stamina * points,
        }
    }
}

/// Baseline stats with the subtype defaulting to [`Subtype::Balanced`].
pub fn derive_base_stats(
    archetype: Archetype,
    subtype: Option<Subtype>,
    level: u32,
    config: &EngineConfig,
) -> BaseStats {
    BaseStats::derive(archetype, subtype.unwrap_or_default(), level, config)
}

/// Stat points available for allocation at `level`.
pub fn stat_points_total(level: u32, config: &EngineConfig) -> f64 {
    f64::from(level) * f64::from(config.stat_points_per_level)
}

/// Maximum rolled damage for `level`, scaled by the subtype's damage factor.
pub fn max_damage(level: u32, subtype: Subtype, config: &EngineConfig) -> i32 {
    let base = config.damage.start_damage + f64::from(level) * config.damage.damage_per_level;
    (subtype.damage_factor() * base).round() as i32
}

/// Armor for `level`, scaled by the subtype's armor factor.
pub fn armor_for(level: u32, subtype: Subtype, config: &EngineConfig) -> f64 {
    let base = (config.armor.start_armor + f64::from(level) * config.armor.armor_per_level).round();
    (subtype.armor_factor() * base).round()
}

/// Maximum hit points granted by the stamina stat.
pub fn max_hp_for(stats: &BaseStats, config: &EngineConfig) -> i32 {
    (stats.stamina * config.max_hp_modifier).round() as i32
}
