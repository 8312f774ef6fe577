//! Combat statistics - encounter-internal values derived from baseline stats.
//!
//! Computed exactly once when a character enters an encounter and frozen for
//! the encounter's duration, even while hit points change.

use crate::config::StatsModifiers;

use super::base::{BaseStats, DamageRange};

/// Derived combat statistics.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CombatStats {
    /// Rolled base damage, copied from baseline stats.
    pub damage: DamageRange,

    /// Flat damage bonus added to every hit (from power).
    pub attack_power: f64,

    /// Weighed against the defender's damage reduction (from power).
    pub armor_penetration: f64,

    /// Weighed against the defender's dodge (from dexterity).
    pub hit_rating: f64,

    /// Weight in the round-order draw (from dexterity).
    pub initiative: f64,

    /// Chance to avoid attacks (from dexterity).
    pub dodge: f64,

    /// Damage absorption (from armor).
    pub damage_reduction: f64,
}

impl CombatStats {
    /// Derivation formulas:
    /// - attack power, armor penetration: modifier × power
    /// - hit rating, initiative, dodge: modifier × dexterity
    /// - damage reduction: modifier × armor
    pub fn derive(base: &BaseStats, modifiers: &StatsModifiers) -> Self {
        Self {
            damage: base.damage,
            attack_power: modifiers.attack_power * base.power,
            armor_penetration: modifiers.armor_penetration * base.power,
            hit_rating: modifiers.hit_rating * base.dexterity,
            initiative: modifiers.initiative * base.dexterity,
            dodge: modifiers.dodge * base.dexterity,
            damage_reduction: modifiers.dmg_reduction * base.armor,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> BaseStats {
        BaseStats {
            damage: DamageRange::new(9, 10),
            armor: 40.0,
            power: 12.0,
            dexterity: 6.0,
            stamina: 6.0,
        }
    }

    #[test]
    fn identity_modifiers_copy_sources() {
        let stats = CombatStats::derive(&base(), &StatsModifiers::IDENTITY);
        assert_eq!(stats.damage, DamageRange::new(9, 10));
        assert_eq!(stats.attack_power, 12.0);
        assert_eq!(stats.armor_penetration, 12.0);
        assert_eq!(stats.hit_rating, 6.0);
        assert_eq!(stats.initiative, 6.0);
        assert_eq!(stats.dodge, 6.0);
        assert_eq!(stats.damage_reduction, 40.0);
    }

    #[test]
    fn modifiers_scale_each_stat_independently() {
        let modifiers = StatsModifiers {
            attack_power: 1.5,
            dodge: 0.5,
            dmg_reduction: 0.25,
            ..StatsModifiers::IDENTITY
        };
        let stats = CombatStats::derive(&base(), &modifiers);
        assert_eq!(stats.attack_power, 18.0);
        assert_eq!(stats.armor_penetration, 12.0);
        assert_eq!(stats.dodge, 3.0);
        assert_eq!(stats.hit_rating, 6.0);
        assert_eq!(stats.damage_reduction, 10.0);
    }
}
