//! Damage calculation and application.

use crate::character::DamageModifiers;
use crate::stats::CombatStats;

/// Share of the modified roll that gets through the defender's armor.
///
/// ```text
/// factor = armor_penetration / (armor_penetration + damage_reduction)
/// ```
///
/// When both sides are zero nothing is absorbed (factor 1.0).
pub fn reduction_factor(armor_penetration: f64, damage_reduction: f64) -> f64 {
    let total = armor_penetration + damage_reduction;
    if total <= 0.0 {
        return 1.0;
    }
    armor_penetration / total
}

/// Calculate the damage of a hit.
///
/// # Formula
///
/// ```text
/// modified = multiply_factor × rolled + add_factor
/// damage   = round(factor × modified + attack_power)
/// ```
///
/// where `factor` is [`reduction_factor`]. The result never goes below zero.
///
/// # Arguments
///
/// * `modifiers` - Damage modifiers of the performed action
/// * `attacker` - Attacker's combat stats
/// * `defender` - Defender's combat stats
/// * `rolled` - Base damage rolled from the attacker's damage range
pub fn calculate_damage(
    modifiers: &DamageModifiers,
    attacker: &CombatStats,
    defender: &CombatStats,
    rolled: i32,
) -> i32 {
    let modified = modifiers.multiply_factor * f64::from(rolled) + modifiers.add_factor;
    let factor = reduction_factor(attacker.armor_penetration, defender.damage_reduction);
    let damage = (factor * modified + attacker.attack_power).round();

    if damage.is_nan() {
        return 0;
    }
    damage.max(0.0) as i32
}

/// Apply damage to current HP.
///
/// Not clamped: a killing blow may leave the defender below zero.
pub fn apply_damage(current_hp: i32, damage: i32) -> i32 {
    current_hp.saturating_sub(damage)
}
