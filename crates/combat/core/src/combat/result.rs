//! Single-attack resolution.

use crate::character::DamageModifiers;
use crate::env::RngOracle;
use crate::stats::CombatStats;

use super::damage::calculate_damage;
use super::hit::roll_hit;

/// Whether an attack connected.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AttackOutcome {
    Miss,
    Hit,
}

/// What one attack did to its target.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackResult {
    pub outcome: AttackOutcome,
    /// `None` on a miss.
    pub damage: Option<i32>,
}

impl AttackResult {
    pub const MISS: Self = Self {
        outcome: AttackOutcome::Miss,
        damage: None,
    };

    pub fn is_hit(&self) -> bool {
        self.outcome == AttackOutcome::Hit
    }

    /// Damage dealt, zero on a miss.
    pub fn damage_dealt(&self) -> i32 {
        self.damage.unwrap_or(0)
    }
}

/// Hit check, then damage.
///
/// The hit roll is drawn before the damage roll; a miss consumes no damage
/// roll.
pub fn resolve_attack<R>(
    modifiers: &DamageModifiers,
    attacker: &CombatStats,
    defender: &CombatStats,
    rng: &mut R,
) -> AttackResult
where
    R: RngOracle + ?Sized,
{
    if !roll_hit(attacker, defender, rng) {
        return AttackResult::MISS;
    }

    let rolled = rng.roll_range(attacker.damage.min, attacker.damage.max);
    let damage = calculate_damage(modifiers, attacker, defender, rolled);

    AttackResult {
        outcome: AttackOutcome::Hit,
        damage: Some(damage),
    }
}
