//! Hit chance calculations.

use crate::env::RngOracle;
use crate::stats::CombatStats;

/// Probability that an attack lands.
///
/// # Formula
///
/// ```text
/// hit_chance = hit_rating / (hit_rating + dodge)
/// ```
///
/// With no hit rating and no dodge on either side the contest is a coin flip.
pub fn calculate_hit_chance(hit_rating: f64, dodge: f64) -> f64 {
    let total = hit_rating + dodge;
    if total <= 0.0 {
        return 0.5;
    }
    hit_rating / total
}

/// Check a roll drawn from `[0, hit_rating + dodge)` against the hit rating.
///
/// # Returns
///
/// `true` iff the roll is strictly below `hit_rating`.
pub fn check_hit(hit_rating: f64, roll: f64) -> bool {
    roll < hit_rating
}

/// Roll a hit check for `attacker` against `defender`.
pub fn roll_hit<R>(attacker: &CombatStats, defender: &CombatStats, rng: &mut R) -> bool
where
    R: RngOracle + ?Sized,
{
    let total = attacker.hit_rating + defender.dodge;
    if total <= 0.0 {
        return rng.flip();
    }

    let roll = rng.roll_below(total);
    tracing::trace!(roll, hit_rating = attacker.hit_rating, total, "hit roll");
    check_hit(attacker.hit_rating, roll)
}
