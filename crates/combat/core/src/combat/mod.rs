//! Combat resolution system.
//!
//! Pure functions resolving a single attack. Randomness only enters through
//! the [`RngOracle`](crate::env::RngOracle) passed in by the caller.
//!
//! # Core Functions
//!
//! - `resolve_attack`: Complete attack resolution (hit check + damage)
//! - `calculate_hit_chance`: Hit rating vs dodge
//! - `calculate_damage`: Damage with action modifiers, armor penetration and damage reduction
//! - `apply_damage`: HP reduction (not clamped)

pub mod damage;
pub mod hit;
pub mod result;

pub use damage::{apply_damage, calculate_damage, reduction_factor};
pub use hit::{calculate_hit_chance, check_hit, roll_hit};
pub use result::{AttackOutcome, AttackResult, resolve_attack};
