//! Characters, their actions and autonomous action policies.

pub mod action;
pub mod factory;
pub mod policy;
pub mod types;

pub use action::{Action, ActionId, DamageModifiers};
pub use factory::{CharacterError, CharacterFactory, CharacterOverrides, CharacterTemplate};
pub use policy::{ActionPolicy, FirstActionPolicy, SharedPolicy, first_action};
pub use types::{Character, CharacterId, Team};
