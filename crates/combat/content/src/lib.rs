//! Data-driven content for the combat engine.
//!
//! - Character templates and rosters with textual archetype/subtype names
//! - Engine configuration (TOML) and roster (RON) loaders
//!
//! Everything here resolves to skirmish-core types before an encounter
//! starts; content never appears in encounter state.

pub mod roster;

#[cfg(feature = "loaders")]
pub mod loaders;

pub use roster::{RosterError, RosterSpec, TemplateSpec};

#[cfg(feature = "loaders")]
pub use loaders::{ConfigLoader, LoadResult, RosterLoader};
