//! Loaders reading engine configuration and rosters from files.
//!
//! Configuration is TOML, rosters are RON. Both are deserialized straight
//! into skirmish-core / roster types.

pub mod config;
pub mod roster;

pub use config::ConfigLoader;
pub use roster::RosterLoader;

use std::path::Path;

/// Common result type for loaders.
pub type LoadResult<T> = anyhow::Result<T>;

pub(crate) fn read_file(path: &Path) -> LoadResult<String> {
    std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read file {}: {}", path.display(), e))
}
