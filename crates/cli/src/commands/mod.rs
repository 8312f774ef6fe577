mod run;
mod stats;

pub use run::Run;
pub use stats::Stats;

use std::path::Path;

use anyhow::Result;
use skirmish_content::ConfigLoader;
use skirmish_core::CombatEngine;

/// Builds an engine from an optional TOML config file.
fn load_engine(config: Option<&Path>) -> Result<CombatEngine> {
    let config = match config {
        Some(path) => ConfigLoader::load(path)?,
        None => Default::default(),
    };
    Ok(CombatEngine::new(config)?)
}
