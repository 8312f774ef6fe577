//! Roster loader.

use std::path::Path;

use crate::loaders::{LoadResult, read_file};
use crate::roster::RosterSpec;

/// Loader for two-team rosters from RON files.
pub struct RosterLoader;

impl RosterLoader {
    /// Loads a roster and checks every archetype/subtype name.
    ///
    /// RON format:
    ///
    /// ```ron
    /// (
    ///     team_a: [(name: Some("Kyle"), archetype: "strong", level: 10)],
    ///     team_b: [(archetype: "swift", subtype: Some("attacker"), level: 9)],
    /// )
    /// ```
    pub fn load(path: &Path) -> LoadResult<RosterSpec> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<RosterSpec> {
        let roster: RosterSpec = ron::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse roster RON: {}", e))?;

        for (team, specs) in [("team_a", &roster.team_a), ("team_b", &roster.team_b)] {
            if specs.is_empty() {
                anyhow::bail!("Roster {} has no members", team);
            }
            for (index, spec) in specs.iter().enumerate() {
                spec.to_template().map_err(|e| {
                    anyhow::anyhow!("Invalid template for {} member #{}: {}", team, index, e)
                })?;
            }
        }

        Ok(roster)
    }
}
