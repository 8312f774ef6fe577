//! `skirmish run`: resolve one encounter.

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::Args;
use skirmish_content::{RosterLoader, RosterSpec, TemplateSpec};
use skirmish_core::{Character, CombatEngine, Encounter};

use super::load_engine;

#[derive(Args)]
pub struct Run {
    /// Engine configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Roster file (RON); replaces --team-a/--team-b
    #[arg(long, conflicts_with_all = ["team_a", "team_b"])]
    roster: Option<PathBuf>,

    /// Team A member as ARCHETYPE[:SUBTYPE]@LEVEL (repeatable)
    #[arg(long = "team-a", value_name = "SPEC")]
    team_a: Vec<TemplateSpec>,

    /// Team B member as ARCHETYPE[:SUBTYPE]@LEVEL (repeatable)
    #[arg(long = "team-b", value_name = "SPEC")]
    team_b: Vec<TemplateSpec>,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Stop after this many rounds even without a winner
    #[arg(long, default_value_t = 1_000)]
    max_rounds: u32,

    /// Print log entries as JSON lines
    #[arg(long)]
    json: bool,
}

impl Run {
    pub fn execute(self) -> Result<()> {
        let engine = load_engine(self.config.as_deref())?;
        let roster = self.roster()?;
        let (team_a, team_b) = roster
            .create(&engine.factory())
            .context("failed to build characters")?;

        let mut encounter = self.start(&engine, team_a, team_b)?;
        let json = self.json;
        encounter.set_log_observer(move |entry| {
            if json {
                match serde_json::to_string(entry) {
                    Ok(line) => println!("{line}"),
                    Err(e) => tracing::error!("failed to encode log entry: {e}"),
                }
            } else {
                println!("[round {}] {}", entry.round, entry.message);
            }
        });

        match encounter.run(self.max_rounds)? {
            Some(team) => tracing::info!(%team, rounds = encounter.round() - 1, "finished"),
            None => {
                tracing::warn!(max_rounds = self.max_rounds, "no winner within the round cap");
                if !self.json {
                    println!("No winner after {} rounds", self.max_rounds);
                }
            }
        }

        Ok(())
    }

    fn roster(&self) -> Result<RosterSpec> {
        if let Some(path) = &self.roster {
            return RosterLoader::load(path);
        }
        if self.team_a.is_empty() || self.team_b.is_empty() {
            bail!("either --roster or at least one --team-a and one --team-b is required");
        }
        Ok(RosterSpec {
            team_a: self.team_a.clone(),
            team_b: self.team_b.clone(),
        })
    }

    fn start(
        &self,
        engine: &CombatEngine,
        team_a: Vec<Character>,
        team_b: Vec<Character>,
    ) -> Result<Encounter> {
        let encounter = match self.seed {
            Some(seed) => engine.create_seeded_encounter(team_a, team_b, seed)?,
            None => engine.create_encounter(team_a, team_b)?,
        };
        Ok(encounter)
    }
}
