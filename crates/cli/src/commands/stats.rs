//! `skirmish stats`: show what a template turns into.

use std::path::PathBuf;

use anyhow::Result;
use clap::Args;
use skirmish_content::TemplateSpec;
use skirmish_core::CombatStats;

use super::load_engine;

#[derive(Args)]
pub struct Stats {
    /// Template as ARCHETYPE[:SUBTYPE]@LEVEL
    #[arg(value_name = "SPEC")]
    spec: TemplateSpec,

    /// Engine configuration (TOML)
    #[arg(long)]
    config: Option<PathBuf>,
}

impl Stats {
    pub fn execute(self) -> Result<()> {
        let engine = load_engine(self.config.as_deref())?;
        let template = self.spec.to_template()?;
        let character = engine.factory().create(&template)?;
        let stats = &character.stats;
        let combat = CombatStats::derive(stats, &engine.config().stats_modifiers);

        println!("{} level {}", template.archetype, character.level);
        println!("  hp:         {}", character.max_hp);
        println!("  damage:     {}..={}", stats.damage.min, stats.damage.max);
        println!("  armor:      {}", stats.armor);
        println!("  power:      {}", stats.power);
        println!("  dexterity:  {}", stats.dexterity);
        println!("  stamina:    {}", stats.stamina);
        println!("  attack power:      {:.2}", combat.attack_power);
        println!("  armor penetration: {:.2}", combat.armor_penetration);
        println!("  hit rating:        {:.2}", combat.hit_rating);
        println!("  initiative:        {:.2}", combat.initiative);
        println!("  dodge:             {:.2}", combat.dodge);
        println!("  damage reduction:  {:.2}", combat.damage_reduction);

        Ok(())
    }
}
