//! Engine entry point.
//!
//! A [`CombatEngine`] holds one validated [`EngineConfig`] and hands out
//! character factories and encounters bound to it.

use rand::RngCore;

use crate::character::{Character, CharacterFactory};
use crate::config::{ConfigError, EngineConfig};
use crate::encounter::{Encounter, EncounterError};
use crate::env::{self, CombatRng};

/// Configured combat engine.
#[derive(Clone, Debug, Default)]
pub struct CombatEngine {
    config: EngineConfig,
}

impl CombatEngine {
    /// Creates an engine after validating `config`.
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn factory(&self) -> CharacterFactory<'_> {
        CharacterFactory::new(&self.config)
    }

    /// Starts an encounter driven by an entropy-seeded generator.
    pub fn create_encounter(
        &self,
        team_a: Vec<Character>,
        team_b: Vec<Character>,
    ) -> Result<Encounter, EncounterError> {
        self.create_encounter_with_rng(team_a, team_b, env::from_entropy())
    }

    /// Starts an encounter whose outcome is fully determined by `seed` and the
    /// queued actions.
    pub fn create_seeded_encounter(
        &self,
        team_a: Vec<Character>,
        team_b: Vec<Character>,
        seed: u64,
    ) -> Result<Encounter<CombatRng>, EncounterError> {
        self.create_encounter_with_rng(team_a, team_b, env::seeded(seed))
    }

    /// Starts an encounter drawing from a caller-supplied generator.
    pub fn create_encounter_with_rng<R: RngCore>(
        &self,
        team_a: Vec<Character>,
        team_b: Vec<Character>,
        rng: R,
    ) -> Result<Encounter<R>, EncounterError> {
        Encounter::new(team_a, team_b, &self.config, rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterTemplate;
    use crate::config::StatsModifiers;
    use crate::stats::Archetype;

    #[test]
    fn rejects_invalid_config() {
        let config = EngineConfig {
            stat_points_per_level: 0,
            ..EngineConfig::default()
        };
        assert_eq!(CombatEngine::new(config).unwrap_err(), ConfigError::ZeroStatPoints);

        let config = EngineConfig::default().with_stats_modifiers(StatsModifiers {
            dodge: -1.0,
            ..StatsModifiers::IDENTITY
        });
        assert!(matches!(
            CombatEngine::new(config),
            Err(ConfigError::InvalidValue { field: "dodge", .. })
        ));
    }

    #[test]
    fn same_seed_same_log() {
        let engine = CombatEngine::default();
        let factory = engine.factory();
        let kyle = factory.create(&CharacterTemplate::new(Archetype::Strong, 5).named("Kyle")).unwrap();
        let mia = factory.create(&CharacterTemplate::new(Archetype::Swift, 5).named("Mia")).unwrap();

        let run = |seed| {
            let mut encounter = engine
                .create_seeded_encounter(vec![kyle.clone()], vec![mia.clone()], seed)
                .unwrap();
            encounter.run(500).unwrap();
            encounter.log().to_vec()
        };

        assert_eq!(run(42), run(42));
    }
}
