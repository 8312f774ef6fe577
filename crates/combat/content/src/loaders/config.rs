//! Engine configuration loader.

use std::path::Path;

use skirmish_core::EngineConfig;

use crate::loaders::{LoadResult, read_file};

/// Loader for engine configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads and validates an [`EngineConfig`].
    ///
    /// Missing keys keep their default values, so an empty file yields the
    /// default configuration.
    pub fn load(path: &Path) -> LoadResult<EngineConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    pub fn parse(content: &str) -> LoadResult<EngineConfig> {
        let config: EngineConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse config TOML: {}", e))?;
        config
            .validate()
            .map_err(|e| anyhow::anyhow!("Invalid engine config: {}", e))?;

        tracing::debug!(
            stat_points_per_level = config.stat_points_per_level,
            targeting = ?config.targeting,
            "engine config loaded"
        );
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use skirmish_core::TargetSelection;

    #[test]
    fn empty_document_is_the_default() {
        assert_eq!(ConfigLoader::parse("").unwrap(), EngineConfig::default());
    }

    #[test]
    fn nested_tables_merge_over_defaults() {
        let config = ConfigLoader::parse(
            r#"
            max_hp_modifier = 8.0
            targeting = "any_member"

            [stats_modifiers]
            attack_power = 1.5
            dodge = 0.7

            [armor]
            start_armor = 25.0
            "#,
        )
        .unwrap();

        assert_eq!(config.max_hp_modifier, 8.0);
        assert_eq!(config.targeting, TargetSelection::AnyMember);
        assert_eq!(config.stats_modifiers.attack_power, 1.5);
        assert_eq!(config.stats_modifiers.dodge, 0.7);
        assert_eq!(config.stats_modifiers.hit_rating, 1.0);
        assert_eq!(config.armor.start_armor, 25.0);
        assert_eq!(config.armor.armor_per_level, EngineConfig::DEFAULT_ARMOR_PER_LEVEL);
        assert_eq!(config.stat_points_per_level, EngineConfig::DEFAULT_STAT_POINTS_PER_LEVEL);
    }

    #[test]
    fn invalid_values_are_rejected() {
        let err = ConfigLoader::parse("stat_points_per_level = 0").unwrap_err();
        assert!(err.to_string().contains("Invalid engine config"));

        let err = ConfigLoader::parse("[damage]\nstart_damage = -1.0").unwrap_err();
        assert!(err.to_string().contains("start_damage"));
    }
}
