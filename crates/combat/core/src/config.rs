//! Engine configuration constants and tunable parameters.
//!
//! A single [`EngineConfig`] is supplied when the [`crate::CombatEngine`] is
//! built and is the only source of tunable numbers for both character
//! generation and combat-statistic derivation. Partial TOML/RON documents are
//! merged over the defaults field by field (`#[serde(default)]`).

use crate::error::{CombatError, ErrorSeverity};

/// Linear modifiers translating baseline stats into combat statistics.
///
/// Every modifier defaults to `1.0` (identity).
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct StatsModifiers {
    /// power → attack power
    pub attack_power: f64,
    /// power → armor penetration
    pub armor_penetration: f64,
    /// dexterity → hit rating
    pub hit_rating: f64,
    /// dexterity → initiative
    pub initiative: f64,
    /// dexterity → dodge
    pub dodge: f64,
    /// armor → damage reduction
    pub dmg_reduction: f64,
}

impl StatsModifiers {
    pub const IDENTITY: Self = Self {
        attack_power: 1.0,
        armor_penetration: 1.0,
        hit_rating: 1.0,
        initiative: 1.0,
        dodge: 1.0,
        dmg_reduction: 1.0,
    };

    fn fields(&self) -> [(&'static str, f64); 6] {
        [
            ("attack_power", self.attack_power),
            ("armor_penetration", self.armor_penetration),
            ("hit_rating", self.hit_rating),
            ("initiative", self.initiative),
            ("dodge", self.dodge),
            ("dmg_reduction", self.dmg_reduction),
        ]
    }
}

impl Default for StatsModifiers {
    fn default() -> Self {
        Self::IDENTITY
    }
}

/// Damage progression: base maximum damage and gain per level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct DamageConfig {
    pub start_damage: f64,
    pub damage_per_level: f64,
}

impl Default for DamageConfig {
    fn default() -> Self {
        Self {
            start_damage: EngineConfig::DEFAULT_START_DAMAGE,
            damage_per_level: EngineConfig::DEFAULT_DAMAGE_PER_LEVEL,
        }
    }
}

/// Armor progression: base armor and gain per level.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct ArmorConfig {
    pub start_armor: f64,
    pub armor_per_level: f64,
}

impl Default for ArmorConfig {
    fn default() -> Self {
        Self {
            start_armor: EngineConfig::DEFAULT_START_ARMOR,
            armor_per_level: EngineConfig::DEFAULT_ARMOR_PER_LEVEL,
        }
    }
}

/// Which members of the opposing roster may be picked as a target.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum TargetSelection {
    /// Only opponents with hit points left. An attacker with no living
    /// opponent skips its action.
    #[default]
    LivingOnly,
    /// Any roster member, dead or alive. Striking a dead opponent wastes the
    /// action.
    AnyMember,
}

/// Errors reported by [`EngineConfig::validate`].
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ConfigError {
    #[error("stat_points_per_level must be positive")]
    ZeroStatPoints,

    #[error("{field} must be a finite, non-negative number (got {value})")]
    InvalidValue { field: &'static str, value: f64 },
}

impl CombatError for ConfigError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::ZeroStatPoints => "CONFIG_ZERO_STAT_POINTS",
            Self::InvalidValue { .. } => "CONFIG_INVALID_VALUE",
        }
    }
}

/// Engine-wide configuration.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct EngineConfig {
    /// Allocation points granted per character level.
    pub stat_points_per_level: u32,
    /// stamina → maximum hit points
    pub max_hp_modifier: f64,
    pub stats_modifiers: StatsModifiers,
    pub damage: DamageConfig,
    pub armor: ArmorConfig,
    pub targeting: TargetSelection,
}

impl EngineConfig {
    // ===== runtime-tunable defaults =====
    pub const DEFAULT_STAT_POINTS_PER_LEVEL: u32 = 3;
    pub const DEFAULT_MAX_HP_MODIFIER: f64 = 5.0;
    pub const DEFAULT_START_DAMAGE: f64 = 10.0;
    pub const DEFAULT_DAMAGE_PER_LEVEL: f64 = 1.0;
    pub const DEFAULT_START_ARMOR: f64 = 20.0;
    pub const DEFAULT_ARMOR_PER_LEVEL: f64 = 3.0;

    pub fn new() -> Self {
        Self {
            stat_points_per_level: Self::DEFAULT_STAT_POINTS_PER_LEVEL,
            max_hp_modifier: Self::DEFAULT_MAX_HP_MODIFIER,
            stats_modifiers: StatsModifiers::default(),
            damage: DamageConfig::default(),
            armor: ArmorConfig::default(),
            targeting: TargetSelection::default(),
        }
    }

    pub fn with_stats_modifiers(mut self, stats_modifiers: StatsModifiers) -> Self {
        self.stats_modifiers = stats_modifiers;
        self
    }

    pub fn with_targeting(mut self, targeting: TargetSelection) -> Self {
        self.targeting = targeting;
        self
    }

    /// Rejects values that would make derivation produce negative or
    /// non-finite statistics.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.stat_points_per_level == 0 {
            return Err(ConfigError::ZeroStatPoints);
        }

        let scalars = [
            ("max_hp_modifier", self.max_hp_modifier),
            ("damage.start_damage", self.damage.start_damage),
            ("damage.damage_per_level", self.damage.damage_per_level),
            ("armor.start_armor", self.armor.start_armor),
            ("armor.armor_per_level", self.armor.armor_per_level),
        ];

        for (field, value) in scalars
            .into_iter()
            .chain(self.stats_modifiers.fields())
        {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::InvalidValue { field, value });
            }
        }

        Ok(())
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_valid() {
        let config = EngineConfig::default();
        assert_eq!(config.stat_points_per_level, 3);
        assert_eq!(config.stats_modifiers, StatsModifiers::IDENTITY);
        assert_eq!(config.targeting, TargetSelection::LivingOnly);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_stat_points() {
        let config = EngineConfig {
            stat_points_per_level: 0,
            ..EngineConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroStatPoints));
    }

    #[test]
    fn rejects_negative_modifier() {
        let config = EngineConfig::default().with_stats_modifiers(StatsModifiers {
            dodge: -0.5,
            ..StatsModifiers::IDENTITY
        });

        let err = config.validate().unwrap_err();
        assert_eq!(
            err,
            ConfigError::InvalidValue {
                field: "dodge",
                value: -0.5
            }
        );
        assert_eq!(err.severity(), ErrorSeverity::Validation);
    }

    #[test]
    fn rejects_nan_progression() {
        let mut config = EngineConfig::default();
        config.armor.armor_per_level = f64::NAN;
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue {
                field: "armor.armor_per_level",
                ..
            })
        ));
    }
}
