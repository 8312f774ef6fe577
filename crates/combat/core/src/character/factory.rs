//! Character generation from templates.
//!
//! The factory turns a [`CharacterTemplate`] into a ready-to-fight
//! [`Character`] using the engine configuration it was created with:
//!
//! 1. Baseline stats from archetype, subtype and level
//! 2. Maximum hit points from stamina (character starts at full health)
//! 3. The default attack as the only action
//! 4. [`FirstActionPolicy`](super::FirstActionPolicy) when the template is autonomous
//! 5. Caller overrides, applied last

use crate::config::EngineConfig;
use crate::error::{CombatError, ErrorSeverity};
use crate::stats::{Archetype, BaseStats, DamageRange, Subtype, derive_base_stats, max_hp_for};

use super::action::Action;
use super::policy::{SharedPolicy, first_action};
use super::types::{Character, CharacterId};

/// Errors raised while building a character.
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum CharacterError {
    #[error("character level must be positive")]
    InvalidLevel,

    #[error("character must have at least one action")]
    NoActions,

    #[error("invalid damage range {min}..={max}")]
    InvalidDamageRange { min: i32, max: i32 },

    #[error("{stat} must be a finite, non-negative number (got {value})")]
    InvalidStat { stat: &'static str, value: f64 },

    #[error("current hp {current} exceeds max hp {max}")]
    HitPointsAboveMaximum { current: i32, max: i32 },
}

impl CombatError for CharacterError {
    fn severity(&self) -> ErrorSeverity {
        ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidLevel => "CHARACTER_INVALID_LEVEL",
            Self::NoActions => "CHARACTER_NO_ACTIONS",
            Self::InvalidDamageRange { .. } => "CHARACTER_INVALID_DAMAGE_RANGE",
            Self::InvalidStat { .. } => "CHARACTER_INVALID_STAT",
            Self::HitPointsAboveMaximum { .. } => "CHARACTER_HP_ABOVE_MAX",
        }
    }
}

/// Partial character applied on top of the generated one.
///
/// `None` keeps the generated value. `policy` is doubly optional so an
/// override can also remove the policy (`Some(None)`).
#[derive(Clone, Default)]
pub struct CharacterOverrides {
    pub id: Option<CharacterId>,
    pub name: Option<String>,
    pub level: Option<u32>,
    pub stats: Option<BaseStats>,
    pub max_hp: Option<i32>,
    pub current_hp: Option<i32>,
    pub actions: Option<Vec<Action>>,
    pub policy: Option<Option<SharedPolicy>>,
}

/// Input describing the character to generate.
#[derive(Clone)]
pub struct CharacterTemplate {
    pub name: Option<String>,
    pub level: u32,
    pub archetype: Archetype,
    /// Defaults to [`Subtype::Balanced`].
    pub subtype: Option<Subtype>,
    /// Attach the first-action policy. Defaults to `true`.
    pub autonomous: bool,
    pub overrides: CharacterOverrides,
}

impl CharacterTemplate {
    pub fn new(archetype: Archetype, level: u32) -> Self {
        Self {
            name: None,
            level,
            archetype,
            subtype: None,
            autonomous: true,
            overrides: CharacterOverrides::default(),
        }
    }

    pub fn named(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_subtype(mut self, subtype: Subtype) -> Self {
        self.subtype = Some(subtype);
        self
    }

    /// Character that only acts on queued actions.
    pub fn manual(mut self) -> Self {
        self.autonomous = false;
        self
    }

    pub fn with_overrides(mut self, overrides: CharacterOverrides) -> Self {
        self.overrides = overrides;
        self
    }
}

/// Builds characters against one engine configuration.
#[derive(Clone, Copy, Debug)]
pub struct CharacterFactory<'a> {
    config: &'a EngineConfig,
}

impl<'a> CharacterFactory<'a> {
    pub fn new(config: &'a EngineConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &'a EngineConfig {
        self.config
    }

    /// Computes baseline stats without building a character.
    pub fn stats(&self, archetype: Archetype, subtype: Option<Subtype>, level: u32) -> BaseStats {
        derive_base_stats(archetype, subtype, level, self.config)
    }

    pub fn max_hp(&self, stats: &BaseStats) -> i32 {
        max_hp_for(stats, self.config)
    }

    /// Fresh copy of the default attack action.
    pub fn attack_action(&self) -> Action {
        Action::attack()
    }

    pub fn create(&self, template: &CharacterTemplate) -> Result<Character, CharacterError> {
        if template.level == 0 {
            return Err(CharacterError::InvalidLevel);
        }

        let stats = self.stats(template.archetype, template.subtype, template.level);
        let max_hp = self.max_hp(&stats);

        let character = Character {
            id: CharacterId::generate(),
            name: template.name.clone(),
            level: template.level,
            stats,
            current_hp: max_hp,
            max_hp,
            actions: vec![self.attack_action()],
            policy: template.autonomous.then(first_action),
        };

        let character = apply_overrides(character, &template.overrides);
        validate(&character)?;

        tracing::debug!(
            id = %character.id,
            name = %character.display_name(),
            archetype = %template.archetype,
            level = character.level,
            max_hp = character.max_hp,
            "character created"
        );

        Ok(character)
    }
}

fn apply_overrides(mut character: Character, overrides: &CharacterOverrides) -> Character {
    let overrides = overrides.clone();

    if let Some(id) = overrides.id {
        character.id = id;
    }
    if let Some(name) = overrides.name {
        character.name = Some(name);
    }
    if let Some(level) = overrides.level {
        character.level = level;
    }
    if let Some(stats) = overrides.stats {
        character.stats = stats;
    }
    if let Some(max_hp) = overrides.max_hp {
        character.max_hp = max_hp;
        character.current_hp = max_hp;
    }
    if let Some(current_hp) = overrides.current_hp {
        character.current_hp = current_hp;
    }
    if let Some(actions) = overrides.actions {
        character.actions = actions;
    }
    if let Some(policy) = overrides.policy {
        character.policy = policy;
    }

    character
}

fn validate(character: &Character) -> Result<(), CharacterError> {
    if character.level == 0 {
        return Err(CharacterError::InvalidLevel);
    }
    if character.actions.is_empty() {
        return Err(CharacterError::NoActions);
    }

    let DamageRange { min, max } = character.stats.damage;
    if !character.stats.damage.is_valid() {
        return Err(CharacterError::InvalidDamageRange { min, max });
    }

    let stats = &character.stats;
    for (stat, value) in [
        ("armor", stats.armor),
        ("power", stats.power),
        ("dexterity", stats.dexterity),
        ("stamina", stats.stamina),
    ] {
        if !value.is_finite() || value < 0.0 {
            return Err(CharacterError::InvalidStat { stat, value });
        }
    }

    if character.current_hp > character.max_hp {
        return Err(CharacterError::HitPointsAboveMaximum {
            current: character.current_hp,
            max: character.max_hp,
        });
    }

    Ok(())
}
