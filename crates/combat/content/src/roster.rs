//! Textual character templates and rosters.
//!
//! Rosters are authored as data, so archetypes and subtypes arrive as names
//! and are resolved against the closed core enums here. Unknown names fail
//! with [`StatsError::InvalidEnum`].

use std::str::FromStr;

use skirmish_core::{
    Action, Archetype, Character, CharacterError, CharacterFactory, CharacterOverrides,
    CharacterTemplate, StatsError, Subtype,
};

/// Character template with textual archetype and subtype.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TemplateSpec {
    #[cfg_attr(feature = "serde", serde(default))]
    pub name: Option<String>,
    pub archetype: String,
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtype: Option<String>,
    pub level: u32,
    #[cfg_attr(feature = "serde", serde(default = "autonomous_by_default"))]
    pub autonomous: bool,
    /// Replaces the generated hit points (current and maximum).
    #[cfg_attr(feature = "serde", serde(default))]
    pub max_hp: Option<i32>,
    /// Replaces the default attack.
    #[cfg_attr(feature = "serde", serde(default))]
    pub actions: Option<Vec<Action>>,
}

#[cfg(feature = "serde")]
fn autonomous_by_default() -> bool {
    true
}

impl TemplateSpec {
    pub fn new(archetype: impl Into<String>, level: u32) -> Self {
        Self {
            name: None,
            archetype: archetype.into(),
            subtype: None,
            level,
            autonomous: true,
            max_hp: None,
            actions: None,
        }
    }

    /// Resolves names into a core template.
    pub fn to_template(&self) -> Result<CharacterTemplate, StatsError> {
        let archetype = Archetype::parse(&self.archetype)?;
        let subtype = self.subtype.as_deref().map(Subtype::parse).transpose()?;

        let mut template = CharacterTemplate::new(archetype, self.level);
        template.name = self.name.clone();
        template.subtype = subtype;
        template.autonomous = self.autonomous;
        template.overrides = CharacterOverrides {
            max_hp: self.max_hp,
            actions: self.actions.clone(),
            ..CharacterOverrides::default()
        };
        Ok(template)
    }
}

/// Compact form `ARCHETYPE[:SUBTYPE]@LEVEL`, e.g. `strong:attacker@10`.
impl FromStr for TemplateSpec {
    type Err = StatsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StatsError::InvalidEnum {
            kind: "template",
            value: s.to_string(),
        };

        let (kinds, level) = s.trim().split_once('@').ok_or_else(invalid)?;
        let level: u32 = level.trim().parse().map_err(|_| invalid())?;
        let (archetype, subtype) = match kinds.split_once(':') {
            Some((archetype, subtype)) => (archetype, Some(subtype)),
            None => (kinds, None),
        };

        let spec = Self {
            subtype: subtype.map(|s| s.trim().to_string()),
            ..Self::new(archetype.trim(), level)
        };
        spec.to_template()?;
        Ok(spec)
    }
}

/// Two teams of templates.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RosterSpec {
    pub team_a: Vec<TemplateSpec>,
    pub team_b: Vec<TemplateSpec>,
}

/// Failure while turning a roster into characters.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    #[error("{team} member #{index}: {source}")]
    Template {
        team: &'static str,
        index: usize,
        #[source]
        source: StatsError,
    },

    #[error("{team} member #{index}: {source}")]
    Character {
        team: &'static str,
        index: usize,
        #[source]
        source: CharacterError,
    },
}

impl RosterSpec {
    /// Builds both teams through `factory`.
    pub fn create(
        &self,
        factory: &CharacterFactory<'_>,
    ) -> Result<(Vec<Character>, Vec<Character>), RosterError> {
        Ok((
            create_team("team_a", &self.team_a, factory)?,
            create_team("team_b", &self.team_b, factory)?,
        ))
    }
}

fn create_team(
    team: &'static str,
    specs: &[TemplateSpec],
    factory: &CharacterFactory<'_>,
) -> Result<Vec<Character>, RosterError> {
    specs
        .iter()
        .enumerate()
        .map(|(index, spec)| {
            let template = spec
                .to_template()
                .map_err(|source| RosterError::Template { team, index, source })?;
            factory
                .create(&template)
                .map_err(|source| RosterError::Character { team, index, source })
        })
        .collect()
}
