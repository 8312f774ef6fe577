//! Character archetypes and subtypes.
//!
//! The archetype decides which allocation stat dominates; the subtype trades
//! damage against armor independently of the archetype.

use core::str::FromStr;

use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Errors produced while mapping generation inputs to stats.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StatsError {
    #[error("unknown {kind} '{value}'")]
    InvalidEnum { kind: &'static str, value: String },
}

impl crate::error::CombatError for StatsError {
    fn severity(&self) -> crate::error::ErrorSeverity {
        crate::error::ErrorSeverity::Validation
    }

    fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidEnum { .. } => "STATS_INVALID_ENUM",
        }
    }
}

/// Share of the level's stat points given to each allocation stat.
///
/// The three shares always sum to `1.0`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatAllocation {
    pub power: f64,
    pub dexterity: f64,
    pub stamina: f64,
}

impl StatAllocation {
    const SIGNATURE: f64 = 0.5;
    const SECONDARY: f64 = 0.25;
}

/// Character build determining the dominant allocation stat.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Archetype {
    /// Deals more damage.
    Strong,
    /// Hits and dodges more often, acts earlier.
    Swift,
    /// Has more hit points.
    Tough,
}

impl Archetype {
    pub const fn allocation(self) -> StatAllocation {
        use StatAllocation as A;
        match self {
            Self::Strong => A {
                power: A::SIGNATURE,
                dexterity: A::SECONDARY,
                stamina: A::SECONDARY,
            },
            Self::Swift => A {
                power: A::SECONDARY,
                dexterity: A::SIGNATURE,
                stamina: A::SECONDARY,
            },
            Self::Tough => A {
                power: A::SECONDARY,
                dexterity: A::SECONDARY,
                stamina: A::SIGNATURE,
            },
        }
    }

    /// Parses a case-insensitive archetype name.
    pub fn parse(value: &str) -> Result<Self, StatsError> {
        Self::from_str(value.trim()).map_err(|_| StatsError::InvalidEnum {
            kind: "archetype",
            value: value.to_owned(),
        })
    }
}

/// Damage/armor trade-off applied on top of the archetype.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Display, AsRefStr, EnumIter, EnumString,
)]
#[strum(ascii_case_insensitive)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Subtype {
    /// Damage bonus, weaker armor.
    Attacker,
    #[default]
    Balanced,
    /// Armor bonus, weaker damage.
    Defender,
}

impl Subtype {
    const GOOD: f64 = 1.2;
    const NORMAL: f64 = 1.0;
    const BAD: f64 = 0.8;

    /// Multiplier applied to maximum damage.
    pub const fn damage_factor(self) -> f64 {
        match self {
            Self::Attacker => Self::GOOD,
            Self::Balanced => Self::NORMAL,
            Self::Defender => Self::BAD,
        }
    }

    /// Multiplier applied to armor, inverted relative to damage.
    pub const fn armor_factor(self) -> f64 {
        match self {
            Self::Attacker => Self::BAD,
            Self::Balanced => Self::NORMAL,
            Self::Defender => Self::GOOD,
        }
    }

    /// Parses a case-insensitive subtype name.
    pub fn parse(value: &str) -> Result<Self, StatsError> {
        Self::from_str(value.trim()).map_err(|_| StatsError::InvalidEnum {
            kind: "subtype",
            value: value.to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn allocations_sum_to_one_and_signature_dominates() {
        for archetype in Archetype::iter() {
            let a = archetype.allocation();
            assert!((a.power + a.dexterity + a.stamina - 1.0).abs() < f64::EPSILON);

            let signature = match archetype {
                Archetype::Strong => a.power,
                Archetype::Swift => a.dexterity,
                Archetype::Tough => a.stamina,
            };
            assert_eq!(signature, 0.5);
        }
    }

    #[test]
    fn subtype_factors_are_inverted() {
        for subtype in Subtype::iter() {
            assert!((subtype.damage_factor() + subtype.armor_factor() - 2.0).abs() < 1e-9);
        }
        assert_eq!(Subtype::default(), Subtype::Balanced);
    }

    #[test]
    fn parse_is_case_insensitive() {
        assert_eq!(Archetype::parse("swift"), Ok(Archetype::Swift));
        assert_eq!(Archetype::parse(" TOUGH "), Ok(Archetype::Tough));
        assert_eq!(Subtype::parse("defender"), Ok(Subtype::Defender));
    }

    #[test]
    fn parse_unknown_value_is_invalid_enum() {
        let err = Archetype::parse("Sneaky").unwrap_err();
        assert_eq!(
            err,
            StatsError::InvalidEnum {
                kind: "archetype",
                value: "Sneaky".into()
            }
        );

        let err = Subtype::parse("Tank").unwrap_err();
        assert!(matches!(err, StatsError::InvalidEnum { kind: "subtype", .. }));
    }
}
