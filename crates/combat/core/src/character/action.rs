use std::fmt;

/// Identifier of an action within a character's action list.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ActionId(pub u32);

impl ActionId {
    /// Reserved identifier of the default attack.
    pub const ATTACK: Self = Self(0);
}

impl fmt::Display for ActionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "action#{}", self.0)
    }
}

/// Modifiers applied to the rolled base damage of an action.
///
/// `rolled × multiply_factor + add_factor`
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DamageModifiers {
    pub add_factor: f64,
    pub multiply_factor: f64,
}

impl DamageModifiers {
    pub const NEUTRAL: Self = Self {
        add_factor: 0.0,
        multiply_factor: 1.0,
    };

    pub const fn new(add_factor: f64, multiply_factor: f64) -> Self {
        Self {
            add_factor,
            multiply_factor,
        }
    }
}

impl Default for DamageModifiers {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// Something a character can do on its turn. Immutable value.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Action {
    pub id: ActionId,
    pub name: Option<String>,
    pub modifiers: DamageModifiers,
}

impl Action {
    pub fn new(id: ActionId, name: impl Into<String>, modifiers: DamageModifiers) -> Self {
        Self {
            id,
            name: Some(name.into()),
            modifiers,
        }
    }

    /// Plain attack without damage bonuses.
    ///
    /// Returns a fresh value on every call.
    pub fn attack() -> Self {
        Self::new(ActionId::ATTACK, "Attack", DamageModifiers::NEUTRAL)
    }

    /// Name used in log messages, falling back to the id.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => self.id.to_string(),
        }
    }
}
