//! Autonomous action selection.
//!
//! A character carrying an [`ActionPolicy`] picks its own action at the start
//! of every round; the encounter knows nothing about how the choice is made.

use std::sync::Arc;

use super::action::Action;

/// Strategy choosing a character's action for the coming round.
pub trait ActionPolicy: Send + Sync {
    /// Returns the action to perform, or `None` to pass the round.
    fn choose_action(&self, actions: &[Action]) -> Option<Action>;
}

impl<F> ActionPolicy for F
where
    F: Fn(&[Action]) -> Option<Action> + Send + Sync,
{
    fn choose_action(&self, actions: &[Action]) -> Option<Action> {
        self(actions)
    }
}

/// Always picks the first available action.
#[derive(Clone, Copy, Debug, Default)]
pub struct FirstActionPolicy;

impl ActionPolicy for FirstActionPolicy {
    fn choose_action(&self, actions: &[Action]) -> Option<Action> {
        actions.first().cloned()
    }
}

/// Shared handle to a policy, as stored on characters.
pub type SharedPolicy = Arc<dyn ActionPolicy>;

/// Shared [`FirstActionPolicy`] handle.
pub fn first_action() -> SharedPolicy {
    Arc::new(FirstActionPolicy)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::action::{ActionId, DamageModifiers};

    #[test]
    fn first_action_policy_picks_head() {
        let actions = vec![
            Action::attack(),
            Action::new(ActionId(1), "Smash", DamageModifiers::new(5.0, 1.0)),
        ];
        assert_eq!(FirstActionPolicy.choose_action(&actions), Some(Action::attack()));
        assert_eq!(FirstActionPolicy.choose_action(&[]), None);
    }

    #[test]
    fn closures_are_policies() {
        let last = |actions: &[Action]| actions.last().cloned();
        let policy: SharedPolicy = Arc::new(last);
        let actions = vec![
            Action::attack(),
            Action::new(ActionId(1), "Smash", DamageModifiers::new(5.0, 1.0)),
        ];
        assert_eq!(policy.choose_action(&actions).map(|a| a.id), Some(ActionId(1)));
    }
}
