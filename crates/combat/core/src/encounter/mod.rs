//! Round-based encounter simulation.
//!
//! An [`Encounter`] owns one battle between two rosters and is the only
//! mutator of hit points while it runs. Every call to [`Encounter::tick`]
//! resolves one round:
//!
//! 1. Stop if a team already won
//! 2. Draw the round order, weighted by initiative
//! 3. Ask autonomous policies for their actions
//! 4. Resolve each pending action in order: target, hit check, damage,
//!    deaths, win check
//!
//! The append-only [`LogEntry`] list is the record of everything that
//! happened.

mod errors;
mod log;
mod messages;
mod state;
mod turns;

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

use rand::RngCore;

pub use errors::EncounterError;
pub use log::{ActionRecord, CharacterRef, LogEntry, LogEntryKind, LogEvent};
pub use state::{Combatant, CombatantState, EncounterId, EncounterState};
pub use turns::{weighted_order, weighted_pick};

use crate::character::{Action, Character, CharacterId, Team};
use crate::combat::resolve_attack;
use crate::config::{EngineConfig, TargetSelection};
use crate::env::{CombatRng, RngOracle};

/// Callback invoked with every log entry as soon as it is produced.
pub type LogObserver = Box<dyn FnMut(&LogEntry) + Send>;

/// Result of a [`Encounter::tick`] call.
#[derive(Clone, Debug, PartialEq)]
pub enum TickOutcome {
    /// Entries produced by the round that was just resolved.
    Round(Vec<LogEntry>),
    /// The encounter was already over; nothing happened.
    Concluded,
}

impl TickOutcome {
    pub fn is_concluded(&self) -> bool {
        matches!(self, Self::Concluded)
    }

    pub fn entries(&self) -> &[LogEntry] {
        match self {
            Self::Round(entries) => entries,
            Self::Concluded => &[],
        }
    }
}

/// One battle between team A and team B.
pub struct Encounter<R = CombatRng> {
    id: EncounterId,
    /// Team A members first, then team B, in roster order.
    combatants: Vec<Combatant>,
    index: BTreeMap<CharacterId, usize>,
    targeting: TargetSelection,
    round: u32,
    pending: BTreeMap<CharacterId, Action>,
    log: Vec<LogEntry>,
    rng: R,
    observer: Option<LogObserver>,
}

impl<R: RngCore> Encounter<R> {
    /// Enrolls both rosters, deriving each member's combat stats.
    ///
    /// # Errors
    ///
    /// - [`EncounterError::InvalidConfig`] if `config` fails validation
    /// - [`EncounterError::InvalidRoster`] if either roster is empty
    /// - [`EncounterError::InvalidCharacterState`] if a member has no hit points
    /// - [`EncounterError::DuplicateCharacter`] if an id appears twice
    pub fn new(
        team_a: Vec<Character>,
        team_b: Vec<Character>,
        config: &EngineConfig,
        rng: R,
    ) -> Result<Self, EncounterError> {
        config.validate()?;

        for (team, roster) in [(Team::TeamA, &team_a), (Team::TeamB, &team_b)] {
            if roster.is_empty() {
                return Err(EncounterError::InvalidRoster { team });
            }
        }

        let mut combatants = Vec::with_capacity(team_a.len() + team_b.len());
        let mut index = BTreeMap::new();

        let enrolled = team_a
            .into_iter()
            .map(|c| (c, Team::TeamA))
            .chain(team_b.into_iter().map(|c| (c, Team::TeamB)));

        for (character, team) in enrolled {
            if character.current_hp <= 0 {
                return Err(EncounterError::InvalidCharacterState {
                    id: character.id,
                    current_hp: character.current_hp,
                });
            }
            if index.insert(character.id, combatants.len()).is_some() {
                return Err(EncounterError::DuplicateCharacter { id: character.id });
            }
            combatants.push(Combatant::enroll(character, team, &config.stats_modifiers));
        }

        let id = EncounterId::generate();
        tracing::debug!(%id, participants = combatants.len(), "encounter created");

        Ok(Self {
            id,
            combatants,
            index,
            targeting: config.targeting,
            round: 1,
            pending: BTreeMap::new(),
            log: Vec::new(),
            rng,
            observer: None,
        })
    }

    pub fn id(&self) -> EncounterId {
        self.id
    }

    /// Round that the next tick will resolve.
    pub fn round(&self) -> u32 {
        self.round
    }

    /// Full log, oldest entry first.
    pub fn log(&self) -> &[LogEntry] {
        &self.log
    }

    pub fn is_concluded(&self) -> bool {
        self.winner().is_some()
    }

    pub fn winner(&self) -> Option<Team> {
        self.log.iter().rev().find_map(LogEntry::winner)
    }

    pub fn combatant(&self, id: CharacterId) -> Option<&Combatant> {
        self.index.get(&id).map(|&i| &self.combatants[i])
    }

    pub fn team(&self, team: Team) -> impl Iterator<Item = &Combatant> {
        self.combatants.iter().filter(move |c| c.team() == team)
    }

    pub fn team_a(&self) -> impl Iterator<Item = &Combatant> {
        self.team(Team::TeamA)
    }

    pub fn team_b(&self) -> impl Iterator<Item = &Combatant> {
        self.team(Team::TeamB)
    }

    /// Serializable snapshot of both rosters.
    pub fn state(&self) -> EncounterState {
        EncounterState {
            id: self.id,
            round: self.round,
            concluded: self.is_concluded(),
            team_a: self.team_a().map(CombatantState::from).collect(),
            team_b: self.team_b().map(CombatantState::from).collect(),
        }
    }

    /// Registers a callback receiving every entry as it is produced.
    pub fn set_log_observer(&mut self, observer: impl FnMut(&LogEntry) + Send + 'static) {
        self.observer = Some(Box::new(observer));
    }

    /// Queues `action` for `character` for the next tick only.
    ///
    /// An autonomous policy attached to the character overrides the queued
    /// action when the round starts.
    pub fn add_action(&mut self, character: CharacterId, action: Action) -> Result<(), EncounterError> {
        if !self.index.contains_key(&character) {
            return Err(EncounterError::UnknownCharacter { id: character });
        }
        self.pending.insert(character, action);
        Ok(())
    }

    /// Drops every action queued for the next tick.
    pub fn clear_actions(&mut self) {
        self.pending.clear();
    }

    /// Resolves one round.
    ///
    /// Returns [`TickOutcome::Concluded`] without touching any state once a
    /// team has won.
    ///
    /// # Errors
    ///
    /// [`EncounterError::WeightedDrawExhausted`] signals an engine defect.
    pub fn tick(&mut self) -> Result<TickOutcome, EncounterError> {
        if self.is_concluded() {
            return Ok(TickOutcome::Concluded);
        }

        let round = self.round;
        let mut entries = Vec::new();

        let order = self.round_order()?;
        let summary = messages::round_summary(
            round,
            order.iter().map(|&i| CharacterRef::from(&self.combatants[i])).collect(),
        );
        self.emit(&mut entries, summary);

        self.collect_policy_actions();

        // Members of this round that are still standing; the iteration source
        // (`order`) itself is never modified.
        let mut standing: BTreeSet<usize> = order.iter().copied().collect();
        let mut concluded = false;

        for &actor in &order {
            if concluded {
                break;
            }
            if !standing.contains(&actor) {
                continue;
            }
            let Some(action) = self.pending.get(&self.combatants[actor].id()).cloned() else {
                continue;
            };
            let Some(target) = self.pick_opponent(actor) else {
                tracing::debug!(round, actor = %self.combatants[actor].id(), "no opponent to target");
                continue;
            };

            let attacker_ref = CharacterRef::from(&self.combatants[actor]);
            let defender_ref = CharacterRef::from(&self.combatants[target]);
            let result = resolve_attack(
                &action.modifiers,
                self.combatants[actor].stats(),
                self.combatants[target].stats(),
                &mut self.rng,
            );

            if !result.is_hit() {
                let entry = messages::miss(round, attacker_ref, defender_ref, action);
                self.emit(&mut entries, entry);
                continue;
            }

            let damage = result.damage_dealt();
            self.combatants[target].take_damage(damage);
            let entry = messages::hit(round, attacker_ref, defender_ref, action, damage);
            self.emit(&mut entries, entry);
            let entry = messages::hit_points(round, CharacterRef::from(&self.combatants[target]));
            self.emit(&mut entries, entry);

            let fallen: Vec<usize> = order
                .iter()
                .copied()
                .filter(|i| standing.contains(i) && !self.combatants[*i].is_alive())
                .collect();
            for i in fallen {
                standing.remove(&i);
                let entry = messages::death(round, CharacterRef::from(&self.combatants[i]));
                self.emit(&mut entries, entry);
            }

            if let Some(team) = self.surviving_team(&standing) {
                let entry = messages::win(round, team);
                self.emit(&mut entries, entry);
                concluded = true;
            }
        }

        self.log.extend(entries.iter().cloned());
        self.pending.clear();
        self.round += 1;

        if let Some(team) = self.winner() {
            tracing::info!(id = %self.id, rounds = round, winner = %team, "encounter concluded");
        }

        Ok(TickOutcome::Round(entries))
    }

    /// Runs ticks until a team wins or `max_rounds` rounds were resolved.
    ///
    /// Only autonomous characters act; queued actions apply to the first
    /// round only. Returns the winner, if any.
    pub fn run(&mut self, max_rounds: u32) -> Result<Option<Team>, EncounterError> {
        for _ in 0..max_rounds {
            if self.tick()?.is_concluded() {
                break;
            }
        }
        Ok(self.winner())
    }

    /// Gives the characters back with the hit points they ended with.
    pub fn into_characters(self) -> (Vec<Character>, Vec<Character>) {
        let mut team_a = Vec::new();
        let mut team_b = Vec::new();
        for combatant in self.combatants {
            match combatant.team() {
                Team::TeamA => team_a.push(combatant.into_character()),
                Team::TeamB => team_b.push(combatant.into_character()),
            }
        }
        (team_a, team_b)
    }

    /// Living characters from both rosters drawn by initiative.
    fn round_order(&mut self) -> Result<Vec<usize>, EncounterError> {
        let living: Vec<usize> = (0..self.combatants.len())
            .filter(|&i| self.combatants[i].is_alive())
            .collect();
        let weights: Vec<f64> = living
            .iter()
            .map(|&i| self.combatants[i].stats().initiative)
            .collect();

        let order = weighted_order(&weights, &mut self.rng)?;
        Ok(order.into_iter().map(|k| living[k]).collect())
    }

    /// The policy's choice always replaces a queued action, including a
    /// choice to pass.
    fn collect_policy_actions(&mut self) {
        for combatant in &self.combatants {
            let character = combatant.character();
            if !character.is_autonomous() {
                continue;
            }
            match character.choose_action() {
                Some(action) => {
                    self.pending.insert(character.id, action);
                }
                None => {
                    self.pending.remove(&character.id);
                }
            }
        }
    }

    fn pick_opponent(&mut self, actor: usize) -> Option<usize> {
        let opposing = self.combatants[actor].team().opponent();
        let pool: Vec<usize> = (0..self.combatants.len())
            .filter(|&i| {
                let candidate = &self.combatants[i];
                candidate.team() == opposing
                    && match self.targeting {
                        TargetSelection::LivingOnly => candidate.is_alive(),
                        TargetSelection::AnyMember => true,
                    }
            })
            .collect();

        if pool.is_empty() {
            return None;
        }
        Some(pool[self.rng.pick_index(pool.len())])
    }

    /// The team left standing when the other one has no living member.
    fn surviving_team(&self, standing: &BTreeSet<usize>) -> Option<Team> {
        let alive = |team: Team| {
            standing.iter().any(|&i| {
                let combatant = &self.combatants[i];
                combatant.team() == team && combatant.is_alive()
            })
        };

        match (alive(Team::TeamA), alive(Team::TeamB)) {
            (true, false) => Some(Team::TeamA),
            (false, true) => Some(Team::TeamB),
            _ => None,
        }
    }

    fn emit(&mut self, entries: &mut Vec<LogEntry>, entry: LogEntry) {
        tracing::debug!(round = entry.round, kind = %entry.kind(), "{}", entry.message);
        if let Some(observer) = self.observer.as_mut() {
            observer(&entry);
        }
        entries.push(entry);
    }
}

impl<R> fmt::Debug for Encounter<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Encounter")
            .field("id", &self.id)
            .field("round", &self.round)
            .field("combatants", &self.combatants)
            .field("pending", &self.pending)
            .field("log_len", &self.log.len())
            .finish()
    }
}
