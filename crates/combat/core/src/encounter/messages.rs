//! Builders for log entries and their human-readable messages.

use crate::character::{Action, Team};

use super::log::{ActionRecord, CharacterRef, LogEntry, LogEvent};

pub fn round_summary(round: u32, order: Vec<CharacterRef>) -> LogEntry {
    let participants = order
        .iter()
        .map(|c| {
            format!(
                "{} ({}, {}/{} hp)",
                c.display_name(),
                c.team,
                c.current_hp,
                c.max_hp
            )
        })
        .collect::<Vec<_>>()
        .join(", ");

    LogEntry {
        round,
        message: format!("Round {round} order: {participants}"),
        event: LogEvent::RoundSummary { order },
    }
}

pub fn hit_points(round: u32, character: CharacterRef) -> LogEntry {
    LogEntry {
        round,
        message: format!(
            "{} current hp: {}",
            character.display_name(),
            character.current_hp
        ),
        event: LogEvent::HitPoints { character },
    }
}

pub fn miss(round: u32, attacker: CharacterRef, defender: CharacterRef, action: Action) -> LogEntry {
    LogEntry {
        round,
        message: format!(
            "{} attack ({}) missed {}",
            attacker.display_name(),
            action.label(),
            defender.display_name()
        ),
        event: LogEvent::Action(ActionRecord {
            attacker,
            defender,
            action,
            missed: true,
            damage: 0,
        }),
    }
}

pub fn hit(
    round: u32,
    attacker: CharacterRef,
    defender: CharacterRef,
    action: Action,
    damage: i32,
) -> LogEntry {
    LogEntry {
        round,
        message: format!(
            "{} attack ({}) hit {} for {damage}",
            attacker.display_name(),
            action.label(),
            defender.display_name()
        ),
        event: LogEvent::Action(ActionRecord {
            attacker,
            defender,
            action,
            missed: false,
            damage,
        }),
    }
}

pub fn death(round: u32, killed: CharacterRef) -> LogEntry {
    LogEntry {
        round,
        message: format!("{} is dead!", killed.display_name()),
        event: LogEvent::Death { killed },
    }
}

pub fn win(round: u32, team: Team) -> LogEntry {
    LogEntry {
        round,
        message: format!("{team} won the encounter!"),
        event: LogEvent::Win { team },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::character::CharacterId;
    use crate::encounter::LogEntryKind;

    fn kyle() -> CharacterRef {
        CharacterRef {
            id: CharacterId::from_u128(1),
            name: Some("Kyle".into()),
            team: Team::TeamA,
            current_hp: 30,
            max_hp: 38,
        }
    }

    fn anonymous() -> CharacterRef {
        CharacterRef {
            id: CharacterId::from_u128(2),
            name: None,
            team: Team::TeamB,
            current_hp: -4,
            max_hp: 38,
        }
    }

    #[test]
    fn messages_read_naturally() {
        assert_eq!(
            round_summary(3, vec![kyle()]).message,
            "Round 3 order: Kyle (Team A, 30/38 hp)"
        );
        assert_eq!(hit_points(1, kyle()).message, "Kyle current hp: 30");
        assert_eq!(
            hit(1, kyle(), anonymous(), Action::attack(), 19).message,
            format!("Kyle attack (Attack) hit {} for 19", CharacterId::from_u128(2))
        );
        assert_eq!(
            miss(1, kyle(), anonymous(), Action::attack()).message,
            format!("Kyle attack (Attack) missed {}", CharacterId::from_u128(2))
        );
        assert_eq!(death(2, kyle()).message, "Kyle is dead!");
        assert_eq!(win(2, Team::TeamB).message, "Team B won the encounter!");
    }

    #[test]
    fn entries_carry_their_kind() {
        assert_eq!(round_summary(1, vec![]).kind(), LogEntryKind::General);
        assert_eq!(hit_points(1, kyle()).kind(), LogEntryKind::General);

        let missed = miss(1, kyle(), anonymous(), Action::attack());
        assert_eq!(missed.kind(), LogEntryKind::Action);
        let record = missed.action().unwrap();
        assert!(record.missed);
        assert_eq!(record.damage, 0);

        let killed = death(1, anonymous());
        assert_eq!(killed.kind(), LogEntryKind::Death);
        assert_eq!(killed.killed().map(|c| c.id), Some(CharacterId::from_u128(2)));

        let won = win(1, Team::TeamA);
        assert_eq!(won.kind(), LogEntryKind::Win);
        assert_eq!(won.winner(), Some(Team::TeamA));
    }
}
