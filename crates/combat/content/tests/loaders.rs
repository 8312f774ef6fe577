use std::fs;

use skirmish_content::{ConfigLoader, RosterLoader};
use skirmish_core::{CombatEngine, LogEntryKind, Team};

const CONFIG: &str = r#"
stat_points_per_level = 4

[stats_modifiers]
attack_power = 1.5
dodge = 0.7
"#;

const ROSTER: &str = r#"(
    team_a: [
        (name: Some("Kyle"), archetype: "strong", subtype: Some("attacker"), level: 12),
        (name: Some("Ada"), archetype: "swift", level: 10),
    ],
    team_b: [
        (name: Some("Mia"), archetype: "tough", subtype: Some("defender"), level: 11),
    ],
)"#;

#[test]
fn loaded_content_drives_an_encounter() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("engine.toml");
    let roster_path = dir.path().join("roster.ron");
    fs::write(&config_path, CONFIG).unwrap();
    fs::write(&roster_path, ROSTER).unwrap();

    let config = ConfigLoader::load(&config_path).unwrap();
    assert_eq!(config.stat_points_per_level, 4);

    let engine = CombatEngine::new(config).unwrap();
    let roster = RosterLoader::load(&roster_path).unwrap();
    let (team_a, team_b) = roster.create(&engine.factory()).unwrap();

    assert_eq!(team_a.len(), 2);
    assert_eq!(team_b.len(), 1);
    // 12 levels × 4 points × 0.5
    assert_eq!(team_a[0].stats.power, 24.0);
    assert!(team_a.iter().chain(&team_b).all(|c| c.is_autonomous()));

    let mut encounter = engine.create_seeded_encounter(team_a, team_b, 99).unwrap();
    let winner = encounter.run(1_000).unwrap();
    assert!(matches!(winner, Some(Team::TeamA | Team::TeamB)));
    assert_eq!(encounter.log().last().unwrap().kind(), LogEntryKind::Win);
}

#[test]
fn missing_files_name_the_path() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("nope.toml");

    let err = ConfigLoader::load(&missing).unwrap_err();
    assert!(err.to_string().contains("nope.toml"));

    let err = RosterLoader::load(&dir.path().join("nope.ron")).unwrap_err();
    assert!(err.to_string().contains("nope.ron"));
}
