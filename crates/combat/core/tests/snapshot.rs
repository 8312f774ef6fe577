#![cfg(feature = "serde")]

use skirmish_core::{
    Archetype, CharacterTemplate, CombatEngine, EncounterState, EngineConfig, LogEntry,
    TargetSelection,
};

#[test]
fn encounter_state_survives_json() {
    let engine = CombatEngine::default();
    let factory = engine.factory();
    let kyle = factory
        .create(&CharacterTemplate::new(Archetype::Strong, 4).named("Kyle"))
        .unwrap();
    let mia = factory
        .create(&CharacterTemplate::new(Archetype::Tough, 4).named("Mia"))
        .unwrap();

    let mut encounter = engine.create_seeded_encounter(vec![kyle], vec![mia], 17).unwrap();
    encounter.tick().unwrap();

    let state = encounter.state();
    let json = serde_json::to_string(&state).unwrap();
    let decoded: EncounterState = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded, state);

    let log = serde_json::to_string(encounter.log()).unwrap();
    let decoded: Vec<LogEntry> = serde_json::from_str(&log).unwrap();
    assert_eq!(decoded, encounter.log());
}

#[test]
fn partial_config_falls_back_to_defaults() {
    let config: EngineConfig =
        serde_json::from_str(r#"{ "stat_points_per_level": 4, "targeting": "any_member" }"#)
            .unwrap();
    assert_eq!(config.stat_points_per_level, 4);
    assert_eq!(config.targeting, TargetSelection::AnyMember);
    assert_eq!(config.max_hp_modifier, EngineConfig::DEFAULT_MAX_HP_MODIFIER);
}
