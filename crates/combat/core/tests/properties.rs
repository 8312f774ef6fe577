use proptest::prelude::*;

use skirmish_core::combat::{calculate_damage, calculate_hit_chance, roll_hit};
use skirmish_core::env::{CombatRng, seeded};
use skirmish_core::stats::{BaseStats, CombatStats, DamageRange};
use skirmish_core::{Archetype, DamageModifiers, EngineConfig, StatsModifiers, Subtype};

fn archetype() -> impl Strategy<Value = Archetype> {
    prop_oneof![
        Just(Archetype::Strong),
        Just(Archetype::Swift),
        Just(Archetype::Tough),
    ]
}

fn subtype() -> impl Strategy<Value = Subtype> {
    prop_oneof![
        Just(Subtype::Attacker),
        Just(Subtype::Balanced),
        Just(Subtype::Defender),
    ]
}

fn combat_stats(power: f64, dexterity: f64, armor: f64, max_damage: i32) -> CombatStats {
    let base = BaseStats {
        damage: DamageRange::from_max(max_damage),
        armor,
        power,
        dexterity,
        stamina: 1.0,
    };
    CombatStats::derive(&base, &StatsModifiers::IDENTITY)
}

proptest! {
    #[test]
    fn signature_stat_dominates(level in 1u32..=100, subtype in subtype()) {
        let config = EngineConfig::default();
        let strong = BaseStats::derive(Archetype::Strong, subtype, level, &config);
        let swift = BaseStats::derive(Archetype::Swift, subtype, level, &config);
        let tough = BaseStats::derive(Archetype::Tough, subtype, level, &config);

        prop_assert!(strong.power > strong.dexterity && strong.power > strong.stamina);
        prop_assert!(swift.dexterity > swift.power && swift.dexterity > swift.stamina);
        prop_assert!(tough.stamina > tough.power && tough.stamina > tough.dexterity);

        // and no other archetype beats it on its own stat
        prop_assert!(strong.power > swift.power && strong.power > tough.power);
        prop_assert!(swift.dexterity > strong.dexterity && swift.dexterity > tough.dexterity);
        prop_assert!(tough.stamina > strong.stamina && tough.stamina > swift.stamina);
    }

    #[test]
    fn subtypes_trade_damage_for_armor(level in 1u32..=100, archetype in archetype()) {
        let config = EngineConfig::default();
        let derive = |subtype| BaseStats::derive(archetype, subtype, level, &config);
        let (attacker, balanced, defender) =
            (derive(Subtype::Attacker), derive(Subtype::Balanced), derive(Subtype::Defender));

        prop_assert!(attacker.damage.max > balanced.damage.max);
        prop_assert!(balanced.damage.max > defender.damage.max);
        prop_assert!(defender.armor > balanced.armor);
        prop_assert!(balanced.armor > attacker.armor);
    }

    #[test]
    fn derived_damage_range_is_valid(level in 1u32..=200, archetype in archetype(), subtype in subtype()) {
        let stats = BaseStats::derive(archetype, subtype, level, &EngineConfig::default());
        prop_assert!(stats.damage.is_valid());
        prop_assert!(stats.damage.min <= stats.damage.max);
    }

    #[test]
    fn damage_is_never_negative(
        add in -500.0f64..500.0,
        multiply in 0.0f64..5.0,
        rolled in 0i32..200,
        power in 0.0f64..300.0,
        armor in 0.0f64..500.0,
    ) {
        let attacker = combat_stats(power, 10.0, 10.0, 20);
        let defender = combat_stats(5.0, 10.0, armor, 20);
        let damage = calculate_damage(&DamageModifiers::new(add, multiply), &attacker, &defender, rolled);
        prop_assert!(damage >= 0);
    }

    #[test]
    fn hit_chance_is_a_probability(hit in 0.0f64..1_000.0, dodge in 0.0f64..1_000.0) {
        let chance = calculate_hit_chance(hit, dodge);
        prop_assert!((0.0..=1.0).contains(&chance));
    }
}

#[test]
fn hit_rate_grows_with_hit_rating() {
    let defender = combat_stats(5.0, 10.0, 10.0, 10);
    let mut rng = seeded(2024);

    let rate = |dexterity: f64, rng: &mut CombatRng| {
        let attacker = combat_stats(5.0, dexterity, 10.0, 10);
        let hits = (0..5_000)
            .filter(|_| roll_hit(&attacker, &defender, rng))
            .count();
        hits as f64 / 5_000.0
    };

    let low = rate(5.0, &mut rng);
    let mid = rate(10.0, &mut rng);
    let high = rate(20.0, &mut rng);
    assert!(low < mid && mid < high, "{low} {mid} {high}");
    assert!((mid - 0.5).abs() < 0.05, "equal ratings should hit half the time, got {mid}");
}
