//! Leveling integration tests
//!
//! Exercises experience awards through the public API, including the
//! documented common-member walkthrough and monotonicity across random awards.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rankup::core::balance::required_experience;
use rankup::member::{
    apply_experience, level_up_gains, talent_growth_multiplier, LevelingStatus, Member, Rarity,
    Variation,
};

fn member_with_talent(rarity: Rarity, talent: u32) -> Member {
    Member::new(
        "member-1".to_string(),
        "player-1".to_string(),
        rarity,
        Variation {
            talent,
            ..Default::default()
        },
    )
}

// ============================================================================
// Documented walkthrough
// ============================================================================

#[test]
fn test_common_member_first_level_up() {
    let member = member_with_talent(Rarity::Common, 80);
    let before = member.stats;
    assert_eq!(required_experience(1), 100);

    let outcome = apply_experience(member, 100);
    assert_eq!(outcome.member.level, 2);
    assert_eq!(outcome.member.experience, 0);
    assert_eq!(outcome.level_ups.len(), 1);

    let mult = talent_growth_multiplier(80);
    let growth = Rarity::Common.growth();
    let expected_hp_gain = ((growth.hp as f64 * mult).floor() as u32).max(1);
    let expected_atk_gain = ((growth.attack as f64 * mult).floor() as u32).max(1);
    assert_eq!(outcome.level_ups[0].gains.hp, expected_hp_gain);
    assert_eq!(outcome.level_ups[0].gains.attack, expected_atk_gain);
    assert_eq!(outcome.member.stats.max_hp, before.max_hp + expected_hp_gain);
    assert_eq!(outcome.member.stats.hp, before.hp + expected_hp_gain);

    // A small follow-up award only accumulates
    let outcome = apply_experience(outcome.member, 5);
    assert_eq!(outcome.member.level, 2);
    assert_eq!(outcome.member.experience, 5);
    assert!(outcome.level_ups.is_empty());
}

#[test]
fn test_gains_match_helper() {
    for rarity in Rarity::all() {
        for talent in [0, 25, 50, 75, 100] {
            let outcome = apply_experience(member_with_talent(rarity, talent), 100);
            assert_eq!(outcome.level_ups[0].gains, level_up_gains(rarity, talent));
        }
    }
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_random_awards_are_monotonic_and_respect_invariants() {
    let mut rng = ChaCha8Rng::seed_from_u64(2024);

    for rarity in Rarity::all() {
        let mut member = Member::acquire("player-1", rarity, &mut rng);
        for _ in 0..200 {
            let before = member.clone();
            let award = rng.gen_range(0..20_000u64);
            let outcome = apply_experience(member, award);
            member = outcome.member;

            assert_eq!(outcome.status, LevelingStatus::Complete);
            assert!(member.level >= before.level);
            assert!(member.level <= rarity.level_cap());
            assert!(member.stats.max_hp >= before.stats.max_hp);
            assert!(member.stats.attack >= before.stats.attack);
            assert!(member.stats.defense >= before.stats.defense);
            assert!(member.stats.speed >= before.stats.speed);
            assert_eq!(
                member.level - before.level,
                outcome.level_ups.len() as u32
            );
            if member.level < rarity.level_cap() {
                assert!(member.experience < required_experience(member.level));
            }
            assert_eq!(member.variation, before.variation);
        }
    }
}

#[test]
fn test_level_up_events_are_consecutive() {
    let outcome = apply_experience(member_with_talent(Rarity::Legendary, 50), 250_000);
    for (i, event) in outcome.level_ups.iter().enumerate() {
        assert_eq!(event.from_level, i as u32 + 1);
        assert_eq!(event.to_level, event.from_level + 1);
    }
}

#[test]
fn test_hst_reaches_high_cap_in_one_award() {
    let outcome = apply_experience(member_with_talent(Rarity::Hst, 50), u64::MAX);
    assert_eq!(outcome.member.level, 999);
    assert_eq!(outcome.level_ups.len(), 998);
    assert_eq!(outcome.status, LevelingStatus::Complete);
}
