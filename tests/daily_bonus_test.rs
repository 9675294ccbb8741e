//! Daily bonus flows: the streak across real calendar gaps, the 14-day
//! reward cycle, the master bonus, and paid streak restoration.

use posad::core::constants::*;
use posad::core::game_logic::{claim_daily_bonus, restore_streak};
use posad::core::game_state::GameState;
use posad::economy::daily::{daily_reward, DAILY_CYCLE};

const HOUR: i64 = 3600;
const DAY: i64 = 24 * HOUR;

#[test]
fn test_fourteen_daily_claims_walk_the_cycle() {
    let mut state = GameState::new("tester", 0);
    let start_silver = state.currencies.silver;

    let mut expected_silver = 0;
    let mut expected_gold = 0;
    let mut expected_stars = 0;
    for day in 0..14 {
        assert!(claim_daily_bonus(&mut state, day * DAY + HOUR));
        let reward = DAILY_CYCLE[day as usize];
        expected_silver += reward.silver;
        expected_gold += reward.gold;
        expected_stars += reward.stars;
    }

    assert_eq!(state.daily_streak, 14);
    assert_eq!(state.currencies.silver, start_silver + expected_silver);
    assert_eq!(state.currencies.gold, expected_gold);
    assert_eq!(state.currencies.stars, expected_stars);
}

#[test]
fn test_day_fifteen_pays_day_one_plus_master_bonus() {
    let mut state = GameState::new("tester", 0);
    for day in 0..14 {
        assert!(claim_daily_bonus(&mut state, day * DAY + HOUR));
    }
    let silver_before = state.currencies.silver;
    let gold_before = state.currencies.gold;

    assert!(claim_daily_bonus(&mut state, 14 * DAY + HOUR));
    assert_eq!(state.daily_streak, 15);
    assert_eq!(
        state.currencies.silver,
        silver_before + daily_reward(15).silver + MASTER_BONUS_SILVER
    );
    assert_eq!(state.currencies.gold, gold_before + MASTER_BONUS_GOLD);
    assert_eq!(daily_reward(15), daily_reward(1));
}

#[test]
fn test_same_day_double_claim_is_rejected() {
    let mut state = GameState::new("tester", 0);
    assert!(claim_daily_bonus(&mut state, 0));
    let snapshot = state.currencies;
    assert!(!claim_daily_bonus(&mut state, 10 * HOUR));
    assert!(!claim_daily_bonus(&mut state, 23 * HOUR + 3599));
    assert_eq!(state.currencies, snapshot);
    assert_eq!(state.daily_streak, 1);
}

#[test]
fn test_grace_window_freezes_without_breaking() {
    let mut state = GameState::new("tester", 0);
    for day in 0..5 {
        assert!(claim_daily_bonus(&mut state, day * DAY + HOUR));
    }
    assert_eq!(state.daily_streak, 5);

    // Coming back 60 hours later lands in the freeze window
    let late = 4 * DAY + HOUR + 60 * HOUR;
    assert!(claim_daily_bonus(&mut state, late));
    assert_eq!(state.daily_streak, 5, "freeze keeps the streak");
    // The frozen day still paid out its streak-day reward
    assert!(state.currencies.silver > 250);
}

#[test]
fn test_rollback_and_paid_restore() {
    let mut state = GameState::new("tester", 0);
    state.currencies.stars = 50;
    for day in 0..10 {
        assert!(claim_daily_bonus(&mut state, day * DAY + HOUR));
    }
    assert_eq!(state.daily_streak, 10);

    // Four days away: rollback costs two streak days
    let away = 9 * DAY + HOUR + 4 * DAY;
    assert!(claim_daily_bonus(&mut state, away));
    assert_eq!(state.daily_streak, 8);
    state.currencies.stars = 50;

    // Buy the lost days back
    let streak = state.daily_streak;
    assert!(restore_streak(&mut state, 2));
    assert_eq!(state.daily_streak, streak + 2);

    // The per-streak restore cap is three days
    assert!(restore_streak(&mut state, 1));
    assert!(!restore_streak(&mut state, 1));
}

#[test]
fn test_long_absence_rollback_floors_at_day_one() {
    let mut state = GameState::new("tester", 0);
    assert!(claim_daily_bonus(&mut state, 0));
    assert!(claim_daily_bonus(&mut state, 25 * HOUR));
    assert_eq!(state.daily_streak, 2);

    // A month away cannot push the streak below 1
    assert!(claim_daily_bonus(&mut state, 31 * DAY));
    assert_eq!(state.daily_streak, 1);
}
