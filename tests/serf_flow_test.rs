//! Serf lifecycle through the store: capture on raids, slot limits,
//! interval income, profession perks, and ransom.

use posad::combat::Combatant;
use posad::core::constants::*;
use posad::core::game_logic::{
    collect_serf_income, raid, ransom_serf, use_daily_scout,
};
use posad::core::game_state::GameState;
use posad::economy::serfs::{Profession, Serf};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

fn raider() -> GameState {
    let mut state = GameState::new("tester", 0);
    state.title_level = 3;
    state
}

fn pushover() -> Combatant {
    Combatant { attack: 1, defense: 0, hp: 1 }
}

#[test]
fn test_raids_eventually_capture_a_serf() {
    let mut state = raider();
    let mut rng = ChaCha8Rng::seed_from_u64(17);

    // With a 30% chance per winning raid, a hundred raids miss with
    // probability well under 1e-10
    let mut now = 0;
    for _ in 0..100 {
        if state.serfs.is_empty() {
            let _ = raid(&mut state, pushover(), &mut rng, now);
            now += RAID_COOLDOWN_SECS;
        }
    }
    assert!(!state.serfs.is_empty(), "no serf captured in 100 winning raids");
}

#[test]
fn test_captures_stop_at_the_slot_limit() {
    let mut state = raider();
    let mut rng = ChaCha8Rng::seed_from_u64(23);
    let slots = state.serf_slots();
    assert_eq!(slots, 3, "Posadnik holds three serfs");

    let mut now = 0;
    for _ in 0..300 {
        let _ = raid(&mut state, pushover(), &mut rng, now);
        now += RAID_COOLDOWN_SECS;
    }
    assert_eq!(state.serfs.len() as u32, slots);
}

#[test]
fn test_serf_income_accrues_in_half_hour_intervals() {
    let mut state = raider();
    state.serfs.push(Serf::new(Profession::Kuznets, 0));
    state.serfs.push(Serf::new(Profession::Zemlepashets, 0));

    assert_eq!(collect_serf_income(&mut state, 100), 0);
    // Three hours: six intervals each, 2/30m + 1/30m
    assert_eq!(collect_serf_income(&mut state, 3 * 3_600), 6 * 2 + 6 * 1);
    assert_eq!(state.currencies.gold, 18);
    assert_eq!(collect_serf_income(&mut state, 3 * 3_600), 0);
}

#[test]
fn test_income_professions_raise_hourly_income() {
    use posad::core::game_logic::construct_building;
    use posad::economy::buildings::BuildingId;

    let mut state = raider();
    assert!(construct_building(&mut state, BuildingId::Izba, 0));
    let base = state.total_hourly_income();

    state.serfs.push(Serf::new(Profession::Zemlepashets, 0));
    state.serfs.push(Serf::new(Profession::Torgovets, 0));
    // 5% + 10% on top of the base
    assert_eq!(state.total_hourly_income(), (base as f64 * 1.15) as u64);
}

#[test]
fn test_ransom_scales_but_never_below_floor() {
    let mut state = raider();
    state.serfs.push(Serf::new(Profession::Zemlepashets, 0));
    let id = state.serfs[0].id.clone();

    // Freshly captured, low earner: the floor applies
    let price = ransom_serf(&mut state, &id, 0).unwrap();
    assert_eq!(price, MIN_RANSOM_SILVER);
    assert_eq!(state.currencies.silver, 250 + MIN_RANSOM_SILVER);

    // A Torgovets held for a week is worth more than the floor:
    // 144 gold/day * 2 + 168h * 10 = 1968
    state.serfs.push(Serf::new(Profession::Torgovets, 0));
    let id = state.serfs[0].id.clone();
    let week = 7 * 24 * 3_600;
    let price = ransom_serf(&mut state, &id, week).unwrap();
    assert_eq!(price, 1_968);
}

#[test]
fn test_okhotnik_scout_resets_caves_daily() {
    let mut state = raider();
    assert!(!use_daily_scout(&mut state, 0));

    state.serfs.push(Serf::new(Profession::Okhotnik, 0));
    state.cave_cooldown_until = Some(99_999);
    assert!(use_daily_scout(&mut state, 0));
    assert!(state.cave_cooldown_until.is_none());

    // Only once per day
    assert!(!use_daily_scout(&mut state, SCOUT_INTERVAL_SECS / 2));
    assert!(use_daily_scout(&mut state, SCOUT_INTERVAL_SECS));
}

#[test]
fn test_monakh_shields_serfs_after_a_defeat() {
    let mut state = raider();
    let mut rng = ChaCha8Rng::seed_from_u64(3);
    let mut monakh = Serf::new(Profession::Monakh, 0);
    // Already shielded, so this defeat cannot carry the Monakh off
    monakh.protection_until = Some(1_000);
    state.serfs.push(monakh);
    state.serfs.push(Serf::new(Profession::Kuznets, 0));
    let juggernaut = Combatant { attack: 10_000, defense: 10_000, hp: 1_000_000 };

    // Losing with a Monakh in service arms a 12h protection window; the
    // Kuznets may have been carried off first, but whoever remains is
    // covered and an existing window is only ever extended
    let result = raid(&mut state, juggernaut, &mut rng, 0).unwrap();
    assert!(!result.won);
    assert!(!state.serfs.is_empty());
    for serf in &state.serfs {
        assert_eq!(serf.protection_until, Some(12 * 3_600));
        assert!(serf.is_protected(100));
    }
}

#[test]
fn test_serf_state_survives_a_save_round_trip() {
    let mut state = raider();
    state.serfs.push(Serf::new(Profession::Kuznets, 1_000));
    state.serfs[0].protection_until = Some(50_000);

    let json = serde_json::to_string(&state).unwrap();
    let back: GameState = serde_json::from_str(&json).unwrap();
    assert_eq!(back.serfs.len(), 1);
    assert_eq!(back.serfs[0].profession, Profession::Kuznets);
    assert_eq!(back.serfs[0].protection_until, Some(50_000));
    assert_eq!(back.serfs[0].last_collected, 1_000);
}
