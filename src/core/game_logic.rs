//! Store actions: every state mutation behind its validation.
//!
//! Each action validates first and applies only when everything holds, so
//! a failed action never leaves a partial write. Failures push an Error
//! notification and return `false`/`None`; successes notify and return
//! what they produced.

use crate::combat::{self, BattleLoot, BattleResult, Combatant};
use crate::combat::monsters::MonsterId;
use crate::core::constants::*;
use crate::core::game_state::{Building, GameState};
use crate::economy::buildings::{self, BuildingId, UpgradePrice};
use crate::economy::daily::{self, StreakAction};
use crate::economy::serfs::{self, Profession, Serf};
use crate::economy::titles;
use crate::events::NotificationKind;
use crate::loot::{self, DropReward};
use rand::Rng;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LootboxKind {
    Normal,
    Rare,
}

impl LootboxKind {
    pub fn cost_stars(&self) -> u64 {
        match self {
            LootboxKind::Normal => NORMAL_LOOTBOX_COST_STARS,
            LootboxKind::Rare => RARE_LOOTBOX_COST_STARS,
        }
    }
}

/// Raises the title when hourly income crosses the next threshold. Titles
/// only ever move up.
fn check_title_advance(state: &mut GameState) {
    let earned = titles::title_for_income(state.total_hourly_income());
    if earned > state.title_level {
        state.title_level = earned;
        let name = titles::title_def(earned).name;
        state.push_notification(
            NotificationKind::Success,
            format!("You are now known as {}", name),
        );
    }
}

/// Builds a level-1 building. Fails on an existing copy, unmet
/// prerequisites, or insufficient silver.
pub fn construct_building(state: &mut GameState, id: BuildingId, _now: i64) -> bool {
    if state.buildings.contains_key(&id) {
        state.push_notification(
            NotificationKind::Error,
            format!("{} already stands", id.name()),
        );
        return false;
    }
    let def = id.def();
    let unmet = buildings::unmet_prerequisites(def, |b| state.building_level(b));
    if let Some(miss) = unmet.first() {
        state.push_notification(
            NotificationKind::Error,
            format!(
                "{} requires {} at level {}",
                id.name(),
                miss.building.name(),
                miss.required_level
            ),
        );
        return false;
    }
    let price = buildings::cost(def, 1);
    if !state.currencies.spend_silver(price) {
        state.push_notification(
            NotificationKind::Error,
            format!("Not enough silver for {}", id.name()),
        );
        return false;
    }
    state.buildings.insert(id, Building::new(id));
    state.push_notification(
        NotificationKind::Success,
        format!("{} constructed", id.name()),
    );
    check_title_advance(state);
    true
}

/// Starts an upgrade: pays the price, raises the level, and arms the
/// cooldown. Serf build-speed bonuses shorten the cooldown.
pub fn upgrade_building(state: &mut GameState, id: BuildingId, now: i64) -> bool {
    let (level, on_cooldown) = match state.buildings.get(&id) {
        Some(b) => (b.level, b.on_cooldown(now)),
        None => {
            state.push_notification(
                NotificationKind::Error,
                format!("{} is not built yet", id.name()),
            );
            return false;
        }
    };
    if on_cooldown {
        state.push_notification(
            NotificationKind::Error,
            format!("{} is still being upgraded", id.name()),
        );
        return false;
    }
    let def = id.def();
    let price = match buildings::upgrade_price(def, level) {
        Some(p) => p,
        None => {
            state.push_notification(
                NotificationKind::Error,
                format!("{} is already at the top level", id.name()),
            );
            return false;
        }
    };
    let unmet = buildings::unmet_prerequisites(def, |b| state.building_level(b));
    if let Some(miss) = unmet.first() {
        state.push_notification(
            NotificationKind::Error,
            format!(
                "{} requires {} at level {}",
                id.name(),
                miss.building.name(),
                miss.required_level
            ),
        );
        return false;
    }
    let paid = match price {
        UpgradePrice::Silver(s) => state.currencies.spend_silver(s),
        UpgradePrice::Gold(g) => state.currencies.spend_gold(g),
    };
    if !paid {
        state.push_notification(
            NotificationKind::Error,
            format!("Cannot afford the upgrade for {}", id.name()),
        );
        return false;
    }

    let base_secs = buildings::upgrade_cooldown_secs(level);
    let speed = state.serf_bonuses().build_speed.min(0.9);
    let secs = (base_secs as f64 * (1.0 - speed)).floor() as i64;

    let mut new_level = level + 1;
    if let Some(building) = state.buildings.get_mut(&id) {
        building.level += 1;
        building.cooldown_until = Some(now + secs);
        new_level = building.level;
    }
    state.push_notification(
        NotificationKind::Success,
        format!("{} upgraded to level {}", id.name(), new_level),
    );
    check_title_advance(state);
    true
}

/// Pays stars to finish an in-progress upgrade immediately.
pub fn speed_up_upgrade(state: &mut GameState, id: BuildingId, now: i64) -> bool {
    let level = match state.buildings.get(&id) {
        Some(b) if b.on_cooldown(now) => b.level,
        _ => {
            state.push_notification(
                NotificationKind::Error,
                format!("{} has no upgrade in progress", id.name()),
            );
            return false;
        }
    };
    // Cost is keyed to the level the upgrade started from
    let cost = buildings::speed_up_cost(level - 1);
    if !state.currencies.spend_stars(cost) {
        state.push_notification(
            NotificationKind::Error,
            format!("Not enough stars to hurry {}", id.name()),
        );
        return false;
    }
    if let Some(b) = state.buildings.get_mut(&id) {
        b.cooldown_until = None;
    }
    state.push_notification(
        NotificationKind::Success,
        format!("{} finished ahead of schedule", id.name()),
    );
    true
}

/// Flushes accrued building income as one lump sum. A call that would pay
/// nothing leaves the timestamp alone so short intervals carry over.
pub fn collect_income(state: &mut GameState, now: i64) -> u64 {
    let elapsed = (now - state.last_income_collect).max(0);
    let hourly = state.total_hourly_income();
    let payout = (hourly as f64 * elapsed as f64 / 3600.0).floor() as u64;
    if payout == 0 {
        return 0;
    }
    state.last_income_collect = now;
    state.currencies.add_silver(payout);
    state.push_notification(
        NotificationKind::Reward,
        format!("Collected {} silver", payout),
    );
    check_title_advance(state);
    payout
}

/// Claims the daily bonus. Elapsed time since the previous claim decides
/// whether the streak advances, holds, or rolls back; the payout always
/// follows the post-transition streak day.
pub fn claim_daily_bonus(state: &mut GameState, now: i64) -> bool {
    let action = match state.last_daily_claim {
        None => StreakAction::Increment,
        Some(last) => {
            let hours = (now - last) as f64 / 3600.0;
            daily::streak_action(hours)
        }
    };

    match action {
        StreakAction::TooEarly => {
            state.push_notification(
                NotificationKind::Error,
                "The daily bonus is not ready yet",
            );
            return false;
        }
        StreakAction::Increment => {
            state.daily_streak += 1;
            state.restored_days_used = 0;
        }
        StreakAction::Freeze => {
            state.daily_streak = state.daily_streak.max(1);
        }
        StreakAction::Rollback => {
            state.daily_streak = daily::apply_rollback(state.daily_streak);
        }
    }

    let mut reward = daily::daily_reward(state.daily_streak);
    if let Some(bonus) = daily::master_bonus(state.daily_streak) {
        reward.silver += bonus.silver;
        reward.gold += bonus.gold;
        reward.stars += bonus.stars;
    }
    state.currencies.add_silver(reward.silver);
    state.currencies.add_gold(reward.gold);
    state.currencies.add_stars(reward.stars);
    state.last_daily_claim = Some(now);
    state.push_notification(
        NotificationKind::Reward,
        format!(
            "Day {} bonus: {} silver, {} gold, {} stars",
            state.daily_streak, reward.silver, reward.gold, reward.stars
        ),
    );
    true
}

/// Buys back streak days lost to a rollback, up to the per-streak cap.
pub fn restore_streak(state: &mut GameState, days: u32) -> bool {
    if state.restored_days_used + days > DAILY_RESTORE_MAX_DAYS {
        state.push_notification(
            NotificationKind::Error,
            "No more streak days can be restored",
        );
        return false;
    }
    let cost = match daily::restore_cost(days) {
        Some(c) => c,
        None => {
            state.push_notification(NotificationKind::Error, "Nothing to restore");
            return false;
        }
    };
    if !state.currencies.spend_stars(cost) {
        state.push_notification(
            NotificationKind::Error,
            "Not enough stars to restore the streak",
        );
        return false;
    }
    state.daily_streak += days;
    state.restored_days_used += days;
    state.push_notification(
        NotificationKind::Success,
        format!("Streak restored to day {}", state.daily_streak),
    );
    true
}

fn player_combatant(state: &GameState) -> Combatant {
    Combatant {
        attack: state.effective_attack(),
        defense: state.stats.defense,
        hp: state.stats.health,
    }
}

/// Runs a fight against a cave monster. Gated on title, health, and the
/// cave cooldown; the cooldown arms whether the fight is won or lost.
pub fn enter_cave(
    state: &mut GameState,
    monster: MonsterId,
    rng: &mut impl Rng,
    now: i64,
) -> Option<BattleResult> {
    let def = monster.def();
    if state.title_level < CAVE_MIN_TITLE || state.title_level < def.min_title {
        state.push_notification(
            NotificationKind::Error,
            format!("Your title is too low to face {}", def.name),
        );
        return None;
    }
    if state.is_dead() {
        state.push_notification(NotificationKind::Error, "You must recover first");
        return None;
    }
    if matches!(state.cave_cooldown_until, Some(until) if until > now) {
        state.push_notification(NotificationKind::Error, "The caves are not ready yet");
        return None;
    }

    let seed: u64 = rng.gen();
    let outcome = combat::resolve_seeded(
        player_combatant(state),
        Combatant {
            attack: def.attack,
            defense: def.defense,
            hp: def.hp,
        },
        seed,
    );
    state.cave_cooldown_until = Some(now + CAVE_COOLDOWN_SECS);
    if let Some(last) = outcome.log.last() {
        state.stats.health = last.attacker_hp;
    }

    let mut loot = BattleLoot::default();
    let mut captured_serf = None;
    if outcome.won {
        loot.silver = rng.gen_range(def.silver_min..=def.silver_max);
        loot.gold = def.gold;
        loot.reputation = def.reputation;
        state.currencies.add_silver(loot.silver);
        state.currencies.add_gold(loot.gold);
        state.currencies.add_reputation(loot.reputation);
        if (state.serfs.len() as u32) < state.serf_slots() && rng.gen_bool(def.serf_chance) {
            let serf = Serf::new(Profession::random(rng), now);
            state.push_notification(
                NotificationKind::Reward,
                format!("A freed {} joins your posad", serf.profession.name()),
            );
            state.serfs.push(serf.clone());
            captured_serf = Some(serf);
        }
        state.push_notification(
            NotificationKind::Success,
            format!("{} defeated: {} silver", def.name, loot.silver),
        );
    } else {
        state.push_notification(
            NotificationKind::Error,
            format!("{} drove you back", def.name),
        );
    }

    Some(BattleResult {
        seed,
        won: outcome.won,
        log: outcome.log,
        loot,
        captured_serf,
    })
}

/// Raids another settlement. A win plunders silver, earns reputation, and
/// may capture one of the defender's serfs; a loss costs reputation and
/// risks losing an unprotected serf of your own.
pub fn raid(
    state: &mut GameState,
    defender: Combatant,
    rng: &mut impl Rng,
    now: i64,
) -> Option<BattleResult> {
    if state.title_level < RAID_MIN_TITLE {
        state.push_notification(NotificationKind::Error, "Your title is too low to raid");
        return None;
    }
    if state.is_dead() {
        state.push_notification(NotificationKind::Error, "You must recover first");
        return None;
    }
    if matches!(state.raid_cooldown_until, Some(until) if until > now) {
        state.push_notification(NotificationKind::Error, "Your druzhina is still resting");
        return None;
    }

    let seed: u64 = rng.gen();
    let outcome = combat::resolve_seeded(player_combatant(state), defender, seed);
    state.raid_cooldown_until = Some(now + RAID_COOLDOWN_SECS);
    if let Some(last) = outcome.log.last() {
        state.stats.health = last.attacker_hp;
    }

    let mut loot = BattleLoot::default();
    let mut captured_serf = None;
    if outcome.won {
        loot.silver = rng.gen_range(RAID_SILVER_MIN..=RAID_SILVER_MAX);
        loot.reputation = RAID_REPUTATION_WIN;
        state.currencies.add_silver(loot.silver);
        state.currencies.add_reputation(loot.reputation);
        if (state.serfs.len() as u32) < state.serf_slots()
            && rng.gen_bool(SERF_CAPTURE_CHANCE)
        {
            let serf = Serf::new(Profession::random(rng), now);
            state.push_notification(
                NotificationKind::Reward,
                format!("You captured a {}", serf.profession.name()),
            );
            state.serfs.push(serf.clone());
            captured_serf = Some(serf);
        }
        state.push_notification(
            NotificationKind::Success,
            format!("Raid succeeded: {} silver plundered", loot.silver),
        );
    } else {
        state.currencies.lose_reputation(RAID_REPUTATION_LOSS);
        let loss_candidates: Vec<usize> = state
            .serfs
            .iter()
            .enumerate()
            .filter(|(_, s)| !s.is_protected(now))
            .map(|(i, _)| i)
            .collect();
        if !loss_candidates.is_empty() && rng.gen_bool(SERF_CAPTURE_CHANCE) {
            let idx = loss_candidates[rng.gen_range(0..loss_candidates.len())];
            let lost = state.serfs.remove(idx);
            state.push_notification(
                NotificationKind::Error,
                format!("Your {} was carried off", lost.profession.name()),
            );
        }
        // Immunity from a held Monakh shields the rest after a defeat.
        // Never shortens a window that already runs longer.
        let immunity_hours = state.serf_bonuses().capture_immunity_hours;
        if immunity_hours > 0 {
            let until = now + immunity_hours as i64 * 3600;
            for serf in &mut state.serfs {
                serf.protection_until = Some(serf.protection_until.unwrap_or(0).max(until));
            }
        }
        state.push_notification(NotificationKind::Error, "The raid was repelled");
    }

    Some(BattleResult {
        seed,
        won: outcome.won,
        log: outcome.log,
        loot,
        captured_serf,
    })
}

/// Flushes gold income from every held serf.
pub fn collect_serf_income(state: &mut GameState, now: i64) -> u64 {
    let total: u64 = state.serfs.iter_mut().map(|s| s.collect(now)).sum();
    if total > 0 {
        state.currencies.add_gold(total);
        state.push_notification(
            NotificationKind::Reward,
            format!("Serfs brought in {} gold", total),
        );
    }
    total
}

/// Releases a serf for their ransom in silver.
pub fn ransom_serf(state: &mut GameState, serf_id: &str, now: i64) -> Option<u64> {
    let idx = match state.serfs.iter().position(|s| s.id == serf_id) {
        Some(i) => i,
        None => {
            state.push_notification(NotificationKind::Error, "No such serf");
            return None;
        }
    };
    let serf = state.serfs.remove(idx);
    let price = serfs::ransom_price(serfs::daily_gold_income(&serf), serf.hours_owned(now));
    state.currencies.add_silver(price);
    state.push_notification(
        NotificationKind::Reward,
        format!(
            "{} ransomed for {} silver",
            serf.profession.name(),
            price
        ),
    );
    check_title_advance(state);
    Some(price)
}

/// Spends stars on a lootbox and applies whatever drops. Returns the drop
/// name and the resolved amount.
pub fn open_lootbox(
    state: &mut GameState,
    kind: LootboxKind,
    rng: &mut impl Rng,
) -> Option<(&'static str, u64)> {
    if !state.currencies.spend_stars(kind.cost_stars()) {
        state.push_notification(NotificationKind::Error, "Not enough stars");
        return None;
    }
    let table = match kind {
        LootboxKind::Normal => &loot::NORMAL_DROPS[..],
        LootboxKind::Rare => &loot::RARE_DROPS[..],
    };
    let drop = loot::roll_drop(table, rng);
    let amount = loot::roll_silver_amount(&drop.reward, rng);
    match drop.reward {
        DropReward::Silver { .. } => state.currencies.add_silver(amount),
        DropReward::Gold(_) => state.currencies.add_gold(amount),
        DropReward::Stars(_) => state.currencies.add_stars(amount),
        DropReward::Reputation(_) => state.currencies.add_reputation(amount),
    }
    state.push_notification(
        NotificationKind::Reward,
        format!("{}: +{}", drop.name, amount),
    );
    Some((drop.name, amount))
}

/// Pays silver to come back from 0 health at full strength.
pub fn resurrect(state: &mut GameState) -> bool {
    if !state.is_dead() {
        state.push_notification(NotificationKind::Error, "You are still standing");
        return false;
    }
    if !state.currencies.spend_silver(RESURRECTION_COST_SILVER) {
        state.push_notification(
            NotificationKind::Error,
            "Not enough silver for the healer",
        );
        return false;
    }
    state.stats.health = state.stats.max_health;
    state.push_notification(NotificationKind::Success, "Back on your feet");
    true
}

/// Okhotnik perk: once a day, clears the cave cooldown.
pub fn use_daily_scout(state: &mut GameState, now: i64) -> bool {
    if !state.serf_bonuses().daily_scout {
        state.push_notification(NotificationKind::Error, "No scout in your service");
        return false;
    }
    if matches!(state.last_scout, Some(last) if now - last < SCOUT_INTERVAL_SECS) {
        state.push_notification(NotificationKind::Error, "The scout already went out today");
        return false;
    }
    state.last_scout = Some(now);
    state.cave_cooldown_until = None;
    state.push_notification(
        NotificationKind::Success,
        "The scout found a fresh cave entrance",
    );
    true
}

/// Passive health regeneration in whole one-minute ticks. Dead players do
/// not regenerate; they need [`resurrect`]. Returns health restored.
pub fn regen_tick(state: &mut GameState, now: i64) -> u32 {
    let elapsed = now - state.last_regen_tick;
    if elapsed < REGEN_TICK_SECS {
        return 0;
    }
    let intervals = elapsed / REGEN_TICK_SECS;
    state.last_regen_tick += intervals * REGEN_TICK_SECS;
    if state.is_dead() {
        return 0;
    }
    let heal = (intervals as u64 * REGEN_PER_TICK as u64)
        .min((state.stats.max_health - state.stats.health) as u64) as u32;
    state.stats.health += heal;
    heal
}
