//! Daily bonus streak machine and reward cycle.
//!
//! The classifier is stateless: it maps hours-since-last-claim to an
//! action, and the store applies the resulting streak transition. Rewards
//! cycle over a fixed 14-day table; long streaks additionally earn a flat
//! master bonus on top of the cycled reward.

use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// What a claim attempt should do to the streak, classified purely from
/// elapsed time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StreakAction {
    /// Under 24h since the last claim: reject the claim outright.
    TooEarly,
    /// 24-48h: the streak advances by one.
    Increment,
    /// 48-72h: the streak holds, but the claim still pays out.
    Freeze,
    /// 72h or more: the streak is reduced before paying out.
    Rollback,
}

pub fn streak_action(hours_since_last_claim: f64) -> StreakAction {
    if hours_since_last_claim < STREAK_COOLDOWN_HOURS {
        StreakAction::TooEarly
    } else if hours_since_last_claim < STREAK_GRACE_HOURS {
        StreakAction::Increment
    } else if hours_since_last_claim < STREAK_FREEZE_HOURS {
        StreakAction::Freeze
    } else {
        StreakAction::Rollback
    }
}

/// One day's payout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DailyReward {
    pub silver: u64,
    pub gold: u64,
    pub stars: u64,
}

/// The fixed 14-day reward cycle. Day 15 pays the same as day 1.
pub static DAILY_CYCLE: [DailyReward; 14] = [
    DailyReward { silver: 50, gold: 0, stars: 0 },
    DailyReward { silver: 75, gold: 0, stars: 0 },
    DailyReward { silver: 100, gold: 0, stars: 0 },
    DailyReward { silver: 150, gold: 0, stars: 1 },
    DailyReward { silver: 200, gold: 0, stars: 0 },
    DailyReward { silver: 250, gold: 0, stars: 0 },
    DailyReward { silver: 300, gold: 5, stars: 0 },
    DailyReward { silver: 350, gold: 0, stars: 0 },
    DailyReward { silver: 400, gold: 0, stars: 1 },
    DailyReward { silver: 450, gold: 0, stars: 0 },
    DailyReward { silver: 500, gold: 0, stars: 0 },
    DailyReward { silver: 600, gold: 5, stars: 0 },
    DailyReward { silver: 700, gold: 0, stars: 2 },
    DailyReward { silver: 800, gold: 10, stars: 0 },
];

/// Reward for a 1-based streak day, cycling over the 14-entry table.
pub fn daily_reward(streak: u32) -> DailyReward {
    let day = streak.max(1);
    DAILY_CYCLE[((day - 1) % DAILY_CYCLE_DAYS) as usize]
}

/// Flat bonus earned on top of the cycled reward once the streak has gone
/// past a full cycle. Cumulative with [`daily_reward`], not a replacement.
pub fn master_bonus(streak: u32) -> Option<DailyReward> {
    if streak > DAILY_CYCLE_DAYS {
        Some(DailyReward {
            silver: MASTER_BONUS_SILVER,
            gold: MASTER_BONUS_GOLD,
            stars: 0,
        })
    } else {
        None
    }
}

/// Streak after a rollback: loses `STREAK_ROLLBACK_DAYS`, floored at 1.
pub fn apply_rollback(streak: u32) -> u32 {
    streak.saturating_sub(STREAK_ROLLBACK_DAYS).max(1)
}

/// Star cost to restore `days` lost streak days, or `None` when `days` is
/// zero or over the per-streak restore cap.
pub fn restore_cost(days: u32) -> Option<u64> {
    if days == 0 || days > DAILY_RESTORE_MAX_DAYS {
        return None;
    }
    Some(days as u64 * DAILY_RESTORE_COST_STARS)
}
