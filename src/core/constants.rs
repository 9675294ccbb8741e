// Currency caps - every addition saturates here, overflow is discarded
pub const MAX_SILVER: u64 = 1_000_000_000;
pub const MAX_GOLD: u64 = 1_000_000;
pub const MAX_STARS: u64 = 100_000;
pub const MAX_REF_STARS: u64 = 100_000;
pub const MAX_REPUTATION: u64 = 100_000;

// Starting player stats
pub const BASE_ATTACK: u32 = 10;
pub const BASE_DEFENSE: u32 = 5;
pub const BASE_MAX_HEALTH: u32 = 100;

// Combat resolution
pub const MAX_COMBAT_TURNS: u32 = 20;
pub const COMBAT_DMG_MIN: f64 = 8.0;
pub const COMBAT_DMG_MAX: f64 = 16.0;
pub const ATTACK_SCALING: f64 = 0.02;
pub const DEFENSE_SCALING: f64 = 0.5;

// Raid rewards
pub const RAID_SILVER_MIN: u64 = 150;
pub const RAID_SILVER_MAX: u64 = 400;
pub const RAID_REPUTATION_WIN: u64 = 10;
pub const RAID_REPUTATION_LOSS: u64 = 5;
pub const SERF_CAPTURE_CHANCE: f64 = 0.30;

// Health regeneration (60-second tick)
pub const REGEN_TICK_SECS: i64 = 60;
pub const REGEN_PER_TICK: u32 = 5;
pub const RESURRECTION_COST_SILVER: u64 = 250;

// Action cooldowns
pub const RAID_COOLDOWN_SECS: i64 = 1800;
pub const CAVE_COOLDOWN_SECS: i64 = 3600;
pub const SCOUT_INTERVAL_SECS: i64 = 86_400;

// Serf economy
pub const SERF_INCOME_INTERVAL_SECS: i64 = 1800;
pub const MIN_RANSOM_SILVER: u64 = 500;
pub const RANSOM_DAILY_INCOME_FACTOR: f64 = 2.0;
pub const RANSOM_HOURLY_FACTOR: f64 = 10.0;

// Daily bonus streak thresholds (hours since last claim)
pub const STREAK_COOLDOWN_HOURS: f64 = 24.0;
pub const STREAK_GRACE_HOURS: f64 = 48.0;
pub const STREAK_FREEZE_HOURS: f64 = 72.0;
pub const STREAK_ROLLBACK_DAYS: u32 = 2;
pub const DAILY_CYCLE_DAYS: u32 = 14;
pub const DAILY_RESTORE_COST_STARS: u64 = 5;
pub const DAILY_RESTORE_MAX_DAYS: u32 = 3;
pub const MASTER_BONUS_SILVER: u64 = 500;
pub const MASTER_BONUS_GOLD: u64 = 5;

// Lootboxes
pub const NORMAL_LOOTBOX_COST_STARS: u64 = 10;
pub const RARE_LOOTBOX_COST_STARS: u64 = 25;

// Notification queue
pub const NOTIFICATION_CAPACITY: usize = 20;

// Building progression. Levels 1-10 are paid in silver off the cost curve;
// levels 11-15 switch to a flat gold price per tier.
pub const BUILDING_MAX_LEVEL: u32 = 15;
pub const SILVER_LEVEL_CAP: u32 = 10;

// Upgrade cooldowns keyed by pre-upgrade level (index 0 = level 1).
// Level 15 has no further upgrade, so no entry.
pub const UPGRADE_COOLDOWN_SECS: [i64; 14] = [
    300, 600, 1_200, 2_400, 3_600, 7_200, 10_800, 14_400, 21_600, 28_800, 36_000, 43_200, 64_800,
    86_400,
];

// Star cost to skip the remaining cooldown, keyed by pre-upgrade level.
pub const SPEED_UP_COST_STARS: [u64; 14] = [1, 1, 2, 2, 3, 4, 5, 6, 8, 10, 12, 15, 18, 22];

// Gold pricing for levels 11-15: tier base cost (tiers 1-5) times the
// multiplier for the level being reached (11-15).
pub const TIER_BASE_GOLD_COST: [u64; 5] = [5, 10, 20, 40, 80];
pub const GOLD_LEVEL_MULTIPLIER: [f64; 5] = [1.0, 1.5, 2.25, 3.4, 5.0];

// Title gates
pub const CAVE_MIN_TITLE: u32 = 2;
pub const RAID_MIN_TITLE: u32 = 3;
pub const CLAN_MIN_TITLE: u32 = 5;
