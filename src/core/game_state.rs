//! The whole player save: currencies, stats, buildings, serfs, timers.
//!
//! Everything here is plain data plus derived views. Mutation with
//! validation lives in [`crate::core::game_logic`]; this module only
//! guarantees the hard caps on currencies and the bounded notification
//! buffer.

use crate::core::constants::*;
use crate::economy::buildings::{self, BuildingId};
use crate::economy::serfs::{fold_bonuses, Serf, SerfBonuses};
use crate::economy::titles;
use crate::events::{Notification, NotificationKind};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, VecDeque};
use uuid::Uuid;

/// All player currencies. Adds saturate at the per-currency cap; spends
/// refuse rather than going negative.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Currencies {
    pub silver: u64,
    pub gold: u64,
    pub stars: u64,
    pub ref_stars: u64,
    pub reputation: u64,
}

impl Currencies {
    pub fn add_silver(&mut self, amount: u64) {
        self.silver = self.silver.saturating_add(amount).min(MAX_SILVER);
    }

    pub fn add_gold(&mut self, amount: u64) {
        self.gold = self.gold.saturating_add(amount).min(MAX_GOLD);
    }

    pub fn add_stars(&mut self, amount: u64) {
        self.stars = self.stars.saturating_add(amount).min(MAX_STARS);
    }

    pub fn add_ref_stars(&mut self, amount: u64) {
        self.ref_stars = self.ref_stars.saturating_add(amount).min(MAX_REF_STARS);
    }

    pub fn add_reputation(&mut self, amount: u64) {
        self.reputation = self.reputation.saturating_add(amount).min(MAX_REPUTATION);
    }

    pub fn spend_silver(&mut self, amount: u64) -> bool {
        if self.silver < amount {
            return false;
        }
        self.silver -= amount;
        true
    }

    pub fn spend_gold(&mut self, amount: u64) -> bool {
        if self.gold < amount {
            return false;
        }
        self.gold -= amount;
        true
    }

    pub fn spend_stars(&mut self, amount: u64) -> bool {
        if self.stars < amount {
            return false;
        }
        self.stars -= amount;
        true
    }

    pub fn lose_reputation(&mut self, amount: u64) {
        self.reputation = self.reputation.saturating_sub(amount);
    }
}

/// Combat-facing stats. Health of 0 means the player is down and must
/// resurrect or regenerate before fighting again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStats {
    pub attack: u32,
    pub defense: u32,
    pub health: u32,
    pub max_health: u32,
}

impl Default for PlayerStats {
    fn default() -> Self {
        Self {
            attack: BASE_ATTACK,
            defense: BASE_DEFENSE,
            health: BASE_MAX_HEALTH,
            max_health: BASE_MAX_HEALTH,
        }
    }
}

/// One constructed building.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Building {
    pub id: BuildingId,
    pub level: u32,
    /// Set while an upgrade is in progress; the level is already raised.
    #[serde(default)]
    pub cooldown_until: Option<i64>,
}

impl Building {
    pub fn new(id: BuildingId) -> Self {
        Self {
            id,
            level: 1,
            cooldown_until: None,
        }
    }

    pub fn income(&self) -> u64 {
        buildings::income(self.id.def(), self.level)
    }

    pub fn on_cooldown(&self, now: i64) -> bool {
        matches!(self.cooldown_until, Some(until) if until > now)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub player_id: String,
    pub username: String,
    pub currencies: Currencies,
    pub stats: PlayerStats,
    pub title_level: u32,
    pub daily_streak: u32,
    #[serde(default)]
    pub last_daily_claim: Option<i64>,
    #[serde(default)]
    pub restored_days_used: u32,
    pub last_income_collect: i64,
    #[serde(default)]
    pub raid_cooldown_until: Option<i64>,
    #[serde(default)]
    pub cave_cooldown_until: Option<i64>,
    #[serde(default)]
    pub last_scout: Option<i64>,
    pub last_regen_tick: i64,
    pub buildings: HashMap<BuildingId, Building>,
    #[serde(default)]
    pub serfs: Vec<Serf>,
    #[serde(skip)]
    pub notifications: VecDeque<Notification>,
}

impl GameState {
    pub fn new(username: impl Into<String>, now: i64) -> Self {
        Self {
            player_id: Uuid::new_v4().to_string(),
            username: username.into(),
            currencies: Currencies {
                silver: 250,
                ..Currencies::default()
            },
            stats: PlayerStats::default(),
            title_level: 0,
            daily_streak: 0,
            last_daily_claim: None,
            restored_days_used: 0,
            last_income_collect: now,
            raid_cooldown_until: None,
            cave_cooldown_until: None,
            last_scout: None,
            last_regen_tick: now,
            buildings: HashMap::new(),
            serfs: Vec::new(),
            notifications: VecDeque::new(),
        }
    }

    pub fn building_level(&self, id: BuildingId) -> u32 {
        self.buildings.get(&id).map(|b| b.level).unwrap_or(0)
    }

    /// Folded bonuses from every held serf.
    pub fn serf_bonuses(&self) -> SerfBonuses {
        fold_bonuses(self.serfs.iter().map(|s| s.profession.bonus()))
    }

    /// Sum of all building incomes, scaled by the serf income multiplier.
    pub fn total_hourly_income(&self) -> u64 {
        let base: u64 = self.buildings.values().map(|b| b.income()).sum();
        let mult = 1.0 + self.serf_bonuses().income_mult;
        (base as f64 * mult).floor() as u64
    }

    /// How many serfs the current title allows holding.
    pub fn serf_slots(&self) -> u32 {
        titles::title_def(self.title_level).serf_slots
    }

    pub fn is_dead(&self) -> bool {
        self.stats.health == 0
    }

    /// Effective attack for fights: base plus serf attack bonuses.
    pub fn effective_attack(&self) -> u32 {
        self.stats.attack + self.serf_bonuses().attack
    }

    pub fn push_notification(&mut self, kind: NotificationKind, message: impl Into<String>) {
        if self.notifications.len() >= NOTIFICATION_CAPACITY {
            self.notifications.pop_front();
        }
        self.notifications.push_back(Notification::new(kind, message));
    }
}
