//! Serf economy: professions, bonus effects, interval income, ransom.
//!
//! Captured serfs produce gold in whole 30-minute intervals and carry a
//! profession bonus. Bonuses are tagged variants folded with an explicit
//! accumulator: additive effects sum, capture immunity takes the max.

use crate::core::constants::*;
use rand::Rng;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Effect granted by a serf's profession while the serf is held.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum BonusEffect {
    /// Flat attack added to the holder's raid attack.
    AttackBonus(u32),
    /// Fractional boost to total hourly building income.
    IncomeBonus(f64),
    /// Fractional reduction of building upgrade cooldowns.
    BuildSpeed(f64),
    /// One free cave-cooldown clear per day.
    DailyScout,
    /// Protects the holder from capture for this many hours after a loss.
    CaptureImmunity { hours: u32 },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Profession {
    Kuznets,
    Zemlepashets,
    Plotnik,
    Okhotnik,
    Monakh,
    Torgovets,
}

impl Profession {
    pub const ALL: [Profession; 6] = [
        Profession::Kuznets,
        Profession::Zemlepashets,
        Profession::Plotnik,
        Profession::Okhotnik,
        Profession::Monakh,
        Profession::Torgovets,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Profession::Kuznets => "Kuznets",
            Profession::Zemlepashets => "Zemlepashets",
            Profession::Plotnik => "Plotnik",
            Profession::Okhotnik => "Okhotnik",
            Profession::Monakh => "Monakh",
            Profession::Torgovets => "Torgovets",
        }
    }

    /// Gold produced per 30-minute interval.
    pub fn gold_per_30m(&self) -> u64 {
        match self {
            Profession::Kuznets => 2,
            Profession::Zemlepashets => 1,
            Profession::Plotnik => 1,
            Profession::Okhotnik => 2,
            Profession::Monakh => 1,
            Profession::Torgovets => 3,
        }
    }

    pub fn bonus(&self) -> BonusEffect {
        match self {
            Profession::Kuznets => BonusEffect::AttackBonus(5),
            Profession::Zemlepashets => BonusEffect::IncomeBonus(0.05),
            Profession::Plotnik => BonusEffect::BuildSpeed(0.10),
            Profession::Okhotnik => BonusEffect::DailyScout,
            Profession::Monakh => BonusEffect::CaptureImmunity { hours: 12 },
            Profession::Torgovets => BonusEffect::IncomeBonus(0.10),
        }
    }

    pub fn random(rng: &mut impl Rng) -> Profession {
        Profession::ALL[rng.gen_range(0..Profession::ALL.len())]
    }
}

/// Folded view of every held serf's bonus.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct SerfBonuses {
    pub attack: u32,
    pub income_mult: f64,
    pub build_speed: f64,
    pub daily_scout: bool,
    pub capture_immunity_hours: u32,
}

/// Folds bonus effects: additive effects sum, immunity takes the max.
pub fn fold_bonuses(effects: impl IntoIterator<Item = BonusEffect>) -> SerfBonuses {
    let mut acc = SerfBonuses::default();
    for effect in effects {
        match effect {
            BonusEffect::AttackBonus(n) => acc.attack += n,
            BonusEffect::IncomeBonus(f) => acc.income_mult += f,
            BonusEffect::BuildSpeed(f) => acc.build_speed += f,
            BonusEffect::DailyScout => acc.daily_scout = true,
            BonusEffect::CaptureImmunity { hours } => {
                acc.capture_immunity_hours = acc.capture_immunity_hours.max(hours);
            }
        }
    }
    acc
}

/// A captured serf held by the player.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Serf {
    pub id: String,
    pub profession: Profession,
    pub gold_per_30m: u64,
    pub last_collected: i64,
    #[serde(default)]
    pub protection_until: Option<i64>,
    pub captured_at: i64,
}

impl Serf {
    pub fn new(profession: Profession, now: i64) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            profession,
            gold_per_30m: profession.gold_per_30m(),
            last_collected: now,
            protection_until: None,
            captured_at: now,
        }
    }

    /// Whole 30-minute intervals accrued since the last collect.
    pub fn pending_intervals(&self, now: i64) -> u64 {
        let elapsed = now - self.last_collected;
        if elapsed <= 0 {
            return 0;
        }
        (elapsed / SERF_INCOME_INTERVAL_SECS) as u64
    }

    /// Flushes whole intervals, returning the gold earned. A collect with
    /// no full interval is a no-op that leaves the timestamp untouched, so
    /// partial intervals carry over.
    pub fn collect(&mut self, now: i64) -> u64 {
        let intervals = self.pending_intervals(now);
        if intervals == 0 {
            return 0;
        }
        self.last_collected = now;
        intervals * self.gold_per_30m
    }

    pub fn is_protected(&self, now: i64) -> bool {
        matches!(self.protection_until, Some(until) if until > now)
    }

    pub fn hours_owned(&self, now: i64) -> u64 {
        ((now - self.captured_at).max(0) / 3600) as u64
    }
}

/// Silver price to ransom a serf. Scales with the serf's daily gold output
/// and time held, but never drops below the configured floor.
pub fn ransom_price(daily_income: u64, hours_owned: u64) -> u64 {
    let scaled = daily_income as f64 * RANSOM_DAILY_INCOME_FACTOR
        + hours_owned as f64 * RANSOM_HOURLY_FACTOR;
    (scaled.floor() as u64).max(MIN_RANSOM_SILVER)
}

/// A serf's gold output over a full day, used for ransom pricing.
pub fn daily_gold_income(serf: &Serf) -> u64 {
    serf.gold_per_30m * 48
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_fold_sums_additive_bonuses() {
        let folded = fold_bonuses([
            BonusEffect::AttackBonus(5),
            BonusEffect::AttackBonus(3),
            BonusEffect::IncomeBonus(0.05),
            BonusEffect::IncomeBonus(0.10),
            BonusEffect::BuildSpeed(0.10),
        ]);
        assert_eq!(folded.attack, 8);
        assert!((folded.income_mult - 0.15).abs() < f64::EPSILON);
        assert!((folded.build_speed - 0.10).abs() < f64::EPSILON);
        assert!(!folded.daily_scout);
    }

    #[test]
    fn test_fold_capture_immunity_max_wins() {
        let folded = fold_bonuses([
            BonusEffect::CaptureImmunity { hours: 12 },
            BonusEffect::CaptureImmunity { hours: 6 },
            BonusEffect::CaptureImmunity { hours: 24 },
        ]);
        assert_eq!(folded.capture_immunity_hours, 24);
    }

    #[test]
    fn test_fold_empty_is_default() {
        let folded = fold_bonuses(std::iter::empty::<BonusEffect>());
        assert_eq!(folded, SerfBonuses::default());
    }

    #[test]
    fn test_serf_collect_whole_intervals_only() {
        let mut serf = Serf::new(Profession::Kuznets, 0);
        // 29 minutes: nothing to flush, timestamp untouched
        assert_eq!(serf.collect(29 * 60), 0);
        assert_eq!(serf.last_collected, 0);
        // 61 minutes from capture: two full intervals
        assert_eq!(serf.collect(61 * 60), 2 * serf.gold_per_30m);
        assert_eq!(serf.last_collected, 61 * 60);
    }

    #[test]
    fn test_serf_collect_resets_to_now() {
        let mut serf = Serf::new(Profession::Torgovets, 1_000);
        let now = 1_000 + SERF_INCOME_INTERVAL_SECS + 100;
        assert_eq!(serf.collect(now), 3);
        assert_eq!(serf.last_collected, now);
        // Immediately collecting again yields nothing
        assert_eq!(serf.collect(now), 0);
    }

    #[test]
    fn test_serf_pending_intervals_negative_elapsed() {
        let serf = Serf::new(Profession::Monakh, 1_000);
        assert_eq!(serf.pending_intervals(500), 0);
    }

    #[test]
    fn test_serf_protection_window() {
        let mut serf = Serf::new(Profession::Monakh, 0);
        assert!(!serf.is_protected(0));
        serf.protection_until = Some(3_600);
        assert!(serf.is_protected(100));
        assert!(!serf.is_protected(3_600));
    }

    #[test]
    fn test_ransom_price_floor() {
        assert_eq!(ransom_price(0, 0), MIN_RANSOM_SILVER);
        assert_eq!(ransom_price(1, 0), MIN_RANSOM_SILVER);
        // Above the floor the formula applies
        assert_eq!(ransom_price(1_000, 24), 2_240);
    }

    #[test]
    fn test_daily_gold_income() {
        let serf = Serf::new(Profession::Torgovets, 0);
        assert_eq!(daily_gold_income(&serf), 3 * 48);
    }

    #[test]
    fn test_random_profession_covers_catalog() {
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..200 {
            seen.insert(Profession::random(&mut rng));
        }
        assert_eq!(seen.len(), Profession::ALL.len());
    }
}
