//! Static lootbox drop tables.

/// What a drop pays out. Silver drops declare a range rolled separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropReward {
    Silver { min: u64, max: u64 },
    Gold(u64),
    Stars(u64),
    Reputation(u64),
}

/// One weighted entry of a drop table.
#[derive(Debug, Clone, Copy)]
pub struct DropDef {
    pub name: &'static str,
    pub weight: f64,
    pub reward: DropReward,
}

/// Drops from a normal lootbox.
pub static NORMAL_DROPS: [DropDef; 13] = [
    DropDef { name: "Handful of silver", weight: 25.0, reward: DropReward::Silver { min: 40, max: 120 } },
    DropDef { name: "Pouch of silver", weight: 15.0, reward: DropReward::Silver { min: 120, max: 300 } },
    DropDef { name: "Chest of silver", weight: 5.0, reward: DropReward::Silver { min: 400, max: 900 } },
    DropDef { name: "Gold piece", weight: 8.0, reward: DropReward::Gold(1) },
    DropDef { name: "Pair of gold pieces", weight: 8.0, reward: DropReward::Gold(2) },
    DropDef { name: "Gold stack", weight: 5.0, reward: DropReward::Gold(5) },
    DropDef { name: "Gold hoard", weight: 4.0, reward: DropReward::Gold(12) },
    DropDef { name: "Reputation token", weight: 10.0, reward: DropReward::Reputation(5) },
    DropDef { name: "Banner of renown", weight: 6.0, reward: DropReward::Reputation(15) },
    DropDef { name: "Star shard", weight: 4.0, reward: DropReward::Stars(1) },
    DropDef { name: "Star cluster", weight: 4.0, reward: DropReward::Stars(3) },
    DropDef { name: "Merchant's favor", weight: 4.0, reward: DropReward::Silver { min: 250, max: 600 } },
    DropDef { name: "Tsar's tribute", weight: 2.0, reward: DropReward::Gold(25) },
];

/// Drops from a rare lootbox.
pub static RARE_DROPS: [DropDef; 8] = [
    DropDef { name: "Strongbox of silver", weight: 20.0, reward: DropReward::Silver { min: 500, max: 1_500 } },
    DropDef { name: "Merchant's chest", weight: 16.0, reward: DropReward::Silver { min: 1_500, max: 4_000 } },
    DropDef { name: "Gold purse", weight: 14.0, reward: DropReward::Gold(10) },
    DropDef { name: "Gold coffer", weight: 12.0, reward: DropReward::Gold(25) },
    DropDef { name: "Falling star", weight: 12.0, reward: DropReward::Stars(5) },
    DropDef { name: "Constellation", weight: 10.0, reward: DropReward::Stars(12) },
    DropDef { name: "Hero's banner", weight: 10.0, reward: DropReward::Reputation(40) },
    DropDef { name: "Boyar's hoard", weight: 6.0, reward: DropReward::Gold(60) },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normal_table_weights_match_design() {
        let weights: Vec<f64> = NORMAL_DROPS.iter().map(|d| d.weight).collect();
        assert_eq!(
            weights,
            vec![25.0, 15.0, 5.0, 8.0, 8.0, 5.0, 4.0, 10.0, 6.0, 4.0, 4.0, 4.0, 2.0]
        );
        let total: f64 = weights.iter().sum();
        assert!((total - 100.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_all_weights_positive() {
        for drop in NORMAL_DROPS.iter().chain(RARE_DROPS.iter()) {
            assert!(drop.weight > 0.0, "{} has non-positive weight", drop.name);
        }
    }

    #[test]
    fn test_silver_ranges_well_formed() {
        for drop in NORMAL_DROPS.iter().chain(RARE_DROPS.iter()) {
            if let DropReward::Silver { min, max } = drop.reward {
                assert!(min <= max, "{} has inverted range", drop.name);
                assert!(min > 0);
            }
        }
    }
}
