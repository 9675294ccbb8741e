//! Weighted drop selection.

use super::tables::{DropDef, DropReward};
use rand::Rng;

/// Picks one drop by cumulative weight subtraction. The roll lands in
/// `[0, total)`; floating point residue can leave the cursor positive
/// after the last entry, in which case the last entry wins.
pub fn roll_drop<'a>(table: &'a [DropDef], rng: &mut impl Rng) -> &'a DropDef {
    debug_assert!(!table.is_empty());
    let total: f64 = table.iter().map(|d| d.weight).sum();
    let mut cursor = rng.gen_range(0.0..total);
    for drop in table {
        if cursor < drop.weight {
            return drop;
        }
        cursor -= drop.weight;
    }
    &table[table.len() - 1]
}

/// Resolves a silver-range reward to a concrete amount. Fixed rewards
/// pass through untouched.
pub fn roll_silver_amount(reward: &DropReward, rng: &mut impl Rng) -> u64 {
    match *reward {
        DropReward::Silver { min, max } => rng.gen_range(min..=max),
        DropReward::Gold(n) | DropReward::Stars(n) | DropReward::Reputation(n) => n,
    }
}
