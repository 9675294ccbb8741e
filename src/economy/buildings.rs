//! Static building catalog and the pure derivation functions over it.
//!
//! Costs and incomes are geometric curves off the catalog entry. The curve
//! is priced in silver up to level 10; levels 11-15 switch to a flat gold
//! price per tier. Prerequisites form a hand-authored DAG, checked by
//! [`catalog_is_acyclic`].

use crate::core::constants::*;
use serde::{Deserialize, Serialize};

/// Identifiers for every constructible building.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BuildingId {
    Izba,
    Melnitsa,
    Kuznitsa,
    Traktir,
    Rynok,
    Konyushnya,
    Pristan,
    Sloboda,
    Zastava,
    Terem,
    Sobor,
    Kreml,
}

impl BuildingId {
    /// All buildings in catalog order.
    pub const ALL: [BuildingId; 12] = [
        BuildingId::Izba,
        BuildingId::Melnitsa,
        BuildingId::Kuznitsa,
        BuildingId::Traktir,
        BuildingId::Rynok,
        BuildingId::Konyushnya,
        BuildingId::Pristan,
        BuildingId::Sloboda,
        BuildingId::Zastava,
        BuildingId::Terem,
        BuildingId::Sobor,
        BuildingId::Kreml,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            BuildingId::Izba => "Izba",
            BuildingId::Melnitsa => "Melnitsa",
            BuildingId::Kuznitsa => "Kuznitsa",
            BuildingId::Traktir => "Traktir",
            BuildingId::Rynok => "Rynok",
            BuildingId::Konyushnya => "Konyushnya",
            BuildingId::Pristan => "Pristan",
            BuildingId::Sloboda => "Sloboda",
            BuildingId::Zastava => "Zastava",
            BuildingId::Terem => "Terem",
            BuildingId::Sobor => "Sobor",
            BuildingId::Kreml => "Kreml",
        }
    }

    pub fn def(&self) -> &'static BuildingDef {
        &CATALOG[*self as usize]
    }
}

/// Immutable catalog entry for one building type.
#[derive(Debug, Clone, Copy)]
pub struct BuildingDef {
    pub id: BuildingId,
    /// Silver cost to construct at level 1, and the base of the cost curve.
    pub base_cost: u64,
    /// Hourly silver income at level 1.
    pub base_income: u64,
    pub cost_multiplier: f64,
    pub income_multiplier: f64,
    /// Progression bracket 1-5; selects the gold price base for levels 11+.
    pub tier: u8,
    /// Other buildings that must reach a minimum level before construction.
    pub prerequisites: &'static [(BuildingId, u32)],
}

/// Catalog order must match the `BuildingId` discriminants.
pub static CATALOG: [BuildingDef; 12] = [
    BuildingDef {
        id: BuildingId::Izba,
        base_cost: 200,
        base_income: 10,
        cost_multiplier: 1.6,
        income_multiplier: 1.35,
        tier: 1,
        prerequisites: &[],
    },
    BuildingDef {
        id: BuildingId::Melnitsa,
        base_cost: 350,
        base_income: 16,
        cost_multiplier: 1.6,
        income_multiplier: 1.35,
        tier: 1,
        prerequisites: &[(BuildingId::Izba, 2)],
    },
    BuildingDef {
        id: BuildingId::Kuznitsa,
        base_cost: 800,
        base_income: 35,
        cost_multiplier: 1.65,
        income_multiplier: 1.4,
        tier: 2,
        prerequisites: &[(BuildingId::Izba, 3)],
    },
    BuildingDef {
        id: BuildingId::Traktir,
        base_cost: 1_200,
        base_income: 50,
        cost_multiplier: 1.65,
        income_multiplier: 1.4,
        tier: 2,
        prerequisites: &[(BuildingId::Melnitsa, 3)],
    },
    BuildingDef {
        id: BuildingId::Rynok,
        base_cost: 2_000,
        base_income: 80,
        cost_multiplier: 1.7,
        income_multiplier: 1.4,
        tier: 2,
        prerequisites: &[(BuildingId::Traktir, 2), (BuildingId::Kuznitsa, 2)],
    },
    BuildingDef {
        id: BuildingId::Konyushnya,
        base_cost: 3_500,
        base_income: 130,
        cost_multiplier: 1.7,
        income_multiplier: 1.45,
        tier: 3,
        prerequisites: &[(BuildingId::Kuznitsa, 5)],
    },
    BuildingDef {
        id: BuildingId::Pristan,
        base_cost: 6_000,
        base_income: 210,
        cost_multiplier: 1.7,
        income_multiplier: 1.45,
        tier: 3,
        prerequisites: &[(BuildingId::Rynok, 4)],
    },
    BuildingDef {
        id: BuildingId::Sloboda,
        base_cost: 9_000,
        base_income: 300,
        cost_multiplier: 1.75,
        income_multiplier: 1.45,
        tier: 3,
        prerequisites: &[(BuildingId::Rynok, 5), (BuildingId::Konyushnya, 3)],
    },
    BuildingDef {
        id: BuildingId::Zastava,
        base_cost: 15_000,
        base_income: 480,
        cost_multiplier: 1.75,
        income_multiplier: 1.5,
        tier: 4,
        prerequisites: &[(BuildingId::Konyushnya, 5)],
    },
    BuildingDef {
        id: BuildingId::Terem,
        base_cost: 25_000,
        base_income: 750,
        cost_multiplier: 1.75,
        income_multiplier: 1.5,
        tier: 4,
        prerequisites: &[(BuildingId::Sloboda, 5)],
    },
    BuildingDef {
        id: BuildingId::Sobor,
        base_cost: 40_000,
        base_income: 1_200,
        cost_multiplier: 1.8,
        income_multiplier: 1.5,
        tier: 5,
        prerequisites: &[(BuildingId::Terem, 4)],
    },
    BuildingDef {
        id: BuildingId::Kreml,
        base_cost: 75_000,
        base_income: 2_000,
        cost_multiplier: 1.8,
        income_multiplier: 1.55,
        tier: 5,
        prerequisites: &[
            (BuildingId::Terem, 6),
            (BuildingId::Zastava, 5),
            (BuildingId::Sobor, 3),
        ],
    },
];

/// Cumulative silver cost to reach `level` (1-based).
pub fn cost(def: &BuildingDef, level: u32) -> u64 {
    if level == 0 {
        return 0;
    }
    (def.base_cost as f64 * def.cost_multiplier.powi(level as i32 - 1)).floor() as u64
}

/// Hourly income at `level` (1-based).
pub fn income(def: &BuildingDef, level: u32) -> u64 {
    if level == 0 {
        return 0;
    }
    (def.base_income as f64 * def.income_multiplier.powi(level as i32 - 1)).floor() as u64
}

/// Price of the next upgrade from `current_level`.
///
/// Silver up to level 10, gold for levels 11-15, `None` at max level.
/// Callers must treat `None` as "not upgradable", never as "free".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpgradePrice {
    Silver(u64),
    Gold(u64),
}

pub fn upgrade_price(def: &BuildingDef, current_level: u32) -> Option<UpgradePrice> {
    if current_level == 0 || current_level >= BUILDING_MAX_LEVEL {
        return None;
    }
    let next = current_level + 1;
    if next <= SILVER_LEVEL_CAP {
        Some(UpgradePrice::Silver(
            cost(def, next) - cost(def, current_level),
        ))
    } else {
        let base = TIER_BASE_GOLD_COST[(def.tier - 1) as usize];
        let mult = GOLD_LEVEL_MULTIPLIER[(next - SILVER_LEVEL_CAP - 1) as usize];
        Some(UpgradePrice::Gold((base as f64 * mult).floor() as u64))
    }
}

/// Cooldown applied after upgrading away from `level_before`. 0 if the
/// level has no table entry (i.e. no further upgrade exists).
pub fn upgrade_cooldown_secs(level_before: u32) -> i64 {
    match level_before {
        1..=14 => UPGRADE_COOLDOWN_SECS[(level_before - 1) as usize],
        _ => 0,
    }
}

/// Star cost to skip the cooldown started at `level_before`. 0 if no entry.
pub fn speed_up_cost(level_before: u32) -> u64 {
    match level_before {
        1..=14 => SPEED_UP_COST_STARS[(level_before - 1) as usize],
        _ => 0,
    }
}

/// A prerequisite the player has not yet met.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnmetPrerequisite {
    pub building: BuildingId,
    pub required_level: u32,
    pub current_level: u32,
}

/// Returns the unmet prerequisites for constructing `def`.
/// `level_of` maps a building id to its current level (0 = not built).
pub fn unmet_prerequisites(
    def: &BuildingDef,
    level_of: impl Fn(BuildingId) -> u32,
) -> Vec<UnmetPrerequisite> {
    def.prerequisites
        .iter()
        .filter_map(|&(building, required_level)| {
            let current_level = level_of(building);
            if current_level < required_level {
                Some(UnmetPrerequisite {
                    building,
                    required_level,
                    current_level,
                })
            } else {
                None
            }
        })
        .collect()
}

/// Verifies the prerequisite graph has no cycles. The catalog is
/// hand-authored, so this is exercised by a test rather than at runtime.
pub fn catalog_is_acyclic() -> bool {
    // 0 = unvisited, 1 = on stack, 2 = done
    fn visit(id: BuildingId, marks: &mut [u8; 12]) -> bool {
        let i = id as usize;
        match marks[i] {
            1 => return false,
            2 => return true,
            _ => {}
        }
        marks[i] = 1;
        for &(dep, _) in id.def().prerequisites {
            if !visit(dep, marks) {
                return false;
            }
        }
        marks[i] = 2;
        true
    }

    let mut marks = [0u8; 12];
    BuildingId::ALL.iter().all(|&id| visit(id, &mut marks))
}
