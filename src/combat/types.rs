//! Combat data types: combatants, turn logs, battle results.

use crate::economy::serfs::Serf;
use serde::{Deserialize, Serialize};

/// A fighter's effective stats at the moment a battle starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub attack: u32,
    pub defense: u32,
    pub hp: u32,
}

/// One completed turn. Damage of 0 on the defender side means the
/// defender was already down and never struck back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CombatEntry {
    pub turn: u32,
    pub attacker_damage: u32,
    pub defender_damage: u32,
    pub attacker_hp: u32,
    pub defender_hp: u32,
}

/// Outcome of a resolved fight. `won` is from the attacker's side.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FightOutcome {
    pub won: bool,
    pub log: Vec<CombatEntry>,
}

/// What a victorious battle pays out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BattleLoot {
    pub silver: u64,
    pub gold: u64,
    pub reputation: u64,
}

/// A full battle record. The seed replays the exact fight.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BattleResult {
    pub seed: u64,
    pub won: bool,
    pub log: Vec<CombatEntry>,
    pub loot: BattleLoot,
    #[serde(default)]
    pub captured_serf: Option<Serf>,
}
