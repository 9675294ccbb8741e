//! Turn-based combat: the resolver, its data types, and the monster catalog.

pub mod logic;
pub mod monsters;
pub mod types;

pub use logic::{resolve, resolve_seeded, roll_damage};
pub use monsters::{MonsterDef, MonsterId, MONSTERS};
pub use types::{BattleLoot, BattleResult, CombatEntry, Combatant, FightOutcome};
