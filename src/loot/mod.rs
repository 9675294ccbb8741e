//! Lootbox drop tables and the weighted resolver over them.

pub mod logic;
pub mod tables;

pub use logic::{roll_drop, roll_silver_amount};
pub use tables::{DropDef, DropReward, NORMAL_DROPS, RARE_DROPS};
