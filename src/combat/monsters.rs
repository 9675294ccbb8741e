//! Cave monster catalog.
//!
//! Each monster gates on a minimum title and pays silver in a range, with
//! fixed gold and reputation. A few carry a chance to free a captive serf.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MonsterId {
    Leshy,
    Kikimora,
    Vodyanoy,
    Upyr,
    Likho,
    ZmeyGorynych,
}

#[derive(Debug, Clone, Copy)]
pub struct MonsterDef {
    pub id: MonsterId,
    pub name: &'static str,
    pub attack: u32,
    pub defense: u32,
    pub hp: u32,
    pub silver_min: u64,
    pub silver_max: u64,
    pub gold: u64,
    pub reputation: u64,
    /// Chance the monster was holding a serf who joins the victor.
    pub serf_chance: f64,
    pub min_title: u32,
}

pub static MONSTERS: [MonsterDef; 6] = [
    MonsterDef {
        id: MonsterId::Leshy,
        name: "Leshy",
        attack: 8,
        defense: 3,
        hp: 60,
        silver_min: 80,
        silver_max: 200,
        gold: 0,
        reputation: 5,
        serf_chance: 0.0,
        min_title: 2,
    },
    MonsterDef {
        id: MonsterId::Kikimora,
        name: "Kikimora",
        attack: 12,
        defense: 5,
        hp: 90,
        silver_min: 150,
        silver_max: 350,
        gold: 1,
        reputation: 8,
        serf_chance: 0.05,
        min_title: 2,
    },
    MonsterDef {
        id: MonsterId::Vodyanoy,
        name: "Vodyanoy",
        attack: 16,
        defense: 8,
        hp: 140,
        silver_min: 300,
        silver_max: 650,
        gold: 2,
        reputation: 12,
        serf_chance: 0.10,
        min_title: 3,
    },
    MonsterDef {
        id: MonsterId::Upyr,
        name: "Upyr",
        attack: 22,
        defense: 10,
        hp: 200,
        silver_min: 500,
        silver_max: 1_100,
        gold: 4,
        reputation: 18,
        serf_chance: 0.12,
        min_title: 4,
    },
    MonsterDef {
        id: MonsterId::Likho,
        name: "Likho",
        attack: 30,
        defense: 14,
        hp: 280,
        silver_min: 900,
        silver_max: 1_900,
        gold: 8,
        reputation: 28,
        serf_chance: 0.15,
        min_title: 5,
    },
    MonsterDef {
        id: MonsterId::ZmeyGorynych,
        name: "Zmey Gorynych",
        attack: 42,
        defense: 20,
        hp: 420,
        silver_min: 1_600,
        silver_max: 3_500,
        gold: 15,
        reputation: 50,
        serf_chance: 0.20,
        min_title: 6,
    },
];

impl MonsterId {
    /// Catalog entry order matches the enum discriminants.
    pub fn def(&self) -> &'static MonsterDef {
        &MONSTERS[*self as usize]
    }
}
