//! Title ladder: ranks unlocked by crossing hourly-income thresholds.
//!
//! A title only ever advances. Each rank raises the serf-slot capacity and
//! gates feature access (caves, raids, clans).

/// Static definition of one title rank.
#[derive(Debug, Clone, Copy)]
pub struct TitleDef {
    pub name: &'static str,
    /// Total hourly income required to hold this title.
    pub hourly_income_threshold: u64,
    /// How many captured serfs the player may hold at this rank.
    pub serf_slots: u32,
}

pub static TITLES: [TitleDef; 9] = [
    TitleDef {
        name: "Smerd",
        hourly_income_threshold: 0,
        serf_slots: 0,
    },
    TitleDef {
        name: "Remeslennik",
        hourly_income_threshold: 50,
        serf_slots: 1,
    },
    TitleDef {
        name: "Kupets",
        hourly_income_threshold: 200,
        serf_slots: 2,
    },
    TitleDef {
        name: "Posadnik",
        hourly_income_threshold: 500,
        serf_slots: 3,
    },
    TitleDef {
        name: "Voevoda",
        hourly_income_threshold: 1_200,
        serf_slots: 4,
    },
    TitleDef {
        name: "Boyarin",
        hourly_income_threshold: 2_500,
        serf_slots: 5,
    },
    TitleDef {
        name: "Knyaz",
        hourly_income_threshold: 5_000,
        serf_slots: 6,
    },
    TitleDef {
        name: "Veliky Knyaz",
        hourly_income_threshold: 10_000,
        serf_slots: 8,
    },
    TitleDef {
        name: "Tsar",
        hourly_income_threshold: 20_000,
        serf_slots: 10,
    },
];

/// Highest title level whose threshold is covered by `hourly_income`.
pub fn title_for_income(hourly_income: u64) -> u32 {
    let mut level = 0;
    for (i, def) in TITLES.iter().enumerate() {
        if hourly_income >= def.hourly_income_threshold {
            level = i as u32;
        }
    }
    level
}

pub fn title_def(level: u32) -> &'static TitleDef {
    let idx = (level as usize).min(TITLES.len() - 1);
    &TITLES[idx]
}

/// Income threshold for the next title, or `None` at the top rank.
pub fn next_title_threshold(level: u32) -> Option<u64> {
    TITLES
        .get(level as usize + 1)
        .map(|t| t.hourly_income_threshold)
}
