//! Simulation report generation.

use crate::economy::titles;
use std::collections::HashMap;

/// Statistics tracked for one simulated run.
#[derive(Debug, Clone, Default)]
pub struct RunStats {
    pub final_title: u32,
    pub final_hourly_income: u64,
    pub final_silver: u64,
    pub final_gold: u64,
    pub final_streak: u32,
    pub cave_wins: u64,
    pub cave_losses: u64,
    pub serfs_held: u32,
    /// Hour at which each title level was first reached, index = level.
    pub hours_to_title: Vec<u64>,
}

impl RunStats {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Aggregated results from multiple simulation runs.
#[derive(Debug, Clone)]
pub struct SimReport {
    pub num_runs: u32,
    pub days: u32,

    pub avg_final_income: f64,
    pub avg_final_silver: f64,
    pub avg_final_gold: f64,
    pub avg_final_streak: f64,
    pub avg_cave_wins: f64,
    pub avg_cave_losses: f64,
    pub avg_serfs_held: f64,

    /// How many runs ended at each title level.
    pub title_distribution: HashMap<u32, u32>,
    /// Average days to first reach each title level, where any run did.
    pub avg_days_to_title: Vec<Option<f64>>,

    pub run_stats: Vec<RunStats>,
}

impl SimReport {
    /// Create a new report from completed run stats.
    pub fn from_runs(runs: Vec<RunStats>, days: u32) -> Self {
        let num_runs = runs.len() as u32;
        let n = num_runs.max(1) as f64;

        let avg_final_income = runs.iter().map(|r| r.final_hourly_income as f64).sum::<f64>() / n;
        let avg_final_silver = runs.iter().map(|r| r.final_silver as f64).sum::<f64>() / n;
        let avg_final_gold = runs.iter().map(|r| r.final_gold as f64).sum::<f64>() / n;
        let avg_final_streak = runs.iter().map(|r| r.final_streak as f64).sum::<f64>() / n;
        let avg_cave_wins = runs.iter().map(|r| r.cave_wins as f64).sum::<f64>() / n;
        let avg_cave_losses = runs.iter().map(|r| r.cave_losses as f64).sum::<f64>() / n;
        let avg_serfs_held = runs.iter().map(|r| r.serfs_held as f64).sum::<f64>() / n;

        let mut title_distribution = HashMap::new();
        for run in &runs {
            *title_distribution.entry(run.final_title).or_insert(0) += 1;
        }

        let max_title = runs
            .iter()
            .map(|r| r.hours_to_title.len())
            .max()
            .unwrap_or(0);
        let mut avg_days_to_title = Vec::with_capacity(max_title);
        for level in 0..max_title {
            let reached: Vec<f64> = runs
                .iter()
                .filter_map(|r| r.hours_to_title.get(level))
                .map(|h| *h as f64 / 24.0)
                .collect();
            if reached.is_empty() {
                avg_days_to_title.push(None);
            } else {
                avg_days_to_title.push(Some(reached.iter().sum::<f64>() / reached.len() as f64));
            }
        }

        Self {
            num_runs,
            days,
            avg_final_income,
            avg_final_silver,
            avg_final_gold,
            avg_final_streak,
            avg_cave_wins,
            avg_cave_losses,
            avg_serfs_held,
            title_distribution,
            avg_days_to_title,
            run_stats: runs,
        }
    }

    /// Human-readable summary.
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        out.push_str(&format!(
            "Results over {} runs of {} simulated days\n\n",
            self.num_runs, self.days
        ));
        out.push_str(&format!(
            "  Avg hourly income:  {:.1} silver/h\n",
            self.avg_final_income
        ));
        out.push_str(&format!("  Avg silver held:    {:.0}\n", self.avg_final_silver));
        out.push_str(&format!("  Avg gold held:      {:.1}\n", self.avg_final_gold));
        out.push_str(&format!("  Avg daily streak:   {:.1}\n", self.avg_final_streak));
        out.push_str(&format!(
            "  Avg cave record:    {:.1} wins / {:.1} losses\n",
            self.avg_cave_wins, self.avg_cave_losses
        ));
        out.push_str(&format!("  Avg serfs held:     {:.1}\n\n", self.avg_serfs_held));

        out.push_str("Final title distribution:\n");
        let mut levels: Vec<&u32> = self.title_distribution.keys().collect();
        levels.sort();
        for level in levels {
            let count = self.title_distribution[level];
            let pct = count as f64 / self.num_runs.max(1) as f64 * 100.0;
            out.push_str(&format!(
                "  {:<14} {:>4} runs ({:.0}%)\n",
                titles::title_def(*level).name,
                count,
                pct
            ));
        }

        out.push_str("\nAvg days to reach each title:\n");
        for (level, days) in self.avg_days_to_title.iter().enumerate().skip(1) {
            match days {
                Some(d) => out.push_str(&format!(
                    "  {:<14} day {:.1}\n",
                    titles::title_def(level as u32).name,
                    d
                )),
                None => out.push_str(&format!(
                    "  {:<14} never reached\n",
                    titles::title_def(level as u32).name
                )),
            }
        }
        out
    }
}
