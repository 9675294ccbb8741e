//! Simulation configuration.

/// Configuration for a simulation run.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// Number of simulation runs to perform
    pub num_runs: u32,

    /// Random seed for reproducibility (None = random)
    pub seed: Option<u64>,

    /// Simulated days of play per run
    pub days: u32,

    /// Whether the player fights caves whenever possible
    pub fight_caves: bool,

    /// Log verbosity (0 = silent, 1 = summary, 2 = per-run)
    pub verbosity: u8,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            num_runs: 200,
            seed: None,
            days: 30,
            fight_caves: true,
            verbosity: 1,
        }
    }
}

impl SimConfig {
    /// Quick config for economy pacing checks
    pub fn economy_pacing(days: u32) -> Self {
        Self {
            num_runs: 100,
            days,
            fight_caves: false,
            ..Default::default()
        }
    }
}
