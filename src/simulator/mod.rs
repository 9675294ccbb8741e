//! Monte Carlo balance simulator.
//!
//! Plays the real game actions with a greedy strategy to sanity-check
//! economy pacing and cave difficulty.

pub mod config;
pub mod report;
pub mod runner;

pub use config::SimConfig;
pub use report::{RunStats, SimReport};
pub use runner::run_simulation;
