//! Game balance simulator CLI.
//!
//! Run Monte Carlo simulations to analyze economy pacing and combat
//! difficulty.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                   # Default: 200 runs, 30 days
//!   cargo run --bin simulate -- -n 50 -d 90   # 50 runs of 90 days
//!   cargo run --bin simulate -- --seed 42     # Reproducible run

use posad::simulator::{run_simulation, SimConfig};
use std::env;

fn main() {
    let args: Vec<String> = env::args().collect();
    let config = parse_args(&args);

    println!("╔═══════════════════════════════════════════════════════════════╗");
    println!("║              POSAD BALANCE SIMULATOR                          ║");
    println!("╚═══════════════════════════════════════════════════════════════╝");
    println!();
    println!("Configuration:");
    println!("  Runs:           {}", config.num_runs);
    println!("  Days:           {}", config.days);
    println!("  Fight caves:    {}", config.fight_caves);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();
    println!("Running simulation...");
    println!();

    let report = run_simulation(&config);
    println!("{}", report.to_text());
}

fn parse_args(args: &[String]) -> SimConfig {
    let mut config = SimConfig::default();

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_runs = args[i + 1].parse().unwrap_or(200);
                    i += 1;
                }
            }
            "-d" | "--days" => {
                if i + 1 < args.len() {
                    config.days = args[i + 1].parse().unwrap_or(30);
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "--no-caves" => {
                config.fight_caves = false;
            }
            "-v" | "--verbose" => {
                config.verbosity = 2;
            }
            "-q" | "--quiet" => {
                config.verbosity = 0;
            }
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    config
}

fn print_help() {
    println!("Posad balance simulator");
    println!();
    println!("Options:");
    println!("  -n, --runs <N>     Number of runs (default: 200)");
    println!("  -d, --days <N>     Simulated days per run (default: 30)");
    println!("  -s, --seed <N>     Fixed seed for reproducible results");
    println!("      --no-caves     Skip cave fighting");
    println!("  -v, --verbose      Per-run output");
    println!("  -q, --quiet        Summary only");
}
