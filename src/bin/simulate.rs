//! Hangman round simulator CLI.
//!
//! Usage:
//!   cargo run --bin simulate -- [OPTIONS]
//!
//! Examples:
//!   cargo run --bin simulate                     # Default: 100 rounds
//!   cargo run --bin simulate -- -n 1000 -a 8     # 1000 rounds, 8 attempts each
//!   cargo run --bin simulate -- --seed 42        # Reproducible run
//!   cargo run --bin simulate -- --data-dir ./data # Words, config and player from ./data

use hangman::simulator::{run_simulation, run_simulation_with, SimConfig, SimReport};
use hangman::{GameConfig, JsonLexicon, JsonPlayerStore, Result};
use std::env;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args: Vec<String> = env::args().collect();
    let (config, source) = parse_args(&args);

    println!("Hangman round simulator");
    println!();
    println!("Configuration:");
    println!("  Rounds:         {}", config.num_rounds);
    println!("  Max attempts:   {}", config.game.max_attempts);
    println!("  Reward:         {}", config.game.reward);
    if let Some(seed) = config.seed {
        println!("  Seed:           {}", seed);
    }
    println!();

    match simulate(&config, &source) {
        Ok(report) => println!("{}", report.to_text()),
        Err(e) => {
            eprintln!("Simulation failed: {}", e);
            std::process::exit(1);
        }
    }
}

/// Where words, config and the simulated player come from.
enum DataSource {
    Builtin,
    Dir(PathBuf),
    Home,
}

fn simulate(config: &SimConfig, source: &DataSource) -> Result<SimReport> {
    match source {
        DataSource::Builtin => run_simulation(config),
        DataSource::Dir(dir) => {
            let lexicon = JsonLexicon::open_in(dir)?;
            let mut store = JsonPlayerStore::open_in(dir)?;
            run_simulation_with(config, &lexicon, &mut store)
        }
        DataSource::Home => {
            let lexicon = JsonLexicon::open()?;
            let mut store = JsonPlayerStore::open()?;
            run_simulation_with(config, &lexicon, &mut store)
        }
    }
}

fn parse_args(args: &[String]) -> (SimConfig, DataSource) {
    let mut config = SimConfig::default();
    let mut source = DataSource::Builtin;
    let mut attempts = None;

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "-n" | "--runs" => {
                if i + 1 < args.len() {
                    config.num_rounds = args[i + 1].parse().unwrap_or(100);
                    i += 1;
                }
            }
            "-a" | "--attempts" => {
                if i + 1 < args.len() {
                    attempts = Some(args[i + 1].parse().unwrap_or(12));
                    i += 1;
                }
            }
            "-s" | "--seed" => {
                if i + 1 < args.len() {
                    config.seed = args[i + 1].parse().ok();
                    i += 1;
                }
            }
            "-d" | "--data-dir" => {
                if i + 1 < args.len() {
                    source = DataSource::Dir(PathBuf::from(&args[i + 1]));
                    i += 1;
                }
            }
            "--home" => source = DataSource::Home,
            "-h" | "--help" => {
                print_help();
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    // Command-line attempts win over a loaded config.json
    match &source {
        DataSource::Builtin => {}
        DataSource::Dir(dir) => config.game = GameConfig::load_from(dir),
        DataSource::Home => config.game = GameConfig::load(),
    }
    if let Some(attempts) = attempts {
        config.game.max_attempts = attempts;
    }

    (config, source)
}

fn print_help() {
    println!("Hangman round simulator");
    println!();
    println!("USAGE:");
    println!("    cargo run --bin simulate -- [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -n, --runs <N>       Number of rounds (default: 100)");
    println!("    -a, --attempts <A>   Attempts per round (default: 12)");
    println!("    -s, --seed <S>       Random seed for reproducibility");
    println!("    -d, --data-dir <D>   Read config.json and words.json from D, save to D/players");
    println!("        --home           Same as --data-dir ~/.hangman");
    println!("    -h, --help           Show this help");
    println!();
    println!("Set RUST_LOG=debug to trace every guess.");
}
