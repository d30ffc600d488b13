//! CLI definitions and entry point

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use super::commands;
use aoc2021::config::Config;
use aoc2021::output::OutputMode;

/// aoc2021 - Advent of Code 2021 solutions
#[derive(Parser, Debug)]
#[command(
    name = "aoc2021",
    version,
    about = "Advent of Code 2021 solutions",
    long_about = "Solve Advent of Code 2021 puzzles from their text inputs.\n\n\
                  Each puzzle reads one record per line and prints a single integer.\n\
                  Use --challenge on a puzzle to see the rules it applies."
)]
pub struct Cli {
    /// Enable verbose output (solver trace on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Output in JSON format (machine-readable)
    #[arg(long, global = true)]
    pub json: bool,

    /// Path to a config file (default: <config_dir>/aoc2021/config.toml)
    #[arg(long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Day 1: count sliding-window depth increases
    #[command(visible_alias = "day01")]
    SonarSweep {
        /// Path to the measurements file
        #[arg(short, long, value_name = "FILE")]
        measurements: Option<PathBuf>,

        /// Sliding window size
        #[arg(short, long, allow_negative_numbers = true)]
        window: Option<i64>,

        /// Show the puzzle rules and exit
        #[arg(short, long)]
        challenge: bool,
    },

    /// Day 2: pilot the submarine and multiply horizontal by depth
    #[command(visible_alias = "day02")]
    Dive {
        /// Path to the instructions file
        #[arg(short, long, value_name = "FILE")]
        instructions: Option<PathBuf>,

        /// Use advanced (aim) mode
        #[arg(short, long)]
        advanced: bool,

        /// Show the puzzle rules and exit
        #[arg(short, long)]
        challenge: bool,
    },

    /// List available puzzles
    List,

    /// Show version
    Version,
}

/// Run the CLI
pub fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if cli.verbose {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("debug")).init();
    } else {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let output_mode = if cli.json {
        OutputMode::Json
    } else {
        OutputMode::Human
    };

    match cli.command {
        Some(Command::SonarSweep {
            measurements,
            window,
            challenge,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            let args = commands::SonarSweepArgs {
                measurements,
                window,
                challenge,
            };
            commands::sonar_sweep(&args, &config, output_mode)
        },
        Some(Command::Dive {
            instructions,
            advanced,
            challenge,
        }) => {
            let config = load_config(cli.config.as_deref())?;
            let args = commands::DiveArgs {
                instructions,
                advanced,
                challenge,
            };
            commands::dive(&args, &config, output_mode)
        },
        Some(Command::List) => commands::list(output_mode),
        Some(Command::Version) => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION")
                    })
                );
            } else {
                println!("aoc2021 v{}", env!("CARGO_PKG_VERSION"));
            }
            Ok(())
        },
        None => {
            if output_mode == OutputMode::Json {
                println!(
                    "{}",
                    serde_json::json!({
                        "version": env!("CARGO_PKG_VERSION"),
                        "hint": "Use --help for usage"
                    })
                );
            } else {
                println!("aoc2021 v{}", env!("CARGO_PKG_VERSION"));
                println!("\nRun 'aoc2021 --help' for usage");
                println!("Run 'aoc2021 list' to see available puzzles");
            }
            Ok(())
        },
    }
}

fn load_config(explicit: Option<&std::path::Path>) -> anyhow::Result<Config> {
    Config::load(explicit).context("Failed to load configuration")
}
