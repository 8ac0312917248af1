//! Jungle CLI - play, replay and inspect Jungle King games.

// Allow print in the CLI binary
#![allow(clippy::print_stdout, clippy::print_stderr)]
#![cfg_attr(test, allow(clippy::unwrap_used))]

mod cli;

use clap::{ArgAction, Parser, Subcommand};
use log::LevelFilter;
use std::process::ExitCode;

/// Jungle - a rule engine for Jungle King (Dou Shou Qi)
#[derive(Parser, Debug)]
#[command(name = "jungle")]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands
#[derive(Subcommand, Debug)]
enum Commands {
    /// Play a game on the terminal, one move per line
    Play {
        /// Player to move first (1 or 2, default: 1)
        #[arg(short, long, conflicts_with = "draw")]
        first: Option<u8>,

        /// Seed for the card shuffle (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Decide the first player by drawing cards (0-7 for each player)
        #[arg(long, num_args = 2, value_names = ["P1", "P2"])]
        draw: Option<Vec<usize>>,

        /// Print the board without colors
        #[arg(long)]
        plain: bool,
    },

    /// Play back a JSON move script
    Run {
        /// Move script file
        #[arg(required = true)]
        script: std::path::PathBuf,

        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,

        /// Only print the final result
        #[arg(short, long)]
        quiet: bool,
    },

    /// Print the opening position
    Board {
        /// Output format: text or json
        #[arg(short, long, default_value = "text")]
        format: cli::OutputFormat,
    },

    /// Run the pre-game card draw
    Draw {
        /// Seed for the shuffle (default: random)
        #[arg(short, long)]
        seed: Option<u64>,

        /// Card picked by Player 1 (0-7)
        #[arg(long)]
        p1: usize,

        /// Card picked by Player 2 (0-7)
        #[arg(long)]
        p2: usize,
    },
}

/// Install the logger. `RUST_LOG` overrides the `-v` level.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_logging(args.verbose);

    let result = match args.command {
        Commands::Play {
            first,
            seed,
            draw,
            plain,
        } => cli::play::execute(first, seed, draw.as_deref(), plain),

        Commands::Run {
            script,
            format,
            quiet,
        } => cli::run::execute(&script, format, quiet),

        Commands::Board { format } => cli::board::execute(format),

        Commands::Draw { seed, p1, p2 } => cli::draw::execute(seed, p1, p2),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
