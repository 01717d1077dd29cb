//! CLI frontend for the Parlour text games.

mod commands;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use colored::Colorize;
use log::LevelFilter;

use parlour_hands::Variant;

#[derive(Parser)]
#[command(
    name = "parlour",
    about = "Parlour: small text games for the terminal",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log more detail to stderr (repeat for more)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Explore a castle of randomly ordered rooms
    Castle {
        /// RNG seed for a reproducible castle
        #[arg(short, long)]
        seed: Option<u64>,

        /// JSON file with custom clues, senses and rooms
        #[arg(short, long)]
        catalog: Option<PathBuf>,
    },

    /// Play one round of rock, paper, scissors
    Rps {
        /// RNG seed for the computer's choice
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Play one round of rock, paper, scissors, lizard, spock
    Rpsls {
        /// RNG seed for the computer's choice
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

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
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let result = match cli.command {
        Commands::Castle { seed, catalog } => commands::castle::run(seed, catalog.as_deref()),
        Commands::Rps { seed } => commands::hands::run(Variant::Classic, seed),
        Commands::Rpsls { seed } => commands::hands::run(Variant::Extended, seed),
    };

    if let Err(e) = result {
        eprintln!("{} {e}", "error:".red().bold());
        process::exit(1);
    }
}
