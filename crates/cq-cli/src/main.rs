//! Terminal frontend for the Campus Quest text adventure.

mod commands;
mod render;
mod terminal;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::render::Presentation;

#[derive(Parser)]
#[command(
    name = "cq",
    about = "Campus Quest, a turn-based text adventure",
    version,
    propagate_version = true
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Play the game interactively
    Play {
        /// Game data file
        #[arg(short, long, default_value = "data/campus.json")]
        data: PathBuf,

        /// Override the move budget
        #[arg(long)]
        moves: Option<u32>,

        /// Override the start location id
        #[arg(long)]
        start: Option<u32>,

        /// RNG seed for puzzles
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Name to greet the player with
        #[arg(long)]
        name: Option<String>,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,

        /// Delay per character when printing descriptions, in milliseconds
        #[arg(long, default_value_t = 0)]
        typewriter_ms: u64,
    },

    /// Validate a game data file
    Check {
        /// Game data file
        #[arg(short, long, default_value = "data/campus.json")]
        data: PathBuf,
    },

    /// Replay a command script and print the visited location ids
    Simulate {
        /// Game data file
        #[arg(short, long, default_value = "data/campus.json")]
        data: PathBuf,

        /// Canned answer for puzzle prompts (repeatable, used in order)
        #[arg(short, long = "answer")]
        answers: Vec<String>,

        /// Override the move budget
        #[arg(long)]
        moves: Option<u32>,

        /// RNG seed for puzzles
        #[arg(long, default_value_t = 42)]
        seed: u64,

        /// Print each response as it happens
        #[arg(short, long)]
        verbose: bool,

        /// Commands to run, one per argument
        commands: Vec<String>,
    },

    /// List the items of a game data file
    Items {
        /// Game data file
        #[arg(short, long, default_value = "data/campus.json")]
        data: PathBuf,
    },
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() {
    init_tracing();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Play {
            data,
            moves,
            start,
            seed,
            name,
            no_color,
            typewriter_ms,
        } => {
            let presentation = Presentation::new(!no_color, typewriter_ms);
            let overrides = commands::Overrides { moves, start };
            commands::play::run(&data, overrides, seed, name.as_deref(), &presentation)
        }
        Commands::Check { data } => commands::check::run(&data),
        Commands::Simulate {
            data,
            answers,
            moves,
            seed,
            verbose,
            commands: script,
        } => {
            let overrides = commands::Overrides { moves, start: None };
            commands::simulate::run(&data, overrides, seed, &answers, &script, verbose)
        }
        Commands::Items { data } => commands::items::run(&data),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
