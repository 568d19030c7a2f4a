//! turnpath - heading-aware grid path search from the command line.
//!
//! ## Subcommands
//!
//! - **maze**: labyrinth with `S`, `E` and `#` walls; prints the minimum
//!   cost with turn penalties, the number of optimal paths and how many
//!   cells lie on them
//! - **drops**: `x,y` obstacle list on a square; prints the shortest
//!   corner-to-corner cost and the first obstacle that cuts the corners apart
//! - **patrol**: walker map with an arrow; prints cells walked and the
//!   number of single obstructions that trap the walker in a loop
//!
//! Logging goes through `env_logger` (default level `info`, override with
//! `RUST_LOG`).

mod commands;
mod error;
mod input;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use log::error;
use turnpath_paths::{SearchConfig, direction_set};

use error::Result;

#[derive(Parser, Debug)]
#[command(name = "turnpath", version, about = "Heading-aware grid path search")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Cheapest routes through a labyrinth, counting turns
    Maze {
        /// Input file
        file: PathBuf,

        /// Penalty per quarter turn (per eighth turn with 8 directions)
        #[arg(long, default_value_t = 1000, allow_negative_numbers = true)]
        penalty: i64,

        /// Movement directions: 4 or 8
        #[arg(long, default_value_t = 4)]
        directions: usize,
    },

    /// Shortest path across a square while obstacles accumulate
    Drops {
        /// Input file with one `x,y` per line
        file: PathBuf,

        /// Largest coordinate; the square is (size + 1) cells wide
        #[arg(long, default_value_t = 70, value_parser = clap::value_parser!(i32).range(0..i32::MAX as i64))]
        size: i32,

        /// Number of obstacles placed before measuring the path
        #[arg(long, default_value_t = 1024)]
        take: usize,

        /// Movement directions: 4 or 8
        #[arg(long, default_value_t = 4)]
        directions: usize,
    },

    /// Walk-and-turn-right patrol with loop detection
    Patrol {
        /// Input file
        file: PathBuf,
    },
}

fn run(command: Command) -> Result<Vec<String>> {
    match command {
        Command::Maze {
            file,
            penalty,
            directions,
        } => {
            let config = SearchConfig::new(penalty, direction_set(directions)?)?;
            let maze = input::parse_maze(&input::read(&file)?)?;
            commands::maze(&maze, &config)
        }
        Command::Drops {
            file,
            size,
            take,
            directions,
        } => {
            let config = SearchConfig::default().with_directions(direction_set(directions)?);
            let drops = input::parse_drops(&input::read(&file)?)?;
            commands::drops(&drops, size, take, &config)
        }
        Command::Patrol { file } => {
            let map = input::parse_patrol(&input::read(&file)?)?;
            commands::patrol_report(&map)
        }
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    match run(cli.command) {
        Ok(lines) => {
            for line in lines {
                println!("{line}");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}
