//! Prints the solution of one catalog puzzle.
//!
//! The puzzle is picked by number, or at random from a difficulty bucket.
//! Each shape of the solution is drawn with its own letter, `A` being the
//! shape the player stamps.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin show-puzzle -- 42
//! cargo run --bin show-puzzle -- --difficulty hard --seed 7
//! ```

use std::{path::PathBuf, process};

use clap::Parser;
use octomino_catalog::{Catalog, Difficulty, MAX_PUZZLE_NUMBER, parse_puzzle_number};
use octomino_game::Game;
use octomino_tools::{
    cli::{ThresholdsArg, ToolError},
    report, version,
};

#[derive(Debug, Parser)]
#[command(author, version = version::build_version(), about)]
struct Args {
    /// Puzzle number, starting at 1.
    #[arg(value_name = "NUMBER", default_value = "")]
    number: String,

    /// Difficulty to pick from when no number is given.
    #[arg(long, value_name = "DIFFICULTY", default_value = "easy")]
    difficulty: Difficulty,

    /// Ranking thresholds used to pick by difficulty.
    #[arg(long, value_name = "KIND", value_enum, default_value = "live")]
    thresholds: ThresholdsArg,

    /// Ranked catalog to read.
    #[arg(long, value_name = "PATH", default_value = "public/RankingWithEntireSquare.txt")]
    catalog: PathBuf,

    /// Seed for picking and coloring. Random when omitted.
    #[arg(long, value_name = "SEED")]
    seed: Option<u64>,
}

fn main() {
    better_panic::install();
    env_logger::init();

    let args = Args::parse();
    if let Err(err) = run(&args) {
        eprintln!("❌ Error: {err}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ToolError> {
    if !args.catalog.exists() {
        return Err(ToolError::InputNotFound {
            path: args.catalog.clone(),
        });
    }
    let catalog = Catalog::open(&args.catalog);
    let max = catalog.len()?.min(MAX_PUZZLE_NUMBER);

    log::debug!("show-puzzle {}", version::build_version());
    let mut game = match args.seed {
        Some(seed) => Game::with_seed(seed),
        None => Game::new(),
    };
    game.set_thresholds(args.thresholds.into());
    match parse_puzzle_number(&args.number, max)? {
        Some(number) => game.start_game_with_puzzle_index(&catalog, number)?,
        None => game.start_game(&catalog, args.difficulty)?,
    }

    let Some(index) = game.puzzle_index() else {
        return Ok(());
    };
    let ranking = catalog
        .entry(index)?
        .ranking()
        .map_or_else(|| "unranked".to_owned(), |r| format!("ranking {r}"));
    println!("Puzzle #{index} ({ranking})");
    println!();
    for line in report::letter_grid(game.solution_shapes()) {
        println!("  {line}");
    }
    println!();
    for (letter, shape) in ('A'..='Z').zip(game.solution_shapes()) {
        println!("  {letter}: {}", shape.color());
    }
    Ok(())
}
