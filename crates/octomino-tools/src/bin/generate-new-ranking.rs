//! Scores every puzzle of a catalog and writes it back ranked.
//!
//! Reads lines of 64 cell numbers (an optional 65th ranking is discarded),
//! scores each puzzle by the regularity of its first shape, and writes
//! `<64 numbers> <ranking>` lines in descending score order. Rankings run
//! from 20 (best score) down to 1.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin generate-new-ranking -- public/8x8squaresNumb.txt public/NewRanking.txt
//! ```

use std::{path::PathBuf, process};

use clap::Parser;
use octomino_ranking::{Scorer, assign_rankings, ranking_histogram};
use octomino_tools::{
    cli::{self, ToolError},
    report::{self, InputFormat},
    version,
};

#[derive(Debug, Parser)]
#[command(author, version = version::build_version(), about)]
struct Args {
    /// Catalog to score.
    #[arg(value_name = "INPUT", default_value = "public/8x8squaresNumb.txt")]
    input: PathBuf,

    /// Where to write the ranked catalog.
    #[arg(value_name = "OUTPUT", default_value = "public/NewRanking.txt")]
    output: PathBuf,
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
    println!("📊 Symmetry-Based Ranking Generator");
    println!("   version {}", version::build_version());
    println!("===================================");
    println!();
    println!("Reading shapes from: {}", args.input.display());

    let entries = cli::load_entries(&args.input)?;
    println!("✓ Loaded {} shapes", entries.len());
    println!("  Format: {}", InputFormat::detect(&entries));
    println!();

    println!("Calculating rankings...");
    let ranked = assign_rankings(&Scorer::default(), &entries);
    println!("✓ Rankings calculated");
    println!();

    println!("Writing rankings to: {}", args.output.display());
    cli::write_lines(&args.output, ranked.iter().map(|puzzle| &puzzle.entry))?;
    println!("✓ File written successfully");
    println!();
    println!("===================================");
    println!("✨ Done! Generated {} ranked shapes", ranked.len());
    println!("📄 Output: {}", args.output.display());
    println!("===================================");
    println!();

    println!("Ranking distribution:");
    let histogram = ranking_histogram(ranked.iter().map(|puzzle| &puzzle.entry));
    for line in report::distribution_lines(&histogram) {
        println!("{line}");
    }
    Ok(())
}
