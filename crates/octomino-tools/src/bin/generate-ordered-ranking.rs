//! Reorders a ranked catalog into a campaign sequence.
//!
//! Buckets `<64 numbers> <ranking>` lines by difficulty, shuffles each
//! bucket and interleaves them as 3 easy, 2 medium, 2 hard, repeated until
//! every bucket is drained. Each output line is the input line followed by
//! its 1-based line number in the input.
//!
//! # Usage
//!
//! ```sh
//! cargo run --bin generate-ordered-ranking -- public/NewRanking.txt public/OrderedRanking.txt
//! ```
//!
//! Use the live game's thresholds, and a fixed seed for a reproducible order:
//!
//! ```sh
//! cargo run --bin generate-ordered-ranking -- --thresholds live --seed 42
//! ```

use std::{path::PathBuf, process};

use clap::Parser;
use octomino_catalog::BucketThresholds;
use octomino_ranking::{DifficultyBuckets, OrderingPattern, ScoringConfig, order_puzzles};
use octomino_tools::{
    cli::{self, ThresholdsArg, ToolError},
    report, version,
};

#[derive(Debug, Parser)]
#[command(author, version = version::build_version(), about)]
struct Args {
    /// Ranked catalog to reorder.
    #[arg(value_name = "INPUT", default_value = "public/NewRanking.txt")]
    input: PathBuf,

    /// Where to write the ordered catalog.
    #[arg(value_name = "OUTPUT", default_value = "public/OrderedRanking.txt")]
    output: PathBuf,

    /// Ranking thresholds used to bucket puzzles.
    #[arg(long, value_name = "KIND", value_enum, default_value_t)]
    thresholds: ThresholdsArg,

    /// Seed for the shuffles. Random when omitted.
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
    let thresholds = BucketThresholds::from(args.thresholds);
    let pattern = OrderingPattern::default();
    let config = ScoringConfig::default();

    println!("🎲 Ordered Ranking Generator");
    println!("   version {}", version::build_version());
    println!("===================================");
    println!();
    println!("📋 Pattern: {pattern} (repeated)");
    println!("🎰 Randomly selecting from each category");
    println!();
    println!("Reading puzzles from: {}", args.input.display());

    let entries = cli::load_entries(&args.input)?;
    println!("✓ Loaded {} puzzles", entries.len());
    println!();

    println!("Categorizing by difficulty...");
    let buckets = DifficultyBuckets::new(&entries, thresholds)?;
    for line in report::bucket_lines(&buckets, thresholds, config.min_ranking, config.max_ranking)
    {
        println!("{line}");
    }
    println!();

    println!("Generating ordered list...");
    let mut rng = cli::rng_from_seed(args.seed);
    let ordered = order_puzzles(&entries, thresholds, &pattern, &mut rng)?;
    println!("✓ Generated {} ordered puzzles", ordered.len());
    println!();

    println!("Writing to: {}", args.output.display());
    cli::write_lines(&args.output, &ordered)?;
    println!("✓ File written successfully");
    println!();
    println!("===================================");
    println!("✨ Done! Generated ordered ranking file");
    println!("📄 Output: {}", args.output.display());
    println!("===================================");
    println!();

    println!("Pattern verification (first {} puzzles):", report::PREVIEW_LEN);
    for line in report::preview_lines(&ordered) {
        println!("{line}");
    }
    Ok(())
}
