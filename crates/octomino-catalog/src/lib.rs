//! The precomputed puzzle catalog.
//!
//! A catalog is a text file with one puzzle per line. Each line holds 64
//! distinct cell indices (`index = row * 8 + column`) grouped into eight runs
//! of eight, one run per shape of the solved board, optionally followed by a
//! difficulty ranking from 1 (hardest) to 20 (easiest).
//!
//! # Overview
//!
//! - [`entry`]: Parsing and printing of a single catalog line ([`CatalogEntry`]).
//! - [`difficulty`]: Difficulty buckets and the ranking thresholds that define them.
//! - [`source`]: Where catalog text comes from ([`CatalogSource`]).
//! - [`catalog`]: The load-once [`Catalog`] repository and puzzle selection.
//! - [`puzzle_number`]: Validation of user-entered puzzle numbers.
//!
//! # Examples
//!
//! ```
//! use octomino_catalog::{BucketThresholds, Catalog, Difficulty};
//! use rand::SeedableRng as _;
//! use rand_pcg::Pcg64;
//!
//! let line: Vec<String> = (0..64).map(|i| i.to_string()).collect();
//! let catalog = Catalog::from_text(format!("{} 20\n", line.join(" ")));
//! let mut rng = Pcg64::seed_from_u64(7);
//!
//! let selection = catalog
//!     .select_by_difficulty(Difficulty::Easy, BucketThresholds::LIVE, &mut rng)
//!     .unwrap();
//! assert_eq!(selection.puzzle_index, 1);
//! assert_eq!(selection.solution.len(), 8);
//! ```

pub mod catalog;
pub mod difficulty;
pub mod entry;
pub mod puzzle_number;
pub mod source;

pub use self::{
    catalog::{Catalog, CatalogError, PuzzleSelection, parse_catalog},
    difficulty::{BucketThresholds, Difficulty, DifficultyParseError},
    entry::{CatalogEntry, EntryParseError, SHAPES_PER_PUZZLE},
    puzzle_number::{MAX_PUZZLE_NUMBER, PuzzleNumberError, parse_puzzle_number},
    source::{CatalogSource, FileSource, TextSource},
};
