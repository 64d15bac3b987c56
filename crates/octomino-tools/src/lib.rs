//! Shared pieces of the octomino command-line tools.
//!
//! - `generate-new-ranking`: scores a catalog and writes it back ranked,
//!   best score first.
//! - `generate-ordered-ranking`: reorders a ranked catalog into repeating
//!   runs of easy, medium and hard puzzles.
//! - `show-puzzle`: prints the solution of one catalog puzzle.

pub mod cli;
pub mod report;
pub mod version;
