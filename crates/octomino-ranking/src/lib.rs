//! Offline difficulty ranking for the puzzle catalog.
//!
//! Puzzles are ranked by how regular their primary shape looks: symmetric,
//! compact shapes are easy to recognize in any orientation, while shapes with
//! one or two stray tiles are hard.
//!
//! # Pipeline
//!
//! 1. [`outlier`]: split the primary shape into a *core* and at most two
//!    stray tiles.
//! 2. [`symmetry`]: mirror and rotational symmetry ratios of a tile set, and
//!    the value symmetry of a whole catalog line.
//! 3. [`score`]: combine symmetry, compactness, pattern bonuses and outlier
//!    penalties into a score in `[0, 1]` ([`Scorer`]).
//! 4. [`rank`]: sort a catalog by score and map positions onto rankings
//!    1..=20 ([`assign_rankings`]).
//! 5. [`order`]: interleave ranked puzzles into a campaign order of easy,
//!    medium and hard runs ([`order_puzzles`]).
//!
//! The weights and limits used along the way live in [`ScoringConfig`].
//!
//! # Examples
//!
//! ```
//! use octomino_catalog::CatalogEntry;
//! use octomino_ranking::{Scorer, assign_rankings};
//!
//! let line: Vec<String> = (0..64).map(|i| i.to_string()).collect();
//! let entry: CatalogEntry = line.join(" ").parse().unwrap();
//!
//! let scorer = Scorer::default();
//! let breakdown = scorer.score_entry(&entry);
//! assert!(breakdown.total > 0.99);
//!
//! let ranked = assign_rankings(&scorer, &[entry]);
//! assert_eq!(ranked[0].entry.ranking(), Some(20));
//! ```

pub mod config;
pub mod order;
pub mod outlier;
pub mod rank;
pub mod score;
pub mod symmetry;

pub use self::{
    config::ScoringConfig,
    order::{DifficultyBuckets, OrderedPuzzle, OrderingError, OrderingPattern, order_puzzles},
    outlier::{OutlierSplit, detect_outliers},
    rank::{RankedPuzzle, assign_rankings, ranking_for_position, ranking_histogram},
    score::{Pattern, ScoreBreakdown, Scorer},
    symmetry::SymmetryScores,
};
