//! Difficulty buckets.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A coarse difficulty the player can ask for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Difficulty {
    /// High rankings: symmetric, compact shapes.
    Easy,
    /// Middle rankings.
    Medium,
    /// Low rankings: irregular shapes with stray tiles.
    Hard,
}

impl Difficulty {
    /// All difficulties, easiest first.
    pub const ALL: [Self; 3] = [Self::Easy, Self::Medium, Self::Hard];

    /// Returns the lowercase name (`easy`, `medium`, `hard`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Easy => "easy",
            Self::Medium => "medium",
            Self::Hard => "hard",
        }
    }
}

impl Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a [`Difficulty`] name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown difficulty {name:?}: expected easy, medium or hard")]
pub struct DifficultyParseError {
    name: String,
}

impl FromStr for Difficulty {
    type Err = DifficultyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DifficultyParseError { name: s.to_owned() })
    }
}

/// Ranking thresholds that split rankings 1..=20 into difficulty buckets.
///
/// A ranking `r` is easy when `r >= easy_min`, medium when
/// `medium_min <= r < easy_min`, and hard otherwise.
///
/// Two sets of thresholds are in use and both are kept:
/// [`BucketThresholds::OFFLINE`] is what the ordering tool buckets by, and
/// [`BucketThresholds::LIVE`] is what the game selects puzzles by. They do
/// not agree; which one is authoritative is a product decision.
///
/// # Examples
///
/// ```
/// use octomino_catalog::{BucketThresholds, Difficulty};
///
/// assert_eq!(BucketThresholds::OFFLINE.classify(13), Difficulty::Medium);
/// assert_eq!(BucketThresholds::LIVE.classify(13), Difficulty::Easy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BucketThresholds {
    /// Lowest ranking counted as easy.
    pub easy_min: u32,
    /// Lowest ranking counted as medium.
    pub medium_min: u32,
}

impl BucketThresholds {
    /// Buckets used by the offline ordering tool: easy ≥ 14, medium 7–13, hard < 7.
    pub const OFFLINE: Self = Self {
        easy_min: 14,
        medium_min: 7,
    };

    /// Buckets used when the game picks a puzzle: easy ≥ 12, medium 6–11, hard < 6.
    pub const LIVE: Self = Self {
        easy_min: 12,
        medium_min: 6,
    };

    /// Returns the bucket that `ranking` falls into.
    #[must_use]
    pub fn classify(&self, ranking: u32) -> Difficulty {
        if ranking >= self.easy_min {
            Difficulty::Easy
        } else if ranking >= self.medium_min {
            Difficulty::Medium
        } else {
            Difficulty::Hard
        }
    }

    /// Returns `true` if `ranking` falls into `difficulty`.
    #[must_use]
    pub fn contains(&self, difficulty: Difficulty, ranking: u32) -> bool {
        self.classify(ranking) == difficulty
    }
}

impl Default for BucketThresholds {
    fn default() -> Self {
        Self::LIVE
    }
}
