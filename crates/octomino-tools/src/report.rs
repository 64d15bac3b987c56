//! Console reports printed by the tools.

use std::{
    collections::BTreeMap,
    fmt::{self, Display},
};

use octomino_catalog::{BucketThresholds, CatalogEntry, Difficulty};
use octomino_core::Shape;
use octomino_ranking::{DifficultyBuckets, OrderedPuzzle};

/// Number of ordered puzzles shown after ordering.
pub const PREVIEW_LEN: usize = 21;

/// Line format of a catalog file, judged by its first line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// 64 cell numbers.
    Plain,
    /// 64 cell numbers and a ranking.
    Ranked,
}

impl InputFormat {
    /// Detects the format of `entries`. An empty list counts as plain.
    #[must_use]
    pub fn detect(entries: &[CatalogEntry]) -> Self {
        match entries.first().and_then(CatalogEntry::ranking) {
            Some(_) => Self::Ranked,
            None => Self::Plain,
        }
    }
}

impl Display for InputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Plain => f.write_str("64 numbers (no ranking)"),
            Self::Ranked => f.write_str("65 numbers (with ranking)"),
        }
    }
}

/// Formats a ranking histogram, highest ranking first.
#[must_use]
pub fn distribution_lines(histogram: &BTreeMap<u32, usize>) -> Vec<String> {
    histogram
        .iter()
        .rev()
        .map(|(ranking, count)| format!("  Rank {ranking}: {count} shapes"))
        .collect()
}

/// Inclusive ranking range of `difficulty` under `thresholds`.
#[must_use]
pub fn ranking_range(
    difficulty: Difficulty,
    thresholds: BucketThresholds,
    min_ranking: u32,
    max_ranking: u32,
) -> (u32, u32) {
    match difficulty {
        Difficulty::Easy => (thresholds.easy_min, max_ranking),
        Difficulty::Medium => (thresholds.medium_min, thresholds.easy_min.saturating_sub(1)),
        Difficulty::Hard => (min_ranking, thresholds.medium_min.saturating_sub(1)),
    }
}

/// Formats the size of every bucket together with its ranking range.
#[must_use]
pub fn bucket_lines(
    buckets: &DifficultyBuckets,
    thresholds: BucketThresholds,
    min_ranking: u32,
    max_ranking: u32,
) -> Vec<String> {
    Difficulty::ALL
        .into_iter()
        .map(|difficulty| {
            let (lo, hi) = ranking_range(difficulty, thresholds, min_ranking, max_ranking);
            let label = format!("{} ({lo}-{hi}):", capitalized(difficulty));
            format!("  {label:<16}{} puzzles", buckets.get(difficulty).len())
        })
        .collect()
}

fn capitalized(difficulty: Difficulty) -> &'static str {
    match difficulty {
        Difficulty::Easy => "Easy",
        Difficulty::Medium => "Medium",
        Difficulty::Hard => "Hard",
    }
}

/// Formats the first [`PREVIEW_LEN`] ordered puzzles.
#[must_use]
pub fn preview_lines(ordered: &[OrderedPuzzle]) -> Vec<String> {
    ordered
        .iter()
        .take(PREVIEW_LEN)
        .enumerate()
        .map(|(i, puzzle)| {
            let ranking = puzzle
                .entry
                .ranking()
                .map_or_else(|| "-".to_owned(), |r| r.to_string());
            format!(
                "  {:>2}: {:<6} (rank {ranking}, puzzle #{})",
                i + 1,
                capitalized(puzzle.difficulty),
                puzzle.original_index
            )
        })
        .collect()
}

/// Draws shapes on an 8×8 grid, one letter per shape (`A` for the first).
///
/// Uncovered cells are `.` and cells covered more than once are `#`.
#[must_use]
pub fn letter_grid(shapes: &[Shape]) -> Vec<String> {
    let mut grid = [['.'; 8]; 8];
    for (letter, shape) in ('A'..='Z').zip(shapes) {
        for tile in shape.tiles() {
            if !tile.is_on_board() {
                continue;
            }
            let (Ok(x), Ok(y)) = (usize::try_from(tile.x()), usize::try_from(tile.y())) else {
                continue;
            };
            let cell = &mut grid[y][x];
            *cell = if *cell == '.' { letter } else { '#' };
        }
    }
    grid.iter()
        .map(|row| {
            row.iter()
                .map(char::to_string)
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use octomino_core::PALETTE;
    use octomino_ranking::order_puzzles;
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    fn identity(ranking: Option<u32>) -> CatalogEntry {
        let cells = std::array::from_fn(|i| u8::try_from(i).unwrap());
        CatalogEntry::new(cells, ranking).unwrap()
    }

    #[test]
    fn test_detect_format() {
        assert_eq!(InputFormat::detect(&[]), InputFormat::Plain);
        assert_eq!(InputFormat::detect(&[identity(None)]), InputFormat::Plain);
        assert_eq!(
            InputFormat::detect(&[identity(Some(4))]),
            InputFormat::Ranked
        );
        assert_eq!(InputFormat::Ranked.to_string(), "65 numbers (with ranking)");
    }

    #[test]
    fn test_distribution_is_descending() {
        let histogram = BTreeMap::from([(1, 4), (20, 2), (7, 1)]);
        assert_eq!(
            distribution_lines(&histogram),
            [
                "  Rank 20: 2 shapes",
                "  Rank 7: 1 shapes",
                "  Rank 1: 4 shapes"
            ]
        );
    }

    #[test]
    fn test_ranking_ranges() {
        let offline = BucketThresholds::OFFLINE;
        assert_eq!(ranking_range(Difficulty::Easy, offline, 1, 20), (14, 20));
        assert_eq!(ranking_range(Difficulty::Medium, offline, 1, 20), (7, 13));
        assert_eq!(ranking_range(Difficulty::Hard, offline, 1, 20), (1, 6));
        let live = BucketThresholds::LIVE;
        assert_eq!(ranking_range(Difficulty::Medium, live, 1, 20), (6, 11));
    }

    #[test]
    fn test_bucket_and_preview_lines() {
        let entries: Vec<_> = [20, 20, 10, 1, 15]
            .into_iter()
            .map(|r| identity(Some(r)))
            .collect();
        let thresholds = BucketThresholds::OFFLINE;

        let buckets = DifficultyBuckets::new(&entries, thresholds).unwrap();
        assert_eq!(
            bucket_lines(&buckets, thresholds, 1, 20),
            [
                "  Easy (14-20):   3 puzzles",
                "  Medium (7-13):  1 puzzles",
                "  Hard (1-6):     1 puzzles"
            ]
        );

        let mut rng = Pcg64::seed_from_u64(0);
        let ordered =
            order_puzzles(&entries, thresholds, &Default::default(), &mut rng).unwrap();
        let preview = preview_lines(&ordered);
        assert_eq!(preview.len(), 5);
        assert!(preview[0].starts_with("   1: Easy   (rank "));
        assert_eq!(preview[3], "   4: Medium (rank 10, puzzle #3)");
        assert_eq!(preview[4], "   5: Hard   (rank 1, puzzle #4)");
    }

    #[test]
    fn test_letter_grid() {
        let shapes = identity(None).decode(&PALETTE).unwrap();
        let grid = letter_grid(&shapes);
        assert_eq!(grid.len(), 8);
        assert_eq!(grid[0], "A A A A A A A A");
        assert_eq!(grid[7], "H H H H H H H H");

        let overlapping = [shapes[0].clone(), shapes[0].clone()];
        let grid = letter_grid(&overlapping);
        assert_eq!(grid[0], "# # # # # # # #");
        assert_eq!(grid[1], ". . . . . . . .");
    }
}
