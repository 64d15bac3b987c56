//! Puzzle difficulty score.

use derive_more::{Display, IsVariant};
use octomino_catalog::CatalogEntry;
use octomino_core::{BoundingBox, CELL_COUNT, Tile};

use crate::{config::ScoringConfig, outlier::detect_outliers, symmetry::SymmetryScores};

/// Regular pattern recognized in the core of a shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IsVariant)]
pub enum Pattern {
    /// The core fills its bounding box exactly.
    #[display("rectangle")]
    Rectangle,
    /// The core lies in a single row or column but has gaps.
    #[display("straight line")]
    StraightLine,
    /// Neither of the above.
    #[display("irregular")]
    Irregular,
}

/// Tiles per bounding-box cell, in `(0, 1]`. Empty sets score zero.
#[must_use]
pub fn compactness(tiles: &[Tile]) -> f64 {
    BoundingBox::of(tiles).map_or(0.0, |bb| {
        #[expect(clippy::cast_precision_loss)]
        let len = tiles.len() as f64;
        len / f64::from(bb.area())
    })
}

/// Returns `true` if there are at least four tiles and they fill their bounding box.
#[must_use]
pub fn is_rectangle(tiles: &[Tile]) -> bool {
    tiles.len() >= 4
        && BoundingBox::of(tiles).is_some_and(|bb| usize::try_from(bb.area()) == Ok(tiles.len()))
}

/// Returns `true` if the (non-empty) tiles share a row or a column.
#[must_use]
pub fn is_straight_line(tiles: &[Tile]) -> bool {
    let Some((first, rest)) = tiles.split_first() else {
        return false;
    };
    rest.iter().all(|t| t.y() == first.y()) || rest.iter().all(|t| t.x() == first.x())
}

/// Every term of a puzzle's score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoreBreakdown {
    /// Best symmetry ratio of the core.
    pub core_symmetry: f64,
    /// Compactness of the core.
    pub core_compactness: f64,
    /// Weighted sum of core symmetry and compactness.
    pub core_score: f64,
    /// Pattern recognized in the core.
    pub pattern: Pattern,
    /// Bonus for [`ScoreBreakdown::pattern`].
    pub pattern_bonus: f64,
    /// Number of outlier tiles.
    pub outlier_count: usize,
    /// Total penalty for outliers.
    pub outlier_penalty: f64,
    /// Bonus for the full shape, awarded only without outliers.
    pub full_shape_bonus: f64,
    /// Best value-symmetry ratio of the whole catalog line.
    pub grid_symmetry: f64,
    /// Bonus for [`ScoreBreakdown::grid_symmetry`].
    pub grid_bonus: f64,
    /// Final score, clamped to `[0, 1]`. Higher is easier.
    pub total: f64,
}

/// Scores puzzles with a fixed [`ScoringConfig`].
#[derive(Debug, Clone, Default)]
pub struct Scorer {
    config: ScoringConfig,
}

impl Scorer {
    /// Creates a scorer using `config`.
    #[must_use]
    pub fn new(config: ScoringConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration in use.
    #[must_use]
    pub fn config(&self) -> &ScoringConfig {
        &self.config
    }

    fn shape_score(&self, tiles: &[Tile]) -> (f64, f64, f64) {
        let symmetry = SymmetryScores::of_tiles(tiles).max();
        let compact = compactness(tiles);
        let score =
            self.config.symmetry_weight * symmetry + self.config.compactness_weight * compact;
        (symmetry, compact, score)
    }

    /// Scores a primary shape together with the catalog line it came from.
    ///
    /// # Examples
    ///
    /// ```
    /// use octomino_core::Tile;
    /// use octomino_ranking::{Pattern, Scorer};
    ///
    /// let diagonal: Vec<Tile> = (0..8).map(|i| Tile::new(i, i)).collect();
    /// let grid = std::array::from_fn(|i| i as u8);
    ///
    /// let breakdown = Scorer::default().score(&diagonal, &grid);
    /// assert_eq!(breakdown.pattern, Pattern::Irregular);
    /// assert!((breakdown.total - 0.81125).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn score(&self, primary: &[Tile], grid: &[u8; CELL_COUNT]) -> ScoreBreakdown {
        let config = &self.config;
        let split = detect_outliers(primary, config);
        let (core_symmetry, core_compactness, core_score) = self.shape_score(&split.core);

        let (pattern, pattern_bonus) = if is_rectangle(&split.core) {
            (Pattern::Rectangle, config.rectangle_bonus)
        } else if is_straight_line(&split.core) {
            (Pattern::StraightLine, config.line_bonus)
        } else {
            (Pattern::Irregular, 0.0)
        };

        let outlier_count = split.outliers.len();
        #[expect(clippy::cast_precision_loss)]
        let outlier_penalty = outlier_count as f64 * config.outlier_penalty;

        let full_shape_bonus = if outlier_count == 0 {
            config.full_shape_bonus_factor * self.shape_score(primary).2
        } else {
            0.0
        };

        let grid_symmetry = SymmetryScores::of_grid(grid).max();
        let grid_bonus = config.grid_symmetry_weight * grid_symmetry;

        let total = (core_score + pattern_bonus - outlier_penalty + full_shape_bonus + grid_bonus)
            .clamp(0.0, 1.0);

        ScoreBreakdown {
            core_symmetry,
            core_compactness,
            core_score,
            pattern,
            pattern_bonus,
            outlier_count,
            outlier_penalty,
            full_shape_bonus,
            grid_symmetry,
            grid_bonus,
            total,
        }
    }

    /// Scores a catalog entry by its primary shape.
    #[must_use]
    pub fn score_entry(&self, entry: &CatalogEntry) -> ScoreBreakdown {
        self.score(&entry.primary_tiles(), entry.cells())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    /// Builds a catalog entry whose primary shape is `primary`, followed by
    /// the remaining cells in ascending order.
    fn entry_with_primary(primary: [u8; 8]) -> CatalogEntry {
        let mut cells: Vec<u8> = primary.to_vec();
        cells.extend((0..64).filter(|c| !primary.contains(c)));
        CatalogEntry::new(cells.try_into().unwrap(), None).unwrap()
    }

    fn tiles(cells: &[u8]) -> Vec<Tile> {
        cells
            .iter()
            .map(|&c| Tile::from_cell_index(c).unwrap())
            .collect()
    }

    #[test]
    fn test_compactness() {
        assert!(compactness(&[]).abs() < EPS);
        assert!((compactness(&tiles(&[0, 1, 8, 9])) - 1.0).abs() < EPS);
        assert!((compactness(&tiles(&[0, 9])) - 0.5).abs() < EPS);
    }

    #[test]
    fn test_pattern_predicates() {
        assert!(!is_straight_line(&[]));
        assert!(is_straight_line(&tiles(&[3])));
        assert!(is_straight_line(&tiles(&[1, 9, 33])));
        assert!(!is_straight_line(&tiles(&[0, 9])));

        assert!(is_rectangle(&tiles(&[0, 1, 2, 3])));
        assert!(!is_rectangle(&tiles(&[0, 1, 2])));
        assert!(!is_rectangle(&tiles(&[0, 1, 2, 4])));
    }

    #[test]
    fn test_identity_line_scores_one() {
        let entry = entry_with_primary([0, 1, 2, 3, 4, 5, 6, 7]);
        let breakdown = Scorer::default().score_entry(&entry);
        let primary = entry.primary_tiles();

        assert!(is_straight_line(&primary));
        assert!(is_rectangle(&primary));
        // A full row fills its bounding box, so the rectangle bonus wins.
        assert_eq!(breakdown.pattern, Pattern::Rectangle);
        assert!((breakdown.pattern_bonus - 0.15).abs() < EPS);
        assert_eq!(breakdown.outlier_count, 0);
        assert!((breakdown.core_score - 1.0).abs() < EPS);
        assert!((breakdown.total - 1.0).abs() < EPS);
    }

    #[test]
    fn test_block_scores_one() {
        let entry = entry_with_primary([0, 1, 2, 3, 8, 9, 10, 11]);
        let breakdown = Scorer::default().score_entry(&entry);
        assert_eq!(breakdown.pattern, Pattern::Rectangle);
        assert!((breakdown.full_shape_bonus - 0.1).abs() < EPS);
        assert!((breakdown.total - 1.0).abs() < EPS);
    }

    #[test]
    fn test_outliers_are_penalized() {
        let scorer = Scorer::default();
        let entry = entry_with_primary([0, 1, 2, 8, 9, 10, 63, 55]);
        let breakdown = scorer.score_entry(&entry);

        assert_eq!(breakdown.outlier_count, 2);
        assert_eq!(breakdown.pattern, Pattern::Rectangle);
        assert!((breakdown.outlier_penalty - 0.30).abs() < EPS);
        assert!(breakdown.full_shape_bonus.abs() < EPS);
        assert!((breakdown.total - 0.85).abs() < EPS);

        let cluster = scorer.score(&tiles(&[0, 1, 2, 8, 9, 10]), entry.cells());
        assert_eq!(cluster.outlier_count, 0);
        assert!((cluster.total - 1.0).abs() < EPS);
        assert!(cluster.total > breakdown.total);
    }

    #[test]
    fn test_diagonal() {
        let entry = entry_with_primary([0, 9, 18, 27, 36, 45, 54, 63]);
        let breakdown = Scorer::default().score_entry(&entry);

        assert_eq!(breakdown.outlier_count, 0);
        assert_eq!(breakdown.pattern, Pattern::Irregular);
        assert!((breakdown.core_symmetry - 1.0).abs() < EPS);
        assert!((breakdown.core_compactness - 0.125).abs() < EPS);
        assert!((breakdown.core_score - 0.7375).abs() < EPS);
        assert!((breakdown.full_shape_bonus - 0.073_75).abs() < EPS);
        assert!((breakdown.total - 0.811_25).abs() < EPS);
    }

    #[test]
    fn test_gapped_row_is_straight_line() {
        let grid = std::array::from_fn(|i| u8::try_from(i).unwrap());
        let breakdown = Scorer::default().score(&tiles(&[0, 1, 2, 4, 5]), &grid);
        assert_eq!(breakdown.outlier_count, 0);
        assert_eq!(breakdown.pattern, Pattern::StraightLine);
        assert!((breakdown.pattern_bonus - 0.10).abs() < EPS);
    }

    #[test]
    fn test_permutation_has_no_grid_bonus() {
        let entry = entry_with_primary([5, 12, 20, 33, 40, 41, 50, 62]);
        let breakdown = Scorer::default().score_entry(&entry);
        assert!(breakdown.grid_symmetry.abs() < EPS);
        assert!(breakdown.grid_bonus.abs() < EPS);
        assert!((0.0..=1.0).contains(&breakdown.total));
    }

    #[test]
    fn test_custom_config() {
        let config = ScoringConfig {
            outlier_penalty: 1.0,
            ..ScoringConfig::default()
        };
        let entry = entry_with_primary([0, 1, 2, 8, 9, 10, 63, 55]);
        let breakdown = Scorer::new(config).score_entry(&entry);
        assert!(breakdown.total.abs() < EPS);
    }
}
