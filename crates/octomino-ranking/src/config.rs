//! Scoring weights and limits.

/// Weights and limits of the difficulty score.
///
/// [`ScoringConfig::default`] holds the values the shipped catalog was
/// ranked with.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoringConfig {
    /// Weight of the best symmetry ratio in the shape score.
    pub symmetry_weight: f64,
    /// Weight of compactness (tiles per bounding-box cell) in the shape score.
    pub compactness_weight: f64,
    /// Bonus when the core exactly fills its bounding box.
    pub rectangle_bonus: f64,
    /// Bonus when the core lies in one row or one column (and is not a rectangle).
    pub line_bonus: f64,
    /// Penalty per outlier tile.
    pub outlier_penalty: f64,
    /// Fraction of the full-shape score added when there are no outliers.
    pub full_shape_bonus_factor: f64,
    /// Weight of the catalog line's value symmetry.
    pub grid_symmetry_weight: f64,
    /// A tile is an outlier candidate when its mean distance to the other
    /// tiles exceeds the median mean distance times this factor.
    pub outlier_threshold_factor: f64,
    /// Shapes with fewer tiles than this have no outliers.
    pub min_tiles_for_outliers: usize,
    /// Absolute cap on the number of outliers.
    pub max_outliers: usize,
    /// Cap on the number of outliers as a fraction of the tile count.
    pub max_outlier_fraction: f64,
    /// Ranking given to the lowest-scoring puzzle.
    pub min_ranking: u32,
    /// Ranking given to the highest-scoring puzzle.
    pub max_ranking: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            symmetry_weight: 0.7,
            compactness_weight: 0.3,
            rectangle_bonus: 0.15,
            line_bonus: 0.10,
            outlier_penalty: 0.15,
            full_shape_bonus_factor: 0.1,
            grid_symmetry_weight: 0.2,
            outlier_threshold_factor: 1.8,
            min_tiles_for_outliers: 4,
            max_outliers: 2,
            max_outlier_fraction: 0.25,
            min_ranking: 1,
            max_ranking: 20,
        }
    }
}
