//! Stray-tile detection.

use octomino_core::Tile;

use crate::config::ScoringConfig;

/// A tile set split into its compact core and the stray tiles around it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutlierSplit {
    /// Tiles that are not outliers, in their original order.
    pub core: Vec<Tile>,
    /// Outlier tiles, farthest first.
    pub outliers: Vec<Tile>,
}

fn distance(a: Tile, b: Tile) -> f64 {
    let dx = f64::from(a.x() - b.x());
    let dy = f64::from(a.y() - b.y());
    dx.hypot(dy)
}

/// Finds tiles that sit far away from the rest of the set.
///
/// For every tile the mean Euclidean distance to all other tiles is computed.
/// The "median" is the mean distance at index `n / 2` of the descending
/// order (no averaging for even `n`). Tiles whose mean distance exceeds the
/// median times [`ScoringConfig::outlier_threshold_factor`] are outliers,
/// farthest first, capped at `min(max_outliers, floor(n * max_outlier_fraction))`.
///
/// Sets with fewer than [`ScoringConfig::min_tiles_for_outliers`] tiles never
/// have outliers.
///
/// # Examples
///
/// ```
/// use octomino_core::Tile;
/// use octomino_ranking::{ScoringConfig, detect_outliers};
///
/// // A 2×3 block and two tiles in the far corner.
/// let mut tiles: Vec<Tile> = (0..3).flat_map(|x| [Tile::new(x, 0), Tile::new(x, 1)]).collect();
/// tiles.extend([Tile::new(7, 7), Tile::new(7, 6)]);
///
/// let split = detect_outliers(&tiles, &ScoringConfig::default());
/// assert_eq!(split.outliers, [Tile::new(7, 7), Tile::new(7, 6)]);
/// assert_eq!(split.core.len(), 6);
/// ```
#[must_use]
pub fn detect_outliers(tiles: &[Tile], config: &ScoringConfig) -> OutlierSplit {
    let n = tiles.len();
    if n < config.min_tiles_for_outliers || n < 2 {
        return OutlierSplit {
            core: tiles.to_vec(),
            outliers: Vec::new(),
        };
    }

    #[expect(clippy::cast_precision_loss)]
    let others = (n - 1) as f64;
    let mut mean_distances: Vec<(Tile, f64)> = tiles
        .iter()
        .enumerate()
        .map(|(i, &tile)| {
            let total: f64 = tiles
                .iter()
                .enumerate()
                .filter(|&(j, _)| j != i)
                .map(|(_, &other)| distance(tile, other))
                .sum();
            (tile, total / others)
        })
        .collect();
    mean_distances.sort_by(|a, b| b.1.total_cmp(&a.1));

    let median = mean_distances[n / 2].1;
    let threshold = median * config.outlier_threshold_factor;

    #[expect(
        clippy::cast_precision_loss,
        clippy::cast_possible_truncation,
        clippy::cast_sign_loss
    )]
    let fraction_cap = (n as f64 * config.max_outlier_fraction).floor() as usize;
    let max_outliers = config.max_outliers.min(fraction_cap);

    let outliers: Vec<Tile> = mean_distances
        .iter()
        .filter(|&&(_, mean)| mean > threshold)
        .take(max_outliers)
        .map(|&(tile, _)| tile)
        .collect();
    let core = tiles
        .iter()
        .copied()
        .filter(|tile| !outliers.contains(tile))
        .collect();

    OutlierSplit { core, outliers }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(len: i32) -> Vec<Tile> {
        (0..len).map(|x| Tile::new(x, 0)).collect()
    }

    #[test]
    fn test_small_sets_have_no_outliers() {
        let tiles = [Tile::new(0, 0), Tile::new(7, 7), Tile::new(0, 7)];
        let split = detect_outliers(&tiles, &ScoringConfig::default());
        assert!(split.outliers.is_empty());
        assert_eq!(split.core, tiles);
    }

    #[test]
    fn test_straight_row_has_no_outliers() {
        let split = detect_outliers(&row(8), &ScoringConfig::default());
        assert!(split.outliers.is_empty());
        assert_eq!(split.core, row(8));
    }

    #[test]
    fn test_single_stray_tile() {
        // 2×2 block, a row of three next to it, and one tile far away.
        let mut tiles = vec![
            Tile::new(0, 0),
            Tile::new(1, 0),
            Tile::new(0, 1),
            Tile::new(1, 1),
            Tile::new(2, 0),
            Tile::new(2, 1),
            Tile::new(1, 2),
        ];
        tiles.push(Tile::new(7, 7));
        let split = detect_outliers(&tiles, &ScoringConfig::default());
        assert_eq!(split.outliers, [Tile::new(7, 7)]);
        assert_eq!(split.core, tiles[..7]);
    }

    #[test]
    fn test_fraction_cap_limits_small_shapes() {
        // Six tiles: floor(6 * 0.25) = 1 outlier at most.
        let tiles = [
            Tile::new(0, 0),
            Tile::new(1, 0),
            Tile::new(0, 1),
            Tile::new(1, 1),
            Tile::new(7, 7),
            Tile::new(7, 6),
        ];
        let config = ScoringConfig {
            outlier_threshold_factor: 1.0,
            ..ScoringConfig::default()
        };
        let split = detect_outliers(&tiles, &config);
        assert_eq!(split.outliers.len(), 1);
        assert_eq!(split.core.len(), 5);
    }
}
