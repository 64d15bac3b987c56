//! Symmetry ratios.

use std::collections::HashSet;

use octomino_core::{CELL_COUNT, Centroid, Tile, round_half_up};

/// Ratios of how well a set matches its mirror images and its half-turn.
///
/// Each ratio is in `[0, 1]`; `1.0` means perfectly symmetric along that axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SymmetryScores {
    /// Mirror across the vertical axis (columns reflected).
    pub horizontal: f64,
    /// Mirror across the horizontal axis (rows reflected).
    pub vertical: f64,
    /// Mirror across the main diagonal (row and column swapped).
    pub diagonal: f64,
    /// Mirror across the anti-diagonal.
    pub anti_diagonal: f64,
    /// Half-turn around the center.
    pub rotational: f64,
}

impl SymmetryScores {
    /// Symmetry of a tile set around its own centroid.
    ///
    /// For each transform, a tile counts as matched when its image (computed
    /// in real-valued centroid coordinates and then rounded to a cell) is also
    /// in the set. The ratio is matched tiles over all tiles. An empty set
    /// scores zero everywhere.
    ///
    /// Images are matched by `(x, y)` pair, so an image rounded past a board
    /// edge never matches. The JavaScript ranker matched by `y * 8 + x`, where
    /// an image in column 8 aliases column 0 of the next row. Connected shapes
    /// score the same either way; scattered tile sets can score lower here.
    ///
    /// # Examples
    ///
    /// ```
    /// use octomino_core::Tile;
    /// use octomino_ranking::SymmetryScores;
    ///
    /// // An L tromino is symmetric only about one diagonal.
    /// let l = [Tile::new(0, 0), Tile::new(0, 1), Tile::new(1, 1)];
    /// let scores = SymmetryScores::of_tiles(&l);
    /// assert_eq!(scores.anti_diagonal, 1.0);
    /// assert!(scores.horizontal < 1.0);
    /// ```
    #[must_use]
    pub fn of_tiles(tiles: &[Tile]) -> Self {
        let Some(Centroid { x: cx, y: cy }) = Centroid::of(tiles) else {
            return Self::default();
        };
        let set: HashSet<Tile> = tiles.iter().copied().collect();
        let ratio = |image: &dyn Fn(f64, f64) -> (f64, f64)| {
            let matched = tiles
                .iter()
                .filter(|tile| {
                    let (x, y) = image(f64::from(tile.x()), f64::from(tile.y()));
                    set.contains(&Tile::new(round_half_up(x), round_half_up(y)))
                })
                .count();
            #[expect(clippy::cast_precision_loss)]
            let ratio = matched as f64 / tiles.len() as f64;
            ratio
        };

        Self {
            horizontal: ratio(&|x, y| (2.0 * cx - x, y)),
            vertical: ratio(&|x, y| (x, 2.0 * cy - y)),
            diagonal: ratio(&|x, y| (cx + (y - cy), cy + (x - cx))),
            anti_diagonal: ratio(&|x, y| (cx - (y - cy), cy - (x - cx))),
            rotational: ratio(&|x, y| (2.0 * cx - x, 2.0 * cy - y)),
        }
    }

    /// Value symmetry of a full 64-value catalog line laid out row-major on the board.
    ///
    /// Compares values pairwise: left half against right half, top half
    /// against bottom half, the upper triangle against its transpose, the
    /// cells above the anti-diagonal against their anti-transpose, and the
    /// first 32 cells against the last 32 in reverse.
    ///
    /// A well-formed catalog line is a permutation of `0..64`, so no pair
    /// ever matches and every ratio is zero.
    #[must_use]
    pub fn of_grid(values: &[u8; CELL_COUNT]) -> Self {
        let n = CELL_COUNT.isqrt();
        let at = |x: usize, y: usize| values[y * n + x];
        let ratio = |pairs: &mut dyn Iterator<Item = ((usize, usize), (usize, usize))>| {
            let (matched, total) = pairs.fold((0u32, 0u32), |(m, t), ((x1, y1), (x2, y2))| {
                (m + u32::from(at(x1, y1) == at(x2, y2)), t + 1)
            });
            if total == 0 {
                0.0
            } else {
                f64::from(matched) / f64::from(total)
            }
        };
        let cells = move || (0..n).flat_map(move |y| (0..n).map(move |x| (x, y)));

        Self {
            horizontal: ratio(
                &mut cells()
                    .filter(|&(x, _)| x < n / 2)
                    .map(|(x, y)| ((x, y), (n - 1 - x, y))),
            ),
            vertical: ratio(
                &mut cells()
                    .filter(|&(_, y)| y < n / 2)
                    .map(|(x, y)| ((x, y), (x, n - 1 - y))),
            ),
            diagonal: ratio(
                &mut cells()
                    .filter(|&(x, y)| y < x)
                    .map(|(x, y)| ((x, y), (y, x))),
            ),
            anti_diagonal: ratio(
                &mut cells()
                    .filter(|&(x, y)| x + y < n - 1)
                    .map(|(x, y)| ((x, y), (n - 1 - y, n - 1 - x))),
            ),
            rotational: ratio(
                &mut cells()
                    .filter(|&(_, y)| y < n / 2)
                    .map(|(x, y)| ((x, y), (n - 1 - x, n - 1 - y))),
            ),
        }
    }

    /// The best of the five ratios.
    #[must_use]
    pub fn max(&self) -> f64 {
        [
            self.horizontal,
            self.vertical,
            self.diagonal,
            self.anti_diagonal,
            self.rotational,
        ]
        .into_iter()
        .fold(0.0, f64::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity_grid() -> [u8; CELL_COUNT] {
        std::array::from_fn(|i| u8::try_from(i).unwrap())
    }

    #[test]
    fn test_empty_set_scores_zero() {
        assert_eq!(SymmetryScores::of_tiles(&[]), SymmetryScores::default());
        assert!(SymmetryScores::of_tiles(&[]).max().abs() < f64::EPSILON);
    }

    #[test]
    fn test_rectangle_is_fully_symmetric() {
        let block: Vec<Tile> = (0..4).flat_map(|x| [Tile::new(x, 0), Tile::new(x, 1)]).collect();
        let scores = SymmetryScores::of_tiles(&block);
        assert!((scores.horizontal - 1.0).abs() < f64::EPSILON);
        assert!((scores.vertical - 1.0).abs() < f64::EPSILON);
        assert!((scores.rotational - 1.0).abs() < f64::EPSILON);
        assert!((scores.max() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_diagonal_line() {
        let line: Vec<Tile> = (0..8).map(|i| Tile::new(i, i)).collect();
        let scores = SymmetryScores::of_tiles(&line);
        assert!(scores.horizontal.abs() < f64::EPSILON);
        assert!(scores.vertical.abs() < f64::EPSILON);
        assert!((scores.diagonal - 1.0).abs() < f64::EPSILON);
        assert!((scores.anti_diagonal - 1.0).abs() < f64::EPSILON);
        assert!((scores.rotational - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_partial_symmetry_ratio() {
        // L tetromino: column of three with a foot. Centroid (0.25, 1.25).
        let l = [Tile::new(0, 0), Tile::new(0, 1), Tile::new(0, 2), Tile::new(1, 2)];
        let scores = SymmetryScores::of_tiles(&l);
        // Rows mirror around y = 1.25: 0 -> 2.5 -> 3 (miss), 1 -> 1.5 -> 2 (hit), 2 -> 0.5 -> 1 (hit),
        // and (1, 2) -> (1, 1) (miss).
        assert!((scores.vertical - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_off_board_image_does_not_wrap_to_next_row() {
        // Centroid x is 4.2, so (0, 0) mirrors to column 8 of row 0. Matching
        // by row-major index would find (0, 1) there instead.
        let tiles = [
            Tile::new(0, 0),
            Tile::new(0, 1),
            Tile::new(7, 0),
            Tile::new(7, 1),
            Tile::new(7, 2),
        ];
        let scores = SymmetryScores::of_tiles(&tiles);
        assert!(scores.horizontal.abs() < f64::EPSILON);
    }

    #[test]
    fn test_anti_diagonal_grid_pairs() {
        // Mirrored across the anti-diagonal: (x, y) and (7 - y, 7 - x) hold the same value.
        let grid: [u8; CELL_COUNT] = std::array::from_fn(|i| {
            let (x, y) = (i % 8, i / 8);
            u8::try_from((x + y).min(14 - x - y)).unwrap()
        });
        let scores = SymmetryScores::of_grid(&grid);
        assert!((scores.anti_diagonal - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_permutation_grid_has_no_value_symmetry() {
        let scores = SymmetryScores::of_grid(&identity_grid());
        assert_eq!(scores, SymmetryScores::default());
    }

    #[test]
    fn test_constant_grid_is_fully_symmetric() {
        let scores = SymmetryScores::of_grid(&[5; CELL_COUNT]);
        assert!((scores.horizontal - 1.0).abs() < f64::EPSILON);
        assert!((scores.anti_diagonal - 1.0).abs() < f64::EPSILON);
        assert!((scores.max() - 1.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_mirrored_grid() {
        // Value depends on the row and on the distance to the vertical midline.
        let grid: [u8; CELL_COUNT] = std::array::from_fn(|i| {
            let (x, y) = (i % 8, i / 8);
            u8::try_from(x.min(7 - x) + 4 * y).unwrap()
        });
        let scores = SymmetryScores::of_grid(&grid);
        assert!((scores.horizontal - 1.0).abs() < f64::EPSILON);
        assert!(scores.vertical.abs() < f64::EPSILON);
        assert!((scores.max() - 1.0).abs() < f64::EPSILON);
    }
}
