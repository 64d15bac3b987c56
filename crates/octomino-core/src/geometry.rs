//! Geometric helpers shared by the transform engine and the difficulty scorer.

use crate::tile::{BOARD_SIZE, Tile};

/// Rounds to the nearest integer, with halves rounded towards positive infinity.
///
/// Every centroid-relative transform rounds through this function. Rounding
/// halves in a fixed direction (rather than away from zero) keeps the
/// fractional part identical for every tile of a shape, so a rotated or
/// flipped shape stays rigid.
///
/// # Examples
///
/// ```
/// use octomino_core::round_half_up;
///
/// assert_eq!(round_half_up(2.5), 3);
/// assert_eq!(round_half_up(-2.5), -2);
/// assert_eq!(round_half_up(-2.6), -3);
/// ```
#[must_use]
#[expect(clippy::cast_possible_truncation)]
pub fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Arithmetic mean of a set of tile coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Centroid {
    /// Mean column.
    pub x: f64,
    /// Mean row.
    pub y: f64,
}

impl Centroid {
    /// Computes the centroid of `tiles`, or `None` if `tiles` is empty.
    #[must_use]
    pub fn of(tiles: &[Tile]) -> Option<Self> {
        if tiles.is_empty() {
            return None;
        }
        #[expect(clippy::cast_precision_loss)]
        let len = tiles.len() as f64;
        let (sum_x, sum_y) = tiles.iter().fold((0.0, 0.0), |(sx, sy), tile| {
            (sx + f64::from(tile.x()), sy + f64::from(tile.y()))
        });
        Some(Self {
            x: sum_x / len,
            y: sum_y / len,
        })
    }
}

/// Inclusive bounding box of a set of tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoundingBox {
    /// Smallest column.
    pub min_x: i32,
    /// Largest column.
    pub max_x: i32,
    /// Smallest row.
    pub min_y: i32,
    /// Largest row.
    pub max_y: i32,
}

impl BoundingBox {
    /// Computes the bounding box of `tiles`, or `None` if `tiles` is empty.
    #[must_use]
    pub fn of(tiles: &[Tile]) -> Option<Self> {
        let (first, rest) = tiles.split_first()?;
        let init = Self {
            min_x: first.x(),
            max_x: first.x(),
            min_y: first.y(),
            max_y: first.y(),
        };
        Some(rest.iter().fold(init, |bb, tile| Self {
            min_x: bb.min_x.min(tile.x()),
            max_x: bb.max_x.max(tile.x()),
            min_y: bb.min_y.min(tile.y()),
            max_y: bb.max_y.max(tile.y()),
        }))
    }

    /// Number of columns covered.
    #[must_use]
    pub fn width(&self) -> i32 {
        self.max_x - self.min_x + 1
    }

    /// Number of rows covered.
    #[must_use]
    pub fn height(&self) -> i32 {
        self.max_y - self.min_y + 1
    }

    /// Number of cells inside the box.
    #[must_use]
    pub fn area(&self) -> i32 {
        self.width() * self.height()
    }

    /// Returns `true` if the whole box lies on the board.
    #[must_use]
    pub fn is_on_board(&self) -> bool {
        self.min_x >= 0 && self.max_x < BOARD_SIZE && self.min_y >= 0 && self.max_y < BOARD_SIZE
    }

    /// The smallest translation that brings the box back onto the board.
    ///
    /// Each axis is corrected independently: a negative minimum is shifted up
    /// to zero, otherwise a maximum past the last cell is shifted down to it.
    #[must_use]
    pub fn rebound_offset(&self) -> (i32, i32) {
        let axis = |min: i32, max: i32| {
            if min < 0 {
                -min
            } else if max >= BOARD_SIZE {
                BOARD_SIZE - 1 - max
            } else {
                0
            }
        };
        (
            axis(self.min_x, self.max_x),
            axis(self.min_y, self.max_y),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_half_up_matches_positive_and_negative_halves() {
        assert_eq!(round_half_up(0.5), 1);
        assert_eq!(round_half_up(0.49), 0);
        assert_eq!(round_half_up(-0.5), 0);
        assert_eq!(round_half_up(-0.51), -1);
        assert_eq!(round_half_up(7.0), 7);
    }

    #[test]
    fn test_centroid() {
        assert_eq!(Centroid::of(&[]), None);
        let centroid = Centroid::of(&[Tile::new(0, 0), Tile::new(3, 1)]).unwrap();
        assert!((centroid.x - 1.5).abs() < f64::EPSILON);
        assert!((centroid.y - 0.5).abs() < f64::EPSILON);
    }

    #[test]
    fn test_bounding_box_dimensions() {
        let bb = BoundingBox::of(&[Tile::new(2, 5), Tile::new(4, 1), Tile::new(3, 3)]).unwrap();
        assert_eq!(
            bb,
            BoundingBox {
                min_x: 2,
                max_x: 4,
                min_y: 1,
                max_y: 5,
            }
        );
        assert_eq!(bb.width(), 3);
        assert_eq!(bb.height(), 5);
        assert_eq!(bb.area(), 15);
        assert!(bb.is_on_board());
        assert_eq!(BoundingBox::of(&[]), None);
    }

    #[test]
    fn test_rebound_offset() {
        let inside = BoundingBox::of(&[Tile::new(0, 0), Tile::new(7, 7)]).unwrap();
        assert_eq!(inside.rebound_offset(), (0, 0));

        let left_top = BoundingBox::of(&[Tile::new(-2, -1), Tile::new(1, 2)]).unwrap();
        assert!(!left_top.is_on_board());
        assert_eq!(left_top.rebound_offset(), (2, 1));

        let right_bottom = BoundingBox::of(&[Tile::new(5, 6), Tile::new(9, 8)]).unwrap();
        assert_eq!(right_bottom.rebound_offset(), (-2, -1));
    }
}
