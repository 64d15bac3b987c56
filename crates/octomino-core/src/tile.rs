//! Board coordinates.

use std::fmt::{self, Display};

/// Number of cells along each side of the board.
pub const BOARD_SIZE: i32 = 8;

/// Number of cells on the board.
pub const CELL_COUNT: usize = 64;

/// A single cell coordinate.
///
/// `x` is the column (growing to the right) and `y` is the row (growing
/// downwards). A tile on the board has both coordinates in `0..8`, but
/// intermediate results of a rotation or flip may lie outside the board until
/// the shape is moved back, so the coordinates are signed.
///
/// Tiles are plain values: every transform produces new tiles instead of
/// mutating existing ones.
///
/// # Examples
///
/// ```
/// use octomino_core::Tile;
///
/// let tile = Tile::from_cell_index(10).unwrap();
/// assert_eq!(tile, Tile::new(2, 1));
/// assert_eq!(tile.cell_index(), Some(10));
///
/// assert_eq!(Tile::new(-1, 3).cell_index(), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tile {
    x: i32,
    y: i32,
}

impl Tile {
    /// Creates a tile at `(x, y)`.
    #[must_use]
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Creates the tile for a row-major cell index (`index = y * 8 + x`).
    ///
    /// Returns `None` if `index` is not in `0..64`.
    #[must_use]
    pub const fn from_cell_index(index: u8) -> Option<Self> {
        if index as usize >= CELL_COUNT {
            return None;
        }
        let index = index as i32;
        Some(Self::new(index % BOARD_SIZE, index / BOARD_SIZE))
    }

    /// Returns the column.
    #[must_use]
    pub const fn x(self) -> i32 {
        self.x
    }

    /// Returns the row.
    #[must_use]
    pub const fn y(self) -> i32 {
        self.y
    }

    /// Returns the row-major cell index, or `None` if the tile is off the board.
    #[must_use]
    #[expect(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub const fn cell_index(self) -> Option<u8> {
        if self.is_on_board() {
            Some((self.y * BOARD_SIZE + self.x) as u8)
        } else {
            None
        }
    }

    /// Returns `true` if both coordinates are in `0..8`.
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        0 <= self.x && self.x < BOARD_SIZE && 0 <= self.y && self.y < BOARD_SIZE
    }

    /// Returns a new tile moved by `(dx, dy)`.
    #[must_use]
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
