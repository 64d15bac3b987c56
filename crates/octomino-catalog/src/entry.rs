//! A single catalog line.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

use octomino_core::{CELL_COUNT, Color, SHAPE_SIZE, Shape, ShapeError, Tile};

/// Number of shapes in a solved board.
pub const SHAPES_PER_PUZZLE: usize = CELL_COUNT / SHAPE_SIZE;

/// Errors that can occur when parsing a [`CatalogEntry`].
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum EntryParseError {
    /// The line does not hold 64 or 65 numbers.
    #[display("expected 64 or 65 numbers, found {len}")]
    InvalidLength {
        /// Number of tokens found.
        len: usize,
    },
    /// A token is not a non-negative integer.
    #[display("invalid number {token:?}")]
    InvalidNumber {
        /// The rejected token.
        token: String,
    },
    /// A cell index is outside `0..64`.
    #[display("cell index {value} is outside the board")]
    CellOutOfRange {
        /// The rejected value.
        value: u32,
    },
    /// A cell index appears more than once.
    #[display("cell index {value} appears more than once")]
    DuplicateCell {
        /// The repeated value.
        value: u8,
    },
}

/// One solved board: 64 cell indices grouped into eight shapes, plus an optional ranking.
///
/// The first group of eight is the *primary shape*, the one the player is
/// handed. Every group is the same octomino up to rotation and reflection.
///
/// # Examples
///
/// ```
/// use octomino_catalog::CatalogEntry;
///
/// let line: Vec<String> = (0..64).map(|i| i.to_string()).collect();
/// let entry: CatalogEntry = format!("{} 17", line.join(" ")).parse().unwrap();
///
/// assert_eq!(entry.ranking(), Some(17));
/// assert_eq!(entry.shape_cells(0), [0, 1, 2, 3, 4, 5, 6, 7]);
/// assert_eq!(entry.to_string(), format!("{} 17", line.join(" ")));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogEntry {
    cells: [u8; CELL_COUNT],
    ranking: Option<u32>,
}

impl CatalogEntry {
    /// Creates an entry from 64 cell indices.
    ///
    /// # Errors
    ///
    /// Returns [`EntryParseError::CellOutOfRange`] if an index is not in `0..64`
    /// and [`EntryParseError::DuplicateCell`] if an index appears twice.
    pub fn new(cells: [u8; CELL_COUNT], ranking: Option<u32>) -> Result<Self, EntryParseError> {
        let mut seen = [false; CELL_COUNT];
        for &cell in &cells {
            let slot = seen
                .get_mut(usize::from(cell))
                .ok_or(EntryParseError::CellOutOfRange {
                    value: u32::from(cell),
                })?;
            if *slot {
                return Err(EntryParseError::DuplicateCell { value: cell });
            }
            *slot = true;
        }
        Ok(Self { cells, ranking })
    }

    /// Returns the 64 cell indices in catalog order.
    #[must_use]
    pub fn cells(&self) -> &[u8; CELL_COUNT] {
        &self.cells
    }

    /// Returns the trailing ranking, if the line had one.
    #[must_use]
    pub fn ranking(&self) -> Option<u32> {
        self.ranking
    }

    /// Returns a copy of this entry with its ranking replaced.
    #[must_use]
    pub fn with_ranking(&self, ranking: Option<u32>) -> Self {
        Self {
            cells: self.cells,
            ranking,
        }
    }

    /// Returns the cell indices of shape `i`.
    ///
    /// # Panics
    ///
    /// Panics if `i` is not in `0..8`.
    #[must_use]
    pub fn shape_cells(&self, i: usize) -> [u8; SHAPE_SIZE] {
        assert!(i < SHAPES_PER_PUZZLE, "shape index {i} out of range");
        std::array::from_fn(|j| self.cells[i * SHAPE_SIZE + j])
    }

    /// Returns the tiles of the primary (first) shape.
    #[must_use]
    pub fn primary_tiles(&self) -> Vec<Tile> {
        self.shape_cells(0)
            .into_iter()
            .filter_map(Tile::from_cell_index)
            .collect()
    }

    /// Decodes the eight shapes, giving shape `i` the color `colors[i]`.
    ///
    /// # Errors
    ///
    /// Returns a [`ShapeError`] only if the entry bypassed validation, which
    /// [`CatalogEntry::new`] and parsing rule out.
    pub fn decode(&self, colors: &[Color; SHAPES_PER_PUZZLE]) -> Result<Vec<Shape>, ShapeError> {
        (0..SHAPES_PER_PUZZLE)
            .map(|i| Shape::from_cell_indices(self.shape_cells(i), colors[i]))
            .collect()
    }
}

impl FromStr for CatalogEntry {
    type Err = EntryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let numbers = s
            .split_whitespace()
            .map(|token| {
                token.parse::<u32>().map_err(|_| EntryParseError::InvalidNumber {
                    token: token.to_owned(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        let ranking = match numbers.len() {
            CELL_COUNT => None,
            len if len == CELL_COUNT + 1 => numbers.last().copied(),
            len => return Err(EntryParseError::InvalidLength { len }),
        };

        let mut cells = [0; CELL_COUNT];
        for (cell, &value) in cells.iter_mut().zip(&numbers) {
            *cell = u8::try_from(value)
                .ok()
                .filter(|&v| usize::from(v) < CELL_COUNT)
                .ok_or(EntryParseError::CellOutOfRange { value })?;
        }
        Self::new(cells, ranking)
    }
}

impl Display for CatalogEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cell) in self.cells.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{cell}")?;
        }
        if let Some(ranking) = self.ranking {
            write!(f, " {ranking}")?;
        }
        Ok(())
    }
}
