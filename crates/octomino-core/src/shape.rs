//! Shapes and their transforms.

use std::fmt::{self, Display};

use crate::{
    color::Color,
    geometry::{BoundingBox, Centroid, round_half_up},
    tile::Tile,
    transform::{FlipAxis, Rotation},
};

/// Number of tiles in every shape.
pub const SHAPE_SIZE: usize = 8;

/// Errors that can occur when building a [`Shape`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum ShapeError {
    /// A cell index is outside `0..64`.
    #[display("cell index {index} is outside the board")]
    CellOutOfRange {
        /// The rejected index.
        index: u8,
    },
    /// The same tile appears twice.
    #[display("tile {tile} appears more than once")]
    DuplicateTile {
        /// The repeated tile.
        tile: Tile,
    },
}

/// Eight tiles sharing one color.
///
/// A shape is a value: cloning (or [`Shape::duplicate`]) produces a fully
/// independent copy. Rotations and flips keep the tile count and the relative
/// layout of the tiles; only position and orientation change. They do not
/// check the board bounds, so callers follow them with [`Shape::rebound`].
/// Translation via [`Shape::translate`] is all-or-nothing: if any tile would
/// leave the board, no tile moves.
///
/// # Examples
///
/// ```
/// use octomino_core::{Color, FlipAxis, Shape};
///
/// let color = Color::from_rgb(0x23, 0xFA, 0x00);
/// // An L shape: a column of six with two tiles sticking out at the bottom.
/// let mut shape = Shape::from_cell_indices([0, 8, 16, 24, 32, 40, 41, 42], color).unwrap();
///
/// assert!(shape.translate(2, 0));
/// assert!(shape.has_tile_at(2, 0));
///
/// let mirrored = shape.flipped(FlipAxis::Horizontal);
/// assert_eq!(mirrored.tiles().len(), 8);
/// assert_eq!(shape.flipped(FlipAxis::Horizontal).flipped(FlipAxis::Horizontal), shape);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    tiles: [Tile; SHAPE_SIZE],
    color: Color,
    is_active: bool,
}

impl Shape {
    /// Creates an inactive shape from eight distinct tiles.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::DuplicateTile`] if a tile appears twice.
    pub fn new(tiles: [Tile; SHAPE_SIZE], color: Color) -> Result<Self, ShapeError> {
        for (i, tile) in tiles.iter().enumerate() {
            if tiles[..i].contains(tile) {
                return Err(ShapeError::DuplicateTile { tile: *tile });
            }
        }
        Ok(Self {
            tiles,
            color,
            is_active: false,
        })
    }

    /// Creates an inactive shape from eight row-major cell indices.
    ///
    /// # Errors
    ///
    /// Returns [`ShapeError::CellOutOfRange`] if an index is not in `0..64`, or
    /// [`ShapeError::DuplicateTile`] if an index appears twice.
    pub fn from_cell_indices(
        indices: [u8; SHAPE_SIZE],
        color: Color,
    ) -> Result<Self, ShapeError> {
        let mut tiles = [Tile::new(0, 0); SHAPE_SIZE];
        for (tile, index) in tiles.iter_mut().zip(indices) {
            *tile = Tile::from_cell_index(index).ok_or(ShapeError::CellOutOfRange { index })?;
        }
        Self::new(tiles, color)
    }

    /// Returns an independent, inactive copy of this shape with the same tiles and color.
    #[must_use]
    pub fn duplicate(&self) -> Self {
        Self {
            tiles: self.tiles,
            color: self.color,
            is_active: false,
        }
    }

    /// Returns the tiles in their original order.
    #[must_use]
    pub fn tiles(&self) -> &[Tile; SHAPE_SIZE] {
        &self.tiles
    }

    /// Returns the color.
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Replaces the color.
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Returns `true` if this is the shape the player is currently moving.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.is_active
    }

    /// Marks the shape as active or inactive.
    pub fn set_active(&mut self, active: bool) {
        self.is_active = active;
    }

    /// Returns `true` if one of the tiles is at `(x, y)`.
    #[must_use]
    pub fn has_tile_at(&self, x: i32, y: i32) -> bool {
        self.tiles.contains(&Tile::new(x, y))
    }

    /// Returns the mean of the tile coordinates.
    #[must_use]
    pub fn centroid(&self) -> Centroid {
        match Centroid::of(&self.tiles) {
            Some(centroid) => centroid,
            None => unreachable!("a shape always has {SHAPE_SIZE} tiles"),
        }
    }

    /// Returns the bounding box of the tiles.
    #[must_use]
    pub fn bounding_box(&self) -> BoundingBox {
        match BoundingBox::of(&self.tiles) {
            Some(bb) => bb,
            None => unreachable!("a shape always has {SHAPE_SIZE} tiles"),
        }
    }

    /// Returns `true` if every tile is on the board.
    #[must_use]
    pub fn is_on_board(&self) -> bool {
        self.tiles.iter().all(|tile| tile.is_on_board())
    }

    fn map_tiles<F>(&self, f: F) -> Self
    where
        F: FnMut(Tile) -> Tile,
    {
        Self {
            tiles: self.tiles.map(f),
            color: self.color,
            is_active: self.is_active,
        }
    }

    /// Returns this shape turned a quarter around its centroid.
    ///
    /// Each tile is rotated in centroid-relative coordinates and then rounded
    /// back onto the integer grid. The result may lie partly off the board.
    #[must_use]
    pub fn rotated(&self, rotation: Rotation) -> Self {
        let Centroid { x: cx, y: cy } = self.centroid();
        self.map_tiles(|tile| {
            let x = f64::from(tile.x()) - cx;
            let y = f64::from(tile.y()) - cy;
            let (nx, ny) = match rotation {
                Rotation::Clockwise => (-y, x),
                Rotation::CounterClockwise => (y, -x),
            };
            Tile::new(round_half_up(nx + cx), round_half_up(ny + cy))
        })
    }

    /// Rotates this shape in place. See [`Shape::rotated`].
    pub fn rotate(&mut self, rotation: Rotation) {
        *self = self.rotated(rotation);
    }

    /// Returns this shape mirrored through its centroid.
    ///
    /// The result may lie partly off the board.
    #[must_use]
    pub fn flipped(&self, axis: FlipAxis) -> Self {
        let Centroid { x: cx, y: cy } = self.centroid();
        self.map_tiles(|tile| match axis {
            FlipAxis::Horizontal => {
                Tile::new(round_half_up(2.0 * cx - f64::from(tile.x())), tile.y())
            }
            FlipAxis::Vertical => {
                Tile::new(tile.x(), round_half_up(2.0 * cy - f64::from(tile.y())))
            }
        })
    }

    /// Flips this shape in place. See [`Shape::flipped`].
    pub fn flip(&mut self, axis: FlipAxis) {
        *self = self.flipped(axis);
    }

    /// Returns this shape moved by `(dx, dy)`, or `None` if any tile would leave the board.
    #[must_use]
    pub fn translated(&self, dx: i32, dy: i32) -> Option<Self> {
        let moved = self.map_tiles(|tile| tile.offset(dx, dy));
        moved.is_on_board().then_some(moved)
    }

    /// Moves every tile by `(dx, dy)`.
    ///
    /// If any tile would leave the board, nothing moves and `false` is returned.
    pub fn translate(&mut self, dx: i32, dy: i32) -> bool {
        match self.translated(dx, dy) {
            Some(moved) => {
                *self = moved;
                true
            }
            None => false,
        }
    }

    /// Moves the shape by the smallest offset that puts its bounding box back on the board.
    ///
    /// Unlike [`Shape::translate`] the move is never rejected. Returns the applied offset.
    pub fn rebound(&mut self) -> (i32, i32) {
        let (dx, dy) = self.bounding_box().rebound_offset();
        if (dx, dy) != (0, 0) {
            *self = self.map_tiles(|tile| tile.offset(dx, dy));
        }
        (dx, dy)
    }
}

impl Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape(color={}, tiles=[", self.color)?;
        for (i, tile) in self.tiles.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{tile}")?;
        }
        f.write_str("])")
    }
}
