//! Core data structures for the octomino tiling puzzle.
//!
//! The puzzle is played on an 8×8 board. The player is given one 8-tile shape
//! (an octomino) and must place eight transformed copies of it so that they
//! cover every cell exactly once.
//!
//! # Overview
//!
//! - [`tile`]: Integer board coordinates ([`Tile`]) and the board dimensions.
//! - [`color`]: RGB colors and the fixed eight-color [`PALETTE`].
//! - [`geometry`]: Centroids, bounding boxes and the rounding rule shared by
//!   every centroid-relative transform.
//! - [`transform`]: The vocabulary of player moves ([`Direction`],
//!   [`Rotation`], [`FlipAxis`]).
//! - [`shape`]: [`Shape`], a set of exactly eight tiles with rotate, flip and
//!   bounds-checked translate operations.
//!
//! # Examples
//!
//! ```
//! use octomino_core::{Color, Rotation, Shape};
//!
//! // A 2×4 block in the top-left corner.
//! let mut shape = Shape::from_cell_indices([0, 1, 2, 3, 8, 9, 10, 11], Color::from_rgb(0xFD, 0x93, 0x01))
//!     .unwrap();
//!
//! // Moving left would push tiles off the board, so nothing moves.
//! assert!(!shape.translate(-1, 0));
//! assert!(shape.has_tile_at(0, 0));
//!
//! // Rotating spins the block around its own centroid and keeps it on the board.
//! shape.rotate(Rotation::Clockwise);
//! shape.rebound();
//! assert!(shape.is_on_board());
//! assert!(shape.tiles().iter().all(|tile| tile.is_on_board()));
//! ```

pub mod color;
pub mod geometry;
pub mod shape;
pub mod tile;
pub mod transform;

pub use self::{
    color::{Color, ColorParseError, PALETTE},
    geometry::{BoundingBox, Centroid, round_half_up},
    shape::{SHAPE_SIZE, Shape, ShapeError},
    tile::{BOARD_SIZE, CELL_COUNT, Tile},
    transform::{Direction, DirectionParseError, FlipAxis, Rotation},
};
