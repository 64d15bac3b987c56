//! The octomino play session.
//!
//! A session picks a puzzle from a [`Catalog`](octomino_catalog::Catalog),
//! keeps its eight solution shapes, and lets the player stamp copies of the
//! first shape onto the board one at a time. Each new copy starts in a random
//! orientation and position ([`randomize`]). The player moves, rotates and
//! flips the active copy until all eight copies cover the board without
//! overlapping.
//!
//! # Examples
//!
//! ```
//! use octomino_catalog::Catalog;
//! use octomino_core::Direction;
//! use octomino_game::{Game, GameStatus};
//!
//! let line: Vec<String> = (0..64).map(|i| i.to_string()).collect();
//! let catalog = Catalog::from_text(line.join(" "));
//!
//! let mut game = Game::with_seed(1);
//! game.start_game_with_puzzle_index(&catalog, 1).unwrap();
//! assert_eq!(game.shapes().len(), 1);
//! assert_eq!(game.status(), GameStatus::Placing);
//!
//! game.move_active_shape(Direction::Down);
//! game.add_shape();
//! assert_eq!(game.shapes().len(), 2);
//!
//! game.auto_complete();
//! assert!(game.has_won());
//! ```

mod error;
mod game;
mod placement;

pub use self::{
    error::{AddShapeBlockReason, GameError},
    game::{Game, GameStatus},
    placement::{Orientation, randomize},
};
