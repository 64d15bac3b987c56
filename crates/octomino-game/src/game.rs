use std::collections::HashSet;

use octomino_catalog::{
    BucketThresholds, Catalog, CatalogSource, Difficulty, PuzzleSelection, SHAPES_PER_PUZZLE,
};
use octomino_core::{Color, Direction, FlipAxis, Rotation, Shape, Tile};
use rand::SeedableRng as _;
use rand_pcg::Pcg64;

use crate::{AddShapeBlockReason, GameError, placement::randomize};

/// Where a session stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display, derive_more::IsVariant)]
pub enum GameStatus {
    /// No puzzle has been started.
    #[display("not started")]
    NotStarted,
    /// Fewer than eight shapes are placed, or eight overlap.
    #[display("placing")]
    Placing,
    /// Eight shapes cover the board without overlapping.
    #[display("won")]
    Won,
    /// Eight shapes are placed but some overlap.
    #[display("full")]
    Full,
}

/// An octomino play session.
///
/// Before a puzzle is started the board is empty. Once started, between one
/// and eight shapes are placed and at most one of them is active; only the
/// active shape responds to moves, rotations and flips.
///
/// Every placed shape is a copy of the puzzle's first solution shape (the
/// *stamp*), colored like the solution shape at the same position.
#[derive(Debug, Clone)]
pub struct Game {
    rng: Pcg64,
    thresholds: BucketThresholds,
    stamp: Option<Shape>,
    solution: Vec<Shape>,
    shapes: Vec<Shape>,
    puzzle_index: Option<usize>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates an unstarted session seeded from the thread-local generator.
    #[must_use]
    pub fn new() -> Self {
        Self::with_rng(Pcg64::from_rng(&mut rand::rng()))
    }

    /// Creates an unstarted session with a fixed seed.
    ///
    /// Two sessions with the same seed given the same calls end up in the
    /// same state.
    #[must_use]
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(Pcg64::seed_from_u64(seed))
    }

    fn with_rng(rng: Pcg64) -> Self {
        Self {
            rng,
            thresholds: BucketThresholds::LIVE,
            stamp: None,
            solution: Vec::new(),
            shapes: Vec::new(),
            puzzle_index: None,
        }
    }

    /// Returns the thresholds used by [`Game::start_game`].
    #[must_use]
    pub fn thresholds(&self) -> BucketThresholds {
        self.thresholds
    }

    /// Sets the thresholds used by [`Game::start_game`].
    pub fn set_thresholds(&mut self, thresholds: BucketThresholds) {
        self.thresholds = thresholds;
    }

    /// Starts a random puzzle of the given difficulty.
    ///
    /// Any previous puzzle is discarded. The board then holds one randomly
    /// placed, active copy of the stamp.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Catalog`] if the catalog cannot be loaded or has
    /// no puzzle of that difficulty. The session is left unchanged.
    pub fn start_game<S>(
        &mut self,
        catalog: &Catalog<S>,
        difficulty: Difficulty,
    ) -> Result<(), GameError>
    where
        S: CatalogSource,
    {
        let selection = catalog.select_by_difficulty(difficulty, self.thresholds, &mut self.rng)?;
        self.begin(selection)
    }

    /// Starts the puzzle with the given 1-based index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::Catalog`] if the catalog cannot be loaded or
    /// `index` is not in `1..=len`. The session is left unchanged.
    ///
    /// # Examples
    ///
    /// ```
    /// use octomino_catalog::{Catalog, CatalogError};
    /// use octomino_game::{Game, GameError};
    ///
    /// let line: Vec<String> = (0..64).map(|i| i.to_string()).collect();
    /// let catalog = Catalog::from_text(line.join(" "));
    /// let mut game = Game::with_seed(0);
    ///
    /// assert!(matches!(
    ///     game.start_game_with_puzzle_index(&catalog, 0),
    ///     Err(GameError::Catalog(CatalogError::PuzzleIndexOutOfRange { .. }))
    /// ));
    /// assert_eq!(game.puzzle_index(), None);
    ///
    /// game.start_game_with_puzzle_index(&catalog, 1).unwrap();
    /// assert_eq!(game.puzzle_index(), Some(1));
    /// ```
    pub fn start_game_with_puzzle_index<S>(
        &mut self,
        catalog: &Catalog<S>,
        index: usize,
    ) -> Result<(), GameError>
    where
        S: CatalogSource,
    {
        let selection = catalog.select_by_index(index, &mut self.rng)?;
        self.begin(selection)
    }

    fn begin(&mut self, selection: PuzzleSelection) -> Result<(), GameError> {
        let PuzzleSelection {
            puzzle_index,
            solution,
            ranking,
        } = selection;
        let Some(first) = solution.first().filter(|_| solution.len() == SHAPES_PER_PUZZLE) else {
            return Err(GameError::IncompleteSolution {
                len: solution.len(),
            });
        };

        let stamp = first.duplicate();
        let mut shape = randomize(&stamp, &mut self.rng);
        shape.set_active(true);

        self.stamp = Some(stamp);
        self.solution = solution;
        self.shapes = vec![shape];
        self.puzzle_index = Some(puzzle_index);
        match ranking {
            Some(ranking) => log::debug!("started puzzle {puzzle_index} (ranking {ranking})"),
            None => log::debug!("started puzzle {puzzle_index}"),
        }
        Ok(())
    }

    /// Places the next copy of the stamp.
    ///
    /// The current active shape is deactivated. If fewer than eight shapes
    /// are placed, a randomly placed copy colored like the next solution
    /// shape is appended and becomes active. With eight shapes placed only
    /// the deactivation happens.
    ///
    /// Calling this before a puzzle is started logs an error and does nothing.
    pub fn add_shape(&mut self) {
        if self.stamp.is_none() {
            log::error!("tried to add a shape before starting the game");
            return;
        }

        if let Some(active) = self.active_shape_mut() {
            active.set_active(false);
        }
        let next = self.shapes.len();
        let Some(stamp) = self.stamp.as_ref().filter(|_| next < SHAPES_PER_PUZZLE) else {
            return;
        };

        let mut shape = randomize(stamp, &mut self.rng);
        if let Some(color) = self.solution.get(next).map(Shape::color) {
            shape.set_color(color);
        }
        shape.set_active(true);
        self.shapes.push(shape);
        log::debug!("placed shape {}", self.shapes.len());
    }

    /// Returns whether [`Game::add_shape`] would add a shape right now, or why not.
    ///
    /// Adding is blocked while placed shapes overlap, matching what the player
    /// is allowed to do.
    ///
    /// # Errors
    ///
    /// Returns the [`AddShapeBlockReason`] that prevents adding.
    pub fn add_shape_capability(&self) -> Result<(), AddShapeBlockReason> {
        if self.stamp.is_none() {
            return Err(AddShapeBlockReason::NotStarted);
        }
        if self.shapes.len() >= SHAPES_PER_PUZZLE {
            return Err(AddShapeBlockReason::AllPlaced);
        }
        if self.has_overlapping_shapes() {
            return Err(AddShapeBlockReason::Overlapping);
        }
        Ok(())
    }

    /// Returns `true` if [`Game::add_shape_capability`] allows adding.
    #[must_use]
    pub fn can_add_shape(&self) -> bool {
        self.add_shape_capability().is_ok()
    }

    /// Removes the most recently placed shape and activates the one before it.
    ///
    /// The first shape can never be removed; with one shape or none this does nothing.
    pub fn undo(&mut self) {
        if !self.can_undo() {
            return;
        }
        self.shapes.pop();
        if let Some(last) = self.shapes.last_mut() {
            last.set_active(true);
        }
        log::debug!("undo: {} shapes placed", self.shapes.len());
    }

    /// Returns `true` if more than one shape is placed.
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.shapes.len() > 1
    }

    fn active_shape_mut(&mut self) -> Option<&mut Shape> {
        self.shapes.iter_mut().find(|shape| shape.is_active())
    }

    /// Moves the active shape one cell.
    ///
    /// Returns `false` if there is no active shape or the move would take any
    /// tile off the board, in which case nothing moves.
    pub fn move_active_shape(&mut self, direction: Direction) -> bool {
        let (dx, dy) = direction.delta();
        self.active_shape_mut()
            .is_some_and(|shape| shape.translate(dx, dy))
    }

    /// Rotates the active shape a quarter turn and pulls it back onto the board.
    ///
    /// Returns `false` if there is no active shape.
    pub fn rotate_active_shape(&mut self, rotation: Rotation) -> bool {
        self.active_shape_mut().is_some_and(|shape| {
            shape.rotate(rotation);
            shape.rebound();
            true
        })
    }

    /// Mirrors the active shape and pulls it back onto the board.
    ///
    /// Returns `false` if there is no active shape.
    pub fn flip_active_shape(&mut self, axis: FlipAxis) -> bool {
        self.active_shape_mut().is_some_and(|shape| {
            shape.flip(axis);
            shape.rebound();
            true
        })
    }

    /// Returns `true` if any cell is covered by more than one placed shape.
    #[must_use]
    pub fn has_overlapping_shapes(&self) -> bool {
        let mut occupied = HashSet::new();
        self.shapes
            .iter()
            .flat_map(Shape::tiles)
            .any(|&tile| !occupied.insert(tile))
    }

    /// Returns `true` if eight shapes are placed and none overlap.
    ///
    /// Eight non-overlapping octominoes always cover the whole board.
    #[must_use]
    pub fn has_won(&self) -> bool {
        self.shapes.len() == SHAPES_PER_PUZZLE && !self.has_overlapping_shapes()
    }

    /// Deactivates every shape and returns `true` if the puzzle is won.
    ///
    /// Call after each player action; once won, no shape responds to input.
    pub fn finish_if_won(&mut self) -> bool {
        if !self.has_won() {
            return false;
        }
        if self.active_shape().is_some() {
            self.deactivate_all();
            match self.puzzle_index {
                Some(index) => log::info!("puzzle {index} solved"),
                None => log::info!("puzzle solved"),
            }
        }
        true
    }

    /// Marks every placed shape inactive.
    pub fn deactivate_all(&mut self) {
        for shape in &mut self.shapes {
            shape.set_active(false);
        }
    }

    /// Replaces the placed shapes with the solution, all inactive.
    ///
    /// Does nothing before a puzzle is started.
    pub fn auto_complete(&mut self) {
        if self.stamp.is_none() {
            return;
        }
        self.shapes.clone_from(&self.solution);
        self.deactivate_all();
        log::debug!("auto-completed puzzle");
    }

    /// Returns the current state of the session.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        if self.stamp.is_none() {
            GameStatus::NotStarted
        } else if self.shapes.len() < SHAPES_PER_PUZZLE {
            GameStatus::Placing
        } else if self.has_won() {
            GameStatus::Won
        } else {
            GameStatus::Full
        }
    }

    /// Returns the placed shapes, oldest first.
    #[must_use]
    pub fn shapes(&self) -> &[Shape] {
        &self.shapes
    }

    /// Returns the solution shapes, or an empty slice before a puzzle is started.
    #[must_use]
    pub fn solution_shapes(&self) -> &[Shape] {
        &self.solution
    }

    /// Returns the 1-based catalog index of the current puzzle.
    #[must_use]
    pub fn puzzle_index(&self) -> Option<usize> {
        self.puzzle_index
    }

    /// Returns the active shape, if any.
    #[must_use]
    pub fn active_shape(&self) -> Option<&Shape> {
        self.shapes.iter().find(|shape| shape.is_active())
    }

    /// Returns the active shape if it covers the cell `(x, y)`.
    #[must_use]
    pub fn active_shape_at(&self, x: i32, y: i32) -> Option<&Shape> {
        self.active_shape().filter(|shape| shape.has_tile_at(x, y))
    }

    /// Returns the color of every board cell in the solution, indexed `[y][x]`.
    ///
    /// All cells are `None` before a puzzle is started.
    #[must_use]
    pub fn solution_color_map(&self) -> [[Option<Color>; 8]; 8] {
        let mut map = [[None; 8]; 8];
        for shape in &self.solution {
            for &tile in shape.tiles() {
                if let Some((x, y)) = board_cell(tile) {
                    map[y][x] = Some(shape.color());
                }
            }
        }
        map
    }

    /// Returns how many placed shapes cover each board cell, indexed `[y][x]`.
    #[must_use]
    pub fn coverage(&self) -> [[u8; 8]; 8] {
        let mut coverage = [[0; 8]; 8];
        for tile in self.shapes.iter().flat_map(Shape::tiles) {
            if let Some((x, y)) = board_cell(*tile) {
                coverage[y][x] += 1;
            }
        }
        coverage
    }
}

fn board_cell(tile: Tile) -> Option<(usize, usize)> {
    if !tile.is_on_board() {
        return None;
    }
    Some((usize::try_from(tile.x()).ok()?, usize::try_from(tile.y()).ok()?))
}
