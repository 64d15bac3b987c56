//! Random orientation and position of a freshly stamped shape.

use octomino_core::{BOARD_SIZE, FlipAxis, Rotation, Shape};
use rand::{Rng, RngExt as _};

/// A combination of quarter turns and mirror flips.
///
/// Applying an orientation performs the clockwise turns first, then the
/// horizontal flip, then the vertical flip, pulling the shape back onto the
/// board after every step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Orientation {
    /// Number of clockwise quarter turns, `0..4`.
    pub quarter_turns: u8,
    /// Mirror left to right.
    pub flip_horizontal: bool,
    /// Mirror top to bottom.
    pub flip_vertical: bool,
}

impl Orientation {
    /// Draws 0 to 3 quarter turns and two independent fair coin flips.
    #[must_use]
    pub fn random<R>(rng: &mut R) -> Self
    where
        R: Rng + ?Sized,
    {
        Self {
            quarter_turns: rng.random_range(0..4),
            flip_horizontal: rng.random_bool(0.5),
            flip_vertical: rng.random_bool(0.5),
        }
    }

    /// Applies this orientation to `shape` in place.
    ///
    /// # Examples
    ///
    /// ```
    /// use octomino_core::{Color, Shape, Tile};
    /// use octomino_game::Orientation;
    ///
    /// // Top row of the board.
    /// let tiles = std::array::from_fn(|x| Tile::new(x as i32, 0));
    /// let mut shape = Shape::new(tiles, Color::from_rgb(0, 0, 0)).unwrap();
    ///
    /// let turn = Orientation { quarter_turns: 1, ..Orientation::default() };
    /// turn.apply(&mut shape);
    ///
    /// // Now a column, pulled back onto the board.
    /// assert!(shape.is_on_board());
    /// assert_eq!(shape.bounding_box().width(), 1);
    /// assert_eq!(shape.bounding_box().height(), 8);
    /// ```
    pub fn apply(self, shape: &mut Shape) {
        for _ in 0..self.quarter_turns % 4 {
            shape.rotate(Rotation::Clockwise);
            shape.rebound();
        }
        if self.flip_horizontal {
            shape.flip(FlipAxis::Horizontal);
            shape.rebound();
        }
        if self.flip_vertical {
            shape.flip(FlipAxis::Vertical);
            shape.rebound();
        }
    }
}

/// Returns a copy of `shape` in a random orientation at a random on-board position.
///
/// The orientation is drawn by [`Orientation::random`]. The offset is then
/// drawn uniformly among all offsets that keep the whole shape on the board.
/// The returned shape keeps the color and active flag of `shape`.
#[must_use]
pub fn randomize<R>(shape: &Shape, rng: &mut R) -> Shape
where
    R: Rng + ?Sized,
{
    let mut shape = shape.clone();
    Orientation::random(rng).apply(&mut shape);
    shape.rebound();

    let bb = shape.bounding_box();
    let dx = rng.random_range(-bb.min_x..=BOARD_SIZE - 1 - bb.max_x);
    let dy = rng.random_range(-bb.min_y..=BOARD_SIZE - 1 - bb.max_y);
    let moved = shape.translate(dx, dy);
    debug_assert!(moved, "offset ({dx}, {dy}) leaves the board");
    shape
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use octomino_core::{Color, Tile};
    use rand::SeedableRng as _;
    use rand_pcg::Pcg64;

    use super::*;

    /// An L octomino: a column of five with a foot of three.
    fn l_shape() -> Shape {
        let tiles = [
            Tile::new(0, 0),
            Tile::new(0, 1),
            Tile::new(0, 2),
            Tile::new(0, 3),
            Tile::new(0, 4),
            Tile::new(1, 4),
            Tile::new(2, 4),
            Tile::new(3, 4),
        ];
        Shape::new(tiles, Color::from_rgb(0xFD, 0x93, 0x01)).unwrap()
    }

    /// Tiles normalized to their bounding box, for comparing placements.
    fn normalized(shape: &Shape) -> HashSet<(i32, i32)> {
        let bb = shape.bounding_box();
        shape
            .tiles()
            .iter()
            .map(|t| (t.x() - bb.min_x, t.y() - bb.min_y))
            .collect()
    }

    #[test]
    fn test_identity_orientation() {
        let mut shape = l_shape();
        Orientation::default().apply(&mut shape);
        assert_eq!(shape, l_shape());
    }

    #[test]
    fn test_quarter_turns() {
        let mut shape = l_shape();
        Orientation {
            quarter_turns: 2,
            ..Orientation::default()
        }
        .apply(&mut shape);
        assert!(shape.is_on_board());
        // Half turn: foot on top, column on the right.
        let expected: HashSet<_> = [(3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (2, 0), (1, 0), (0, 0)]
            .into_iter()
            .collect();
        assert_eq!(normalized(&shape), expected);

        let mut full = l_shape();
        Orientation {
            quarter_turns: 4,
            ..Orientation::default()
        }
        .apply(&mut full);
        assert_eq!(normalized(&full), normalized(&l_shape()));
    }

    #[test]
    fn test_flips() {
        let mut shape = l_shape();
        Orientation {
            flip_horizontal: true,
            ..Orientation::default()
        }
        .apply(&mut shape);
        assert!(shape.is_on_board());
        let expected: HashSet<_> = [(3, 0), (3, 1), (3, 2), (3, 3), (3, 4), (2, 4), (1, 4), (0, 4)]
            .into_iter()
            .collect();
        assert_eq!(normalized(&shape), expected);
    }

    #[test]
    fn test_randomize_stays_on_board() {
        let mut rng = Pcg64::seed_from_u64(0);
        let base = l_shape();
        let mut positions = HashSet::new();
        for _ in 0..200 {
            let shape = randomize(&base, &mut rng);
            assert!(shape.is_on_board());
            assert_eq!(shape.color(), base.color());
            assert_eq!(normalized(&shape).len(), 8);
            positions.insert(shape.bounding_box().min_x);
        }
        // The offset is random, not pinned to the origin.
        assert!(positions.len() > 1);
    }

    #[test]
    fn test_randomize_is_reproducible() {
        let base = l_shape();
        let a = randomize(&base, &mut Pcg64::seed_from_u64(9));
        let b = randomize(&base, &mut Pcg64::seed_from_u64(9));
        assert_eq!(a, b);
    }
}
