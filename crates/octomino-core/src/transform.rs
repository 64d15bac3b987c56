//! Player moves applied to a shape.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// A one-cell move of the active shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Direction {
    /// Towards row 0.
    Up,
    /// Towards row 7.
    Down,
    /// Towards column 0.
    Left,
    /// Towards column 7.
    Right,
}

impl Direction {
    /// All directions.
    pub const ALL: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the `(dx, dy)` offset of a one-cell move.
    #[must_use]
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Self::Up => (0, -1),
            Self::Down => (0, 1),
            Self::Left => (-1, 0),
            Self::Right => (1, 0),
        }
    }

    /// Returns the name used on the query surface (`up`, `down`, `left`, `right`).
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Left => "left",
            Self::Right => "right",
        }
    }
}

impl Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when a [`Direction`] name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("unknown direction {name:?}: expected up, down, left or right")]
pub struct DirectionParseError {
    name: String,
}

impl FromStr for Direction {
    type Err = DirectionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|dir| dir.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| DirectionParseError { name: s.to_owned() })
    }
}

/// A quarter turn around the shape's centroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum Rotation {
    /// `(x, y) -> (-y, x)` relative to the centroid.
    Clockwise,
    /// `(x, y) -> (y, -x)` relative to the centroid.
    CounterClockwise,
}

impl Rotation {
    /// Returns the rotation that undoes this one.
    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Self::Clockwise => Self::CounterClockwise,
            Self::CounterClockwise => Self::Clockwise,
        }
    }
}

impl From<bool> for Rotation {
    /// `true` means clockwise.
    fn from(clockwise: bool) -> Self {
        if clockwise {
            Self::Clockwise
        } else {
            Self::CounterClockwise
        }
    }
}

/// A mirror through the shape's centroid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::IsVariant)]
pub enum FlipAxis {
    /// Mirrors columns; rows are unchanged.
    Horizontal,
    /// Mirrors rows; columns are unchanged.
    Vertical,
}

impl From<bool> for FlipAxis {
    /// `true` means horizontal.
    fn from(horizontal: bool) -> Self {
        if horizontal {
            Self::Horizontal
        } else {
            Self::Vertical
        }
    }
}
