//! Shape colors.

use std::{
    fmt::{self, Display},
    str::FromStr,
};

/// An opaque RGB color, printed and parsed as `#RRGGBB`.
///
/// # Examples
///
/// ```
/// use octomino_core::Color;
///
/// let color: Color = "#fd9301".parse().unwrap();
/// assert_eq!(color, Color::from_rgb(0xFD, 0x93, 0x01));
/// assert_eq!(color.to_string(), "#FD9301");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

/// The eight colors handed out to the shapes of a puzzle.
pub const PALETTE: [Color; 8] = [
    Color::from_rgb(0xFD, 0x93, 0x01),
    Color::from_rgb(0xFF, 0xFF, 0x00),
    Color::from_rgb(0x23, 0xFA, 0x00),
    Color::from_rgb(0xFD, 0x40, 0xFF),
    Color::from_rgb(0x27, 0xFD, 0xFF),
    Color::from_rgb(0x0A, 0x32, 0xFF),
    Color::from_rgb(0xFD, 0x26, 0x00),
    Color::from_rgb(0x70, 0x30, 0xA0),
];

impl Color {
    /// Creates a color from its red, green and blue components.
    #[must_use]
    pub const fn from_rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 16) | ((g as u32) << 8) | b as u32)
    }

    /// Returns the `(r, g, b)` components.
    #[must_use]
    #[expect(clippy::cast_possible_truncation)]
    pub const fn rgb(self) -> (u8, u8, u8) {
        ((self.0 >> 16) as u8, (self.0 >> 8) as u8, self.0 as u8)
    }
}

impl Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:06X}", self.0)
    }
}

/// Error returned when parsing a [`Color`] from a string fails.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("invalid color {input:?}: expected #RRGGBB")]
pub struct ColorParseError {
    input: String,
}

impl FromStr for Color {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ColorParseError {
            input: s.to_owned(),
        };
        let hex = s.strip_prefix('#').ok_or_else(err)?;
        if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
            return Err(err());
        }
        u32::from_str_radix(hex, 16).map(Self).map_err(|_| err())
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_palette_is_distinct() {
        let distinct: HashSet<_> = PALETTE.iter().collect();
        assert_eq!(distinct.len(), PALETTE.len());
        assert_eq!(PALETTE[0].to_string(), "#FD9301");
        assert_eq!(PALETTE[7].to_string(), "#7030A0");
    }

    #[test]
    fn test_parse_and_display() {
        for color in PALETTE {
            assert_eq!(color.to_string().parse::<Color>(), Ok(color));
        }
        assert_eq!(Color::from_rgb(1, 2, 3).rgb(), (1, 2, 3));
    }

    #[test]
    fn test_parse_rejects_malformed_input() {
        assert!("FD9301".parse::<Color>().is_err());
        assert!("#FD930".parse::<Color>().is_err());
        assert!("#FD93011".parse::<Color>().is_err());
        assert!("#GG9301".parse::<Color>().is_err());
        assert!("#+D9301".parse::<Color>().is_err());
    }
}
