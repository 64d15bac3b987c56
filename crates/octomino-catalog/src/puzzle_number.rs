//! Validation of user-entered puzzle numbers.

/// Number of puzzles in the shipped catalog, and so the largest valid puzzle number.
pub const MAX_PUZZLE_NUMBER: usize = 62_642;

/// Errors that can occur when parsing a puzzle number.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum PuzzleNumberError {
    /// The input is not a whole number.
    #[display("{input:?} is not a puzzle number")]
    NotANumber {
        /// The rejected input.
        input: String,
    },
    /// The number is not in `1..=max`.
    #[display("puzzle number {number} must be between 1 and {max}")]
    OutOfRange {
        /// The rejected number.
        number: usize,
        /// The largest valid number.
        max: usize,
    },
}

/// Parses a puzzle number typed by the player.
///
/// Empty input means "no specific puzzle" and yields `Ok(None)`.
///
/// # Errors
///
/// Returns [`PuzzleNumberError::NotANumber`] for non-numeric input and
/// [`PuzzleNumberError::OutOfRange`] for numbers outside `1..=max`.
///
/// # Examples
///
/// ```
/// use octomino_catalog::{MAX_PUZZLE_NUMBER, parse_puzzle_number};
///
/// assert_eq!(parse_puzzle_number("", MAX_PUZZLE_NUMBER), Ok(None));
/// assert_eq!(parse_puzzle_number("42", MAX_PUZZLE_NUMBER), Ok(Some(42)));
/// assert!(parse_puzzle_number("0", MAX_PUZZLE_NUMBER).is_err());
/// ```
pub fn parse_puzzle_number(input: &str, max: usize) -> Result<Option<usize>, PuzzleNumberError> {
    let input = input.trim();
    if input.is_empty() {
        return Ok(None);
    }
    let number: usize = input.parse().map_err(|_| PuzzleNumberError::NotANumber {
        input: input.to_owned(),
    })?;
    if !(1..=max).contains(&number) {
        return Err(PuzzleNumberError::OutOfRange { number, max });
    }
    Ok(Some(number))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_puzzle_number() {
        assert_eq!(parse_puzzle_number("  ", MAX_PUZZLE_NUMBER), Ok(None));
        assert_eq!(parse_puzzle_number("1", MAX_PUZZLE_NUMBER), Ok(Some(1)));
        assert_eq!(
            parse_puzzle_number("62642", MAX_PUZZLE_NUMBER),
            Ok(Some(MAX_PUZZLE_NUMBER))
        );
        assert_eq!(
            parse_puzzle_number("62643", MAX_PUZZLE_NUMBER),
            Err(PuzzleNumberError::OutOfRange {
                number: 62_643,
                max: MAX_PUZZLE_NUMBER
            })
        );
        assert!(matches!(
            parse_puzzle_number("-1", MAX_PUZZLE_NUMBER),
            Err(PuzzleNumberError::NotANumber { .. })
        ));
        assert!(matches!(
            parse_puzzle_number("1.5", MAX_PUZZLE_NUMBER),
            Err(PuzzleNumberError::NotANumber { .. })
        ));
    }
}
