use std::fmt;

use crate::Error;

/// Number of rows and columns on the board.
pub const BOARD_SIZE: usize = 3;

/// A board position, `(0, 0)` being the top left cell.
///
/// A coordinate is not required to lie on the board: out-of-range values are
/// representable so that a human's entry can be rejected instead of clamped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Coordinates {
    row: usize,
    col: usize,
}

impl Coordinates {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Returns true if both components are within `[0, BOARD_SIZE)`.
    pub fn is_valid(&self) -> bool {
        self.row < BOARD_SIZE && self.col < BOARD_SIZE
    }

    /// Row-major index of an on-board coordinate.
    pub fn to_index(&self) -> usize {
        self.row * BOARD_SIZE + self.col
    }

    pub fn from_index(idx: usize) -> Self {
        Self::new(idx / BOARD_SIZE, idx % BOARD_SIZE)
    }

    /// Every on-board coordinate in row-major order.
    pub fn all() -> impl Iterator<Item = Coordinates> {
        (0..BOARD_SIZE * BOARD_SIZE).map(Coordinates::from_index)
    }
}

impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.row, self.col)
    }
}

/// Parses a move typed as two integers, row first: `"2 0"`, `"2,0"`.
pub fn parse_move(input: &str) -> Result<Coordinates, Error> {
    let malformed = |reason: &str| Error::MalformedMove {
        input: input.to_string(),
        reason: reason.to_string(),
    };

    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|s| !s.is_empty())
        .collect();

    match parts.as_slice() {
        [row, col] => {
            let row = row
                .parse::<usize>()
                .map_err(|_| malformed("row must be a non-negative integer"))?;
            let col = col
                .parse::<usize>()
                .map_err(|_| malformed("column must be a non-negative integer"))?;
            Ok(Coordinates::new(row, col))
        }
        _ => Err(malformed("expected two numbers: row then column")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trip_is_row_major() {
        assert_eq!(Coordinates::new(0, 0).to_index(), 0);
        assert_eq!(Coordinates::new(1, 2).to_index(), 5);
        assert_eq!(Coordinates::from_index(7), Coordinates::new(2, 1));
    }

    #[test]
    fn test_all_is_row_major() {
        let all: Vec<_> = Coordinates::all().collect();
        assert_eq!(all.len(), 9);
        assert_eq!(all[0], Coordinates::new(0, 0));
        assert_eq!(all[3], Coordinates::new(1, 0));
        assert_eq!(all[8], Coordinates::new(2, 2));
    }

    #[test]
    fn test_out_of_range_is_not_valid() {
        assert!(Coordinates::new(2, 2).is_valid());
        assert!(!Coordinates::new(3, 0).is_valid());
        assert!(!Coordinates::new(0, 3).is_valid());
    }

    #[test]
    fn test_parse_move_accepts_spaces_and_commas() {
        assert_eq!(parse_move("2 0").unwrap(), Coordinates::new(2, 0));
        assert_eq!(parse_move("  1,   2 ").unwrap(), Coordinates::new(1, 2));
        assert_eq!(parse_move("1,1").unwrap(), Coordinates::new(1, 1));
    }

    #[test]
    fn test_parse_move_keeps_out_of_range_values() {
        // Range is the board's concern, not the parser's
        assert_eq!(parse_move("5 7").unwrap(), Coordinates::new(5, 7));
    }

    #[test]
    fn test_parse_move_rejects_malformed_input() {
        for input in ["", "1", "1 2 3", "a b", "-1 0", "1.5 2"] {
            assert!(
                matches!(parse_move(input), Err(Error::MalformedMove { .. })),
                "'{input}' must be rejected"
            );
        }
    }
}
