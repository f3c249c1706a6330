//! The 3x3 board, its cells and the table of winning lines.

use std::fmt;

use smallvec::SmallVec;

use crate::coord::{BOARD_SIZE, Coordinates};

/// The eight lines that win the game, scanned rows top-to-bottom, then
/// columns left-to-right, then the two diagonals.
pub const WINNING_LINES: [[Coordinates; 3]; 8] = [
    // rows
    [Coordinates::new(0, 0), Coordinates::new(0, 1), Coordinates::new(0, 2)],
    [Coordinates::new(1, 0), Coordinates::new(1, 1), Coordinates::new(1, 2)],
    [Coordinates::new(2, 0), Coordinates::new(2, 1), Coordinates::new(2, 2)],
    // columns
    [Coordinates::new(0, 0), Coordinates::new(1, 0), Coordinates::new(2, 0)],
    [Coordinates::new(0, 1), Coordinates::new(1, 1), Coordinates::new(2, 1)],
    [Coordinates::new(0, 2), Coordinates::new(1, 2), Coordinates::new(2, 2)],
    // diagonals
    [Coordinates::new(0, 0), Coordinates::new(1, 1), Coordinates::new(2, 2)],
    [Coordinates::new(0, 2), Coordinates::new(1, 1), Coordinates::new(2, 0)],
];

/// Empty cells of a board; never more than nine, so kept on the stack.
pub type EmptyCells = SmallVec<[Coordinates; 9]>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Human,
    Ai,
}

impl Player {
    pub fn opponent(self) -> Player {
        match self {
            Player::Human => Player::Ai,
            Player::Ai => Player::Human,
        }
    }

    pub fn cell(self) -> Cell {
        match self {
            Player::Human => Cell::Human,
            Player::Ai => Cell::Ai,
        }
    }

    /// Mark drawn on the board for this player.
    pub fn mark(self) -> char {
        match self {
            Player::Human => 'X',
            Player::Ai => 'O',
        }
    }
}

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::Human => write!(f, "Human"),
            Player::Ai => write!(f, "AI"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Human,
    Ai,
}

impl Cell {
    pub fn owner(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Human => Some(Player::Human),
            Cell::Ai => Some(Player::Ai),
        }
    }

    pub fn is_empty(self) -> bool {
        self == Cell::Empty
    }

    fn to_char(self) -> char {
        self.owner().map_or(' ', Player::mark)
    }
}

/// Why a coordinate cannot be played.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    OutOfRange,
    Occupied,
}

impl fmt::Display for MoveRejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveRejection::OutOfRange => write!(f, "outside the board"),
            MoveRejection::Occupied => write!(f, "already taken"),
        }
    }
}

/// A fixed 3x3 grid of cells.
///
/// The board is `Copy`: the search explores hypothetical futures on its own
/// copy and never touches the board a game is being played on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Board {
    cells: [[Cell; BOARD_SIZE]; BOARD_SIZE],
}

impl Board {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from rows of cells. Handy for setting up positions.
    pub fn from_rows(cells: [[Cell; BOARD_SIZE]; BOARD_SIZE]) -> Self {
        Self { cells }
    }

    /// Returns the cell at `coord`, or `None` if it is off the board.
    pub fn get(&self, coord: Coordinates) -> Option<Cell> {
        coord
            .is_valid()
            .then(|| self.cells[coord.row()][coord.col()])
    }

    /// Writes `player` into `coord`.
    ///
    /// The caller must have checked [`Board::is_playable`] first; placing on
    /// an occupied or off-board cell is a bug and panics in debug builds.
    pub fn place(&mut self, coord: Coordinates, player: Player) {
        debug_assert!(
            self.is_playable(coord),
            "place on unplayable cell {coord}"
        );
        self.cells[coord.row()][coord.col()] = player.cell();
    }

    /// Empties `coord` again, undoing a hypothetical [`Board::place`].
    pub fn clear(&mut self, coord: Coordinates) {
        self.cells[coord.row()][coord.col()] = Cell::Empty;
    }

    pub fn check_playable(&self, coord: Coordinates) -> Result<(), MoveRejection> {
        match self.get(coord) {
            None => Err(MoveRejection::OutOfRange),
            Some(Cell::Empty) => Ok(()),
            Some(_) => Err(MoveRejection::Occupied),
        }
    }

    /// True iff `coord` is on the board and its cell is empty.
    pub fn is_playable(&self, coord: Coordinates) -> bool {
        self.check_playable(coord).is_ok()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|cell| !cell.is_empty())
    }

    /// First empty cell in row-major order.
    pub fn first_empty(&self) -> Option<Coordinates> {
        Coordinates::all().find(|&coord| self.is_playable(coord))
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> EmptyCells {
        Coordinates::all()
            .filter(|&coord| self.is_playable(coord))
            .collect()
    }

    pub fn occupied_count(&self) -> usize {
        self.cells
            .iter()
            .flatten()
            .filter(|cell| !cell.is_empty())
            .count()
    }

    pub fn rows(&self) -> &[[Cell; BOARD_SIZE]; BOARD_SIZE] {
        &self.cells
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            writeln!(f, "   |   |   ")?;
            writeln!(
                f,
                " {} | {} | {} ",
                row[0].to_char(),
                row[1].to_char(),
                row[2].to_char()
            )?;
            if i < BOARD_SIZE - 1 {
                writeln!(f, "___|___|___")?;
            }
        }
        write!(f, "   |   |   ")
    }
}
