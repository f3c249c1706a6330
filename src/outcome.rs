//! Win and draw detection.

use std::fmt;

use crate::board::{Board, Player, WINNING_LINES};

/// State of a board, derived on demand and never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameOutcome {
    InProgress,
    Win(Player),
    Draw,
}

impl GameOutcome {
    pub fn is_terminal(self) -> bool {
        !matches!(self, GameOutcome::InProgress)
    }
}

impl fmt::Display for GameOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameOutcome::InProgress => write!(f, "in progress"),
            GameOutcome::Win(player) => write!(f, "{player} wins!"),
            GameOutcome::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// Owner of the first complete line, in [`WINNING_LINES`] order.
pub fn winner(board: &Board) -> Option<Player> {
    WINNING_LINES.iter().find_map(|[a, b, c]| {
        let first = board.get(*a)?;
        let owner = first.owner()?;
        (board.get(*b) == Some(first) && board.get(*c) == Some(first)).then_some(owner)
    })
}

/// Evaluates any board, live or hypothetical.
///
/// A completed line takes precedence over a full board, so a last move that
/// both fills the board and completes a line is a win.
pub fn evaluate(board: &Board) -> GameOutcome {
    if let Some(player) = winner(board) {
        return GameOutcome::Win(player);
    }
    if board.is_full() {
        GameOutcome::Draw
    } else {
        GameOutcome::InProgress
    }
}
