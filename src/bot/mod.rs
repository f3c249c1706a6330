//! AI move selection, one policy per difficulty tier.

pub mod minimax;

use std::fmt;

use rand::Rng;
use tracing::debug;

use crate::{Board, Coordinates};

/// How the AI picks its moves. Chosen once per game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, clap::ValueEnum)]
pub enum Difficulty {
    /// Always the first empty cell.
    Easy,
    /// A uniformly random empty cell.
    Normal,
    /// Perfect play by exhaustive minimax.
    Hard,
}

impl Difficulty {
    pub const ALL: [Difficulty; 3] = [Difficulty::Easy, Difficulty::Normal, Difficulty::Hard];

    pub fn name(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Normal => "normal",
            Difficulty::Hard => "hard",
        }
    }

    /// Picks the AI's next move without touching `board`.
    ///
    /// The returned cell is always empty; `None` only for a full board.
    pub fn choose_move<R: Rng>(self, board: &Board, rng: &mut R) -> Option<Coordinates> {
        let choice = match self {
            Difficulty::Easy => board.first_empty(),
            Difficulty::Normal => random_move(board, rng),
            Difficulty::Hard => minimax::best_move(board),
        };
        debug!(difficulty = self.name(), ?choice, "ai move selected");
        choice
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Uniform over the empty cells, drawn directly from their list.
fn random_move<R: Rng>(board: &Board, rng: &mut R) -> Option<Coordinates> {
    let moves = board.empty_cells();
    if moves.is_empty() {
        return None;
    }
    let idx = rng.random_range(0..moves.len());
    Some(moves[idx])
}
