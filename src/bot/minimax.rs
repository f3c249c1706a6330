use crate::{Board, Coordinates, GameOutcome, Player, outcome};
use std::cmp;
use tracing::debug;

pub const WIN_SCORE: i32 = 10;

pub const LOSE_SCORE: i32 = -WIN_SCORE;

const INFINITY: i32 = 100;

/// Exhaustive minimax value of `board` from the AI's point of view.
///
/// Terminal boards score `WIN_SCORE - depth` for an AI win,
/// `LOSE_SCORE + depth` for a human win and 0 for a draw, so quicker wins
/// and slower losses are preferred. `maximizing` says whether the AI is the
/// side to move.
///
/// Every hypothetical placement is undone before the next one is tried, so
/// the board is left exactly as it was given.
pub fn score(board: &mut Board, depth: i32, maximizing: bool) -> i32 {
    match outcome::evaluate(board) {
        GameOutcome::Win(Player::Ai) => return WIN_SCORE - depth,
        GameOutcome::Win(Player::Human) => return LOSE_SCORE + depth,
        GameOutcome::Draw => return 0,
        GameOutcome::InProgress => {}
    }

    let moves = board.empty_cells();

    if maximizing {
        let mut best_score = -INFINITY;

        for coord in moves {
            board.place(coord, Player::Ai);

            let child = score(board, depth + 1, false);

            board.clear(coord);

            best_score = cmp::max(best_score, child);
        }
        best_score
    } else {
        let mut worst_score = INFINITY;

        for coord in moves {
            board.place(coord, Player::Human);

            let child = score(board, depth + 1, true);

            board.clear(coord);

            worst_score = cmp::min(worst_score, child);
        }
        worst_score
    }
}

/// Best move for the AI. Ties keep the row-major first cell.
pub fn best_move(board: &Board) -> Option<Coordinates> {
    best_move_for(board, Player::Ai).map(|(coord, _)| coord)
}

/// Best move for `player`, searched on a copy of `board`.
///
/// The AI maximizes and the human minimizes the AI-centric [`score`]; only a
/// strictly better score replaces the current choice. Returns `None` on a
/// full board.
pub fn best_move_for(board: &Board, player: Player) -> Option<(Coordinates, i32)> {
    let mut scratch = *board;
    let mut best: Option<(Coordinates, i32)> = None;

    for coord in board.empty_cells() {
        scratch.place(coord, player);

        // the opponent moves next
        let score = score(&mut scratch, 0, player == Player::Human);

        scratch.clear(coord);

        debug!(%coord, score, %player, "minimax candidate");

        let improves = match best {
            None => true,
            Some((_, best_score)) => match player {
                Player::Ai => score > best_score,
                Player::Human => score < best_score,
            },
        };
        if improves {
            best = Some((coord, score));
        }
    }

    best
}
