//! Tic-tac-toe against an AI with three difficulty tiers.
//!
//! The human always plays `X` and moves first. The AI plays `O` and picks its
//! moves according to the [`Difficulty`] chosen for the game: the first empty
//! cell, a random empty cell, or a perfect move found by exhaustive minimax.

pub mod board;
pub mod bot;
pub mod cli;
pub mod coord;
pub mod error;
pub mod game;
pub mod outcome;

pub use board::{Board, Cell, MoveRejection, Player, WINNING_LINES};
pub use bot::Difficulty;
pub use coord::{Coordinates, parse_move};
pub use error::{Error, Result};
pub use game::{Conclusion, Frontend, Game, TurnState};
pub use outcome::GameOutcome;
