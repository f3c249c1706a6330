use thiserror::Error;

use crate::board::{MoveRejection, Player};
use crate::coord::Coordinates;

#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("cannot play {coord}: cell is {reason}")]
    RejectedMove {
        coord: Coordinates,
        reason: MoveRejection,
    },

    #[error("it is not {player}'s turn")]
    NotYourTurn { player: Player },

    #[error("game already over")]
    GameOver,

    #[error("invalid move '{input}': {reason}")]
    MalformedMove { input: String, reason: String },

    #[error("terminal input failed: {0}")]
    Readline(#[from] rustyline::error::ReadlineError),

    #[error("failed to write to terminal: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
