//! Terminal rendering and line input.

use std::io::Write;

use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::debug;

use crate::game::{Conclusion, Frontend, TurnState};
use crate::{Board, Coordinates, MoveRejection, Player, Result, parse_move};

/// Where typed lines come from.
pub trait LineSource {
    /// Reads one line after showing `prompt`. `Ok(None)` on end of input.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;
}

impl LineSource for DefaultEditor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.readline(prompt) {
            Ok(line) => {
                if !line.trim().is_empty() {
                    let _ = self.add_history_entry(line.as_str());
                }
                Ok(Some(line))
            }
            Err(ReadlineError::Eof | ReadlineError::Interrupted) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }
}

pub const TUTORIAL: &str = "
        X
    0   1   2
      |   |
  0   |   |
   ___|___|___
      |   |
Y 1   |   |
   ___|___|___
      |   |
  2   |   |
      |   |

To play, enter the Y coordinate first, then the X coordinate. An example is 2 0 for the bottom left spot.
";

/// Prompts the human and prints the game as it goes.
pub struct TerminalFrontend<'a, L: ?Sized, W: ?Sized> {
    lines: &'a mut L,
    out: &'a mut W,
}

impl<'a, L, W> TerminalFrontend<'a, L, W>
where
    L: LineSource + ?Sized,
    W: Write + ?Sized,
{
    pub fn new(lines: &'a mut L, out: &'a mut W) -> Self {
        Self { lines, out }
    }

    pub fn show_tutorial(&mut self) -> Result<()> {
        writeln!(self.out, "{TUTORIAL}")?;
        Ok(())
    }

    fn show_board(&mut self, board: &Board) -> Result<()> {
        writeln!(self.out, "\nCurrent Game Board")?;
        writeln!(self.out, "{board}\n")?;
        Ok(())
    }
}

impl<L, W> Frontend for TerminalFrontend<'_, L, W>
where
    L: LineSource + ?Sized,
    W: Write + ?Sized,
{
    fn request_move(&mut self, _board: &Board) -> Result<Option<Coordinates>> {
        loop {
            let Some(line) = self.lines.read_line("\nYour move (y x): ")? else {
                return Ok(None);
            };
            match parse_move(&line) {
                Ok(coord) => return Ok(Some(coord)),
                Err(e) => {
                    debug!(error = %e, "unreadable move");
                    writeln!(
                        self.out,
                        "Enter two numbers, row then column. Example: 2 0"
                    )?;
                }
            }
        }
    }

    fn move_rejected(&mut self, _coord: Coordinates, _reason: MoveRejection) -> Result<()> {
        writeln!(self.out, "That spot is not allowed. Try again.")?;
        Ok(())
    }

    fn move_played(
        &mut self,
        player: Player,
        coord: Coordinates,
        board: &Board,
        state: TurnState,
    ) -> Result<()> {
        if player == Player::Ai {
            writeln!(self.out, "\nAI's turn.")?;
            writeln!(self.out, "AI plays {coord}.")?;
        }
        self.show_board(board)?;

        match state {
            TurnState::GameOver(Conclusion::Win(winner)) => {
                writeln!(self.out, "Game over. {winner} wins!\n")?
            }
            TurnState::GameOver(Conclusion::Draw) => {
                writeln!(self.out, "Game over. It's a draw!\n")?
            }
            TurnState::AwaitingHuman | TurnState::AwaitingAi => {}
        }
        Ok(())
    }
}
