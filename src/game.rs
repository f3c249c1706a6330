//! Turn controller: alternates human and AI moves until the game ends.

use rand::Rng;
use tracing::{debug, info, instrument};

use crate::board::MoveRejection;
use crate::{Board, Coordinates, Difficulty, Error, GameOutcome, Player, Result, outcome};

/// How a finished game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Conclusion {
    Win(Player),
    Draw,
}

impl From<Conclusion> for GameOutcome {
    fn from(conclusion: Conclusion) -> Self {
        match conclusion {
            Conclusion::Win(player) => GameOutcome::Win(player),
            Conclusion::Draw => GameOutcome::Draw,
        }
    }
}

/// Whose move it is, or how the game ended.
///
/// Play always starts with [`TurnState::AwaitingHuman`], and each accepted
/// move either ends the game or hands the turn to the other side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TurnState {
    AwaitingHuman,
    AwaitingAi,
    GameOver(Conclusion),
}

impl TurnState {
    /// Side to move, if the game is still going.
    pub fn to_move(self) -> Option<Player> {
        match self {
            TurnState::AwaitingHuman => Some(Player::Human),
            TurnState::AwaitingAi => Some(Player::Ai),
            TurnState::GameOver(_) => None,
        }
    }

    fn awaiting(player: Player) -> Self {
        match player {
            Player::Human => TurnState::AwaitingHuman,
            Player::Ai => TurnState::AwaitingAi,
        }
    }
}

/// The menu/input side of the game.
///
/// It supplies the human's coordinates and owns all rendering; the default
/// notification methods do nothing.
pub trait Frontend {
    /// Asks the human for a move. `Ok(None)` abandons the game.
    fn request_move(&mut self, board: &Board) -> Result<Option<Coordinates>>;

    /// The coordinate from the last `request_move` was refused.
    fn move_rejected(&mut self, _coord: Coordinates, _reason: MoveRejection) -> Result<()> {
        Ok(())
    }

    /// A move was placed; `state` is the state after it.
    fn move_played(
        &mut self,
        _player: Player,
        _coord: Coordinates,
        _board: &Board,
        _state: TurnState,
    ) -> Result<()> {
        Ok(())
    }
}

/// One game: the live board, the AI tier and the turn state.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    difficulty: Difficulty,
    state: TurnState,
}

impl Game {
    pub fn new(difficulty: Difficulty) -> Self {
        info!(%difficulty, "new game");
        Self {
            board: Board::new(),
            difficulty,
            state: TurnState::AwaitingHuman,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn state(&self) -> TurnState {
        self.state
    }

    pub fn outcome(&self) -> GameOutcome {
        outcome::evaluate(&self.board)
    }

    pub fn is_over(&self) -> bool {
        matches!(self.state, TurnState::GameOver(_))
    }

    /// Plays the human's move. A rejected move leaves the game unchanged.
    pub fn play_human(&mut self, coord: Coordinates) -> Result<TurnState> {
        self.expect_turn(Player::Human)?;
        self.board
            .check_playable(coord)
            .map_err(|reason| Error::RejectedMove { coord, reason })?;
        Ok(self.apply(coord, Player::Human))
    }

    /// Lets the AI choose and play its move.
    pub fn play_ai<R: Rng>(&mut self, rng: &mut R) -> Result<(Coordinates, TurnState)> {
        self.expect_turn(Player::Ai)?;
        // a full board ends the game, so the AI always has an empty cell here
        let coord = self
            .difficulty
            .choose_move(&self.board, rng)
            .ok_or(Error::GameOver)?;
        Ok((coord, self.apply(coord, Player::Ai)))
    }

    /// Drives the game to its end, re-prompting the human after every
    /// rejected move. Returns `None` if the frontend abandons the game.
    #[instrument(skip_all, fields(difficulty = %self.difficulty))]
    pub fn run<F, R>(&mut self, frontend: &mut F, rng: &mut R) -> Result<Option<Conclusion>>
    where
        F: Frontend + ?Sized,
        R: Rng,
    {
        loop {
            match self.state {
                TurnState::GameOver(conclusion) => return Ok(Some(conclusion)),
                TurnState::AwaitingHuman => {
                    let Some(coord) = frontend.request_move(&self.board)? else {
                        info!("game abandoned");
                        return Ok(None);
                    };
                    match self.play_human(coord) {
                        Ok(state) => {
                            frontend.move_played(Player::Human, coord, &self.board, state)?
                        }
                        Err(Error::RejectedMove { coord, reason }) => {
                            debug!(%coord, %reason, "move rejected");
                            frontend.move_rejected(coord, reason)?;
                        }
                        Err(e) => return Err(e),
                    }
                }
                TurnState::AwaitingAi => {
                    let (coord, state) = self.play_ai(rng)?;
                    frontend.move_played(Player::Ai, coord, &self.board, state)?;
                }
            }
        }
    }

    fn expect_turn(&self, player: Player) -> Result<()> {
        match self.state.to_move() {
            None => Err(Error::GameOver),
            Some(to_move) if to_move == player => Ok(()),
            Some(_) => Err(Error::NotYourTurn { player }),
        }
    }

    fn apply(&mut self, coord: Coordinates, player: Player) -> TurnState {
        self.board.place(coord, player);
        debug!(%player, %coord, "move played");

        self.state = match outcome::evaluate(&self.board) {
            GameOutcome::Win(winner) => TurnState::GameOver(Conclusion::Win(winner)),
            GameOutcome::Draw => TurnState::GameOver(Conclusion::Draw),
            GameOutcome::InProgress => TurnState::awaiting(player.opponent()),
        };
        if let TurnState::GameOver(conclusion) = self.state {
            info!(?conclusion, "game over");
        }
        self.state
    }
}
