//! Full games driven through `Game::run` with a scripted human.

use std::collections::VecDeque;

use rand::SeedableRng;
use rand::rngs::StdRng;
use tictactoe::{
    Board, Conclusion, Coordinates, Difficulty, Frontend, Game, MoveRejection, Player, Result,
    TurnState,
};

#[derive(Default)]
struct ScriptedHuman {
    moves: VecDeque<Coordinates>,
    rejected: Vec<(Coordinates, MoveRejection)>,
    played: Vec<(Player, Coordinates, TurnState)>,
}

impl ScriptedHuman {
    fn new(moves: &[(usize, usize)]) -> Self {
        Self {
            moves: moves.iter().map(|&(r, c)| Coordinates::new(r, c)).collect(),
            ..Self::default()
        }
    }

    fn players(&self) -> Vec<Player> {
        self.played.iter().map(|(player, _, _)| *player).collect()
    }
}

impl Frontend for ScriptedHuman {
    fn request_move(&mut self, _board: &Board) -> Result<Option<Coordinates>> {
        Ok(self.moves.pop_front())
    }

    fn move_rejected(&mut self, coord: Coordinates, reason: MoveRejection) -> Result<()> {
        self.rejected.push((coord, reason));
        Ok(())
    }

    fn move_played(
        &mut self,
        player: Player,
        coord: Coordinates,
        board: &Board,
        state: TurnState,
    ) -> Result<()> {
        assert!(board.get(coord).and_then(|c| c.owner()) == Some(player));
        self.played.push((player, coord, state));
        Ok(())
    }
}

#[test]
fn test_run_easy_game_to_human_win() {
    let mut game = Game::new(Difficulty::Easy);
    let mut human = ScriptedHuman::new(&[(0, 2), (1, 2), (2, 2)]);
    let mut rng = StdRng::seed_from_u64(0);

    let conclusion = game.run(&mut human, &mut rng).unwrap();

    assert_eq!(conclusion, Some(Conclusion::Win(Player::Human)));
    assert_eq!(
        human.players(),
        vec![Player::Human, Player::Ai, Player::Human, Player::Ai, Player::Human]
    );
    assert_eq!(game.board().occupied_count(), 5);
}

#[test]
fn test_run_reprompts_after_invalid_moves() {
    let mut game = Game::new(Difficulty::Easy);
    let mut human = ScriptedHuman::new(&[(3, 0), (1, 1), (1, 1), (0, 0), (2, 2), (2, 1), (2, 0)]);
    let mut rng = StdRng::seed_from_u64(0);

    let conclusion = game.run(&mut human, &mut rng).unwrap();

    assert_eq!(
        human.rejected,
        vec![
            (Coordinates::new(3, 0), MoveRejection::OutOfRange),
            (Coordinates::new(1, 1), MoveRejection::Occupied),
            (Coordinates::new(0, 0), MoveRejection::Occupied),
        ]
    );
    // human (1,1) (2,2) (2,1) against AI (0,0) (0,1) (0,2): the top row wins
    // before the last scripted move is needed
    assert_eq!(conclusion, Some(Conclusion::Win(Player::Ai)));
    assert_eq!(human.played.len(), 6);
}

#[test]
fn test_run_returns_none_when_human_leaves() {
    let mut game = Game::new(Difficulty::Normal);
    let mut human = ScriptedHuman::new(&[(1, 1)]);
    let mut rng = StdRng::seed_from_u64(11);

    let conclusion = game.run(&mut human, &mut rng).unwrap();

    assert_eq!(conclusion, None);
    assert_eq!(game.state(), TurnState::AwaitingHuman);
    assert_eq!(game.board().occupied_count(), 2);
}

#[test]
fn test_run_normal_game_plays_to_the_end() {
    let mut game = Game::new(Difficulty::Normal);
    // more than enough moves; occupied picks are rejected and skipped
    let all: Vec<(usize, usize)> = (0..3).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
    let mut script = all.clone();
    script.extend(all.iter().copied());
    script.extend(all.iter().copied());
    let mut human = ScriptedHuman::new(&script);
    let mut rng = StdRng::seed_from_u64(99);

    let conclusion = game.run(&mut human, &mut rng).unwrap();

    assert!(conclusion.is_some());
    assert!(game.is_over());
    for window in human.players().windows(2) {
        assert_ne!(window[0], window[1], "players must alternate");
    }
}

#[test]
fn test_run_hard_game_draws_with_good_play() {
    let mut game = Game::new(Difficulty::Hard);
    // centre, then blocks: AI corner (0,0), human (2,2)...
    let mut human = ScriptedHuman::new(&[(1, 1), (2, 2), (0, 1), (2, 0), (1, 2)]);
    let mut rng = StdRng::seed_from_u64(0);

    let conclusion = game.run(&mut human, &mut rng).unwrap();

    assert_ne!(conclusion, Some(Conclusion::Win(Player::Human)));
    assert!(conclusion.is_some());
}

#[test]
fn test_run_on_finished_game_returns_conclusion() {
    let mut game = Game::new(Difficulty::Easy);
    let mut rng = StdRng::seed_from_u64(0);
    game.run(&mut ScriptedHuman::new(&[(0, 2), (1, 2), (2, 2)]), &mut rng)
        .unwrap();

    let mut idle = ScriptedHuman::new(&[]);
    let again = game.run(&mut idle, &mut rng).unwrap();

    assert_eq!(again, Some(Conclusion::Win(Player::Human)));
    assert!(idle.played.is_empty());
}
