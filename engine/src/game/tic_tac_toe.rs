use tracing::{debug, info, instrument};

use crate::game::{
    rules, Board, BoardCell, Cell, GameError, GameResult, GridIndex, MoveSet, Outcome, Side,
    Sign,
};

/// Picks the computer's reply.
#[cfg_attr(test, mockall::automock)]
pub trait Opponent {
    /// Returns the cell the computer wants to occupy, or [`None`] when there is
    /// nothing left to choose from.
    fn choose_move(&self, human: &MoveSet, computer: &MoveSet) -> Option<Cell>;
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GameConfig {
    /// Cell the computer opens with when it moves first.
    /// [`None`] asks the [`Opponent`] instead.
    pub opening_move: Option<Cell>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            opening_move: Some(Cell::from_raw(0)),
        }
    }
}

/// State handed back to the front-end after every call.
#[derive(Clone, Debug, PartialEq)]
pub struct TurnReport {
    pub board: Board,
    pub outcome: Outcome,
    pub computer_move: Option<Cell>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Signs {
    human: Sign,
    computer: Sign,
}

/// A single game between a human and the computer.
#[derive(Clone, Debug)]
pub struct TicTacToe<O> {
    opponent: O,
    config: GameConfig,
    signs: Option<Signs>,
    human: MoveSet,
    computer: MoveSet,
}

impl<O: Opponent> TicTacToe<O> {
    pub fn new(opponent: O) -> Self {
        Self::with_config(opponent, GameConfig::default())
    }

    pub fn with_config(opponent: O, config: GameConfig) -> Self {
        Self {
            opponent,
            config,
            signs: None,
            human: MoveSet::new(),
            computer: MoveSet::new(),
        }
    }

    /// Starts a new game with the human playing `human_sign`.
    /// If the computer got [`Sign::FIRST`] it makes the opening move right away.
    #[instrument(skip(self))]
    pub fn start(&mut self, human_sign: Sign) -> GameResult<TurnReport> {
        let signs = Signs {
            human: human_sign,
            computer: human_sign.opposite(),
        };
        let human = MoveSet::new();
        let mut computer = MoveSet::new();

        let mut computer_move = None;
        if signs.computer == Sign::FIRST {
            let cell = match self.config.opening_move {
                Some(cell) => cell,
                None => self
                    .opponent
                    .choose_move(&human, &computer)
                    .ok_or(GameError::NoAvailableMoves)?,
            };
            rules::record_move(&mut computer, &human, cell)?;
            debug!(%cell, "computer opened the game");
            computer_move = Some(cell);
        }

        self.signs = Some(signs);
        self.human = human;
        self.computer = computer;
        Ok(self.report(computer_move))
    }

    /// Makes the human's move at `cell` and, unless that ends the game,
    /// the computer's reply. On error the game is left untouched.
    #[instrument(skip(self))]
    pub fn play(&mut self, cell: Cell) -> GameResult<TurnReport> {
        if self.signs.is_none() {
            return Err(GameError::GameNotStarted);
        }

        let mut human = self.human;
        let mut computer = self.computer;
        rules::record_move(&mut human, &computer, cell)?;
        debug!(%cell, "human moved");

        let computer_move = if rules::is_winning(&human) || rules::is_over(&human, &computer) {
            None
        } else {
            let reply = self
                .opponent
                .choose_move(&human, &computer)
                .ok_or(GameError::NoAvailableMoves)?;
            rules::record_move(&mut computer, &human, reply)?;
            debug!(cell = %reply, "computer replied");
            Some(reply)
        };

        self.human = human;
        self.computer = computer;

        let report = self.report(computer_move);
        if report.outcome.is_finished() {
            info!(outcome = ?report.outcome, "game finished");
        }
        Ok(report)
    }

    /// Drops the current game. [`TicTacToe::start`] has to be called again.
    pub fn reset(&mut self) {
        self.signs = None;
        self.human = MoveSet::new();
        self.computer = MoveSet::new();
    }

    pub fn is_started(&self) -> bool {
        self.signs.is_some()
    }

    pub fn outcome(&self) -> Outcome {
        rules::outcome(&self.human, &self.computer)
    }

    pub fn human_moves(&self) -> &MoveSet {
        &self.human
    }

    pub fn computer_moves(&self) -> &MoveSet {
        &self.computer
    }

    pub fn available_moves(&self) -> MoveSet {
        rules::available_moves(&self.human, &self.computer)
    }

    /// Returns the side occupying `cell`.
    pub fn occupant(&self, cell: Cell) -> Option<Side> {
        if self.human.contains(cell) {
            Some(Side::Human)
        } else if self.computer.contains(cell) {
            Some(Side::Computer)
        } else {
            None
        }
    }

    /// Returns the sign `side` plays with, if the game is started.
    pub fn sign_of(&self, side: Side) -> Option<Sign> {
        self.signs.map(|signs| match side {
            Side::Human => signs.human,
            Side::Computer => signs.computer,
        })
    }

    pub fn board(&self) -> Board {
        let mut board = Board::default();
        for (side, moves) in [(Side::Human, &self.human), (Side::Computer, &self.computer)] {
            let sign = self.sign_of(side);
            for cell in moves {
                board[GridIndex::from(cell)] = BoardCell(sign);
            }
        }
        board
    }

    fn report(&self, computer_move: Option<Cell>) -> TurnReport {
        TurnReport {
            board: self.board(),
            outcome: self.outcome(),
            computer_move,
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn cell(index: usize) -> Cell {
        Cell::new(index).unwrap()
    }

    fn set(cells: &[usize]) -> MoveSet {
        cells.iter().map(|&i| cell(i)).collect()
    }

    fn replying_with(replies: &[usize]) -> MockOpponent {
        let mut opponent = MockOpponent::new();
        let mut replies: Vec<_> = replies.iter().rev().map(|&i| cell(i)).collect();
        opponent
            .expect_choose_move()
            .times(replies.len())
            .returning(move |_, _| replies.pop());
        opponent
    }

    #[test]
    fn test_play_before_start() {
        let mut opponent = MockOpponent::new();
        opponent.expect_choose_move().never();
        let mut game = TicTacToe::new(opponent);

        assert_eq!(game.play(cell(4)), Err(GameError::GameNotStarted));
        assert!(game.human_moves().is_empty());
    }

    #[test]
    fn test_start_as_first_player() {
        let mut opponent = MockOpponent::new();
        opponent.expect_choose_move().never();
        let mut game = TicTacToe::new(opponent);

        let report = game.start(Sign::X).unwrap();
        assert_eq!(report.computer_move, None);
        assert_eq!(report.outcome, Outcome::Ongoing);
        assert_eq!(report.board, Board::default());
        assert_eq!(game.sign_of(Side::Computer), Some(Sign::O));
    }

    #[test]
    fn test_start_as_second_player_uses_opening_move() {
        let mut opponent = MockOpponent::new();
        opponent.expect_choose_move().never();
        let mut game = TicTacToe::new(opponent);

        let report = game.start(Sign::O).unwrap();
        assert_eq!(report.computer_move, Some(cell(0)));
        assert_eq!(*report.board[GridIndex::new(0, 0)], Some(Sign::X));
        assert_eq!(game.occupant(cell(0)), Some(Side::Computer));
    }

    #[test]
    fn test_start_without_opening_move_asks_opponent() {
        let mut opponent = MockOpponent::new();
        opponent
            .expect_choose_move()
            .withf(|human, computer| human.is_empty() && computer.is_empty())
            .times(1)
            .returning(|_, _| Some(Cell::from_raw(4)));
        let config = GameConfig { opening_move: None };
        let mut game = TicTacToe::with_config(opponent, config);

        let report = game.start(Sign::O).unwrap();
        assert_eq!(report.computer_move, Some(cell(4)));
        assert_eq!(*game.computer_moves(), set(&[4]));
    }

    #[test]
    fn test_play_records_both_moves() {
        let mut game = TicTacToe::new(replying_with(&[4]));
        game.start(Sign::X).unwrap();

        let report = game.play(cell(0)).unwrap();
        assert_eq!(report.computer_move, Some(cell(4)));
        assert_eq!(report.outcome, Outcome::Ongoing);
        assert_eq!(*game.human_moves(), set(&[0]));
        assert_eq!(*game.computer_moves(), set(&[4]));
        assert_eq!(*report.board[GridIndex::new(0, 0)], Some(Sign::X));
        assert_eq!(*report.board[GridIndex::new(1, 1)], Some(Sign::O));
        assert_eq!(game.available_moves().len(), 7);
    }

    #[test]
    fn test_human_win_skips_computer_reply() {
        // opponent never blocks the main diagonal
        let mut game = TicTacToe::new(replying_with(&[1, 2]));
        game.start(Sign::X).unwrap();

        game.play(cell(0)).unwrap();
        game.play(cell(4)).unwrap();
        let report = game.play(cell(8)).unwrap();

        assert_eq!(report.outcome, Outcome::HumanWins);
        assert_eq!(report.computer_move, None);
        assert_eq!(*game.computer_moves(), set(&[1, 2]));
    }

    #[test]
    fn test_computer_win() {
        let mut game = TicTacToe::new(replying_with(&[0, 1, 2]));
        game.start(Sign::X).unwrap();

        game.play(cell(3)).unwrap();
        game.play(cell(4)).unwrap();
        let report = game.play(cell(8)).unwrap();

        assert_eq!(report.outcome, Outcome::ComputerWins);
        assert_eq!(
            game.play(cell(6)),
            Err(GameError::GameIsFinished),
            "no moves after the end of the game"
        );
    }

    #[test]
    fn test_draw_on_full_board() {
        // X X O
        // O O X
        // X O X
        let mut game = TicTacToe::new(replying_with(&[2, 4, 3, 7]));
        game.start(Sign::X).unwrap();

        for human in [0, 1, 5, 6] {
            assert_eq!(game.play(cell(human)).unwrap().outcome, Outcome::Ongoing);
        }
        let report = game.play(cell(8)).unwrap();
        assert_eq!(report.outcome, Outcome::Draw);
        assert_eq!(report.computer_move, None);
    }

    #[test]
    fn test_invalid_moves_leave_state_unchanged() {
        let mut game = TicTacToe::new(replying_with(&[4]));
        game.start(Sign::X).unwrap();
        game.play(cell(0)).unwrap();

        for occupied in [0, 4] {
            assert_eq!(
                game.play(cell(occupied)),
                Err(GameError::CellIsOccupied {
                    cell: cell(occupied)
                })
            );
        }
        assert_eq!(*game.human_moves(), set(&[0]));
        assert_eq!(*game.computer_moves(), set(&[4]));
    }

    #[test]
    fn test_misbehaving_opponent_is_rejected() {
        let mut opponent = MockOpponent::new();
        opponent
            .expect_choose_move()
            .times(1)
            .returning(|human, _| human.iter().next());
        let mut game = TicTacToe::new(opponent);
        game.start(Sign::X).unwrap();

        assert_eq!(
            game.play(cell(2)),
            Err(GameError::CellIsOccupied { cell: cell(2) })
        );
        // human move is rolled back together with the failed reply
        assert!(game.human_moves().is_empty());
        assert!(game.computer_moves().is_empty());
    }

    #[test]
    fn test_opponent_without_reply() {
        let mut opponent = MockOpponent::new();
        opponent.expect_choose_move().times(1).returning(|_, _| None);
        let mut game = TicTacToe::new(opponent);
        game.start(Sign::X).unwrap();

        assert_eq!(game.play(cell(2)), Err(GameError::NoAvailableMoves));
        assert!(game.human_moves().is_empty());
    }

    #[test]
    fn test_restart_clears_board() {
        let mut game = TicTacToe::new(replying_with(&[4]));
        game.start(Sign::X).unwrap();
        game.play(cell(0)).unwrap();

        let report = game.start(Sign::O).unwrap();
        assert_eq!(*game.human_moves(), MoveSet::new());
        assert_eq!(*game.computer_moves(), set(&[0]));
        assert_eq!(report.outcome, Outcome::Ongoing);

        game.reset();
        assert!(!game.is_started());
        assert_eq!(game.board(), Board::default());
    }
}
