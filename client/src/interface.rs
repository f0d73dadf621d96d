use std::io::{BufRead, Write};

use game_engine::game::{
    Board, Cell, GameError, GridIndex, Opponent, Outcome, Sign, TicTacToe, TurnReport,
};
use tic_tac_toe_ai::Minimax;
use tracing::{debug, info};

use crate::command::{parse_sign, Command};
use crate::error::ClientResult;
use crate::settings::Settings;

enum Flow {
    NewGame,
    Quit,
}

/// Line-based front-end: reads commands from `input`, renders to `output`.
pub struct Console<R, W, O> {
    input: R,
    output: W,
    game: TicTacToe<O>,
    settings: Settings,
    advisor: Minimax,
}

impl<R: BufRead, W: Write, O: Opponent> Console<R, W, O> {
    pub fn new(input: R, output: W, opponent: O, settings: Settings) -> Self {
        Self {
            input,
            output,
            game: TicTacToe::with_config(opponent, settings.game()),
            advisor: Minimax::new(settings.search()),
            settings,
        }
    }

    pub fn run(&mut self) -> ClientResult<()> {
        loop {
            let Some(sign) = self.choose_sign()? else {
                return Ok(());
            };
            info!(%sign, "starting a new game");
            let report = self.game.start(sign)?;
            writeln!(self.output, "You play {}.", sign)?;
            self.show(&report)?;

            match self.play_game()? {
                Flow::NewGame => self.game.reset(),
                Flow::Quit => return Ok(()),
            }
        }
    }

    fn play_game(&mut self) -> ClientResult<Flow> {
        loop {
            if self.game.outcome().is_finished() {
                write!(self.output, "Type 'new' or 'quit': ")?;
            } else {
                write!(self.output, "Your move (1-9, hint, new, quit): ")?;
            }
            self.output.flush()?;

            let Some(line) = self.read_line()? else {
                return Ok(Flow::Quit);
            };
            let command = match line.parse::<Command>() {
                Ok(command) => command,
                Err(err) => {
                    writeln!(self.output, "{}", err)?;
                    continue;
                }
            };
            debug!(?command, "received command");

            match command {
                Command::Play(cell) => match self.game.play(cell) {
                    Ok(report) => self.show(&report)?,
                    Err(GameError::CellIsOccupied { cell }) => {
                        writeln!(self.output, "Cell {} is already taken.", cell.index() + 1)?
                    }
                    Err(err) => writeln!(self.output, "{}", err)?,
                },
                Command::Hint => self.hint()?,
                Command::NewGame => return Ok(Flow::NewGame),
                Command::Quit => return Ok(Flow::Quit),
            }
        }
    }

    fn choose_sign(&mut self) -> ClientResult<Option<Sign>> {
        if let Some(sign) = self.settings.sign() {
            return Ok(Some(sign));
        }
        loop {
            write!(self.output, "Choose your sign (x moves first, o): ")?;
            self.output.flush()?;
            let Some(line) = self.read_line()? else {
                return Ok(None);
            };
            match parse_sign(&line) {
                Some(sign) => return Ok(Some(sign)),
                None => writeln!(self.output, "Please type x or o.")?,
            }
        }
    }

    fn hint(&mut self) -> ClientResult<()> {
        if self.game.outcome().is_finished() {
            writeln!(self.output, "{}", GameError::GameIsFinished)?;
            return Ok(());
        }
        // the advisor plays the human's side with the roles swapped
        let best = self
            .advisor
            .best_move(self.game.computer_moves(), self.game.human_moves());
        match best {
            Some(cell) => writeln!(self.output, "Try cell {}.", cell.index() + 1)?,
            None => writeln!(self.output, "{}", GameError::NoAvailableMoves)?,
        }
        Ok(())
    }

    fn show(&mut self, report: &TurnReport) -> ClientResult<()> {
        if let Some(cell) = report.computer_move {
            writeln!(self.output, "Computer plays {}.", cell.index() + 1)?;
        }
        write!(self.output, "{}", render_board(&report.board))?;
        match report.outcome {
            Outcome::Ongoing => {}
            Outcome::HumanWins => writeln!(self.output, "You win!")?,
            Outcome::ComputerWins => writeln!(self.output, "Computer wins.")?,
            Outcome::Draw => writeln!(self.output, "Draw.")?,
        }
        Ok(())
    }

    fn read_line(&mut self) -> ClientResult<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

/// Renders the board with free cells labelled by their number.
pub fn render_board(board: &Board) -> String {
    let mut rendered = String::new();
    for (row, cells) in board.iter().enumerate() {
        if row > 0 {
            rendered.push_str("---+---+---\n");
        }
        let labels: Vec<String> = (0..cells.len())
            .map(|col| {
                let index = GridIndex::new(row, col);
                match *board[index] {
                    Some(sign) => sign.to_string(),
                    None => Cell::try_from(index)
                        .map(|cell| (cell.index() + 1).to_string())
                        .unwrap_or_default(),
                }
            })
            .collect();
        rendered.push(' ');
        rendered.push_str(&labels.join(" | "));
        rendered.push('\n');
    }
    rendered
}
