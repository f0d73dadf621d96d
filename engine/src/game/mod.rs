pub mod rules;
pub mod tic_tac_toe;

mod cell;
mod error;
mod grid;
mod move_set;

use std::fmt::{Display, Formatter};
use std::ops::Deref;

use generic_array::typenum::U3;

pub use cell::{Cell, BOARD_SIDE, CELL_COUNT};
pub use error::GameError;
pub use grid::{Grid, GridIndex};
pub use move_set::{Cells, MoveSet};
pub use tic_tac_toe::{GameConfig, Opponent, TicTacToe, TurnReport};

pub type GameResult<T> = Result<T, GameError>;

/// Symbol drawn in a cell. [`Sign::X`] always makes the first move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Sign {
    X,
    O,
}

impl Sign {
    pub const FIRST: Sign = Sign::X;

    pub fn opposite(self) -> Self {
        match self {
            Sign::X => Sign::O,
            Sign::O => Sign::X,
        }
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Sign::X => f.write_str("X"),
            Sign::O => f.write_str("O"),
        }
    }
}

/// One of the two participants of a game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Side {
    Human,
    Computer,
}

impl Side {
    /// Returns the side that moves after `self`.
    pub fn opponent(self) -> Self {
        match self {
            Side::Human => Side::Computer,
            Side::Computer => Side::Human,
        }
    }
}

/// Result of a game as derived from the move sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    Ongoing,
    HumanWins,
    ComputerWins,
    Draw,
}

impl Outcome {
    pub fn is_finished(&self) -> bool {
        !matches!(self, Outcome::Ongoing)
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct BoardCell<T>(pub Option<T>);

impl<T> Default for BoardCell<T> {
    fn default() -> Self {
        Self(Option::default())
    }
}

impl<T> Deref for BoardCell<T> {
    type Target = Option<T>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Occupied-cell-to-symbol mapping handed out to front-ends.
pub type Board = Grid<BoardCell<Sign>, U3, U3>;
