use super::Cell;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum GameError {
    #[error("cell {found} is out of range (expected: 0-{max_expected})")]
    CellOutOfRange { max_expected: usize, found: usize },
    #[error("cell {cell} is occupied")]
    CellIsOccupied { cell: Cell },
    #[error("can't make turn on a finished game")]
    GameIsFinished,
    #[error("game has not been started yet")]
    GameNotStarted,
    #[error("opponent has no move to make")]
    NoAvailableMoves,
}

impl GameError {
    pub fn cell_out_of_range(max_expected: usize, found: usize) -> Self {
        Self::CellOutOfRange {
            max_expected,
            found,
        }
    }

    pub fn cell_is_occupied(cell: Cell) -> Self {
        Self::CellIsOccupied { cell }
    }
}
