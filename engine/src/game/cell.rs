use std::fmt::{Display, Formatter};

use super::error::GameError;
use super::grid::GridIndex;

pub const BOARD_SIDE: usize = 3;
pub const CELL_COUNT: usize = BOARD_SIDE * BOARD_SIDE;

/// One of the nine board positions, numbered 0-8 row by row.
/// ```text
/// 0 | 1 | 2
/// ---------
/// 3 | 4 | 5
/// ---------
/// 6 | 7 | 8
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Cell(u8);

impl Cell {
    /// Constructs a cell from its row-major index.
    pub fn new(index: usize) -> Result<Self, GameError> {
        Self::try_from(index)
    }

    // callers guarantee `index < CELL_COUNT`
    pub(crate) const fn from_raw(index: u8) -> Self {
        Self(index)
    }

    /// Returns an iterator over all cells in ascending order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT as u8).map(Cell)
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }

    pub fn row(self) -> usize {
        self.index() / BOARD_SIDE
    }

    pub fn col(self) -> usize {
        self.index() % BOARD_SIDE
    }
}

impl TryFrom<usize> for Cell {
    type Error = GameError;

    fn try_from(value: usize) -> Result<Self, Self::Error> {
        if value < CELL_COUNT {
            Ok(Self(value as u8))
        } else {
            Err(GameError::cell_out_of_range(CELL_COUNT - 1, value))
        }
    }
}

impl TryFrom<GridIndex> for Cell {
    type Error = GameError;

    fn try_from(value: GridIndex) -> Result<Self, Self::Error> {
        if value.row() >= BOARD_SIDE || value.col() >= BOARD_SIDE {
            return Err(GameError::cell_out_of_range(
                CELL_COUNT - 1,
                value.row() * BOARD_SIDE + value.col(),
            ));
        }
        Self::try_from(value.row() * BOARD_SIDE + value.col())
    }
}

impl From<Cell> for usize {
    fn from(value: Cell) -> Self {
        value.index()
    }
}

impl From<Cell> for GridIndex {
    fn from(value: Cell) -> Self {
        GridIndex::new(value.row(), value.col())
    }
}

impl Display for Cell {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_try_from_index() {
        assert_eq!(Cell::new(0).map(Cell::index), Ok(0));
        assert_eq!(Cell::new(8).map(Cell::index), Ok(8));
        assert_eq!(
            Cell::new(9),
            Err(GameError::CellOutOfRange {
                max_expected: 8,
                found: 9
            })
        );
    }

    #[test]
    fn test_grid_index_conversion() {
        for cell in Cell::all() {
            let index = GridIndex::from(cell);
            assert_eq!(index.row() * BOARD_SIDE + index.col(), cell.index());
            assert_eq!(Cell::try_from(index), Ok(cell));
        }

        // column overflow must not wrap into the next row
        assert!(Cell::try_from(GridIndex::new(0, 3)).is_err());
        assert!(Cell::try_from(GridIndex::new(3, 0)).is_err());
    }

    #[test]
    fn test_all_is_ascending() {
        itertools::assert_equal(Cell::all().map(Cell::index), 0..CELL_COUNT);
    }
}
