use std::fmt::{Display, Formatter};

use super::cell::{Cell, CELL_COUNT};

const FULL_MASK: u16 = (1 << CELL_COUNT) - 1;

/// Set of cells occupied by one player, stored as a 9-bit mask.
/// Iteration always yields cells in ascending order.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct MoveSet(u16);

impl MoveSet {
    pub const EMPTY: MoveSet = MoveSet(0);
    pub const FULL: MoveSet = MoveSet(FULL_MASK);

    pub fn new() -> Self {
        Self::EMPTY
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.0 & Self::bit(cell) != 0
    }

    /// Adds `cell` to the set. Returns whether the value was newly inserted.
    pub fn insert(&mut self, cell: Cell) -> bool {
        let inserted = !self.contains(cell);
        self.0 |= Self::bit(cell);
        inserted
    }

    /// Returns a copy of the set with `cell` added.
    pub fn with(mut self, cell: Cell) -> Self {
        self.insert(cell);
        self
    }

    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    pub fn union(&self, other: &MoveSet) -> MoveSet {
        MoveSet(self.0 | other.0)
    }

    pub fn difference(&self, other: &MoveSet) -> MoveSet {
        MoveSet(self.0 & !other.0)
    }

    pub fn is_disjoint(&self, other: &MoveSet) -> bool {
        self.0 & other.0 == 0
    }

    pub fn iter(&self) -> Cells {
        Cells { bits: self.0 }
    }

    fn bit(cell: Cell) -> u16 {
        1 << cell.index()
    }
}

/// Ascending iterator over the cells of a [`MoveSet`].
#[derive(Clone, Debug)]
pub struct Cells {
    bits: u16,
}

impl Iterator for Cells {
    type Item = Cell;

    fn next(&mut self) -> Option<Self::Item> {
        if self.bits == 0 {
            return None;
        }
        let index = self.bits.trailing_zeros() as u8;
        // clear the lowest set bit
        self.bits &= self.bits - 1;
        Some(Cell::from_raw(index))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl ExactSizeIterator for Cells {}

impl IntoIterator for MoveSet {
    type Item = Cell;
    type IntoIter = Cells;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl IntoIterator for &MoveSet {
    type Item = Cell;
    type IntoIter = Cells;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Cell> for MoveSet {
    fn from_iter<I: IntoIterator<Item = Cell>>(iter: I) -> Self {
        let mut set = MoveSet::new();
        set.extend(iter);
        set
    }
}

impl Extend<Cell> for MoveSet {
    fn extend<I: IntoIterator<Item = Cell>>(&mut self, iter: I) {
        for cell in iter {
            self.insert(cell);
        }
    }
}

impl Display for MoveSet {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str("{")?;
        for (i, cell) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", cell)?;
        }
        f.write_str("}")
    }
}
