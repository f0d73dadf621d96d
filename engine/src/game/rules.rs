//! Pure rules of the game: legal moves, win and draw detection.
//!
//! Wins are detected with the magic square trick. Every cell gets a number
//! 1-9 such that the three cells of every row, column and diagonal add up to
//! 15 and no other three cells do, so a move set wins exactly when some three
//! of its cells sum to 15.

use super::{Cell, GameError, GameResult, MoveSet, Outcome, CELL_COUNT};

/// Magic square labels, row by row.
/// ```text
/// 8 | 1 | 6
/// ---------
/// 3 | 5 | 7
/// ---------
/// 4 | 9 | 2
/// ```
const MAGIC_SQUARE: [u8; CELL_COUNT] = [8, 1, 6, 3, 5, 7, 4, 9, 2];
const MAGIC_SUM: u8 = 15;

/// Returns all cells that are occupied by neither player.
pub fn available_moves(human: &MoveSet, computer: &MoveSet) -> MoveSet {
    debug_assert!(human.is_disjoint(computer));
    MoveSet::FULL.difference(&human.union(computer))
}

/// Returns `true` if some three cells of `moves` form a line.
pub fn is_winning(moves: &MoveSet) -> bool {
    let len = moves.len();
    if len < 3 {
        return false;
    }

    let mut labels = [0u8; CELL_COUNT];
    for (label, cell) in labels.iter_mut().zip(moves.iter()) {
        *label = MAGIC_SQUARE[cell.index()];
    }

    for i in 0..len {
        for j in i + 1..len {
            for k in j + 1..len {
                if labels[i] + labels[j] + labels[k] == MAGIC_SUM {
                    return true;
                }
            }
        }
    }
    false
}

/// Returns `true` if no cell is left. Wins are not taken into account.
pub fn is_over(human: &MoveSet, computer: &MoveSet) -> bool {
    human.len() + computer.len() > CELL_COUNT - 1
}

/// Returns `true` if either player has a line or the board is full.
pub fn is_terminal(human: &MoveSet, computer: &MoveSet) -> bool {
    outcome(human, computer).is_finished()
}

/// Derives the outcome of the position. A line completed by the last move
/// counts as a win even when that move fills the board.
pub fn outcome(human: &MoveSet, computer: &MoveSet) -> Outcome {
    if is_winning(human) {
        Outcome::HumanWins
    } else if is_winning(computer) {
        Outcome::ComputerWins
    } else if is_over(human, computer) {
        Outcome::Draw
    } else {
        Outcome::Ongoing
    }
}

/// Adds `cell` to `mover`. Leaves `mover` untouched on error.
pub fn record_move(mover: &mut MoveSet, other: &MoveSet, cell: Cell) -> GameResult<()> {
    if is_terminal(mover, other) {
        return Err(GameError::GameIsFinished);
    }
    if mover.contains(cell) || other.contains(cell) {
        return Err(GameError::cell_is_occupied(cell));
    }
    mover.insert(cell);
    Ok(())
}
