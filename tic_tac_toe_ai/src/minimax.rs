//! Exhaustive minimax search for the computer's reply.
//!
//! Scores are always given from the computer's point of view: the computer
//! maximizes, the human minimizes. The tree is small enough (at most 9! paths)
//! to be searched to the end without depth limits or memoization.

use game_engine::game::rules::{available_moves, is_over, is_winning};
use game_engine::game::{Cell, MoveSet, Opponent, Side};
use tracing::debug;

pub type Score = i8;

pub const WIN: Score = 1;
pub const DRAW: Score = 0;
pub const LOSS: Score = -1;

fn terminal_score(human: &MoveSet, computer: &MoveSet) -> Option<Score> {
    if is_winning(human) {
        Some(LOSS)
    } else if is_winning(computer) {
        Some(WIN)
    } else if is_over(human, computer) {
        Some(DRAW)
    } else {
        None
    }
}

fn place(human: &MoveSet, computer: &MoveSet, candidate: Cell, mover: Side) -> (MoveSet, MoveSet) {
    debug_assert!(!human.contains(candidate) && !computer.contains(candidate));
    match mover {
        Side::Human => (human.with(candidate), *computer),
        Side::Computer => (*human, computer.with(candidate)),
    }
}

/// Scores the position reached after `mover` occupies `candidate`.
///
/// `depth` is the number of plies between the root and `candidate` (0 at the
/// top level). It is informational and does not change the score.
pub fn minimax(
    human: &MoveSet,
    computer: &MoveSet,
    candidate: Cell,
    mover: Side,
    depth: usize,
) -> Score {
    let (human, computer) = place(human, computer, candidate, mover);
    if let Some(score) = terminal_score(&human, &computer) {
        return score;
    }

    let next = mover.opponent();
    let scores = available_moves(&human, &computer)
        .iter()
        .map(|cell| minimax(&human, &computer, cell, next, depth + 1));
    let best = match next {
        Side::Computer => scores.max(),
        Side::Human => scores.min(),
    };
    // a non-terminal position always has a free cell
    best.unwrap_or(DRAW)
}

/// Same as [`minimax`] with alpha-beta cutoffs. The result is exact when it
/// lies strictly inside `(alpha, beta)`, otherwise it is a bound on the same
/// side of the window as the exact score.
fn alphabeta(
    human: &MoveSet,
    computer: &MoveSet,
    candidate: Cell,
    mover: Side,
    mut alpha: Score,
    mut beta: Score,
) -> Score {
    let (human, computer) = place(human, computer, candidate, mover);
    if let Some(score) = terminal_score(&human, &computer) {
        return score;
    }

    let next = mover.opponent();
    match next {
        Side::Computer => {
            let mut best = LOSS;
            for cell in available_moves(&human, &computer) {
                let score = alphabeta(&human, &computer, cell, next, alpha, beta);
                best = best.max(score);
                alpha = alpha.max(score);
                if alpha >= beta {
                    break;
                }
            }
            best
        }
        Side::Human => {
            let mut best = WIN;
            for cell in available_moves(&human, &computer) {
                let score = alphabeta(&human, &computer, cell, next, alpha, beta);
                best = best.min(score);
                beta = beta.min(score);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SearchConfig {
    /// Use alpha-beta cutoffs. Chosen moves stay the same.
    pub pruning: bool,
}

/// Perfect-play computer opponent.
#[derive(Clone, Debug, Default)]
pub struct Minimax {
    config: SearchConfig,
}

impl Minimax {
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// Returns the exact score of every free cell for the computer, in
    /// ascending cell order.
    pub fn score_moves(&self, human: &MoveSet, computer: &MoveSet) -> Vec<(Cell, Score)> {
        available_moves(human, computer)
            .iter()
            .map(|cell| (cell, minimax(human, computer, cell, Side::Computer, 0)))
            .collect()
    }

    /// Returns the lowest free cell with the highest score for the computer,
    /// or [`None`] if the board is full.
    pub fn best_move(&self, human: &MoveSet, computer: &MoveSet) -> Option<Cell> {
        let mut best: Option<(Cell, Score)> = None;
        for cell in available_moves(human, computer) {
            let score = if self.config.pruning {
                // anything not better than the current best is of no interest
                let alpha = best.map_or(LOSS - 1, |(_, score)| score);
                alphabeta(human, computer, cell, Side::Computer, alpha, WIN)
            } else {
                minimax(human, computer, cell, Side::Computer, 0)
            };
            if best.map_or(true, |(_, best_score)| score > best_score) {
                best = Some((cell, score));
            }
        }

        if let Some((cell, score)) = best {
            debug!(%cell, score, %human, %computer, "minimax picked a move");
        }
        best.map(|(cell, _)| cell)
    }
}

impl Opponent for Minimax {
    fn choose_move(&self, human: &MoveSet, computer: &MoveSet) -> Option<Cell> {
        self.best_move(human, computer)
    }
}
