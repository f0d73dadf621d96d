mod minimax;

pub use minimax::{minimax, Minimax, Score, SearchConfig, DRAW, LOSS, WIN};
