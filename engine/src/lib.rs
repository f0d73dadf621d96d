//! Rules engine for a human vs. computer game of tic-tac-toe.
//!
//! The engine records moves, detects wins and draws and resolves a whole turn
//! (the human's move followed by the computer's reply). The computer's choice is
//! delegated to an [`game::Opponent`].

pub mod game;
