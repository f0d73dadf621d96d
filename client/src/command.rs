use std::str::FromStr;

use game_engine::game::{Cell, Sign};

use crate::error::ClientError;

/// A line typed at the move prompt.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Command {
    Play(Cell),
    Hint,
    NewGame,
    Quit,
}

impl FromStr for Command {
    type Err = ClientError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        match s.to_ascii_lowercase().as_str() {
            "hint" | "h" => return Ok(Command::Hint),
            "new" | "n" => return Ok(Command::NewGame),
            "quit" | "q" | "exit" => return Ok(Command::Quit),
            _ => {}
        }

        // cells are numbered 1-9 on screen
        let number: usize = s
            .parse()
            .map_err(|_| ClientError::UnknownCommand(s.to_string()))?;
        let cell = number
            .checked_sub(1)
            .and_then(|index| Cell::new(index).ok())
            .ok_or(ClientError::CellOutOfRange(number))?;
        Ok(Command::Play(cell))
    }
}

pub fn parse_sign(s: &str) -> Option<Sign> {
    match s.trim().to_ascii_lowercase().as_str() {
        "x" => Some(Sign::X),
        "o" | "0" => Some(Sign::O),
        _ => None,
    }
}
