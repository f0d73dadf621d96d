use game_engine::game::GameError;

#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    #[error(transparent)]
    Game(#[from] GameError),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("unknown command: {0:?}")]
    UnknownCommand(String),
    #[error("cell number must be between 1 and 9, found {0}")]
    CellOutOfRange(usize),
}

pub type ClientResult<T> = Result<T, ClientError>;
