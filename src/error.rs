use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("coordinates outside the board")]
    InvalidCoords,
    #[error("board dimensions must be at least 1x1")]
    InvalidSize,
    #[error("mine count must leave at least one safe cell")]
    TooManyMines,
    #[error("game already ended, no new moves are accepted")]
    AlreadyEnded,
}

pub type Result<T> = core::result::Result<T, GameError>;
