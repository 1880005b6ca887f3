use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Width and height must both be non-zero")]
    InvalidDimensions,
    #[error("Mine count exceeds board capacity")]
    InvalidMineCount,
    #[error("Explicit mine cell is out of bounds or duplicated")]
    InvalidCell,
    #[error("Coordinates outside the board")]
    OutOfBounds,
}

pub type Result<T> = core::result::Result<T, GameError>;
