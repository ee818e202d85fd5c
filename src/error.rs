use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Board dimensions must be positive")]
    InvalidDimension,
    #[error("Bomb count out of range for the board size")]
    InvalidBombCount,
    #[error("Unknown difficulty `{0}`")]
    InvalidDifficulty(String),
    #[error("Coordinates outside the board")]
    OutOfBounds,
    #[error("Board already generated")]
    AlreadyGenerated,
}

pub type Result<T> = std::result::Result<T, GameError>;
