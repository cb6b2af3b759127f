use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Unknown game: {0}")]
    UnknownGame(String),

    #[error("Invalid dice count {0}: must be between 1 and 6")]
    InvalidDiceCount(u8),

    #[error("The wheel has no segments")]
    EmptyWheel,
}
