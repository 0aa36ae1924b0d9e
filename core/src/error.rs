use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Coordinates out of bounds")]
    OutOfBounds,
    #[error("Invalid configuration, hazards must be fewer than cells")]
    InvalidConfiguration,
}

pub type Result<T> = core::result::Result<T, GameError>;
