use thiserror::Error;

#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum GameError {
    #[error("Invalid coordinates")]
    InvalidCoords,
    #[error("Too many mines, at most {max} fit around a safe start")]
    TooManyMines { max: u16 },
    #[error("Board must have at least one row and one column")]
    InvalidSize,
}

pub type Result<T> = core::result::Result<T, GameError>;
