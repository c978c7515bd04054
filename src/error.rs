//! Error types for the environment crate

use thiserror::Error;

/// Main error type for the environment crate
///
/// Illegal moves are deliberately not represented here: the environment
/// reports them as [`Outcome::Invalid`](crate::Outcome::Invalid) values so a
/// driver or agent can retry without unwinding. `Error` covers construction
/// and parsing misuse only.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("grid size {size} is not supported (must be at least 1)")]
    InvalidGridSize { size: usize },

    #[error("invalid cell value {value} (expected 0, 1, or 2)")]
    InvalidCellValue { value: u8 },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("board string has {got} cells, which is not a perfect square in '{context}'")]
    InvalidBoardLength { got: usize, context: String },

    #[error("invalid outcome code {code} (expected -1, 0, 1, 2, or 3)")]
    InvalidOutcomeCode { code: i8 },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
