use thiserror::Error;

/// Errors surfaced at the crate boundary (text input and host-supplied moves).
/// Rule queries themselves never fail.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("board text must have 8 rows, got {0}")]
    BadRowCount(usize),

    #[error("board row {row} must have 8 cells, got {len}")]
    BadRowLength { row: usize, len: usize },

    #[error("unexpected character {ch:?} at row {row}, col {col}")]
    BadCell { row: usize, col: usize, ch: char },

    #[error("unknown side '{0}', expected A/S or B/O")]
    UnknownSide(String),

    #[error("illegal move at ({row}, {col})")]
    IllegalMove { row: u8, col: u8 },

    #[error("game is already over")]
    GameOver,
}
