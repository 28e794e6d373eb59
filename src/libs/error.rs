//! Error type for the entry store and the duration calculator.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("Row {index} does not exist (rows: {len})")]
    RowOutOfRange { index: usize, len: usize },

    /// End was requested for a row whose timer was never started.
    #[error("Row {index} has not been started")]
    NotStarted { index: usize },

    #[error("Invalid time of day: {0:?}")]
    InvalidTime(String),

    #[error("Unknown field: {0}")]
    UnknownField(String),
}

pub type StoreResult<T> = Result<T, StoreError>;
