pub mod aggregate;
pub mod correlation;

use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum StatsError {
    #[error("length mismatch: {left} vs {right} values")]
    LengthMismatch { left: usize, right: usize },
    #[error("degenerate input: {0}")]
    Degenerate(&'static str),
    #[error("expected 2 or 3 columns, got {0}")]
    ColumnCount(usize),
}
