use thiserror::Error;

/// Validation failures for candidate RGB images.
///
/// Every variant is detected eagerly, before any per-pixel arithmetic runs,
/// so a failed conversion never produces a partial result.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImageError {
    #[error("image has no rows")]
    EmptyImage,

    #[error("row {row} has no pixels")]
    EmptyRow { row: usize },

    #[error("row {row} has {got} pixels, expected {expected}")]
    RaggedRows {
        row: usize,
        expected: usize,
        got: usize,
    },

    #[error("pixel ({row}, {col}) has {got} channel values, expected 3")]
    InvalidChannelCount { row: usize, col: usize, got: usize },

    #[error("buffer holds {got} values, expected {expected}")]
    BufferLength { expected: usize, got: usize },
}
