//! Error types for JFIF header operations

use thiserror::Error;

/// Result type for JFIF header operations
pub type JfifResult<T> = Result<T, JfifError>;

/// Errors that can occur while decoding or encoding a JFIF header
#[derive(Error, Debug)]
pub enum JfifError {
    #[error("Data too short for a JFIF header: expected {expected} bytes, got {actual}")]
    TooShort { expected: usize, actual: usize },

    #[error("Invalid SOI marker: {0:02X?}")]
    InvalidSOI([u8; 2]),

    #[error("Invalid APP0 marker: {0:02X?}")]
    InvalidAPP0([u8; 2]),

    #[error("Invalid identifier, expected 'JFIF\\0': {0:02X?}")]
    InvalidIdentifier([u8; 5]),

    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl JfifError {
    /// Whether this error came from header validation rather than I/O
    pub fn is_validation(&self) -> bool {
        !matches!(self, JfifError::IoError(_))
    }
}
