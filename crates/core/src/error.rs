//! Error types for AisSim Core

use thiserror::Error;

/// Core error types
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("empty input: no payload bits after trimming")]
    EmptyInput,

    #[error("bit count {len} is not a multiple of 8")]
    Alignment { len: usize },
}

/// Result type for AisSim Core operations
pub type Result<T> = std::result::Result<T, CoreError>;
