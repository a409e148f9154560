//! Error types for AisSim Frame

use thiserror::Error;

/// Frame encoding error types
#[derive(Error, Debug)]
pub enum FrameError {
    /// Bit-level invariant violation reported by the core primitives.
    /// Padding happens before every packing step, so hitting this at
    /// runtime is a defect, not an input condition.
    #[error("core error: {0}")]
    Core(#[from] aissim_core::CoreError),
}

/// Result type for AisSim Frame operations
pub type Result<T> = std::result::Result<T, FrameError>;
