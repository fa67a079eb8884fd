//! Error types and result utilities for clip operations.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience type alias for results that may contain ClipError
pub type ClipResult<T> = Result<T, ClipError>;

/// Error types that can occur during clip operations.
#[derive(Error, Debug)]
pub enum ClipError {
    /// Error that occurs when a clip file cannot be read or written.
    ///
    /// Carries the path the operation was working on. Arithmetic never
    /// raises this; it is confined to the load/save entry points.
    #[error("I/O error on {}: {source}", .path.display())]
    Io {
        /// Path of the file being read or written.
        path: PathBuf,
        /// Underlying I/O failure.
        source: std::io::Error,
    },

    /// Error that occurs when an invalid sample range is provided.
    ///
    /// This typically happens when a cut range or ranged-add window falls
    /// outside the clip, or its start lies past its end.
    #[error("Invalid range error: {0}")]
    InvalidRange(String),

    /// Error that occurs when invalid parameters are provided to an operation.
    #[error("Invalid parameter error: {0}")]
    InvalidParameter(String),

    /// Error that occurs when two clips (or a clip and its per-channel
    /// parameters) do not line up.
    ///
    /// This happens when lengths, sampling rates, or channel layouts differ
    /// in a binary operation.
    #[error("Dimension mismatch error: {0}")]
    DimensionMismatch(String),
}
