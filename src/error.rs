//! Error types for grid layout operations.

use thiserror::Error;

/// Error type for grid layout and rendering operations.
#[derive(Error, Debug)]
pub enum Error {
    /// An I/O error occurred while writing to the output sink.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configured screen width leaves no room for output.
    ///
    /// A zero screen width is a programming error in the caller, not a
    /// layout the solver can fall back from.
    #[error("invalid screen width: {0} (must be at least 1)")]
    InvalidScreenWidth(usize),
}

/// Result type alias using the grid Error type.
pub type Result<T> = std::result::Result<T, Error>;
