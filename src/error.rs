//! Error types for the generator

use thiserror::Error;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while generating or writing the backdrop.
/// Drawing itself is total and never fails; only the filesystem and
/// config parsing can.
#[derive(Error, Debug)]
pub enum Error {
    /// Directory creation or file I/O failed
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Config file did not parse
    #[error("invalid config: {0}")]
    Config(#[from] serde_json::Error),
}
