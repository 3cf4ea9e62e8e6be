//! Errors surfaced by the `paging-window` binary.

use paging_window::{ConfigError, MemoryFetchError, PagingError};
use thiserror::Error;

/// Errors raised while loading input or paging records.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CliError {
    /// Configuration could not be loaded from CLI, environment or files.
    #[error("configuration error: {message}")]
    Load {
        /// Details about the loading failure.
        message: String,
    },

    /// Configuration was loaded but is unusable.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },

    /// The data file is not a JSON array of records.
    #[error("invalid data file: {message}")]
    Data {
        /// Parser error detail.
        message: String,
    },

    /// Paging the records failed.
    #[error(transparent)]
    Paging(#[from] PagingError<MemoryFetchError>),
}
