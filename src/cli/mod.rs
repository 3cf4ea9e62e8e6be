//! Command-line front end for paging JSON record files.
//!
//! - [`paging`]: Loads records and resolves the requested page window
//! - [`output`]: Writes the paging result as JSON
//! - [`error`]: Errors surfaced to the user

pub mod error;
pub mod output;
pub mod paging;

pub use error::CliError;
