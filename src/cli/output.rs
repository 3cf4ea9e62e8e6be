//! Output formatting for paging results.

use std::io::{self, Write};

use paging_window::Paging;
use serde_json::Value;

use super::CliError;

/// Writes `paging` to stdout as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`CliError::Io`] when serialisation or the write fails.
pub fn write_paging(paging: &Paging<Value>) -> Result<(), CliError> {
    let mut stdout = io::stdout().lock();
    write_paging_to(&mut stdout, paging)
}

/// Writes `paging` to the given writer as pretty-printed JSON.
pub fn write_paging_to<W: Write>(writer: &mut W, paging: &Paging<Value>) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *writer, paging).map_err(|error| CliError::Io {
        message: error.to_string(),
    })?;
    writeln!(writer).map_err(|error| io_error(&error))
}

fn io_error(error: &io::Error) -> CliError {
    CliError::Io {
        message: error.to_string(),
    }
}
