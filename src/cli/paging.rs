//! Loads a JSON record file and resolves the configured page window.

use std::fs;
use std::path::Path;

use paging_window::{
    FieldRange, MemoryFetcher, PagerConfig, Paging, TelemetryEvent, TelemetrySink, get_paging,
};
use serde_json::Value;

use super::CliError;

/// Reads a JSON array of records from `path`.
///
/// # Errors
///
/// Returns [`CliError::Io`] when the file cannot be read and
/// [`CliError::Data`] when it does not hold a JSON array.
pub fn load_records(path: &Path) -> Result<Vec<Value>, CliError> {
    let contents = fs::read_to_string(path).map_err(|error| CliError::Io {
        message: format!("{path}: {error}", path = path.display()),
    })?;

    serde_json::from_str(&contents).map_err(|error| CliError::Data {
        message: format!("{path}: {error}", path = path.display()),
    })
}

/// Pages the configured data file and records a telemetry event.
///
/// # Errors
///
/// Returns configuration, I/O and data errors from loading, and
/// [`CliError::Paging`] when the pager rejects the request.
pub fn run_paging(
    config: &PagerConfig,
    telemetry: &dyn TelemetrySink,
) -> Result<Paging<Value>, CliError> {
    config.validate()?;
    let records = load_records(Path::new(config.require_data_file()?))?;
    tracing::debug!("loaded {} records", records.len());

    let fetcher = MemoryFetcher::<Value, Option<FieldRange>>::new(records);
    let query = config.resolve_query();
    let (page, limit) = (query.page, query.limit);

    let paging = get_paging(&fetcher, query.into_setting(config.resolve_condition()))?;

    telemetry.record(TelemetryEvent::PagingCompleted {
        page,
        limit,
        total_count: paging.total_count,
        page_count: paging.page_count,
    });
    Ok(paging)
}
