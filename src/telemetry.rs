//! Paging telemetry events and sinks.
//!
//! The CLI can report what each paging request resolved to, which helps when
//! debugging window placement against a real data set.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

/// A structured telemetry event emitted after paging.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum TelemetryEvent {
    /// Records the shape of a resolved paging request.
    PagingCompleted {
        /// Requested page (1-based).
        page: i64,
        /// Records per page.
        limit: usize,
        /// Records matching the condition.
        total_count: usize,
        /// Pages available at `limit`.
        page_count: usize,
    },
}

/// A sink that can record telemetry events.
pub trait TelemetrySink: Send + Sync {
    /// Records a telemetry event.
    fn record(&self, event: TelemetryEvent);
}

/// Telemetry sink that drops all events.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopTelemetrySink;

impl TelemetrySink for NoopTelemetrySink {
    fn record(&self, _event: TelemetryEvent) {}
}

/// Records telemetry events to stderr as JSON lines (JSONL).
#[derive(Debug, Default)]
pub struct StderrJsonlTelemetrySink;

impl TelemetrySink for StderrJsonlTelemetrySink {
    fn record(&self, event: TelemetryEvent) {
        let mut stderr = io::stderr().lock();
        if let Err(error) = write_jsonl(&mut stderr, &event) {
            tracing::debug!("dropping telemetry event: {error}");
        }
    }
}

/// Writes `event` to `writer` as a single JSON line.
fn write_jsonl<W: Write>(writer: &mut W, event: &TelemetryEvent) -> io::Result<()> {
    serde_json::to_writer(&mut *writer, event)?;
    writeln!(writer)
}
