//! Windowed pagination over pluggable record fetchers.
//!
//! Given a record count and a requested page, the pager fetches the active
//! page together with up to two neighbouring pages on each side in a single
//! batched call, adds the first and last pages when they lie outside that
//! window, and regroups the records into named buckets (`active`, `first`,
//! `last`, `before_distant`, `before_near`, `after_near`, `after_distant`).
//!
//! Storage layers plug in through [`PageFetcher`]; [`MemoryFetcher`] serves
//! records from memory. Query-string helpers in [`query`] turn
//! `?limit=..&page=..&sort=..` into a [`Setting`].

pub mod config;
pub mod error;
pub mod memory;
pub mod order;
pub mod pager;
pub mod query;
pub mod telemetry;

pub use config::{ConfigError, PagerConfig};
pub use error::{PagingError, PagingResult};
pub use memory::{FieldRange, MemoryFetchError, MemoryFetcher, RecordFilter, SortableRecord};
pub use order::{Direction, Order};
pub use pager::{
    DEFAULT_LIMIT, FetchRequest, PageBucket, PageFetchResult, PageFetcher, Pager, Pages, Paging,
    PagingResponse, SIDE_PAGING_COUNT, Setting, bucket_name, get_paging,
};
pub use query::{Pagination, Query, parse_orders, parse_pagination, parse_query, parse_range, parse_sort};
pub use telemetry::{NoopTelemetrySink, StderrJsonlTelemetrySink, TelemetryEvent, TelemetrySink};
