//! The record-fetch contract the pager depends on.
//!
//! Storage layers implement [`PageFetcher`] to expose a count and a ranged,
//! ordered fetch. The filter condition is an associated type, so any filter
//! shape the storage layer understands can flow through the pager untouched.

use crate::order::Order;

/// A single page chunk of fetched records.
pub type PageFetchResult<R> = Vec<R>;

/// Range and ordering of one fetch call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    /// Maximum number of records to append.
    pub limit: usize,
    /// Zero-based index of the first record to append.
    pub offset: usize,
    /// Sort directives, applied in sequence.
    pub orders: Vec<Order>,
}

impl FetchRequest {
    /// Creates a fetch request.
    #[must_use]
    pub const fn new(limit: usize, offset: usize, orders: Vec<Order>) -> Self {
        Self {
            limit,
            offset,
            orders,
        }
    }
}

/// Source of countable, ordered records.
///
/// Implementations must be side-effect free: the pager may call
/// [`PageFetcher::fetch_page`] several times for one request and expects
/// identical inputs to yield identical output.
#[cfg_attr(
    test,
    mockall::automock(type Condition = (); type Record = u32; type Error = std::io::Error;)
)]
pub trait PageFetcher {
    /// Filter understood by this fetcher.
    type Condition;
    /// Record type produced by this fetcher.
    type Record;
    /// Error reported when counting or fetching fails.
    type Error;

    /// Returns the number of records matching `condition`.
    ///
    /// # Errors
    ///
    /// Returns the fetcher's own error when the count cannot be computed.
    fn count(&self, condition: &Self::Condition) -> Result<usize, Self::Error>;

    /// Appends up to `request.limit` records matching `condition`, starting at
    /// `request.offset` and honouring `request.orders`, to `result`.
    ///
    /// # Errors
    ///
    /// Returns the fetcher's own error when the range cannot be read.
    fn fetch_page(
        &self,
        condition: &Self::Condition,
        request: &FetchRequest,
        result: &mut PageFetchResult<Self::Record>,
    ) -> Result<(), Self::Error>;
}
