//! In-memory [`PageFetcher`] over a vector of records.
//!
//! [`MemoryFetcher`] filters with a [`RecordFilter`] condition and sorts with
//! [`SortableRecord`] before slicing out the requested range. It backs the
//! CLI and makes the pager easy to exercise without a database.

mod json;

pub use json::FieldRange;

use std::cmp::Ordering;
use std::marker::PhantomData;

use thiserror::Error;

use crate::order::Order;
use crate::pager::{FetchRequest, PageFetchResult, PageFetcher};

/// Decides whether a record matches a fetch condition.
pub trait RecordFilter<R> {
    /// Returns true when `record` should be counted and fetched.
    fn matches(&self, record: &R) -> bool;
}

/// The empty condition matches every record.
impl<R> RecordFilter<R> for () {
    fn matches(&self, _record: &R) -> bool {
        true
    }
}

/// An unset condition matches every record.
impl<R, T> RecordFilter<R> for Option<T>
where
    T: RecordFilter<R>,
{
    fn matches(&self, record: &R) -> bool {
        self.as_ref().is_none_or(|filter| filter.matches(record))
    }
}

/// Records that can be compared column by column.
pub trait SortableRecord {
    /// Compares `self` with `other` on `column` in ascending order.
    fn compare_column(&self, other: &Self, column: &str) -> Ordering;
}

macro_rules! scalar_sortable_record {
    ($($scalar:ty),* $(,)?) => {
        $(
            /// A scalar record is its own single column.
            impl SortableRecord for $scalar {
                fn compare_column(&self, other: &Self, _column: &str) -> Ordering {
                    self.cmp(other)
                }
            }
        )*
    };
}

scalar_sortable_record!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, String);

/// Errors reported by [`MemoryFetcher`].
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum MemoryFetchError {
    /// The requested offset lies past the end of the matching records.
    #[error("offset {offset} is beyond the {available} matching records")]
    OffsetOutOfRange {
        /// Requested zero-based offset.
        offset: usize,
        /// Records matching the condition.
        available: usize,
    },
}

/// Fetcher serving records from memory.
///
/// ```
/// use paging_window::{FetchRequest, MemoryFetcher, PageFetcher};
///
/// let fetcher = MemoryFetcher::<u32, ()>::new(vec![5, 3, 9]);
/// let mut page = Vec::new();
/// fetcher
///     .fetch_page(&(), &FetchRequest::new(2, 1, Vec::new()), &mut page)
///     .expect("fetch should succeed");
/// assert_eq!(page, vec![3, 9]);
/// ```
#[derive(Debug, Clone)]
pub struct MemoryFetcher<R, C> {
    records: Vec<R>,
    condition: PhantomData<fn(&C)>,
}

impl<R, C> MemoryFetcher<R, C> {
    /// Creates a fetcher over `records` in their stored order.
    #[must_use]
    pub const fn new(records: Vec<R>) -> Self {
        Self {
            records,
            condition: PhantomData,
        }
    }
}

impl<R, C> MemoryFetcher<R, C>
where
    C: RecordFilter<R>,
{
    fn matching(&self, condition: &C) -> Vec<&R> {
        self.records
            .iter()
            .filter(|record| condition.matches(record))
            .collect()
    }
}

impl<R, C> PageFetcher for MemoryFetcher<R, C>
where
    R: SortableRecord + Clone,
    C: RecordFilter<R>,
{
    type Condition = C;
    type Record = R;
    type Error = MemoryFetchError;

    fn count(&self, condition: &C) -> Result<usize, MemoryFetchError> {
        Ok(self.matching(condition).len())
    }

    fn fetch_page(
        &self,
        condition: &C,
        request: &FetchRequest,
        result: &mut PageFetchResult<R>,
    ) -> Result<(), MemoryFetchError> {
        let mut matching = self.matching(condition);
        if request.limit > 0 && request.offset > matching.len() {
            return Err(MemoryFetchError::OffsetOutOfRange {
                offset: request.offset,
                available: matching.len(),
            });
        }

        if !request.orders.is_empty() {
            matching.sort_by(|left, right| compare_by_orders(*left, *right, &request.orders));
        }

        result.extend(
            matching
                .into_iter()
                .skip(request.offset)
                .take(request.limit)
                .cloned(),
        );
        Ok(())
    }
}

/// Compares two records on each order in turn until one differs.
fn compare_by_orders<R: SortableRecord>(left: &R, right: &R, orders: &[Order]) -> Ordering {
    orders
        .iter()
        .map(|order| {
            let ordering = left.compare_column(right, order.column_name());
            if order.direction().is_descending() {
                ordering.reverse()
            } else {
                ordering
            }
        })
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
