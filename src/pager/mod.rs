//! Windowed pagination over a [`PageFetcher`].
//!
//! A [`Pager`] resolves one page request into at most three fetches: a single
//! batched window covering the active page and its side pages, plus the first
//! and last pages when they fall outside that window. The flat records are
//! then regrouped into named buckets (see [`PagingResponse`]).
//!
//! # Example
//!
//! ```
//! use paging_window::{MemoryFetcher, PageBucket, Setting, get_paging};
//!
//! let fetcher = MemoryFetcher::<u32, ()>::new((1..=11).collect());
//! let paging = get_paging(&fetcher, Setting::new(()).with_limit(2).with_active_page(3))
//!     .expect("paging should succeed");
//!
//! assert_eq!(paging.total_count, 11);
//! assert_eq!(paging.page_count, 6);
//! assert_eq!(paging.response.page(PageBucket::Active), Some(&[5, 6][..]));
//! ```

mod fetcher;
mod response;

pub use fetcher::{FetchRequest, PageFetchResult, PageFetcher};
#[cfg(test)]
pub use fetcher::MockPageFetcher;
pub use response::{PageBucket, Pages, PagingResponse, bucket_name};

use serde::Serialize;

use crate::error::{PagingError, PagingResult};
use crate::order::Order;
use response::ResponseBuilder;

/// Records per page when the caller does not set a limit.
pub const DEFAULT_LIMIT: usize = 10;

/// Pages fetched on each side of the active page.
pub const SIDE_PAGING_COUNT: usize = 2;

/// Caller-supplied paging parameters.
///
/// ```
/// use paging_window::{Order, Setting};
///
/// let setting = Setting::new(())
///     .with_limit(25)
///     .with_active_page(2)
///     .with_orders(vec![Order::ascending("name")]);
/// assert_eq!(setting.limit, Some(25));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Setting<C> {
    /// Records per page. `None` or zero selects [`DEFAULT_LIMIT`].
    pub limit: Option<usize>,
    /// Requested page (1-based). `None` selects page 1.
    pub active_page: Option<i64>,
    /// Filter passed verbatim to the fetcher.
    pub condition: C,
    /// Sort directives passed verbatim to the fetcher.
    pub orders: Vec<Order>,
}

impl<C> Setting<C> {
    /// Creates a setting with default limit and page and no orders.
    #[must_use]
    pub const fn new(condition: C) -> Self {
        Self {
            limit: None,
            active_page: None,
            condition,
            orders: Vec::new(),
        }
    }

    /// Sets the number of records per page.
    #[must_use]
    pub const fn with_limit(mut self, limit: usize) -> Self {
        self.limit = Some(limit);
        self
    }

    /// Sets the requested page.
    #[must_use]
    pub const fn with_active_page(mut self, page: i64) -> Self {
        self.active_page = Some(page);
        self
    }

    /// Sets the sort directives.
    #[must_use]
    pub fn with_orders(mut self, orders: Vec<Order>) -> Self {
        self.orders = orders;
        self
    }
}

impl<C: Default> Default for Setting<C> {
    fn default() -> Self {
        Self::new(C::default())
    }
}

/// Outcome of [`get_paging`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Paging<R> {
    /// Records matching the condition.
    pub total_count: usize,
    /// Pages available at the requested limit.
    pub page_count: usize,
    /// Records grouped into buckets.
    #[serde(flatten)]
    pub response: PagingResponse<R>,
}

/// Builds a pager for `setting` and resolves its page window.
///
/// # Errors
///
/// Returns [`PagingError::InvalidPage`] when the requested page is below 1,
/// [`PagingError::PageOutOfRange`] when it exceeds the page count, and
/// [`PagingError::Fetch`] with the fetcher's error when any fetch fails.
pub fn get_paging<F>(
    fetcher: &F,
    setting: Setting<F::Condition>,
) -> PagingResult<Paging<F::Record>, F::Error>
where
    F: PageFetcher,
    F::Record: Clone,
{
    let mut pager = Pager::new(fetcher, setting)?;
    let response = pager.get_pages()?;
    Ok(Paging {
        total_count: pager.total_count(),
        page_count: pager.page_count(),
        response,
    })
}

/// Pagination state for a single request.
///
/// A pager is built per request, resolved once with [`Pager::get_pages`] and
/// then dropped.
pub struct Pager<'fetcher, F>
where
    F: PageFetcher,
{
    limit: usize,
    page: usize,
    side_paging_count: usize,
    total_count: usize,
    condition: F::Condition,
    orders: Vec<Order>,
    fetcher: &'fetcher F,
}

impl<'fetcher, F> Pager<'fetcher, F>
where
    F: PageFetcher,
{
    /// Creates a pager from `setting`.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::InvalidPage`] when `setting.active_page` is
    /// below 1.
    pub fn new(
        fetcher: &'fetcher F,
        setting: Setting<F::Condition>,
    ) -> PagingResult<Self, F::Error> {
        let page = match setting.active_page {
            None => 1,
            Some(page) => usize::try_from(page)
                .ok()
                .filter(|index| *index >= 1)
                .ok_or(PagingError::<F::Error>::InvalidPage { page })?,
        };

        let limit = setting
            .limit
            .filter(|limit| *limit > 0)
            .unwrap_or(DEFAULT_LIMIT);

        Ok(Self {
            limit,
            page,
            side_paging_count: SIDE_PAGING_COUNT,
            total_count: 0,
            condition: setting.condition,
            orders: setting.orders,
            fetcher,
        })
    }

    /// Returns the number of records per page.
    #[must_use]
    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Returns the requested page (1-based).
    #[must_use]
    pub const fn page(&self) -> usize {
        self.page
    }

    /// Returns the number of matching records; zero until fetched.
    #[must_use]
    pub const fn total_count(&self) -> usize {
        self.total_count
    }

    /// Returns the zero-based index of the active page.
    #[must_use]
    pub const fn active_page_index(&self) -> usize {
        self.page.saturating_sub(1)
    }

    /// Returns the zero-based index of the final page.
    ///
    /// Zero both for an empty result set and for a single page.
    #[must_use]
    pub fn last_page_index(&self) -> usize {
        if self.total_count < 1 {
            return 0;
        }
        (self.total_count - 1).checked_div(self.limit).unwrap_or(0)
    }

    /// Returns the zero-based index of the first page in the fetch window.
    ///
    /// The window is centred on the active page, slides right near page 1 and
    /// stays anchored to the last page near the end of the result set.
    #[must_use]
    pub fn start_page_index(&self) -> usize {
        let last_page_index = self.last_page_index();
        let window_end = self.active_page_index() + self.side_paging_count;

        if window_end > last_page_index {
            last_page_index.saturating_sub(self.window_span())
        } else {
            self.active_page_index().saturating_sub(self.side_paging_count)
        }
    }

    /// Returns `(limit, offset)` of the batched window fetch.
    #[must_use]
    pub fn active_and_sides_limit(&self) -> (usize, usize) {
        let mut offset = self.start_page_index().saturating_mul(self.limit);
        if offset > self.total_count {
            offset = self.total_count.saturating_sub(1);
        }

        let limit = (self.window_span() + 1)
            .saturating_mul(self.limit)
            .min(self.total_count);

        (limit, offset)
    }

    /// Returns the number of pages at the current limit.
    #[must_use]
    pub const fn page_count(&self) -> usize {
        if self.limit == 0 {
            return 0;
        }
        self.total_count.div_ceil(self.limit)
    }

    /// Counts, fetches and assembles the paging response.
    ///
    /// # Errors
    ///
    /// Returns [`PagingError::PageOutOfRange`] when the active page exceeds
    /// the page count, or [`PagingError::Fetch`] with the fetcher's error
    /// when any count or fetch call fails.
    pub fn get_pages(&mut self) -> PagingResult<PagingResponse<F::Record>, F::Error>
    where
        F::Record: Clone,
    {
        self.total_count = self
            .fetcher
            .count(&self.condition)
            .map_err(PagingError::Fetch)?;

        let page_count = self.page_count();
        tracing::debug!(
            total_count = self.total_count,
            page_count,
            page = self.page,
            "counted records"
        );

        if page_count == 0 {
            return Ok(self.format_response(Vec::new(), &[], Vec::new()));
        }
        if self.page > page_count {
            return Err(PagingError::PageOutOfRange {
                page: self.page,
                page_count,
            });
        }

        let (limit, offset) = self.active_and_sides_limit();
        let active_and_sides = self.fetch(limit, offset)?;

        let start_page_index = self.start_page_index();
        let first = if start_page_index > 0 {
            self.fetch(self.limit, 0)?
        } else {
            Vec::new()
        };

        let last_page_index = self.last_page_index();
        let last = if start_page_index + self.window_span() < last_page_index {
            self.fetch(self.limit, last_page_index.saturating_mul(self.limit))?
        } else {
            Vec::new()
        };

        Ok(self.format_response(first, &active_and_sides, last))
    }

    fn fetch(
        &self,
        limit: usize,
        offset: usize,
    ) -> PagingResult<PageFetchResult<F::Record>, F::Error> {
        tracing::trace!(limit, offset, "fetching page range");
        let request = FetchRequest::new(limit, offset, self.orders.clone());
        let mut result = PageFetchResult::with_capacity(limit);
        self.fetcher
            .fetch_page(&self.condition, &request, &mut result)
            .map_err(PagingError::Fetch)?;
        Ok(result)
    }

    /// Pages after the first one in a full window.
    const fn window_span(&self) -> usize {
        self.side_paging_count * 2
    }

    /// Regroups the window records into named buckets.
    ///
    /// `first` and `last` hold the separately fetched edge pages; when the
    /// window itself covers page 1 or the final page, those records are
    /// appended to them.
    fn format_response(
        &self,
        first: PageFetchResult<F::Record>,
        active_and_sides: &[F::Record],
        last: PageFetchResult<F::Record>,
    ) -> PagingResponse<F::Record>
    where
        F::Record: Clone,
    {
        let mut builder = ResponseBuilder::new(first, last, self.window_span());
        let first_page = self.start_page_index() + 1;
        let last_page = self.last_page_index() + 1;

        for (position, records) in active_and_sides.chunks(self.limit.max(1)).enumerate() {
            let page = first_page + position;

            if page == self.page {
                builder.push_active(records);
            } else {
                builder.push_side(records);
            }
            if page == 1 {
                builder.push_first(records);
            }
            if page == last_page {
                builder.push_last(records);
            }
        }

        builder.build()
    }
}
