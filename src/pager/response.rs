//! Named page buckets returned by the pager.

use std::borrow::Cow;
use std::collections::BTreeMap;

use serde::Serialize;

use super::fetcher::PageFetchResult;

/// Named slot in a paging response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PageBucket {
    /// The page the caller asked for.
    Active,
    /// Page 1.
    First,
    /// The final page.
    Last,
    /// A neighbouring page, by position in page order.
    ///
    /// Pages before the active page take the lowest positions.
    Side(usize),
}

impl PageBucket {
    /// Returns the response key for this bucket.
    #[must_use]
    pub fn name(&self) -> Cow<'static, str> {
        match self {
            Self::Active => Cow::Borrowed("active"),
            Self::First => Cow::Borrowed("first"),
            Self::Last => Cow::Borrowed("last"),
            Self::Side(index) => bucket_name(*index),
        }
    }
}

/// Returns the response key of the side bucket at `index`.
///
/// The four canonical side buckets have names; positions beyond them fall
/// back to their decimal index.
///
/// ```
/// use paging_window::bucket_name;
///
/// assert_eq!(bucket_name(1), "before_near");
/// assert_eq!(bucket_name(4), "4");
/// ```
#[must_use]
pub fn bucket_name(index: usize) -> Cow<'static, str> {
    match index {
        0 => Cow::Borrowed("before_distant"),
        1 => Cow::Borrowed("before_near"),
        2 => Cow::Borrowed("after_near"),
        3 => Cow::Borrowed("after_distant"),
        other => Cow::Owned(other.to_string()),
    }
}

/// Bucket name to records mapping.
///
/// A `None` value marks a bucket with no page behind it; `Some(vec![])` marks
/// a bucket that was fetched but matched nothing.
pub type Pages<R> = BTreeMap<String, Option<PageFetchResult<R>>>;

/// Records grouped into named page buckets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PagingResponse<R> {
    pages: Pages<R>,
}

impl<R> PagingResponse<R> {
    pub(crate) const fn new(pages: Pages<R>) -> Self {
        Self { pages }
    }

    /// Returns every bucket, including absent ones.
    #[must_use]
    pub const fn pages(&self) -> &Pages<R> {
        &self.pages
    }

    /// Returns the records in `bucket`, or `None` when the bucket is absent.
    #[must_use]
    pub fn page(&self, bucket: PageBucket) -> Option<&[R]> {
        self.pages
            .get(bucket.name().as_ref())
            .and_then(Option::as_deref)
    }

    /// Returns true when `bucket` is present in the response, even if empty.
    #[must_use]
    pub fn is_present(&self, bucket: PageBucket) -> bool {
        self.page(bucket).is_some()
    }
}

/// Accumulates fetched records into buckets.
pub(crate) struct ResponseBuilder<R> {
    active: PageFetchResult<R>,
    first: PageFetchResult<R>,
    last: PageFetchResult<R>,
    sides: Vec<Option<PageFetchResult<R>>>,
    next_side: usize,
}

impl<R: Clone> ResponseBuilder<R> {
    /// Seeds the builder with separately fetched first and last pages.
    pub(crate) fn new(
        first: PageFetchResult<R>,
        last: PageFetchResult<R>,
        side_bucket_count: usize,
    ) -> Self {
        let mut sides = Vec::with_capacity(side_bucket_count);
        sides.resize_with(side_bucket_count, || None);
        Self {
            active: PageFetchResult::new(),
            first,
            last,
            sides,
            next_side: 0,
        }
    }

    /// Appends the records of the active page.
    pub(crate) fn push_active(&mut self, records: &[R]) {
        self.active.extend_from_slice(records);
    }

    /// Appends the records of a non-active page to the next side bucket.
    pub(crate) fn push_side(&mut self, records: &[R]) {
        let Some(slot) = self.sides.get_mut(self.next_side) else {
            tracing::trace!(
                "dropping {} records beyond the side buckets",
                records.len()
            );
            return;
        };
        slot.get_or_insert_with(PageFetchResult::new)
            .extend_from_slice(records);
        if !records.is_empty() {
            self.next_side += 1;
        }
    }

    /// Appends records that belong to page 1.
    pub(crate) fn push_first(&mut self, records: &[R]) {
        self.first.extend_from_slice(records);
    }

    /// Appends records that belong to the final page.
    pub(crate) fn push_last(&mut self, records: &[R]) {
        self.last.extend_from_slice(records);
    }

    /// Names every bucket and produces the response.
    pub(crate) fn build(self) -> PagingResponse<R> {
        let mut pages = Pages::new();
        pages.insert(PageBucket::Active.name().into_owned(), Some(self.active));
        pages.insert(PageBucket::First.name().into_owned(), Some(self.first));
        pages.insert(PageBucket::Last.name().into_owned(), Some(self.last));

        for (index, side) in self.sides.into_iter().enumerate() {
            pages.insert(bucket_name(index).into_owned(), side);
        }

        PagingResponse::new(pages)
    }
}
