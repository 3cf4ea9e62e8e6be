//! Error types surfaced by the pager.

use thiserror::Error;

/// Errors raised while building a pager or assembling a paging response.
///
/// `E` is the error type of the [`crate::PageFetcher`] in use. Fetch failures
/// are carried unchanged in [`PagingError::Fetch`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum PagingError<E> {
    /// The requested page was below 1.
    #[error("page must be >= 1, got {page}")]
    InvalidPage {
        /// The rejected page number.
        page: i64,
    },

    /// The requested page lies beyond the last page of the result set.
    #[error("page {page} is out of range. page range is 1-{page_count}")]
    PageOutOfRange {
        /// The rejected page number.
        page: usize,
        /// Number of pages available under the current condition.
        page_count: usize,
    },

    /// The fetcher failed while counting or fetching records.
    #[error(transparent)]
    Fetch(E),
}

impl<E> PagingError<E> {
    /// Returns the fetcher error when this is [`PagingError::Fetch`].
    #[must_use]
    pub const fn fetch_error(&self) -> Option<&E> {
        match self {
            Self::Fetch(error) => Some(error),
            Self::InvalidPage { .. } | Self::PageOutOfRange { .. } => None,
        }
    }
}

/// Result type for paging operations over a fetcher with error `E`.
pub type PagingResult<T, E> = Result<T, PagingError<E>>;
