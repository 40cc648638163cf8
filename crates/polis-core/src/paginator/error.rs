//! Errors produced while validating page requests.

/// Failure modes of [`Paginator`] and [`Page`] navigation.
///
/// [`Paginator`]: super::Paginator
/// [`Page`]: super::Page
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum PaginatorError {
    /// The requested page number is below 1.
    #[error("Page number {number} is less than 1")]
    PageUnderflow {
        /// Requested page number.
        number: i64,
    },

    /// The requested page number is past the last page.
    ///
    /// An empty collection has zero pages, so every request lands here.
    #[error("Page {number} contains no results (page count is {page_count})")]
    PageOutOfRange {
        /// Requested page number.
        number: i64,
        /// Number of pages available.
        page_count: usize,
    },

    /// A paginator was requested with a page size of zero.
    #[error("Page size must be at least 1")]
    InvalidPageSize,
}

impl PaginatorError {
    /// Returns whether the error means the requested page holds no results.
    ///
    /// This is true for both [`PageUnderflow`] and [`PageOutOfRange`].
    ///
    /// [`PageUnderflow`]: PaginatorError::PageUnderflow
    /// [`PageOutOfRange`]: PaginatorError::PageOutOfRange
    #[inline]
    pub fn is_empty_page(&self) -> bool {
        matches!(
            self,
            Self::PageUnderflow { .. } | Self::PageOutOfRange { .. }
        )
    }
}

/// Specialized [`Result`] type for pagination.
pub type PaginatorResult<T, E = PaginatorError> = Result<T, E>;
