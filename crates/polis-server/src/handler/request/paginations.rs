//! Page selection parameters for paginated listings.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

/// Page size and page number of a paginated listing.
#[must_use]
#[derive(Debug, Default, Clone, Copy, Serialize, Deserialize, JsonSchema, Validate)]
pub struct Pagination {
    /// Records per page (1-1000, default 10).
    #[validate(range(min = 1, max = 1000))]
    pub limit: Option<usize>,
    /// 1-based page number (default 1).
    pub page: Option<i64>,
}

impl Pagination {
    /// Default page size.
    const DEFAULT_LIMIT: usize = 10;
    /// Default page number.
    const DEFAULT_PAGE: i64 = 1;

    #[inline]
    pub fn new(limit: usize, page: i64) -> Self {
        Self {
            limit: Some(limit),
            page: Some(page),
        }
    }

    /// Returns the page size.
    #[inline]
    pub fn limit(&self) -> usize {
        self.limit.unwrap_or(Self::DEFAULT_LIMIT)
    }

    /// Returns the requested page number.
    #[inline]
    pub fn page(&self) -> i64 {
        self.page.unwrap_or(Self::DEFAULT_PAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let pagination = Pagination::default();
        assert_eq!(pagination.limit(), 10);
        assert_eq!(pagination.page(), 1);

        let pagination = Pagination::new(25, 3);
        assert_eq!(pagination.limit(), 25);
        assert_eq!(pagination.page(), 3);
    }

    #[test]
    fn limit_bounds() {
        assert!(Pagination::new(0, 1).validate().is_err());
        assert!(Pagination::new(1001, 1).validate().is_err());
        assert!(Pagination::new(1, -5).validate().is_ok());
    }
}
