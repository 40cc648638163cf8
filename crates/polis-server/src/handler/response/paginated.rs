//! Paginated response envelope.

use polis_core::{Page, PaginatedData, Paginator};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::handler::request::Pagination;
use crate::handler::{Error, Result};

/// One page of a listing with its pagination metadata.
///
/// Serializes as `{ "total", "total_pages", "current_page", "data" }`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[schemars(rename = "{T}Page")]
pub struct Paginated<T> {
    #[serde(flatten)]
    pub page: PaginatedData,
    /// Records on the requested page.
    pub data: Vec<T>,
}

impl<T> Paginated<T> {
    /// Builds the envelope from a [`Page`], mapping each record with `f`.
    pub fn from_page<M, F>(page: &Page<'_, M>, f: F) -> Self
    where
        M: Clone,
        F: FnMut(M) -> T,
    {
        Self {
            page: PaginatedData::from(page),
            data: page.iter().cloned().map(f).collect(),
        }
    }

    /// Pages through the rows of a listing query.
    ///
    /// No rows at all fails with `empty()`, before any page is selected. A
    /// page number outside the listing fails with 404 "This page contains no
    /// results".
    pub fn from_rows<M, F>(
        rows: &[M],
        pagination: &Pagination,
        empty: impl FnOnce() -> Error<'static>,
        f: F,
    ) -> Result<Self>
    where
        M: Clone,
        F: FnMut(M) -> T,
    {
        if rows.is_empty() {
            return Err(empty());
        }

        let paginator = Paginator::new(rows, pagination.limit())?;
        let page = paginator.page(pagination.page())?;

        Ok(Self::from_page(&page, f))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::ErrorKind;

    fn users_not_found() -> Error<'static> {
        ErrorKind::NotFound.with_message("Users not found")
    }

    #[test]
    fn envelope_shape() {
        let rows: Vec<i64> = (1..=25).collect();
        let paginator = Paginator::new(&rows, 10).unwrap();
        let page = paginator.page(3).unwrap();

        let envelope = Paginated::from_page(&page, |id| id * 10);
        let value = serde_json::to_value(&envelope).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "total": 25,
                "total_pages": 3,
                "current_page": 3,
                "data": [210, 220, 230, 240, 250],
            })
        );
    }

    #[test]
    fn empty_rows_fail_before_paging() {
        let rows: Vec<i64> = Vec::new();

        // Page 1 would be out of range on its own, the empty check wins.
        let error = Paginated::from_rows(&rows, &Pagination::default(), users_not_found, |id| id)
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.message(), Some("Users not found"));
    }

    #[test]
    fn page_past_the_end_has_no_results() {
        let rows: Vec<i64> = (1..=25).collect();

        let error = Paginated::from_rows(&rows, &Pagination::new(10, 4), users_not_found, |id| id)
            .unwrap_err();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.message(), Some("This page contains no results"));

        let error = Paginated::from_rows(&rows, &Pagination::new(10, 0), users_not_found, |id| id)
            .unwrap_err();
        assert_eq!(error.message(), Some("This page contains no results"));
    }

    #[test]
    fn last_page_echoes_requested_number() {
        let rows: Vec<i64> = (1..=25).collect();

        let envelope =
            Paginated::from_rows(&rows, &Pagination::new(10, 3), users_not_found, |id| id).unwrap();
        assert_eq!(envelope.page.total, 25);
        assert_eq!(envelope.page.total_pages, 3);
        assert_eq!(envelope.page.current_page, 3);
        assert_eq!(envelope.data, vec![21, 22, 23, 24, 25]);
    }
}
