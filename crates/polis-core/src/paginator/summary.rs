#[cfg(feature = "schema")]
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::Page;

/// Pagination metadata describing one page of a listing.
///
/// Serializes as `{ "total", "total_pages", "current_page" }`, which response
/// envelopes flatten next to the page records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "schema", derive(JsonSchema))]
pub struct PaginatedData {
    /// Number of records across all pages.
    pub total: usize,
    /// Number of pages.
    pub total_pages: usize,
    /// Number of the returned page.
    pub current_page: usize,
}

impl<T> From<&Page<'_, T>> for PaginatedData {
    fn from(page: &Page<'_, T>) -> Self {
        let paginator = page.paginator();
        Self {
            total: paginator.total_count(),
            total_pages: paginator.page_count(),
            current_page: page.number(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Paginator;

    #[test]
    fn summary_from_page() {
        let items: Vec<u32> = (0..25).collect();
        let paginator = Paginator::new(&items, 10).unwrap();
        let page = paginator.page(3).unwrap();

        let summary = PaginatedData::from(&page);
        assert_eq!(
            summary,
            PaginatedData {
                total: 25,
                total_pages: 3,
                current_page: 3,
            }
        );
    }

    #[test]
    fn summary_field_names() {
        let summary = PaginatedData {
            total: 1,
            total_pages: 1,
            current_page: 1,
        };
        let value = serde_json::to_value(summary).unwrap();
        assert_eq!(
            value,
            serde_json::json!({ "total": 1, "total_pages": 1, "current_page": 1 })
        );
    }
}
