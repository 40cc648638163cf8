//! Page-number pagination over in-memory record slices.
//!
//! The caller runs its query, collects the rows, and hands the resulting slice
//! to a [`Paginator`]. The paginator never sorts or filters: the order of the
//! slice is the order of the pages.

mod error;
mod page;
mod paginate;
mod summary;

pub use error::{PaginatorError, PaginatorResult};
pub use page::Page;
pub use paginate::Paginator;
pub use summary::PaginatedData;
