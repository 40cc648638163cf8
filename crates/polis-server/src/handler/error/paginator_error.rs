//! Pagination error to HTTP error conversion.

use polis_core::PaginatorError;

use crate::handler::{Error, ErrorKind};

impl From<PaginatorError> for Error<'static> {
    fn from(error: PaginatorError) -> Self {
        match error {
            PaginatorError::PageUnderflow { .. } | PaginatorError::PageOutOfRange { .. } => {
                ErrorKind::NotFound
                    .with_message("This page contains no results")
                    .with_context(error.to_string())
            }
            PaginatorError::InvalidPageSize => ErrorKind::BadRequest
                .with_message("Page size must be at least 1")
                .with_resource("limit"),
        }
    }
}
