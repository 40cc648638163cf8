#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Tracing target for pagination operations.
pub const TRACING_TARGET_PAGINATOR: &str = "polis_core::paginator";

pub mod paginator;

pub use paginator::{Page, PaginatedData, Paginator, PaginatorError, PaginatorResult};
