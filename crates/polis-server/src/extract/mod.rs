//! Request extractors with JSON error responses.
//!
//! - [`Json`], [`Path`] and [`Query`] replace their `axum` counterparts and
//!   turn rejections into [`handler::Error`] responses.
//! - [`ValidateJson`] and [`ValidateQuery`] additionally run `validator`
//!   rules before the handler is called.
//! - [`PgPool`] checks out a database connection.
//!
//! [`handler::Error`]: crate::handler::Error

mod pg_connection;
pub mod reject;

pub use crate::extract::pg_connection::PgPool;
pub use crate::extract::reject::{Json, Path, Query, ValidateJson, ValidateQuery};
