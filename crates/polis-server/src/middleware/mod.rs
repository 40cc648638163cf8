//! Middleware for `axum::Router` and HTTP request processing.
//!
//! Each concern is an extension trait on the router:
//!
//! - [`RouterRecoveryExt`] catches panics and enforces a request timeout.
//! - [`RouterObservabilityExt`] adds request ids and tracing spans.
//! - [`RouterSecurityExt`] applies CORS, body limits and response headers.
//! - [`RouterOpenApiExt`] serves the OpenAPI document and the Scalar UI.
//!
//! ```rust,no_run
//! use aide::axum::ApiRouter;
//! use axum::Router;
//! use polis_server::middleware::*;
//!
//! let app: Router<()> = ApiRouter::new()
//!     .with_open_api(OpenApiConfig::default())
//!     .with_default_security()
//!     .with_observability()
//!     .with_default_recovery();
//! ```

mod observability;
mod recovery;
mod security;
mod specification;

pub use crate::middleware::observability::RouterObservabilityExt;
pub use crate::middleware::recovery::{RecoveryConfig, RouterRecoveryExt};
pub use crate::middleware::security::{CorsConfig, RouterSecurityExt};
pub use crate::middleware::specification::{OpenApiConfig, RouterOpenApiExt};
