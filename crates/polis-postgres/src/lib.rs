#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]
#![doc = include_str!("../README.md")]

/// Embeds all migrations into the final binary.
pub(crate) const MIGRATIONS: diesel_migrations::EmbeddedMigrations =
    diesel_migrations::embed_migrations!();

// Tracing target constants for consistent logging.

/// Tracing target for client initialization, configuration and lifecycle events.
pub const TRACING_TARGET_CLIENT: &str = "polis_postgres::client";

/// Tracing target for repository queries.
pub const TRACING_TARGET_QUERY: &str = "polis_postgres::query";

/// Tracing target for migration application and status checks.
pub const TRACING_TARGET_MIGRATION: &str = "polis_postgres::migrations";

/// Tracing target for connection establishment and pool management.
pub const TRACING_TARGET_CONNECTION: &str = "polis_postgres::connection";

mod client;
mod error;
pub mod model;
pub mod query;
mod schema;
pub mod types;

pub use diesel_async::AsyncPgConnection as PgConnection;

pub use crate::client::{
    ConnectionPool, MigrationResult, MigrationStatus, PgClient, PgClientMigrationExt, PgConfig,
    PgConn, PgPoolStatus, PgUrlParts, PooledConnection, get_applied_migrations,
    get_migration_status, run_pending_migrations, verify_schema_integrity,
};
pub use crate::error::{BoxError, PgError, PgResult};
