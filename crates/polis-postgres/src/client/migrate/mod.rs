//! Embedded schema migrations.
//!
//! Migrations live in the crate's `migrations/` directory and are compiled
//! into the binary. [`PgClientMigrationExt`] applies them through the pool.

mod client_ext;
mod custom_hooks;
mod migrate_result;
mod run_migration;
mod run_utility;

pub use client_ext::PgClientMigrationExt;
pub use migrate_result::{MigrationResult, MigrationStatus};
pub use run_migration::run_pending_migrations;
pub use run_utility::{get_applied_migrations, get_migration_status, verify_schema_integrity};
