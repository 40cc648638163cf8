//! Hooks that run around migration execution.

use diesel_async::AsyncPgConnection;
use diesel_async::pooled_connection::PoolableConnection;

use crate::{PgError, PgResult, TRACING_TARGET_MIGRATION};

/// Refuses to migrate over a connection that is already broken.
pub async fn pre_migrate(conn: &mut AsyncPgConnection) -> PgResult<()> {
    if conn.is_broken() {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            hook = "pre_migrate",
            "Connection is broken before migrations"
        );
        return Err(PgError::Migration(
            "connection is broken before migrations".into(),
        ));
    }

    tracing::debug!(target: TRACING_TARGET_MIGRATION, hook = "pre_migrate", "Connection ready for migrations");
    Ok(())
}

/// Logs the connection state after migrations ran.
pub async fn post_migrate(conn: &mut AsyncPgConnection) -> PgResult<()> {
    let is_broken = conn.is_broken();
    if is_broken {
        tracing::warn!(
            target: TRACING_TARGET_MIGRATION,
            hook = "post_migrate",
            "Connection is broken after migrations"
        );
    }

    tracing::debug!(target: TRACING_TARGET_MIGRATION, hook = "post_migrate", is_broken, "Migrations finished");
    Ok(())
}
