use std::ops::DerefMut;
use std::time::Instant;

use diesel_async::async_connection_wrapper::AsyncConnectionWrapper;
use diesel_migrations::MigrationHarness;
use tokio::task::spawn_blocking;

use super::{MigrationResult, custom_hooks, get_migration_status};
use crate::{MIGRATIONS, PgClient, PgError, PgResult, TRACING_TARGET_MIGRATION};

/// Applies every pending embedded migration.
///
/// Diesel's migration harness is synchronous, so the migrations run on a
/// blocking thread over a wrapped pooled connection.
#[tracing::instrument(skip(pg), target = TRACING_TARGET_MIGRATION)]
pub async fn run_pending_migrations(pg: &PgClient) -> PgResult<MigrationResult> {
    let start_time = Instant::now();
    let mut conn = pg.get_pooled_connection().await?;

    let status = get_migration_status(&mut conn).await?;
    if status.is_up_to_date() {
        tracing::info!(
            target: TRACING_TARGET_MIGRATION,
            applied_count = status.applied_migrations(),
            "Database schema is up to date"
        );
        return Ok(MigrationResult::new(start_time.elapsed(), Vec::new()));
    }

    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        pending_count = status.pending_migrations(),
        next_version = status.next_pending_version(),
        "Applying pending migrations"
    );

    custom_hooks::pre_migrate(&mut conn).await?;

    let mut wrapper: AsyncConnectionWrapper<_> = conn.into();
    let (outcome, mut wrapper) = spawn_blocking(move || {
        let outcome = wrapper
            .run_pending_migrations(MIGRATIONS)
            .map(|versions| versions.iter().map(ToString::to_string).collect::<Vec<_>>());
        (outcome, wrapper)
    })
    .await
    .map_err(|error| {
        tracing::error!(target: TRACING_TARGET_MIGRATION, %error, "Migration task panicked");
        PgError::Migration(error.into())
    })?;

    custom_hooks::post_migrate(wrapper.deref_mut()).await?;

    let duration = start_time.elapsed();
    let versions = outcome.map_err(|error| {
        tracing::error!(
            target: TRACING_TARGET_MIGRATION,
            duration = ?duration,
            %error,
            "Database migration failed"
        );
        PgError::Migration(error)
    })?;

    tracing::info!(
        target: TRACING_TARGET_MIGRATION,
        duration = ?duration,
        migrations_count = versions.len(),
        "Database migrations applied"
    );

    Ok(MigrationResult::new(duration, versions))
}
