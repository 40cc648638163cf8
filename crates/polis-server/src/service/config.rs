//! App [`state`] configuration.
//!
//! [`state`]: crate::service::ServiceState

#[cfg(feature = "config")]
use clap::Args;
use polis_postgres::{PgClient, PgClientMigrationExt, PgConfig};
use serde::{Deserialize, Serialize};

use crate::service::{Result, ServiceError, TRACING_TARGET};

/// Configuration of the services held by [`ServiceState`].
///
/// [`ServiceState`]: crate::service::ServiceState
#[derive(Debug, Clone, Serialize, Deserialize)]
#[cfg_attr(feature = "config", derive(Args))]
#[must_use = "config does nothing unless you use it"]
pub struct ServiceConfig {
    #[cfg_attr(feature = "config", command(flatten))]
    pub postgres: PgConfig,

    /// Skip applying pending migrations on startup.
    #[cfg_attr(
        feature = "config",
        arg(long, env = "SKIP_MIGRATIONS", default_value_t = false)
    )]
    pub skip_migrations: bool,
}

impl ServiceConfig {
    /// Creates a configuration that applies migrations on startup.
    pub fn new(postgres: PgConfig) -> Self {
        Self {
            postgres,
            skip_migrations: false,
        }
    }

    pub fn with_skip_migrations(mut self, skip_migrations: bool) -> Self {
        self.skip_migrations = skip_migrations;
        self
    }

    /// Validates every nested configuration.
    pub fn validate(&self) -> Result<()> {
        self.postgres.validate().map_err(ServiceError::from)
    }

    /// Creates the Postgres client and applies pending migrations.
    pub async fn connect_postgres(&self) -> Result<PgClient> {
        self.validate()?;

        let pg_client = PgClient::new(self.postgres.clone()).map_err(|e| {
            ServiceError::internal("postgres", "Failed to create database client").with_source(e)
        })?;

        if self.skip_migrations {
            tracing::warn!(target: TRACING_TARGET, "Skipping database migrations");
            return Ok(pg_client);
        }

        let result = pg_client.run_pending_migrations().await.map_err(|e| {
            ServiceError::external("postgres", "Failed to apply database migrations")
                .with_source(e)
        })?;

        tracing::info!(
            target: TRACING_TARGET,
            applied = result.processed_versions.len(),
            duration_ms = result.duration.as_millis() as u64,
            "Database migrations applied"
        );

        Ok(pg_client)
    }
}
