use polis_postgres::PgClient;

use crate::service::{Result, ServiceConfig, TRACING_TARGET};

/// Application state.
///
/// Used for the [`State`] extraction (dependency injection).
///
/// [`State`]: axum::extract::State
#[must_use = "state does nothing unless you use it"]
#[derive(Debug, Clone)]
pub struct ServiceState {
    pub postgres: PgClient,
    pub config: ServiceConfig,
}

impl ServiceState {
    /// Creates the state from an already built client.
    pub fn new(config: ServiceConfig, postgres: PgClient) -> Self {
        Self { postgres, config }
    }

    /// Initializes application state from configuration.
    ///
    /// Connects to Postgres and applies pending migrations.
    pub async fn from_config(config: ServiceConfig) -> Result<Self> {
        let postgres = config.connect_postgres().await?;

        tracing::info!(
            target: TRACING_TARGET,
            database_url = %config.postgres.database_url_masked(),
            "Service state initialized"
        );

        Ok(Self::new(config, postgres))
    }
}

macro_rules! impl_di {
    ($($f:ident: $t:ty),+) => {$(
        impl axum::extract::FromRef<ServiceState> for $t {
            fn from_ref(state: &ServiceState) -> Self {
                state.$f.clone()
            }
        }
    )+};
}

impl_di!(postgres: PgClient);
impl_di!(config: ServiceConfig);
