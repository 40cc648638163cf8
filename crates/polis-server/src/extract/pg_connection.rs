//! PostgreSQL connection extractor for request handlers.

use axum::extract::{FromRef, FromRequestParts};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut};
use polis_postgres::{PgClient, PgConn};

use crate::handler::{Error, ErrorKind};

/// Tracing target for connection checkout.
const TRACING_TARGET: &str = "polis_server::extract::postgres";

/// Extractor that checks out a [`PgConn`] from the pool.
///
/// Place it after path and query extractors so malformed requests are
/// rejected before a connection is taken.
///
/// ```rust
/// use polis_server::extract::PgPool;
///
/// async fn handler(PgPool(conn): PgPool) {
///     // Use conn with repository traits
/// }
/// ```
#[derive(Debug, Deref, DerefMut)]
pub struct PgPool(pub PgConn);

impl<S> FromRequestParts<S> for PgPool
where
    PgClient: FromRef<S>,
    S: Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(_parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let pg_client = PgClient::from_ref(state);
        let conn = pg_client.get_connection().await.map_err(|e| {
            tracing::error!(target: TRACING_TARGET, error = %e, "Failed to acquire database connection");
            ErrorKind::ServiceUnavailable
                .with_message("Database connection unavailable")
                .with_resource("postgres")
        })?;

        Ok(PgPool(conn))
    }
}

impl aide::OperationInput for PgPool {}
