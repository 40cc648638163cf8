//! Database error to HTTP error conversion.

use polis_postgres::PgError;
use polis_postgres::types::{ConstraintCategory, ConstraintViolation, InsuranceInfoConstraints};

use crate::handler::{Error, ErrorKind};

/// Tracing target for database error conversion.
const TRACING_TARGET: &str = "polis_server::handler::postgres";

impl From<ConstraintViolation> for Error<'static> {
    fn from(constraint: ConstraintViolation) -> Self {
        let error = match constraint.categorize() {
            ConstraintCategory::Reference => match constraint {
                ConstraintViolation::InsuranceInfo(InsuranceInfoConstraints::UserIdFkey) => {
                    ErrorKind::NotFound.with_message("User not found")
                }
                _ => ErrorKind::NotFound.into_error(),
            },
            ConstraintCategory::Validation => {
                ErrorKind::BadRequest.with_message("A field value failed validation")
            }
            ConstraintCategory::Chronological => ErrorKind::BadRequest
                .with_message("The insurance period must not end before it starts"),
        };

        error
            .with_resource(constraint.table_name())
            .with_context(format!("constraint: {constraint}"))
    }
}

impl From<PgError> for Error<'static> {
    fn from(error: PgError) -> Self {
        match error {
            PgError::Config(config_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %config_error,
                    "database configuration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Timeout(timeout) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    timeout = ?timeout,
                    "database timeout",
                );
                ErrorKind::ServiceUnavailable.with_message("Database is temporarily unavailable")
            }
            PgError::Connection(connection_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %connection_error,
                    "database connection error"
                );
                ErrorKind::ServiceUnavailable.with_message("Database is temporarily unavailable")
            }
            PgError::Migration(migration_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %migration_error,
                    "database migration error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Query(ref query_error) => {
                if let Some(constraint) = error.constraint_violation() {
                    tracing::warn!(
                        target: TRACING_TARGET,
                        %constraint,
                        error = %query_error,
                        "query rejected by constraint"
                    );
                    return constraint.into();
                }

                if error.is_not_found() {
                    return ErrorKind::NotFound.into_error();
                }

                tracing::error!(
                    target: TRACING_TARGET,
                    error = %query_error,
                    "query error"
                );
                ErrorKind::InternalServerError.into_error()
            }
            PgError::Unexpected(unexpected_error) => {
                tracing::error!(
                    target: TRACING_TARGET,
                    error = %unexpected_error,
                    "unexpected database error"
                );
                ErrorKind::InternalServerError.into_error()
            }
        }
    }
}
