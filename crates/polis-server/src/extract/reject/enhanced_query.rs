//! Query string extractor with JSON error responses.

use axum::extract::rejection::QueryRejection;
use axum::extract::{FromRequestParts, Query as AxumQuery};
use axum::http::request::Parts;
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;

use crate::handler::{Error, ErrorKind};

/// Tracing target for query string parsing.
const TRACING_TARGET: &str = "polis_server::extract::query";

/// Replacement for [`axum::extract::Query`] whose rejections are [`Error`]s.
///
/// ```rust,no_run
/// use polis_server::extract::Query;
/// use serde::Deserialize;
///
/// #[derive(Deserialize)]
/// struct Listing {
///     phone_number: Option<String>,
///     limit: Option<usize>,
/// }
///
/// // Route: /users/get_all?phone_number=89991234567&limit=20
/// async fn list(Query(params): Query<Listing>) {
///     let _ = (params.phone_number, params.limit);
/// }
/// ```
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct Query<T>(pub T);

impl<T> Query<T> {
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequestParts<S> for Query<T>
where
    T: DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match AxumQuery::<T>::from_request_parts(parts, state).await {
            Ok(AxumQuery(query)) => Ok(Query(query)),
            Err(rejection) => Err(rejection.into()),
        }
    }
}

impl From<QueryRejection> for Error<'static> {
    fn from(rejection: QueryRejection) -> Self {
        tracing::debug!(
            target: TRACING_TARGET,
            error = %rejection,
            "Query parameter parsing failed"
        );

        match rejection {
            QueryRejection::FailedToDeserializeQueryString(err) => {
                let error_message = err.body_text();

                if error_message.contains("missing field") {
                    let field_name = extract_field_name_from_error(&error_message);
                    ErrorKind::BadRequest
                        .with_message("Missing required query parameter")
                        .with_context(format!(
                            "The query parameter '{}' is required but was not provided",
                            field_name.unwrap_or("unknown")
                        ))
                } else if error_message.contains("duplicate field") {
                    let field_name = extract_field_name_from_error(&error_message);
                    ErrorKind::BadRequest
                        .with_message("Duplicate query parameter")
                        .with_context(format!(
                            "The query parameter '{}' was provided multiple times",
                            field_name.unwrap_or("unknown")
                        ))
                } else {
                    ErrorKind::BadRequest
                        .with_message("Invalid query parameters")
                        .with_context(error_message)
                }
            }
            _ => ErrorKind::BadRequest
                .with_message("Invalid query parameters")
                .with_context("The query string could not be parsed"),
        }
    }
}

/// Extracts the field name from a serde error message, if it names one.
fn extract_field_name_from_error(error_message: &str) -> Option<&str> {
    if let Some(start) = error_message.find('`')
        && let Some(end) = error_message[start + 1..].find('`')
    {
        return Some(&error_message[start + 1..start + 1 + end]);
    }

    if let Some(start) = error_message.find("field ") {
        let field_part = &error_message[start + 6..];
        if let Some(end) = field_part.find(' ') {
            return Some(&field_part[..end]);
        }
    }

    None
}

impl<T> aide::OperationInput for Query<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        AxumQuery::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        AxumQuery::<T>::inferred_early_responses(ctx, operation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn field_name_from_error() {
        assert_eq!(
            extract_field_name_from_error("missing field `user_id`"),
            Some("user_id")
        );
        assert_eq!(
            extract_field_name_from_error("duplicate field limit at line 1"),
            Some("limit")
        );
        assert_eq!(extract_field_name_from_error("some other error"), None);
    }
}
