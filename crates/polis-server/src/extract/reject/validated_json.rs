//! JSON extractor that runs `validator` rules.

use std::borrow::Cow;
use std::collections::HashMap;

use axum::extract::{FromRequest, Request};
use derive_more::{Deref, DerefMut, From};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationError, ValidationErrors};

use super::Json;
use crate::handler::{Error, ErrorKind};

/// Tracing target for request validation.
const TRACING_TARGET: &str = "polis_server::extract::validation";

/// [`Json`] extractor that also calls [`Validate::validate`].
///
/// Validation failures are answered with 400 Bad Request listing every
/// failing field.
#[must_use]
#[derive(Debug, Clone, Copy, Default, Deref, DerefMut, From)]
pub struct ValidateJson<T>(pub T);

impl<T> ValidateJson<T> {
    #[inline]
    pub fn new(inner: T) -> Self {
        Self(inner)
    }

    #[inline]
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T, S> FromRequest<S> for ValidateJson<T>
where
    T: DeserializeOwned + Validate + 'static,
    S: Send + Sync,
{
    type Rejection = Error<'static>;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(data) = <Json<T> as FromRequest<S>>::from_request(req, state).await?;
        data.validate()?;
        Ok(Self::new(data))
    }
}

/// Formats length and range bounds as `between X and Y`, `at least X` or `at most Y`.
fn format_bounds(params: &HashMap<Cow<'static, str>, serde_json::Value>) -> Option<String> {
    match (params.get("min"), params.get("max")) {
        (Some(min), Some(max)) => Some(format!("between {} and {}", min, max)),
        (Some(min), None) => Some(format!("at least {}", min)),
        (None, Some(max)) => Some(format!("at most {}", max)),
        (None, None) => None,
    }
}

/// Formats one field error as a user-facing sentence.
pub(crate) fn format_validation_error(field: &str, error: &ValidationError) -> String {
    // Struct-level checks are reported under `__all__`.
    if field == "__all__" {
        return match &error.message {
            Some(message) => message.to_string(),
            None => format!("Request failed validation: {}", error.code),
        };
    }

    if let Some(custom_message) = &error.message {
        return format!("Field '{}': {}", field, custom_message);
    }

    let message = match error.code.as_ref() {
        "required" => "is required".to_owned(),
        "email" => "must be a valid email address".to_owned(),
        "length" => match format_bounds(&error.params) {
            Some(bounds) => format!("must be {} characters long", bounds),
            None => "has invalid length".to_owned(),
        },
        "range" => match format_bounds(&error.params) {
            Some(bounds) => format!("must be {}", bounds),
            None => "is out of valid range".to_owned(),
        },
        code => format!("failed validation: {}", code),
    };

    format!("Field '{}' {}", field, message)
}

impl From<ValidationErrors> for Error<'static> {
    fn from(errors: ValidationErrors) -> Self {
        let mut error_messages: Vec<String> = errors
            .field_errors()
            .iter()
            .flat_map(|(field, field_errors)| {
                field_errors
                    .iter()
                    .map(move |error| format_validation_error(field, error))
            })
            .collect();
        error_messages.sort();

        let user_message = match error_messages.as_slice() {
            [] => "Validation failed".to_owned(),
            messages => messages.join(". "),
        };

        tracing::warn!(
            target: TRACING_TARGET,
            errors = ?errors.field_errors(),
            "Request validation failed"
        );

        ErrorKind::BadRequest
            .with_message(user_message)
            .with_resource("request")
    }
}

impl<T> aide::OperationInput for ValidateJson<T>
where
    T: schemars::JsonSchema,
{
    fn operation_input(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) {
        Json::<T>::operation_input(ctx, operation);
    }

    fn inferred_early_responses(
        ctx: &mut aide::generate::GenContext,
        operation: &mut aide::openapi::Operation,
    ) -> Vec<(Option<u16>, aide::openapi::Response)> {
        Json::<T>::inferred_early_responses(ctx, operation)
    }
}
