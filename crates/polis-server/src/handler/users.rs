//! Customer record handlers.
//!
//! Records are created, read, updated and deleted one at a time, and listed
//! through a filtered, page-number paginated query.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use polis_postgres::PgClient;
use polis_postgres::query::UserDataRepository;

use crate::extract::{Json, Path, PgPool, ValidateJson, ValidateQuery};
use crate::handler::request::{
    CreateUserData, ListUserData, Pagination, UpdateUserData, UserPathParams,
};
use crate::handler::response::{ErrorResponse, UserData, UserDataPage};
use crate::handler::{ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for customer record operations.
const TRACING_TARGET: &str = "polis_server::handler::users";

/// Creates a customer record.
#[tracing::instrument(skip_all)]
async fn create_user(
    State(pg_client): State<PgClient>,
    ValidateJson(request): ValidateJson<CreateUserData>,
) -> Result<(StatusCode, Json<UserData>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating customer record");

    let mut conn = pg_client.get_connection().await?;
    let user = conn.create_user_data(request.into_model()).await?;

    tracing::info!(target: TRACING_TARGET, user_id = user.id, "Customer record created");

    Ok((StatusCode::CREATED, Json(UserData::from_model(user))))
}

fn create_user_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create customer record")
        .description(
            "Creates a customer record. Every field is required and the phone \
             number is stored as +7XXXXXXXXXX.",
        )
        .response::<201, Json<UserData>>()
        .response::<400, Json<ErrorResponse>>()
}

/// Returns a customer record by id.
#[tracing::instrument(skip_all, fields(user_id = path_params.user_id))]
async fn read_user(
    Path(path_params): Path<UserPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<UserData>)> {
    tracing::debug!(target: TRACING_TARGET, "Reading customer record");

    let Some(user) = conn.find_user_data_by_id(path_params.user_id).await? else {
        return Err(user_not_found());
    };

    Ok((StatusCode::OK, Json(UserData::from_model(user))))
}

fn read_user_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get customer record")
        .description("Returns a single customer record.")
        .response::<200, Json<UserData>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Applies a partial update to a customer record.
#[tracing::instrument(skip_all, fields(user_id = path_params.user_id))]
async fn update_user(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<UserPathParams>,
    ValidateJson(request): ValidateJson<UpdateUserData>,
) -> Result<(StatusCode, Json<UserData>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating customer record");

    let mut conn = pg_client.get_connection().await?;
    let Some(user) = conn
        .update_user_data(path_params.user_id, request.into_model())
        .await?
    else {
        return Err(user_not_found());
    };

    tracing::info!(target: TRACING_TARGET, "Customer record updated");

    Ok((StatusCode::OK, Json(UserData::from_model(user))))
}

fn update_user_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update customer record")
        .description("Changes only the fields present in the request body.")
        .response::<200, Json<UserData>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Deletes a customer record together with its policies.
#[tracing::instrument(skip_all, fields(user_id = path_params.user_id))]
async fn delete_user(
    Path(path_params): Path<UserPathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<UserData>)> {
    tracing::debug!(target: TRACING_TARGET, "Deleting customer record");

    let Some(user) = conn.delete_user_data(path_params.user_id).await? else {
        return Err(user_not_found());
    };

    tracing::info!(target: TRACING_TARGET, "Customer record deleted");

    Ok((StatusCode::OK, Json(UserData::from_model(user))))
}

fn delete_user_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete customer record")
        .description("Deletes the record and every policy attached to it.")
        .response::<200, Json<UserData>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Lists customer records matching the query filters, one page at a time.
#[tracing::instrument(
    skip_all,
    fields(limit = pagination.limit(), page = pagination.page())
)]
async fn list_users(
    ValidateQuery(query): ValidateQuery<ListUserData>,
    ValidateQuery(pagination): ValidateQuery<Pagination>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<UserDataPage>)> {
    tracing::debug!(target: TRACING_TARGET, "Listing customer records");

    let users = conn.list_user_data(query.to_filter()).await?;
    let response =
        UserDataPage::from_rows(&users, &pagination, users_not_found, UserData::from_model)?;

    tracing::debug!(
        target: TRACING_TARGET,
        total = response.page.total,
        page_count = response.page.total_pages,
        "Customer records listed",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn list_users_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List customer records")
        .description(
            "Filters by id, policy end date and phone number, then returns the \
             requested page ordered by id.",
        )
        .response::<200, Json<UserDataPage>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

fn users_not_found() -> crate::handler::Error<'static> {
    ErrorKind::NotFound
        .with_message("Users not found")
        .with_resource("user_data")
}

pub(super) fn user_not_found() -> crate::handler::Error<'static> {
    ErrorKind::NotFound
        .with_message("User not found")
        .with_resource("user_data")
}

/// Returns routes for customer record management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route("/users/create", post_with(create_user, create_user_docs))
        .api_route("/users/get_all", get_with(list_users, list_users_docs))
        .api_route(
            "/users/{user_id}",
            get_with(read_user, read_user_docs)
                .put_with(update_user, update_user_docs)
                .delete_with(delete_user, delete_user_docs),
        )
        .with_path_items(|item| item.tag("Users"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn create_rejects_invalid_body() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server
            .post("/users/create")
            .json(&json!({
                "time_insure_end": "2026-01-01T00:00:00Z",
                "first_name": "",
                "middle_name": "Ivanovich",
                "last_name": "Petrov",
                "phone": "+1 555 123 4567",
                "email": "ivan@example.com",
            }))
            .await;

        response.assert_status_bad_request();
        let body = response.json::<serde_json::Value>();
        let message = body["message"].as_str().unwrap_or_default();
        assert!(message.contains("first_name"));
        assert!(message.contains("Phone number must start with +7 or 8"));

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_missing_fields() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server
            .post("/users/create")
            .json(&json!({ "first_name": "Ivan" }))
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    #[tokio::test]
    async fn non_numeric_id_is_rejected() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        server.get("/users/abc").await.assert_status_bad_request();
        server.delete("/users/abc").await.assert_status_bad_request();

        Ok(())
    }

    #[tokio::test]
    async fn listing_rejects_bad_limit() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server.get("/users/get_all").add_query_param("limit", 0).await;
        response.assert_status_bad_request();

        let response = server
            .get("/users/get_all")
            .add_query_param("limit", 1001)
            .await;
        response.assert_status_bad_request();

        Ok(())
    }

    #[tokio::test]
    async fn listing_rejects_bad_phone() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server
            .get("/users/get_all")
            .add_query_param("phone_number", "12345")
            .await;
        response.assert_status_bad_request();

        Ok(())
    }

    #[test]
    fn not_found_message() {
        let error = user_not_found();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.message(), Some("User not found"));

        let error = users_not_found();
        assert_eq!(error.kind(), ErrorKind::NotFound);
        assert_eq!(error.message(), Some("Users not found"));
    }
}
