//! Insurance policy handlers.
//!
//! Policies are created and listed under their customer record, and read,
//! updated and deleted by their own id.

use aide::axum::ApiRouter;
use aide::transform::TransformOperation;
use axum::extract::State;
use axum::http::StatusCode;
use polis_postgres::PgClient;
use polis_postgres::query::{InsuranceInfoRepository, UserDataRepository};

use super::users::user_not_found;
use crate::extract::{Json, Path, PgPool, ValidateJson, ValidateQuery};
use crate::handler::request::{
    CreateInsuranceInfo, InsurancePathParams, Pagination, UpdateInsuranceInfo, UserPathParams,
};
use crate::handler::response::{ErrorResponse, InsuranceInfo, InsuranceInfoPage};
use crate::handler::{Error, ErrorKind, Result};
use crate::service::ServiceState;

/// Tracing target for insurance policy operations.
const TRACING_TARGET: &str = "polis_server::handler::insurance";

/// Attaches a policy to a customer record.
#[tracing::instrument(skip_all, fields(user_id = path_params.user_id))]
async fn create_insurance(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<UserPathParams>,
    ValidateJson(request): ValidateJson<CreateInsuranceInfo>,
) -> Result<(StatusCode, Json<InsuranceInfo>)> {
    tracing::debug!(target: TRACING_TARGET, "Creating insurance policy");

    let mut conn = pg_client.get_connection().await?;
    if conn.find_user_data_by_id(path_params.user_id).await?.is_none() {
        return Err(user_not_found());
    }

    let info = conn
        .create_insurance_info(request.into_model(path_params.user_id))
        .await?;

    tracing::info!(
        target: TRACING_TARGET,
        insurance_id = info.id,
        insurance_kind = %info.insurance_kind,
        "Insurance policy created",
    );

    Ok((StatusCode::CREATED, Json(InsuranceInfo::from_model(info))))
}

fn create_insurance_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Create insurance policy")
        .description("Attaches a new policy to the customer record.")
        .response::<201, Json<InsuranceInfo>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Lists the policies of a customer record, one page at a time.
#[tracing::instrument(
    skip_all,
    fields(user_id = path_params.user_id, limit = pagination.limit(), page = pagination.page())
)]
async fn list_insurance(
    Path(path_params): Path<UserPathParams>,
    ValidateQuery(pagination): ValidateQuery<Pagination>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<InsuranceInfoPage>)> {
    tracing::debug!(target: TRACING_TARGET, "Listing insurance policies");

    if conn.find_user_data_by_id(path_params.user_id).await?.is_none() {
        return Err(user_not_found());
    }

    let policies = conn.list_user_insurance_info(path_params.user_id).await?;
    let response = InsuranceInfoPage::from_rows(
        &policies,
        &pagination,
        insurance_records_not_found,
        InsuranceInfo::from_model,
    )?;

    tracing::debug!(
        target: TRACING_TARGET,
        total = response.page.total,
        "Insurance policies listed",
    );

    Ok((StatusCode::OK, Json(response)))
}

fn list_insurance_docs(op: TransformOperation) -> TransformOperation {
    op.summary("List insurance policies")
        .description("Returns the requested page of the customer's policies ordered by id.")
        .response::<200, Json<InsuranceInfoPage>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Returns a policy by id.
#[tracing::instrument(skip_all, fields(insurance_id = path_params.insurance_id))]
async fn read_insurance(
    Path(path_params): Path<InsurancePathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<InsuranceInfo>)> {
    tracing::debug!(target: TRACING_TARGET, "Reading insurance policy");

    let Some(info) = conn
        .find_insurance_info_by_id(path_params.insurance_id)
        .await?
    else {
        return Err(insurance_not_found());
    };

    Ok((StatusCode::OK, Json(InsuranceInfo::from_model(info))))
}

fn read_insurance_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Get insurance policy")
        .description("Returns a single insurance policy.")
        .response::<200, Json<InsuranceInfo>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Applies a partial update to a policy.
#[tracing::instrument(skip_all, fields(insurance_id = path_params.insurance_id))]
async fn update_insurance(
    State(pg_client): State<PgClient>,
    Path(path_params): Path<InsurancePathParams>,
    ValidateJson(request): ValidateJson<UpdateInsuranceInfo>,
) -> Result<(StatusCode, Json<InsuranceInfo>)> {
    tracing::debug!(target: TRACING_TARGET, "Updating insurance policy");

    let mut conn = pg_client.get_connection().await?;
    let Some(info) = conn
        .update_insurance_info(path_params.insurance_id, request.into_model())
        .await?
    else {
        return Err(insurance_not_found());
    };

    tracing::info!(target: TRACING_TARGET, "Insurance policy updated");

    Ok((StatusCode::OK, Json(InsuranceInfo::from_model(info))))
}

fn update_insurance_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Update insurance policy")
        .description("Changes only the fields present in the request body.")
        .response::<200, Json<InsuranceInfo>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

/// Deletes a policy.
#[tracing::instrument(skip_all, fields(insurance_id = path_params.insurance_id))]
async fn delete_insurance(
    Path(path_params): Path<InsurancePathParams>,
    PgPool(mut conn): PgPool,
) -> Result<(StatusCode, Json<InsuranceInfo>)> {
    tracing::debug!(target: TRACING_TARGET, "Deleting insurance policy");

    let Some(info) = conn
        .delete_insurance_info(path_params.insurance_id)
        .await?
    else {
        return Err(insurance_not_found());
    };

    tracing::info!(target: TRACING_TARGET, "Insurance policy deleted");

    Ok((StatusCode::OK, Json(InsuranceInfo::from_model(info))))
}

fn delete_insurance_docs(op: TransformOperation) -> TransformOperation {
    op.summary("Delete insurance policy")
        .description("Deletes the policy and returns it.")
        .response::<200, Json<InsuranceInfo>>()
        .response::<400, Json<ErrorResponse>>()
        .response::<404, Json<ErrorResponse>>()
}

fn insurance_records_not_found() -> Error<'static> {
    ErrorKind::NotFound
        .with_message("Insurance records not found")
        .with_resource("insurance_info")
}

fn insurance_not_found() -> Error<'static> {
    ErrorKind::NotFound
        .with_message("Insurance record not found")
        .with_resource("insurance_info")
}

/// Returns routes for insurance policy management.
pub fn routes() -> ApiRouter<ServiceState> {
    use aide::axum::routing::*;

    ApiRouter::new()
        .api_route(
            "/users/{user_id}/insurance",
            post_with(create_insurance, create_insurance_docs)
                .get_with(list_insurance, list_insurance_docs),
        )
        .api_route(
            "/insurance/{insurance_id}",
            get_with(read_insurance, read_insurance_docs)
                .put_with(update_insurance, update_insurance_docs)
                .delete_with(delete_insurance, delete_insurance_docs),
        )
        .with_path_items(|item| item.tag("Insurance"))
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::handler::test::create_test_server_with_router;

    #[tokio::test]
    async fn create_rejects_reversed_period() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server
            .post("/users/1/insurance")
            .json(&json!({
                "insurance_kind": "osago",
                "time_insure_start": "2026-01-01T00:00:00Z",
                "time_insure_end": "2025-01-01T00:00:00Z",
            }))
            .await;

        response.assert_status_bad_request();
        let body = response.json::<serde_json::Value>();
        assert_eq!(
            body["message"],
            "The insurance period must not end before it starts"
        );

        Ok(())
    }

    #[tokio::test]
    async fn create_rejects_unknown_kind() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server
            .post("/users/1/insurance")
            .json(&json!({ "insurance_kind": "life" }))
            .await;

        response.assert_status_bad_request();
        Ok(())
    }

    #[tokio::test]
    async fn non_numeric_ids_are_rejected() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        server.get("/insurance/abc").await.assert_status_bad_request();
        server
            .get("/users/abc/insurance")
            .await
            .assert_status_bad_request();

        Ok(())
    }

    #[tokio::test]
    async fn listing_rejects_bad_limit() -> anyhow::Result<()> {
        let server = create_test_server_with_router(|_| routes()).await?;

        let response = server
            .get("/users/1/insurance")
            .add_query_param("limit", 0)
            .await;
        response.assert_status_bad_request();

        Ok(())
    }
}
