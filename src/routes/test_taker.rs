use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{common_dto::MessageResponse, test_taker_dto::TestTakerPayload},
    error::{Error, Result},
    models::test_taker::TestTakerFields,
    services::record_service::RecordService,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/testtakers",
    request_body = TestTakerPayload,
    responses(
        (status = 201, description = "Test taker created", body = TestTaker),
        (status = 400, description = "Missing required fields")
    )
)]
#[axum::debug_handler]
pub async fn create_test_taker(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TestTakerPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|e| Error::invalid_payload(e, TestTakerPayload::REQUIRED_FIELDS))?;
    let taker = state
        .test_takers
        .create(payload.into())
        .await
        .inspect_err(|e| tracing::error!("Test taker creation failed: {}", e))?;
    Ok((StatusCode::CREATED, Json(taker)))
}

#[utoipa::path(
    get,
    path = "/api/testtakers",
    responses(
        (status = 200, description = "Test takers, newest first", body = [TestTaker]),
        (status = 500, description = "Store unavailable")
    )
)]
#[axum::debug_handler]
pub async fn list_test_takers(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let takers = state.test_takers.list().await.map_err(|e| {
        tracing::error!("Failed to fetch test takers: {}", e);
        Error::Fetch("test takers")
    })?;
    Ok(Json(takers))
}

#[utoipa::path(
    delete,
    path = "/api/testtakers/{id}",
    params(
        ("id" = String, Path, description = "Test taker ID")
    ),
    responses(
        (status = 200, description = "Test taker deleted"),
        (status = 400, description = "Test taker not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_test_taker(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = RecordService::<TestTakerFields>::parse_id(&id)?;
    state
        .test_takers
        .delete(id)
        .await
        .inspect_err(|e| tracing::error!("Failed to delete test taker: {}", e))?;
    Ok(Json(MessageResponse::deleted("Test taker")))
}
