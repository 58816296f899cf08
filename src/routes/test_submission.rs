use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{common_dto::MessageResponse, test_submission_dto::TestSubmissionPayload},
    error::{Error, Result},
    models::test_submission::SubmissionFields,
    services::record_service::RecordService,
    AppState,
};

#[utoipa::path(
    post,
    path = "/api/testsubmissions",
    request_body = TestSubmissionPayload,
    responses(
        (status = 201, description = "Submission stored", body = TestSubmission),
        (status = 400, description = "Missing required fields")
    )
)]
#[axum::debug_handler]
pub async fn create_test_submission(
    State(state): State<AppState>,
    payload: std::result::Result<Json<TestSubmissionPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|e| Error::invalid_payload(e, TestSubmissionPayload::REQUIRED_FIELDS))?;
    let submission = state
        .test_submissions
        .create(payload.into())
        .await
        .inspect_err(|e| tracing::error!("Test submission creation failed: {}", e))?;
    Ok((StatusCode::CREATED, Json(submission)))
}

#[utoipa::path(
    get,
    path = "/api/testsubmissions",
    responses(
        (status = 200, description = "Submissions, newest first", body = [TestSubmission]),
        (status = 500, description = "Store unavailable")
    )
)]
#[axum::debug_handler]
pub async fn list_test_submissions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let submissions = state.test_submissions.list().await.map_err(|e| {
        tracing::error!("Failed to fetch test submissions: {}", e);
        Error::Fetch("test submissions")
    })?;
    Ok(Json(submissions))
}

#[utoipa::path(
    delete,
    path = "/api/testsubmissions/{id}",
    params(
        ("id" = String, Path, description = "Test submission ID")
    ),
    responses(
        (status = 200, description = "Submission deleted"),
        (status = 400, description = "Test submission not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_test_submission(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = RecordService::<SubmissionFields>::parse_id(&id)?;
    state
        .test_submissions
        .delete(id)
        .await
        .inspect_err(|e| tracing::error!("Failed to delete test submission: {}", e))?;
    Ok(Json(MessageResponse::deleted("Test submission")))
}
