use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json},
};
use validator::Validate;

use crate::{
    dto::{common_dto::MessageResponse, question_dto::QuestionPayload},
    error::{Error, Result},
    models::question::QuestionFields,
    services::record_service::RecordService,
    AppState,
};

type Questions = RecordService<QuestionFields>;

#[utoipa::path(
    post,
    path = "/api/questions",
    request_body = QuestionPayload,
    responses(
        (status = 201, description = "Question created", body = Question),
        (status = 400, description = "Missing required fields")
    )
)]
#[axum::debug_handler]
pub async fn create_question(
    State(state): State<AppState>,
    payload: std::result::Result<Json<QuestionPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|e| Error::invalid_payload(e, QuestionPayload::REQUIRED_FIELDS))?;
    let question = state
        .questions
        .create(payload.into())
        .await
        .inspect_err(|e| tracing::error!("Failed to create question: {}", e))?;
    Ok((StatusCode::CREATED, Json(question)))
}

#[utoipa::path(
    get,
    path = "/api/questions",
    responses(
        (status = 200, description = "Questions, newest first", body = [Question]),
        (status = 500, description = "Store unavailable")
    )
)]
#[axum::debug_handler]
pub async fn list_questions(State(state): State<AppState>) -> Result<impl IntoResponse> {
    let questions = state.questions.list().await.map_err(|e| {
        tracing::error!("Failed to fetch questions: {}", e);
        Error::Fetch("questions")
    })?;
    Ok(Json(questions))
}

#[utoipa::path(
    put,
    path = "/api/questions/{id}",
    params(
        ("id" = String, Path, description = "Question ID")
    ),
    request_body = QuestionPayload,
    responses(
        (status = 200, description = "Question replaced", body = Question),
        (status = 400, description = "Missing required fields or question not found")
    )
)]
#[axum::debug_handler]
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
    payload: std::result::Result<Json<QuestionPayload>, JsonRejection>,
) -> Result<impl IntoResponse> {
    let Json(payload) = payload?;
    payload
        .validate()
        .map_err(|e| Error::invalid_payload(e, QuestionPayload::REQUIRED_FIELDS))?;
    let id = Questions::parse_id(&id)?;
    let question = state
        .questions
        .update(id, payload.into())
        .await
        .inspect_err(|e| tracing::error!("Failed to update question: {}", e))?;
    Ok(Json(question))
}

#[utoipa::path(
    delete,
    path = "/api/questions/{id}",
    params(
        ("id" = String, Path, description = "Question ID")
    ),
    responses(
        (status = 200, description = "Question deleted"),
        (status = 400, description = "Question not found")
    )
)]
#[axum::debug_handler]
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse> {
    let id = Questions::parse_id(&id)?;
    state
        .questions
        .delete(id)
        .await
        .inspect_err(|e| tracing::error!("Failed to delete question: {}", e))?;
    Ok(Json(MessageResponse::deleted("Question")))
}
