use axum::{
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use serde_json::json;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Missing required fields")]
    Validation {
        source: validator::ValidationErrors,
        required: &'static str,
    },

    #[error("{0}")]
    NotFound(String),

    #[error("Invalid request body: {0}")]
    InvalidBody(#[from] JsonRejection),

    #[error("Failed to fetch {0}")]
    Fetch(&'static str),

    #[error("Database error: {0}")]
    Database(sqlx::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub fn invalid_payload(source: validator::ValidationErrors, required: &'static str) -> Self {
        Error::Validation { source, required }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            // Unknown identifiers answer 400, not 404: existing clients rely on it.
            Error::NotFound(_) => StatusCode::BAD_REQUEST,
            Error::Validation { .. } | Error::InvalidBody(_) => StatusCode::BAD_REQUEST,
            // Write failures have always been reported as 400.
            Error::Database(_) => StatusCode::BAD_REQUEST,
            Error::Fetch(_) | Error::Json(_) | Error::Config(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> axum::response::Response {
        let status = self.status_code();
        let body = match self {
            Error::Validation { required, .. } => json!({
                "error": "Missing required fields",
                "details": format!("Required fields: {}", required),
            }),
            Error::InvalidBody(rejection) => json!({ "error": rejection.body_text() }),
            Error::Json(_) | Error::Config(_) => json!({
                "error": "An unexpected error occurred",
            }),
            other => json!({ "error": other.to_string() }),
        };

        (status, Json(body)).into_response()
    }
}

impl From<sqlx::Error> for Error {
    fn from(err: sqlx::Error) -> Self {
        Error::Database(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dto::test_taker_dto::TestTakerPayload;
    use axum::body::to_bytes;
    use serde_json::Value as JsonValue;
    use validator::Validate;

    async fn body_of(err: Error) -> (StatusCode, JsonValue) {
        let response = err.into_response();
        let status = response.status();
        let bytes = to_bytes(response.into_body(), 1024 * 1024).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[tokio::test]
    async fn validation_errors_carry_required_field_details() {
        let payload: TestTakerPayload = serde_json::from_value(json!({ "name": "Ada" })).unwrap();
        let errors = payload.validate().unwrap_err();

        let (status, body) = body_of(Error::invalid_payload(
            errors,
            TestTakerPayload::REQUIRED_FIELDS,
        ))
        .await;

        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["error"], "Missing required fields");
        assert_eq!(
            body["details"],
            "Required fields: name, education, field_of_study, institution"
        );
    }

    #[tokio::test]
    async fn not_found_maps_to_bad_request() {
        let (status, body) = body_of(Error::NotFound("Question not found".into())).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "error": "Question not found" }));
    }

    #[tokio::test]
    async fn fetch_failures_are_server_errors() {
        let (status, body) = body_of(Error::Fetch("questions")).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, json!({ "error": "Failed to fetch questions" }));
    }

    #[tokio::test]
    async fn write_failures_report_the_database_error() {
        let (status, body) = body_of(Error::from(sqlx::Error::PoolTimedOut)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert!(body["error"].as_str().unwrap().starts_with("Database error"));
    }
}
