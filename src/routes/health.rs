use std::time::Duration;

use axum::{extract::State, response::IntoResponse, Json};

use crate::{dto::common_dto::HealthResponse, utils::time, AppState};

/// Longest the health check waits on the store before reporting it down.
pub const PING_TIMEOUT: Duration = Duration::from_secs(1);

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = 200, description = "Process status and database connectivity")
    )
)]
#[axum::debug_handler]
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let reachable = tokio::time::timeout(PING_TIMEOUT, state.store.ping())
        .await
        .unwrap_or(false);
    let database = if reachable {
        "connected"
    } else {
        "disconnected"
    };
    Json(HealthResponse {
        status: "healthy",
        timestamp: time::now(),
        database,
    })
}
