pub mod health;
pub mod question;
pub mod test_submission;
pub mod test_taker;

use std::path::Path;

use axum::{
    response::Redirect,
    routing::{delete, get, put},
    Router,
};
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

use crate::AppState;

pub const LOGIN_PAGE: &str = "/login.html";

/// Routes mounted under `/api`.
pub fn api_router() -> Router<AppState> {
    Router::new()
        .route(
            "/questions",
            get(question::list_questions).post(question::create_question),
        )
        .route(
            "/questions/:id",
            put(question::update_question).delete(question::delete_question),
        )
        .route(
            "/testtakers",
            get(test_taker::list_test_takers).post(test_taker::create_test_taker),
        )
        .route("/testtakers/:id", delete(test_taker::delete_test_taker))
        .route(
            "/testsubmissions",
            get(test_submission::list_test_submissions)
                .post(test_submission::create_test_submission),
        )
        .route(
            "/testsubmissions/:id",
            delete(test_submission::delete_test_submission),
        )
        .route("/health", get(health::health))
}

/// Full application: API, root redirect and static assets.
pub fn build_router(state: AppState, static_dir: &Path) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to(LOGIN_PAGE) }))
        .nest("/api", api_router())
        .fallback_service(ServeDir::new(static_dir))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
