pub mod config;
pub mod database;
pub mod dto;
pub mod error;
pub mod export;
pub mod models;
pub mod routes;
pub mod services;
pub mod telemetry;
pub mod utils;

use std::sync::Arc;

use crate::database::store::DocumentStore;
use crate::models::{
    question::QuestionFields, test_submission::SubmissionFields, test_taker::TestTakerFields,
};
use crate::services::record_service::RecordService;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DocumentStore>,
    pub questions: RecordService<QuestionFields>,
    pub test_takers: RecordService<TestTakerFields>,
    pub test_submissions: RecordService<SubmissionFields>,
}

impl AppState {
    pub fn new(store: Arc<dyn DocumentStore>) -> Self {
        Self {
            questions: RecordService::new(store.clone()),
            test_takers: RecordService::new(store.clone()),
            test_submissions: RecordService::new(store.clone()),
            store,
        }
    }
}
