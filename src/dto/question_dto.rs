use serde::Deserialize;
use validator::Validate;

use crate::models::question::QuestionFields;
use crate::utils::validation::{not_blank, null_as_default};

/// Body of both create and full-replacement update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank"))]
    pub question_text: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1))]
    pub options: Vec<String>,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank"))]
    pub correct_answer: String,
}

impl QuestionPayload {
    pub const REQUIRED_FIELDS: &'static str = "questionText, options, correctAnswer";
}

impl From<QuestionPayload> for QuestionFields {
    fn from(payload: QuestionPayload) -> Self {
        Self {
            question_text: payload.question_text,
            options: payload.options,
            correct_answer: payload.correct_answer,
        }
    }
}
