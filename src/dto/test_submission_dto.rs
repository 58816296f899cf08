use serde::Deserialize;
use serde_json::{Map, Value as JsonValue};
use validator::Validate;

use crate::models::test_submission::SubmissionFields;
use crate::utils::validation::{non_empty_object, not_blank, null_as_default, string_or_number};

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct TestSubmissionPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "non_empty_object"))]
    pub answers: Map<String, JsonValue>,
    #[serde(default, deserialize_with = "string_or_number")]
    #[validate(custom(function = "not_blank"))]
    pub time_taken: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(length(min = 1))]
    pub questions_snapshot: Vec<JsonValue>,
}

impl TestSubmissionPayload {
    pub const REQUIRED_FIELDS: &'static str = "name, answers, timeTaken, questionsSnapshot";
}

impl From<TestSubmissionPayload> for SubmissionFields {
    fn from(payload: TestSubmissionPayload) -> Self {
        Self {
            name: payload.name,
            answers: payload.answers,
            time_taken: payload.time_taken,
            questions_snapshot: payload.questions_snapshot,
        }
    }
}
