use serde::{Deserialize, Serialize};
use serde_json::{Map, Value as JsonValue};

use crate::database::store::Collection;
use crate::models::record::{Document, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmissionFields {
    /// Free text as typed by the taker; not a reference to a TestTaker.
    pub name: String,
    /// Question identifier to submitted answer.
    pub answers: Map<String, JsonValue>,
    pub time_taken: String,
    /// Copy of the questions as they were when the test was taken.
    pub questions_snapshot: Vec<JsonValue>,
}

impl Document for SubmissionFields {
    const COLLECTION: Collection = Collection::TestSubmissions;
    const KIND: &'static str = "Test submission";
}

pub type TestSubmission = Record<SubmissionFields>;
