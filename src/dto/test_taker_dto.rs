use serde::Deserialize;
use validator::Validate;

use crate::models::test_taker::TestTakerFields;
use crate::utils::validation::{not_blank, null_as_default};

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct TestTakerPayload {
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank"))]
    pub name: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank"))]
    pub education: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank"))]
    pub field_of_study: String,
    #[serde(default, deserialize_with = "null_as_default")]
    #[validate(custom(function = "not_blank"))]
    pub institution: String,
    pub certifications: Option<String>,
    pub other_info: Option<String>,
}

impl TestTakerPayload {
    pub const REQUIRED_FIELDS: &'static str = "name, education, field_of_study, institution";
}

impl From<TestTakerPayload> for TestTakerFields {
    fn from(payload: TestTakerPayload) -> Self {
        Self {
            name: payload.name,
            education: payload.education,
            field_of_study: payload.field_of_study,
            institution: payload.institution,
            certifications: payload.certifications,
            other_info: payload.other_info,
        }
    }
}
