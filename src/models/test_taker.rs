use serde::{Deserialize, Serialize};

use crate::database::store::Collection;
use crate::models::record::{Document, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TestTakerFields {
    pub name: String,
    pub education: String,
    pub field_of_study: String,
    pub institution: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub certifications: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub other_info: Option<String>,
}

impl Document for TestTakerFields {
    const COLLECTION: Collection = Collection::TestTakers;
    const KIND: &'static str = "Test taker";
}

pub type TestTaker = Record<TestTakerFields>;
