use serde::{Deserialize, Serialize};

use crate::database::store::Collection;
use crate::models::record::{Document, Record};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionFields {
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
}

impl Document for QuestionFields {
    const COLLECTION: Collection = Collection::Questions;
    const KIND: &'static str = "Question";
}

pub type Question = Record<QuestionFields>;
