use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::decoded::Decoded;
use crate::questions::options::{decode_options, AnswerOption};
use crate::questions::QuestionType;

/// One structured question of a test task, as served by
/// `GET /test-questions/task/{taskId}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestQuestion {
    pub id: i64,
    pub task_id: i64,
    #[serde(default)]
    pub order: i64,
    pub text: String,
    pub question_type: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options_json: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
}

impl TestQuestion {
    pub fn kind(&self) -> QuestionType {
        QuestionType::normalize(&self.question_type)
    }

    /// Decoded option list; empty on absent or malformed `optionsJson`.
    pub fn options(&self) -> Vec<AnswerOption> {
        self.decoded_options().or_default()
    }

    pub fn decoded_options(&self) -> Decoded<Vec<AnswerOption>> {
        decode_options(self.options_json.as_deref())
    }

    /// A choice question with no options cannot be answered. Creation does
    /// not reject that state, so callers check here before rendering.
    pub fn is_answerable(&self) -> bool {
        match self.kind() {
            QuestionType::FreeText => true,
            QuestionType::SingleChoice | QuestionType::MultipleChoice => {
                !self.options().is_empty()
            }
        }
    }
}

#[derive(Debug, Clone, Serialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct QuestionCreateRequest {
    pub task_id: i64,
    pub order: i64,
    #[validate(length(min = 1, message = "question text must not be empty"))]
    pub text: String,
    pub question_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_json: Option<String>,
    #[validate(range(min = 0.0, message = "maxScore must be non-negative"))]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuestionUpdateRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options_json: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_score: Option<f64>,
}
