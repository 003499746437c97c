//! Pure pieces of the teacher-side question editor: payload derivation for
//! create/duplicate, and the order-swap used by move up/down.

use crate::questions::options::encode_options;
use crate::questions::QuestionType;
use crate::schemas::question::{QuestionCreateRequest, QuestionUpdateRequest, TestQuestion};

/// Display order for a question appended at the end of the list.
pub fn next_order(questions: &[TestQuestion]) -> i64 {
    questions.len() as i64 + 1
}

/// Sorts by display order, the presentation and navigation sequence.
pub fn sort_by_order(questions: &mut [TestQuestion]) {
    questions.sort_by_key(|question| question.order);
}

/// Build the creation payload for a new question. Free-text questions never
/// carry an option list.
pub fn create_request(
    task_id: i64,
    order: i64,
    text: &str,
    kind: QuestionType,
    options: &[crate::questions::options::AnswerOption],
    max_score: Option<f64>,
) -> QuestionCreateRequest {
    QuestionCreateRequest {
        task_id,
        order,
        text: text.trim().to_string(),
        question_type: kind.as_str().to_string(),
        options_json: if kind.is_choice() { Some(encode_options(options)) } else { None },
        max_score,
    }
}

/// Payload for duplicating an existing question at the end of the list.
pub fn duplicate_request(question: &TestQuestion, order: i64) -> QuestionCreateRequest {
    let kind = question.kind();
    QuestionCreateRequest {
        task_id: question.task_id,
        order,
        text: format!("{} (copy)", question.text),
        question_type: kind.as_str().to_string(),
        options_json: if kind.is_choice() { question.options_json.clone() } else { None },
        max_score: question.max_score,
    }
}

/// The two patches that swap the display order of adjacent questions.
pub fn order_swap(
    first: &TestQuestion,
    second: &TestQuestion,
) -> [(i64, QuestionUpdateRequest); 2] {
    [
        (first.id, QuestionUpdateRequest { order: Some(second.order), ..Default::default() }),
        (second.id, QuestionUpdateRequest { order: Some(first.order), ..Default::default() }),
    ]
}
