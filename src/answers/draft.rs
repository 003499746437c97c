use std::collections::BTreeMap;

use crate::answers::envelope::{Answer, AnswerEnvelope};
use crate::questions::QuestionType;
use crate::schemas::question::TestQuestion;

/// In-memory answer selections for one test-taking session. At most one
/// entry per question; discarded on navigation, never persisted locally.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AnswerDraft {
    answers: BTreeMap<i64, Vec<String>>,
}

impl AnswerDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a choice according to the question's type: single-choice
    /// replaces, multi-choice toggles, free-text overwrites the text.
    pub fn select(&mut self, question: &TestQuestion, option_id: &str) {
        match question.kind() {
            QuestionType::SingleChoice => self.choose(question.id, option_id),
            QuestionType::MultipleChoice => self.toggle(question.id, option_id),
            QuestionType::FreeText => self.set_free_text(question.id, option_id),
        }
    }

    /// Single-choice: the new option replaces any previous selection.
    pub fn choose(&mut self, question_id: i64, option_id: &str) {
        self.answers.insert(question_id, vec![option_id.to_string()]);
    }

    /// Multi-choice: selecting an already chosen option deselects it.
    pub fn toggle(&mut self, question_id: i64, option_id: &str) {
        let current = self.answers.entry(question_id).or_default();
        if let Some(position) = current.iter().position(|id| id == option_id) {
            current.remove(position);
        } else {
            current.push(option_id.to_string());
        }
    }

    /// Free text, stored as a one-element list for a uniform wire shape.
    pub fn set_free_text(&mut self, question_id: i64, text: &str) {
        self.answers.insert(question_id, vec![text.to_string()]);
    }

    pub fn answer(&self, question_id: i64) -> &[String] {
        self.answers.get(&question_id).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn to_envelope(&self) -> AnswerEnvelope {
        AnswerEnvelope {
            answers: self
                .answers
                .iter()
                .map(|(question_id, option_ids)| Answer {
                    question_id: *question_id,
                    option_ids: option_ids.clone(),
                })
                .collect(),
        }
    }

    pub fn to_content(&self) -> String {
        self.to_envelope().to_content()
    }
}
