use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::decoded::Decoded;

/// One answered question inside an envelope. Free-text answers travel as a
/// one-element `optionIds` list, same as choice answers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: i64,
    pub option_ids: Vec<String>,
}

/// The serialized container for a full test attempt, stored opaquely as the
/// `content` of a test submission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnswerEnvelope {
    pub answers: Vec<Answer>,
}

impl AnswerEnvelope {
    pub fn to_content(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{\"answers\":[]}".to_string())
    }
}

/// Fail-soft parse of a previously submitted envelope into a per-question
/// answer map, for locked read-only rendering. Stored envelopes have carried
/// question ids as both numbers and strings; both are accepted, and option
/// ids are coerced to strings. Entries without a usable question id are
/// dropped.
pub fn parse_envelope(raw: &str) -> Decoded<BTreeMap<i64, Vec<String>>> {
    let Ok(parsed) = serde_json::from_str::<Value>(raw) else {
        return Decoded::Invalid;
    };

    let Some(answers) = parsed.get("answers").and_then(Value::as_array) else {
        return Decoded::Invalid;
    };

    let mut map = BTreeMap::new();
    for entry in answers {
        let Some(question_id) = entry.get("questionId").and_then(question_id_of) else {
            continue;
        };

        let option_ids = entry
            .get("optionIds")
            .and_then(Value::as_array)
            .map(|ids| ids.iter().map(option_id_of).collect())
            .unwrap_or_default();

        map.insert(question_id, option_ids);
    }

    Decoded::Value(map)
}

fn question_id_of(value: &Value) -> Option<i64> {
    match value {
        Value::Number(number) => number.as_i64(),
        Value::String(text) => text.parse().ok(),
        _ => None,
    }
}

fn option_id_of(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}
