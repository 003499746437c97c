use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::decoded::Decoded;

/// One answer option of a choice question. Ids are opaque tokens assigned at
/// creation and stable for the lifetime of the option; legacy data with
/// positional ids (`a`, `b`, ...) decodes the same way.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnswerOption {
    pub id: String,
    pub text: String,
}

impl AnswerOption {
    pub fn new(text: impl Into<String>) -> Self {
        Self { id: new_option_id(), text: text.into() }
    }
}

/// Stable option id, decoupled from display order. Editing the option list
/// never re-keys the survivors, so stored answers keep referring to the
/// options that were actually chosen.
pub fn new_option_id() -> String {
    let id = Uuid::new_v4().simple().to_string();
    id[..8].to_string()
}

pub fn encode_options(options: &[AnswerOption]) -> String {
    serde_json::to_string(options).unwrap_or_else(|_| "[]".to_string())
}

/// Fail-soft decode of an embedded option list. Absent input and malformed
/// input both collapse to an empty list for rendering; the [`Decoded`]
/// wrapper keeps the two distinguishable for diagnostics.
pub fn decode_options(raw: Option<&str>) -> Decoded<Vec<AnswerOption>> {
    let Some(raw) = raw else {
        return Decoded::Missing;
    };

    match serde_json::from_str::<Vec<AnswerOption>>(raw) {
        Ok(options) => Decoded::Value(options),
        Err(_) => Decoded::Invalid,
    }
}

/// Starting option list for a new choice question: two empty slots, same as
/// the editor has always offered.
pub fn default_options() -> Vec<AnswerOption> {
    vec![AnswerOption::new(""), AnswerOption::new("")]
}

pub fn push_option(options: &mut Vec<AnswerOption>, text: impl Into<String>) -> String {
    let option = AnswerOption::new(text);
    let id = option.id.clone();
    options.push(option);
    id
}

/// Removes one option without touching the ids of the rest.
pub fn remove_option(options: &mut Vec<AnswerOption>, id: &str) {
    options.retain(|option| option.id != id);
}

pub fn set_option_text(options: &mut [AnswerOption], id: &str, text: impl Into<String>) {
    if let Some(option) = options.iter_mut().find(|option| option.id == id) {
        option.text = text.into();
    }
}
