pub mod editor;
pub mod options;

/// Canonical question types. The backend has shipped both short and long
/// labels for the choice types; everything funnels through [`normalize`].
///
/// [`normalize`]: QuestionType::normalize
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuestionType {
    SingleChoice,
    MultipleChoice,
    FreeText,
}

impl QuestionType {
    /// Applied to any label [`normalize`] does not recognize. Kept for
    /// compatibility with stored questions that predate the canonical
    /// labels.
    ///
    /// [`normalize`]: QuestionType::normalize
    pub const FALLBACK: QuestionType = QuestionType::SingleChoice;

    pub fn normalize(raw: &str) -> Self {
        match raw {
            "SINGLE" | "SINGLE_CHOICE" => Self::SingleChoice,
            "MULTI" | "MULTIPLE_CHOICE" => Self::MultipleChoice,
            "FREE_TEXT" => Self::FreeText,
            _ => Self::FALLBACK,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::SingleChoice => "SINGLE_CHOICE",
            Self::MultipleChoice => "MULTIPLE_CHOICE",
            Self::FreeText => "FREE_TEXT",
        }
    }

    pub fn is_choice(self) -> bool {
        matches!(self, Self::SingleChoice | Self::MultipleChoice)
    }
}
