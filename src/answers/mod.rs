pub mod draft;
pub mod envelope;

pub use draft::AnswerDraft;
pub use envelope::{parse_envelope, Answer, AnswerEnvelope};
