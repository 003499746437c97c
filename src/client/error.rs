use thiserror::Error;

use crate::submissions::grading::UngradableSubmission;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("transport error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("server returned {status}: {detail}")]
    Status { status: u16, detail: String },
    #[error("failed to decode response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("invalid request: {0}")]
    Validation(#[from] validator::ValidationErrors),
    #[error(transparent)]
    Ungradable(#[from] UngradableSubmission),
}
