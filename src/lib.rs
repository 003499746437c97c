pub mod answers;
pub mod client;
pub mod core;
pub mod decoded;
pub mod questions;
pub mod schemas;
pub mod submissions;

pub use client::{ApiClient, ClientError, TaskView};
pub use schemas::submission::{Submission, SubmissionPayload, SubmissionStatus};
pub use submissions::grading::{GradeTarget, UngradableSubmission};
