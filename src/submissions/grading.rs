use thiserror::Error;

use crate::schemas::submission::{Submission, SubmissionPayload};

/// Which backend grading operation applies to a submission. The two are not
/// interchangeable: sending a grade to the wrong one is a backend contract
/// violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GradeTarget {
    Test,
    File,
}

/// A submission with no payload has unknown kind and cannot be routed to
/// either grading operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("submission {id} carries neither test content nor a file reference; refusing to grade")]
pub struct UngradableSubmission {
    pub id: String,
}

impl GradeTarget {
    pub fn resolve(submission: &Submission) -> Result<Self, UngradableSubmission> {
        match submission.payload {
            Some(SubmissionPayload::Test { .. }) => Ok(Self::Test),
            Some(SubmissionPayload::File { .. }) => Ok(Self::File),
            None => Err(UngradableSubmission { id: submission.id.clone() }),
        }
    }

    pub(crate) fn grade_path(self, submission_id: &str) -> String {
        match self {
            Self::Test => format!("submissions-ext/test/{submission_id}/grade"),
            Self::File => format!("submissions-ext/file/{submission_id}/grade"),
        }
    }
}
