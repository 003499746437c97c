use crate::core::time::submitted_sort_key;
use crate::schemas::submission::{
    FileSubmissionDto, Submission, TaskSubmissionsResponse, TestSubmissionDto,
};

/// Merges the two legacy sub-collections into one unified, chronologically
/// ascending sequence. The sort is stable, so records with equal timestamps
/// keep their source order: files before tests, each in upstream order.
/// Ordering depends only on the inputs, never on which fetch finished first.
pub fn merge_submissions(
    files: Vec<FileSubmissionDto>,
    tests: Vec<TestSubmissionDto>,
) -> Vec<Submission> {
    let mut merged: Vec<Submission> = files
        .into_iter()
        .map(Submission::from)
        .chain(tests.into_iter().map(Submission::from))
        .collect();

    merged.sort_by_key(|submission| submitted_sort_key(&submission.submitted));
    merged
}

/// Collapses either accepted response shape to the unified sequence. A flat
/// array is already unified and passes through untouched.
pub fn unify_response(response: TaskSubmissionsResponse) -> Vec<Submission> {
    match response {
        TaskSubmissionsResponse::Unified(submissions) => submissions,
        TaskSubmissionsResponse::Split { files, tests } => merge_submissions(files, tests),
    }
}
