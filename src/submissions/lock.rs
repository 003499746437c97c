use crate::core::time::submitted_sort_key;
use crate::schemas::submission::Submission;

/// A test task is locked once any submission in the learner's history
/// carries test content: answers are final and read-only. File tasks never
/// lock; repeat uploads are always allowed.
pub fn is_locked(history: &[Submission], task_is_test: bool) -> bool {
    task_is_test && history.iter().any(Submission::is_test)
}

/// Content of the most recent test submission, by submission timestamp.
/// This is what the locked view renders.
pub fn latest_test_content(history: &[Submission]) -> Option<&str> {
    history
        .iter()
        .filter(|submission| submission.is_test())
        .max_by_key(|submission| submitted_sort_key(&submission.submitted))
        .and_then(Submission::content)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schemas::submission::{SubmissionPayload, SubmissionStatus};

    fn submission(id: &str, submitted: &str, payload: Option<SubmissionPayload>) -> Submission {
        Submission {
            id: id.to_string(),
            task_id: 5,
            user_id: 9,
            submitted: submitted.to_string(),
            status: SubmissionStatus::Added,
            grade: None,
            payload,
        }
    }

    #[test]
    fn test_task_with_test_submission_is_locked() {
        let history = vec![submission(
            "1",
            "2024-01-01T00:00:00Z",
            Some(SubmissionPayload::Test { content: "{\"answers\":[]}".to_string() }),
        )];
        assert!(is_locked(&history, true));
    }

    #[test]
    fn test_task_with_only_file_submissions_is_not_locked() {
        let history = vec![submission(
            "1",
            "2024-01-01T00:00:00Z",
            Some(SubmissionPayload::File { content_url: "f".to_string() }),
        )];
        assert!(!is_locked(&history, true));
    }

    #[test]
    fn file_task_never_locks() {
        let history = vec![submission(
            "1",
            "2024-01-01T00:00:00Z",
            Some(SubmissionPayload::Test { content: "{}".to_string() }),
        )];
        assert!(!is_locked(&history, false));
        assert!(!is_locked(&[], true));
    }

    #[test]
    fn latest_test_content_picks_newest_by_timestamp() {
        let history = vec![
            submission(
                "1",
                "2024-01-02T00:00:00Z",
                Some(SubmissionPayload::Test { content: "second".to_string() }),
            ),
            submission(
                "2",
                "2024-01-01T00:00:00Z",
                Some(SubmissionPayload::Test { content: "first".to_string() }),
            ),
            submission(
                "3",
                "2024-01-03T00:00:00Z",
                Some(SubmissionPayload::File { content_url: "u".to_string() }),
            ),
        ];
        assert_eq!(latest_test_content(&history), Some("second"));
    }

    #[test]
    fn latest_test_content_is_none_without_test_submissions() {
        assert_eq!(latest_test_content(&[]), None);
    }
}
