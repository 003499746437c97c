//! End-to-end answer flow: a learner fills a draft, the draft becomes the
//! submission content, and the locked view later reconstructs the answers
//! from that content.

use classhub::answers::{parse_envelope, AnswerDraft};
use classhub::schemas::question::TestQuestion;
use classhub::submissions::{is_locked, latest_test_content, merge_submissions};
use classhub::{GradeTarget, Submission, SubmissionPayload, SubmissionStatus};

fn question(id: i64, question_type: &str, options_json: Option<&str>) -> TestQuestion {
    TestQuestion {
        id,
        task_id: 5,
        order: id,
        text: format!("q{id}"),
        question_type: question_type.to_string(),
        options_json: options_json.map(str::to_string),
        max_score: Some(1.0),
    }
}

fn test_submission(id: &str, submitted: &str, content: &str) -> Submission {
    Submission {
        id: id.to_string(),
        task_id: 5,
        user_id: 9,
        submitted: submitted.to_string(),
        status: SubmissionStatus::Added,
        grade: None,
        payload: Some(SubmissionPayload::Test { content: content.to_string() }),
    }
}

#[test]
fn draft_to_locked_view_round_trip() {
    let single = question(1, "SINGLE_CHOICE", Some(r#"[{"id":"aa","text":"4"},{"id":"bb","text":"5"}]"#));
    let multi = question(2, "MULTI", Some(r#"[{"id":"cc","text":"x"},{"id":"dd","text":"y"}]"#));
    let free = question(3, "FREE_TEXT", None);

    let mut draft = AnswerDraft::new();
    draft.select(&single, "bb");
    draft.select(&single, "aa");
    draft.select(&multi, "cc");
    draft.select(&multi, "dd");
    draft.select(&free, "because it is");

    let submission = test_submission("t1", "2024-03-01T10:00:00Z", &draft.to_content());
    let history = vec![submission];

    assert!(is_locked(&history, true));
    assert!(!is_locked(&history, false));

    let content = latest_test_content(&history).expect("test content");
    let answers = parse_envelope(content).or_default();
    assert_eq!(answers[&1], vec!["aa".to_string()]);
    assert_eq!(answers[&2], vec!["cc".to_string(), "dd".to_string()]);
    assert_eq!(answers[&3], vec!["because it is".to_string()]);
}

#[test]
fn merged_history_routes_each_kind_to_its_grading_operation() {
    let file = Submission {
        id: "f1".to_string(),
        task_id: 5,
        user_id: 9,
        submitted: "2024-03-02T10:00:00Z".to_string(),
        status: SubmissionStatus::Added,
        grade: None,
        payload: Some(SubmissionPayload::File { content_url: "u1".to_string() }),
    };
    let test = test_submission("t1", "2024-03-01T10:00:00Z", "{\"answers\":[]}");

    let merged = merge_submissions(
        vec![serde_json::from_value(serde_json::json!({
            "id": "f1",
            "taskId": 5,
            "userId": 9,
            "submitted": "2024-03-02T10:00:00Z",
            "status": "ADDED",
            "contentUrl": "u1"
        }))
        .expect("file dto")],
        vec![serde_json::from_value(serde_json::json!({
            "id": "t1",
            "taskId": 5,
            "userId": 9,
            "submitted": "2024-03-01T10:00:00Z",
            "status": "ADDED",
            "content": "{\"answers\":[]}"
        }))
        .expect("test dto")],
    );

    assert_eq!(merged, vec![test.clone(), file.clone()]);
    assert_eq!(GradeTarget::resolve(&test).expect("test target"), GradeTarget::Test);
    assert_eq!(GradeTarget::resolve(&file).expect("file target"), GradeTarget::File);
}

#[test]
fn latest_attempt_wins_when_resubmission_ever_happens() {
    let mut first = AnswerDraft::new();
    first.choose(1, "aa");
    let mut second = AnswerDraft::new();
    second.choose(1, "bb");

    let history = vec![
        test_submission("t1", "2024-03-01T10:00:00Z", &first.to_content()),
        test_submission("t2", "2024-03-01T11:00:00Z", &second.to_content()),
    ];

    let content = latest_test_content(&history).expect("test content");
    assert_eq!(parse_envelope(content).or_default()[&1], vec!["bb".to_string()]);
}
