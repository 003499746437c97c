use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SubmissionStatus {
    Added,
    Graded,
    Returned,
    Removed,
    Overdue,
}

/// Submission id as the backend sends it: numeric in the legacy split
/// response, string in the unified one. Always coerced to string on our side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawId {
    Num(i64),
    Text(String),
}

impl RawId {
    pub fn into_string(self) -> String {
        match self {
            RawId::Num(value) => value.to_string(),
            RawId::Text(value) => value,
        }
    }
}

/// What a submission actually carries. Exactly one of the two on the wire;
/// a record with neither (seen in degenerate upstream responses) maps to
/// `Submission::payload == None` and has unknown kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SubmissionPayload {
    Test { content: String },
    File { content_url: String },
}

/// One learner attempt against a task, unified across the file and test
/// collections.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "SubmissionWire", into = "SubmissionWire")]
pub struct Submission {
    pub id: String,
    pub task_id: i64,
    pub user_id: i64,
    /// RFC3339 timestamp, kept verbatim; parsed only for ordering.
    pub submitted: String,
    pub status: SubmissionStatus,
    pub grade: Option<f64>,
    pub payload: Option<SubmissionPayload>,
}

impl Submission {
    pub fn is_test(&self) -> bool {
        matches!(self.payload, Some(SubmissionPayload::Test { .. }))
    }

    pub fn is_file(&self) -> bool {
        matches!(self.payload, Some(SubmissionPayload::File { .. }))
    }

    pub fn content(&self) -> Option<&str> {
        match &self.payload {
            Some(SubmissionPayload::Test { content }) => Some(content),
            _ => None,
        }
    }

    pub fn content_url(&self) -> Option<&str> {
        match &self.payload {
            Some(SubmissionPayload::File { content_url }) => Some(content_url),
            _ => None,
        }
    }
}

/// Flat wire shape with optional `content`/`contentUrl`. The tagged
/// [`SubmissionPayload`] is rebuilt from field presence on the way in;
/// `content` wins if a malformed record carries both.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SubmissionWire {
    id: RawId,
    task_id: i64,
    user_id: i64,
    submitted: String,
    status: SubmissionStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    grade: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    content: Option<String>,
}

impl From<SubmissionWire> for Submission {
    fn from(wire: SubmissionWire) -> Self {
        let payload = match (wire.content, wire.content_url) {
            (Some(content), _) => Some(SubmissionPayload::Test { content }),
            (None, Some(content_url)) => Some(SubmissionPayload::File { content_url }),
            (None, None) => None,
        };

        Self {
            id: wire.id.into_string(),
            task_id: wire.task_id,
            user_id: wire.user_id,
            submitted: wire.submitted,
            status: wire.status,
            grade: wire.grade,
            payload,
        }
    }
}

impl From<Submission> for SubmissionWire {
    fn from(submission: Submission) -> Self {
        let (content, content_url) = match submission.payload {
            Some(SubmissionPayload::Test { content }) => (Some(content), None),
            Some(SubmissionPayload::File { content_url }) => (None, Some(content_url)),
            None => (None, None),
        };

        Self {
            id: RawId::Text(submission.id),
            task_id: submission.task_id,
            user_id: submission.user_id,
            submitted: submission.submitted,
            status: submission.status,
            grade: submission.grade,
            content_url,
            content,
        }
    }
}

/// Legacy file-submission record from the split `{files, tests}` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileSubmissionDto {
    pub id: RawId,
    pub task_id: i64,
    pub user_id: i64,
    pub submitted: String,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub content_url: Option<String>,
}

/// Legacy test-submission record from the split `{files, tests}` response.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TestSubmissionDto {
    pub id: RawId,
    pub task_id: i64,
    pub user_id: i64,
    pub submitted: String,
    pub status: SubmissionStatus,
    #[serde(default)]
    pub grade: Option<f64>,
    #[serde(default)]
    pub content: Option<String>,
}

impl From<FileSubmissionDto> for Submission {
    fn from(dto: FileSubmissionDto) -> Self {
        Self {
            id: dto.id.into_string(),
            task_id: dto.task_id,
            user_id: dto.user_id,
            submitted: dto.submitted,
            status: dto.status,
            grade: dto.grade,
            payload: dto.content_url.map(|content_url| SubmissionPayload::File { content_url }),
        }
    }
}

impl From<TestSubmissionDto> for Submission {
    fn from(dto: TestSubmissionDto) -> Self {
        Self {
            id: dto.id.into_string(),
            task_id: dto.task_id,
            user_id: dto.user_id,
            submitted: dto.submitted,
            status: dto.status,
            grade: dto.grade,
            payload: dto.content.map(|content| SubmissionPayload::Test { content }),
        }
    }
}

/// `GET /tasks/{id}/submissions` answers in one of two shapes: the split
/// `{files, tests}` object, or an already-unified flat array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum TaskSubmissionsResponse {
    Unified(Vec<Submission>),
    Split {
        #[serde(default)]
        files: Vec<FileSubmissionDto>,
        #[serde(default)]
        tests: Vec<TestSubmissionDto>,
    },
}

/// `GET /tasks/{id}/submissions/me` sometimes returns a bare object instead
/// of an array.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum OneOrMany {
    Many(Vec<Submission>),
    One(Submission),
}

impl OneOrMany {
    pub fn into_vec(self) -> Vec<Submission> {
        match self {
            OneOrMany::Many(items) => items,
            OneOrMany::One(item) => vec![item],
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TestSubmitRequest {
    pub content: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wire_with_content_becomes_test_payload() {
        let submission: Submission = serde_json::from_value(json!({
            "id": 2,
            "taskId": 5,
            "userId": 9,
            "submitted": "2024-01-02T00:00:00Z",
            "status": "GRADED",
            "grade": 80.0,
            "content": "{\"answers\":[]}"
        }))
        .expect("submission");

        assert_eq!(submission.id, "2");
        assert!(submission.is_test());
        assert_eq!(submission.content(), Some("{\"answers\":[]}"));
        assert_eq!(submission.content_url(), None);
    }

    #[test]
    fn wire_with_content_url_becomes_file_payload() {
        let submission: Submission = serde_json::from_value(json!({
            "id": "f1",
            "taskId": 5,
            "userId": 9,
            "submitted": "2024-01-01T00:00:00Z",
            "status": "ADDED",
            "contentUrl": "u1"
        }))
        .expect("submission");

        assert!(submission.is_file());
        assert_eq!(submission.content_url(), Some("u1"));
        assert_eq!(submission.grade, None);
    }

    #[test]
    fn wire_with_neither_field_has_unknown_kind() {
        let submission: Submission = serde_json::from_value(json!({
            "id": "3",
            "taskId": 5,
            "userId": 9,
            "submitted": "2024-01-03T00:00:00Z",
            "status": "ADDED"
        }))
        .expect("submission");

        assert!(submission.payload.is_none());
        assert!(!submission.is_test());
        assert!(!submission.is_file());
    }

    #[test]
    fn serialization_emits_exactly_one_payload_field() {
        let submission = Submission {
            id: "t1".to_string(),
            task_id: 5,
            user_id: 9,
            submitted: "2024-01-02T00:00:00Z".to_string(),
            status: SubmissionStatus::Added,
            grade: None,
            payload: Some(SubmissionPayload::Test { content: "{}".to_string() }),
        };

        let value = serde_json::to_value(&submission).expect("serialize");
        assert_eq!(value["content"], "{}");
        assert!(value.get("contentUrl").is_none());
        assert!(value.get("grade").is_none());
    }

    #[test]
    fn response_shape_split_is_detected() {
        let response: TaskSubmissionsResponse = serde_json::from_value(json!({
            "files": [],
            "tests": []
        }))
        .expect("split shape");
        assert!(matches!(response, TaskSubmissionsResponse::Split { .. }));
    }

    #[test]
    fn response_shape_flat_array_is_detected() {
        let response: TaskSubmissionsResponse = serde_json::from_value(json!([{
            "id": "3",
            "taskId": 5,
            "userId": 9,
            "submitted": "2024-01-03T00:00:00Z",
            "status": "ADDED"
        }]))
        .expect("flat shape");

        match response {
            TaskSubmissionsResponse::Unified(items) => {
                assert_eq!(items.len(), 1);
                assert_eq!(items[0].id, "3");
            }
            TaskSubmissionsResponse::Split { .. } => panic!("expected unified shape"),
        }
    }

    #[test]
    fn one_or_many_wraps_bare_object() {
        let response: OneOrMany = serde_json::from_value(json!({
            "id": "1",
            "taskId": 5,
            "userId": 9,
            "submitted": "2024-01-01T00:00:00Z",
            "status": "ADDED",
            "contentUrl": "u1"
        }))
        .expect("bare object");
        assert_eq!(response.into_vec().len(), 1);
    }
}
