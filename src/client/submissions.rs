use reqwest::multipart::{Form, Part};

use crate::answers::AnswerDraft;
use crate::client::{ApiClient, ClientError};
use crate::schemas::submission::{
    FileSubmissionDto, OneOrMany, Submission, TaskSubmissionsResponse, TestSubmissionDto,
    TestSubmitRequest,
};
use crate::submissions::grading::GradeTarget;
use crate::submissions::reconcile::{merge_submissions, unify_response};

impl ApiClient {
    /// Submission history for a task, unified and chronologically ordered.
    /// Teachers and administrators must pass the student's `user_id`.
    /// Fail-soft: any fetch or parse failure degrades to an empty list so a
    /// dashboard tile renders an empty state instead of crashing.
    pub async fn task_submissions(&self, task_id: i64, user_id: Option<i64>) -> Vec<Submission> {
        let mut query: Vec<(&str, String)> = Vec::new();
        if let Some(user_id) = user_id {
            query.push(("userId", user_id.to_string()));
        }

        match self
            .get_json::<TaskSubmissionsResponse>(&format!("tasks/{task_id}/submissions"), &query)
            .await
        {
            Ok(response) => unify_response(response),
            Err(err) => {
                tracing::warn!(error = %err, task_id, "Failed to fetch task submissions; treating as empty");
                Vec::new()
            }
        }
    }

    /// The calling learner's own submissions for a task. The backend has
    /// answered with both an array and a bare object here; both are
    /// accepted. Fail-soft.
    pub async fn my_task_submissions(&self, task_id: i64) -> Vec<Submission> {
        match self.get_json::<OneOrMany>(&format!("tasks/{task_id}/submissions/me"), &[]).await {
            Ok(response) => response.into_vec(),
            Err(err) => {
                tracing::warn!(error = %err, task_id, "Failed to fetch own submissions; treating as empty");
                Vec::new()
            }
        }
    }

    /// All of the learner's submissions across tasks: the file and test
    /// collections are fetched concurrently, joined, then reconciled. Each
    /// side degrades to empty on failure independently.
    pub async fn my_submission_history(&self) -> Vec<Submission> {
        let (tests, files) = tokio::join!(
            self.get_json::<Vec<TestSubmissionDto>>("submissions-ext/tests/me", &[]),
            self.get_json::<Vec<FileSubmissionDto>>("submissions-ext/files/me", &[]),
        );

        let tests = tests.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Failed to fetch test submissions; treating as empty");
            Vec::new()
        });
        let files = files.unwrap_or_else(|err| {
            tracing::warn!(error = %err, "Failed to fetch file submissions; treating as empty");
            Vec::new()
        });

        merge_submissions(files, tests)
    }

    /// Submits a test attempt. The draft is serialized into the opaque
    /// envelope the backend stores as submission content.
    pub async fn submit_test(&self, task_id: i64, draft: &AnswerDraft) -> Result<(), ClientError> {
        let request = TestSubmitRequest { content: draft.to_content() };
        let response = self
            .http()
            .post(self.url(&format!("submissions-ext/test/{task_id}")))
            .json(&request)
            .send()
            .await?;

        Self::expect_success(response).await
    }

    /// Uploads a file submission as multipart form data.
    pub async fn submit_file(
        &self,
        task_id: i64,
        filename: &str,
        bytes: Vec<u8>,
    ) -> Result<(), ClientError> {
        let part = Part::bytes(bytes).file_name(filename.to_string());
        let form = Form::new().part("file", part);
        let response = self
            .http()
            .post(self.url(&format!("submissions-ext/file/{task_id}")))
            .multipart(form)
            .send()
            .await?;

        Self::expect_success(response).await
    }

    /// Grades a submission via the operation its payload selects. A
    /// submission of unknown kind is rejected here, before anything reaches
    /// the backend.
    pub async fn grade(&self, submission: &Submission, grade: f64) -> Result<(), ClientError> {
        let target = GradeTarget::resolve(submission)?;
        let response = self
            .http()
            .post(self.url(&target.grade_path(&submission.id)))
            .query(&[("grade", grade)])
            .send()
            .await?;

        Self::expect_success(response).await
    }
}
