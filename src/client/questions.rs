use validator::Validate;

use crate::client::{ApiClient, ClientError};
use crate::questions::editor;
use crate::schemas::question::{QuestionCreateRequest, QuestionUpdateRequest, TestQuestion};

impl ApiClient {
    /// Questions of a test task, sorted by display order. Fail-soft: a test
    /// without loadable questions renders as "no questions yet".
    pub async fn list_questions(&self, task_id: i64) -> Vec<TestQuestion> {
        match self.get_json::<Vec<TestQuestion>>(&format!("test-questions/task/{task_id}"), &[]).await
        {
            Ok(mut questions) => {
                editor::sort_by_order(&mut questions);
                questions
            }
            Err(err) => {
                tracing::warn!(error = %err, task_id, "Failed to fetch test questions; treating as empty");
                Vec::new()
            }
        }
    }

    pub async fn create_question(
        &self,
        request: &QuestionCreateRequest,
    ) -> Result<TestQuestion, ClientError> {
        request.validate()?;
        let response = self.http().post(self.url("test-questions")).json(request).send().await?;
        Self::decode(response).await
    }

    pub async fn patch_question(
        &self,
        question_id: i64,
        request: &QuestionUpdateRequest,
    ) -> Result<TestQuestion, ClientError> {
        let response = self
            .http()
            .patch(self.url(&format!("test-questions/{question_id}")))
            .json(request)
            .send()
            .await?;

        Self::decode(response).await
    }

    pub async fn delete_question(&self, question_id: i64) -> Result<(), ClientError> {
        let response =
            self.http().delete(self.url(&format!("test-questions/{question_id}"))).send().await?;
        Self::expect_success(response).await
    }

    /// Moves a question up or down by swapping display orders with its
    /// neighbour; the two patches are issued concurrently.
    pub async fn swap_question_order(
        &self,
        first: &TestQuestion,
        second: &TestQuestion,
    ) -> Result<(), ClientError> {
        let [(first_id, first_patch), (second_id, second_patch)] = editor::order_swap(first, second);
        tokio::try_join!(
            self.patch_question(first_id, &first_patch),
            self.patch_question(second_id, &second_patch),
        )?;

        Ok(())
    }

    /// Appends a copy of an existing question at the given display order.
    pub async fn duplicate_question(
        &self,
        question: &TestQuestion,
        order: i64,
    ) -> Result<TestQuestion, ClientError> {
        self.create_question(&editor::duplicate_request(question, order)).await
    }
}
