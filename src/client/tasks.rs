use crate::client::{ApiClient, ClientError};
use crate::schemas::task::{Task, Topic};

impl ApiClient {
    /// A task view cannot render without its task, so this propagates
    /// failures instead of degrading.
    pub async fn get_task(&self, task_id: i64) -> Result<Task, ClientError> {
        self.get_json(&format!("tasks/{task_id}"), &[]).await
    }

    pub async fn get_topic(&self, topic_id: i64) -> Result<Topic, ClientError> {
        self.get_json(&format!("topics/{topic_id}"), &[]).await
    }

    pub async fn list_topic_tasks(&self, topic_id: i64) -> Vec<Task> {
        match self.get_json::<Vec<Task>>(&format!("topics/{topic_id}/tasks"), &[]).await {
            Ok(tasks) => tasks,
            Err(err) => {
                tracing::warn!(error = %err, topic_id, "Failed to fetch topic tasks; treating as empty");
                Vec::new()
            }
        }
    }

    pub async fn list_course_topics(&self, course_id: i64) -> Vec<Topic> {
        match self.get_json::<Vec<Topic>>(&format!("courses/{course_id}/topics"), &[]).await {
            Ok(topics) => topics,
            Err(err) => {
                tracing::warn!(error = %err, course_id, "Failed to fetch course topics; treating as empty");
                Vec::new()
            }
        }
    }
}
