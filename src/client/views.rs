use std::collections::BTreeMap;

use crate::answers::parse_envelope;
use crate::client::{ApiClient, ClientError};
use crate::schemas::question::TestQuestion;
use crate::schemas::submission::Submission;
use crate::schemas::task::Task;
use crate::submissions::lock::{is_locked, latest_test_content};

/// Everything a task page needs, assembled in one round of requests.
#[derive(Debug, Clone)]
pub struct TaskView {
    pub task: Task,
    pub questions: Vec<TestQuestion>,
    pub history: Vec<Submission>,
    pub locked: bool,
    /// Answers of the latest test attempt, shown read-only once locked.
    /// Empty when unlocked or when the stored envelope is unreadable.
    pub submitted_answers: BTreeMap<i64, Vec<String>>,
}

impl TaskView {
    /// Loads a task page for the calling learner. The task itself is
    /// required; questions and history load concurrently and degrade to
    /// empty on failure.
    pub async fn load(client: &ApiClient, task_id: i64) -> Result<Self, ClientError> {
        let task = client.get_task(task_id).await?;
        let (questions, history) =
            tokio::join!(client.list_questions(task_id), client.my_task_submissions(task_id));

        Ok(Self::assemble(task, questions, history))
    }

    fn assemble(task: Task, questions: Vec<TestQuestion>, history: Vec<Submission>) -> Self {
        let questions = if task.is_test() { questions } else { Vec::new() };
        let locked = is_locked(&history, task.is_test());
        let submitted_answers = if locked {
            latest_test_content(&history).map(|content| parse_envelope(content).or_default()).unwrap_or_default()
        } else {
            BTreeMap::new()
        };

        Self { task, questions, history, locked, submitted_answers }
    }
}
