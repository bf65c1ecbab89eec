#[cfg(test)]
#[path = "tasks_test.rs"]
mod tests;

use std::time;

use async_trait::async_trait;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::constants::{TASK_PAGE_SIZE, TASK_PAGE_START};
use crate::config::{ServerConfig, user_agent};
use crate::models::{DraftTask, Session, Task};
use crate::remote::{RemoteError, TaskStore};

pub struct HttpTaskStore {
    base_url: String,
    session: Option<Session>,
    timeout: Option<time::Duration>,
}

#[async_trait]
impl TaskStore for HttpTaskStore {
    async fn list_tasks(&self) -> Result<Vec<Task>> {
        let req = self.request(reqwest::Method::GET, "tasks").query(&[
            ("start", TASK_PAGE_START),
            ("count", TASK_PAGE_SIZE),
        ]);

        let res = req.send().await.wrap_err("listing tasks")?;
        let res = check_status(res).await?;

        let res = res
            .json::<TaskListResponse>()
            .await
            .wrap_err("parsing task list response")?;

        Ok(res
            .tasks
            .into_iter()
            .map(|task| task.localize_due())
            .collect())
    }

    async fn create_task(&self, req: CreateTaskRequest) -> Result<()> {
        let res = self
            .request(reqwest::Method::POST, "tasks")
            .json(&req)
            .send()
            .await
            .wrap_err("creating task")?;

        check_status(res).await?;
        Ok(())
    }

    async fn delete_task(&self, id: i64) -> Result<()> {
        let res = self
            .request(reqwest::Method::DELETE, &format!("tasks/{}", id))
            .send()
            .await
            .wrap_err("deleting task")?;

        check_status(res).await?;
        Ok(())
    }
}

impl HttpTaskStore {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            session: None,
            timeout: None,
        }
    }

    pub fn with_session(mut self, session: Option<Session>) -> Self {
        self.session = session;
        self
    }

    pub fn with_timeout(mut self, timeout: time::Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    // The request is built even without a session; the server rejects it and
    // the caller downgrades the error. Only delete is guarded, in the UI.
    fn request(&self, method: reqwest::Method, path: &str) -> reqwest::RequestBuilder {
        let mut req = reqwest::Client::new()
            .request(method, format!("{}/{}", self.base_url, path))
            .header("User-Agent", user_agent());

        if let Some(timeout) = self.timeout {
            req = req.timeout(timeout);
        }

        if let Some(session) = &self.session {
            req = req.bearer_auth(session.token());
        }

        req
    }
}

impl From<&ServerConfig> for HttpTaskStore {
    fn from(config: &ServerConfig) -> Self {
        let mut store = HttpTaskStore::new(&config.base_url);
        if let Some(timeout) = config.timeout_secs {
            store = store.with_timeout(time::Duration::from_secs(timeout as u64));
        }
        store
    }
}

async fn check_status(res: reqwest::Response) -> Result<reqwest::Response> {
    if res.status().is_success() {
        return Ok(res);
    }

    let status = res.status().as_u16();
    let body = res.text().await.unwrap_or_default();
    Err(RemoteError { status, body }.into())
}

#[derive(Default, Debug, Serialize, Deserialize)]
struct TaskListResponse {
    tasks: Vec<Task>,
}

/// Wire body for task creation. `due` is epoch milliseconds.
#[derive(Default, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTaskRequest {
    pub summary: String,
    pub text: String,
    pub priority: u8,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub due: Option<i64>,
}

impl From<&DraftTask> for CreateTaskRequest {
    fn from(draft: &DraftTask) -> Self {
        Self {
            summary: draft.title.clone(),
            text: draft.text.clone(),
            priority: draft.priority,
            due: draft.due_millis(),
        }
    }
}
