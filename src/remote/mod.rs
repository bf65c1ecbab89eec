pub mod tasks;
pub mod weather;

pub use tasks::HttpTaskStore;
pub use weather::OpenMeteo;

#[cfg(test)]
use mockall::{automock, predicate::*};

use async_trait::async_trait;
use eyre::Result;
use std::sync::Arc;
use thiserror::Error;

use crate::models::{DailyWeather, HourlyWeather, Task};
use tasks::CreateTaskRequest;

/// Non-2xx response from a remote endpoint. Transport and decode failures
/// stay as plain `eyre` errors.
#[derive(Debug, Error)]
#[error("server returned {status}: {body}")]
pub struct RemoteError {
    pub status: u16,
    pub body: String,
}

/// The remote task store. The server is the source of truth; the widget's
/// local list is a cache replaced on every call that touches it.
#[cfg_attr(test, automock)]
#[async_trait]
pub trait TaskStore {
    /// Fetch the fixed first page of tasks, mapped to view models with the
    /// due label already computed. Order is the server's.
    async fn list_tasks(&self) -> Result<Vec<Task>>;
    async fn create_task(&self, req: CreateTaskRequest) -> Result<()>;
    async fn delete_task(&self, id: i64) -> Result<()>;
}

pub type ArcTaskStore = Arc<dyn TaskStore + Send + Sync>;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait WeatherApi {
    async fn daily_forecast(&self) -> Result<DailyWeather>;
    async fn hourly_forecast(&self) -> Result<HourlyWeather>;
}

pub type ArcWeatherApi = Arc<dyn WeatherApi + Send + Sync>;
