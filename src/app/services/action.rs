#[cfg(test)]
#[path = "action_test.rs"]
mod tests;

use std::sync::Arc;

use eyre::Result;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

use crate::models::{Action, ArcEventTx, DraftTask, Event};
use crate::remote::tasks::CreateTaskRequest;
use crate::notice_error;
use crate::remote::{ArcTaskStore, ArcWeatherApi};

/// The sync engine. Consumes UI actions, talks to the remote stores on
/// spawned tasks, and reports back through the event channel. Requests are
/// deliberately not sequenced against each other; a late list response
/// overwrites whatever arrived before it, exactly like the original widget.
pub struct ActionService {
    event_tx: ArcEventTx,
    action_rx: mpsc::UnboundedReceiver<Action>,
    cancel_token: CancellationToken,
    store: ArcTaskStore,
    weather: Option<ArcWeatherApi>,
}

impl ActionService {
    pub fn new(
        event_tx: ArcEventTx,
        action_rx: mpsc::UnboundedReceiver<Action>,
        store: ArcTaskStore,
        weather: Option<ArcWeatherApi>,
        cancel_token: CancellationToken,
    ) -> ActionService {
        ActionService {
            event_tx,
            action_rx,
            cancel_token,
            store,
            weather,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        loop {
            tokio::select! {
                _ = self.cancel_token.cancelled() => {
                    log::debug!("Action service cancelled");
                    return Ok(());
                }

                action = self.action_rx.recv() => {
                    let action = match action {
                        Some(action) => action,
                        None => continue,
                    };

                    let event_tx = Arc::clone(&self.event_tx);
                    let store = Arc::clone(&self.store);
                    match action {
                        Action::LoadTasks => {
                            tokio::spawn(async move { load_tasks(&store, event_tx).await });
                        }

                        Action::CreateTask(draft) => {
                            tokio::spawn(async move { create_task(&store, draft, event_tx).await });
                        }

                        Action::DeleteTask(id) => {
                            tokio::spawn(async move { delete_task(&store, id, event_tx).await });
                        }

                        Action::LoadWeather => {
                            let weather = match self.weather.as_ref() {
                                Some(weather) => Arc::clone(weather),
                                None => continue,
                            };
                            tokio::spawn(async move { load_weather(&weather, event_tx).await });
                        }
                    }
                }
            }
        }
    }
}

/// Fetch the task page and replace the view state with it. A failed load is
/// downgraded to a log line and an empty list; prior entries are not kept.
async fn load_tasks(store: &ArcTaskStore, event_tx: ArcEventTx) -> Result<()> {
    let tasks = match store.list_tasks().await {
        Ok(tasks) => tasks,
        Err(err) => {
            log::error!("Failed to load tasks: {err}");
            vec![]
        }
    };

    event_tx.send(Event::TasksLoaded(tasks)).await?;
    Ok(())
}

async fn create_task(store: &ArcTaskStore, draft: DraftTask, event_tx: ArcEventTx) -> Result<()> {
    if let Err(err) = store.create_task(CreateTaskRequest::from(&draft)).await {
        log::error!("Failed to create task: {err}");
        event_tx
            .send(notice_error!(format!("Could not add task: {err}")))
            .await?;
        return Ok(());
    }

    event_tx.send(Event::TaskCreated).await?;
    // No optimistic insert; a full reload keeps the list consistent with the
    // server at the cost of a round trip.
    load_tasks(store, event_tx).await
}

async fn delete_task(store: &ArcTaskStore, id: i64, event_tx: ArcEventTx) -> Result<()> {
    if let Err(err) = store.delete_task(id).await {
        log::error!("Failed to delete task {id}: {err}");
        event_tx
            .send(notice_error!(format!("Could not delete task: {err}")))
            .await?;
        return Ok(());
    }

    event_tx.send(Event::TaskDeleted(id)).await?;
    load_tasks(store, event_tx).await
}

async fn load_weather(weather: &ArcWeatherApi, event_tx: ArcEventTx) -> Result<()> {
    let (daily, hourly) = tokio::join!(weather.daily_forecast(), weather.hourly_forecast());

    let snapshot = match (daily, hourly) {
        (Ok(daily), Ok(hourly)) => crate::models::WeatherSnapshot { daily, hourly },
        (Err(err), _) | (_, Err(err)) => {
            // The panel simply stays in its loading state.
            log::error!("Failed to load weather: {err}");
            return Ok(());
        }
    };

    event_tx.send(Event::WeatherLoaded(Box::new(snapshot))).await?;
    Ok(())
}
