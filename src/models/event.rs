use std::sync::Arc;

use tokio::sync::mpsc;
use tui_textarea::Input;

use super::{Task, WeatherSnapshot};

#[derive(Debug)]
pub enum Event {
    Notice(crate::models::NoticeMessage),

    /// The mapped result of a list request. Always replaces the view state
    /// wholesale; an empty vector after a failed load is intentional.
    TasksLoaded(Vec<Task>),
    TaskCreated,
    TaskDeleted(i64),
    WeatherLoaded(Box<WeatherSnapshot>),

    KeyboardCharInput(Input),
    KeyboardEsc,
    KeyboardEnter,
    KeyboardTab,
    KeyboardBackTab,
    KeyboardCtrlC,

    Quit,

    UiTick,
    UiScrollUp,
    UiScrollDown,
}

#[macro_export]
macro_rules! notice_error {
    ($msg:expr) => {
        Event::Notice($crate::models::NoticeMessage::error($msg))
    };
    ($msg:expr, $duration:expr) => {
        Event::Notice($crate::models::NoticeMessage::error($msg).with_duration($duration))
    };
}

#[async_trait::async_trait]
pub trait EventTx {
    async fn send(&self, event: Event) -> Result<(), mpsc::error::SendError<Event>>;
}

#[async_trait::async_trait]
impl EventTx for mpsc::Sender<Event> {
    async fn send(&self, event: Event) -> Result<(), mpsc::error::SendError<Event>> {
        self.send(event).await
    }
}

#[async_trait::async_trait]
impl EventTx for mpsc::UnboundedSender<Event> {
    async fn send(&self, event: Event) -> Result<(), mpsc::error::SendError<Event>> {
        self.send(event)
    }
}

pub type ArcEventTx = Arc<dyn EventTx + Send + Sync>;
