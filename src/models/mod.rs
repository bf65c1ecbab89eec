pub mod action;
pub mod event;
pub mod notice;
pub mod session;
pub mod task;
pub mod weather;

pub use action::Action;
pub use event::{ArcEventTx, Event, EventTx};
pub use notice::*;
pub use session::{ConfigSessionProvider, Session, SessionProvider};
pub use task::{DraftTask, Task};
pub use weather::{
    DailyWeather, HourlyWeather, WeatherSnapshot, day_label, weather_code_label,
    wind_direction_label,
};
