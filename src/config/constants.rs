use std::time::Duration;

/// Fixed page requested from the task endpoint on every load.
pub const TASK_PAGE_START: usize = 0;
pub const TASK_PAGE_SIZE: usize = 15;

/// All due dates are presented in this zone regardless of the host locale.
pub const TASK_TIMEZONE: chrono_tz::Tz = chrono_tz::Australia::Sydney;

/// Placeholder values a fresh draft starts with.
pub const DRAFT_DUE_DATE: &str = "2025-01-01";
pub const DRAFT_DUE_TIME: &str = "12:00";

pub const DEFAULT_TASK_BASE_URL: &str = "https://comp2110-portal-server.fly.dev";

pub const DEFAULT_WEATHER_BASE_URL: &str = "https://api.open-meteo.com";

// Sydney
pub const DEFAULT_LATITUDE: f64 = -33.87;
pub const DEFAULT_LONGITUDE: f64 = 151.21;

pub const LOG_FILE_PATH: &str = "/tmp/taskdeck.log";

pub const FRAME_DURATION: Duration = Duration::from_millis(250);

pub const NOTICE_DURATION: Duration = Duration::from_secs(5);
