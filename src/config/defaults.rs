use super::constants::*;

pub(crate) fn log_level() -> Option<String> {
    Some("info".to_string())
}

pub(crate) fn log_file_path() -> String {
    LOG_FILE_PATH.to_string()
}

pub(crate) fn task_base_url() -> String {
    DEFAULT_TASK_BASE_URL.to_string()
}

pub(crate) fn weather_base_url() -> String {
    DEFAULT_WEATHER_BASE_URL.to_string()
}

pub(crate) fn latitude() -> f64 {
    DEFAULT_LATITUDE
}

pub(crate) fn longitude() -> f64 {
    DEFAULT_LONGITUDE
}
