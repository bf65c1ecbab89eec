use crate::config::constants::LOG_FILE_PATH;

use super::*;

#[test]
fn test_load_configuration() {
    let config = load_configuration("./testdata/config.toml").expect("failed to load config");

    let log = &config.log;
    assert_eq!(log.level.as_deref(), Some("debug"));
    let log_filters = log.filters.as_deref().unwrap_or_default();
    assert_eq!(log_filters.len(), 1);
    assert_eq!(log_filters[0].module.as_deref(), Some("taskdeck::remote"));

    let log_file = &log.file;
    assert_eq!(log_file.path, "/var/logs/taskdeck.log");
    assert_eq!(log_file.append, true);

    let server = &config.server;
    assert_eq!(server.base_url, "https://tasks.example.com");
    assert_eq!(server.token.as_deref(), Some("s3cret"));
    assert_eq!(server.timeout_secs, Some(30));

    let weather = &config.weather;
    assert_eq!(weather.enabled, true);
    assert_eq!(weather.base_url, "https://weather.example.com");
    assert_eq!(weather.latitude, -33.87);
    assert_eq!(weather.longitude, 151.21);
}

#[test]
fn test_load_configuration_with_some_default_fields() {
    let config =
        load_configuration("./testdata/config_with_default.toml").expect("failed to load config");

    let log = &config.log;
    assert_eq!(log.level.as_deref(), Some("info"));
    assert_eq!(log.file.path, LOG_FILE_PATH);

    // No token configured means a logged-out session
    assert_eq!(config.server.token, None);
    assert_eq!(config.server.base_url, "https://tasks.example.com");
}

#[test]
fn test_resolve_path() {
    let dir = "/tmp/test";
    let user_path = "user_path";
    unsafe {
        std::env::set_var("TEST_PATH", dir);
        std::env::set_var("USER_PATH", user_path);
    }
    let ret = resolve_path("$TEST_PATH/${USER_PATH}/config.toml").expect("failed to resolve path");
    assert_eq!(ret, format!("{dir}/{user_path}/config.toml"));
}
