use ratatui::{Terminal, backend::TestBackend};

use super::*;
use crate::models::{DailyWeather, HourlyWeather, WeatherSnapshot};

fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
    terminal
        .backend()
        .buffer()
        .content
        .iter()
        .map(|cell| cell.symbol())
        .collect()
}

fn sample_snapshot() -> WeatherSnapshot {
    WeatherSnapshot {
        daily: DailyWeather {
            days: vec!["2025-01-21".to_string(), "2025-01-22".to_string()],
            temps: vec![24.0, 22.5],
            wind_speed: vec![12.0, 8.0],
            wind_direction: vec![90.0, 200.0],
            weather_code: vec![0, 61],
            max_temp: vec![28.1, 25.0],
            min_temp: vec![18.3, 17.0],
            precipitation_probability: vec![5.0, 60.0],
            humidity: vec![55.0, 70.0],
        },
        hourly: HourlyWeather {
            time: vec![
                "2025-01-21T09:00".to_string(),
                "2025-01-21T10:00".to_string(),
                "2025-01-22T09:00".to_string(),
            ],
            temp: vec![21.0, 22.0, 19.0],
            humidity: vec![60.0, 58.0, 72.0],
            rain_prob: vec![0.0, 5.0, 40.0],
            wind_speed: vec![10.0, 11.0, 7.0],
            wind_dir: vec![45.0, 50.0, 180.0],
            weather_code: vec![0, 1, 61],
        },
    }
}

#[test]
fn test_render_loading_without_snapshot() {
    let backend = TestBackend::new(80, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut pane = WeatherPane::default();

    terminal.draw(|f| pane.render(f, f.area())).unwrap();

    assert!(buffer_text(&terminal).contains("Fetching the forecast..."));
}

#[test]
fn test_render_daily() {
    let backend = TestBackend::new(100, 12);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut pane = WeatherPane::default();
    pane.set_snapshot(sample_snapshot());

    terminal.draw(|f| pane.render(f, f.area())).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Jan 21st"));
    assert!(text.contains("Clear sky"));
    assert!(text.contains("Light rain"));
    assert!(text.contains("28.1°C"));
}

#[test]
fn test_render_hourly_popup() {
    let backend = TestBackend::new(100, 24);
    let mut terminal = Terminal::new(backend).unwrap();
    let mut pane = WeatherPane::default();
    pane.set_snapshot(sample_snapshot());
    pane.open_hourly();
    assert!(pane.showing_hourly());

    terminal.draw(|f| pane.render(f, f.area())).unwrap();

    let text = buffer_text(&terminal);
    assert!(text.contains("Hour by hour, Jan 21st"));
    assert!(text.contains("09:00"));
    assert!(text.contains("10:00"));
}

#[test]
fn test_open_hourly_requires_snapshot() {
    let mut pane = WeatherPane::default();
    pane.open_hourly();
    assert!(!pane.showing_hourly());
}

#[test]
fn test_day_selection_clamps() {
    let mut pane = WeatherPane::default();
    pane.set_snapshot(sample_snapshot());
    pane.prev_day();
    assert_eq!(pane.selected_day, 0);
    pane.next_day();
    pane.next_day();
    pane.next_day();
    assert_eq!(pane.selected_day, 1);
}

#[test]
fn test_hours_of_day() {
    let snapshot = sample_snapshot();
    assert_eq!(hours_of_day(&snapshot.hourly, "2025-01-21"), vec![0, 1]);
    assert_eq!(hours_of_day(&snapshot.hourly, "2025-01-22"), vec![2]);
    assert!(hours_of_day(&snapshot.hourly, "").is_empty());
}

#[test]
fn test_hour_label() {
    assert_eq!(hour_label("2025-01-21T13:00"), "13:00");
    assert_eq!(hour_label("13:00"), "13:00");
}
