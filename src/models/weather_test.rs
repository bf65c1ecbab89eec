use super::*;

#[test]
fn test_day_label_suffixes() {
    assert_eq!(day_label("2025-01-01"), "Jan 1st");
    assert_eq!(day_label("2025-02-02"), "Feb 2nd");
    assert_eq!(day_label("2025-03-03"), "Mar 3rd");
    assert_eq!(day_label("2025-04-04"), "Apr 4th");
    assert_eq!(day_label("2025-05-11"), "May 11th");
    assert_eq!(day_label("2025-06-21"), "Jun 21st");
    assert_eq!(day_label("2025-07-22"), "Jul 22nd");
    assert_eq!(day_label("2025-08-23"), "Aug 23rd");
    assert_eq!(day_label("2025-12-31"), "Dec 31st");
}

#[test]
fn test_day_label_accepts_timestamps() {
    assert_eq!(day_label("2025-01-21T14:00"), "Jan 21st");
    assert_eq!(day_label("garbage"), "Unknown");
    assert_eq!(day_label(""), "Unknown");
}

#[test]
fn test_wind_direction_sectors() {
    assert_eq!(wind_direction_label(0.0), "NORTH");
    assert_eq!(wind_direction_label(22.4), "NORTH");
    assert_eq!(wind_direction_label(22.5), "NORTH EAST");
    assert_eq!(wind_direction_label(90.0), "EAST");
    assert_eq!(wind_direction_label(135.0), "SOUTH EAST");
    assert_eq!(wind_direction_label(180.0), "SOUTH");
    assert_eq!(wind_direction_label(225.0), "SOUTH WEST");
    assert_eq!(wind_direction_label(270.0), "WEST");
    assert_eq!(wind_direction_label(300.0), "NORTH WEST");
    assert_eq!(wind_direction_label(350.0), "NORTH");
    assert_eq!(wind_direction_label(360.0), "Unknown");
    assert_eq!(wind_direction_label(-1.0), "Unknown");
}

#[test]
fn test_weather_code_lookup() {
    assert_eq!(weather_code_label(0), "Clear sky");
    assert_eq!(weather_code_label(3), "Cloudy");
    assert_eq!(weather_code_label(65), "Heavy rain");
    assert_eq!(weather_code_label(99), "Thunderstorm with heavy hail");
    assert_eq!(weather_code_label(42), "Unknown weather code");
}
