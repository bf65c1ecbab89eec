#[cfg(test)]
#[path = "weather_test.rs"]
mod tests;

use chrono::{Datelike, NaiveDate};

/// Seven-day forecast, one entry per day across all vectors, index 0 being
/// today. Mirrors the daily arrays of the upstream forecast API.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyWeather {
    pub days: Vec<String>,
    pub temps: Vec<f64>,
    pub wind_speed: Vec<f64>,
    pub wind_direction: Vec<f64>,
    pub weather_code: Vec<u16>,
    pub max_temp: Vec<f64>,
    pub min_temp: Vec<f64>,
    pub precipitation_probability: Vec<f64>,
    pub humidity: Vec<f64>,
}

/// Hour-by-hour forecast over the same window.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HourlyWeather {
    pub time: Vec<String>,
    pub temp: Vec<f64>,
    pub humidity: Vec<f64>,
    pub rain_prob: Vec<f64>,
    pub wind_speed: Vec<f64>,
    pub wind_dir: Vec<f64>,
    pub weather_code: Vec<u16>,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherSnapshot {
    pub daily: DailyWeather,
    pub hourly: HourlyWeather,
}

/// "2025-01-21" -> "Jan 21st". Accepts a full ISO timestamp as well, only
/// the date part is read.
pub fn day_label(iso_date: &str) -> String {
    let date = match NaiveDate::parse_from_str(iso_date.get(..10).unwrap_or(""), "%Y-%m-%d") {
        Ok(d) => d,
        Err(_) => return "Unknown".to_string(),
    };

    const MONTHS: [&str; 12] = [
        "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
    ];

    let day = date.day();
    let suffix = match day {
        1 | 21 | 31 => "st",
        2 | 22 => "nd",
        3 | 23 => "rd",
        _ => "th",
    };

    format!("{} {}{}", MONTHS[date.month0() as usize], day, suffix)
}

/// Bucket a wind direction in degrees into one of eight compass sectors.
pub fn wind_direction_label(degrees: f64) -> &'static str {
    match degrees {
        d if (0.0..22.5).contains(&d) => "NORTH",
        d if (22.5..67.5).contains(&d) => "NORTH EAST",
        d if (67.5..112.5).contains(&d) => "EAST",
        d if (112.5..157.5).contains(&d) => "SOUTH EAST",
        d if (157.5..202.5).contains(&d) => "SOUTH",
        d if (202.5..247.5).contains(&d) => "SOUTH WEST",
        d if (247.5..292.5).contains(&d) => "WEST",
        d if (292.5..337.5).contains(&d) => "NORTH WEST",
        d if (337.5..360.0).contains(&d) => "NORTH",
        _ => "Unknown",
    }
}

/// WMO weather interpretation code to display text.
pub fn weather_code_label(code: u16) -> &'static str {
    match code {
        0 => "Clear sky",
        1 => "Mainly clear",
        2 => "Partly cloudy",
        3 => "Cloudy",
        45 => "Fog",
        48 => "Depositing rime fog",
        51 => "Light drizzle",
        53 => "Moderate drizzle",
        55 => "Heavy drizzle",
        56 => "Light freezing drizzle",
        57 => "Heavy freezing drizzle",
        61 => "Light rain",
        63 => "Moderate rain",
        65 => "Heavy rain",
        66 => "Light freezing rain",
        67 => "Heavy freezing rain",
        71 => "Light snow",
        73 => "Moderate snow",
        75 => "Heavy snow",
        77 => "Snow grains",
        80 => "Light rain showers",
        81 => "Moderate rain showers",
        82 => "Heavy rain showers",
        85 => "Light snow showers",
        86 => "Heavy snow showers",
        95 => "Thunderstorm",
        96 => "Thunderstorm with light hail",
        99 => "Thunderstorm with heavy hail",
        _ => "Unknown weather code",
    }
}
