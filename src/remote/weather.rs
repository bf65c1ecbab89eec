#[cfg(test)]
#[path = "weather_test.rs"]
mod tests;

use async_trait::async_trait;
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::config::{WeatherConfig, user_agent};
use crate::models::{DailyWeather, HourlyWeather};
use crate::remote::{RemoteError, WeatherApi};

const DAILY_FIELDS: &str = "temperature_2m_mean,windspeed_10m_max,winddirection_10m_dominant,weathercode,temperature_2m_max,temperature_2m_min,precipitation_probability_mean,relative_humidity_2m_mean";
const HOURLY_FIELDS: &str = "temperature_2m,relativehumidity_2m,precipitation_probability,windspeed_10m,winddirection_10m,weathercode";

/// Client for an Open-Meteo style forecast endpoint. Public API, no auth.
pub struct OpenMeteo {
    base_url: String,
    latitude: f64,
    longitude: f64,
}

#[async_trait]
impl WeatherApi for OpenMeteo {
    async fn daily_forecast(&self) -> Result<DailyWeather> {
        let res = self
            .forecast_request(&[("daily", DAILY_FIELDS)])
            .send()
            .await
            .wrap_err("fetching daily forecast")?;
        let res = check_status(res).await?;

        let res = res
            .json::<DailyResponse>()
            .await
            .wrap_err("parsing daily forecast")?;
        Ok(res.daily.into())
    }

    async fn hourly_forecast(&self) -> Result<HourlyWeather> {
        let res = self
            .forecast_request(&[("hourly", HOURLY_FIELDS)])
            .send()
            .await
            .wrap_err("fetching hourly forecast")?;
        let res = check_status(res).await?;

        let res = res
            .json::<HourlyResponse>()
            .await
            .wrap_err("parsing hourly forecast")?;
        Ok(res.hourly.into())
    }
}

impl OpenMeteo {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            latitude: 0.0,
            longitude: 0.0,
        }
    }

    pub fn with_coordinates(mut self, latitude: f64, longitude: f64) -> Self {
        self.latitude = latitude;
        self.longitude = longitude;
        self
    }

    fn forecast_request(&self, fields: &[(&str, &str)]) -> reqwest::RequestBuilder {
        reqwest::Client::new()
            .get(format!("{}/v1/forecast", self.base_url))
            .header("User-Agent", user_agent())
            .query(&[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
            ])
            .query(fields)
            .query(&[("timezone", "auto")])
    }
}

impl From<&WeatherConfig> for OpenMeteo {
    fn from(config: &WeatherConfig) -> Self {
        OpenMeteo::new(&config.base_url).with_coordinates(config.latitude, config.longitude)
    }
}

async fn check_status(res: reqwest::Response) -> Result<reqwest::Response> {
    if res.status().is_success() {
        return Ok(res);
    }

    let status = res.status().as_u16();
    let body = res.text().await.unwrap_or_default();
    Err(RemoteError { status, body }.into())
}

#[derive(Default, Debug, Serialize, Deserialize)]
struct DailyResponse {
    daily: DailyData,
}

#[derive(Default, Debug, Serialize, Deserialize)]
struct DailyData {
    time: Vec<String>,
    temperature_2m_mean: Vec<f64>,
    windspeed_10m_max: Vec<f64>,
    winddirection_10m_dominant: Vec<f64>,
    weathercode: Vec<u16>,
    temperature_2m_max: Vec<f64>,
    temperature_2m_min: Vec<f64>,
    precipitation_probability_mean: Vec<f64>,
    relative_humidity_2m_mean: Vec<f64>,
}

#[derive(Default, Debug, Serialize, Deserialize)]
struct HourlyResponse {
    hourly: HourlyData,
}

#[derive(Default, Debug, Serialize, Deserialize)]
struct HourlyData {
    time: Vec<String>,
    temperature_2m: Vec<f64>,
    relativehumidity_2m: Vec<f64>,
    precipitation_probability: Vec<f64>,
    windspeed_10m: Vec<f64>,
    winddirection_10m: Vec<f64>,
    weathercode: Vec<u16>,
}

impl From<DailyData> for DailyWeather {
    fn from(data: DailyData) -> Self {
        Self {
            days: data.time,
            temps: data.temperature_2m_mean,
            wind_speed: data.windspeed_10m_max,
            wind_direction: data.winddirection_10m_dominant,
            weather_code: data.weathercode,
            max_temp: data.temperature_2m_max,
            min_temp: data.temperature_2m_min,
            precipitation_probability: data.precipitation_probability_mean,
            humidity: data.relative_humidity_2m_mean,
        }
    }
}

impl From<HourlyData> for HourlyWeather {
    fn from(data: HourlyData) -> Self {
        Self {
            time: data.time,
            temp: data.temperature_2m,
            humidity: data.relativehumidity_2m,
            rain_prob: data.precipitation_probability,
            wind_speed: data.windspeed_10m,
            wind_dir: data.winddirection_10m,
            weather_code: data.weathercode,
        }
    }
}
