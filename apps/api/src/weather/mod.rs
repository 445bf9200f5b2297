//! Current-weather lookup against Open-Meteo, plus WMO weather-code labels.
//! The sea-safety heuristic built on it lives in `sea_safety`.

pub mod sea_safety;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_WEATHER_URL: &str = "https://api.open-meteo.com/v1/forecast";
/// Suva.
pub const DEFAULT_LATITUDE: f64 = -18.1416;
pub const DEFAULT_LONGITUDE: f64 = 178.4419;
const REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("weather service returned status {0}")]
    Status(u16),
}

/// Current conditions. Temperature in °C, wind speed in km/h.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherReading {
    pub temperature: f64,
    #[serde(alias = "weathercode")]
    pub weather_code: u16,
    pub windspeed: f64,
}

#[async_trait]
pub trait WeatherSource: Send + Sync {
    /// `Ok(None)` when the service answered without current conditions.
    async fn current(&self) -> Result<Option<WeatherReading>, WeatherError>;
}

#[derive(Debug, Deserialize)]
struct ForecastResponse {
    current_weather: Option<WeatherReading>,
}

#[derive(Clone)]
pub struct OpenMeteoClient {
    client: Client,
    url: String,
    latitude: f64,
    longitude: f64,
}

impl OpenMeteoClient {
    pub fn new(url: String, latitude: f64, longitude: f64) -> Result<Self, WeatherError> {
        let client = Client::builder()
            .timeout(std::time::Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()?;

        Ok(Self {
            client,
            url,
            latitude,
            longitude,
        })
    }
}

#[async_trait]
impl WeatherSource for OpenMeteoClient {
    async fn current(&self) -> Result<Option<WeatherReading>, WeatherError> {
        let response = self
            .client
            .get(&self.url)
            .query(&[
                ("latitude", self.latitude.to_string()),
                ("longitude", self.longitude.to_string()),
                ("current_weather", "true".to_string()),
                ("timezone", "Pacific/Fiji".to_string()),
            ])
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let forecast: ForecastResponse = response.json().await?;
        debug!("Current weather: {:?}", forecast.current_weather);
        Ok(forecast.current_weather)
    }
}

/// Short label for a WMO weather interpretation code.
pub fn weather_label(code: u16) -> &'static str {
    match code {
        0 => "Clear",
        1..=3 => "Cloudy",
        45..=48 => "Fog",
        51..=57 => "Drizzle",
        61..=67 => "Rain",
        80..=82 => "Showers",
        95..=u16::MAX => "Storm",
        _ => "Fair",
    }
}
