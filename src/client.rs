//! Blocking HTTP client for the Open-Meteo forecast API (current conditions only).
//!
//! - Uses `ureq` (no async); one request per call, no retries.
//! - Status codes are handled explicitly instead of being mapped to errors by
//!   the agent, so the response body can be reported for non-2xx replies.

use http::StatusCode;
use log::Level;
use std::time::Duration;

use crate::models::location::Location;
use crate::models::open_meteo::{ApiErrorBody, CurrentWeather, ForecastResponse};

pub const DEFAULT_BASE_URL: &str = "https://api.open-meteo.com/v1/forecast";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(15);

/// Longest body excerpt carried in an HTTP error.
const MAX_ERROR_BODY_CHARS: usize = 512;

#[derive(Debug)]
pub enum OpenMeteoClientError {
    Transport(String),
    Http { status: StatusCode, message: String },
    Json(String),
    MissingCurrentWeather,
}

impl core::fmt::Display for OpenMeteoClientError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            OpenMeteoClientError::Transport(s) => write!(f, "transport error: {}", s),
            OpenMeteoClientError::Http { status, message } => write!(f, "http {}: {}", status.as_u16(), message),
            OpenMeteoClientError::Json(e) => write!(f, "json error: {}", e),
            OpenMeteoClientError::MissingCurrentWeather => write!(f, "'current_weather' missing from response"),
        }
    }
}

impl std::error::Error for OpenMeteoClientError {}

impl From<serde_path_to_error::Error<serde_json::Error>> for OpenMeteoClientError {
    fn from(value: serde_path_to_error::Error<serde_json::Error>) -> Self {
        OpenMeteoClientError::Json(format!("{} at `{}`", value.inner(), value.path()))
    }
}

impl OpenMeteoClientError {
    /// A response without current conditions is a partial answer, not a failure.
    pub fn log_level(&self) -> Level {
        match self {
            OpenMeteoClientError::MissingCurrentWeather => Level::Warn,
            _ => Level::Error,
        }
    }
}

/// Anything that can answer "what is the weather at this location right now".
pub trait WeatherSource {
    fn current_weather(&self, location: &Location) -> Result<CurrentWeather, OpenMeteoClientError>;
}

pub struct OpenMeteoClient {
    agent: ureq::Agent,
    base_url: String,
}

impl OpenMeteoClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Self {
        let config = ureq::Agent::config_builder()
            .timeout_global(Some(timeout))
            .http_status_as_error(false)
            .build();

        OpenMeteoClient {
            agent: config.into(),
            base_url: base_url.into(),
        }
    }

    pub fn get_current_weather(
        &self,
        latitude: f64,
        longitude: f64,
        timezone: &str,
    ) -> Result<CurrentWeather, OpenMeteoClientError> {
        let mut res = self
            .agent
            .get(self.base_url.as_str())
            .header("Accept", "application/json")
            .header("User-Agent", concat!("weather-ingest/", env!("CARGO_PKG_VERSION")))
            .query("latitude", latitude.to_string())
            .query("longitude", longitude.to_string())
            .query("current_weather", "true")
            .query("timezone", timezone)
            .call()
            .map_err(|e| OpenMeteoClientError::Transport(e.to_string()))?;

        let status = res.status();
        let body = res
            .body_mut()
            .read_to_string()
            .map_err(|e| OpenMeteoClientError::Transport(e.to_string()))?;

        parse_current_weather(status, &body)
    }
}

impl WeatherSource for OpenMeteoClient {
    fn current_weather(&self, location: &Location) -> Result<CurrentWeather, OpenMeteoClientError> {
        self.get_current_weather(location.latitude, location.longitude, &location.timezone)
    }
}

/// Interpret a finished exchange: status first, then the `current_weather` field.
pub fn parse_current_weather(status: StatusCode, body: &str) -> Result<CurrentWeather, OpenMeteoClientError> {
    if !status.is_success() {
        return Err(OpenMeteoClientError::Http {
            status,
            message: describe_error_body(body),
        });
    }

    let de = &mut serde_json::Deserializer::from_str(body);
    let parsed: ForecastResponse = serde_path_to_error::deserialize(de)?;
    parsed
        .current_weather
        .ok_or(OpenMeteoClientError::MissingCurrentWeather)
}

fn describe_error_body(body: &str) -> String {
    if let Ok(ApiErrorBody {
        reason: Some(reason), ..
    }) = serde_json::from_str::<ApiErrorBody>(body)
    {
        return reason;
    }
    let trimmed = body.trim();
    if trimmed.is_empty() {
        return String::from("<no body>");
    }
    if trimmed.chars().count() > MAX_ERROR_BODY_CHARS {
        let cut = trimmed.chars().take(MAX_ERROR_BODY_CHARS).collect::<String>();
        format!("{}...", cut)
    } else {
        trimmed.to_string()
    }
}
