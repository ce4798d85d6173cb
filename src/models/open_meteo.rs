//! Response shapes for the Open-Meteo forecast endpoint (`/v1/forecast`).
//!
//! Notes
//! - Only the `current_weather=true` subset is modeled.
//! - Measurement fields are kept as raw JSON values. The API contract says
//!   they are numbers, but type mismatches are resolved during normalization
//!   (null on failure) and must not reject the whole response.

use serde::Deserialize;
use serde_json::Value;

/// Only `current_weather` is decoded; the metadata around it (coordinates,
/// elevation, units) is ignored so its shape cannot reject a usable reply.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct ForecastResponse {
    /// Absent (or null) when the API did not produce current conditions.
    #[serde(default)]
    pub current_weather: Option<CurrentWeather>,
}

/// Snapshot of present-moment conditions for one location.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CurrentWeather {
    /// Local wall time in the requested timezone, e.g. `2025-10-19T14:15`.
    #[serde(default)]
    pub time: Option<Value>,
    /// Degrees Celsius.
    #[serde(default)]
    pub temperature: Option<Value>,
    #[serde(default)]
    pub windspeed: Option<Value>,
    /// WMO weather interpretation code.
    #[serde(default)]
    pub weathercode: Option<Value>,
}

/// Body returned alongside 4xx responses, e.g. for an unknown timezone.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorBody {
    #[serde(default)]
    pub reason: Option<String>,
}
