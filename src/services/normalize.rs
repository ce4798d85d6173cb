use crate::db::models::NewWeatherRecord;
use crate::models::location::Location;
use crate::models::open_meteo::CurrentWeather;
use crate::utils::{coerce_f64, coerce_i32, coerce_timestamp, INGESTION_TIMESTAMP_FORMAT};
use chrono::{DateTime, Utc};

/// Map one current-conditions snapshot onto a table row.
///
/// Fields that cannot be coerced become NULL; location labels and the
/// ingestion time are attached unchanged.
pub fn normalize(observation: &CurrentWeather, location: &Location, ingested_at: DateTime<Utc>) -> NewWeatherRecord {
    NewWeatherRecord {
        timestamp: coerce_timestamp(observation.time.as_ref()),
        temperature_celsius: coerce_f64(observation.temperature.as_ref()),
        windspeed_ms: coerce_f64(observation.windspeed.as_ref()),
        weather_code: coerce_i32(observation.weathercode.as_ref()),
        latitude: location.latitude,
        longitude: location.longitude,
        timezone: location.timezone.clone(),
        continent: location.continent.clone(),
        city: location.city.clone(),
        ingestion_timestamp: ingested_at.format(INGESTION_TIMESTAMP_FORMAT).to_string(),
    }
}
