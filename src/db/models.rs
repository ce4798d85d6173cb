//! Diesel model structs for the `weather_records` table.
//!
//! The table's primary key is `(timestamp, latitude, longitude)`; rows are
//! append-only and the first write for a key wins.

use diesel::prelude::*;

use crate::schema;

/// Row as stored, read back for inspection and tests.
#[derive(Debug, Clone, PartialEq, Queryable, Selectable)]
#[diesel(table_name = schema::weather_records)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct WeatherRecord {
    pub timestamp: String,
    pub temperature_celsius: Option<f64>,
    pub windspeed_ms: Option<f64>,
    pub weather_code: Option<i32>,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: Option<String>,
    pub continent: Option<String>,
    pub city: Option<String>,
    pub ingestion_timestamp: Option<String>,
}

/// One normalized observation ready for insertion.
///
/// `timestamp` stays optional so an unparseable observation time survives
/// normalization; the NOT NULL constraint on the column then rejects the row
/// at insert time.
#[derive(Debug, Clone, PartialEq, Insertable)]
#[diesel(table_name = schema::weather_records)]
pub struct NewWeatherRecord {
    pub timestamp: Option<String>,
    pub temperature_celsius: Option<f64>,
    pub windspeed_ms: Option<f64>,
    pub weather_code: Option<i32>,
    pub latitude: f64,
    pub longitude: f64,
    pub timezone: String,
    pub continent: String,
    pub city: String,
    pub ingestion_timestamp: String,
}

/// Result of an insert-or-ignore append.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// A row with the same `(timestamp, latitude, longitude)` already existed.
    Duplicate,
}
