//! Coercion of loosely typed API values into column values.
//!
//! Every helper returns `None` rather than an error: a field that cannot be
//! interpreted is stored as NULL and the rest of the record is kept.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde_json::Value;

/// Persisted layout of observation timestamps.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";
/// Persisted layout of ingestion timestamps (UTC, microseconds).
pub const INGESTION_TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

const NAIVE_LAYOUTS: &[&str] = &[
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
];

/// Parse an observation time as reported by the API (local wall time).
///
/// Offsets on RFC 3339 inputs are dropped, keeping the wall time as written.
pub fn parse_observation_time(raw: &str) -> Option<NaiveDateTime> {
    let s = raw.trim();
    if s.is_empty() {
        return None;
    }
    for layout in NAIVE_LAYOUTS {
        if let Ok(ts) = NaiveDateTime::parse_from_str(s, layout) {
            return Some(ts);
        }
    }
    if let Ok(ts) = DateTime::parse_from_rfc3339(s) {
        return Some(ts.naive_local());
    }
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
}

pub fn coerce_timestamp(value: Option<&Value>) -> Option<String> {
    let raw = value?.as_str()?;
    parse_observation_time(raw).map(|ts| ts.format(TIMESTAMP_FORMAT).to_string())
}

/// Numbers and numeric strings; non-finite results count as missing.
pub fn coerce_f64(value: Option<&Value>) -> Option<f64> {
    let n = match value? {
        Value::Number(n) => n.as_f64()?,
        Value::String(s) => s.trim().parse::<f64>().ok()?,
        _ => return None,
    };
    n.is_finite().then_some(n)
}

/// Integral numbers (including `3.0`) and integer strings that fit an `i32`.
pub fn coerce_i32(value: Option<&Value>) -> Option<i32> {
    let v = value?;
    if let Some(i) = v.as_i64() {
        return i32::try_from(i).ok();
    }
    let f = coerce_f64(Some(v))?;
    if f.fract() != 0.0 || f < f64::from(i32::MIN) || f > f64::from(i32::MAX) {
        return None;
    }
    Some(f as i32)
}
