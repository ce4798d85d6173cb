//! Runtime configuration.
//! The program reads no flags or environment variables; `Config::default()` is
//! what a run uses, and tests build their own values.

use std::time::Duration;

use crate::client::{DEFAULT_BASE_URL, DEFAULT_TIMEOUT};
use crate::models::location::{default_locations, Location};

pub const DEFAULT_DATABASE_URL: &str = "weather.db";
pub const DEFAULT_THROTTLE: Duration = Duration::from_millis(100);

#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite database file; created next to the process if absent.
    pub database_url: String,
    pub api_base_url: String,
    pub request_timeout: Duration,
    /// Fixed pause between consecutive API requests.
    pub throttle: Duration,
    pub locations: Vec<Location>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            database_url: DEFAULT_DATABASE_URL.to_string(),
            api_base_url: DEFAULT_BASE_URL.to_string(),
            request_timeout: DEFAULT_TIMEOUT,
            throttle: DEFAULT_THROTTLE,
            locations: default_locations(),
        }
    }
}

impl Config {
    pub fn validate(&self) -> Result<(), String> {
        if self.locations.is_empty() {
            return Err("Location registry is empty; nothing to fetch".to_string());
        }
        if self.request_timeout.is_zero() {
            return Err("Request timeout must be positive".to_string());
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.database_url, "weather.db");
        assert_eq!(cfg.api_base_url, "https://api.open-meteo.com/v1/forecast");
        assert_eq!(cfg.request_timeout, Duration::from_secs(15));
        assert_eq!(cfg.throttle, Duration::from_millis(100));
        assert_eq!(cfg.locations.len(), 15);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn empty_registry_is_rejected() {
        let cfg = Config {
            locations: Vec::new(),
            ..Config::default()
        };
        let err = cfg.validate().unwrap_err();
        assert!(err.contains("empty"), "{err}");
    }

    #[test]
    fn zero_timeout_is_rejected() {
        let cfg = Config {
            request_timeout: Duration::ZERO,
            ..Config::default()
        };
        assert!(cfg.validate().is_err());
    }
}
