pub mod models {
    pub mod location;
    pub mod open_meteo;
}

pub mod client;
pub mod config;
pub mod db {
    pub mod models;
}
pub mod schema;
pub mod utils;
#[cfg(test)]
mod test_support;
pub mod services {
    pub mod ingest;
    pub mod normalize;
    pub mod pipeline;
}

use crate::client::OpenMeteoClient;
use crate::config::Config;
use crate::services::{ingest, pipeline};
use diesel::prelude::*;
use diesel::SqliteConnection;
use log::{error, info, warn};

pub fn run() -> Result<(), String> {
    // 1) Built-in configuration
    let cfg = Config::default();
    cfg.validate()?;
    info!(
        "Config loaded (database={}, api={}, timeout={}s, throttle={}ms, locations={})",
        cfg.database_url,
        cfg.api_base_url,
        cfg.request_timeout.as_secs(),
        cfg.throttle.as_millis(),
        cfg.locations.len()
    );

    // 2) Open the database; the connection is released when `conn` drops, on every return path
    let mut conn =
        SqliteConnection::establish(&cfg.database_url).map_err(|e| format!("DB connection failed: {}", e))?;
    info!("Connected to database {}", cfg.database_url);

    // 3) Make sure weather_records exists
    ingest::ensure_schema(&mut conn)?;

    // 4) One pass over the registry
    let client = OpenMeteoClient::new(cfg.api_base_url.as_str(), cfg.request_timeout);
    info!("Starting weather pipeline for {} location(s)", cfg.locations.len());
    pipeline::run_once(&mut conn, &client, &cfg.locations, cfg.throttle);

    drop(conn);
    info!("Database connection closed");
    Ok(())
}

/// Arguments are not part of the interface; they are ignored with a warning.
fn ignored_arguments(args: impl IntoIterator<Item = std::ffi::OsString>) -> Vec<String> {
    args.into_iter()
        .skip(1)
        .map(|a| a.to_string_lossy().into_owned())
        .collect()
}

fn warn_on_arguments() {
    let ignored = ignored_arguments(std::env::args_os());
    if !ignored.is_empty() {
        warn!("Ignoring command-line argument(s): {}", ignored.join(" "));
    }
}

fn main() {
    let default_filter = env_logger::Env::default().default_filter_or("info");
    env_logger::Builder::from_env(default_filter)
        .format_timestamp_secs()
        .init();

    info!(
        "weather-ingest {} (git {}) starting",
        env!("CARGO_PKG_VERSION"),
        env!("BUILD_TIME_GIT_HASH")
    );
    warn_on_arguments();
    if let Err(e) = run() {
        error!("fatal: {}", e);
        std::process::exit(1);
    }
}
