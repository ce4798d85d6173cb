use crate::client::WeatherSource;
use crate::db::models::InsertOutcome;
use crate::models::location::Location;
use crate::services::ingest;
use crate::services::normalize::normalize;
use chrono::Utc;
use diesel::SqliteConnection;
use log::{debug, error, info, log};
use std::thread;
use std::time::Duration;

/// Tally of one pass over the registry.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub locations: usize,
    /// Locations for which a record was produced, stored or not.
    pub produced: usize,
    pub inserted: usize,
    pub duplicates: usize,
    pub fetch_failures: usize,
    pub storage_failures: usize,
}

/// Fetch, normalize and store current conditions for every location, in order.
///
/// Per-location failures are logged and skipped; nothing here aborts the pass.
pub fn run_once<S: WeatherSource>(
    conn: &mut SqliteConnection,
    source: &S,
    locations: &[Location],
    throttle: Duration,
) -> RunSummary {
    let mut summary = RunSummary {
        locations: locations.len(),
        ..RunSummary::default()
    };

    for (idx, loc) in locations.iter().enumerate() {
        if idx > 0 && !throttle.is_zero() {
            thread::sleep(throttle);
        }

        let observation = match source.current_weather(loc) {
            Ok(o) => o,
            Err(e) => {
                log!(
                    e.log_level(),
                    "Skipping {} ({}, {}): {}",
                    loc.city,
                    loc.latitude,
                    loc.longitude,
                    e
                );
                summary.fetch_failures += 1;
                continue;
            }
        };

        let record = normalize(&observation, loc, Utc::now());
        summary.produced += 1;

        match ingest::append(conn, &record) {
            Ok(InsertOutcome::Inserted) => {
                debug!(
                    "Stored {} observation at {}",
                    loc.city,
                    record.timestamp.as_deref().unwrap_or("-")
                );
                summary.inserted += 1;
            }
            Ok(InsertOutcome::Duplicate) => summary.duplicates += 1,
            Err(e) => {
                error!("Storing {} observation failed: {}; record dropped", loc.city, e);
                summary.storage_failures += 1;
            }
        }
    }

    info!(
        "Pipeline finished: {} record(s) processed for {} location(s) (inserted={}, duplicates={}, fetch_failures={}, storage_failures={})",
        summary.produced,
        summary.locations,
        summary.inserted,
        summary.duplicates,
        summary.fetch_failures,
        summary.storage_failures
    );

    summary
}
