use crate::db::models::{InsertOutcome, NewWeatherRecord};
use crate::schema;
use diesel::prelude::*;
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use log::info;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Create `weather_records` if it does not exist yet. Safe to call on every run.
pub fn ensure_schema(conn: &mut SqliteConnection) -> Result<(), String> {
    let applied = conn
        .run_pending_migrations(MIGRATIONS)
        .map_err(|e| format!("Creating weather_records failed: {}", e))?;
    if applied.is_empty() {
        info!("Table weather_records already present");
    } else {
        let versions = applied.iter().map(|v| v.to_string()).collect::<Vec<_>>().join(", ");
        info!("Table weather_records created (migration {})", versions);
    }
    Ok(())
}

/// Insert one record, leaving an existing row with the same key untouched.
///
/// Only the primary-key conflict is absorbed; any other constraint failure
/// (e.g. a NULL timestamp) comes back as an error.
pub fn append(conn: &mut SqliteConnection, record: &NewWeatherRecord) -> QueryResult<InsertOutcome> {
    use schema::weather_records::dsl as W;

    let inserted = diesel::insert_into(W::weather_records)
        .values(record)
        .on_conflict((W::timestamp, W::latitude, W::longitude))
        .do_nothing()
        .execute(conn)?;

    Ok(if inserted == 0 {
        InsertOutcome::Duplicate
    } else {
        InsertOutcome::Inserted
    })
}
