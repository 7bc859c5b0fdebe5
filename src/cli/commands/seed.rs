use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use sea_orm::DatabaseConnection;
use std::path::Path;
use tracing::{debug, error, info, trace};

use crate::config::connect_database;
use crate::seed::fixtures::{EventFixture, default_events, load_events};
use crate::seed::{SeedError, SeedReport, seed_database};

pub async fn seed(database_url: &str, events_file: Option<&Path>) -> Result<()> {
    trace!("Entering seed function");
    info!("Starting database seeding");
    debug!("Database URL: {}", database_url);

    let events = match events_file {
        Some(path) => {
            info!("Loading events from {}", path.display());
            load_events(path)?
        }
        None => default_events()?,
    };
    info!("Loaded {} events", events.len());

    let db = connect_database(database_url).await?;

    let result = migrate_and_seed(&db, &events).await;

    // The connection is released whether or not seeding succeeded.
    if let Err(e) = db.close().await {
        error!("Failed to close database connection: {}", e);
    }

    println!("{}", summary(&result));
    result.map(|_| ()).map_err(Into::into)
}

async fn migrate_and_seed(
    db: &DatabaseConnection,
    events: &[EventFixture],
) -> Result<SeedReport, SeedError> {
    info!("Ensuring schema exists");
    Migrator::up(db, None).await?;
    seed_database(db, events).await
}

/// One-line report printed at the end of a seeding run.
fn summary(result: &Result<SeedReport, SeedError>) -> String {
    match result {
        Ok(report) => format!("Database seeded successfully! Added {} events.", report.events),
        Err(e) => format!("Error seeding database: {e}"),
    }
}
