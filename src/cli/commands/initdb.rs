use anyhow::Result;
use migration::{Migrator, MigratorTrait};
use tracing::{debug, error, info, trace};

use crate::config::connect_database;

pub async fn init_database(database_url: &str) -> Result<()> {
    trace!("Entering init_database function");
    info!("Initializing database");
    debug!("Database URL: {}", database_url);

    let db = connect_database(database_url).await?;
    debug!("Database connection established");

    info!("Running database migrations");
    let result = Migrator::up(&db, None).await;

    if let Err(e) = db.close().await {
        error!("Failed to close database connection: {}", e);
    }

    match result {
        Ok(()) => {
            info!("Database migrations completed successfully");
            println!("Database initialization completed successfully!");
            Ok(())
        }
        Err(e) => {
            error!("Failed to run database migrations: {}", e);
            Err(e.into())
        }
    }
}
