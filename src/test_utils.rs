#[cfg(test)]
pub mod test_utils {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{Database, DatabaseConnection};

    /// Create an in-memory SQLite database with the schema applied.
    pub async fn setup_test_db() -> DatabaseConnection {
        let db = Database::connect("sqlite::memory:")
            .await
            .expect("Failed to connect to in-memory database");

        Migrator::up(&db, None)
            .await
            .expect("Failed to run migrations");

        db
    }
}
