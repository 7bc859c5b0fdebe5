use anyhow::{Context, Result};
use sea_orm::{Database, DatabaseConnection};
use std::path::Path;
use tracing::{debug, info};

/// SQLite file in the working directory, created on first use.
pub const DEFAULT_DATABASE_URL: &str = "sqlite://eventhub.db?mode=rwc";

/// Chatbot endpoint of a locally running application server.
pub const DEFAULT_CHATBOT_URL: &str = "http://127.0.0.1:8000/chatbot";

/// Query sent by the smoke test when none is given.
pub const DEFAULT_CHAT_QUERY: &str = "can u say some hackathons";

/// Load variables from a `.env` file if one is present.
pub fn load_dotenv() {
    dotenvy::dotenv().ok();
}

/// Connect to the database, creating the parent directory of a SQLite
/// database file first so that `mode=rwc` can create the file.
pub async fn connect_database(database_url: &str) -> Result<DatabaseConnection> {
    if let Some(parent) = sqlite_parent_dir(database_url) {
        if !parent.exists() {
            debug!("Creating database directory {}", parent.display());
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }
    }

    info!("Connecting to database: {}", database_url);
    let db = Database::connect(database_url)
        .await
        .with_context(|| format!("Failed to connect to database '{}'", database_url))?;
    Ok(db)
}

/// Directory holding the file of a `sqlite://` URL, if it names one.
fn sqlite_parent_dir(database_url: &str) -> Option<&Path> {
    let path = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = path.split('?').next().unwrap_or(path);
    if path.is_empty() || path.starts_with(":memory:") {
        return None;
    }
    Path::new(path)
        .parent()
        .filter(|parent| !parent.as_os_str().is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sqlite_parent_dir() {
        assert_eq!(
            sqlite_parent_dir("sqlite:///var/lib/eventhub/app.db?mode=rwc"),
            Some(Path::new("/var/lib/eventhub"))
        );
        assert_eq!(sqlite_parent_dir("sqlite://data/app.db"), Some(Path::new("data")));
        assert_eq!(sqlite_parent_dir("sqlite://eventhub.db?mode=rwc"), None);
        assert_eq!(sqlite_parent_dir("sqlite::memory:"), None);
        assert_eq!(sqlite_parent_dir("postgresql://user:pw@localhost/db"), None);
    }

    #[tokio::test]
    async fn test_connect_in_memory() {
        let db = connect_database("sqlite::memory:").await.unwrap();
        db.ping().await.unwrap();
    }
}
