//! `SQLite` snapshot store for locally cached data

use anyhow::{Context, Result};
use chrono::Utc;
use rusqlite::{Connection, OptionalExtension, params};
use std::path::PathBuf;

use crate::models::Trend;
use crate::paths;

/// Fixed snapshot key for the cached trend list
pub const TRENDS_KEY: &str = "trends";

/// Key-value store of JSON snapshots.
///
/// The aggregator treats writes as fire-and-forget; reads serve cache hits
/// before the first refresh completes.
pub trait SnapshotCache {
    /// Store a snapshot under a key, overwriting any prior value
    fn store(&self, key: &str, value: &serde_json::Value) -> Result<()>;

    /// Load the snapshot stored under a key, if any
    fn load(&self, key: &str) -> Result<Option<serde_json::Value>>;
}

/// Database connection wrapper
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open or create the database at the default location
    pub fn open() -> Result<Self> {
        let path = paths::database_path()?;
        Self::open_path(&path)
    }

    /// Open or create the database at a specific path
    pub fn open_path(path: &PathBuf) -> Result<Self> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).context("Failed to create data directory")?;
        }

        let conn = Connection::open(path).context("Failed to open database")?;

        let db = Self { conn };
        db.init()?;

        Ok(db)
    }

    /// Initialize the database schema
    fn init(&self) -> Result<()> {
        self.conn.execute_batch(
            r"
            CREATE TABLE IF NOT EXISTS snapshots (
                key TEXT PRIMARY KEY,
                value TEXT NOT NULL,
                updated_at TEXT NOT NULL
            );
            ",
        )?;

        Ok(())
    }

    /// Store the normalized trend list under the fixed trends key
    pub fn store_trends(&self, trends: &[Trend]) -> Result<()> {
        let value = serde_json::to_value(trends).context("Failed to serialize trends")?;
        self.store(TRENDS_KEY, &value)
    }

    /// Load the cached trend list, if one was persisted
    pub fn load_trends(&self) -> Result<Option<Vec<Trend>>> {
        match self.load(TRENDS_KEY)? {
            Some(value) => {
                let trends =
                    serde_json::from_value(value).context("Failed to parse cached trends")?;
                Ok(Some(trends))
            }
            None => Ok(None),
        }
    }
}

impl SnapshotCache for Database {
    fn store(&self, key: &str, value: &serde_json::Value) -> Result<()> {
        self.conn.execute(
            r"INSERT OR REPLACE INTO snapshots (key, value, updated_at)
               VALUES (?1, ?2, ?3)",
            params![key, value.to_string(), Utc::now().to_rfc3339()],
        )?;
        Ok(())
    }

    fn load(&self, key: &str) -> Result<Option<serde_json::Value>> {
        let raw: Option<String> = self
            .conn
            .query_row(
                "SELECT value FROM snapshots WHERE key = ?1",
                params![key],
                |row| row.get(0),
            )
            .optional()?;

        match raw {
            Some(json) => {
                let value = serde_json::from_str(&json).context("Corrupt snapshot value")?;
                Ok(Some(value))
            }
            None => Ok(None),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_database_init() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.sqlite");
        let _db = Database::open_path(&path).unwrap();
        // Should create without error
    }

    #[test]
    fn test_snapshot_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.sqlite");
        let db = Database::open_path(&path).unwrap();

        assert!(db.load("trends").unwrap().is_none());

        let value = serde_json::json!([{ "id": "1" }]);
        db.store("trends", &value).unwrap();
        assert_eq!(db.load("trends").unwrap(), Some(value));
    }

    #[test]
    fn test_store_overwrites_prior_value() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.sqlite");
        let db = Database::open_path(&path).unwrap();

        db.store("trends", &serde_json::json!(["old"])).unwrap();
        db.store("trends", &serde_json::json!(["new"])).unwrap();

        assert_eq!(
            db.load("trends").unwrap(),
            Some(serde_json::json!(["new"]))
        );
    }

    #[test]
    fn test_typed_trend_helpers() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("test.sqlite");
        let db = Database::open_path(&path).unwrap();

        let trends = vec![Trend::new("1", "#Photography", "120000")];
        db.store_trends(&trends).unwrap();

        assert_eq!(db.load_trends().unwrap(), Some(trends));
    }
}
