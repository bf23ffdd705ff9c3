//! libSQL backend — async `CompletionStore` implementation.
//!
//! Supports local file and in-memory databases. The flag lives in a
//! `settings` table as a JSON value under [`COMPLETION_KEY`], so bumping
//! the key version starts every user fresh without touching old rows.

use std::path::Path;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use libsql::{Connection, Database, params};
use tracing::info;

use crate::error::StorageError;

use super::migrations;
use super::traits::{COMPLETION_KEY, CompletionStore};

/// libSQL completion store.
///
/// Stores a single connection that is reused for all operations.
/// `libsql::Connection` is `Send + Sync` and safe for concurrent async use.
pub struct LibSqlStore {
    #[allow(dead_code)]
    db: Arc<Database>,
    conn: Connection,
}

impl LibSqlStore {
    /// Open (or create) a local database file and run migrations.
    pub async fn new_local(path: &Path) -> Result<Self, StorageError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                StorageError::Open(format!("Failed to create database directory: {e}"))
            })?;
        }

        let db = libsql::Builder::new_local(path)
            .build()
            .await
            .map_err(|e| StorageError::Open(format!("Failed to open libSQL database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| StorageError::Open(format!("Failed to create connection: {e}")))?;

        migrations::run_migrations(&conn).await?;
        info!(path = %path.display(), "Database opened");

        Ok(Self {
            db: Arc::new(db),
            conn,
        })
    }

    /// Create an in-memory database (for tests).
    pub async fn new_memory() -> Result<Self, StorageError> {
        let db = libsql::Builder::new_local(":memory:")
            .build()
            .await
            .map_err(|e| StorageError::Open(format!("Failed to create in-memory database: {e}")))?;

        let conn = db
            .connect()
            .map_err(|e| StorageError::Open(format!("Failed to create connection: {e}")))?;

        migrations::run_migrations(&conn).await?;

        Ok(Self {
            db: Arc::new(db),
            conn,
        })
    }

    async fn get_value(&self, key: &str) -> Result<Option<serde_json::Value>, StorageError> {
        let mut rows = self
            .conn
            .query("SELECT value FROM settings WHERE key = ?1", params![key])
            .await
            .map_err(|e| StorageError::Query(format!("get_value: {e}")))?;

        match rows.next().await {
            Ok(Some(row)) => {
                let value_str: String = row.get(0).unwrap_or_else(|_| "null".to_string());
                let value: serde_json::Value =
                    serde_json::from_str(&value_str).unwrap_or(serde_json::Value::Null);
                Ok(Some(value))
            }
            Ok(None) => Ok(None),
            Err(e) => Err(StorageError::Query(format!("get_value: {e}"))),
        }
    }

    async fn set_value(&self, key: &str, value: &serde_json::Value) -> Result<(), StorageError> {
        let now = Utc::now().to_rfc3339();
        let value_str =
            serde_json::to_string(value).map_err(|e| StorageError::Serialization(e.to_string()))?;

        self.conn
            .execute(
                "INSERT INTO settings (key, value, updated_at) VALUES (?1, ?2, ?3)
                 ON CONFLICT (key) DO UPDATE SET value = ?2, updated_at = ?3",
                params![key, value_str, now],
            )
            .await
            .map_err(|e| StorageError::Query(format!("set_value: {e}")))?;

        Ok(())
    }
}

#[async_trait]
impl CompletionStore for LibSqlStore {
    async fn load(&self) -> Result<bool, StorageError> {
        let value = self.get_value(COMPLETION_KEY).await?;
        Ok(value.and_then(|v| v.as_bool()).unwrap_or(false))
    }

    async fn store(&self, completed: bool) -> Result<(), StorageError> {
        self.set_value(COMPLETION_KEY, &serde_json::Value::Bool(completed))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn fresh_database_loads_false() {
        let store = LibSqlStore::new_memory().await.unwrap();
        assert!(!store.load().await.unwrap());
    }

    #[tokio::test]
    async fn store_and_load_roundtrip() {
        let store = LibSqlStore::new_memory().await.unwrap();

        store.store(true).await.unwrap();
        assert!(store.load().await.unwrap());

        store.store(false).await.unwrap();
        assert!(!store.load().await.unwrap());
    }

    #[tokio::test]
    async fn flag_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tour.db");

        {
            let store = LibSqlStore::new_local(&path).await.unwrap();
            store.store(true).await.unwrap();
        }

        let reopened = LibSqlStore::new_local(&path).await.unwrap();
        assert!(reopened.load().await.unwrap());
    }

    #[tokio::test]
    async fn malformed_value_loads_as_false() {
        let store = LibSqlStore::new_memory().await.unwrap();
        store
            .conn
            .execute(
                "INSERT INTO settings (key, value, updated_at) VALUES (?1, 'not json', ?2)",
                params![COMPLETION_KEY, Utc::now().to_rfc3339()],
            )
            .await
            .unwrap();

        assert!(!store.load().await.unwrap());
    }

    #[tokio::test]
    async fn key_version_bump_resets_completion() {
        let store = LibSqlStore::new_memory().await.unwrap();
        store
            .set_value(
                "demo-guided-tour-complete-v0",
                &serde_json::Value::Bool(true),
            )
            .await
            .unwrap();

        // Old-version rows are invisible to the current key.
        assert!(!store.load().await.unwrap());
    }
}
