//! Backend storage repository.

use sqlx::Row;
use sqlx::sqlite::{SqlitePool, SqlitePoolOptions};
use tracing::debug;

use super::model::{Backend, BackendId};
use crate::Result;

/// Repository for backend storage and retrieval.
pub struct BackendRepository {
    pool: SqlitePool,
}

impl BackendRepository {
    /// Create a new repository with the given database path.
    ///
    /// Creates the database and tables if they don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn new(database_path: &str) -> Result<Self> {
        let url = format!("sqlite:{database_path}?mode=rwc");
        let pool = SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&url)
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Create an in-memory repository for testing.
    ///
    /// # Errors
    ///
    /// Returns an error if the database connection fails or schema creation fails.
    pub async fn in_memory() -> Result<Self> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;

        let repo = Self { pool };
        repo.initialize().await?;
        Ok(repo)
    }

    /// Initialize database schema.
    async fn initialize(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS backends (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                label TEXT NOT NULL,
                base_url TEXT NOT NULL UNIQUE,
                created_at TEXT NOT NULL DEFAULT CURRENT_TIMESTAMP
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    /// Get all backends in stable order (creation time, then id).
    ///
    /// Preview entries refer to backends by index into this list, so the
    /// order must not depend on anything mutable.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn list(&self) -> Result<Vec<Backend>> {
        let rows = sqlx::query(
            r"
            SELECT id, label, base_url, created_at
            FROM backends
            ORDER BY created_at ASC, id ASC
            ",
        )
        .fetch_all(&self.pool)
        .await?;

        let backends = rows.iter().map(row_to_backend).collect();
        Ok(backends)
    }

    /// Get backend by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn get(&self, id: BackendId) -> Result<Option<Backend>> {
        let row = sqlx::query(
            r"
            SELECT id, label, base_url, created_at
            FROM backends
            WHERE id = ?
            ",
        )
        .bind(id.0)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.as_ref().map(row_to_backend))
    }

    /// Save a backend (insert or update).
    ///
    /// On insert the generated id is written back into the record.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn save(&self, backend: &mut Backend) -> Result<()> {
        if let Some(id) = backend.id {
            sqlx::query(
                r"
                UPDATE backends SET label = ?, base_url = ?
                WHERE id = ?
                ",
            )
            .bind(&backend.label)
            .bind(&backend.base_url)
            .bind(id.0)
            .execute(&self.pool)
            .await?;
        } else {
            let result = sqlx::query(
                r"
                INSERT INTO backends (label, base_url) VALUES (?, ?)
                ",
            )
            .bind(&backend.label)
            .bind(&backend.base_url)
            .execute(&self.pool)
            .await?;

            backend.id = Some(BackendId::new(result.last_insert_rowid()));
        }

        debug!("saved backend {}", backend.base_url);
        Ok(())
    }

    /// Delete a backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the database query fails.
    pub async fn delete(&self, id: BackendId) -> Result<()> {
        sqlx::query("DELETE FROM backends WHERE id = ?")
            .bind(id.0)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

/// Convert a database row to a Backend.
fn row_to_backend(row: &sqlx::sqlite::SqliteRow) -> Backend {
    Backend {
        id: Some(BackendId::new(row.get("id"))),
        label: row.get("label"),
        base_url: row.get("base_url"),
        created_at: Some(row.get("created_at")),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_create_and_retrieve_backend() {
        let repo = BackendRepository::in_memory().await.unwrap();

        let mut backend = Backend::with_base_url("https://sms.example.com");
        repo.save(&mut backend).await.unwrap();
        assert!(backend.id.is_some());

        let retrieved = repo.get(backend.id.unwrap()).await.unwrap().unwrap();
        assert_eq!(retrieved.base_url, "https://sms.example.com");
        assert_eq!(retrieved.label, "sms.example.com");
        assert!(retrieved.created_at.is_some());
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let repo = BackendRepository::in_memory().await.unwrap();

        let mut first = Backend::with_base_url("https://a.example.com");
        repo.save(&mut first).await.unwrap();
        let mut second = Backend::with_base_url("https://b.example.com");
        repo.save(&mut second).await.unwrap();

        let backends = repo.list().await.unwrap();
        assert_eq!(backends.len(), 2);
        assert_eq!(backends[0].base_url, "https://a.example.com");
        assert_eq!(backends[1].base_url, "https://b.example.com");
    }

    #[tokio::test]
    async fn test_update_existing_backend() {
        let repo = BackendRepository::in_memory().await.unwrap();

        let mut backend = Backend::with_base_url("https://sms.example.com");
        repo.save(&mut backend).await.unwrap();
        let id = backend.id.unwrap();

        backend.label = "Work SMS".to_string();
        repo.save(&mut backend).await.unwrap();

        let backends = repo.list().await.unwrap();
        assert_eq!(backends.len(), 1);
        assert_eq!(backends[0].label, "Work SMS");
        assert_eq!(backends[0].id, Some(id));
    }

    #[tokio::test]
    async fn test_delete_backend() {
        let repo = BackendRepository::in_memory().await.unwrap();

        let mut backend = Backend::with_base_url("https://sms.example.com");
        repo.save(&mut backend).await.unwrap();

        repo.delete(backend.id.unwrap()).await.unwrap();
        assert!(repo.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_duplicate_base_url_rejected() {
        let repo = BackendRepository::in_memory().await.unwrap();

        let mut backend = Backend::with_base_url("https://sms.example.com");
        repo.save(&mut backend).await.unwrap();

        let mut duplicate = Backend::with_base_url("https://sms.example.com");
        assert!(repo.save(&mut duplicate).await.is_err());
    }
}
