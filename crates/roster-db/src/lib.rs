//! # roster-db
//!
//! libSQL persistence for Roster.
//!
//! Owns the `users` table, its embedded migrations, and the `RosterService`
//! repository methods the HTTP layer calls.

pub mod error;
pub mod helpers;
mod migrations;
pub mod repos;
pub mod service;
pub mod updates;

use std::time::{Duration, Instant};

use error::DatabaseError;
use libsql::Builder;

/// Central database handle.
///
/// Wraps a libSQL database and a single shared connection.
pub struct RosterDb {
    #[allow(dead_code)]
    db: libsql::Database,
    conn: libsql::Connection,
}

impl RosterDb {
    /// Open a local database at the given path, or `":memory:"`.
    ///
    /// Runs migrations automatically on open.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or
    /// migrations fail.
    pub async fn open_local(path: &str) -> Result<Self, DatabaseError> {
        let db = Builder::new_local(path).build().await?;
        let conn = db.connect()?;

        conn.execute("PRAGMA foreign_keys = ON", ())
            .await
            .map_err(|e| DatabaseError::Migration(format!("PRAGMA foreign_keys: {e}")))?;

        let roster_db = Self { db, conn };
        roster_db.run_migrations().await?;
        tracing::debug!(path, "database opened");
        Ok(roster_db)
    }

    /// Access the underlying libSQL connection for direct queries.
    #[must_use]
    pub const fn conn(&self) -> &libsql::Connection {
        &self.conn
    }

    /// Round-trip a trivial query and return how long it took.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the query fails or returns no rows.
    pub async fn ping(&self) -> Result<Duration, DatabaseError> {
        let started = Instant::now();
        let mut rows = self.conn.query("SELECT 1", ()).await?;
        rows.next().await?.ok_or(DatabaseError::NoResult)?;
        Ok(started.elapsed())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    async fn test_db() -> RosterDb {
        RosterDb::open_local(":memory:").await.unwrap()
    }

    #[tokio::test]
    async fn open_local_creates_users_table() {
        let db = test_db().await;
        let mut rows = db
            .conn()
            .query(
                "SELECT name FROM sqlite_master WHERE type='table' AND name=?1",
                ["users"],
            )
            .await
            .unwrap();
        assert!(rows.next().await.unwrap().is_some());
    }

    #[tokio::test]
    async fn migrations_are_idempotent() {
        let db = test_db().await;
        db.run_migrations().await.unwrap();
        db.run_migrations().await.unwrap();
    }

    #[tokio::test]
    async fn ping_succeeds_on_open_db() {
        let db = test_db().await;
        let elapsed = db.ping().await.unwrap();
        assert!(elapsed < Duration::from_secs(5));
    }

    #[tokio::test]
    async fn file_backed_db_persists_across_opens() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("roster.db");
        let path = path.to_str().unwrap();

        {
            let db = RosterDb::open_local(path).await.unwrap();
            db.conn()
                .execute(
                    "INSERT INTO users (email, first_name, last_name) VALUES (?1, ?2, ?3)",
                    ["a@example.com", "Ann", "Lee"],
                )
                .await
                .unwrap();
        }

        let db = RosterDb::open_local(path).await.unwrap();
        let mut rows = db.conn().query("SELECT COUNT(*) FROM users", ()).await.unwrap();
        let row = rows.next().await.unwrap().unwrap();
        assert_eq!(row.get::<i64>(0).unwrap(), 1);
    }
}
