//! Service layer over `RosterDb`.
//!
//! All repo methods are implemented as `impl RosterService` blocks under
//! `repos/`.

use std::time::Duration;

use crate::RosterDb;
use crate::error::DatabaseError;

/// Entry point for every persistence operation the server performs.
pub struct RosterService {
    db: RosterDb,
}

impl RosterService {
    /// Create a service wrapping a local database.
    ///
    /// # Arguments
    ///
    /// * `db_path` - Path to the libSQL database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened or migrated.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = RosterDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `RosterDb`.
    #[must_use]
    pub const fn from_db(db: RosterDb) -> Self {
        Self { db }
    }

    #[must_use]
    pub const fn db(&self) -> &RosterDb {
        &self.db
    }

    /// Database round-trip time, used by the health probe.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the probe query fails.
    pub async fn ping(&self) -> Result<Duration, DatabaseError> {
        self.db.ping().await
    }
}
