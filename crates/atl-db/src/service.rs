//! Service layer for store operations.
//!
//! `AtlService` wraps `AtlDb` (raw database access). All repo methods are
//! implemented as `impl AtlService` blocks under [`crate::repos`].

use crate::AtlDb;
use crate::error::DatabaseError;

pub struct AtlService {
    db: AtlDb,
}

impl AtlService {
    /// Open a service over a local database file, or `":memory:"` for tests.
    ///
    /// # Errors
    ///
    /// Returns `DatabaseError` if the database cannot be opened.
    pub async fn new_local(db_path: &str) -> Result<Self, DatabaseError> {
        let db = AtlDb::open_local(db_path).await?;
        Ok(Self { db })
    }

    /// Create from an existing `AtlDb`.
    #[must_use]
    pub const fn from_db(db: AtlDb) -> Self {
        Self { db }
    }

    /// Access the underlying database handle.
    #[must_use]
    pub const fn db(&self) -> &AtlDb {
        &self.db
    }
}
