//! # Database State
//!
//! Wraps the `Database` handle for use in desk commands.
//!
//! ## Write Ordering
//! ```text
//! command A: mutate (rev 7) ──► release lock ──────────────► persist(rev 7)  skipped
//! command B:          mutate (rev 8) ──► release ──► persist(rev 8)  written
//! ```
//! Snapshots are persisted outside the ledger lock, so two commands can
//! reach storage out of order. Writes go through one async lock and a
//! snapshot older than the last one written is dropped.

use hotel_db::Database;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::error::ApiError;
use crate::state::Snapshot;

/// Wrapper around `Database` for desk state management.
#[derive(Debug)]
pub struct DbState {
    db: Database,
    written: Mutex<u64>,
}

impl DbState {
    /// Creates a new DbState wrapping the database connection.
    pub fn new(db: Database) -> Self {
        DbState {
            db,
            written: Mutex::new(0),
        }
    }

    /// Returns a reference to the inner Database.
    pub fn inner(&self) -> &Database {
        &self.db
    }

    /// Writes the whole booking list unless a newer snapshot already landed.
    ///
    /// A failed write leaves the last written revision as it was, so the
    /// next snapshot, which carries the full list, brings storage up to date.
    pub async fn persist(&self, snapshot: &Snapshot) -> Result<(), ApiError> {
        let mut written = self.written.lock().await;
        if snapshot.revision <= *written {
            debug!(
                revision = snapshot.revision,
                written = *written,
                "Skipping stale snapshot"
            );
            return Ok(());
        }

        self.db.bookings().save_all(&snapshot.bookings).await?;
        *written = snapshot.revision;

        info!(
            revision = snapshot.revision,
            count = snapshot.bookings.len(),
            "Bookings persisted"
        );
        Ok(())
    }
}
