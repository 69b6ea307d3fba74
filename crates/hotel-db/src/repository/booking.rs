//! # Booking Repository
//!
//! The booking list is persisted as a single JSON array under
//! [`BOOKINGS_KEY`]. Every successful mutation on the desk rewrites the
//! whole array.
//!
//! ## Load Outcomes
//! ```text
//! kv_store["hotel-bookings"]
//!       │
//!       ├── no row ──────────────────► LoadOutcome::Missing
//!       ├── JSON array of bookings ──► LoadOutcome::Loaded(list)   (may be empty)
//!       └── anything else ───────────► LoadOutcome::Corrupt(reason)
//! ```
//! A corrupt value is reported, never raised: the desk falls back to the
//! sample bookings exactly as it does for a missing value.

use hotel_core::Booking;
use tracing::{debug, warn};

use crate::error::DbResult;
use crate::repository::kv::KeyValueRepository;

/// Storage key for the booking list.
pub const BOOKINGS_KEY: &str = "hotel-bookings";

/// What was found under [`BOOKINGS_KEY`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LoadOutcome {
    /// A well-formed list.
    Loaded(Vec<Booking>),
    /// Nothing stored yet.
    Missing,
    /// A value that is not a booking list; holds the parse error.
    Corrupt(String),
}

impl LoadOutcome {
    /// The loaded list, if it holds at least one booking.
    pub fn into_non_empty(self) -> Option<Vec<Booking>> {
        match self {
            LoadOutcome::Loaded(list) if !list.is_empty() => Some(list),
            _ => None,
        }
    }
}

/// Encodes the list in its stored form.
pub fn encode_bookings(bookings: &[Booking]) -> DbResult<String> {
    Ok(serde_json::to_string(bookings)?)
}

/// Decodes a stored value. Never fails: bad input becomes `Corrupt`.
pub fn decode_bookings(raw: &str) -> LoadOutcome {
    match serde_json::from_str::<Vec<Booking>>(raw) {
        Ok(list) => LoadOutcome::Loaded(list),
        Err(e) => LoadOutcome::Corrupt(e.to_string()),
    }
}

/// Repository for the persisted booking list.
#[derive(Debug, Clone)]
pub struct BookingRepository {
    kv: KeyValueRepository,
}

impl BookingRepository {
    /// Creates a new BookingRepository on top of the key/value store.
    pub fn new(kv: KeyValueRepository) -> Self {
        BookingRepository { kv }
    }

    /// Reads the stored list.
    ///
    /// Only storage failures are errors; see [`LoadOutcome`].
    pub async fn load(&self) -> DbResult<LoadOutcome> {
        let Some(raw) = self.kv.get(BOOKINGS_KEY).await? else {
            debug!("No stored bookings");
            return Ok(LoadOutcome::Missing);
        };

        let outcome = decode_bookings(&raw);
        match &outcome {
            LoadOutcome::Loaded(list) => debug!(count = list.len(), "Loaded bookings"),
            LoadOutcome::Corrupt(reason) => {
                warn!(reason = %reason, "Stored bookings are unreadable, ignoring them")
            }
            LoadOutcome::Missing => {}
        }

        Ok(outcome)
    }

    /// Replaces the stored list with `bookings`.
    pub async fn save_all(&self, bookings: &[Booking]) -> DbResult<()> {
        let json = encode_bookings(bookings)?;
        self.kv.set(BOOKINGS_KEY, &json).await?;

        debug!(count = bookings.len(), "Saved bookings");
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
