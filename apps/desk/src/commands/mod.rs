//! # Commands Module
//!
//! Every operation the front end can invoke.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs      ◄─── You are here (exports)
//! ├── booking.rs  ◄─── Form: save, edit, cancel, delete, check in/out
//! ├── table.rs    ◄─── Table: rows, search, status filter, sort, summary
//! └── config.rs   ◄─── Configuration and status message
//! ```
//!
//! ## State Injection (Option B)
//! Each command declares only the state it needs:
//! ```rust,ignore
//! // Only needs the ledger
//! fn sort_by(bookings: &BookingState, field: SortField)
//!
//! // Mutates, persists, and reports
//! async fn check_in(db: &DbState, bookings: &BookingState, messages: &MessageState, id)
//! ```

pub mod booking;
pub mod config;
pub mod table;

#[cfg(test)]
pub(crate) mod testing {
    use chrono::NaiveDate;
    use hotel_db::{Database, DbConfig};

    use crate::state::{Clock, ConfigState};
    use crate::Desk;

    /// Day of June 2024 the test desk treats as today.
    pub const TODAY: u32 = 10;

    pub fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    /// A desk over a fresh in-memory database, seeded with the samples.
    pub async fn desk() -> Desk {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let clock = Clock::Fixed {
            today: day(TODAY),
            now_millis: 1_718_000_000_000,
        };
        crate::launch_with_database(db, ConfigState::default(), clock)
            .await
            .unwrap()
    }
}
