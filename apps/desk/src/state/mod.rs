//! # State Module
//!
//! Desk state, split into focused types (Option B) rather than one big
//! `AppState`: each command declares exactly the state it touches.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────┐ ┌──────────────┐ ┌──────────────┐ ┌──────────────┐   │
//! │  │   DbState    │ │ BookingState │ │ MessageState │ │ ConfigState  │   │
//! │  │              │ │              │ │              │ │              │   │
//! │  │  Database    │ │  Arc<Mutex<  │ │  Arc<Mutex<  │ │  hotel_name  │   │
//! │  │  (SQLite     │ │    Ledger    │ │    Board     │ │  total_rooms │   │
//! │  │   pool)      │ │  >>  + Clock │ │  >> + timer  │ │  timeout     │   │
//! │  └──────────────┘ └──────────────┘ └──────────────┘ └──────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • DbState: Database has internal connection pool (thread-safe)        │
//! │  • BookingState: one lock per ledger operation, never held on await    │
//! │  • MessageState: lock shared with its expiry task                      │
//! │  • ConfigState: Read-only after initialization                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod bookings;
mod config;
mod db;
mod message;

pub use bookings::{BookingState, Clock, Ledger, SaveOutcome, Snapshot};
pub use config::ConfigState;
pub use db::DbState;
pub use message::{MessageKind, MessageState, StatusMessage};
