//! # hotel-db: Persistence Layer for Hotel Desk
//!
//! This crate provides local storage for the Hotel Desk system.
//! It uses SQLite with sqlx for async operations.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hotel Desk Data Flow                             │
//! │                                                                         │
//! │  Desk command (save_booking)                                           │
//! │       │  snapshot of the whole list                                    │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                     hotel-db (THIS CRATE)                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────────┐    ┌───────────────────┐  ┌──────────────┐ │   │
//! │  │   │   Database    │    │  Repositories     │  │  Migrations  │ │   │
//! │  │   │   (pool.rs)   │    │                   │  │  (embedded)  │ │   │
//! │  │   │               │    │ BookingRepository │  │              │ │   │
//! │  │   │ SqlitePool    │◄───│   └► KeyValue     │  │ 001_initial  │ │   │
//! │  │   │               │    │      Repository   │  │              │ │   │
//! │  │   └───────────────┘    └───────────────────┘  └──────────────┘ │   │
//! │  │                                                                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │   kv_store: "hotel-bookings" → [{"id":1,"guestName":...}, ...]  │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`pool`] - Connection pool creation and configuration
//! - [`migrations`] - Embedded database migrations
//! - [`error`] - Database error types
//! - [`repository`] - Key/value and booking list repositories
//!
//! ## Usage
//!
//! ```rust,ignore
//! use hotel_db::{Database, DbConfig, LoadOutcome};
//!
//! let db = Database::new(DbConfig::new("path/to/hotel.db")).await?;
//!
//! match db.bookings().load().await? {
//!     LoadOutcome::Loaded(list) => println!("{} bookings", list.len()),
//!     LoadOutcome::Missing | LoadOutcome::Corrupt(_) => { /* seed */ }
//! }
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod error;
pub mod migrations;
pub mod pool;
pub mod repository;

// =============================================================================
// Re-exports
// =============================================================================

pub use error::{DbError, DbResult};
pub use pool::{Database, DbConfig};

// Repository re-exports for convenience
pub use repository::booking::{BookingRepository, LoadOutcome, BOOKINGS_KEY};
pub use repository::kv::KeyValueRepository;
