//! # hotel-core: Pure Booking Logic for Hotel Desk
//!
//! This crate is the **heart** of Hotel Desk. It contains the reservation
//! rules as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Hotel Desk Architecture                          │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front end (form + table)                     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ commands                               │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    hotel-desk (view-model)                      │   │
//! │  │    save_booking, check_in, sort_by, list_bookings, etc.         │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ hotel-core (THIS CRATE) ★                       │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌────────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │   types   │  │availability│  │   query   │  │ validation│  │   │
//! │  │   │  Booking  │  │  rooms     │  │  filter   │  │   draft   │  │   │
//! │  │   │  Status   │  │  today     │  │  sort     │  │   checks  │  │   │
//! │  │   └───────────┘  └────────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO DATABASE • NO CLOCK • PURE FUNCTIONS             │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    hotel-db (Persistence Layer)                 │   │
//! │  │              SQLite key/value store, migrations                 │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Domain types (Booking, BookingStatus, BookingDraft)
//! - [`error`] - Domain error types
//! - [`validation`] - Draft validation, in the order the form reports it
//! - [`availability`] - Active-today and available-room derivations
//! - [`query`] - Table search, status filter and sort
//! - [`samples`] - The two bookings a fresh desk starts with
//! - [`display`] - Date and status formatting for the table
//!
//! ## Example Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use hotel_core::availability::available_rooms;
//! use hotel_core::samples::sample_bookings;
//!
//! let today = NaiveDate::from_ymd_opt(2024, 6, 10).unwrap();
//! let bookings = sample_bookings(today);
//!
//! // The checked-in sample occupies its room today.
//! let free = available_rooms(&bookings, 20, today);
//! assert_eq!(free.len(), 19);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod availability;
pub mod display;
pub mod error;
pub mod query;
pub mod samples;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use error::{CoreError, CoreResult, ValidationError};
pub use query::{BookingFilter, SortDirection, SortField, SortOrder};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// Number of rooms in the hotel when nothing else is configured.
///
/// Rooms are numbered `1..=DEFAULT_TOTAL_ROOMS`.
pub const DEFAULT_TOTAL_ROOMS: u32 = 20;

/// Maximum length of a table search term.
pub const MAX_SEARCH_LEN: usize = 100;
