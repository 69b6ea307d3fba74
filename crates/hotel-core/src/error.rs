//! # Error Types
//!
//! Domain-specific error types for hotel-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  hotel-core errors (this file)                                         │
//! │  ├── CoreError        - Ledger operation failures                      │
//! │  └── ValidationError  - Form draft rejected                            │
//! │                                                                         │
//! │  hotel-db errors (separate crate)                                      │
//! │  └── DbError          - Storage failures                               │
//! │                                                                         │
//! │  hotel-desk errors                                                     │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Design Principles
//! 1. Use `thiserror` for derive macros (not manual impl)
//! 2. The `Display` text of a [`ValidationError`] is the exact sentence the
//!    form shows, so every failure has its own message
//! 3. Errors are enum variants, never String

use thiserror::Error;

use crate::types::BookingId;

// =============================================================================
// Core Error
// =============================================================================

/// Ledger operation errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// No booking with this id is in the list.
    ///
    /// ## When This Occurs
    /// - The table row was deleted by an earlier action
    /// - A stale id was held by the front end
    #[error("Booking not found: {0}")]
    BookingNotFound(BookingId),

    /// The draft was rejected (wraps ValidationError).
    #[error("{0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Reasons a booking draft is rejected.
///
/// Variants are listed in the order validation checks them; the first
/// failing check is the one reported.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter guest name.")]
    GuestNameRequired,

    #[error("Please enter guest email.")]
    GuestEmailRequired,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter guest phone number.")]
    GuestPhoneRequired,

    #[error("Please select a room.")]
    RoomRequired,

    /// New bookings only: the room is occupied today.
    #[error("Selected room is not available. Please choose another room.")]
    RoomUnavailable { room: u32 },

    /// Edits only: the room number is outside the hotel.
    #[error("Room {room} does not exist.")]
    RoomOutOfRange { room: u32, total_rooms: u32 },

    #[error("Please select check-in date.")]
    CheckInRequired,

    #[error("Please select check-out date.")]
    CheckOutRequired,

    #[error("Check-out date must be after check-in date.")]
    CheckOutNotAfterCheckIn,

    /// Table search input is longer than the allowed maximum.
    #[error("Search must be at most {max} characters")]
    SearchTooLong { max: usize },
}

impl ValidationError {
    /// The form field the front end should focus for this error.
    pub fn field(&self) -> &'static str {
        match self {
            ValidationError::GuestNameRequired => "guestName",
            ValidationError::GuestEmailRequired | ValidationError::InvalidEmail => "guestEmail",
            ValidationError::GuestPhoneRequired => "guestPhone",
            ValidationError::RoomRequired
            | ValidationError::RoomUnavailable { .. }
            | ValidationError::RoomOutOfRange { .. } => "roomNumber",
            ValidationError::CheckInRequired => "checkIn",
            ValidationError::CheckOutRequired | ValidationError::CheckOutNotAfterCheckIn => {
                "checkOut"
            }
            ValidationError::SearchTooLong { .. } => "search",
        }
    }
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
