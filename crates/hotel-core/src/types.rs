//! # Domain Types
//!
//! Core domain types used throughout Hotel Desk.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │  BookingDraft   │──►│ BookingDetails  │──►│    Booking      │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  form fields    │   │  validated      │   │  id (u64)       │       │
//! │  │  may be blank   │   │  all present    │   │  status         │       │
//! │  └─────────────────┘   └─────────────────┘   └─────────────────┘       │
//! │        validation::validate_draft ─┘    into_booking(id, status) ─┘    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐                              │
//! │  │ BookingStatus   │   │   IdSequence    │                              │
//! │  │  Upcoming       │   │  strictly       │                              │
//! │  │  CheckedIn      │   │  increasing ids │                              │
//! │  │  CheckedOut     │   └─────────────────┘                              │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Wire Format
//! Bookings serialize with camelCase field names and `YYYY-MM-DD` dates,
//! which is exactly what the persisted list holds.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Booking identifier.
pub type BookingId = u64;

// =============================================================================
// Booking Status
// =============================================================================

/// Where a guest is in their stay.
///
/// ## Transitions
/// ```text
/// Upcoming ──check_in──► CheckedIn ──check_out──► CheckedOut
/// ```
/// [`BookingStatus::can_advance_to`] describes the forward-only path. The
/// desk does not enforce it: an explicit check-in or check-out always
/// overwrites the status, and moving backwards is only logged.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub enum BookingStatus {
    /// Reserved, guest has not arrived.
    #[default]
    #[serde(rename = "upcoming")]
    Upcoming,
    /// Guest is in the room.
    #[serde(rename = "checked-in")]
    CheckedIn,
    /// Stay is over; the room no longer counts as occupied.
    #[serde(rename = "checked-out")]
    CheckedOut,
}

impl BookingStatus {
    /// Every status, in lifecycle order.
    pub const ALL: [BookingStatus; 3] = [
        BookingStatus::Upcoming,
        BookingStatus::CheckedIn,
        BookingStatus::CheckedOut,
    ];

    /// The slug stored on disk and used as the table row class.
    pub const fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "upcoming",
            BookingStatus::CheckedIn => "checked-in",
            BookingStatus::CheckedOut => "checked-out",
        }
    }

    /// Human label: the slug with its hyphen replaced by a space.
    pub const fn label(&self) -> &'static str {
        match self {
            BookingStatus::Upcoming => "upcoming",
            BookingStatus::CheckedIn => "checked in",
            BookingStatus::CheckedOut => "checked out",
        }
    }

    /// Whether moving to `next` follows the forward-only lifecycle.
    ///
    /// Staying in place is not an advance.
    pub fn can_advance_to(&self, next: BookingStatus) -> bool {
        next > *self
    }

    /// A checked-out booking no longer holds its room.
    #[inline]
    pub const fn holds_room(&self) -> bool {
        !matches!(self, BookingStatus::CheckedOut)
    }
}

impl fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BookingStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BookingStatus::ALL
            .into_iter()
            .find(|status| status.as_str() == s.trim())
            .ok_or_else(|| format!("unknown booking status: {s}"))
    }
}

// =============================================================================
// Booking
// =============================================================================

/// One guest reservation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Booking {
    /// Unique, never reused.
    #[ts(type = "number")]
    pub id: BookingId,

    pub guest_name: String,

    pub guest_email: String,

    pub guest_phone: String,

    /// Room number, `1..=total_rooms`.
    pub room_number: u32,

    #[ts(as = "String")]
    pub check_in: NaiveDate,

    /// Always after `check_in`.
    #[ts(as = "String")]
    pub check_out: NaiveDate,

    /// Free text; empty when the guest asked for nothing.
    #[serde(default)]
    pub special_requests: String,

    pub status: BookingStatus,
}

impl Booking {
    /// Whether `date` falls within `[check_in, check_out]`, both ends included.
    #[inline]
    pub fn is_active_on(&self, date: NaiveDate) -> bool {
        self.check_in <= date && date <= self.check_out
    }

    /// Whether this booking occupies its room on `date`.
    #[inline]
    pub fn occupies_room_on(&self, date: NaiveDate) -> bool {
        self.status.holds_room() && self.is_active_on(date)
    }

    /// Number of nights between check-in and check-out.
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }
}

// =============================================================================
// Booking Draft
// =============================================================================

/// The form entry being created or edited.
///
/// Every user-entered field may be blank. `id == None` means the draft is a
/// new booking; otherwise it is a copy of the booking being edited.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct BookingDraft {
    #[ts(type = "number | null")]
    pub id: Option<BookingId>,

    pub guest_name: String,

    pub guest_email: String,

    pub guest_phone: String,

    pub room_number: Option<u32>,

    #[ts(as = "Option<String>")]
    pub check_in: Option<NaiveDate>,

    #[ts(as = "Option<String>")]
    pub check_out: Option<NaiveDate>,

    pub special_requests: String,

    pub status: BookingStatus,
}

impl BookingDraft {
    /// A blank form.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when saving this draft creates a booking.
    #[inline]
    pub fn is_new(&self) -> bool {
        self.id.is_none()
    }
}

impl From<&Booking> for BookingDraft {
    fn from(booking: &Booking) -> Self {
        BookingDraft {
            id: Some(booking.id),
            guest_name: booking.guest_name.clone(),
            guest_email: booking.guest_email.clone(),
            guest_phone: booking.guest_phone.clone(),
            room_number: Some(booking.room_number),
            check_in: Some(booking.check_in),
            check_out: Some(booking.check_out),
            special_requests: booking.special_requests.clone(),
            status: booking.status,
        }
    }
}

// =============================================================================
// Booking Details
// =============================================================================

/// A draft that passed validation: every required field is present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BookingDetails {
    pub guest_name: String,
    pub guest_email: String,
    pub guest_phone: String,
    pub room_number: u32,
    pub check_in: NaiveDate,
    pub check_out: NaiveDate,
    pub special_requests: String,
}

impl BookingDetails {
    /// Attaches identity and status.
    pub fn into_booking(self, id: BookingId, status: BookingStatus) -> Booking {
        Booking {
            id,
            guest_name: self.guest_name,
            guest_email: self.guest_email,
            guest_phone: self.guest_phone,
            room_number: self.room_number,
            check_in: self.check_in,
            check_out: self.check_out,
            special_requests: self.special_requests,
            status,
        }
    }
}

// =============================================================================
// Id Sequence
// =============================================================================

/// Hands out booking ids.
///
/// Each id is `max(last + 1, now_millis)`: ids stay close to creation time
/// but are strictly increasing, so two creates in the same millisecond never
/// collide and deleting the newest booking does not free its id for reuse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IdSequence {
    last: BookingId,
}

impl IdSequence {
    /// Starts after the highest id already present.
    pub fn after<'a>(bookings: impl IntoIterator<Item = &'a Booking>) -> Self {
        IdSequence {
            last: bookings.into_iter().map(|b| b.id).max().unwrap_or(0),
        }
    }

    /// The most recently issued (or observed) id.
    #[inline]
    pub const fn last(&self) -> BookingId {
        self.last
    }

    /// Issues the next id given the current wall-clock time in milliseconds.
    pub fn next(&mut self, now_millis: u64) -> BookingId {
        self.last = now_millis.max(self.last.saturating_add(1));
        self.last
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
