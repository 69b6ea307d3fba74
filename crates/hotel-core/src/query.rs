//! # Table Query
//!
//! Search, status filter and column sort for the bookings table.
//!
//! ## Pipeline
//! ```text
//! bookings (insertion order)
//!      │
//!      ▼  search: name / email / room number contains term (case-insensitive)
//!      ▼  status: keep one status if a filter is set
//!      ▼  sort:   stable, by one column, asc or desc
//! rows shown in the table
//! ```
//!
//! The underlying list is never reordered; every call derives a fresh view.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Booking, BookingStatus};

// =============================================================================
// Sort
// =============================================================================

/// Table column a user can sort by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub enum SortField {
    Id,
    GuestName,
    GuestEmail,
    GuestPhone,
    RoomNumber,
    CheckIn,
    CheckOut,
    SpecialRequests,
    /// By stored name: checked-in, checked-out, upcoming.
    Status,
}

impl SortField {
    /// Three-way comparison of two bookings on this column.
    ///
    /// Text compares by code point, so it is case-sensitive.
    pub fn compare(self, a: &Booking, b: &Booking) -> Ordering {
        match self {
            SortField::Id => a.id.cmp(&b.id),
            SortField::GuestName => a.guest_name.cmp(&b.guest_name),
            SortField::GuestEmail => a.guest_email.cmp(&b.guest_email),
            SortField::GuestPhone => a.guest_phone.cmp(&b.guest_phone),
            SortField::RoomNumber => a.room_number.cmp(&b.room_number),
            SortField::CheckIn => a.check_in.cmp(&b.check_in),
            SortField::CheckOut => a.check_out.cmp(&b.check_out),
            SortField::SpecialRequests => a.special_requests.cmp(&b.special_requests),
            SortField::Status => a.status.as_str().cmp(b.status.as_str()),
        }
    }
}

/// Sort direction.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "lowercase")]
#[ts(export)]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            SortDirection::Asc => SortDirection::Desc,
            SortDirection::Desc => SortDirection::Asc,
        }
    }
}

/// Current table sort.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct SortOrder {
    pub field: SortField,
    pub direction: SortDirection,
}

impl Default for SortOrder {
    /// Earliest arrival first.
    fn default() -> Self {
        SortOrder {
            field: SortField::CheckIn,
            direction: SortDirection::Asc,
        }
    }
}

impl SortOrder {
    /// Applies a column header click.
    ///
    /// The same column flips direction; a new column starts ascending.
    pub fn select(&mut self, field: SortField) {
        if self.field == field {
            self.direction = self.direction.toggled();
        } else {
            self.field = field;
            self.direction = SortDirection::Asc;
        }
    }

    /// Compares two bookings under this order.
    pub fn compare(&self, a: &Booking, b: &Booking) -> Ordering {
        let ord = self.field.compare(a, b);
        match self.direction {
            SortDirection::Asc => ord,
            SortDirection::Desc => ord.reverse(),
        }
    }
}

// =============================================================================
// Filter
// =============================================================================

/// Search text plus optional status restriction.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase", default)]
#[ts(export)]
pub struct BookingFilter {
    pub search: String,
    pub status: Option<BookingStatus>,
}

impl BookingFilter {
    /// Whether a booking passes both the search and the status filter.
    pub fn matches(&self, booking: &Booking) -> bool {
        self.matches_search(booking) && self.status.map_or(true, |s| booking.status == s)
    }

    fn matches_search(&self, booking: &Booking) -> bool {
        if self.search.is_empty() {
            return true;
        }

        let term = self.search.to_lowercase();
        booking.guest_name.to_lowercase().contains(&term)
            || booking.guest_email.to_lowercase().contains(&term)
            || booking.room_number.to_string().contains(&term)
    }
}

/// Filters then sorts, returning borrowed rows in display order.
pub fn filter_and_sort<'a>(
    bookings: &'a [Booking],
    filter: &BookingFilter,
    order: &SortOrder,
) -> Vec<&'a Booking> {
    let mut rows: Vec<&Booking> = bookings.iter().filter(|b| filter.matches(b)).collect();
    // `sort_by` is stable: equal keys keep insertion order.
    rows.sort_by(|a, b| order.compare(a, b));
    rows
}

// =============================================================================
// Unit Tests
// =============================================================================
