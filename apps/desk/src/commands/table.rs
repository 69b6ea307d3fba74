//! # Table Commands
//!
//! The bookings table: rows in display order, the dashboard counters, and
//! the search / status filter / sort controls.
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────────────────┐
//! │ Search: [maria        ]  Status: [All ▾]     3 bookings · 18 rooms free  │
//! ├────┬──────────────┬────────────────────┬──────┬─────────────┬────────────┤
//! │ ID │ Guest ▲      │ Email              │ Room │ Check-in    │ Status     │
//! ├────┼──────────────┼────────────────────┼──────┼─────────────┼────────────┤
//! │  2 │ Maria Garcia │ maria.garcia@..    │    5 │ Jun 10, 2024│ checked in │
//! └────┴──────────────┴────────────────────┴──────┴─────────────┴────────────┘
//! ```
//! Every control returns the full [`TableResponse`] so the view re-renders
//! from one value.

use hotel_core::availability::OccupancySummary;
use hotel_core::display::{format_date, format_status, row_class};
use hotel_core::{Booking, BookingFilter, BookingStatus, SortField, SortOrder};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{BookingState, Ledger};

/// One table row: the booking plus its display strings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingRow {
    #[serde(flatten)]
    pub booking: Booking,

    /// e.g. `Jun 10, 2024`
    pub check_in_label: String,
    pub check_out_label: String,

    /// e.g. `checked in`
    pub status_label: &'static str,

    /// Style class, e.g. `checked-in`
    pub row_class: &'static str,
}

impl From<&Booking> for BookingRow {
    fn from(booking: &Booking) -> Self {
        BookingRow {
            check_in_label: format_date(booking.check_in),
            check_out_label: format_date(booking.check_out),
            status_label: format_status(booking.status),
            row_class: row_class(booking.status),
            booking: booking.clone(),
        }
    }
}

/// Everything the table view shows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableResponse {
    pub rows: Vec<BookingRow>,
    pub summary: OccupancySummary,
    pub filter: BookingFilter,
    pub sort: SortOrder,
}

impl TableResponse {
    fn from_ledger(ledger: &Ledger, bookings: &BookingState) -> Self {
        TableResponse {
            rows: ledger.visible().into_iter().map(BookingRow::from).collect(),
            summary: ledger.summary(bookings.clock().today()),
            filter: ledger.filter().clone(),
            sort: ledger.sort(),
        }
    }
}

/// Gets the table as currently filtered and sorted.
pub fn list_bookings(bookings: &BookingState) -> TableResponse {
    debug!("list_bookings command");
    bookings.with_ledger(|l| TableResponse::from_ledger(l, bookings))
}

/// Sets the search text. Matches guest name, email, or room number.
pub fn set_search(bookings: &BookingState, query: String) -> Result<TableResponse, ApiError> {
    debug!(query = %query, "set_search command");
    bookings.with_ledger_mut(|l| {
        l.set_search(&query)?;
        Ok::<_, ApiError>(TableResponse::from_ledger(l, bookings))
    })
}

/// Restricts the table to one status, or clears the restriction.
pub fn set_status_filter(bookings: &BookingState, status: Option<BookingStatus>) -> TableResponse {
    debug!(?status, "set_status_filter command");
    bookings.with_ledger_mut(|l| {
        l.set_status_filter(status);
        TableResponse::from_ledger(l, bookings)
    })
}

/// Column header click: same column flips direction, new column sorts
/// ascending.
pub fn sort_by(bookings: &BookingState, field: SortField) -> TableResponse {
    debug!(?field, "sort_by command");
    bookings.with_ledger_mut(|l| {
        l.sort_by(field);
        TableResponse::from_ledger(l, bookings)
    })
}

/// Rooms free today, ascending.
pub fn get_available_rooms(bookings: &BookingState) -> Vec<u32> {
    debug!("get_available_rooms command");
    let today = bookings.clock().today();
    bookings.with_ledger(|l| l.available_rooms(today))
}

/// Dashboard counters for today.
pub fn get_summary(bookings: &BookingState) -> OccupancySummary {
    debug!("get_summary command");
    let today = bookings.clock().today();
    bookings.with_ledger(|l| l.summary(today))
}
