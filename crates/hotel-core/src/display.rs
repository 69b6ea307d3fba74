//! Formatting helpers for the bookings table.

use chrono::NaiveDate;

use crate::types::BookingStatus;

/// Formats a date the way the table shows it, e.g. `Jun 10, 2024`.
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %-d, %Y").to_string()
}

/// Status text for the status column, e.g. `checked in`.
pub fn format_status(status: BookingStatus) -> &'static str {
    status.label()
}

/// Style class for a table row; one per status.
pub fn row_class(status: BookingStatus) -> &'static str {
    status.as_str()
}
