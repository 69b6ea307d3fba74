//! # Room Availability
//!
//! Derives which rooms are free today from the booking list.
//!
//! ```text
//! available = {1..=total_rooms} − { room of b | b active today ∧ b not checked out }
//! ```
//!
//! Only *today* matters: a room booked for next week is still available
//! now. Overlapping future ranges are not checked.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::types::{Booking, BookingStatus};

/// Rooms held on `today` by bookings that are active and not checked out.
pub fn occupied_rooms(bookings: &[Booking], today: NaiveDate) -> BTreeSet<u32> {
    bookings
        .iter()
        .filter(|b| b.occupies_room_on(today))
        .map(|b| b.room_number)
        .collect()
}

/// Free rooms on `today`, ascending.
pub fn available_rooms(bookings: &[Booking], total_rooms: u32, today: NaiveDate) -> Vec<u32> {
    let occupied = occupied_rooms(bookings, today);
    (1..=total_rooms).filter(|room| !occupied.contains(room)).collect()
}

/// Dashboard counters shown above the table.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct OccupancySummary {
    pub total_bookings: usize,
    pub upcoming: usize,
    /// Guests currently checked in.
    pub checked_in: usize,
    pub checked_out: usize,
    pub total_rooms: u32,
    pub available_rooms: usize,
}

impl OccupancySummary {
    /// Counts the list as of `today`.
    pub fn compute(bookings: &[Booking], total_rooms: u32, today: NaiveDate) -> Self {
        let count = |status: BookingStatus| bookings.iter().filter(|b| b.status == status).count();

        OccupancySummary {
            total_bookings: bookings.len(),
            upcoming: count(BookingStatus::Upcoming),
            checked_in: count(BookingStatus::CheckedIn),
            checked_out: count(BookingStatus::CheckedOut),
            total_rooms,
            available_rooms: available_rooms(bookings, total_rooms, today).len(),
        }
    }
}
