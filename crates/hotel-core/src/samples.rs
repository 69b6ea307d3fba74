//! # Sample Bookings
//!
//! The two bookings a fresh desk starts with, dated relative to `today`:
//!
//! | Guest | Room | Dates | Status |
//! |---|---|---|---|
//! | John Smith | 10 | tomorrow, 3 nights | upcoming |
//! | Maria Garcia | 5 | today, 2 nights | checked-in |

use chrono::{Days, NaiveDate};

use crate::types::{Booking, BookingStatus};

/// Builds the sample list for `today`.
pub fn sample_bookings(today: NaiveDate) -> Vec<Booking> {
    let tomorrow = today + Days::new(1);

    vec![
        Booking {
            id: 1,
            guest_name: "John Smith".to_string(),
            guest_email: "john.smith@example.com".to_string(),
            guest_phone: "+1 (555) 123-4567".to_string(),
            room_number: 10,
            check_in: tomorrow,
            check_out: tomorrow + Days::new(3),
            special_requests: "Early check-in requested".to_string(),
            status: BookingStatus::Upcoming,
        },
        Booking {
            id: 2,
            guest_name: "Maria Garcia".to_string(),
            guest_email: "maria.garcia@example.com".to_string(),
            guest_phone: "+1 (555) 987-6543".to_string(),
            room_number: 5,
            check_in: today,
            check_out: today + Days::new(2),
            special_requests: "Vegetarian meals".to_string(),
            status: BookingStatus::CheckedIn,
        },
    ]
}
