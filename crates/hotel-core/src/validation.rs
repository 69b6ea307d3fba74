//! # Validation Module
//!
//! Input validation for the booking form.
//!
//! ## Validation Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Draft Validation (first failure wins)              │
//! │                                                                         │
//! │  1. guest name      non-blank                                          │
//! │  2. guest email     non-blank, then local@domain.tld                   │
//! │  3. guest phone     non-blank                                          │
//! │  4. room number     present and not 0                                  │
//! │  5. room            creating: free today / editing: inside the hotel   │
//! │  6. check-in        present                                            │
//! │  7. check-out       present                                            │
//! │  8. dates           check-out strictly after check-in                  │
//! │                                                                         │
//! │  The form shows exactly one message, so the order is part of the       │
//! │  contract: a blank name is reported before a bad email.                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use hotel_core::validation::{validate_draft, RoomCheck};
//! use hotel_core::{BookingDraft, ValidationError};
//!
//! let draft = BookingDraft {
//!     guest_name: "Ada".into(),
//!     guest_email: "not-an-email".into(),
//!     ..BookingDraft::new()
//! };
//! let err = validate_draft(&draft, RoomCheck::Available(&[1, 2, 3])).unwrap_err();
//! assert_eq!(err, ValidationError::InvalidEmail);
//! ```

use std::sync::LazyLock;

use regex::Regex;

use crate::error::ValidationError;
use crate::types::{BookingDetails, BookingDraft};
use crate::MAX_SEARCH_LEN;

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Basic `local@domain.tld` shape: no whitespace, one `@`, a dot after it.
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(EMAIL_PATTERN).expect("valid regex"));

/// How step 5 checks the room.
#[derive(Debug, Clone, Copy)]
pub enum RoomCheck<'a> {
    /// Creating: the room must be in today's available set.
    Available(&'a [u32]),
    /// Editing: the booking already holds its room, so only the range is
    /// checked.
    InHotel { total_rooms: u32 },
}

// =============================================================================
// Field Validators
// =============================================================================

/// Validates the guest name.
pub fn validate_guest_name(name: &str) -> ValidationResult<()> {
    if name.trim().is_empty() {
        return Err(ValidationError::GuestNameRequired);
    }
    Ok(())
}

/// Validates the guest email.
///
/// The pattern is matched against the value as entered, so surrounding
/// whitespace makes an address invalid.
///
/// ## Example
/// ```rust
/// use hotel_core::validation::validate_email;
///
/// assert!(validate_email("guest@example.com").is_ok());
/// assert!(validate_email("guest@example").is_err());
/// assert!(validate_email("").is_err());
/// ```
pub fn validate_email(email: &str) -> ValidationResult<()> {
    if email.trim().is_empty() {
        return Err(ValidationError::GuestEmailRequired);
    }

    if !EMAIL_RE.is_match(email) {
        return Err(ValidationError::InvalidEmail);
    }

    Ok(())
}

/// Validates the guest phone. Any non-blank text is accepted.
pub fn validate_phone(phone: &str) -> ValidationResult<()> {
    if phone.trim().is_empty() {
        return Err(ValidationError::GuestPhoneRequired);
    }
    Ok(())
}

/// Validates a table search query.
///
/// ## Rules
/// - Can be empty (the table shows everything)
/// - Maximum [`MAX_SEARCH_LEN`] characters
///
/// ## Returns
/// The query exactly as typed. Whitespace is part of the term, so `" "`
/// matches names containing a space.
pub fn validate_search_query(query: &str) -> ValidationResult<String> {
    if query.chars().count() > MAX_SEARCH_LEN {
        return Err(ValidationError::SearchTooLong {
            max: MAX_SEARCH_LEN,
        });
    }

    Ok(query.to_string())
}

// =============================================================================
// Draft Validation
// =============================================================================

/// Validates a form draft and returns its required fields, unwrapped.
///
/// Text fields are returned exactly as entered.
pub fn validate_draft(
    draft: &BookingDraft,
    rooms: RoomCheck<'_>,
) -> ValidationResult<BookingDetails> {
    validate_guest_name(&draft.guest_name)?;
    validate_email(&draft.guest_email)?;
    validate_phone(&draft.guest_phone)?;

    // Room 0 is the picker's "no selection" value.
    let room = draft
        .room_number
        .filter(|&room| room != 0)
        .ok_or(ValidationError::RoomRequired)?;
    match rooms {
        RoomCheck::Available(available) => {
            if !available.contains(&room) {
                return Err(ValidationError::RoomUnavailable { room });
            }
        }
        RoomCheck::InHotel { total_rooms } => {
            if room == 0 || room > total_rooms {
                return Err(ValidationError::RoomOutOfRange { room, total_rooms });
            }
        }
    }

    let check_in = draft.check_in.ok_or(ValidationError::CheckInRequired)?;
    let check_out = draft.check_out.ok_or(ValidationError::CheckOutRequired)?;
    if check_out <= check_in {
        return Err(ValidationError::CheckOutNotAfterCheckIn);
    }

    Ok(BookingDetails {
        guest_name: draft.guest_name.clone(),
        guest_email: draft.guest_email.clone(),
        guest_phone: draft.guest_phone.clone(),
        room_number: room,
        check_in,
        check_out,
        special_requests: draft.special_requests.clone(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn valid_draft() -> BookingDraft {
        BookingDraft {
            guest_name: "Grace Hopper".to_string(),
            guest_email: "grace@navy.mil".to_string(),
            guest_phone: "+1 555 0199".to_string(),
            room_number: Some(3),
            check_in: Some(date(2024, 6, 10)),
            check_out: Some(date(2024, 6, 12)),
            special_requests: "Quiet room".to_string(),
            ..BookingDraft::new()
        }
    }

    const ALL_ROOMS: &[u32] = &[1, 2, 3, 4, 5];

    #[test]
    fn test_validate_email() {
        assert!(validate_email("a@b.co").is_ok());
        assert!(validate_email("first.last@sub.example.org").is_ok());

        assert_eq!(validate_email(""), Err(ValidationError::GuestEmailRequired));
        assert_eq!(validate_email("   "), Err(ValidationError::GuestEmailRequired));
        assert_eq!(validate_email("not-an-email"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@b"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a b@c.d"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email(" a@b.co"), Err(ValidationError::InvalidEmail));
        assert_eq!(validate_email("a@@b.co"), Err(ValidationError::InvalidEmail));
    }

    #[test]
    fn test_validate_search_query() {
        assert_eq!(validate_search_query("  bob ").unwrap(), "  bob ");
        assert_eq!(validate_search_query("").unwrap(), "");
        assert!(validate_search_query(&"x".repeat(101)).is_err());
    }

    #[test]
    fn test_valid_draft_passes() {
        let details = validate_draft(&valid_draft(), RoomCheck::Available(ALL_ROOMS)).unwrap();
        assert_eq!(details.room_number, 3);
        assert_eq!(details.special_requests, "Quiet room");
    }

    #[test]
    fn test_each_step_reports_its_own_error() {
        let check = RoomCheck::Available(ALL_ROOMS);

        let mut d = valid_draft();
        d.guest_name = "  ".into();
        assert_eq!(validate_draft(&d, check), Err(ValidationError::GuestNameRequired));

        let mut d = valid_draft();
        d.guest_phone = String::new();
        assert_eq!(validate_draft(&d, check), Err(ValidationError::GuestPhoneRequired));

        let mut d = valid_draft();
        d.room_number = None;
        assert_eq!(validate_draft(&d, check), Err(ValidationError::RoomRequired));

        d.room_number = Some(0);
        assert_eq!(validate_draft(&d, check), Err(ValidationError::RoomRequired));

        let mut d = valid_draft();
        d.check_in = None;
        assert_eq!(validate_draft(&d, check), Err(ValidationError::CheckInRequired));

        let mut d = valid_draft();
        d.check_out = None;
        assert_eq!(validate_draft(&d, check), Err(ValidationError::CheckOutRequired));
    }

    #[test]
    fn test_first_failure_wins() {
        // Blank name and bad email: the name is reported.
        let d = BookingDraft {
            guest_email: "nope".into(),
            ..BookingDraft::new()
        };
        assert_eq!(
            validate_draft(&d, RoomCheck::Available(ALL_ROOMS)),
            Err(ValidationError::GuestNameRequired)
        );

        // Occupied room and missing dates: the room is reported.
        let mut d = valid_draft();
        d.check_in = None;
        assert_eq!(
            validate_draft(&d, RoomCheck::Available(&[1, 2])),
            Err(ValidationError::RoomUnavailable { room: 3 })
        );
    }

    #[test]
    fn test_same_day_checkout_rejected() {
        let mut d = valid_draft();
        d.check_in = Some(date(2024, 6, 10));
        d.check_out = Some(date(2024, 6, 10));
        assert_eq!(
            validate_draft(&d, RoomCheck::Available(ALL_ROOMS)),
            Err(ValidationError::CheckOutNotAfterCheckIn)
        );

        d.check_out = Some(date(2024, 6, 9));
        assert_eq!(
            validate_draft(&d, RoomCheck::Available(ALL_ROOMS)),
            Err(ValidationError::CheckOutNotAfterCheckIn)
        );
    }

    #[test]
    fn test_edit_only_checks_room_range() {
        // Room 3 is not "available" (the booking itself holds it) but edits
        // only need the room to exist.
        let check = RoomCheck::InHotel { total_rooms: 5 };
        assert!(validate_draft(&valid_draft(), check).is_ok());

        let mut d = valid_draft();
        d.room_number = Some(6);
        assert_eq!(
            validate_draft(&d, check),
            Err(ValidationError::RoomOutOfRange {
                room: 6,
                total_rooms: 5
            })
        );

        d.room_number = Some(0);
        assert_eq!(validate_draft(&d, check), Err(ValidationError::RoomRequired));
    }
}
