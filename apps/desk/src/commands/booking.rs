//! # Booking Commands
//!
//! Form and row-action commands: save, edit, delete, check in, check out.
//!
//! ## Command Shape
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. debug! the call                                                    │
//! │  2. ledger.with_ledger_mut(..)   ← whole mutation under one lock       │
//! │        └─ on error: post error message, return ApiError               │
//! │  3. db.persist(&snapshot).await  ← after the lock is released          │
//! │  4. post success message                                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! A failed write in step 3 does not undo step 2: the change stays in
//! memory and goes out with the next successful write.

use hotel_core::{Booking, BookingDraft, BookingId, BookingStatus};
use serde::Serialize;
use tracing::debug;

use crate::error::ApiError;
use crate::state::{BookingState, DbState, Ledger, MessageState, SaveOutcome};

/// Form contents plus what the form needs to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormResponse {
    pub draft: BookingDraft,

    /// Id being edited, `None` in create mode.
    pub editing: Option<BookingId>,

    /// Rooms free today, ascending; the room picker's options.
    pub available_rooms: Vec<u32>,
}

impl FormResponse {
    fn from_ledger(ledger: &Ledger, bookings: &BookingState) -> Self {
        FormResponse {
            draft: ledger.draft().clone(),
            editing: ledger.editing(),
            available_rooms: ledger.available_rooms(bookings.clock().today()),
        }
    }
}

/// Response to `edit_booking`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditResponse {
    #[serde(flatten)]
    pub form: FormResponse,

    /// The form sits above the table; the view scrolls up to it.
    pub scroll_to_top: bool,
}

/// Posts the error as a status message and hands it back.
fn fail(messages: &MessageState, err: impl Into<ApiError>) -> ApiError {
    let err = err.into();
    messages.error(err.message.clone());
    err
}

/// Gets the current form.
pub fn get_form(bookings: &BookingState) -> FormResponse {
    debug!("get_form command");
    bookings.with_ledger(|l| FormResponse::from_ledger(l, bookings))
}

/// Replaces the form contents with what the user typed so far.
pub fn update_draft(bookings: &BookingState, draft: BookingDraft) -> FormResponse {
    debug!("update_draft command");
    bookings.with_ledger_mut(|l| {
        l.set_draft(draft);
        FormResponse::from_ledger(l, bookings)
    })
}

/// Saves the form: creates a booking, or updates the one being edited.
///
/// `draft`, when given, replaces the form contents first.
///
/// ## Returns
/// The created or updated booking. On validation failure the form keeps
/// its contents and the first failing rule is reported.
pub async fn save_booking(
    db: &DbState,
    bookings: &BookingState,
    messages: &MessageState,
    draft: Option<BookingDraft>,
) -> Result<Booking, ApiError> {
    let clock = bookings.clock();

    let result = bookings.with_ledger_mut(|l| {
        if let Some(draft) = draft {
            l.set_draft(draft);
        }
        debug!(editing = ?l.editing(), "save_booking command");

        l.save_draft(clock.today(), clock.now_millis())
            .map(|outcome| (outcome, l.snapshot()))
    });

    let (outcome, snapshot) = result.map_err(|e| fail(messages, e))?;
    db.persist(&snapshot).await.map_err(|e| fail(messages, e))?;

    match &outcome {
        SaveOutcome::Created(_) => messages.success("Booking created successfully!"),
        SaveOutcome::Updated(_) => messages.success("Booking updated successfully!"),
    }

    match outcome {
        SaveOutcome::Created(b) | SaveOutcome::Updated(b) => Ok(b),
    }
}

/// Loads a booking into the form for editing.
pub fn edit_booking(
    bookings: &BookingState,
    messages: &MessageState,
    id: BookingId,
) -> Result<EditResponse, ApiError> {
    debug!(booking_id = id, "edit_booking command");

    let form = bookings
        .with_ledger_mut(|l| {
            l.begin_edit(id)?;
            Ok::<_, hotel_core::CoreError>(FormResponse::from_ledger(l, bookings))
        })
        .map_err(|e| fail(messages, e))?;

    Ok(EditResponse {
        form,
        scroll_to_top: true,
    })
}

/// Leaves edit mode and clears the form.
pub fn cancel_edit(bookings: &BookingState, messages: &MessageState) -> FormResponse {
    debug!("cancel_edit command");

    let form = bookings.with_ledger_mut(|l| {
        l.cancel_edit();
        FormResponse::from_ledger(l, bookings)
    });
    messages.info("Edit cancelled.");
    form
}

/// Deletes a booking after the user confirms.
///
/// `confirm` is asked with the booking about to go (the view shows
/// "Delete the booking for NAME?"). It runs outside the ledger lock.
///
/// ## Returns
/// - `Ok(Some(booking))` - deleted
/// - `Ok(None)` - the user declined; nothing changed
pub async fn delete_booking(
    db: &DbState,
    bookings: &BookingState,
    messages: &MessageState,
    id: BookingId,
    confirm: impl FnOnce(&Booking) -> bool,
) -> Result<Option<Booking>, ApiError> {
    debug!(booking_id = id, "delete_booking command");

    let target = bookings
        .with_ledger(|l| l.find(id).cloned())
        .ok_or_else(|| fail(messages, hotel_core::CoreError::BookingNotFound(id)))?;

    if !confirm(&target) {
        debug!(booking_id = id, "Delete declined");
        return Ok(None);
    }

    let (removed, snapshot) = bookings
        .with_ledger_mut(|l| l.remove(id).map(|b| (b, l.snapshot())))
        .map_err(|e| fail(messages, e))?;

    db.persist(&snapshot).await.map_err(|e| fail(messages, e))?;
    messages.success(format!(
        "Booking for {} deleted successfully!",
        removed.guest_name
    ));

    Ok(Some(removed))
}

/// Marks a guest as arrived, whatever the current status.
pub async fn check_in(
    db: &DbState,
    bookings: &BookingState,
    messages: &MessageState,
    id: BookingId,
) -> Result<Booking, ApiError> {
    debug!(booking_id = id, "check_in command");
    set_status(db, bookings, messages, id, BookingStatus::CheckedIn).await
}

/// Marks a guest as departed, whatever the current status.
pub async fn check_out(
    db: &DbState,
    bookings: &BookingState,
    messages: &MessageState,
    id: BookingId,
) -> Result<Booking, ApiError> {
    debug!(booking_id = id, "check_out command");
    set_status(db, bookings, messages, id, BookingStatus::CheckedOut).await
}

async fn set_status(
    db: &DbState,
    bookings: &BookingState,
    messages: &MessageState,
    id: BookingId,
    status: BookingStatus,
) -> Result<Booking, ApiError> {
    let (booking, snapshot) = bookings
        .with_ledger_mut(|l| l.set_status(id, status).map(|b| (b, l.snapshot())))
        .map_err(|e| fail(messages, e))?;

    db.persist(&snapshot).await.map_err(|e| fail(messages, e))?;
    messages.success(format!(
        "{} {} successfully!",
        booking.guest_name,
        status.label()
    ));

    Ok(booking)
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::testing::{day, desk, TODAY};
    use crate::error::ErrorCode;
    use crate::state::MessageKind;
    use hotel_db::LoadOutcome;

    fn draft(name: &str, room: u32) -> BookingDraft {
        BookingDraft {
            guest_name: name.to_string(),
            guest_email: "guest@example.com".to_string(),
            guest_phone: "555-0100".to_string(),
            room_number: Some(room),
            check_in: Some(day(TODAY)),
            check_out: Some(day(TODAY + 2)),
            special_requests: "Late arrival".to_string(),
            ..BookingDraft::default()
        }
    }

    async fn stored(desk: &crate::Desk) -> Vec<Booking> {
        match desk.db.inner().bookings().load().await.unwrap() {
            LoadOutcome::Loaded(list) => list,
            other => panic!("unexpected {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_create_persists_and_reports() {
        let desk = desk().await;

        let booking = save_booking(&desk.db, &desk.bookings, &desk.messages, Some(draft("Ada", 3)))
            .await
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Upcoming);
        assert_eq!(booking.special_requests, "Late arrival");

        let list = stored(&desk).await;
        assert_eq!(list.len(), 3);
        assert_eq!(list[2], booking);

        let message = desk.messages.current().unwrap();
        assert_eq!(message.text, "Booking created successfully!");
        assert_eq!(message.kind, MessageKind::Success);

        let form = get_form(&desk.bookings);
        assert!(!form.available_rooms.contains(&3));
        assert!(form.draft.is_new());
    }

    #[tokio::test]
    async fn test_validation_failure_keeps_draft_and_storage() {
        let desk = desk().await;
        let mut bad = draft("Ada", 3);
        bad.guest_email = "not-an-email".to_string();

        let err = save_booking(&desk.db, &desk.bookings, &desk.messages, Some(bad))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ValidationError);
        assert_eq!(err.message, "Please enter a valid email address.");
        assert_eq!(stored(&desk).await.len(), 2);
        assert_eq!(get_form(&desk.bookings).draft.guest_email, "not-an-email");
        assert_eq!(desk.messages.current().unwrap().kind, MessageKind::Error);
    }

    #[tokio::test]
    async fn test_occupied_room_rejected() {
        let desk = desk().await;

        let err = save_booking(&desk.db, &desk.bookings, &desk.messages, Some(draft("Ada", 5)))
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::RoomUnavailable);
        assert_eq!(
            err.message,
            "Selected room is not available. Please choose another room."
        );
    }

    #[tokio::test]
    async fn test_edit_then_save_updates_in_place() {
        let desk = desk().await;

        let edit = edit_booking(&desk.bookings, &desk.messages, 1).unwrap();
        assert!(edit.scroll_to_top);
        assert_eq!(edit.form.editing, Some(1));
        assert_eq!(edit.form.draft.guest_name, "John Smith");

        let mut changed = edit.form.draft.clone();
        changed.guest_phone = "+1 (555) 000-0000".to_string();
        let saved = save_booking(&desk.db, &desk.bookings, &desk.messages, Some(changed))
            .await
            .unwrap();

        assert_eq!(saved.id, 1);
        assert_eq!(
            desk.messages.current().unwrap().text,
            "Booking updated successfully!"
        );

        let list = stored(&desk).await;
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].guest_phone, "+1 (555) 000-0000");
        assert_eq!(list[0].status, BookingStatus::Upcoming);
    }

    #[tokio::test]
    async fn test_failed_write_keeps_change_in_memory() {
        let desk = desk().await;
        desk.db.inner().close().await;

        let err = check_in(&desk.db, &desk.bookings, &desk.messages, 1)
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::DatabaseError);
        assert_eq!(err.message, crate::error::NOT_SAVED_MESSAGE);
        assert_eq!(desk.messages.current().unwrap().kind, MessageKind::Error);

        let booking = desk.bookings.with_ledger(|l| l.find(1).cloned()).unwrap();
        assert_eq!(booking.status, BookingStatus::CheckedIn);
    }

    #[tokio::test]
    async fn test_edit_unknown_id() {
        let desk = desk().await;

        let err = edit_booking(&desk.bookings, &desk.messages, 404).unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(get_form(&desk.bookings).editing, None);
    }

    #[tokio::test]
    async fn test_cancel_edit_posts_info() {
        let desk = desk().await;
        edit_booking(&desk.bookings, &desk.messages, 2).unwrap();

        let form = cancel_edit(&desk.bookings, &desk.messages);
        assert_eq!(form.editing, None);

        let message = desk.messages.current().unwrap();
        assert_eq!(message.text, "Edit cancelled.");
        assert_eq!(message.kind, MessageKind::Info);
    }

    #[tokio::test]
    async fn test_delete_requires_confirmation() {
        let desk = desk().await;

        let declined = delete_booking(&desk.db, &desk.bookings, &desk.messages, 1, |_| false)
            .await
            .unwrap();
        assert_eq!(declined, None);
        assert_eq!(stored(&desk).await.len(), 2);

        let mut asked = None;
        let removed = delete_booking(&desk.db, &desk.bookings, &desk.messages, 1, |b| {
            asked = Some(b.guest_name.clone());
            true
        })
        .await
        .unwrap()
        .unwrap();

        assert_eq!(asked.as_deref(), Some("John Smith"));
        assert_eq!(removed.id, 1);
        assert_eq!(stored(&desk).await.len(), 1);
        assert_eq!(
            desk.messages.current().unwrap().text,
            "Booking for John Smith deleted successfully!"
        );
    }

    #[tokio::test]
    async fn test_delete_edited_booking_clears_form() {
        let desk = desk().await;
        edit_booking(&desk.bookings, &desk.messages, 2).unwrap();

        delete_booking(&desk.db, &desk.bookings, &desk.messages, 2, |_| true)
            .await
            .unwrap();

        let form = get_form(&desk.bookings);
        assert_eq!(form.editing, None);
        assert!(form.draft.guest_name.is_empty());
    }

    #[tokio::test]
    async fn test_check_in_then_out() {
        let desk = desk().await;

        let b = check_in(&desk.db, &desk.bookings, &desk.messages, 1).await.unwrap();
        assert_eq!(b.status, BookingStatus::CheckedIn);
        assert_eq!(
            desk.messages.current().unwrap().text,
            "John Smith checked in successfully!"
        );

        let b = check_out(&desk.db, &desk.bookings, &desk.messages, 1).await.unwrap();
        assert_eq!(b.status, BookingStatus::CheckedOut);
        assert_eq!(stored(&desk).await[0].status, BookingStatus::CheckedOut);

        // Overwrites regardless of the current status
        let b = check_in(&desk.db, &desk.bookings, &desk.messages, 1).await.unwrap();
        assert_eq!(b.status, BookingStatus::CheckedIn);
    }

    #[tokio::test]
    async fn test_check_in_unknown_id_leaves_storage() {
        let desk = desk().await;
        let before = stored(&desk).await;

        let err = check_in(&desk.db, &desk.bookings, &desk.messages, 9).await.unwrap_err();
        assert_eq!(err.code, ErrorCode::NotFound);
        assert_eq!(stored(&desk).await, before);
        assert_eq!(desk.messages.current().unwrap().kind, MessageKind::Error);
    }

    #[tokio::test]
    async fn test_update_draft_ignores_identity_fields() {
        let desk = desk().await;

        let mut d = draft("Ada", 3);
        d.id = Some(1);
        d.status = BookingStatus::CheckedOut;
        let form = update_draft(&desk.bookings, d);

        assert_eq!(form.draft.id, None);
        assert_eq!(form.draft.status, BookingStatus::Upcoming);
        assert_eq!(form.draft.guest_name, "Ada");
    }
}
