//! # Booking State
//!
//! The desk's in-memory ledger: the booking list plus everything the form
//! and the table need to remember between commands.
//!
//! ## Thread Safety
//! The ledger is wrapped in `Arc<Mutex<T>>`. Every ledger operation runs to
//! completion under one lock acquisition and never awaits; commands take a
//! snapshot of the list under the lock and persist it after releasing.
//!
//! ## Save Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  save_draft(today, now_ms)                                             │
//! │       │                                                                 │
//! │       ├── editing == None ─► validate against rooms free today         │
//! │       │                        │                                        │
//! │       │                        ▼                                        │
//! │       │                  fresh id, status = upcoming, append           │
//! │       │                                                                 │
//! │       └── editing == id ──► validate room within 1..=total_rooms       │
//! │                                │                                        │
//! │                                ▼                                        │
//! │                          overwrite fields, keep id and status          │
//! │                                                                         │
//! │  success: form reset        failure: list and draft untouched          │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use chrono::{Local, NaiveDate, Utc};
use hotel_core::availability::{available_rooms, OccupancySummary};
use hotel_core::query::filter_and_sort;
use hotel_core::validation::{validate_draft, validate_search_query, RoomCheck};
use hotel_core::{
    Booking, BookingDraft, BookingFilter, BookingId, BookingStatus, CoreError, CoreResult,
    IdSequence, SortField, SortOrder, ValidationError,
};
use tracing::warn;

// =============================================================================
// Ledger
// =============================================================================

/// What a successful save did.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    Created(Booking),
    Updated(Booking),
}

impl SaveOutcome {
    pub fn booking(&self) -> &Booking {
        match self {
            SaveOutcome::Created(b) | SaveOutcome::Updated(b) => b,
        }
    }
}

/// A copy of the list taken right after a mutation.
///
/// `revision` increases with every list mutation, so a writer can tell an
/// older snapshot from a newer one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    pub revision: u64,
    pub bookings: Vec<Booking>,
}

/// Bookings, form draft, edit target, filter and sort.
///
/// ## Invariants
/// - Ids are unique; the id sequence never hands out an id already seen
/// - `editing`, when set, names a booking in the list
/// - List order is insertion order; sorting only affects [`Ledger::visible`]
#[derive(Debug, Clone)]
pub struct Ledger {
    bookings: Vec<Booking>,
    revision: u64,
    ids: IdSequence,
    draft: BookingDraft,
    editing: Option<BookingId>,
    filter: BookingFilter,
    sort: SortOrder,
    total_rooms: u32,
}

impl Ledger {
    /// Creates a ledger over an already loaded list.
    pub fn new(bookings: Vec<Booking>, total_rooms: u32) -> Self {
        Ledger {
            ids: IdSequence::after(&bookings),
            bookings,
            revision: 0,
            draft: BookingDraft::new(),
            editing: None,
            filter: BookingFilter::default(),
            sort: SortOrder::default(),
            total_rooms,
        }
    }

    pub fn bookings(&self) -> &[Booking] {
        &self.bookings
    }

    /// The list as of now, for persisting outside the lock.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            revision: self.revision,
            bookings: self.bookings.clone(),
        }
    }

    pub fn total_rooms(&self) -> u32 {
        self.total_rooms
    }

    pub fn find(&self, id: BookingId) -> Option<&Booking> {
        self.bookings.iter().find(|b| b.id == id)
    }

    fn find_mut(&mut self, id: BookingId) -> CoreResult<&mut Booking> {
        self.bookings
            .iter_mut()
            .find(|b| b.id == id)
            .ok_or(CoreError::BookingNotFound(id))
    }

    // -------------------------------------------------------------------------
    // Form
    // -------------------------------------------------------------------------

    pub fn draft(&self) -> &BookingDraft {
        &self.draft
    }

    /// Id of the booking being edited, if any.
    pub fn editing(&self) -> Option<BookingId> {
        self.editing
    }

    /// Replaces the form contents.
    ///
    /// Identity and status are owned by the ledger, not the form: whatever
    /// the caller sends for those is overwritten.
    pub fn set_draft(&mut self, mut draft: BookingDraft) {
        draft.id = self.editing;
        draft.status = self
            .editing
            .and_then(|id| self.find(id))
            .map_or(BookingStatus::Upcoming, |b| b.status);
        self.draft = draft;
    }

    /// Validates the draft and creates or updates a booking.
    ///
    /// On failure nothing changes, the draft included.
    pub fn save_draft(&mut self, today: NaiveDate, now_millis: u64) -> CoreResult<SaveOutcome> {
        match self.editing {
            None => {
                let free = self.available_rooms(today);
                let details = validate_draft(&self.draft, RoomCheck::Available(&free))?;

                let id = self.ids.next(now_millis);
                let booking = details.into_booking(id, BookingStatus::Upcoming);
                self.bookings.push(booking.clone());
                self.revision += 1;
                self.reset_form();
                Ok(SaveOutcome::Created(booking))
            }
            Some(id) => {
                let details = validate_draft(
                    &self.draft,
                    RoomCheck::InHotel {
                        total_rooms: self.total_rooms,
                    },
                )?;

                let slot = self.find_mut(id)?;
                *slot = details.into_booking(id, slot.status);
                let booking = slot.clone();
                self.revision += 1;
                self.reset_form();
                Ok(SaveOutcome::Updated(booking))
            }
        }
    }

    /// Loads a booking into the form for editing.
    pub fn begin_edit(&mut self, id: BookingId) -> CoreResult<&BookingDraft> {
        let draft = self
            .find(id)
            .map(BookingDraft::from)
            .ok_or(CoreError::BookingNotFound(id))?;

        self.draft = draft;
        self.editing = Some(id);
        Ok(&self.draft)
    }

    /// Clears the form and leaves edit mode.
    pub fn cancel_edit(&mut self) {
        self.reset_form();
    }

    fn reset_form(&mut self) {
        self.draft = BookingDraft::new();
        self.editing = None;
    }

    // -------------------------------------------------------------------------
    // List mutations
    // -------------------------------------------------------------------------

    /// Removes a booking. Clears the form if it was being edited.
    pub fn remove(&mut self, id: BookingId) -> CoreResult<Booking> {
        let index = self
            .bookings
            .iter()
            .position(|b| b.id == id)
            .ok_or(CoreError::BookingNotFound(id))?;

        let removed = self.bookings.remove(index);
        self.revision += 1;
        if self.editing == Some(id) {
            self.reset_form();
        }
        Ok(removed)
    }

    /// Sets a booking's status unconditionally.
    ///
    /// Moving backwards in the lifecycle is allowed but logged.
    pub fn set_status(&mut self, id: BookingId, status: BookingStatus) -> CoreResult<Booking> {
        let booking = self.find_mut(id)?;

        if status < booking.status {
            warn!(
                booking_id = id,
                from = %booking.status,
                to = %status,
                "Booking status moved backwards"
            );
        }

        booking.status = status;
        let updated = booking.clone();
        self.revision += 1;

        if self.editing == Some(id) {
            self.draft.status = status;
        }
        Ok(updated)
    }

    // -------------------------------------------------------------------------
    // Table
    // -------------------------------------------------------------------------

    pub fn filter(&self) -> &BookingFilter {
        &self.filter
    }

    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    /// Sets the search text, as typed.
    pub fn set_search(&mut self, query: &str) -> Result<(), ValidationError> {
        self.filter.search = validate_search_query(query)?;
        Ok(())
    }

    pub fn set_status_filter(&mut self, status: Option<BookingStatus>) {
        self.filter.status = status;
    }

    /// Applies a column header click and returns the new order.
    pub fn sort_by(&mut self, field: SortField) -> SortOrder {
        self.sort.select(field);
        self.sort
    }

    /// Filtered and sorted rows, in display order.
    pub fn visible(&self) -> Vec<&Booking> {
        filter_and_sort(&self.bookings, &self.filter, &self.sort)
    }

    pub fn available_rooms(&self, today: NaiveDate) -> Vec<u32> {
        available_rooms(&self.bookings, self.total_rooms, today)
    }

    pub fn summary(&self, today: NaiveDate) -> OccupancySummary {
        OccupancySummary::compute(&self.bookings, self.total_rooms, today)
    }
}

// =============================================================================
// Clock
// =============================================================================

/// Source of "today" and of the millisecond timestamp ids are drawn from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Clock {
    /// Local calendar date, UTC milliseconds.
    #[default]
    System,
    /// Frozen time, for tests and demos.
    Fixed { today: NaiveDate, now_millis: u64 },
}

impl Clock {
    pub fn today(&self) -> NaiveDate {
        match self {
            Clock::System => Local::now().date_naive(),
            Clock::Fixed { today, .. } => *today,
        }
    }

    pub fn now_millis(&self) -> u64 {
        match self {
            Clock::System => u64::try_from(Utc::now().timestamp_millis()).unwrap_or(0),
            Clock::Fixed { now_millis, .. } => *now_millis,
        }
    }
}

// =============================================================================
// Booking State
// =============================================================================

/// Thread-safe ledger handle shared by the booking and table commands.
#[derive(Debug, Clone)]
pub struct BookingState {
    ledger: Arc<Mutex<Ledger>>,
    clock: Clock,
}

impl BookingState {
    pub fn new(ledger: Ledger) -> Self {
        Self::with_clock(ledger, Clock::System)
    }

    pub fn with_clock(ledger: Ledger, clock: Clock) -> Self {
        BookingState {
            ledger: Arc::new(Mutex::new(ledger)),
            clock,
        }
    }

    pub fn clock(&self) -> Clock {
        self.clock
    }

    /// Executes a function with read access to the ledger.
    ///
    /// ```rust,ignore
    /// let count = state.with_ledger(|l| l.bookings().len());
    /// ```
    pub fn with_ledger<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Ledger) -> R,
    {
        // A panic mid-operation cannot leave the ledger half-written: every
        // mutation is a single push, remove, or field assignment.
        let ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        f(&ledger)
    }

    /// Executes a function with write access to the ledger.
    pub fn with_ledger_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut Ledger) -> R,
    {
        let mut ledger = self.ledger.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut ledger)
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_core::samples::sample_bookings;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, d).unwrap()
    }

    fn draft(name: &str, room: u32, from: u32, to: u32) -> BookingDraft {
        BookingDraft {
            guest_name: name.to_string(),
            guest_email: format!("{}@example.com", name.to_lowercase()),
            guest_phone: "555-0100".to_string(),
            room_number: Some(room),
            check_in: Some(day(from)),
            check_out: Some(day(to)),
            ..BookingDraft::default()
        }
    }

    fn ledger() -> Ledger {
        Ledger::new(sample_bookings(today()), 20)
    }

    #[test]
    fn test_create_appends_one_upcoming_booking() {
        let mut l = ledger();
        assert!(l.available_rooms(today()).contains(&3));

        let mut d = draft("Ada", 3, 10, 12);
        d.status = BookingStatus::CheckedOut;
        l.set_draft(d);

        let outcome = l.save_draft(today(), 1_700_000_000_000).unwrap();
        let SaveOutcome::Created(b) = outcome else {
            panic!("expected a create");
        };

        assert_eq!(l.bookings().len(), 3);
        assert_eq!(l.bookings()[2], b);
        assert_eq!(b.status, BookingStatus::Upcoming);
        assert!(b.id > 2);
        assert!(!l.available_rooms(today()).contains(&3));
        assert_eq!(l.draft(), &BookingDraft::new());
    }

    #[test]
    fn test_same_millisecond_creates_get_distinct_ids() {
        let mut l = ledger();
        l.set_draft(draft("Ada", 3, 10, 12));
        let a = l.save_draft(today(), 5_000).unwrap();
        l.set_draft(draft("Bo", 4, 10, 12));
        let b = l.save_draft(today(), 5_000).unwrap();

        assert_ne!(a.booking().id, b.booking().id);
    }

    #[test]
    fn test_invalid_email_leaves_list_and_draft() {
        let mut l = ledger();
        let mut d = draft("Ada", 3, 10, 12);
        d.guest_email = "not-an-email".to_string();
        l.set_draft(d.clone());

        let err = l.save_draft(today(), 1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::InvalidEmail)
        ));
        assert_eq!(l.bookings().len(), 2);
        assert_eq!(l.draft().guest_email, "not-an-email");
    }

    #[test]
    fn test_check_out_must_follow_check_in() {
        let mut l = ledger();
        l.set_draft(draft("Ada", 3, 10, 10));

        let err = l.save_draft(today(), 1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::CheckOutNotAfterCheckIn)
        ));
    }

    #[test]
    fn test_room_occupied_today_is_rejected() {
        let mut l = ledger();
        // Sample: room 5 is checked in today
        l.set_draft(draft("Ada", 5, 20, 22));

        let err = l.save_draft(today(), 1).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Validation(ValidationError::RoomUnavailable { room: 5 })
        ));
        assert_eq!(l.bookings().len(), 2);
    }

    #[test]
    fn test_edit_keeps_id_and_status() {
        let mut l = ledger();
        let original = l.bookings()[1].clone();

        l.begin_edit(original.id).unwrap();
        assert_eq!(l.editing(), Some(original.id));
        assert_eq!(l.draft().guest_name, "Maria Garcia");

        // Keeping its own (occupied) room is fine while editing
        let mut d = l.draft().clone();
        d.guest_name = "Maria G. Lopez".to_string();
        d.id = Some(999);
        l.set_draft(d);

        let SaveOutcome::Updated(b) = l.save_draft(today(), 1).unwrap() else {
            panic!("expected an update");
        };
        assert_eq!(b.id, original.id);
        assert_eq!(b.status, BookingStatus::CheckedIn);
        assert_eq!(b.guest_name, "Maria G. Lopez");
        assert_eq!(l.bookings().len(), 2);
        assert_eq!(l.editing(), None);
    }

    #[test]
    fn test_edit_rejects_room_outside_hotel() {
        let mut l = ledger();
        l.begin_edit(1).unwrap();
        let mut d = l.draft().clone();
        d.room_number = Some(21);
        l.set_draft(d);

        let err = l.save_draft(today(), 1).unwrap_err();
        assert_eq!(err.to_string(), "Room 21 does not exist.");
        assert_eq!(l.editing(), Some(1));
    }

    #[test]
    fn test_unknown_ids_do_not_mutate() {
        let mut l = ledger();
        let before = l.bookings().to_vec();

        assert!(matches!(l.begin_edit(77), Err(CoreError::BookingNotFound(77))));
        assert!(l.remove(77).is_err());
        assert!(l.set_status(77, BookingStatus::CheckedIn).is_err());
        assert_eq!(l.bookings(), &before[..]);
    }

    #[test]
    fn test_remove_clears_form_of_edited_booking() {
        let mut l = ledger();
        l.begin_edit(2).unwrap();

        let removed = l.remove(2).unwrap();
        assert_eq!(removed.guest_name, "Maria Garcia");
        assert_eq!(l.editing(), None);
        assert!(l.draft().is_new());

        l.begin_edit(1).unwrap();
        l.remove(2).unwrap_err();
        assert_eq!(l.editing(), Some(1));
    }

    #[test]
    fn test_deleted_newest_id_is_not_reused() {
        let mut l = ledger();
        l.set_draft(draft("Ada", 3, 10, 12));
        let id = l.save_draft(today(), 10).unwrap().booking().id;
        l.remove(id).unwrap();

        l.set_draft(draft("Bo", 3, 10, 12));
        let next = l.save_draft(today(), 10).unwrap().booking().id;
        assert!(next > id);
    }

    #[test]
    fn test_status_lifecycle_and_overwrite() {
        let mut l = ledger();
        let status = |l: &mut Ledger, s| l.set_status(1, s).unwrap().status;

        assert_eq!(status(&mut l, BookingStatus::CheckedIn), BookingStatus::CheckedIn);
        assert_eq!(status(&mut l, BookingStatus::CheckedOut), BookingStatus::CheckedOut);
        // Backwards moves are allowed
        assert_eq!(status(&mut l, BookingStatus::CheckedIn), BookingStatus::CheckedIn);
    }

    #[test]
    fn test_checked_out_frees_room() {
        let mut l = ledger();
        assert!(!l.available_rooms(today()).contains(&5));
        l.set_status(2, BookingStatus::CheckedOut).unwrap();
        assert!(l.available_rooms(today()).contains(&5));
    }

    #[test]
    fn test_cancel_edit_resets_form() {
        let mut l = ledger();
        l.begin_edit(1).unwrap();
        l.cancel_edit();
        assert_eq!(l.editing(), None);
        assert_eq!(l.draft(), &BookingDraft::new());
    }

    #[test]
    fn test_search_sort_and_filter() {
        let mut l = ledger();

        // Email-only match
        l.set_search("MARIA.GARCIA@").unwrap();
        assert_eq!(l.filter().search, "MARIA.GARCIA@");
        assert_eq!(l.visible().len(), 1);

        // Surrounding spaces are part of the term
        l.set_search(" maria.garcia@").unwrap();
        assert!(l.visible().is_empty());

        l.set_search("").unwrap();
        assert_eq!(l.visible().len(), 2);

        l.sort_by(SortField::GuestName);
        let names: Vec<_> = l.visible().iter().map(|b| b.guest_name.as_str()).collect();
        assert_eq!(names, ["John Smith", "Maria Garcia"]);

        l.sort_by(SortField::GuestName);
        let names: Vec<_> = l.visible().iter().map(|b| b.guest_name.as_str()).collect();
        assert_eq!(names, ["Maria Garcia", "John Smith"]);

        l.set_status_filter(Some(BookingStatus::Upcoming));
        assert_eq!(l.visible().len(), 1);
        assert_eq!(l.visible()[0].id, 1);

        // Sorting never reorders the stored list
        assert_eq!(l.bookings()[0].id, 1);
    }

    #[test]
    fn test_search_too_long() {
        let mut l = ledger();
        assert!(l.set_search(&"x".repeat(101)).is_err());
        assert_eq!(l.filter().search, "");
    }

    #[test]
    fn test_revision_counts_mutations_only() {
        let mut l = ledger();
        assert_eq!(l.snapshot().revision, 0);

        l.set_draft(draft("Ada", 3, 10, 10));
        l.save_draft(today(), 1).unwrap_err();
        l.sort_by(SortField::RoomNumber);
        assert_eq!(l.snapshot().revision, 0);

        l.set_status(1, BookingStatus::CheckedIn).unwrap();
        l.remove(2).unwrap();
        let snap = l.snapshot();
        assert_eq!(snap.revision, 2);
        assert_eq!(snap.bookings.len(), 1);
    }

    #[test]
    fn test_state_handle_shares_ledger() {
        let state = BookingState::new(ledger());
        let other = state.clone();

        state.with_ledger_mut(|l| l.remove(1)).unwrap();
        assert_eq!(other.with_ledger(|l| l.bookings().len()), 1);
    }

    #[test]
    fn test_fixed_clock() {
        let clock = Clock::Fixed {
            today: today(),
            now_millis: 42,
        };
        assert_eq!(clock.today(), today());
        assert_eq!(clock.now_millis(), 42);
    }
}
