//! # API Error Type
//!
//! Unified error type for desk commands.
//!
//! ## Error Handling Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Flow: Core/DB → Command → Front end            │
//! │                                                                         │
//! │  ValidationError ("Please select a room.")                             │
//! │  CoreError::BookingNotFound(42)                                        │
//! │  DbError::QueryFailed(..)                                              │
//! │       │                                                                 │
//! │       ▼  From impls below                                              │
//! │  ApiError { code: "VALIDATION_ERROR", message, field: "roomNumber" }   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  Front end shows `message`, focuses `field` when present               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Storage details never reach the user: database errors are logged and
//! replaced by a generic message.

use hotel_core::{CoreError, ValidationError};
use hotel_db::DbError;
use serde::Serialize;
use thiserror::Error;

/// API error returned from desk commands.
///
/// ```json
/// {
///   "code": "VALIDATION_ERROR",
///   "message": "Please enter a valid email address.",
///   "field": "guestEmail"
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ApiError {
    /// Machine-readable error code for programmatic handling
    pub code: ErrorCode,

    /// Human-readable error message for display
    pub message: String,

    /// Form field the error is about, for validation failures
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field: Option<&'static str>,
}

/// Error codes for API responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    /// No booking with that id
    NotFound,

    /// Form or search input rejected
    ValidationError,

    /// The chosen room is occupied today
    RoomUnavailable,

    /// Storage failed
    DatabaseError,
}

impl ApiError {
    /// Creates a new API error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        ApiError {
            code,
            message: message.into(),
            field: None,
        }
    }

    /// Creates a not found error.
    pub fn not_found(resource: &str, id: impl std::fmt::Display) -> Self {
        ApiError::new(ErrorCode::NotFound, format!("{} not found: {}", resource, id))
    }
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        let code = match err {
            ValidationError::RoomUnavailable { .. } => ErrorCode::RoomUnavailable,
            _ => ErrorCode::ValidationError,
        };

        ApiError {
            code,
            message: err.to_string(),
            field: Some(err.field()),
        }
    }
}

/// Converts core errors to API errors.
impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::BookingNotFound(id) => ApiError::not_found("Booking", id),
            CoreError::Validation(e) => e.into(),
        }
    }
}

/// Shown when a change is applied in memory but the write fails.
pub const NOT_SAVED_MESSAGE: &str =
    "Change kept, but it could not be saved. It will be saved with your next change.";

/// Converts database errors to API errors.
///
/// Storage is only written after the in-memory list has changed, and every
/// write carries the whole list, so the message says the change stands.
impl From<DbError> for ApiError {
    fn from(err: DbError) -> Self {
        // Log the actual error but return a generic message
        tracing::error!(error = %err, "Could not write bookings");
        ApiError::new(ErrorCode::DatabaseError, NOT_SAVED_MESSAGE)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{:?}] {}", self.code, self.message)
    }
}

impl std::error::Error for ApiError {}

/// Errors that stop the desk from starting.
#[derive(Debug, Error)]
pub enum LaunchError {
    #[error("could not determine app data directory")]
    NoDataDir,

    #[error("could not create data directory: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Database(#[from] DbError),
}
