//! # Configuration State
//!
//! Stores desk configuration loaded at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Environment variables (`HOTEL_*`)
//! 2. Defaults (this file)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use std::path::PathBuf;
use std::time::Duration;

use hotel_core::DEFAULT_TOTAL_ROOMS;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Desk configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Shown in the page header.
    pub hotel_name: String,

    /// Rooms are numbered `1..=total_rooms`. Never zero.
    pub total_rooms: u32,

    /// Seconds a status message stays visible.
    pub message_timeout_secs: u64,

    /// Overrides the platform data directory for `hotel.db`.
    #[serde(skip)]
    pub database_path: Option<PathBuf>,
}

impl Default for ConfigState {
    /// - Hotel: "Hotel Desk"
    /// - Rooms: 20
    /// - Messages: 5 seconds
    /// - Database: platform data dir
    fn default() -> Self {
        ConfigState {
            hotel_name: "Hotel Desk".to_string(),
            total_rooms: DEFAULT_TOTAL_ROOMS,
            message_timeout_secs: 5,
            database_path: None,
        }
    }
}

impl ConfigState {
    /// Creates a new ConfigState from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `HOTEL_NAME`: Override hotel name
    /// - `HOTEL_TOTAL_ROOMS`: Number of rooms (positive integer)
    /// - `HOTEL_MESSAGE_TIMEOUT_SECS`: Status message lifetime
    /// - `HOTEL_DB_PATH`: Database file path
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any variable source. Bad values keep the default.
    pub fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = ConfigState::default();

        if let Some(name) = get("HOTEL_NAME") {
            config.hotel_name = name;
        }

        if let Some(raw) = get("HOTEL_TOTAL_ROOMS") {
            match raw.trim().parse::<u32>() {
                Ok(rooms) if rooms > 0 => config.total_rooms = rooms,
                _ => warn!(value = %raw, "Ignoring invalid HOTEL_TOTAL_ROOMS"),
            }
        }

        if let Some(raw) = get("HOTEL_MESSAGE_TIMEOUT_SECS") {
            match raw.trim().parse::<u64>() {
                Ok(secs) => config.message_timeout_secs = secs,
                Err(_) => warn!(value = %raw, "Ignoring invalid HOTEL_MESSAGE_TIMEOUT_SECS"),
            }
        }

        if let Some(path) = get("HOTEL_DB_PATH") {
            config.database_path = Some(PathBuf::from(path));
        }

        config
    }

    pub fn message_timeout(&self) -> Duration {
        Duration::from_secs(self.message_timeout_secs)
    }
}
