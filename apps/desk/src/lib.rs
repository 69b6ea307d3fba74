//! # Hotel Desk Library
//!
//! View-model for the front desk: the state the booking form and table
//! render from, and the commands their events call.
//!
//! ## Module Organization
//! ```text
//! hotel_desk/
//! ├── lib.rs          ◄─── You are here (startup: logging, db, seed, state)
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── db.rs       ◄─── Database state wrapper, ordered persistence
//! │   ├── bookings.rs ◄─── Ledger: list, form, filter, sort
//! │   ├── message.rs  ◄─── Status message with auto-expiry
//! │   └── config.rs   ◄─── Configuration state
//! ├── commands/
//! │   ├── mod.rs      ◄─── Command exports
//! │   ├── booking.rs  ◄─── Form and row actions
//! │   ├── table.rs    ◄─── Table view and controls
//! │   └── config.rs   ◄─── Config and message retrieval
//! └── error.rs        ◄─── API error type for commands
//! ```
//!
//! ## Startup Sequence
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  1. init_tracing()        RUST_LOG, default info,hotel=debug,sqlx=warn │
//! │  2. ConfigState::from_env()                                            │
//! │  3. database_path()       HOTEL_DB_PATH or <data dir>/hotel.db         │
//! │  4. Database::new()       WAL, migrations                              │
//! │  5. load_or_seed()        missing / corrupt / empty → samples, saved   │
//! │  6. Desk { db, bookings, messages, config }                            │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod commands;
pub mod error;
pub mod state;

use std::path::PathBuf;

use chrono::NaiveDate;
use directories::ProjectDirs;
use hotel_core::samples::sample_bookings;
use hotel_core::Booking;
use hotel_db::{Database, DbConfig, DbResult};
use tracing::{info, Subscriber};
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use error::LaunchError;
use state::{BookingState, Clock, ConfigState, DbState, Ledger, MessageState};

/// All desk state, in place of a framework's managed-state registry.
///
/// Commands take the fields they need by reference.
#[derive(Debug)]
pub struct Desk {
    pub db: DbState,
    pub bookings: BookingState,
    pub messages: MessageState,
    pub config: ConfigState,
}

/// Opens the configured database and builds the desk.
pub async fn launch(config: ConfigState) -> Result<Desk, LaunchError> {
    info!(hotel = %config.hotel_name, "Starting Hotel Desk");

    let db_path = database_path(&config)?;
    info!(?db_path, "Database path determined");

    let db = Database::new(DbConfig::new(db_path)).await?;
    info!("Database connected and migrations applied");

    launch_with_database(db, config, Clock::System).await
}

/// Builds the desk over an open database.
pub async fn launch_with_database(
    db: Database,
    config: ConfigState,
    clock: Clock,
) -> Result<Desk, LaunchError> {
    let bookings = load_or_seed(&db, clock.today()).await?;

    info!(
        bookings = bookings.len(),
        total_rooms = config.total_rooms,
        "Hotel Desk loaded"
    );

    Ok(Desk {
        bookings: BookingState::with_clock(Ledger::new(bookings, config.total_rooms), clock),
        messages: MessageState::new(config.message_timeout()),
        db: DbState::new(db),
        config,
    })
}

/// Reads the stored list, falling back to the samples.
///
/// The samples are written back immediately so the next start finds them.
async fn load_or_seed(db: &Database, today: NaiveDate) -> DbResult<Vec<Booking>> {
    if let Some(list) = db.bookings().load().await?.into_non_empty() {
        return Ok(list);
    }

    let samples = sample_bookings(today);
    db.bookings().save_all(&samples).await?;
    info!(count = samples.len(), "Seeded sample bookings");
    Ok(samples)
}

/// Filter used when `RUST_LOG` is unset or unparseable.
const DEFAULT_LOG_FILTER: &str = "info,hotel=debug,sqlx=warn";

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages
/// - `RUST_LOG=hotel=trace` - Show trace for hotel crates only
/// - Default: `info,hotel=debug,sqlx=warn`
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER));

    log_subscriber(filter).init();
}

/// The fmt subscriber, gated only by `filter`.
fn log_subscriber(filter: EnvFilter) -> impl Subscriber + Send + Sync + 'static {
    tracing_subscriber::fmt().with_env_filter(filter).finish()
}

/// Determines the database file path.
///
/// ## Platform-Specific Paths
/// - **macOS**: `~/Library/Application Support/com.hotel.desk/hotel.db`
/// - **Windows**: `%APPDATA%\hotel\desk\data\hotel.db`
/// - **Linux**: `~/.local/share/desk/hotel.db`
///
/// `HOTEL_DB_PATH` (via [`ConfigState::database_path`]) overrides all of these.
pub fn database_path(config: &ConfigState) -> Result<PathBuf, LaunchError> {
    if let Some(path) = &config.database_path {
        return Ok(path.clone());
    }

    let proj_dirs = ProjectDirs::from("com", "hotel", "desk").ok_or(LaunchError::NoDataDir)?;
    let data_dir = proj_dirs.data_dir();
    std::fs::create_dir_all(data_dir)?;

    Ok(data_dir.join("hotel.db"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use hotel_core::BookingStatus;
    use hotel_db::BOOKINGS_KEY;

    fn clock() -> Clock {
        Clock::Fixed {
            today: NaiveDate::from_ymd_opt(2024, 6, 10).unwrap(),
            now_millis: 0,
        }
    }

    #[tokio::test]
    async fn test_empty_storage_is_seeded_and_saved() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let desk = launch_with_database(db, ConfigState::default(), clock())
            .await
            .unwrap();

        let list = desk.bookings.with_ledger(|l| l.bookings().to_vec());
        assert_eq!(list.len(), 2);
        assert_eq!(list[0].status, BookingStatus::Upcoming);
        assert_eq!(list[1].status, BookingStatus::CheckedIn);

        let stored = desk.db.inner().bookings().load().await.unwrap();
        assert_eq!(stored.into_non_empty(), Some(list));
    }

    #[tokio::test]
    async fn test_corrupt_and_empty_storage_fall_back_to_samples() {
        for raw in ["not json", "[]"] {
            let db = Database::new(DbConfig::in_memory()).await.unwrap();
            db.kv().set(BOOKINGS_KEY, raw).await.unwrap();

            let desk = launch_with_database(db, ConfigState::default(), clock())
                .await
                .unwrap();
            assert_eq!(desk.bookings.with_ledger(|l| l.bookings().len()), 2);
        }
    }

    #[tokio::test]
    async fn test_stored_list_is_used_as_is() {
        let db = Database::new(DbConfig::in_memory()).await.unwrap();
        let mut list = sample_bookings(clock().today());
        list.truncate(1);
        list[0].id = 1_718_000_000_123;
        db.bookings().save_all(&list).await.unwrap();

        let desk = launch_with_database(db, ConfigState::default(), clock())
            .await
            .unwrap();
        assert_eq!(desk.bookings.with_ledger(|l| l.bookings().to_vec()), list);
    }

    #[test]
    fn test_default_log_filter() {
        let subscriber = log_subscriber(EnvFilter::new(DEFAULT_LOG_FILTER));

        tracing::subscriber::with_default(subscriber, || {
            assert!(!tracing::enabled!(target: "sqlx::query", tracing::Level::DEBUG));
            assert!(tracing::enabled!(target: "sqlx::query", tracing::Level::WARN));
            assert!(tracing::enabled!(target: "hotel_desk::commands", tracing::Level::DEBUG));
            assert!(!tracing::enabled!(target: "hyper", tracing::Level::DEBUG));
        });
    }

    #[test]
    fn test_database_path_override() {
        let config = ConfigState {
            database_path: Some(PathBuf::from("/tmp/desk-test.db")),
            ..ConfigState::default()
        };
        assert_eq!(
            database_path(&config).unwrap(),
            PathBuf::from("/tmp/desk-test.db")
        );
    }
}
