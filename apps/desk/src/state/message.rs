//! # Message State
//!
//! The transient status line shown above the form.
//!
//! ## Expiry
//! ```text
//! post("A") ──► gen 1, timer 1 started ─────────────── (cancelled)
//!       post("B") ──► gen 2, timer 1 aborted, timer 2 started ──► clears "B"
//! ```
//! Each message owns one timer. Posting aborts the previous timer, and the
//! timer only clears the board if its generation is still current, so an
//! old timer can never blank a newer message.
//!
//! Outside a Tokio runtime no timer is started and the message stays until
//! replaced or dismissed.

use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tokio::runtime::Handle;
use tokio::task::JoinHandle;
use tracing::debug;

/// How the message should be styled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Success,
    Error,
    Info,
}

/// One status line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusMessage {
    pub text: String,
    pub kind: MessageKind,
}

#[derive(Debug, Default)]
struct Board {
    current: Option<StatusMessage>,
    generation: u64,
    timer: Option<JoinHandle<()>>,
}

impl Board {
    fn cancel_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

/// Shared message board with auto-expiry.
#[derive(Debug, Clone)]
pub struct MessageState {
    board: Arc<Mutex<Board>>,
    timeout: Duration,
}

impl MessageState {
    /// Creates an empty board whose messages expire after `timeout`.
    pub fn new(timeout: Duration) -> Self {
        MessageState {
            board: Arc::new(Mutex::new(Board::default())),
            timeout,
        }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }

    pub fn success(&self, text: impl Into<String>) {
        self.post(text, MessageKind::Success);
    }

    pub fn error(&self, text: impl Into<String>) {
        self.post(text, MessageKind::Error);
    }

    pub fn info(&self, text: impl Into<String>) {
        self.post(text, MessageKind::Info);
    }

    /// Shows a message, replacing the current one and restarting the timer.
    pub fn post(&self, text: impl Into<String>, kind: MessageKind) {
        let text = text.into();
        debug!(?kind, text = %text, "Status message");

        let mut board = self.lock();
        board.cancel_timer();
        board.generation += 1;
        board.current = Some(StatusMessage { text, kind });

        if let Ok(runtime) = Handle::try_current() {
            let generation = board.generation;
            let shared = Arc::clone(&self.board);
            let timeout = self.timeout;

            board.timer = Some(runtime.spawn(async move {
                tokio::time::sleep(timeout).await;

                let mut board = shared.lock().unwrap_or_else(PoisonError::into_inner);
                if board.generation == generation {
                    board.current = None;
                    board.timer = None;
                }
            }));
        }
    }

    /// The message currently shown, if any.
    pub fn current(&self) -> Option<StatusMessage> {
        self.lock().current.clone()
    }

    /// Clears the message now.
    pub fn dismiss(&self) {
        let mut board = self.lock();
        board.cancel_timer();
        board.generation += 1;
        board.current = None;
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Board> {
        self.board.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for MessageState {
    fn default() -> Self {
        Self::new(Duration::from_secs(5))
    }
}
