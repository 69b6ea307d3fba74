//! # Config & Message Commands
//!
//! Read-only configuration and the status line.

use tracing::debug;

use crate::state::{ConfigState, MessageState, StatusMessage};

/// Gets the desk configuration.
///
/// ## When Used
/// - Page header (hotel name)
/// - Room picker bounds (total rooms)
pub fn get_config(config: &ConfigState) -> ConfigState {
    debug!("get_config command");
    config.clone()
}

/// The status message to show, if one is live.
pub fn get_message(messages: &MessageState) -> Option<StatusMessage> {
    messages.current()
}

/// Hides the status message before its timer runs out.
pub fn dismiss_message(messages: &MessageState) {
    debug!("dismiss_message command");
    messages.dismiss();
}
