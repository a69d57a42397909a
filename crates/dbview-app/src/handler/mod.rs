//! Handler module - TEA update function and event handlers
//!
//! Organized into submodules:
//! - `update`: Main update() function and message dispatch
//! - `keys`: Key event handlers for the main screen and modals
//! - `navigation`: Cursor, paging and column scroll handlers

pub(crate) mod keys;
pub(crate) mod navigation;
pub(crate) mod update;


use crate::message::Message;
use crate::state::RequestId;

// Re-export main entry point
pub use update::update;

#[cfg(test)]
pub(crate) use keys::handle_key;

/// Actions that the event loop should perform after update
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateAction {
    /// Fetch database info and the table list
    LoadStartup,

    /// Fetch info and rows of a table
    LoadTable {
        table: String,
        limit: u32,
        info_request: RequestId,
        rows_request: RequestId,
    },

    /// Fetch rows only (refresh)
    LoadRows {
        table: String,
        limit: u32,
        request_id: RequestId,
    },
}

/// Result of processing a message
#[derive(Debug, Default)]
pub struct UpdateResult {
    /// Optional follow-up message to process
    pub message: Option<Message>,
    /// Optional action for the event loop to perform
    pub action: Option<UpdateAction>,
}

impl UpdateResult {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn message(msg: Message) -> Self {
        Self {
            message: Some(msg),
            action: None,
        }
    }

    pub fn action(action: UpdateAction) -> Self {
        Self {
            message: None,
            action: Some(action),
        }
    }
}
