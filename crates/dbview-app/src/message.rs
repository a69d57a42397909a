//! Message types for the application (TEA pattern)

use dbview_api::FetchError;
use dbview_core::{DatabaseInfo, TableInfo, TableList, TableSnapshot};

use crate::input_key::InputKey;
use crate::state::RequestId;

/// All possible messages/actions in the application
#[derive(Debug, Clone)]
pub enum Message {
    /// Keyboard event from terminal
    Key(InputKey),

    /// Tick event for periodic updates
    Tick,

    /// Quit immediately (q, Ctrl+C, signal handler)
    Quit,

    /// Fetch database info and the table list
    Startup,

    // ─────────────────────────────────────────────────────────
    // Navigation Messages
    // ─────────────────────────────────────────────────────────
    /// Move the cursor of the focused list up one entry
    MoveUp,
    /// Move the cursor of the focused list down one entry
    MoveDown,
    PageUp,
    PageDown,
    /// Jump to the first entry
    Home,
    /// Jump to the last entry
    End,
    /// Shift visible columns left
    ScrollLeft,
    /// Shift visible columns right
    ScrollRight,
    /// Switch focus between the table list and the rows
    ToggleFocus,
    /// Enter: select the table under the cursor or open row detail
    Activate,

    // ─────────────────────────────────────────────────────────
    // Table Messages
    // ─────────────────────────────────────────────────────────
    /// Make a table active and load its info and rows
    SelectTable(String),
    /// Reload rows of the active table
    Refresh,
    /// Open the raw-JSON view of the current API error
    ShowErrorDetails,
    /// Close the open modal
    CloseModal,

    // ─────────────────────────────────────────────────────────
    // Fetch Results
    // ─────────────────────────────────────────────────────────
    DatabaseInfoLoaded(Result<DatabaseInfo, FetchError>),

    TablesLoaded(Result<TableList, FetchError>),

    TableInfoLoaded {
        request_id: RequestId,
        table: String,
        result: Result<TableInfo, FetchError>,
    },

    RowsLoaded {
        request_id: RequestId,
        table: String,
        result: Result<TableSnapshot, FetchError>,
    },
}
