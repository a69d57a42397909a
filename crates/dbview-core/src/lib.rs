//! # dbview-core - Core Domain Types
//!
//! Foundation crate for dbview. Contains the API payload types, the cell
//! formatting rule table, the list and detail view models, and the shared
//! error and logging infrastructure.
//!
//! This crate has no internal dependencies and no I/O beyond logging setup.
//!
//! ## Public API
//!
//! ### Domain Types
//! - [`TableSnapshot`], [`TableInfo`], [`TableList`], [`DatabaseInfo`] - Endpoint payloads
//! - [`ColumnDescriptor`], [`Row`] - Schema and row data
//!
//! ### Formatting
//! - [`format_cell`], [`render_list_cell`], [`CELL_RULES`] - List cell rules
//! - [`TableView`] - Header plus body cells for one snapshot
//! - [`DetailView`], [`format_detail_value`] - Per-row detail model
//! - [`FormatOptions`] - Timestamp display options
//!
//! ### Error Handling
//! - [`Error`] - Application error enum
//! - [`Result`] - Type alias for `std::result::Result<T, Error>`
//! - [`ResultExt`] - Extension trait for adding context to errors
//!
//! ### Utilities
//! - [`logging`] - Tracing subscriber setup
//! - [`labels`] - User-facing strings
//! - [`prelude`] - Common imports (tracing macros, Result, Error)

pub mod cell;
pub mod datetime;
pub mod detail;
pub mod error;
pub mod labels;
pub mod logging;
pub mod table_view;
pub mod types;

/// Prelude for common imports used throughout the codebase
pub mod prelude {
    pub use tracing::{debug, error, info, instrument, trace, warn};

    pub use super::error::{Error, Result, ResultExt};
}

pub use cell::{
    format_cell, format_cell_with, render_list_cell, CellMarkup, CellRule, StatusClass, Tone,
    CELL_RULES,
};
pub use datetime::FormatOptions;
pub use detail::{format_detail_value, DetailField, DetailSection, DetailValue, DetailView};
pub use error::{Error, Result, ResultExt};
pub use table_view::{display_columns, TableView};
pub use types::{
    format_thousands, is_distinguished, ColumnDescriptor, DatabaseInfo, Row,
    TableInfo, TableList, TableSnapshot, DEFAULT_ROW_LIMIT, DISTINGUISHED_TABLE, LIST_KEY_FIELDS,
};
