//! Application state (Model in TEA pattern)

use dbview_api::ApiError;
use dbview_core::{DatabaseInfo, DetailView, FormatOptions, Row, TableInfo};

use crate::config::Settings;
use crate::presenter::{DataPanel, Loadable};

/// Rows moved by PageUp/PageDown
pub const PAGE_SIZE: usize = 10;

/// Which pane receives navigation keys
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Tables,
    Rows,
}

/// Vertical scroll of a modal's content.
///
/// The renderer reports the wrapped content height and the visible height
/// via [`ModalScroll::update_content_size`]; scrolling is clamped to them.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ModalScroll {
    offset: usize,
    total_lines: usize,
    visible_lines: usize,
}

impl ModalScroll {
    pub fn offset(&self) -> usize {
        self.offset
    }

    fn max_offset(&self) -> usize {
        self.total_lines.saturating_sub(self.visible_lines)
    }

    pub fn scroll_up(&mut self, n: usize) {
        self.offset = self.offset.saturating_sub(n);
    }

    pub fn scroll_down(&mut self, n: usize) {
        self.offset = self.offset.saturating_add(n).min(self.max_offset());
    }

    pub fn scroll_to_top(&mut self) {
        self.offset = 0;
    }

    pub fn scroll_to_bottom(&mut self) {
        self.offset = self.max_offset();
    }

    /// Update with the rendered content size
    pub fn update_content_size(&mut self, total: usize, visible: usize) {
        self.total_lines = total;
        self.visible_lines = visible;
        self.offset = self.offset.min(self.max_offset());
    }
}

/// Modal drawn over the main screen
#[derive(Debug, Clone)]
pub enum Modal {
    /// Every field of one row
    Detail {
        view: DetailView,
        scroll: ModalScroll,
    },
    /// Raw JSON of an API error
    ErrorDetail {
        error: ApiError,
        scroll: ModalScroll,
    },
}

impl Modal {
    pub fn detail(view: DetailView) -> Self {
        Modal::Detail {
            view,
            scroll: ModalScroll::default(),
        }
    }

    pub fn error_detail(error: ApiError) -> Self {
        Modal::ErrorDetail {
            error,
            scroll: ModalScroll::default(),
        }
    }

    pub fn scroll_mut(&mut self) -> &mut ModalScroll {
        match self {
            Modal::Detail { scroll, .. } | Modal::ErrorDetail { scroll, .. } => scroll,
        }
    }

    pub fn scroll(&self) -> &ModalScroll {
        match self {
            Modal::Detail { scroll, .. } | Modal::ErrorDetail { scroll, .. } => scroll,
        }
    }
}

/// Identifier of an issued table request
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestId(pub u64);

/// Kind of per-table request subject to sequencing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RequestKind {
    TableInfo,
    Rows,
}

/// Issues monotonically increasing request ids and remembers the latest one
/// per kind; responses carrying an older id are stale
#[derive(Debug, Clone, Default)]
pub struct RequestSequencer {
    next: u64,
    latest_info: Option<RequestId>,
    latest_rows: Option<RequestId>,
}

impl RequestSequencer {
    pub fn issue(&mut self, kind: RequestKind) -> RequestId {
        self.next += 1;
        let id = RequestId(self.next);
        match kind {
            RequestKind::TableInfo => self.latest_info = Some(id),
            RequestKind::Rows => self.latest_rows = Some(id),
        }
        id
    }

    pub fn is_current(&self, kind: RequestKind, id: RequestId) -> bool {
        let latest = match kind {
            RequestKind::TableInfo => self.latest_info,
            RequestKind::Rows => self.latest_rows,
        };
        latest == Some(id)
    }
}

/// Complete application state
#[derive(Debug)]
pub struct AppState {
    /// Rows requested per fetch
    pub row_limit: u32,

    /// Display options for timestamp cells
    pub format_options: FormatOptions,

    /// Header database line
    pub database: Loadable<DatabaseInfo>,

    /// Table names for the sidebar
    pub tables: Loadable<Vec<String>>,

    /// Cursor in the table list, independent of the active table
    pub table_cursor: usize,

    /// Table whose info and rows are shown
    pub active_table: Option<String>,

    /// Info of the active table; `None` until a table is selected
    pub table_info: Option<Loadable<TableInfo>>,

    /// Main data area
    pub data: DataPanel,

    /// Selected row in the data table
    pub row_cursor: usize,

    /// First visible column in the data table
    pub column_offset: usize,

    pub focus: Focus,

    pub modal: Option<Modal>,

    pub requests: RequestSequencer,

    /// Spinner frame while rows are loading
    pub animation_frame: u64,

    should_quit: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self::with_settings(&Settings::default())
    }

    pub fn with_settings(settings: &Settings) -> Self {
        Self {
            row_limit: settings.server.effective_row_limit(),
            format_options: settings.format_options(),
            database: Loadable::Loading,
            tables: Loadable::Loading,
            table_cursor: 0,
            active_table: None,
            table_info: None,
            data: DataPanel::Idle,
            row_cursor: 0,
            column_offset: 0,
            focus: Focus::Tables,
            modal: None,
            requests: RequestSequencer::default(),
            animation_frame: 0,
            should_quit: false,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Table names, empty until the list has loaded
    pub fn table_names(&self) -> &[String] {
        self.tables.loaded().map(Vec::as_slice).unwrap_or(&[])
    }

    /// Table under the sidebar cursor
    pub fn table_under_cursor(&self) -> Option<&str> {
        self.table_names()
            .get(self.table_cursor)
            .map(String::as_str)
    }

    /// Full, unfiltered row under the row cursor
    pub fn selected_row(&self) -> Option<&Row> {
        match &self.data {
            DataPanel::Populated { snapshot, .. } => snapshot.data.get(self.row_cursor),
            _ => None,
        }
    }

    /// API error behind the data panel, if any
    pub fn data_api_error(&self) -> Option<&ApiError> {
        self.data.error_panel().and_then(|panel| panel.api_error())
    }

    pub fn is_active(&self, table: &str) -> bool {
        self.active_table.as_deref() == Some(table)
    }

    pub fn tick_loading_animation(&mut self) {
        self.animation_frame = self.animation_frame.wrapping_add(1);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequencer_tracks_latest_per_kind() {
        let mut seq = RequestSequencer::default();
        let info_1 = seq.issue(RequestKind::TableInfo);
        let rows_1 = seq.issue(RequestKind::Rows);
        let rows_2 = seq.issue(RequestKind::Rows);

        assert!(seq.is_current(RequestKind::TableInfo, info_1));
        assert!(!seq.is_current(RequestKind::Rows, rows_1));
        assert!(seq.is_current(RequestKind::Rows, rows_2));
        assert!(rows_2 > rows_1);
    }

    #[test]
    fn test_sequencer_ids_are_not_shared_between_kinds() {
        let mut seq = RequestSequencer::default();
        let info = seq.issue(RequestKind::TableInfo);
        assert!(!seq.is_current(RequestKind::Rows, info));
    }

    #[test]
    fn test_new_state_defaults() {
        let state = AppState::new();
        assert_eq!(state.row_limit, 100);
        assert_eq!(state.focus, Focus::Tables);
        assert!(state.active_table.is_none());
        assert!(matches!(state.data, DataPanel::Idle));
        assert!(!state.should_quit());
        assert!(state.table_names().is_empty());
    }

    #[test]
    fn test_modal_scroll_clamps_to_content() {
        let mut modal = Modal::error_detail(ApiError::from_value(serde_json::json!({"error": "x"})));
        modal.scroll_mut().update_content_size(30, 10);

        modal.scroll_mut().scroll_down(50);
        assert_eq!(modal.scroll().offset(), 20);

        modal.scroll_mut().scroll_up(1);
        assert_eq!(modal.scroll().offset(), 19);
    }

    #[test]
    fn test_modal_scroll_without_overflow_stays_at_top() {
        let mut scroll = ModalScroll::default();
        scroll.update_content_size(3, 10);
        scroll.scroll_down(5);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset(), 0);
    }

    #[test]
    fn test_content_shrink_pulls_offset_back() {
        let mut scroll = ModalScroll::default();
        scroll.update_content_size(100, 10);
        scroll.scroll_to_bottom();
        assert_eq!(scroll.offset(), 90);

        scroll.update_content_size(40, 10);
        assert_eq!(scroll.offset(), 30);
    }
}
