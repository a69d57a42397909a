//! Presenter: maps fetch outcomes to what each panel shows
//!
//! Everything here is pure. The widgets in dbview-tui only lay out and style
//! the values produced by these functions.

use dbview_api::{ApiError, FetchError};
use dbview_core::{
    format_thousands, is_distinguished, labels, types::restrict_to_key_fields, DatabaseInfo,
    FormatOptions, TableInfo, TableSnapshot, TableView, LIST_KEY_FIELDS,
};

/// Value that is fetched once and then either present or failed
#[derive(Debug, Clone)]
pub enum Loadable<T> {
    Loading,
    Loaded(T),
    Failed(FetchError),
}

impl<T> Default for Loadable<T> {
    fn default() -> Self {
        Loadable::Loading
    }
}

impl<T> Loadable<T> {
    pub fn from_result(result: Result<T, FetchError>) -> Self {
        match result {
            Ok(value) => Loadable::Loaded(value),
            Err(e) => Loadable::Failed(e),
        }
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Loadable::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Loadable::Loading)
    }
}

// ─────────────────────────────────────────────────────────────────
// Data panel
// ─────────────────────────────────────────────────────────────────

/// Error shown in the data panel
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorPanel {
    /// Transport or format failure rendered as one line
    Message(String),
    /// Structured API error with optional type and table name
    Detailed(ApiError),
}

impl ErrorPanel {
    pub fn from_fetch_error(err: FetchError) -> Self {
        match err {
            FetchError::Application(api) => ErrorPanel::Detailed(api),
            other => ErrorPanel::Message(other.user_message()),
        }
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            ErrorPanel::Detailed(api) => Some(api),
            ErrorPanel::Message(_) => None,
        }
    }
}

/// "错误类型: X" when the error reports a type
pub fn error_type_line(api: &ApiError) -> Option<String> {
    api.error_type
        .as_ref()
        .map(|t| format!("{}: {}", labels::ERROR_TYPE, t))
}

/// "表名: Y" when the error reports a table
pub fn table_name_line(api: &ApiError) -> Option<String> {
    api.table_name
        .as_ref()
        .map(|t| format!("{}: {}", labels::TABLE_NAME, t))
}

/// What the main data area shows
#[derive(Debug, Clone)]
pub enum DataPanel {
    /// No table selected yet
    Idle,
    Loading,
    Populated {
        view: TableView,
        snapshot: TableSnapshot,
    },
    Empty {
        table: String,
    },
    Failed(ErrorPanel),
}

impl DataPanel {
    /// Present the outcome of a row fetch
    pub fn from_rows(
        table: &str,
        result: Result<TableSnapshot, FetchError>,
        options: &FormatOptions,
    ) -> Self {
        match result {
            Ok(snapshot) if snapshot.is_empty() => DataPanel::Empty {
                table: table.to_string(),
            },
            Ok(snapshot) => DataPanel::Populated {
                view: TableView::build_with(table, &snapshot, options),
                snapshot,
            },
            Err(e) => DataPanel::Failed(ErrorPanel::from_fetch_error(e)),
        }
    }

    /// Records reported by the last successful fetch; zero otherwise
    pub fn record_count(&self) -> u64 {
        match self {
            DataPanel::Populated { snapshot, .. } => snapshot.total_rows,
            _ => 0,
        }
    }

    pub fn record_count_label(&self) -> String {
        labels::record_count(self.record_count())
    }

    pub fn row_count(&self) -> usize {
        match self {
            DataPanel::Populated { view, .. } => view.row_count(),
            _ => 0,
        }
    }

    pub fn column_count(&self) -> usize {
        match self {
            DataPanel::Populated { view, .. } => view.columns.len(),
            _ => 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, DataPanel::Loading)
    }

    pub fn error_panel(&self) -> Option<&ErrorPanel> {
        match self {
            DataPanel::Failed(panel) => Some(panel),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────────────────────────
// Header and sidebar
// ─────────────────────────────────────────────────────────────────

/// Database line in the header
#[derive(Debug, Clone, PartialEq)]
pub enum DatabaseLine {
    Pending,
    /// "{path} ({file_size_human})"
    Info(String),
    /// "{error}: {path}" or the bare error
    Error(String),
    /// Transport or format failure
    ConnectionFailed,
}

impl DatabaseLine {
    pub fn text(&self) -> &str {
        match self {
            DatabaseLine::Pending => labels::LOADING,
            DatabaseLine::Info(s) | DatabaseLine::Error(s) => s,
            DatabaseLine::ConnectionFailed => labels::DB_CONNECTION_FAILED,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, DatabaseLine::Error(_) | DatabaseLine::ConnectionFailed)
    }
}

pub fn database_line(info: &Loadable<DatabaseInfo>) -> DatabaseLine {
    match info {
        Loadable::Loading => DatabaseLine::Pending,
        Loadable::Loaded(info) => DatabaseLine::Info(info.summary()),
        Loadable::Failed(FetchError::Application(api)) => DatabaseLine::Error(api.with_path()),
        Loadable::Failed(_) => DatabaseLine::ConnectionFailed,
    }
}

/// Table list sidebar contents
#[derive(Debug, Clone, PartialEq)]
pub enum TableListView<'a> {
    Loading,
    /// "没有找到数据表"
    NoTables,
    /// "加载失败"
    Failed,
    Tables(&'a [String]),
}

pub fn table_list_view(tables: &Loadable<Vec<String>>) -> TableListView<'_> {
    match tables {
        Loadable::Loading => TableListView::Loading,
        Loadable::Loaded(list) if list.is_empty() => TableListView::NoTables,
        Loadable::Loaded(list) => TableListView::Tables(list),
        Loadable::Failed(_) => TableListView::Failed,
    }
}

/// Table info sidebar contents
#[derive(Debug, Clone, PartialEq)]
pub enum TableInfoView {
    Loading,
    /// Application error text, shown in red
    Error(String),
    /// Transport or format failure; the panel stays blank
    Unavailable,
    Info(TableInfoLines),
}

/// Lines of the table info panel
#[derive(Debug, Clone, PartialEq)]
pub struct TableInfoLines {
    pub table_name: String,
    /// Thousands-separated row count
    pub row_count: String,
    pub column_count: String,
    /// "列表显示: id, ..." for the distinguished table
    pub list_display: Option<String>,
    /// "name (type)" per displayed column
    pub fields: Vec<String>,
}

pub fn table_info_view(info: &Loadable<TableInfo>) -> TableInfoView {
    match info {
        Loadable::Loading => TableInfoView::Loading,
        Loadable::Failed(FetchError::Application(api)) => TableInfoView::Error(api.error.clone()),
        Loadable::Failed(_) => TableInfoView::Unavailable,
        Loadable::Loaded(info) => TableInfoView::Info(table_info_lines(info)),
    }
}

pub fn table_info_lines(info: &TableInfo) -> TableInfoLines {
    let distinguished = is_distinguished(&info.table_name);
    let schema = if distinguished {
        restrict_to_key_fields(&info.schema)
    } else {
        info.schema.clone()
    };

    TableInfoLines {
        table_name: info.table_name.clone(),
        row_count: format_thousands(info.row_count),
        column_count: info.column_count.to_string(),
        list_display: distinguished
            .then(|| format!("{}: {}", labels::LIST_DISPLAY, LIST_KEY_FIELDS.join(", "))),
        fields: schema.iter().map(|col| col.signature()).collect(),
    }
}
