//! Main update function - handles state transitions (TEA pattern)

use tracing::{debug, info, warn};

use dbview_api::FetchError;
use dbview_core::{DetailView, TableInfo, TableList, TableSnapshot};

use crate::message::Message;
use crate::presenter::{DataPanel, Loadable};
use crate::state::{AppState, Focus, Modal, RequestId, RequestKind};

use super::navigation::{self, Step};
use super::{keys::handle_key, UpdateAction, UpdateResult};

/// Process a message and update state
/// Returns optional follow-up message and/or action
pub fn update(state: &mut AppState, message: Message) -> UpdateResult {
    match message {
        Message::Quit => {
            state.quit();
            UpdateResult::none()
        }

        Message::Key(key) => {
            if let Some(msg) = handle_key(state, key) {
                UpdateResult::message(msg)
            } else {
                UpdateResult::none()
            }
        }

        Message::Tick => {
            if state.data.is_loading() {
                state.tick_loading_animation();
            }
            UpdateResult::none()
        }

        Message::Startup => {
            state.database = Loadable::Loading;
            state.tables = Loadable::Loading;
            UpdateResult::action(UpdateAction::LoadStartup)
        }

        // ─────────────────────────────────────────────────────────
        // Navigation Messages
        // ─────────────────────────────────────────────────────────
        Message::MoveUp => navigation::handle_step(state, Step::Up(1)),
        Message::MoveDown => navigation::handle_step(state, Step::Down(1)),
        Message::PageUp => navigation::handle_step(state, Step::page_up()),
        Message::PageDown => navigation::handle_step(state, Step::page_down()),
        Message::Home => navigation::handle_step(state, Step::First),
        Message::End => navigation::handle_step(state, Step::Last),
        Message::ScrollLeft => navigation::handle_scroll_left(state),
        Message::ScrollRight => navigation::handle_scroll_right(state),
        Message::ToggleFocus => navigation::handle_toggle_focus(state),
        Message::Activate => handle_activate(state),

        // ─────────────────────────────────────────────────────────
        // Table Messages
        // ─────────────────────────────────────────────────────────
        Message::SelectTable(table) => handle_select_table(state, table),
        Message::Refresh => handle_refresh(state),

        Message::ShowErrorDetails => {
            if let Some(error) = state.data_api_error().cloned() {
                state.modal = Some(Modal::error_detail(error));
            }
            UpdateResult::none()
        }

        Message::CloseModal => {
            state.modal = None;
            UpdateResult::none()
        }

        // ─────────────────────────────────────────────────────────
        // Fetch Results
        // ─────────────────────────────────────────────────────────
        Message::DatabaseInfoLoaded(result) => {
            if let Err(e) = &result {
                warn!("Database info failed: {}", e);
            }
            state.database = Loadable::from_result(result);
            UpdateResult::none()
        }

        Message::TablesLoaded(result) => handle_tables_loaded(state, result),

        Message::TableInfoLoaded {
            request_id,
            table,
            result,
        } => handle_table_info_loaded(state, request_id, table, result),

        Message::RowsLoaded {
            request_id,
            table,
            result,
        } => handle_rows_loaded(state, request_id, table, result),
    }
}

/// Enter: select the table under the cursor, or open detail of the selected row
fn handle_activate(state: &mut AppState) -> UpdateResult {
    match state.focus {
        Focus::Tables => match state.table_under_cursor() {
            Some(table) => UpdateResult::message(Message::SelectTable(table.to_string())),
            None => UpdateResult::none(),
        },
        Focus::Rows => {
            let view = match (state.active_table.as_deref(), state.selected_row()) {
                (Some(table), Some(row)) => DetailView::build(table, row),
                _ => return UpdateResult::none(),
            };
            state.modal = Some(Modal::detail(view));
            UpdateResult::none()
        }
    }
}

fn handle_select_table(state: &mut AppState, table: String) -> UpdateResult {
    info!("Selecting table '{}'", table);

    if let Some(index) = state.table_names().iter().position(|t| *t == table) {
        state.table_cursor = index;
    }

    state.active_table = Some(table.clone());
    state.table_info = Some(Loadable::Loading);
    state.data = DataPanel::Loading;
    state.row_cursor = 0;
    state.column_offset = 0;
    state.modal = None;

    let info_request = state.requests.issue(RequestKind::TableInfo);
    let rows_request = state.requests.issue(RequestKind::Rows);

    UpdateResult::action(UpdateAction::LoadTable {
        table,
        limit: state.row_limit,
        info_request,
        rows_request,
    })
}

fn handle_refresh(state: &mut AppState) -> UpdateResult {
    let Some(table) = state.active_table.clone() else {
        return UpdateResult::none();
    };

    debug!("Refreshing rows of '{}'", table);
    state.data = DataPanel::Loading;
    let request_id = state.requests.issue(RequestKind::Rows);

    UpdateResult::action(UpdateAction::LoadRows {
        table,
        limit: state.row_limit,
        request_id,
    })
}

fn handle_tables_loaded(
    state: &mut AppState,
    result: Result<TableList, FetchError>,
) -> UpdateResult {
    let first = match &result {
        Ok(list) => {
            info!("Found {} tables", list.tables.len());
            list.tables.first().cloned()
        }
        Err(e) => {
            warn!("Loading tables failed: {}", e);
            None
        }
    };

    state.tables = Loadable::from_result(result.map(|list| list.tables));
    navigation::clamp_cursors(state);

    // Auto-select the first table on startup
    match first {
        Some(table) if state.active_table.is_none() => {
            UpdateResult::message(Message::SelectTable(table))
        }
        _ => UpdateResult::none(),
    }
}

fn handle_table_info_loaded(
    state: &mut AppState,
    request_id: RequestId,
    table: String,
    result: Result<TableInfo, FetchError>,
) -> UpdateResult {
    if !state.requests.is_current(RequestKind::TableInfo, request_id) {
        debug!(
            "Dropping stale table info for '{}' ({:?})",
            table, request_id
        );
        return UpdateResult::none();
    }

    if let Err(e) = &result {
        warn!("Table info for '{}' failed: {}", table, e);
    }
    state.table_info = Some(Loadable::from_result(result));
    UpdateResult::none()
}

fn handle_rows_loaded(
    state: &mut AppState,
    request_id: RequestId,
    table: String,
    result: Result<TableSnapshot, FetchError>,
) -> UpdateResult {
    if !state.requests.is_current(RequestKind::Rows, request_id) {
        debug!("Dropping stale rows for '{}' ({:?})", table, request_id);
        return UpdateResult::none();
    }

    match &result {
        Ok(snapshot) => info!(
            "Loaded {} rows of '{}' (total_rows={})",
            snapshot.data.len(),
            table,
            snapshot.total_rows
        ),
        Err(e) => warn!("Rows of '{}' failed: {}", table, e),
    }

    state.data = DataPanel::from_rows(&table, result, &state.format_options);
    navigation::clamp_cursors(state);
    UpdateResult::none()
}
