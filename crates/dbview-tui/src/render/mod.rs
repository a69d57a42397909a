//! Main render/view function (View in TEA pattern)


use ratatui::style::Style;
use ratatui::widgets::Block;
use ratatui::Frame;

use dbview_app::presenter::{database_line, table_info_view, table_list_view};
use dbview_app::{AppState, Focus, Modal};

use crate::theme::palette;

use super::{layout, widgets};

/// Render the complete UI (View function in TEA)
///
/// Panels are derived from the presenter functions of dbview-app. The only
/// state written back is the open modal's content size, so its scroll stays
/// clamped.
pub fn view(frame: &mut Frame, state: &mut AppState) {
    let area = frame.area();

    let bg_block = Block::default().style(Style::default().bg(palette::DEEPEST_BG));
    frame.render_widget(bg_block, area);

    let areas = layout::create(area);
    let modal_open = state.modal.is_some();

    let database = database_line(&state.database);
    frame.render_widget(widgets::MainHeader::new(&database), areas.header);

    let tables = widgets::TableList::new(table_list_view(&state.tables))
        .cursor(state.table_cursor)
        .active(state.active_table.as_deref())
        .focused(!modal_open && state.focus == Focus::Tables);
    frame.render_widget(tables, areas.tables);

    let info = state.table_info.as_ref().map(table_info_view);
    frame.render_widget(widgets::TableInfoPanel::new(info), areas.table_info);

    let data = widgets::DataPanelWidget::new(&state.data, state.active_table.as_deref())
        .cursor(state.row_cursor, state.column_offset)
        .focused(!modal_open && state.focus == Focus::Rows)
        .animation_frame(state.animation_frame);
    frame.render_widget(data, areas.data);

    let record_count = state.data.record_count_label();
    frame.render_widget(
        widgets::Footer::new(modal_open, &record_count),
        areas.footer,
    );

    match &mut state.modal {
        Some(Modal::Detail { view, scroll }) => {
            frame.render_stateful_widget(widgets::DetailModal::new(view), area, scroll);
        }
        Some(Modal::ErrorDetail { error, scroll }) => {
            frame.render_stateful_widget(widgets::ErrorModal::new(error), area, scroll);
        }
        None => {}
    }
}
