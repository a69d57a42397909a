//! Data table widget
//!
//! Renders a [`TableView`] starting at a column offset. Header and body are
//! sliced from the same offset, so their cells stay aligned.

use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Rect},
    widgets::{Cell, Row, StatefulWidget, Table, TableState, Widget},
};
use unicode_width::UnicodeWidthStr;

use dbview_core::{CellMarkup, TableView};

use crate::theme::styles;

/// Narrowest column in characters
const MIN_COL_WIDTH: u16 = 4;

/// Widest column in characters; longer cells are cut
const MAX_COL_WIDTH: u16 = 40;

const COLUMN_SPACING: u16 = 2;

pub struct DataTable<'a> {
    view: &'a TableView,
    cursor: usize,
    column_offset: usize,
    focused: bool,
}

impl<'a> DataTable<'a> {
    pub fn new(view: &'a TableView) -> Self {
        Self {
            view,
            cursor: 0,
            column_offset: 0,
            focused: false,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn column_offset(mut self, column_offset: usize) -> Self {
        self.column_offset = column_offset;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    /// Width of each visible column, from its header and cells
    fn column_widths(&self, offset: usize) -> Vec<Constraint> {
        self.view.columns[offset..]
            .iter()
            .enumerate()
            .map(|(i, column)| {
                let index = offset + i;
                let widest_cell = self
                    .view
                    .rows
                    .iter()
                    .filter_map(|cells| cells.get(index))
                    .map(|markup| cell_text(markup).width())
                    .max()
                    .unwrap_or(0);
                let width = widest_cell.max(column.name.width()) as u16;
                Constraint::Length(width.clamp(MIN_COL_WIDTH, MAX_COL_WIDTH))
            })
            .collect()
    }
}

/// Single-line text of a cell
fn cell_text(markup: &CellMarkup) -> String {
    markup.text().replace(['\n', '\r'], " ")
}

/// Whether the table shows less than the cell's full value
pub fn is_cut(markup: &CellMarkup) -> bool {
    matches!(markup, CellMarkup::Truncated { .. })
        || cell_text(markup).width() > usize::from(MAX_COL_WIDTH)
}

impl Widget for DataTable<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let offset = self.column_offset.min(self.view.columns.len());

        let header = Row::new(
            self.view.columns[offset..]
                .iter()
                .map(|column| Cell::from(column.name.as_str())),
        )
        .style(styles::accent_bold());

        let rows = self.view.rows.iter().map(|cells| {
            Row::new(
                cells
                    .get(offset..)
                    .unwrap_or(&[])
                    .iter()
                    .map(|markup| Cell::from(cell_text(markup)).style(styles::cell(markup))),
            )
        });

        let highlight = if self.focused {
            styles::focused_selected()
        } else {
            styles::unfocused_selected()
        };

        let table = Table::new(rows, self.column_widths(offset))
            .header(header)
            .column_spacing(COLUMN_SPACING)
            .row_highlight_style(highlight);

        let mut state = TableState::default().with_selected(Some(self.cursor));
        StatefulWidget::render(table, area, buf, &mut state);
    }
}
