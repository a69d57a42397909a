//! Main data area: loading spinner, data table, empty state or error panel

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use dbview_app::presenter::{error_type_line, table_name_line, DataPanel, ErrorPanel};
use dbview_core::{labels, TableView};

use crate::theme::{palette, styles};

use super::data_table::is_cut;
use super::wrap::wrap_lines;
use super::DataTable;

/// Braille spinner frames, one per tick
const SPINNER: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Most rows given to the full value of a cut cell
const MAX_VALUE_ROWS: usize = 4;

pub struct DataPanelWidget<'a> {
    panel: &'a DataPanel,
    table: Option<&'a str>,
    row_cursor: usize,
    column_offset: usize,
    focused: bool,
    animation_frame: u64,
}

impl<'a> DataPanelWidget<'a> {
    pub fn new(panel: &'a DataPanel, table: Option<&'a str>) -> Self {
        Self {
            panel,
            table,
            row_cursor: 0,
            column_offset: 0,
            focused: false,
            animation_frame: 0,
        }
    }

    pub fn cursor(mut self, row_cursor: usize, column_offset: usize) -> Self {
        self.row_cursor = row_cursor;
        self.column_offset = column_offset;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }

    pub fn animation_frame(mut self, frame: u64) -> Self {
        self.animation_frame = frame;
        self
    }

    fn title(&self) -> String {
        match self.table {
            Some(table) => format!(" {} · {} ", table, self.panel.record_count_label()),
            None => String::new(),
        }
    }

    fn spinner(&self) -> &'static str {
        SPINNER[(self.animation_frame as usize) % SPINNER.len()]
    }

    /// Full value of the selected cell (cursor row, first visible column)
    /// when the table cuts it, wrapped to `width`
    fn selected_value_rows(&self, view: &TableView, width: u16) -> Vec<Line<'static>> {
        let column = view.columns.get(self.column_offset);
        let cell = view
            .rows
            .get(self.row_cursor)
            .and_then(|cells| cells.get(self.column_offset));

        match (column, cell) {
            (Some(column), Some(cell)) if is_cut(cell) => {
                let line = Line::from(vec![
                    Span::styled(format!("{}: ", column.name), styles::text_secondary()),
                    Span::styled(cell.full_text(), styles::text_primary()),
                ]);
                let mut rows = wrap_lines(&[line], width);
                rows.truncate(MAX_VALUE_ROWS);
                rows
            }
            _ => Vec::new(),
        }
    }

    fn render_table(&self, view: &TableView, area: Rect, buf: &mut Buffer) {
        let table = DataTable::new(view)
            .cursor(self.row_cursor)
            .column_offset(self.column_offset)
            .focused(self.focused);

        let value_rows = self.selected_value_rows(view, area.width);
        // Header, one row and a separator must still fit above the value
        if value_rows.is_empty() || area.height as usize <= value_rows.len() + 2 {
            table.render(area, buf);
            return;
        }

        let [table_area, separator, value_area] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(1),
            Constraint::Length(value_rows.len() as u16),
        ])
        .areas(area);

        table.render(table_area, buf);
        Line::styled("─".repeat(usize::from(separator.width)), styles::border_inactive())
            .render(separator, buf);
        Paragraph::new(value_rows).render(value_area, buf);
    }
}

impl Widget for DataPanelWidget<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(self.title())
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let lines = match self.panel {
            DataPanel::Populated { view, .. } => {
                self.render_table(view, inner, buf);
                return;
            }
            DataPanel::Idle => vec![Line::styled(labels::NO_TABLE_SELECTED, styles::text_muted())],
            DataPanel::Loading => vec![Line::styled(
                format!("{} {}", self.spinner(), labels::LOADING),
                styles::accent(),
            )],
            DataPanel::Empty { table } => vec![
                Line::styled(
                    labels::NO_DATA,
                    styles::text_secondary().add_modifier(Modifier::BOLD),
                ),
                Line::styled(labels::empty_table(table), styles::text_muted()),
            ],
            DataPanel::Failed(error) => error_lines(error),
        };

        render_centered(lines, inner, buf);
    }
}

fn error_lines(error: &ErrorPanel) -> Vec<Line<'static>> {
    match error {
        ErrorPanel::Message(text) => text
            .lines()
            .map(|line| Line::styled(line.to_string(), styles::text_primary()))
            .collect(),
        ErrorPanel::Detailed(api) => {
            let mut lines = vec![
                Line::styled(
                    labels::LOAD_FAILED_TITLE,
                    styles::status_red().add_modifier(Modifier::BOLD),
                ),
                Line::styled(api.error.clone(), styles::status_red()),
            ];
            lines.extend(
                [error_type_line(api), table_name_line(api)]
                    .into_iter()
                    .flatten()
                    .map(|line| Line::styled(line, styles::text_secondary())),
            );
            lines.push(Line::raw(""));
            lines.push(Line::styled(labels::VIEW_DETAILS_HINT, styles::keybinding()));
            lines
        }
    }
}

/// Render lines centered horizontally and vertically
fn render_centered(lines: Vec<Line<'static>>, area: Rect, buf: &mut Buffer) {
    let height = (lines.len() as u16).min(area.height);
    let top = area.y + (area.height - height) / 2;
    let target = Rect {
        y: top,
        height: area.height - (top - area.y),
        ..area
    };

    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
        .render(target, buf);
}
