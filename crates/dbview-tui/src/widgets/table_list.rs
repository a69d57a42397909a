//! Sidebar list of tables

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dbview_app::presenter::TableListView;
use dbview_core::labels;

use crate::theme::{palette, styles};

/// Marker in front of the active table
const ACTIVE_MARKER: &str = "● ";
const INACTIVE_MARKER: &str = "  ";

/// Table names with the cursor and active table highlighted
pub struct TableList<'a> {
    view: TableListView<'a>,
    cursor: usize,
    active: Option<&'a str>,
    focused: bool,
}

impl<'a> TableList<'a> {
    pub fn new(view: TableListView<'a>) -> Self {
        Self {
            view,
            cursor: 0,
            active: None,
            focused: false,
        }
    }

    pub fn cursor(mut self, cursor: usize) -> Self {
        self.cursor = cursor;
        self
    }

    pub fn active(mut self, active: Option<&'a str>) -> Self {
        self.active = active;
        self
    }

    pub fn focused(mut self, focused: bool) -> Self {
        self.focused = focused;
        self
    }
}

impl Widget for TableList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(self.focused)
            .title(format!(" {} ", labels::TABLES_TITLE))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let tables = match self.view {
            TableListView::Loading => {
                Paragraph::new(labels::LOADING)
                    .style(styles::text_muted())
                    .render(inner, buf);
                return;
            }
            TableListView::NoTables => {
                Paragraph::new(labels::NO_TABLES)
                    .style(styles::text_muted())
                    .render(inner, buf);
                return;
            }
            TableListView::Failed => {
                Paragraph::new(labels::TABLES_LOAD_FAILED)
                    .style(styles::status_red())
                    .render(inner, buf);
                return;
            }
            TableListView::Tables(tables) => tables,
        };

        // Keep the cursor in view
        let visible = inner.height as usize;
        let offset = (self.cursor + 1).saturating_sub(visible);

        let lines: Vec<Line> = tables
            .iter()
            .enumerate()
            .skip(offset)
            .take(visible)
            .map(|(index, name)| {
                let is_active = self.active == Some(name.as_str());
                let marker = if is_active {
                    ACTIVE_MARKER
                } else {
                    INACTIVE_MARKER
                };
                let style = if index == self.cursor {
                    if self.focused {
                        styles::focused_selected()
                    } else {
                        styles::unfocused_selected()
                    }
                } else if is_active {
                    styles::accent()
                } else {
                    styles::text_primary()
                };
                Line::from(vec![Span::styled(marker, styles::accent()), Span::raw(name)])
                    .style(style)
            })
            .collect();

        Paragraph::new(lines).render(inner, buf);
    }
}
