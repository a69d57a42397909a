//! Sidebar panel with row count, column count and schema of the active table

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget, Wrap},
};

use dbview_app::presenter::{TableInfoLines, TableInfoView};
use dbview_core::labels;

use crate::theme::{palette, styles};

pub struct TableInfoPanel {
    /// `None` until a table is selected
    view: Option<TableInfoView>,
}

impl TableInfoPanel {
    pub fn new(view: Option<TableInfoView>) -> Self {
        Self { view }
    }
}

impl Widget for TableInfoPanel {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false)
            .title(format!(" {} ", labels::TABLE_INFO_TITLE))
            .style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let paragraph = match self.view {
            None => Paragraph::new(labels::NO_TABLE_SELECTED).style(styles::text_muted()),
            Some(TableInfoView::Loading) => {
                Paragraph::new(labels::LOADING).style(styles::text_muted())
            }
            Some(TableInfoView::Error(text)) => Paragraph::new(text).style(styles::status_red()),
            Some(TableInfoView::Unavailable) => return,
            Some(TableInfoView::Info(info)) => Paragraph::new(info_lines(info)),
        };

        paragraph.wrap(Wrap { trim: false }).render(inner, buf);
    }
}

fn labelled(label: &'static str, value: String) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!("{}: ", label), styles::text_secondary()),
        Span::styled(value, styles::text_primary()),
    ])
}

fn info_lines(info: TableInfoLines) -> Vec<Line<'static>> {
    let mut lines = vec![
        labelled(labels::TABLE_NAME, info.table_name),
        labelled(labels::ROW_COUNT, info.row_count),
        labelled(labels::COLUMN_COUNT, info.column_count),
    ];

    if let Some(list_display) = info.list_display {
        lines.push(Line::styled(list_display, styles::accent()));
    }

    lines.push(Line::raw(""));
    lines.push(Line::styled(
        format!("{}:", labels::FIELD_STRUCTURE),
        styles::text_secondary(),
    ));
    lines.extend(
        info.fields
            .into_iter()
            .map(|field| Line::styled(format!("  {}", field), styles::text_primary())),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;
    use dbview_app::presenter::table_info_lines;
    use dbview_core::{ColumnDescriptor, TableInfo, DISTINGUISHED_TABLE};

    fn render(view: Option<TableInfoView>) -> TestTerminal {
        let mut term = TestTerminal::with_size(60, 14);
        let area = term.area();
        term.render_widget(TableInfoPanel::new(view), area);
        term
    }

    #[test]
    fn test_info_lines() {
        let info = TableInfo {
            table_name: "users".into(),
            row_count: 12345,
            column_count: 2,
            schema: vec![
                ColumnDescriptor::new("id", "INTEGER"),
                ColumnDescriptor::new("name", "TEXT"),
            ],
        };
        let term = render(Some(TableInfoView::Info(table_info_lines(&info))));

        assert!(term.buffer_contains("表名: users"));
        assert!(term.buffer_contains("记录数: 12,345"));
        assert!(term.buffer_contains("总字段数: 2"));
        assert!(term.buffer_contains("字段结构:"));
        assert!(term.buffer_contains("id (INTEGER)"));
        assert!(term.buffer_contains("name (TEXT)"));
        assert!(!term.buffer_contains("列表显示"));
    }

    #[test]
    fn test_distinguished_table_lists_key_fields() {
        let info = TableInfo {
            table_name: DISTINGUISHED_TABLE.into(),
            row_count: 1,
            column_count: 3,
            schema: vec![
                ColumnDescriptor::new("id", "INTEGER"),
                ColumnDescriptor::new("request_body", "TEXT"),
                ColumnDescriptor::new("created_at", "DATETIME"),
            ],
        };
        let term = render(Some(TableInfoView::Info(table_info_lines(&info))));

        assert!(term.buffer_contains("列表显示: id, response_content_type"));
        assert!(term.buffer_contains("created_at (DATETIME)"));
        assert!(!term.buffer_contains("request_body"));
    }

    #[test]
    fn test_error_in_red() {
        let term = render(Some(TableInfoView::Error("no such table".into())));
        assert!(term.buffer_contains("no such table"));
        assert_eq!(term.buffer()[(1, 1)].fg, palette::STATUS_RED);
    }

    #[test]
    fn test_no_table_selected() {
        let term = render(None);
        assert!(term.buffer_contains("请选择一个数据表"));
    }

    #[test]
    fn test_unavailable_is_blank() {
        let term = render(Some(TableInfoView::Unavailable));
        assert!(term.line(1).trim_matches(|c| c == '│' || c == ' ').is_empty());
    }
}
