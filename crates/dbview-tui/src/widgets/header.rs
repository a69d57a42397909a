//! Header bar: app title and the database line

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use dbview_app::presenter::DatabaseLine;

use crate::theme::{palette, styles};

const APP_TITLE: &str = "dbview";

/// Main header showing the app title and the database summary
pub struct MainHeader<'a> {
    database: &'a DatabaseLine,
}

impl<'a> MainHeader<'a> {
    pub fn new(database: &'a DatabaseLine) -> Self {
        Self { database }
    }
}

impl Widget for MainHeader<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = styles::glass_block(false).style(Style::default().bg(palette::CARD_BG));
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.height == 0 || inner.width == 0 {
            return;
        }

        let database_style = match self.database {
            DatabaseLine::Pending => styles::text_muted(),
            line if line.is_error() => styles::status_red(),
            _ => styles::text_secondary(),
        };

        let line = Line::from(vec![
            Span::styled(APP_TITLE, styles::accent_bold()),
            Span::raw("  "),
            Span::styled(self.database.text(), database_style),
        ]);
        Paragraph::new(line).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    fn render(line: &DatabaseLine) -> TestTerminal {
        let mut term = TestTerminal::with_size(60, 3);
        let area = term.area();
        term.render_widget(MainHeader::new(line), area);
        term
    }

    #[test]
    fn test_header_shows_database_summary() {
        let term = render(&DatabaseLine::Info("/data/app.db (2.00 KB)".into()));
        assert!(term.buffer_contains("dbview"));
        assert!(term.buffer_contains("/data/app.db (2.00 KB)"));
    }

    #[test]
    fn test_header_connection_failure_in_red() {
        let term = render(&DatabaseLine::ConnectionFailed);
        assert!(term.buffer_contains("数据库连接失败"));

        let x = (1 + APP_TITLE.len() + 2) as u16;
        assert_eq!(term.buffer()[(x, 1)].fg, palette::STATUS_RED);
    }

    #[test]
    fn test_header_pending() {
        let term = render(&DatabaseLine::Pending);
        assert!(term.buffer_contains("加载中..."));
    }
}
