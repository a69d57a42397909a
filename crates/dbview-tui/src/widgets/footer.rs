//! Footer with key hints and the record count

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};
use unicode_width::UnicodeWidthStr;

use crate::theme::styles;

const MAIN_HINTS: &[(&str, &str)] = &[
    ("↑↓", "移动"),
    ("Tab", "切换"),
    ("Enter", "打开"),
    ("←→", "列"),
    ("r", "刷新"),
    ("e", "错误详情"),
    ("q", "退出"),
];

const MODAL_HINTS: &[(&str, &str)] = &[("↑↓", "滚动"), ("Esc", "关闭")];

pub struct Footer<'a> {
    modal_open: bool,
    record_count: &'a str,
}

impl<'a> Footer<'a> {
    pub fn new(modal_open: bool, record_count: &'a str) -> Self {
        Self {
            modal_open,
            record_count,
        }
    }
}

impl Widget for Footer<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let hints = if self.modal_open {
            MODAL_HINTS
        } else {
            MAIN_HINTS
        };

        let mut spans = Vec::with_capacity(hints.len() * 3);
        for (key, action) in hints {
            spans.push(Span::styled(*key, styles::keybinding()));
            spans.push(Span::styled(format!(" {}", action), styles::text_muted()));
            spans.push(Span::raw("  "));
        }
        let hints_line = Line::from(spans);

        let hints_width = hints_line.width() as u16;
        Paragraph::new(hints_line).render(area, buf);

        // Record count is dropped when it would overlap the hints
        let count_width = self.record_count.width() as u16;
        if hints_width + count_width < area.width {
            let count_area = Rect {
                x: area.x + hints_width,
                width: area.width - hints_width,
                ..area
            };
            Paragraph::new(Line::styled(self.record_count, styles::text_secondary()))
                .alignment(Alignment::Right)
                .render(count_area, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::TestTerminal;

    #[test]
    fn test_main_hints_and_count() {
        let mut term = TestTerminal::with_size(100, 1);
        let area = term.area();
        term.render_widget(Footer::new(false, "3 条记录"), area);

        assert!(term.buffer_contains("r 刷新"));
        assert!(term.buffer_contains("q 退出"));
        assert!(term.line(0).trim_end().ends_with("3 条记录"));
    }

    #[test]
    fn test_modal_hints() {
        let mut term = TestTerminal::with_size(100, 1);
        let area = term.area();
        term.render_widget(Footer::new(true, "3 条记录"), area);

        assert!(term.buffer_contains("Esc 关闭"));
        assert!(!term.buffer_contains("q 退出"));
    }

    #[test]
    fn test_count_dropped_when_narrow() {
        let mut term = TestTerminal::with_size(30, 1);
        let area = term.area();
        term.render_widget(Footer::new(false, "3 条记录"), area);
        assert!(!term.buffer_contains("条记录"));
    }
}
