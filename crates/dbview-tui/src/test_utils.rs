//! Test utilities for TUI rendering verification
//!
//! Renders widgets into ratatui's TestBackend and reads the buffer back as
//! text. Wide (CJK) glyphs occupy two cells; the trailing cell is skipped so
//! assertions can use the plain string, e.g. `"表名: foo"`.

use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::widgets::Widget;
use ratatui::Frame;
use ratatui::Terminal;
use unicode_width::UnicodeWidthStr;

/// Standard test terminal size
pub const TEST_WIDTH: u16 = 100;
pub const TEST_HEIGHT: u16 = 30;

/// Wrapper around ratatui's TestBackend terminal
pub struct TestTerminal {
    pub terminal: Terminal<TestBackend>,
}

impl TestTerminal {
    pub fn new() -> Self {
        Self::with_size(TEST_WIDTH, TEST_HEIGHT)
    }

    pub fn with_size(width: u16, height: u16) -> Self {
        let backend = TestBackend::new(width, height);
        let terminal = Terminal::new(backend).expect("Failed to create test terminal");
        Self { terminal }
    }

    pub fn area(&self) -> Rect {
        let size = self.terminal.size().expect("Failed to get terminal size");
        Rect::new(0, 0, size.width, size.height)
    }

    pub fn render_widget<W: Widget>(&mut self, widget: W, area: Rect) {
        self.terminal
            .draw(|frame| frame.render_widget(widget, area))
            .expect("Failed to render widget");
    }

    pub fn render_stateful_widget<W, S>(&mut self, widget: W, area: Rect, state: &mut S)
    where
        W: ratatui::widgets::StatefulWidget<State = S>,
    {
        self.terminal
            .draw(|frame| frame.render_stateful_widget(widget, area, state))
            .expect("Failed to render stateful widget");
    }

    /// Draw a full frame, e.g. `render::view`
    pub fn draw_with<F>(&mut self, f: F)
    where
        F: FnOnce(&mut Frame),
    {
        self.terminal.draw(f).expect("Failed to draw frame");
    }

    pub fn buffer(&self) -> &Buffer {
        self.terminal.backend().buffer()
    }

    /// Check if the buffer contains a string on any single line
    pub fn buffer_contains(&self, text: &str) -> bool {
        buffer_lines(self.buffer())
            .iter()
            .any(|line| line.contains(text))
    }

    /// Content of one line
    pub fn line(&self, y: u16) -> String {
        line_text(self.buffer(), y)
    }

    /// All content as a string (for debugging failed assertions)
    pub fn content(&self) -> String {
        buffer_lines(self.buffer()).join("\n")
    }
}

impl Default for TestTerminal {
    fn default() -> Self {
        Self::new()
    }
}

/// Every line of a buffer as text
pub fn buffer_lines(buffer: &Buffer) -> Vec<String> {
    (0..buffer.area.height)
        .map(|y| line_text(buffer, buffer.area.y + y))
        .collect()
}

/// Text of one buffer line, skipping the trailing cells of wide glyphs
pub fn line_text(buffer: &Buffer, y: u16) -> String {
    let area = buffer.area;
    let mut result = String::new();
    if y < area.y || y >= area.y + area.height {
        return result;
    }

    let mut x = area.x;
    while x < area.x + area.width {
        let symbol = buffer[(x, y)].symbol();
        result.push_str(symbol);
        x += symbol.width().max(1) as u16;
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::style::Style;

    #[test]
    fn test_line_text_skips_wide_glyph_padding() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 12, 1));
        buf.set_string(0, 0, "表名: foo", Style::default());
        assert!(line_text(&buf, 0).starts_with("表名: foo"));
    }

    #[test]
    fn test_buffer_contains() {
        let mut term = TestTerminal::with_size(20, 2);
        let area = term.area();
        term.render_widget(ratatui::widgets::Paragraph::new("hello\n数据表"), area);
        assert!(term.buffer_contains("hello"));
        assert!(term.buffer_contains("数据表"));
        assert!(!term.buffer_contains("missing"));
    }
}
