//! Character wrapping of styled lines to a fixed width

use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthChar;

/// Split each line into rows no wider than `width` columns.
///
/// Breaks fall between characters, so the returned row count is exactly the
/// rendered height and every row is reachable by a scroll offset.
pub fn wrap_lines(lines: &[Line<'_>], width: u16) -> Vec<Line<'static>> {
    let width = usize::from(width.max(1));
    let mut rows = Vec::new();

    for line in lines {
        let mut row: Vec<Span<'static>> = Vec::new();
        let mut row_width = 0;

        for span in &line.spans {
            let mut chunk = String::new();
            for ch in span.content.chars() {
                let ch_width = ch.width().unwrap_or(0);
                if row_width > 0 && row_width + ch_width > width {
                    if !chunk.is_empty() {
                        row.push(Span::styled(std::mem::take(&mut chunk), span.style));
                    }
                    rows.push(Line::from(std::mem::take(&mut row)).style(line.style));
                    row_width = 0;
                }
                chunk.push(ch);
                row_width += ch_width;
            }
            if !chunk.is_empty() {
                row.push(Span::styled(chunk, span.style));
            }
        }
        rows.push(Line::from(row).style(line.style));
    }
    rows
}
