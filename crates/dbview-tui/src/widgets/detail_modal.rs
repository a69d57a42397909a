//! Row detail modal
//!
//! Shows every field of the selected row, grouped into sections for the
//! distinguished table. JSON values are pretty-printed over several lines.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Clear, Paragraph, StatefulWidget, Widget},
};

use dbview_app::ModalScroll;
use dbview_core::{labels, DetailValue, DetailView};

use crate::theme::styles;

use super::modal_overlay::{centered_rect_percent, dim_background};
use super::wrap::wrap_lines;

pub struct DetailModal<'a> {
    view: &'a DetailView,
}

impl<'a> DetailModal<'a> {
    pub fn new(view: &'a DetailView) -> Self {
        Self { view }
    }

    fn lines(&self) -> Vec<Line<'a>> {
        let view: &'a DetailView = self.view;
        let mut lines = Vec::new();
        for section in &view.sections {
            if let Some(title) = section.title {
                if !lines.is_empty() {
                    lines.push(Line::raw(""));
                }
                lines.push(Line::styled(format!("── {} ──", title), styles::accent_bold()));
            }

            for field in &section.fields {
                lines.extend(field_lines(&field.name, &field.value));
            }
        }
        lines
    }
}

/// Name and value of one field; multi-line values start on their own line
fn field_lines<'a>(name: &'a str, value: &'a DetailValue) -> Vec<Line<'a>> {
    let name_span = Span::styled(format!("{}: ", name), styles::text_secondary());
    let value_style = if value.is_marker() {
        styles::marker()
    } else {
        styles::text_primary()
    };

    let text = value.text();
    if !text.contains('\n') {
        return vec![Line::from(vec![name_span, Span::styled(text, value_style)])];
    }

    let mut lines = vec![Line::from(name_span)];
    lines.extend(
        text.lines()
            .map(|line| Line::styled(format!("  {}", line), value_style)),
    );
    lines
}

impl StatefulWidget for DetailModal<'_> {
    type State = ModalScroll;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut ModalScroll) {
        dim_background(buf, area);

        let modal_area = centered_rect_percent(80, 80, area);
        Clear.render(modal_area, buf);

        let block = styles::modal_block(format!(
            " {} - {} ",
            labels::DETAIL_TITLE,
            self.view.table_name
        ));
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let rows = wrap_lines(&self.lines(), inner.width);
        scroll.update_content_size(rows.len(), inner.height as usize);

        let offset = u16::try_from(scroll.offset()).unwrap_or(u16::MAX);
        Paragraph::new(rows).scroll((offset, 0)).render(inner, buf);
    }
}
