//! Raw JSON view of an API error payload

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::Line,
    widgets::{Clear, Paragraph, StatefulWidget, Widget},
};

use dbview_api::ApiError;
use dbview_app::ModalScroll;
use dbview_core::labels;

use crate::theme::styles;

use super::modal_overlay::{centered_rect_percent, dim_background};
use super::wrap::wrap_lines;

pub struct ErrorModal<'a> {
    error: &'a ApiError,
}

impl<'a> ErrorModal<'a> {
    pub fn new(error: &'a ApiError) -> Self {
        Self { error }
    }
}

impl StatefulWidget for ErrorModal<'_> {
    type State = ModalScroll;

    fn render(self, area: Rect, buf: &mut Buffer, scroll: &mut ModalScroll) {
        dim_background(buf, area);

        let modal_area = centered_rect_percent(70, 70, area);
        Clear.render(modal_area, buf);

        let block = styles::modal_block(format!(" {} ", labels::ERROR_DETAIL_TITLE));
        let inner = block.inner(modal_area);
        block.render(modal_area, buf);

        let lines: Vec<Line> = self
            .error
            .raw_pretty()
            .lines()
            .map(|line| Line::styled(line.to_string(), styles::text_primary()))
            .collect();
        let rows = wrap_lines(&lines, inner.width);
        scroll.update_content_size(rows.len(), inner.height as usize);

        let offset = u16::try_from(scroll.offset()).unwrap_or(u16::MAX);
        Paragraph::new(rows).scroll((offset, 0)).render(inner, buf);
    }
}
