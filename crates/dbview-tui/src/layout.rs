//! Screen layout definitions for the TUI
//!
//! Header on top, a sidebar with the table list and table info on the left,
//! the data panel on the right and a one-line footer at the bottom.

use ratatui::layout::{Constraint, Layout, Rect};

/// Header height: top border + database line + bottom border
const HEADER_HEIGHT: u16 = 3;

/// Sidebar width in columns
const SIDEBAR_WIDTH: u16 = 32;

/// Screen areas for the main layout
#[derive(Debug, Clone, Copy)]
pub struct ScreenAreas {
    pub header: Rect,
    pub tables: Rect,
    pub table_info: Rect,
    pub data: Rect,
    pub footer: Rect,
}

/// Create the main screen layout
pub fn create(area: Rect) -> ScreenAreas {
    let [header, body, footer] = Layout::vertical([
        Constraint::Length(HEADER_HEIGHT),
        Constraint::Fill(1),
        Constraint::Length(1),
    ])
    .areas(area);

    // Narrow terminals give the sidebar at most a third of the width
    let sidebar_width = SIDEBAR_WIDTH.min(body.width / 3);
    let [sidebar, data] =
        Layout::horizontal([Constraint::Length(sidebar_width), Constraint::Fill(1)]).areas(body);

    let [tables, table_info] =
        Layout::vertical([Constraint::Percentage(45), Constraint::Fill(1)]).areas(sidebar);

    ScreenAreas {
        header,
        tables,
        table_info,
        data,
        footer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_layout_standard() {
        let areas = create(Rect::new(0, 0, 120, 40));

        assert_eq!(areas.header.height, 3);
        assert_eq!(areas.footer.height, 1);
        assert_eq!(areas.footer.y, 39);
        assert_eq!(areas.tables.width, 32);
        assert_eq!(areas.data.x, 32);
        assert_eq!(areas.data.width, 88);
    }

    #[test]
    fn test_layout_areas_contiguous() {
        let area = Rect::new(0, 0, 80, 24);
        let areas = create(area);

        assert_eq!(
            areas.header.height + areas.data.height + areas.footer.height,
            area.height
        );
        assert_eq!(
            areas.tables.height + areas.table_info.height,
            areas.data.height
        );
        assert_eq!(areas.tables.y + areas.tables.height, areas.table_info.y);
    }

    #[test]
    fn test_narrow_terminal_shrinks_sidebar() {
        let areas = create(Rect::new(0, 0, 60, 20));
        assert_eq!(areas.tables.width, 20);
        assert_eq!(areas.data.width, 40);
    }
}
