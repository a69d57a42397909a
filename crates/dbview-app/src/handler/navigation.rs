//! Cursor, paging and column scroll handlers

use crate::state::{AppState, Focus, PAGE_SIZE};

use super::UpdateResult;

/// How far a navigation message moves the cursor
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Up(usize),
    Down(usize),
    First,
    Last,
}

impl Step {
    pub fn page_up() -> Self {
        Step::Up(PAGE_SIZE)
    }

    pub fn page_down() -> Self {
        Step::Down(PAGE_SIZE)
    }

    /// Apply to a cursor over `len` entries
    fn apply(self, cursor: usize, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        match self {
            Step::Up(n) => cursor.saturating_sub(n),
            Step::Down(n) => cursor.saturating_add(n).min(len - 1),
            Step::First => 0,
            Step::Last => len - 1,
        }
    }
}

/// Move the cursor of whatever has focus: modal scroll, table list, or rows
pub fn handle_step(state: &mut AppState, step: Step) -> UpdateResult {
    if let Some(modal) = state.modal.as_mut() {
        let scroll = modal.scroll_mut();
        match step {
            Step::Up(n) => scroll.scroll_up(n),
            Step::Down(n) => scroll.scroll_down(n),
            Step::First => scroll.scroll_to_top(),
            Step::Last => scroll.scroll_to_bottom(),
        }
        return UpdateResult::none();
    }

    match state.focus {
        Focus::Tables => {
            let len = state.table_names().len();
            state.table_cursor = step.apply(state.table_cursor, len);
        }
        Focus::Rows => {
            let len = state.data.row_count();
            state.row_cursor = step.apply(state.row_cursor, len);
        }
    }
    UpdateResult::none()
}

pub fn handle_scroll_left(state: &mut AppState) -> UpdateResult {
    state.column_offset = state.column_offset.saturating_sub(1);
    UpdateResult::none()
}

pub fn handle_scroll_right(state: &mut AppState) -> UpdateResult {
    let columns = state.data.column_count();
    if state.column_offset + 1 < columns {
        state.column_offset += 1;
    }
    UpdateResult::none()
}

/// Tab: switch between table list and rows
pub fn handle_toggle_focus(state: &mut AppState) -> UpdateResult {
    state.focus = match state.focus {
        Focus::Tables => Focus::Rows,
        Focus::Rows => Focus::Tables,
    };
    UpdateResult::none()
}

/// Keep cursors inside the current data after it was replaced
pub fn clamp_cursors(state: &mut AppState) {
    let rows = state.data.row_count();
    state.row_cursor = if rows == 0 {
        0
    } else {
        state.row_cursor.min(rows - 1)
    };

    let columns = state.data.column_count();
    state.column_offset = if columns == 0 {
        0
    } else {
        state.column_offset.min(columns - 1)
    };

    let tables = state.table_names().len();
    state.table_cursor = if tables == 0 {
        0
    } else {
        state.table_cursor.min(tables - 1)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_step_apply_clamps() {
        assert_eq!(Step::Up(1).apply(0, 5), 0);
        assert_eq!(Step::Down(1).apply(4, 5), 4);
        assert_eq!(Step::Down(10).apply(1, 5), 4);
        assert_eq!(Step::Up(10).apply(7, 20), 0);
        assert_eq!(Step::Last.apply(0, 5), 4);
        assert_eq!(Step::First.apply(3, 5), 0);
        assert_eq!(Step::Down(1).apply(0, 0), 0);
    }
}
