//! Semantic style builders.

use dbview_core::{CellMarkup, Tone};
use ratatui::style::{Modifier, Style};
use ratatui::widgets::{Block, BorderType, Borders};

use super::palette;

// --- Text styles ---
pub fn text_primary() -> Style {
    Style::default().fg(palette::TEXT_PRIMARY)
}

pub fn text_secondary() -> Style {
    Style::default().fg(palette::TEXT_SECONDARY)
}

pub fn text_muted() -> Style {
    Style::default().fg(palette::TEXT_MUTED)
}

/// Placeholder values such as NULL or "(空)"
pub fn marker() -> Style {
    Style::default()
        .fg(palette::TEXT_MUTED)
        .add_modifier(Modifier::ITALIC)
}

// --- Border styles ---
pub fn border_inactive() -> Style {
    Style::default().fg(palette::BORDER_DIM)
}

pub fn border_active() -> Style {
    Style::default().fg(palette::BORDER_ACTIVE)
}

// --- Accent styles ---
pub fn accent() -> Style {
    Style::default().fg(palette::ACCENT)
}

pub fn accent_bold() -> Style {
    accent().add_modifier(Modifier::BOLD)
}

// --- Status styles ---
pub fn status_red() -> Style {
    Style::default().fg(palette::STATUS_RED)
}

pub fn keybinding() -> Style {
    Style::default().fg(palette::STATUS_YELLOW)
}

// --- Selection styles ---

/// "Black on Cyan" - cursor row of the focused pane
pub fn focused_selected() -> Style {
    Style::default()
        .fg(palette::CONTRAST_FG)
        .bg(palette::ACCENT)
        .add_modifier(Modifier::BOLD)
}

/// Cursor row of a pane without focus
pub fn unfocused_selected() -> Style {
    Style::default().bg(palette::ROW_HIGHLIGHT_BG)
}

// --- Badges ---
pub fn tone_color(tone: Tone) -> ratatui::style::Color {
    match tone {
        Tone::Success => palette::TONE_SUCCESS,
        Tone::Primary => palette::TONE_PRIMARY,
        Tone::Warning => palette::TONE_WARNING,
        Tone::Danger => palette::TONE_DANGER,
        Tone::Info => palette::TONE_INFO,
        Tone::Secondary => palette::TONE_SECONDARY,
        Tone::Dark => palette::TONE_DARK,
    }
}

/// Style of one data table cell
pub fn cell(markup: &CellMarkup) -> Style {
    if let Some(tone) = markup.tone() {
        return Style::default()
            .fg(tone_color(tone))
            .add_modifier(Modifier::BOLD);
    }
    match markup {
        _ if markup.is_marker() => marker(),
        CellMarkup::DateTime(_) => text_secondary(),
        CellMarkup::Code(_) => accent(),
        _ => text_primary(),
    }
}

// --- Block builders ---
pub fn glass_block(focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(if focused {
            border_active()
        } else {
            border_inactive()
        })
}

pub fn modal_block(title: String) -> Block<'static> {
    Block::default()
        .title(title)
        .title_style(accent_bold())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border_active())
        .style(Style::default().bg(palette::POPUP_BG))
}

#[cfg(test)]
mod tests {
    use super::*;
    use dbview_core::cell::StatusClass;

    #[test]
    fn test_border_styles_have_correct_colors() {
        assert_eq!(border_inactive().fg, Some(palette::BORDER_DIM));
        assert_eq!(border_active().fg, Some(palette::BORDER_ACTIVE));
    }

    #[test]
    fn test_focused_selected_contrast() {
        let style = focused_selected();
        assert_eq!(style.fg, Some(palette::CONTRAST_FG));
        assert_eq!(style.bg, Some(palette::ACCENT));
        assert!(style.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_cell_style_follows_tone() {
        let status = CellMarkup::Status {
            code: "503".into(),
            class: StatusClass::ServerError,
        };
        assert_eq!(cell(&status).fg, Some(palette::TONE_DANGER));
        assert_eq!(cell(&CellMarkup::Bool(true)).fg, Some(palette::TONE_SUCCESS));
        assert_eq!(cell(&CellMarkup::JsonBadge).fg, Some(palette::TONE_INFO));
    }

    #[test]
    fn test_cell_style_for_markers_and_text() {
        assert_eq!(cell(&CellMarkup::Null), marker());
        assert_eq!(cell(&CellMarkup::Empty), marker());
        assert_eq!(cell(&CellMarkup::Text("x".into())), text_primary());
        assert_eq!(
            cell(&CellMarkup::DateTime("2024/01/01".into())),
            text_secondary()
        );
    }
}
