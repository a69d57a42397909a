//! Color palette.

use ratatui::style::Color;

// --- Background layers ---
pub const DEEPEST_BG: Color = Color::Black;
pub const CARD_BG: Color = Color::Black;
pub const POPUP_BG: Color = Color::Rgb(28, 33, 43);
pub const ROW_HIGHLIGHT_BG: Color = Color::DarkGray;

// --- Borders ---
pub const BORDER_DIM: Color = Color::DarkGray;
pub const BORDER_ACTIVE: Color = Color::Cyan;

// --- Accent ---
pub const ACCENT: Color = Color::Cyan;
pub const CONTRAST_FG: Color = Color::Black;

// --- Text ---
pub const TEXT_PRIMARY: Color = Color::White;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_MUTED: Color = Color::DarkGray;

// --- Badge tones ---
pub const TONE_SUCCESS: Color = Color::Green;
pub const TONE_PRIMARY: Color = Color::Blue;
pub const TONE_WARNING: Color = Color::Yellow;
pub const TONE_DANGER: Color = Color::Red;
pub const TONE_INFO: Color = Color::Cyan;
pub const TONE_SECONDARY: Color = Color::Gray;
pub const TONE_DARK: Color = Color::DarkGray;

// --- Status ---
pub const STATUS_RED: Color = Color::Red;
pub const STATUS_YELLOW: Color = Color::Yellow;
