//! Color constants for the terminal user interface.

use ratatui::style::Color;

/// Border of the focused input
pub const FOCUS_BORDER: Color = Color::Yellow;
/// Matched portion of an option label
pub const GOLD: Color = Color::Rgb(255, 215, 0);
/// Overflow row and placeholder text
pub const MUTED: Color = Color::DarkGray;
/// Highlighted menu row
pub const ACTIVE_BG: Color = Color::Gray;
pub const ACTIVE_FG: Color = Color::Black;
/// Status bar
pub const STATUS_BG: Color = Color::Blue;
