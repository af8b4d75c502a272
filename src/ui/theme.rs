use ratatui::style::Color;

use crate::model::{Priority, ProjectColor, ProjectStatus, TaskStatus};

// Brand
pub const PRIMARY: Color = Color::Blue;
pub const ACCENT: Color = Color::Cyan;

// Border colors
pub const BORDER_DEFAULT: Color = Color::White;
pub const BORDER_MUTED: Color = Color::Gray;
pub const BORDER_FORM: Color = Color::Blue;
pub const BORDER_HELP: Color = Color::Cyan;

// Text colors
pub const TEXT_MUTED: Color = Color::DarkGray;
pub const TEXT_SECONDARY: Color = Color::Gray;
pub const TEXT_ON_ACCENT: Color = Color::Black;
pub const HEADING: Color = Color::White;

// Status banner
pub const STATUS_INFO: Color = Color::Yellow;
pub const STATUS_SUCCESS: Color = Color::Green;
pub const STATUS_ERROR: Color = Color::Red;

// Forms
pub const FIELD_FOCUSED: Color = Color::Cyan;
pub const FIELD_REQUIRED: Color = Color::Red;

// Glyphs
pub const GLYPH_CURSOR: &str = "→";
pub const GLYPH_DOT: &str = "●";
pub const GLYPH_UNREAD: &str = "●";
pub const GLYPH_FIELD: &str = "›";
pub const GLYPH_BAR_FULL: &str = "█";
pub const GLYPH_BAR_EMPTY: &str = "░";
pub const GLYPH_REPLY: &str = "↳";
pub const GLYPH_SCROLL_UP: &str = "▲";
pub const GLYPH_SCROLL_DOWN: &str = "▼";

// Layout
pub const SIDEBAR_WIDTH: u16 = 24;
pub const PROGRESS_BAR_WIDTH: usize = 20;
pub const FORM_VALUE_INDENT: usize = 4;

#[must_use]
pub fn project_color(color: ProjectColor) -> Color {
    match color {
        ProjectColor::Blue => Color::Blue,
        ProjectColor::Purple => Color::Magenta,
        ProjectColor::Green => Color::Green,
        ProjectColor::Red => Color::Red,
        ProjectColor::Yellow => Color::Yellow,
        ProjectColor::Indigo => Color::LightBlue,
    }
}

#[must_use]
pub fn project_status_color(status: ProjectStatus) -> Color {
    match status {
        ProjectStatus::Active => Color::Blue,
        ProjectStatus::Completed => Color::Green,
        ProjectStatus::Overdue => Color::Red,
    }
}

#[must_use]
pub fn task_status_color(status: TaskStatus) -> Color {
    match status {
        TaskStatus::Todo => Color::Gray,
        TaskStatus::Progress => Color::Blue,
        TaskStatus::Done => Color::Green,
    }
}

#[must_use]
pub fn task_status_glyph(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "○",
        TaskStatus::Progress => "◐",
        TaskStatus::Done => "✓",
    }
}

#[must_use]
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::Green,
        Priority::Medium => Color::Yellow,
        Priority::High => Color::Red,
    }
}
