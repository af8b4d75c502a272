use std::sync::LazyLock;

use ratatui::{
    style::{Color, Style},
    text::{Line as RatatuiLine, Span},
};

const KEY_WIDTH: usize = 14;
const GUTTER_WIDTH: usize = 2;

const SECTIONS: &[(&str, &[(&str, &str)])] = &[
    (
        "[Global]",
        &[
            ("q", "Quit"),
            ("?", "Toggle this help"),
            ("L", "Sign out"),
            ("1-4", "Dashboard, Projects, Profile, Settings"),
        ],
    ),
    (
        "[Dashboard]",
        &[
            ("j/k", "Move between projects"),
            ("g/G", "First / last project"),
            ("Enter", "Open project"),
            ("c", "Create project"),
            ("/", "Search projects"),
            ("Esc", "Clear search"),
            ("n", "Notifications"),
        ],
    ),
    (
        "[Notifications]",
        &[
            ("j/k", "Move"),
            ("Enter", "Mark as read"),
            ("n/Esc", "Close panel"),
        ],
    ),
    (
        "[Project]",
        &[
            ("j/k", "Move between tasks"),
            ("Enter", "Open task"),
            ("a", "Add task"),
            ("f", "Cycle status filter"),
            ("Tab", "Tasks / Discussions"),
            ("m", "Post a message"),
            ("Esc/h", "Back to dashboard"),
        ],
    ),
    (
        "[Task]",
        &[("e", "Edit task"), ("Esc/h", "Back to project")],
    ),
    (
        "[Forms]",
        &[
            ("Tab/Down", "Next field"),
            ("S-Tab/Up", "Previous field"),
            ("Left/Right", "Change choice"),
            ("Enter", "Submit"),
            ("Esc", "Cancel"),
            ("C-t", "Sign in / sign up"),
        ],
    ),
    (
        "[Text Editing]",
        &[
            ("C-a / C-e", "Start / end of field"),
            ("C-w", "Delete word"),
            ("C-u", "Clear field"),
        ],
    ),
];

static HELP_LINES: LazyLock<Vec<RatatuiLine<'static>>> = LazyLock::new(build_help_lines);

fn build_help_lines() -> Vec<RatatuiLine<'static>> {
    let header_style = Style::default().fg(Color::Cyan);
    let key_style = Style::default().fg(Color::Yellow);
    let desc_style = Style::default().fg(Color::White);
    let header_indent = " ".repeat(KEY_WIDTH + GUTTER_WIDTH);

    let mut lines = Vec::new();
    for (title, keys) in SECTIONS {
        lines.push(RatatuiLine::from(Span::styled(
            format!("{header_indent}{title}"),
            header_style,
        )));
        for (key, desc) in *keys {
            lines.push(RatatuiLine::from(vec![
                Span::styled(format!("{key:>KEY_WIDTH$}"), key_style),
                Span::raw(" ".repeat(GUTTER_WIDTH)),
                Span::styled(desc.to_string(), desc_style),
            ]));
        }
        lines.push(RatatuiLine::from(""));
    }
    lines
}

#[must_use]
pub fn get_help_total_lines() -> usize {
    HELP_LINES.len()
}

#[must_use]
pub fn render_help_content(scroll: usize, visible_height: usize) -> Vec<RatatuiLine<'static>> {
    HELP_LINES
        .iter()
        .skip(scroll)
        .take(visible_height)
        .cloned()
        .collect()
}
