use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as RatatuiLine, Span};

use crate::app::{App, SIDEBAR_ITEMS};
use crate::model::initials;

use super::shared::truncate;
use super::theme;

pub fn build_sidebar_lines(app: &App, width: usize) -> Vec<RatatuiLine<'static>> {
    let mut lines = vec![
        RatatuiLine::from(Span::styled(
            "Synergy",
            Style::default().fg(theme::PRIMARY).add_modifier(Modifier::BOLD),
        )),
        RatatuiLine::from(""),
    ];

    for (i, (label, _)) in SIDEBAR_ITEMS.iter().enumerate() {
        let active = i == app.sidebar_active;
        let style = if active {
            Style::default().fg(theme::TEXT_ON_ACCENT).bg(theme::PRIMARY)
        } else {
            Style::default().fg(theme::TEXT_SECONDARY)
        };
        lines.push(RatatuiLine::from(Span::styled(
            format!(" {} {label:<w$}", i + 1, w = width.saturating_sub(3)),
            style,
        )));
    }

    lines.push(RatatuiLine::from(""));
    let unread = app.store.unread_notification_count();
    if unread > 0 {
        lines.push(RatatuiLine::from(Span::styled(
            format!(" {} {unread} unread", theme::GLYPH_UNREAD),
            Style::default().fg(theme::STATUS_INFO),
        )));
        lines.push(RatatuiLine::from(""));
    }

    if let Some(session) = app.session() {
        lines.push(RatatuiLine::from(vec![
            Span::styled(
                format!(" {} ", initials(&session.name)),
                Style::default().fg(theme::TEXT_ON_ACCENT).bg(theme::ACCENT),
            ),
            Span::raw(" "),
            Span::raw(truncate(&session.name, width.saturating_sub(6))),
        ]));
        lines.push(RatatuiLine::from(Span::styled(
            format!(" {}", truncate(&session.email, width.saturating_sub(2))),
            Style::default().fg(theme::TEXT_MUTED),
        )));
    }
    lines
}
