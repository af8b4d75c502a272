use ratatui::style::{Modifier, Style, Stylize};
use ratatui::text::{Line as RatatuiLine, Span};

use unicode_width::UnicodeWidthStr;

use crate::app::App;
use crate::model::Project;
use crate::store::ProjectProgress;

use super::scroll::ScrollView;
use super::shared::{format_date, format_timestamp, progress_bar, truncate};
use super::theme;

pub fn build_dashboard_lines(app: &App, width: usize) -> Vec<RatatuiLine<'static>> {
    dashboard_view(app, width).lines
}

/// Dashboard lines with the rows of the project under the cursor as focus.
pub(super) fn dashboard_view(app: &App, width: usize) -> ScrollView {
    let mut lines = Vec::new();

    let first_name = app
        .session()
        .map(|s| s.first_name().to_string())
        .unwrap_or_default();
    lines.push(RatatuiLine::from(Span::styled(
        format!("Welcome back, {first_name}!"),
        Style::default().fg(theme::HEADING).add_modifier(Modifier::BOLD),
    )));
    lines.push(RatatuiLine::from(Span::styled(
        "Here's what's happening with your projects today.",
        Style::default().fg(theme::TEXT_MUTED),
    )));
    lines.push(RatatuiLine::from(""));

    let metrics = app.store.dashboard_metrics();
    let metric = |label: &str, value: String| -> [Span<'static>; 2] {
        [
            Span::styled(format!("{label} "), Style::default().fg(theme::TEXT_SECONDARY)),
            Span::styled(format!("{value}   "), Style::default().bold()),
        ]
    };
    let mut spans = Vec::new();
    spans.extend(metric("Total Projects", metrics.total.to_string()));
    spans.extend(metric("Active", metrics.active.to_string()));
    spans.extend(metric("Completed", metrics.completed.to_string()));
    spans.extend(metric("Overdue", metrics.overdue.to_string()));
    spans.extend(metric("Team Members", metrics.team_members.to_string()));
    lines.push(RatatuiLine::from(spans));
    lines.push(RatatuiLine::from(""));

    lines.push(search_line(app));
    lines.push(RatatuiLine::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(theme::TEXT_MUTED),
    )));

    let projects = app.visible_projects();
    if projects.is_empty() {
        lines.push(RatatuiLine::from(Span::styled(
            "No projects found",
            Style::default().fg(theme::TEXT_MUTED),
        )));
        let hint = if app.dashboard.search.is_empty() {
            "Press c to create your first project"
        } else {
            "Try adjusting your search"
        };
        lines.push(RatatuiLine::from(Span::styled(
            hint,
            Style::default().fg(theme::TEXT_MUTED),
        )));
        return ScrollView::unfocused(lines);
    }

    let mut focus = None;
    for (i, project) in projects.iter().enumerate() {
        let start = lines.len();
        let progress = app.store.project_progress(project);
        let selected = i == app.dashboard.selected && !app.dashboard.notifications_open;
        lines.extend(project_rows(project, progress, selected, width));
        if i == app.dashboard.selected {
            // The first project scrolls the greeting back into view too.
            focus = Some(if i == 0 { 0 } else { start }..lines.len());
        }
    }
    ScrollView { lines, focus }
}

fn search_line(app: &App) -> RatatuiLine<'static> {
    let query = app.dashboard.search.content();
    let style = if app.dashboard.searching {
        Style::default().fg(theme::ACCENT)
    } else {
        Style::default().fg(theme::TEXT_MUTED)
    };
    let text = if query.is_empty() && !app.dashboard.searching {
        "Search projects...".to_string()
    } else {
        query.to_string()
    };
    RatatuiLine::from(vec![Span::styled("/ ", style), Span::styled(text, style)])
}

fn project_rows(
    project: &Project,
    progress: ProjectProgress,
    selected: bool,
    width: usize,
) -> [RatatuiLine<'static>; 2] {
    let cursor = if selected { theme::GLYPH_CURSOR } else { " " };
    let status = project.status.label();
    let name_width = width.saturating_sub(status.len() + 8);
    let name_style = if selected {
        Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };

    let header = RatatuiLine::from(vec![
        Span::styled(format!("{cursor} "), Style::default().fg(theme::ACCENT)),
        Span::styled(
            format!("{} ", theme::GLYPH_DOT),
            Style::default().fg(theme::project_color(project.color)),
        ),
        Span::styled(truncate(&project.name, name_width), name_style),
        Span::raw("  "),
        Span::styled(
            format!("[{status}]"),
            Style::default().fg(theme::project_status_color(project.status)),
        ),
    ]);

    [header, detail_row(project, progress, width)]
}

/// Progress bar followed by as many of tasks, members and due date as fit in `width`.
fn detail_row(project: &Project, progress: ProjectProgress, width: usize) -> RatatuiLine<'static> {
    const INDENT: &str = "    ";
    let bar_width = (width / 4).min(theme::PROGRESS_BAR_WIDTH);
    let percent = format!(" {:>3}%", progress.percent);

    let mut fields = vec![
        format!("  {}/{} tasks", progress.completed, progress.total),
        format!("  {} members", project.team_size),
    ];
    if let Some(due) = project.due_date {
        fields.push(format!("  Due {}", format_date(due)));
    }

    let mut room = width.saturating_sub(INDENT.len() + bar_width + percent.width());
    let mut shown = String::new();
    for field in fields {
        if field.width() > room {
            break;
        }
        room -= field.width();
        shown.push_str(&field);
    }

    RatatuiLine::from(vec![
        Span::raw(INDENT),
        Span::styled(
            progress_bar(progress.percent, bar_width),
            Style::default().fg(theme::project_color(project.color)),
        ),
        Span::raw(percent),
        Span::styled(shown, Style::default().fg(theme::TEXT_SECONDARY)),
    ])
}

pub fn build_notification_lines(app: &App) -> Vec<RatatuiLine<'static>> {
    let mut lines = Vec::new();
    let notifications = app.store.notifications();
    if notifications.is_empty() {
        lines.push(RatatuiLine::from(Span::styled(
            "No notifications",
            Style::default().fg(theme::TEXT_MUTED),
        )));
        return lines;
    }

    for (i, notification) in notifications.iter().enumerate() {
        let cursor = if i == app.dashboard.notification_selected {
            theme::GLYPH_CURSOR
        } else {
            " "
        };
        let marker = if notification.is_read {
            " "
        } else {
            theme::GLYPH_UNREAD
        };
        let title_style = if notification.is_read {
            Style::default().fg(theme::TEXT_SECONDARY)
        } else {
            Style::default().add_modifier(Modifier::BOLD)
        };
        lines.push(RatatuiLine::from(vec![
            Span::styled(format!("{cursor} "), Style::default().fg(theme::ACCENT)),
            Span::styled(format!("{marker} "), Style::default().fg(theme::PRIMARY)),
            Span::styled(notification.title.clone(), title_style),
        ]));
        lines.push(RatatuiLine::from(Span::styled(
            format!("    {}", notification.description),
            Style::default().fg(theme::TEXT_SECONDARY),
        )));
        lines.push(RatatuiLine::from(Span::styled(
            format!("    {}", format_timestamp(notification.timestamp)),
            Style::default().fg(theme::TEXT_MUTED),
        )));
    }
    lines
}
