use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as RatatuiLine, Span};

use crate::app::{App, ProjectTab};
use crate::model::{Discussion, Task, initials};

use super::scroll::ScrollView;
use super::shared::{format_date, format_timestamp, progress_bar, truncate};
use super::theme;

pub fn build_project_lines(app: &App, width: usize) -> Vec<RatatuiLine<'static>> {
    project_view(app, width).lines
}

/// Project lines focused on the task under the cursor, or on the message being composed.
pub(super) fn project_view(app: &App, width: usize) -> ScrollView {
    let Some(project) = app.nav.selected_project() else {
        return ScrollView::unfocused(Vec::new());
    };
    let mut lines = vec![
        RatatuiLine::from(vec![
            Span::styled(
                format!("{} ", theme::GLYPH_DOT),
                Style::default().fg(theme::project_color(project.color)),
            ),
            Span::styled(
                project.name.clone(),
                Style::default().fg(theme::HEADING).add_modifier(Modifier::BOLD),
            ),
        ]),
        RatatuiLine::from(Span::styled(
            project.description.clone(),
            Style::default().fg(theme::TEXT_SECONDARY),
        )),
        RatatuiLine::from(""),
    ];

    let due = project
        .due_date
        .map(|d| format!("   Due {}", format_date(d)))
        .unwrap_or_default();
    let percent = app.store.project_progress(project).percent;
    lines.push(RatatuiLine::from(vec![
        Span::styled("Progress ", Style::default().fg(theme::TEXT_SECONDARY)),
        Span::styled(
            progress_bar(percent, theme::PROGRESS_BAR_WIDTH),
            Style::default().fg(theme::project_color(project.color)),
        ),
        Span::raw(format!(" {percent}%")),
        Span::styled(
            format!("   Team {} members{due}", project.team_size),
            Style::default().fg(theme::TEXT_SECONDARY),
        ),
    ]));

    let counts = app.store.task_counts(&project.id);
    lines.push(RatatuiLine::from(Span::styled(
        format!(
            "To Do {}   In Progress {}   Done {}",
            counts.todo, counts.progress, counts.done
        ),
        Style::default().fg(theme::TEXT_SECONDARY),
    )));
    lines.push(RatatuiLine::from(""));

    lines.push(tab_line(app.project_view.tab));
    lines.push(RatatuiLine::from(Span::styled(
        "─".repeat(width),
        Style::default().fg(theme::TEXT_MUTED),
    )));

    let header_len = lines.len();
    let focus = match app.project_view.tab {
        ProjectTab::Tasks => {
            let (body, cursor_row) = task_list_lines(app, width);
            lines.extend(body);
            cursor_row.map(|row| match row {
                // Filter line sits above the first task.
                1 => 0..header_len + 2,
                row => header_len + row..header_len + row + 1,
            })
        }
        ProjectTab::Discussions => {
            lines.extend(discussion_lines(app, &project.id));
            app.project_view
                .compose
                .as_ref()
                .map(|_| lines.len() - 1..lines.len())
        }
    };
    ScrollView { lines, focus }
}

fn tab_line(active: ProjectTab) -> RatatuiLine<'static> {
    let tab = |label: &'static str, is_active: bool| {
        if is_active {
            Span::styled(
                format!(" {label} "),
                Style::default()
                    .fg(theme::TEXT_ON_ACCENT)
                    .bg(theme::ACCENT),
            )
        } else {
            Span::styled(format!(" {label} "), Style::default().fg(theme::TEXT_SECONDARY))
        }
    };
    RatatuiLine::from(vec![
        tab("Tasks", active == ProjectTab::Tasks),
        Span::raw(" "),
        tab("Discussions", active == ProjectTab::Discussions),
    ])
}

/// Filter line and task rows, plus the index of the row under the cursor.
fn task_list_lines(app: &App, width: usize) -> (Vec<RatatuiLine<'static>>, Option<usize>) {
    let mut lines = vec![RatatuiLine::from(vec![
        Span::styled("Filter: ", Style::default().fg(theme::TEXT_SECONDARY)),
        Span::styled(
            app.project_view.filter.label().to_string(),
            Style::default().fg(theme::ACCENT),
        ),
    ])];

    let tasks = app.visible_tasks();
    if tasks.is_empty() {
        lines.push(RatatuiLine::from(Span::styled(
            "No tasks found",
            Style::default().fg(theme::TEXT_MUTED),
        )));
        return (lines, None);
    }
    let mut cursor_row = None;
    for (i, task) in tasks.iter().enumerate() {
        let selected = i == app.project_view.selected;
        if selected {
            cursor_row = Some(lines.len());
        }
        lines.push(task_row(task, selected, width));
    }
    (lines, cursor_row)
}

fn task_row(task: &Task, selected: bool, width: usize) -> RatatuiLine<'static> {
    let cursor = if selected { theme::GLYPH_CURSOR } else { " " };
    let priority = task.priority.label();
    let who = initials(&task.assignee.name);
    let due = format_date(task.due_date);
    let suffix_width = priority.len() + who.len() + due.len() + 12;
    let title_style = if selected {
        Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    RatatuiLine::from(vec![
        Span::styled(format!("{cursor} "), Style::default().fg(theme::ACCENT)),
        Span::styled(
            format!("{} ", theme::task_status_glyph(task.status)),
            Style::default().fg(theme::task_status_color(task.status)),
        ),
        Span::styled(
            truncate(&task.title, width.saturating_sub(suffix_width)),
            title_style,
        ),
        Span::styled(
            format!("  {priority}"),
            Style::default().fg(theme::priority_color(task.priority)),
        ),
        Span::styled(format!("  {who}"), Style::default().fg(theme::TEXT_SECONDARY)),
        Span::styled(format!("  {due}"), Style::default().fg(theme::TEXT_MUTED)),
    ])
}

fn discussion_lines(app: &App, project_id: &str) -> Vec<RatatuiLine<'static>> {
    let mut lines = Vec::new();
    let threads = app.store.discussions_for(project_id);
    if threads.is_empty() {
        lines.push(RatatuiLine::from(Span::styled(
            "No discussions yet. Press m to start one.",
            Style::default().fg(theme::TEXT_MUTED),
        )));
    }
    for thread in threads {
        push_discussion(&mut lines, thread, 0);
        lines.push(RatatuiLine::from(""));
    }

    if let Some(buffer) = &app.project_view.compose {
        lines.push(RatatuiLine::from(vec![
            Span::styled("> ", Style::default().fg(theme::ACCENT)),
            Span::raw(buffer.content().to_string()),
        ]));
    }
    lines
}

fn push_discussion(lines: &mut Vec<RatatuiLine<'static>>, discussion: &Discussion, depth: usize) {
    let indent = "    ".repeat(depth);
    let lead = if depth > 0 {
        format!("{indent}{} ", theme::GLYPH_REPLY)
    } else {
        indent.clone()
    };
    lines.push(RatatuiLine::from(vec![
        Span::raw(lead),
        Span::styled(
            discussion.author.clone(),
            Style::default().add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            format!("  {}", format_timestamp(discussion.timestamp)),
            Style::default().fg(theme::TEXT_MUTED),
        ),
    ]));
    lines.push(RatatuiLine::from(format!(
        "{indent}  {}",
        discussion.message
    )));
    for reply in &discussion.replies {
        push_discussion(lines, reply, depth + 1);
    }
}
