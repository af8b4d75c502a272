use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as RatatuiLine, Span};

use crate::app::App;

use super::shared::{format_date, format_timestamp};
use super::theme;

pub fn build_task_lines(app: &App) -> Vec<RatatuiLine<'static>> {
    let (Some(project), Some(task)) = (app.nav.selected_project(), app.nav.selected_task())
    else {
        return Vec::new();
    };

    let label = |text: &'static str| Span::styled(text, Style::default().fg(theme::TEXT_SECONDARY));
    let description = if task.description.is_empty() {
        "No description".to_string()
    } else {
        task.description.clone()
    };

    vec![
        RatatuiLine::from(Span::styled(
            project.name.clone(),
            Style::default().fg(theme::TEXT_MUTED),
        )),
        RatatuiLine::from(Span::styled(
            task.title.clone(),
            Style::default().fg(theme::HEADING).add_modifier(Modifier::BOLD),
        )),
        RatatuiLine::from(vec![
            Span::styled(
                format!("{} {}", theme::task_status_glyph(task.status), task.status.label()),
                Style::default().fg(theme::task_status_color(task.status)),
            ),
            Span::raw("   "),
            Span::styled(
                format!("{} priority", task.priority.label()),
                Style::default().fg(theme::priority_color(task.priority)),
            ),
        ]),
        RatatuiLine::from(""),
        RatatuiLine::from(label("Description")),
        RatatuiLine::from(description),
        RatatuiLine::from(""),
        RatatuiLine::from(vec![label("Assignee   "), Span::raw(task.assignee.name.clone())]),
        RatatuiLine::from(vec![label("Due date   "), Span::raw(format_date(task.due_date))]),
        RatatuiLine::from(vec![
            label("Created    "),
            Span::raw(format_timestamp(task.created_at)),
        ]),
    ]
}
