use ratatui::style::{Color, Style, Stylize};
use ratatui::text::{Line as RatatuiLine, Span};

use crate::app::{App, KeyContext};

use super::theme;

pub fn render_footer(app: &App) -> RatatuiLine<'static> {
    match app.key_context() {
        KeyContext::Search => RatatuiLine::from(vec![
            Span::styled("/", Style::default().fg(Color::Magenta)),
            Span::raw(app.dashboard.search.content().to_string()),
        ]),
        KeyContext::Compose => build_footer_line(
            " MESSAGE ",
            Color::Green,
            &[("Enter", "post"), ("Esc", "cancel")],
        ),
        KeyContext::Auth => build_footer_line(
            " SIGN IN ",
            theme::PRIMARY,
            &[
                ("Tab", "next field"),
                ("Enter", "submit"),
                ("C-t", "switch"),
                ("C-c", "quit"),
            ],
        ),
        KeyContext::ProjectForm | KeyContext::TaskForm | KeyContext::EditTask => {
            let mode = if app.is_saving() { " SAVING " } else { " FORM " };
            build_footer_line(
                mode,
                Color::Green,
                &[
                    ("Tab", "next"),
                    ("←/→", "choose"),
                    ("Enter", "submit"),
                    ("Esc", "cancel"),
                ],
            )
        }
        KeyContext::Help => {
            build_footer_line(" HELP ", theme::ACCENT, &[("j/k", "scroll"), ("?", "close")])
        }
        KeyContext::Notifications => build_footer_line(
            " NOTIFICATIONS ",
            Color::Yellow,
            &[("j/k", "move"), ("Enter", "mark read"), ("n", "close")],
        ),
        KeyContext::Dashboard => build_footer_line(
            " DASHBOARD ",
            Color::Cyan,
            &[
                ("Enter", "open"),
                ("c", "new project"),
                ("/", "search"),
                ("n", "notifications"),
                ("?", "help"),
            ],
        ),
        KeyContext::Project => build_footer_line(
            " PROJECT ",
            Color::Blue,
            &[
                ("Enter", "open"),
                ("a", "add task"),
                ("f", "filter"),
                ("Tab", "tab"),
                ("m", "message"),
                ("Esc", "back"),
            ],
        ),
        KeyContext::Task => build_footer_line(
            " TASK ",
            Color::Magenta,
            &[("e", "edit"), ("Esc", "back"), ("?", "help")],
        ),
        KeyContext::Blank => build_footer_line(" ", Color::Gray, &[("Esc", "dashboard")]),
    }
}

fn build_footer_line(
    mode_name: &str,
    color: Color,
    actions: &[(&str, &str)],
) -> RatatuiLine<'static> {
    let mut spans = vec![Span::styled(
        mode_name.to_string(),
        Style::default().fg(theme::TEXT_ON_ACCENT).bg(color),
    )];
    for (key, text) in actions {
        spans.push(Span::styled(
            format!("  {key}"),
            Style::default().fg(Color::Gray),
        ));
        spans.push(Span::styled(format!(" {text} "), Style::default().dim()));
    }
    RatatuiLine::from(spans)
}
