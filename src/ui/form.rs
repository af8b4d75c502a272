use std::ops::Range;

use ratatui::style::{Modifier, Style};
use ratatui::text::{Line as RatatuiLine, Span};

use crate::app::App;
use crate::forms::{FieldKind, Form, FormKind};

use super::theme;

/// Lines per field: label, value, spacer. The last field's spacer is the submit line.
const FIELD_ROWS: usize = 3;

pub fn build_form_lines(form: &Form) -> Vec<RatatuiLine<'static>> {
    let mut lines = Vec::new();

    for (i, field) in form.fields.iter().enumerate() {
        let focused = i == form.focused;
        let mut label = vec![Span::styled(
            field.label.to_string(),
            if focused {
                Style::default().fg(theme::FIELD_FOCUSED).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(theme::TEXT_SECONDARY)
            },
        )];
        if field.required {
            label.push(Span::styled(" *", Style::default().fg(theme::FIELD_REQUIRED)));
        }
        lines.push(RatatuiLine::from(label));

        let marker = if focused { theme::GLYPH_FIELD } else { " " };
        let value = match &field.kind {
            FieldKind::Choice(_) => format!("‹ {} ›", field.display_value()),
            FieldKind::Date if field.buffer.is_empty() && !focused => "YYYY-MM-DD".to_string(),
            _ => field.display_value(),
        };
        let value_style = if focused {
            Style::default()
        } else {
            Style::default().fg(theme::TEXT_SECONDARY)
        };
        lines.push(RatatuiLine::from(vec![
            Span::styled(format!("  {marker} "), Style::default().fg(theme::FIELD_FOCUSED)),
            Span::styled(value, value_style),
        ]));
        if i + 1 < form.fields.len() {
            lines.push(RatatuiLine::from(""));
        }
    }

    let action = if form.saving {
        Span::styled(saving_label(form.kind), Style::default().fg(theme::STATUS_INFO))
    } else {
        Span::styled(
            format!("Enter {}", submit_label(form.kind)),
            Style::default().fg(theme::ACCENT),
        )
    };
    lines.push(RatatuiLine::from(vec![
        action,
        Span::styled("   Esc cancel", Style::default().fg(theme::TEXT_MUTED)),
    ]));
    lines
}

fn submit_label(kind: FormKind) -> &'static str {
    match kind {
        FormKind::SignIn => "Sign In",
        FormKind::SignUp => "Create Account",
        FormKind::CreateProject => "Create Project",
        FormKind::CreateTask => "Create Task",
        FormKind::EditTask => "Save Changes",
    }
}

fn saving_label(kind: FormKind) -> &'static str {
    match kind {
        FormKind::SignIn => "Signing in...",
        FormKind::SignUp => "Creating account...",
        FormKind::CreateProject | FormKind::CreateTask => "Creating...",
        FormKind::EditTask => "Saving...",
    }
}

/// Row and column of the text cursor relative to the form's first line.
#[must_use]
pub fn form_cursor(form: &Form) -> Option<(usize, usize)> {
    let field = form.focused_field()?;
    let col = match field.kind {
        FieldKind::Choice(_) => return None,
        FieldKind::Secret => field.buffer.cursor_char_pos(),
        _ => field.buffer.cursor_display_pos(),
    };
    Some((form.focused * FIELD_ROWS + 1, theme::FORM_VALUE_INDENT + col))
}

/// Lines of [`build_form_lines`] that must stay visible: the focused field,
/// and on the last field the submit line below it as well.
#[must_use]
pub fn form_focus(form: &Form) -> Range<usize> {
    let start = form.focused * FIELD_ROWS;
    if form.focused + 1 >= form.fields.len() {
        start..form.fields.len() * FIELD_ROWS
    } else {
        start..start + 2
    }
}

/// Sign-in or sign-up screen shown while no session exists.
pub fn build_auth_lines(app: &App) -> Vec<RatatuiLine<'static>> {
    let (heading, tagline, switch) = match app.auth_form.kind {
        FormKind::SignUp => (
            "Create your account",
            "Join your team on Synergy",
            "Already have an account? Ctrl-T to sign in",
        ),
        _ => (
            "Welcome back",
            "Sign in to your Synergy workspace",
            "Don't have an account? Ctrl-T to sign up",
        ),
    };

    let mut lines = vec![
        RatatuiLine::from(Span::styled(
            "Synergy",
            Style::default().fg(theme::PRIMARY).add_modifier(Modifier::BOLD),
        )),
        RatatuiLine::from(Span::styled(
            heading,
            Style::default().fg(theme::HEADING).add_modifier(Modifier::BOLD),
        )),
        RatatuiLine::from(Span::styled(tagline, Style::default().fg(theme::TEXT_MUTED))),
        RatatuiLine::from(""),
    ];
    lines.extend(build_form_lines(&app.auth_form));
    lines.push(RatatuiLine::from(""));
    lines.push(RatatuiLine::from(Span::styled(
        switch,
        Style::default().fg(theme::TEXT_SECONDARY),
    )));
    lines
}

/// Rows above the form fields in [`build_auth_lines`].
pub const AUTH_HEADER_LINES: usize = 4;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn project_form_ends_with_submit_line() {
        let form = Form::create_project();
        let lines = build_form_lines(&form);
        assert_eq!(lines.len(), form.fields.len() * FIELD_ROWS);
        assert!(
            crate::ui::line_text(&lines[lines.len() - 1]).starts_with("Enter Create Project")
        );
    }

    #[test]
    fn last_field_focus_reaches_submit_line() {
        let mut form = Form::create_project();
        assert_eq!(form_focus(&form), 0..2);

        form.focused = form.fields.len() - 1;
        let lines = build_form_lines(&form);
        assert_eq!(form_focus(&form), 18..lines.len());
    }
}
