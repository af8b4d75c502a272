use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line as RatatuiLine, Span},
    widgets::{Block, BorderType, Borders, Clear, Paragraph, Wrap},
};

use crate::app::{App, KeyContext, StatusKind, StatusMessage};
use crate::forms::Form;
use crate::navigation::Screen;

use super::dashboard::{build_notification_lines, dashboard_view};
use super::footer::render_footer;
use super::form::{AUTH_HEADER_LINES, build_auth_lines, build_form_lines, form_cursor, form_focus};
use super::help::{get_help_total_lines, render_help_content};
use super::layout::{app_layout, centered_rect, padded};
use super::project::project_view;
use super::scroll::{ScrollView, clamp_scroll, ensure_range_visible, render_scrolled};
use super::sidebar::build_sidebar_lines;
use super::task::build_task_lines;
use super::theme;

pub fn render_app(f: &mut Frame<'_>, app: &mut App) {
    let signed_in = app.session().is_some();
    let layout = app_layout(f.area(), signed_in);

    f.render_widget(Paragraph::new(render_footer(app)), layout.footer);

    if !signed_in {
        render_auth(f, app, layout.main);
        render_status_banner(f, app.status_message.as_ref(), layout.main);
        return;
    }

    let sidebar_block = Block::default()
        .borders(Borders::RIGHT)
        .border_style(Style::default().fg(theme::BORDER_MUTED));
    let sidebar_inner = sidebar_block.inner(layout.sidebar);
    f.render_widget(sidebar_block, layout.sidebar);
    f.render_widget(
        Paragraph::new(build_sidebar_lines(app, sidebar_inner.width as usize)),
        sidebar_inner,
    );

    let main_block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER_DEFAULT))
        .title_top(RatatuiLine::from(screen_title(app)).alignment(Alignment::Left));
    let inner = main_block.inner(layout.main);
    let content_area = padded(inner);
    f.render_widget(main_block, layout.main);

    match app.nav.current_screen() {
        Screen::CreateProjectForm => {
            if let Some(form) = app.project_form.as_ref() {
                render_form_in(f, form, content_area);
            }
        }
        Screen::Task if app.task_edit.is_some() => {
            if let Some(form) = app.task_edit.as_ref() {
                render_form_in(f, form, content_area);
            }
        }
        screen => {
            let view = current_view(app, content_area.width as usize);
            let mut unscrolled = 0;
            let scroll = match screen {
                Screen::Dashboard => &mut app.dashboard.scroll,
                Screen::Project => &mut app.project_view.scroll,
                _ => &mut unscrolled,
            };
            let visible_height = content_area.height as usize;
            match &view.focus {
                Some(focus) => {
                    ensure_range_visible(scroll, focus, view.lines.len(), visible_height);
                }
                None => clamp_scroll(scroll, view.lines.len(), visible_height),
            }
            let offset = *scroll;
            render_scrolled(f, view.lines, content_area, offset);
        }
    }

    if app.key_context() == KeyContext::Notifications {
        render_notifications(f, app, f.area());
    }

    if app.nav.task_modal_open()
        && let Some(form) = app.task_form.as_ref()
    {
        let popup = centered_rect(60, 80, f.area());
        f.render_widget(Clear, popup);
        let block = Block::default()
            .title(form.kind.title())
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(theme::BORDER_FORM));
        let inner = padded(block.inner(popup));
        f.render_widget(block, popup);
        render_form_in(f, form, inner);
    }

    render_status_banner(f, app.status_message.as_ref(), content_area);

    if app.show_help {
        render_help(f, app);
    }
}

fn screen_title(app: &App) -> String {
    match app.nav.current_screen() {
        Screen::CreateProjectForm => " Create New Project ".to_string(),
        Screen::Dashboard => " Dashboard ".to_string(),
        Screen::Project => app
            .nav
            .selected_project()
            .map(|p| format!(" {} ", p.name))
            .unwrap_or_default(),
        Screen::Task if app.task_edit.is_some() => " Edit Task ".to_string(),
        Screen::Task => " Task ".to_string(),
        Screen::Blank => String::new(),
    }
}

/// Lines of the non-form screen the state currently selects.
pub fn render_current_view(app: &App, width: usize) -> Vec<RatatuiLine<'static>> {
    current_view(app, width).lines
}

fn current_view(app: &App, width: usize) -> ScrollView {
    match app.nav.current_screen() {
        Screen::Dashboard => dashboard_view(app, width),
        Screen::Project => project_view(app, width),
        Screen::Task => ScrollView::unfocused(build_task_lines(app)),
        Screen::CreateProjectForm | Screen::Blank => ScrollView::unfocused(Vec::new()),
    }
}

fn render_form_in(f: &mut Frame<'_>, form: &Form, area: Rect) {
    let lines = build_form_lines(form);
    let mut offset = 0;
    ensure_range_visible(&mut offset, &form_focus(form), lines.len(), area.height as usize);
    render_scrolled(f, lines, area, offset);
    place_form_cursor(f, form, area, 0, offset);
}

#[allow(clippy::cast_possible_truncation)]
fn place_form_cursor(
    f: &mut Frame<'_>,
    form: &Form,
    area: Rect,
    header_rows: usize,
    scroll_offset: usize,
) {
    if form.saving {
        return;
    }
    let Some((row, col)) = form_cursor(form) else {
        return;
    };
    let Some(screen_row) = (header_rows + row).checked_sub(scroll_offset) else {
        return;
    };
    let y = area.y + screen_row as u16;
    let x = area.x + col as u16;
    if y < area.y + area.height && x < area.x + area.width {
        f.set_cursor_position((x, y));
    }
}

fn render_auth(f: &mut Frame<'_>, app: &App, area: Rect) {
    let popup = centered_rect(50, 90, area);
    let block = Block::default()
        .title(app.auth_form.kind.title())
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::BORDER_FORM));
    let inner = padded(block.inner(popup));
    f.render_widget(block, popup);

    let lines = build_auth_lines(app);
    let field_focus = form_focus(&app.auth_form);
    let focus = if app.auth_form.focused == 0 {
        0..AUTH_HEADER_LINES + field_focus.end
    } else {
        AUTH_HEADER_LINES + field_focus.start..AUTH_HEADER_LINES + field_focus.end
    };
    let mut offset = 0;
    ensure_range_visible(&mut offset, &focus, lines.len(), inner.height as usize);
    render_scrolled(f, lines, inner, offset);
    place_form_cursor(f, &app.auth_form, inner, AUTH_HEADER_LINES, offset);
}

fn render_notifications(f: &mut Frame<'_>, app: &App, area: Rect) {
    let popup = centered_rect(50, 60, area);
    f.render_widget(Clear, popup);
    let block = Block::default()
        .title(" Notifications ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Style::default().fg(theme::STATUS_INFO));
    let inner = padded(block.inner(popup));
    f.render_widget(block, popup);
    f.render_widget(
        Paragraph::new(build_notification_lines(app)).wrap(Wrap { trim: false }),
        inner,
    );
}

#[allow(clippy::cast_possible_truncation)]
fn render_status_banner(f: &mut Frame<'_>, status: Option<&StatusMessage>, area: Rect) {
    let Some(status) = status else {
        return;
    };
    let bg = match status.kind {
        StatusKind::Info => theme::STATUS_INFO,
        StatusKind::Success => theme::STATUS_SUCCESS,
        StatusKind::Error => theme::STATUS_ERROR,
    };
    let style = Style::default().fg(theme::TEXT_ON_ACCENT).bg(bg);
    let mut spans = Vec::new();
    if !status.title.is_empty() {
        spans.push(Span::styled(
            format!(" {} ", status.title),
            style.add_modifier(Modifier::BOLD),
        ));
    }
    spans.push(Span::styled(format!(" {} ", status.text), style));
    let line = RatatuiLine::from(spans);

    let width = (line.width() as u16).min(area.width);
    let banner = Rect {
        x: area.x,
        y: area.y + area.height.saturating_sub(1),
        width,
        height: 1,
    };
    f.render_widget(Paragraph::new(line), banner);
}

#[allow(clippy::cast_possible_truncation)]
fn render_help(f: &mut Frame<'_>, app: &mut App) {
    let popup_area = centered_rect(75, 70, f.area());
    app.help_visible_height = popup_area.height.saturating_sub(3) as usize;
    f.render_widget(Clear, popup_area);

    let max_scroll = get_help_total_lines().saturating_sub(app.help_visible_height);
    let arrows = match (app.help_scroll > 0, app.help_scroll < max_scroll) {
        (true, true) => "▲▼ scroll  ",
        (true, false) => "▲ scroll  ",
        (false, true) => "▼ scroll  ",
        (false, false) => "",
    };

    let help_block = Block::default()
        .title(" Keybindings ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme::BORDER_HELP));
    let inner_area = help_block.inner(popup_area);
    f.render_widget(help_block, popup_area);
    f.render_widget(
        Paragraph::new(render_help_content(app.help_scroll, app.help_visible_height)),
        inner_area,
    );

    let footer_area = Rect {
        x: inner_area.x,
        y: inner_area.y + inner_area.height.saturating_sub(1),
        width: inner_area.width,
        height: 1,
    };
    let footer_line = RatatuiLine::from(vec![
        Span::styled(arrows, Style::default().fg(theme::TEXT_MUTED)),
        Span::styled("? close ", Style::default().fg(theme::TEXT_MUTED)),
    ]);
    f.render_widget(
        Paragraph::new(footer_line).alignment(Alignment::Right),
        footer_area,
    );
}
