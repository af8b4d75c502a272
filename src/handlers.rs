use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::app::{App, KeyContext};
use crate::cursor::CursorBuffer;
use crate::ui;

/// Routes a key press to the handler for the current context.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    app.status_message = None;

    match app.key_context() {
        KeyContext::Auth => handle_auth_key(app, key),
        KeyContext::Help => handle_help_key(app, key),
        KeyContext::ProjectForm | KeyContext::TaskForm | KeyContext::EditTask => {
            handle_form_key(app, key);
        }
        KeyContext::Search => handle_search_key(app, key),
        KeyContext::Compose => handle_compose_key(app, key),
        KeyContext::Notifications => handle_notifications_key(app, key),
        context @ (KeyContext::Dashboard
        | KeyContext::Project
        | KeyContext::Task
        | KeyContext::Blank) => handle_normal_key(app, context, key),
    }
}

/// Keys shared by every browsing context. Returns true when consumed.
fn handle_global_key(app: &mut App, code: KeyCode) -> bool {
    match code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.toggle_help(),
        KeyCode::Char('L') => app.sign_out(),
        KeyCode::Char(c @ '1'..='4') => {
            let index = c as usize - '1' as usize;
            app.navigate_sidebar(index);
        }
        _ => return false,
    }
    true
}

pub fn handle_normal_key(app: &mut App, context: KeyContext, key: KeyEvent) {
    if handle_global_key(app, key.code) {
        return;
    }

    match context {
        KeyContext::Dashboard => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.dashboard_move_down(),
            KeyCode::Char('k') | KeyCode::Up => app.dashboard_move_up(),
            KeyCode::Char('g') => app.dashboard_jump_to_first(),
            KeyCode::Char('G') => app.dashboard_jump_to_last(),
            KeyCode::Enter | KeyCode::Char('l') => app.open_selected_project(),
            KeyCode::Char('c') => app.open_create_project_form(),
            KeyCode::Char('/') => app.enter_search(),
            KeyCode::Char('n') => app.toggle_notifications(),
            KeyCode::Esc => app.clear_search(),
            _ => {}
        },
        KeyContext::Project => match key.code {
            KeyCode::Char('j') | KeyCode::Down => app.project_move_down(),
            KeyCode::Char('k') | KeyCode::Up => app.project_move_up(),
            KeyCode::Enter | KeyCode::Char('l') => app.open_selected_task(),
            KeyCode::Char('a') => app.open_task_modal(),
            KeyCode::Char('f') => app.cycle_task_filter(),
            KeyCode::Tab => app.toggle_project_tab(),
            KeyCode::Char('m') => app.start_compose(),
            KeyCode::Esc | KeyCode::Char('h') => app.back_to_dashboard(),
            _ => {}
        },
        KeyContext::Task => match key.code {
            KeyCode::Char('e') => app.start_task_edit(),
            KeyCode::Esc | KeyCode::Char('h') => app.back_to_project(),
            _ => {}
        },
        _ => {
            if key.code == KeyCode::Esc {
                app.back_to_dashboard();
            }
        }
    }
}

pub fn handle_help_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q') => app.toggle_help(),
        KeyCode::Char('j') | KeyCode::Down => {
            let total_lines = ui::get_help_total_lines();
            let max_scroll = total_lines.saturating_sub(app.help_visible_height);
            if app.help_scroll < max_scroll {
                app.help_scroll += 1;
            }
        }
        KeyCode::Char('k') | KeyCode::Up => {
            app.help_scroll = app.help_scroll.saturating_sub(1);
        }
        _ => {}
    }
}

pub fn handle_auth_key(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('t') {
        if !app.is_saving() {
            app.toggle_auth_mode();
        }
        return;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }
    handle_form_key(app, key);
}

/// Field navigation, choice cycling, and text entry for whichever form has focus.
pub fn handle_form_key(app: &mut App, key: KeyEvent) {
    if app.is_saving() {
        return;
    }

    match key.code {
        KeyCode::Enter => {
            app.submit_active_form();
            return;
        }
        KeyCode::Esc => {
            app.cancel_active_form();
            return;
        }
        _ => {}
    }

    let Some(form) = app.active_form_mut() else {
        return;
    };

    match key.code {
        KeyCode::Tab | KeyCode::Down => form.focus_next(),
        KeyCode::BackTab | KeyCode::Up => form.focus_prev(),
        _ => {
            let Some(field) = form.focused_field_mut() else {
                return;
            };
            if field.is_choice() {
                match key.code {
                    KeyCode::Left => field.cycle(false),
                    KeyCode::Right | KeyCode::Char(' ') => field.cycle(true),
                    _ => {}
                }
                return;
            }
            match key.code {
                KeyCode::Char(c) if key.modifiers.difference(KeyModifiers::SHIFT).is_empty() => {
                    form.insert_char(c);
                }
                _ => {
                    handle_text_input(&mut field.buffer, key);
                }
            }
        }
    }
}

pub fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_search(),
        KeyCode::Esc => app.clear_search(),
        KeyCode::Backspace if app.dashboard.search.is_empty() => app.clear_search(),
        _ => {
            handle_text_input(&mut app.dashboard.search, key);
            app.search_changed();
        }
    }
}

pub fn handle_compose_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Enter => app.submit_compose(),
        KeyCode::Esc => app.cancel_compose(),
        _ => {
            if let Some(buffer) = app.project_view.compose.as_mut() {
                handle_text_input(buffer, key);
            }
        }
    }
}

pub fn handle_notifications_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('j') | KeyCode::Down => app.notification_move_down(),
        KeyCode::Char('k') | KeyCode::Up => app.notification_move_up(),
        KeyCode::Enter => app.mark_selected_notification_read(),
        KeyCode::Char('n') | KeyCode::Esc => app.toggle_notifications(),
        code => {
            handle_global_key(app, code);
        }
    }
}

fn handle_text_input(buffer: &mut CursorBuffer, key: KeyEvent) -> bool {
    let KeyEvent {
        code, modifiers, ..
    } = key;

    if modifiers.contains(KeyModifiers::CONTROL) {
        match code {
            KeyCode::Char('a') => buffer.move_to_start(),
            KeyCode::Char('e') => buffer.move_to_end(),
            KeyCode::Char('w') => buffer.delete_word_before(),
            KeyCode::Char('u') => buffer.clear(),
            _ => return false,
        }
        return true;
    }

    if modifiers.contains(KeyModifiers::ALT) {
        match code {
            KeyCode::Backspace => buffer.delete_word_before(),
            _ => return false,
        }
        return true;
    }

    match code {
        KeyCode::Left => buffer.move_left(),
        KeyCode::Right => buffer.move_right(),
        KeyCode::Home => buffer.move_to_start(),
        KeyCode::End => buffer.move_to_end(),
        KeyCode::Delete => {
            buffer.delete_char_after();
        }
        KeyCode::Backspace => {
            buffer.delete_char_before();
        }
        KeyCode::Char(c) => buffer.insert_char(c),
        _ => return false,
    }
    true
}
