mod dashboard;
mod footer;
mod form;
mod help;
mod layout;
mod project;
mod render;
mod scroll;
mod shared;
mod sidebar;
mod task;
pub(crate) mod theme;

use ratatui::text::Line as RatatuiLine;

use crate::app::{App, KeyContext};
use crate::navigation::Screen;

pub use dashboard::{build_dashboard_lines, build_notification_lines};
pub use footer::render_footer;
pub use form::{build_auth_lines, build_form_lines, form_cursor};
pub use help::{get_help_total_lines, render_help_content};
pub use layout::centered_rect;
pub use project::build_project_lines;
pub use render::{render_app, render_current_view};
pub use shared::{line_text, truncate};
pub use sidebar::build_sidebar_lines;
pub use task::build_task_lines;

/// Everything the user would read on screen, top to bottom: the auth form
/// when signed out, otherwise the active screen followed by any open overlay.
pub fn render_screen(app: &App, width: usize) -> Vec<RatatuiLine<'static>> {
    if app.session().is_none() {
        return build_auth_lines(app);
    }

    let mut lines = match (app.nav.current_screen(), &app.project_form, &app.task_edit) {
        (Screen::CreateProjectForm, Some(form), _) => build_form_lines(form),
        (Screen::Task, _, Some(form)) => build_form_lines(form),
        _ => render_current_view(app, width),
    };

    if app.key_context() == KeyContext::Notifications {
        lines.extend(build_notification_lines(app));
    }
    if app.nav.task_modal_open()
        && let Some(form) = &app.task_form
    {
        lines.extend(build_form_lines(form));
    }
    lines
}
