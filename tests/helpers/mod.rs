#![allow(dead_code)]

use chrono::NaiveDate;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{Terminal, backend::TestBackend};

use synergy::app::App;
use synergy::auth::AuthProvider;
use synergy::config::Config;
use synergy::handlers;
use synergy::navigation::ViewName;
use synergy::ui;

const SCREEN_WIDTH: usize = 80;

pub fn test_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
}

/// Zero latency so every submission completes inside the key press.
pub fn instant_config() -> Config {
    Config {
        simulated_latency_ms: 0,
        auth_latency_ms: 0,
        ..Default::default()
    }
}

pub struct TestContext {
    pub app: App,
}

impl TestContext {
    /// Signed in as Dana Scully with the demo projects loaded.
    pub fn new() -> Self {
        Self::with_config(Config {
            user_name: Some("Dana Scully".to_string()),
            user_email: Some("dana@example.com".to_string()),
            ..instant_config()
        })
    }

    pub fn signed_out() -> Self {
        Self::with_config(instant_config())
    }

    pub fn empty() -> Self {
        Self::with_config(Config {
            seed_demo_data: false,
            user_name: Some("Dana Scully".to_string()),
            user_email: Some("dana@example.com".to_string()),
            ..instant_config()
        })
    }

    pub fn with_config(config: Config) -> Self {
        Self {
            app: App::new_with_date(config, test_date()),
        }
    }

    pub fn press(&mut self, key: KeyCode) {
        self.press_with_modifiers(key, KeyModifiers::NONE);
    }

    pub fn press_with_modifiers(&mut self, key: KeyCode, modifiers: KeyModifiers) {
        handlers::handle_key(&mut self.app, KeyEvent::new(key, modifiers));
        self.app.poll_pending();
    }

    pub fn type_str(&mut self, s: &str) {
        for c in s.chars() {
            self.press(KeyCode::Char(c));
        }
    }

    /// Moves focus forward `n` fields.
    pub fn tab(&mut self, n: usize) {
        for _ in 0..n {
            self.press(KeyCode::Tab);
        }
    }

    pub fn render_current(&self) -> Vec<String> {
        ui::render_screen(&self.app, SCREEN_WIDTH)
            .iter()
            .map(ui::line_text)
            .collect()
    }

    pub fn screen_contains(&self, text: &str) -> bool {
        self.render_current().iter().any(|line| line.contains(text))
    }

    pub fn find_line(&self, text: &str) -> Option<String> {
        self.render_current()
            .into_iter()
            .find(|line| line.contains(text))
    }

    pub fn status_contains(&self, text: &str) -> bool {
        self.app
            .status_message
            .as_ref()
            .is_some_and(|s| s.title.contains(text) || s.text.contains(text))
    }

    pub fn footer_text(&self) -> String {
        ui::line_text(&ui::render_footer(&self.app))
    }

    /// Draws the full frame into an in-memory terminal and returns its rows.
    pub fn render_terminal(&mut self, width: u16, height: u16) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|f| ui::render_app(f, &mut self.app)).unwrap();
        let buffer = terminal.backend().buffer();
        (0..height)
            .map(|y| {
                (0..width)
                    .map(|x| buffer[(x, y)].symbol())
                    .collect::<String>()
            })
            .collect()
    }

    pub fn terminal_contains(&mut self, width: u16, height: u16, text: &str) -> bool {
        self.render_terminal(width, height)
            .iter()
            .any(|row| row.contains(text))
    }

    /// Creates a project through the dashboard form.
    pub fn create_project(&mut self, name: &str) {
        self.press(KeyCode::Char('c'));
        self.type_str(name);
        self.tab(1);
        self.type_str("Created from a test");
        self.press(KeyCode::Enter);
    }

    /// Adds a task assigned to the first team member to the open project.
    pub fn create_task(&mut self, title: &str) {
        self.press(KeyCode::Char('a'));
        self.type_str(title);
        self.tab(2);
        self.press(KeyCode::Right);
        self.tab(3);
        self.type_str("2026-02-01");
        self.press(KeyCode::Enter);
    }

    /// Opens the project at `index` in the dashboard list.
    pub fn open_project(&mut self, index: usize) {
        self.press(KeyCode::Char('g'));
        for _ in 0..index {
            self.press(KeyCode::Char('j'));
        }
        self.press(KeyCode::Enter);
    }

    /// Verify invariants that must always hold after any operation.
    /// Call this at the end of every test.
    pub fn verify_invariants(&self) {
        self.verify_selection_consistency();
        self.verify_cursor_bounds();
        self.verify_form_consistency();
        self.verify_signed_out_reset();
    }

    fn verify_selection_consistency(&self) {
        let state = self.app.nav.state();
        if state.selected_task.is_some() {
            assert!(
                state.selected_project.is_some(),
                "Task selected without a project"
            );
        }
        if let (Some(project), Some(task)) = (&state.selected_project, &state.selected_task) {
            assert_eq!(
                task.project_id, project.id,
                "Selected task belongs to another project"
            );
        }
        if state.view == ViewName::Dashboard {
            assert!(state.selected_project.is_none(), "Dashboard with project");
            assert!(state.selected_task.is_none(), "Dashboard with task");
        }
        assert_eq!(
            state.view == ViewName::Task,
            state.selected_task.is_some(),
            "Task view and task selection disagree"
        );
    }

    fn verify_cursor_bounds(&self) {
        let projects = self.app.visible_projects().len();
        if projects > 0 {
            assert!(
                self.app.dashboard.selected < projects,
                "Dashboard cursor {} out of bounds ({projects})",
                self.app.dashboard.selected
            );
        }
        let forms = [
            Some(&self.app.auth_form),
            self.app.project_form.as_ref(),
            self.app.task_form.as_ref(),
            self.app.task_edit.as_ref(),
        ];
        for form in forms.into_iter().flatten() {
            assert!(form.focused < form.fields.len(), "Form focus out of range");
            for field in &form.fields {
                let len = field.buffer.content().chars().count();
                assert!(field.buffer.cursor_char_pos() <= len, "Cursor beyond text");
            }
        }
    }

    fn verify_form_consistency(&self) {
        if self.app.project_form.is_some() {
            assert!(
                self.app.nav.create_form_visible(),
                "Project form held while hidden"
            );
        }
        if self.app.task_form.is_some() {
            assert!(self.app.nav.task_modal_open(), "Task form held while closed");
        }
    }

    fn verify_signed_out_reset(&self) {
        if !self.app.auth.is_signed_in() {
            assert_eq!(self.app.nav.view(), ViewName::Dashboard);
            assert!(self.app.nav.selected_project().is_none());
        }
    }
}
