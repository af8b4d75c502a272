mod auth_ops;
mod dashboard_ops;
mod form_ops;
mod project_ops;
mod task_ops;

pub use form_ops::PendingOp;

use chrono::{Local, NaiveDate};

use crate::auth::{AuthProvider, LocalAuth};
use crate::config::Config;
use crate::cursor::CursorBuffer;
use crate::error::ValidationError;
use crate::forms::Form;
use crate::model::Session;
use crate::navigation::{Navigation, Screen};
use crate::store::{Store, TaskFilter};

/// State specific to the dashboard list
#[derive(Clone, Debug, Default)]
pub struct DashboardState {
    pub selected: usize,
    pub search: CursorBuffer,
    /// Search prompt has keyboard focus
    pub searching: bool,
    pub notifications_open: bool,
    pub notification_selected: usize,
    /// First rendered line, kept in step with the cursor by the renderer
    pub scroll: usize,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ProjectTab {
    #[default]
    Tasks,
    Discussions,
}

/// State specific to the project detail view. Reset whenever a project is opened.
#[derive(Clone, Debug, Default)]
pub struct ProjectViewState {
    pub selected: usize,
    pub filter: TaskFilter,
    pub tab: ProjectTab,
    pub compose: Option<CursorBuffer>,
    pub scroll: usize,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Transient banner shown until the next key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StatusMessage {
    pub title: String,
    pub text: String,
    pub kind: StatusKind,
}

/// Which keyboard handler applies, derived from state rather than stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyContext {
    Auth,
    Help,
    ProjectForm,
    TaskForm,
    EditTask,
    Search,
    Compose,
    Notifications,
    Dashboard,
    Project,
    Task,
    Blank,
}

/// Sidebar destinations, in display order.
pub const SIDEBAR_ITEMS: [(&str, &str); 4] = [
    ("Dashboard", "dashboard"),
    ("Projects", "projects"),
    ("Profile", "profile"),
    ("Settings", "settings"),
];

pub struct App {
    pub today: NaiveDate,
    pub config: Config,
    pub nav: Navigation,
    pub store: Store,
    pub auth: LocalAuth,
    pub auth_form: Form,
    pub project_form: Option<Form>,
    pub task_form: Option<Form>,
    pub task_edit: Option<Form>,
    pub dashboard: DashboardState,
    pub project_view: ProjectViewState,
    pub pending: Option<PendingOp>,
    pub status_message: Option<StatusMessage>,
    pub sidebar_active: usize,
    pub show_help: bool,
    pub help_scroll: usize,
    pub help_visible_height: usize,
    pub should_quit: bool,
}

impl App {
    #[must_use]
    pub fn new(config: Config) -> Self {
        Self::new_with_date(config, Local::now().date_naive())
    }

    /// Creates an App pinned to `today` (for testing and main)
    #[must_use]
    pub fn new_with_date(config: Config, today: NaiveDate) -> Self {
        let store = if config.seed_demo_data {
            Store::with_demo_data(today)
        } else {
            Store::new()
        };
        let auth = config
            .preset_session()
            .map_or_else(LocalAuth::new, LocalAuth::signed_in);

        Self {
            today,
            config,
            nav: Navigation::new(),
            store,
            auth,
            auth_form: Form::sign_in(),
            project_form: None,
            task_form: None,
            task_edit: None,
            dashboard: DashboardState::default(),
            project_view: ProjectViewState::default(),
            pending: None,
            status_message: None,
            sidebar_active: 0,
            show_help: false,
            help_scroll: 0,
            help_visible_height: 0,
            should_quit: false,
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<&Session> {
        self.auth.session()
    }

    #[must_use]
    pub fn key_context(&self) -> KeyContext {
        if !self.auth.is_signed_in() {
            return KeyContext::Auth;
        }
        if self.show_help {
            return KeyContext::Help;
        }
        if self.nav.create_form_visible() && self.project_form.is_some() {
            return KeyContext::ProjectForm;
        }
        if self.nav.task_modal_open() && self.task_form.is_some() {
            return KeyContext::TaskForm;
        }
        if self.task_edit.is_some() {
            return KeyContext::EditTask;
        }

        match self.nav.current_screen() {
            Screen::Dashboard if self.dashboard.searching => KeyContext::Search,
            Screen::Dashboard if self.dashboard.notifications_open => KeyContext::Notifications,
            Screen::Dashboard => KeyContext::Dashboard,
            Screen::Project if self.project_view.compose.is_some() => KeyContext::Compose,
            Screen::Project => KeyContext::Project,
            Screen::Task => KeyContext::Task,
            Screen::CreateProjectForm | Screen::Blank => KeyContext::Blank,
        }
    }

    pub fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = Some(StatusMessage {
            title: String::new(),
            text: msg.into(),
            kind: StatusKind::Info,
        });
    }

    pub fn set_success(&mut self, title: &str, text: &str) {
        self.status_message = Some(StatusMessage {
            title: title.to_string(),
            text: text.to_string(),
            kind: StatusKind::Success,
        });
    }

    pub fn set_error(&mut self, err: &ValidationError) {
        self.status_message = Some(StatusMessage {
            title: err.title().to_string(),
            text: err.to_string(),
            kind: StatusKind::Error,
        });
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.help_scroll = 0;
    }

    /// Sidebar entry `index` (0-based). Targets without a screen only report so.
    pub fn navigate_sidebar(&mut self, index: usize) {
        let Some((label, target)) = SIDEBAR_ITEMS.get(index) else {
            return;
        };
        if self.nav.navigate_to(target) {
            self.sidebar_active = index;
            self.project_form = None;
            self.task_edit = None;
            self.dashboard.notifications_open = false;
        } else {
            self.set_status(format!("{label} is not available yet"));
        }
    }
}
