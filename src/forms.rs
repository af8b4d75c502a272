use chrono::{Datelike, NaiveDate};

use crate::cursor::CursorBuffer;
use crate::error::ValidationError;
use crate::model::{Assignee, Priority, Task, TaskPatch, TaskStatus, TeamMember};

/// Accepts `YYYY-MM-DD`, `YYYY/MM/DD`, or `MM/DD` (in `today`'s year).
#[must_use]
pub fn parse_date(input: &str, today: NaiveDate) -> Option<NaiveDate> {
    let input = input.trim();
    for fmt in ["%Y-%m-%d", "%Y/%m/%d"] {
        if let Ok(date) = NaiveDate::parse_from_str(input, fmt) {
            return Some(date);
        }
    }
    NaiveDate::parse_from_str(&format!("{}/{input}", today.year()), "%Y/%m/%d").ok()
}

fn check_required(fields: &[(&'static str, bool)]) -> Result<(), ValidationError> {
    let missing: Vec<&'static str> = fields
        .iter()
        .filter(|(_, present)| !present)
        .map(|(name, _)| *name)
        .collect();
    if missing.is_empty() {
        Ok(())
    } else {
        Err(ValidationError::MissingFields(missing))
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProjectDraft {
    pub name: String,
    pub description: String,
    pub tags: String,
    pub manager: String,
    pub due_date: String,
    pub priority: Priority,
    pub team_size: String,
}

/// Validated input for a project that does not exist yet.
#[derive(Clone, Debug, PartialEq)]
pub struct NewProject {
    pub name: String,
    pub description: String,
    pub tags: Vec<String>,
    pub manager: Option<String>,
    pub due_date: Option<NaiveDate>,
    pub priority: Priority,
    pub team_size: u32,
}

impl ProjectDraft {
    pub fn validate(&self, today: NaiveDate) -> Result<NewProject, ValidationError> {
        let name = self.name.trim();
        let description = self.description.trim();
        check_required(&[
            ("name", !name.is_empty()),
            ("description", !description.is_empty()),
        ])?;

        let due_date = match self.due_date.trim() {
            "" => None,
            raw => Some(
                parse_date(raw, today).ok_or_else(|| ValidationError::InvalidDate(raw.into()))?,
            ),
        };

        let team_size = match self.team_size.trim() {
            "" => 1,
            raw => match raw.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ValidationError::InvalidTeamSize(raw.into())),
            },
        };

        let manager = Some(self.manager.trim())
            .filter(|m| !m.is_empty())
            .map(str::to_string);

        Ok(NewProject {
            name: name.to_string(),
            description: description.to_string(),
            tags: self
                .tags
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
            manager,
            due_date,
            priority: self.priority,
            team_size,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskDraft {
    pub title: String,
    pub description: String,
    pub assignee: Option<TeamMember>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: String,
}

#[derive(Clone, Debug, PartialEq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub assignee: Assignee,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: NaiveDate,
}

impl TaskDraft {
    pub fn validate(&self, today: NaiveDate) -> Result<NewTask, ValidationError> {
        let title = self.title.trim();
        let due_raw = self.due_date.trim();
        check_required(&[
            ("title", !title.is_empty()),
            ("assignee", self.assignee.is_some()),
            ("due date", !due_raw.is_empty()),
        ])?;
        let due_date =
            parse_date(due_raw, today).ok_or_else(|| ValidationError::InvalidDate(due_raw.into()))?;
        let assignee = self
            .assignee
            .as_ref()
            .map(|m| Assignee::named(m.name.clone()))
            .unwrap_or_else(|| Assignee::named("Unknown"));

        Ok(NewTask {
            title: title.to_string(),
            description: self.description.trim().to_string(),
            assignee,
            priority: self.priority,
            status: self.status,
            due_date,
        })
    }
}

/// Full set of editable task fields, as collected by the edit form.
#[derive(Clone, Debug, PartialEq)]
pub struct TaskEdit {
    pub title: String,
    pub description: String,
    pub assignee: Option<TeamMember>,
    pub priority: Priority,
    pub status: TaskStatus,
    pub due_date: String,
}

impl TaskEdit {
    pub fn validate(&self, today: NaiveDate) -> Result<TaskPatch, ValidationError> {
        let title = self.title.trim();
        check_required(&[("title", !title.is_empty())])?;
        let due_raw = self.due_date.trim();
        let due_date = match due_raw {
            "" => None,
            raw => Some(
                parse_date(raw, today).ok_or_else(|| ValidationError::InvalidDate(raw.into()))?,
            ),
        };

        Ok(TaskPatch {
            title: Some(title.to_string()),
            description: Some(self.description.trim().to_string()),
            status: Some(self.status),
            priority: Some(self.priority),
            assignee: self.assignee.as_ref().map(|m| Assignee::named(m.name.clone())),
            due_date,
        })
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignInDraft {
    pub email: String,
    pub password: String,
}

impl SignInDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_required(&[
            ("email", !self.email.trim().is_empty()),
            ("password", !self.password.is_empty()),
        ])
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SignUpDraft {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
}

impl SignUpDraft {
    pub fn validate(&self) -> Result<(), ValidationError> {
        check_required(&[
            ("name", !self.name.trim().is_empty()),
            ("email", !self.email.trim().is_empty()),
            ("password", !self.password.is_empty()),
            ("confirm password", !self.confirm_password.is_empty()),
        ])?;
        if self.password != self.confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormKind {
    SignIn,
    SignUp,
    CreateProject,
    CreateTask,
    EditTask,
}

impl FormKind {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::SignIn => " Sign In ",
            Self::SignUp => " Create Account ",
            Self::CreateProject => " Create New Project ",
            Self::CreateTask => " Create New Task ",
            Self::EditTask => " Edit Task ",
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Secret,
    Date,
    Number,
    Choice(Vec<String>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormField {
    pub label: &'static str,
    pub required: bool,
    pub kind: FieldKind,
    pub buffer: CursorBuffer,
    pub choice: usize,
}

impl FormField {
    fn text(label: &'static str, required: bool) -> Self {
        Self::with_kind(label, required, FieldKind::Text)
    }

    fn with_kind(label: &'static str, required: bool, kind: FieldKind) -> Self {
        Self {
            label,
            required,
            kind,
            buffer: CursorBuffer::empty(),
            choice: 0,
        }
    }

    fn choice(label: &'static str, required: bool, options: Vec<String>, selected: usize) -> Self {
        Self {
            choice: selected,
            ..Self::with_kind(label, required, FieldKind::Choice(options))
        }
    }

    fn prefilled(mut self, value: &str) -> Self {
        self.buffer.set_content(value);
        self
    }

    #[must_use]
    pub fn is_choice(&self) -> bool {
        matches!(self.kind, FieldKind::Choice(_))
    }

    /// Text shown for the field's current value.
    #[must_use]
    pub fn display_value(&self) -> String {
        match &self.kind {
            FieldKind::Choice(options) => options.get(self.choice).cloned().unwrap_or_default(),
            FieldKind::Secret => "•".repeat(self.buffer.content().chars().count()),
            _ => self.buffer.content().to_string(),
        }
    }

    pub fn cycle(&mut self, forward: bool) {
        let FieldKind::Choice(options) = &self.kind else {
            return;
        };
        if options.is_empty() {
            return;
        }
        let len = options.len();
        self.choice = if forward {
            (self.choice + 1) % len
        } else {
            (self.choice + len - 1) % len
        };
    }
}

const PRIORITY_OPTIONS: [&str; 3] = ["Low", "Medium", "High"];
const STATUS_OPTIONS: [&str; 3] = ["To Do", "In Progress", "Done"];
const UNASSIGNED: &str = "Select a team member";

fn priority_index(priority: Priority) -> usize {
    Priority::ALL.iter().position(|p| *p == priority).unwrap_or(1)
}

fn status_index(status: TaskStatus) -> usize {
    TaskStatus::ALL.iter().position(|s| *s == status).unwrap_or(0)
}

fn member_options(members: &[TeamMember]) -> Vec<String> {
    std::iter::once(UNASSIGNED.to_string())
        .chain(members.iter().map(|m| m.name.clone()))
        .collect()
}

/// Interactive form: labelled fields with one focused at a time.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Form {
    pub kind: FormKind,
    pub fields: Vec<FormField>,
    pub focused: usize,
    /// Set while a submission is waiting on its deferred completion.
    pub saving: bool,
}

impl Form {
    fn new(kind: FormKind, fields: Vec<FormField>) -> Self {
        Self {
            kind,
            fields,
            focused: 0,
            saving: false,
        }
    }

    #[must_use]
    pub fn sign_in() -> Self {
        Self::new(
            FormKind::SignIn,
            vec![
                FormField::text("Email", true),
                FormField::with_kind("Password", true, FieldKind::Secret),
            ],
        )
    }

    #[must_use]
    pub fn sign_up() -> Self {
        Self::new(
            FormKind::SignUp,
            vec![
                FormField::text("Full Name", true),
                FormField::text("Email", true),
                FormField::with_kind("Password", true, FieldKind::Secret),
                FormField::with_kind("Confirm Password", true, FieldKind::Secret),
            ],
        )
    }

    #[must_use]
    pub fn create_project() -> Self {
        let priorities = PRIORITY_OPTIONS.iter().map(|s| s.to_string()).collect();
        Self::new(
            FormKind::CreateProject,
            vec![
                FormField::text("Project Name", true),
                FormField::text("Description", true),
                FormField::text("Tags (comma-separated)", false),
                FormField::text("Project Manager", false),
                FormField::choice("Priority", false, priorities, 0),
                FormField::with_kind("Due Date", false, FieldKind::Date),
                FormField::with_kind("Team Size", false, FieldKind::Number).prefilled("1"),
            ],
        )
    }

    #[must_use]
    pub fn create_task(members: &[TeamMember]) -> Self {
        let priorities = PRIORITY_OPTIONS.iter().map(|s| s.to_string()).collect();
        let statuses = STATUS_OPTIONS.iter().map(|s| s.to_string()).collect();
        Self::new(
            FormKind::CreateTask,
            vec![
                FormField::text("Task Title", true),
                FormField::text("Description", false),
                FormField::choice("Assignee", true, member_options(members), 0),
                FormField::choice("Priority", false, priorities, priority_index(Priority::Medium)),
                FormField::choice("Status", false, statuses, status_index(TaskStatus::Todo)),
                FormField::with_kind("Due Date", true, FieldKind::Date),
            ],
        )
    }

    /// Edit form pre-filled from `task`. An assignee outside the roster maps to the first member.
    #[must_use]
    pub fn edit_task(task: &Task, members: &[TeamMember]) -> Self {
        let priorities = PRIORITY_OPTIONS.iter().map(|s| s.to_string()).collect();
        let statuses = STATUS_OPTIONS.iter().map(|s| s.to_string()).collect();
        let assignee = members
            .iter()
            .position(|m| m.name == task.assignee.name)
            .unwrap_or(0);
        let due = task.due_date.format("%Y-%m-%d").to_string();
        Self::new(
            FormKind::EditTask,
            vec![
                FormField::text("Task Title", true).prefilled(&task.title),
                FormField::text("Description", false).prefilled(&task.description),
                FormField::choice(
                    "Assignee",
                    false,
                    member_options(members),
                    (assignee + 1).min(members.len()),
                ),
                FormField::choice("Priority", false, priorities, priority_index(task.priority)),
                FormField::choice("Status", false, statuses, status_index(task.status)),
                FormField::with_kind("Due Date", false, FieldKind::Date).prefilled(&due),
            ],
        )
    }

    #[must_use]
    pub fn focused_field(&self) -> Option<&FormField> {
        self.fields.get(self.focused)
    }

    pub fn focused_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.focused)
    }

    pub fn focus_next(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + 1) % self.fields.len();
        }
    }

    pub fn focus_prev(&mut self) {
        if !self.fields.is_empty() {
            self.focused = (self.focused + self.fields.len() - 1) % self.fields.len();
        }
    }

    /// Feeds a typed character into the focused text field. Choice fields ignore it.
    pub fn insert_char(&mut self, c: char) {
        let Some(field) = self.focused_field_mut() else {
            return;
        };
        match field.kind {
            FieldKind::Choice(_) => {}
            FieldKind::Number if !c.is_ascii_digit() => {}
            _ => field.buffer.insert_char(c),
        }
    }

    fn field(&self, label: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.label == label)
    }

    #[must_use]
    pub fn text(&self, label: &str) -> String {
        self.field(label)
            .map(|f| f.buffer.content().to_string())
            .unwrap_or_default()
    }

    #[must_use]
    pub fn choice_index(&self, label: &str) -> usize {
        self.field(label).map_or(0, |f| f.choice)
    }

    fn priority(&self) -> Priority {
        Priority::ALL
            .get(self.choice_index("Priority"))
            .copied()
            .unwrap_or_default()
    }

    fn status(&self) -> TaskStatus {
        TaskStatus::ALL
            .get(self.choice_index("Status"))
            .copied()
            .unwrap_or_default()
    }

    fn assignee(&self, members: &[TeamMember]) -> Option<TeamMember> {
        match self.choice_index("Assignee") {
            0 => None,
            n => members.get(n - 1).cloned(),
        }
    }

    #[must_use]
    pub fn project_draft(&self) -> ProjectDraft {
        ProjectDraft {
            name: self.text("Project Name"),
            description: self.text("Description"),
            tags: self.text("Tags (comma-separated)"),
            manager: self.text("Project Manager"),
            due_date: self.text("Due Date"),
            priority: self.priority(),
            team_size: self.text("Team Size"),
        }
    }

    #[must_use]
    pub fn task_draft(&self, members: &[TeamMember]) -> TaskDraft {
        TaskDraft {
            title: self.text("Task Title"),
            description: self.text("Description"),
            assignee: self.assignee(members),
            priority: self.priority(),
            status: self.status(),
            due_date: self.text("Due Date"),
        }
    }

    #[must_use]
    pub fn task_edit(&self, members: &[TeamMember]) -> TaskEdit {
        TaskEdit {
            title: self.text("Task Title"),
            description: self.text("Description"),
            assignee: self.assignee(members),
            priority: self.priority(),
            status: self.status(),
            due_date: self.text("Due Date"),
        }
    }

    #[must_use]
    pub fn sign_in_draft(&self) -> SignInDraft {
        SignInDraft {
            email: self.text("Email"),
            password: self.text("Password"),
        }
    }

    #[must_use]
    pub fn sign_up_draft(&self) -> SignUpDraft {
        SignUpDraft {
            name: self.text("Full Name"),
            email: self.text("Email"),
            password: self.text("Password"),
            confirm_password: self.text("Confirm Password"),
        }
    }
}
