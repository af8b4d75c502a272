use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProjectStatus {
    #[default]
    Active,
    Completed,
    Overdue,
}

impl ProjectStatus {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Overdue => "overdue",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Todo,
    Progress,
    Done,
}

impl TaskStatus {
    pub const ALL: [TaskStatus; 3] = [Self::Todo, Self::Progress, Self::Done];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Todo => "To Do",
            Self::Progress => "In Progress",
            Self::Done => "Done",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Self::Low, Self::Medium, Self::High];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

/// Accent used for the project's marker dot.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ProjectColor {
    #[default]
    Blue,
    Purple,
    Green,
    Red,
    Yellow,
    Indigo,
}

impl ProjectColor {
    pub const PALETTE: [ProjectColor; 6] = [
        Self::Blue,
        Self::Purple,
        Self::Green,
        Self::Red,
        Self::Yellow,
        Self::Indigo,
    ];

    /// Cycles through the palette so consecutive projects get distinct colors.
    #[must_use]
    pub fn nth(n: usize) -> Self {
        Self::PALETTE[n % Self::PALETTE.len()]
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl Session {
    #[must_use]
    pub fn first_name(&self) -> &str {
        self.name.split_whitespace().next().unwrap_or(&self.name)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Project {
    pub id: String,
    pub name: String,
    pub description: String,
    pub progress: u8,
    pub total_tasks: usize,
    pub completed_tasks: usize,
    pub team_size: u32,
    pub due_date: Option<NaiveDate>,
    pub status: ProjectStatus,
    pub color: ProjectColor,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Assignee {
    pub name: String,
    pub avatar: Option<String>,
}

impl Assignee {
    #[must_use]
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            avatar: None,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Task {
    pub id: String,
    pub project_id: String,
    pub title: String,
    pub description: String,
    pub status: TaskStatus,
    pub priority: Priority,
    pub assignee: Assignee,
    pub due_date: NaiveDate,
    pub created_at: NaiveDateTime,
}

/// Partial update applied to a stored task. `None` fields are left alone.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TaskPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub status: Option<TaskStatus>,
    pub priority: Option<Priority>,
    pub assignee: Option<Assignee>,
    pub due_date: Option<NaiveDate>,
}

impl TaskPatch {
    pub fn apply(&self, task: &mut Task) {
        if let Some(title) = &self.title {
            task.title = title.clone();
        }
        if let Some(description) = &self.description {
            task.description = description.clone();
        }
        if let Some(status) = self.status {
            task.status = status;
        }
        if let Some(priority) = self.priority {
            task.priority = priority;
        }
        if let Some(assignee) = &self.assignee {
            // Avatar survives a reassignment to the same person.
            if assignee.name != task.assignee.name || assignee.avatar.is_some() {
                task.assignee = assignee.clone();
            }
        }
        if let Some(due_date) = self.due_date {
            task.due_date = due_date;
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: String,
    pub title: String,
    pub description: String,
    pub is_read: bool,
    pub timestamp: NaiveDateTime,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Discussion {
    pub id: String,
    pub author: String,
    pub message: String,
    pub timestamp: NaiveDateTime,
    pub replies: Vec<Discussion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
}

impl TeamMember {
    #[must_use]
    pub fn new(id: &str, name: &str, email: &str) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            email: email.to_string(),
        }
    }
}

/// Initials shown in place of an avatar ("Alice Johnson" -> "AJ").
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .collect()
}
