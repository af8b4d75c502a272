//! View navigation and selection.
//!
//! Decides which screen is shown and which project and task are in focus.
//! Every operation is total: a call whose precondition does not hold leaves
//! the state untouched and reports `false` (or `None`).

use tracing::{debug, info};

use crate::auth::AuthProvider;
use crate::forms::{NewProject, NewTask};
use crate::model::{Project, ProjectColor, ProjectStatus, Task, TaskPatch};
use crate::store::Store;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ViewName {
    #[default]
    Dashboard,
    Project,
    Task,
}

/// What the renderer should draw for the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    CreateProjectForm,
    Dashboard,
    Project,
    Task,
    /// A project or task view whose selection is missing.
    Blank,
}

#[derive(Clone, Debug, PartialEq, Default)]
pub struct NavState {
    pub view: ViewName,
    pub selected_project: Option<Project>,
    pub selected_task: Option<Task>,
    pub create_form_visible: bool,
    pub task_modal_open: bool,
}

#[derive(Clone, Debug, Default)]
pub struct Navigation {
    state: NavState,
}

impl Navigation {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn state(&self) -> &NavState {
        &self.state
    }

    #[must_use]
    pub fn view(&self) -> ViewName {
        self.state.view
    }

    #[must_use]
    pub fn selected_project(&self) -> Option<&Project> {
        self.state.selected_project.as_ref()
    }

    #[must_use]
    pub fn selected_task(&self) -> Option<&Task> {
        self.state.selected_task.as_ref()
    }

    #[must_use]
    pub fn create_form_visible(&self) -> bool {
        self.state.create_form_visible
    }

    #[must_use]
    pub fn task_modal_open(&self) -> bool {
        self.state.task_modal_open
    }

    /// Focuses `project`. Any previously selected task is dropped so a task
    /// from another project can never linger behind the new selection.
    pub fn select_project(&mut self, project: Project) {
        debug!(project = %project.id, "select project");
        self.state.view = ViewName::Project;
        self.state.selected_project = Some(project);
        self.state.selected_task = None;
    }

    pub fn back_to_dashboard(&mut self) {
        self.state.view = ViewName::Dashboard;
        self.state.selected_project = None;
        self.state.selected_task = None;
        self.state.create_form_visible = false;
    }

    /// Opens the task dialog for the selected project.
    pub fn request_create_task(&mut self) -> bool {
        if self.state.selected_project.is_none() {
            debug!("create task requested without a project");
            return false;
        }
        self.state.task_modal_open = true;
        true
    }

    pub fn close_task_modal(&mut self) {
        self.state.task_modal_open = false;
    }

    /// Focuses `task` if it belongs to the selected project.
    pub fn select_task(&mut self, task: &Task) -> bool {
        let owned = self
            .state
            .selected_project
            .as_ref()
            .is_some_and(|p| p.id == task.project_id);
        if !owned {
            debug!(task = %task.id, "task is not part of the selected project");
            return false;
        }
        self.state.view = ViewName::Task;
        self.state.selected_task = Some(task.clone());
        true
    }

    pub fn back_to_project(&mut self) -> bool {
        if self.state.view != ViewName::Task {
            debug!(view = ?self.state.view, "back to project outside the task view");
            return false;
        }
        self.state.view = ViewName::Project;
        self.state.selected_task = None;
        true
    }

    pub fn open_create_form(&mut self) {
        self.state.create_form_visible = true;
    }

    pub fn close_create_form(&mut self) {
        self.state.create_form_visible = false;
    }

    /// Stores a new task under the selected project and closes the dialog.
    /// The new task is not selected.
    pub fn task_created(&mut self, store: &mut Store, new_task: NewTask) -> Option<Task> {
        let Some(project) = self.state.selected_project.as_ref() else {
            debug!("task completion arrived without a selected project");
            return None;
        };
        let task = Task {
            id: store.next_id(),
            project_id: project.id.clone(),
            title: new_task.title,
            description: new_task.description,
            status: new_task.status,
            priority: new_task.priority,
            assignee: new_task.assignee,
            due_date: new_task.due_date,
            created_at: chrono::Local::now().naive_local(),
        };
        info!(task = %task.id, project = %task.project_id, "task created");
        store.add_task(task.clone());
        self.state.task_modal_open = false;
        Some(task)
    }

    /// Appends a fresh project with zeroed progress and hides the create form.
    pub fn project_created(&mut self, store: &mut Store, new_project: NewProject) -> Project {
        let project = Project {
            id: store.next_id(),
            name: new_project.name,
            description: new_project.description,
            progress: 0,
            total_tasks: 0,
            completed_tasks: 0,
            team_size: new_project.team_size,
            due_date: new_project.due_date,
            status: ProjectStatus::Active,
            color: ProjectColor::nth(store.projects().len()),
        };
        info!(project = %project.id, name = %project.name, "project created");
        store.add_project(project.clone());
        self.state.create_form_visible = false;
        project
    }

    /// Merges `patch` into the selected task, both in the store and in the selection.
    pub fn task_updated(&mut self, store: &mut Store, patch: &TaskPatch) -> Option<Task> {
        let task = self.state.selected_task.as_ref()?;
        let merged = match store.update_task(&task.project_id, &task.id, patch) {
            Some(merged) => merged,
            None => {
                // Selection outlived its store entry; patch the snapshot alone.
                let mut merged = task.clone();
                patch.apply(&mut merged);
                merged
            }
        };
        info!(task = %merged.id, "task updated");
        self.state.selected_task = Some(merged.clone());
        Some(merged)
    }

    pub fn sign_out(&mut self, auth: &mut impl AuthProvider) {
        info!("signing out");
        auth.sign_out();
        self.state = NavState::default();
    }

    /// Sidebar navigation. Only the project list destinations move anything.
    pub fn navigate_to(&mut self, target: &str) -> bool {
        match target {
            "dashboard" | "projects" => {
                self.back_to_dashboard();
                self.close_create_form();
                true
            }
            other => {
                debug!(target = other, "navigation target has no screen");
                false
            }
        }
    }

    #[must_use]
    pub fn current_screen(&self) -> Screen {
        if self.state.create_form_visible {
            return Screen::CreateProjectForm;
        }
        match self.state.view {
            ViewName::Dashboard => Screen::Dashboard,
            ViewName::Project if self.state.selected_project.is_some() => Screen::Project,
            ViewName::Task
                if self.state.selected_project.is_some() && self.state.selected_task.is_some() =>
            {
                Screen::Task
            }
            _ => Screen::Blank,
        }
    }
}
