use chrono::Local;
use tracing::{debug, info};

use crate::cursor::CursorBuffer;
use crate::forms::Form;
use crate::model::{Discussion, Task};

use super::{App, ProjectTab};

impl App {
    /// Tasks of the selected project that pass the status filter.
    #[must_use]
    pub fn visible_tasks(&self) -> Vec<&Task> {
        match self.nav.selected_project() {
            Some(project) => self
                .store
                .tasks_with_filter(&project.id, self.project_view.filter),
            None => Vec::new(),
        }
    }

    pub fn project_move_down(&mut self) {
        let count = self.visible_tasks().len();
        if self.project_view.selected + 1 < count {
            self.project_view.selected += 1;
        }
    }

    pub fn project_move_up(&mut self) {
        self.project_view.selected = self.project_view.selected.saturating_sub(1);
    }

    pub fn open_selected_task(&mut self) {
        if self.project_view.tab != ProjectTab::Tasks {
            return;
        }
        let Some(task) = self
            .visible_tasks()
            .get(self.project_view.selected)
            .map(|t| (*t).clone())
        else {
            debug!("no task under the cursor");
            return;
        };
        self.nav.select_task(&task);
    }

    pub fn cycle_task_filter(&mut self) {
        self.project_view.filter = self.project_view.filter.next();
        self.project_view.selected = 0;
    }

    pub fn toggle_project_tab(&mut self) {
        self.project_view.tab = match self.project_view.tab {
            ProjectTab::Tasks => ProjectTab::Discussions,
            ProjectTab::Discussions => ProjectTab::Tasks,
        };
    }

    pub fn open_task_modal(&mut self) {
        if self.nav.request_create_task() {
            self.task_form = Some(Form::create_task(&self.config.team_members));
        }
    }

    pub fn start_compose(&mut self) {
        self.project_view.tab = ProjectTab::Discussions;
        self.project_view.compose = Some(CursorBuffer::empty());
    }

    pub fn cancel_compose(&mut self) {
        self.project_view.compose = None;
    }

    /// Posts the draft message as a new top-level thread. Blank drafts are dropped.
    pub fn submit_compose(&mut self) {
        let Some(buffer) = self.project_view.compose.take() else {
            return;
        };
        let message = buffer.content().trim().to_string();
        if message.is_empty() {
            return;
        }
        let (Some(project_id), Some(author)) = (
            self.nav.selected_project().map(|p| p.id.clone()),
            self.session().map(|s| s.name.clone()),
        ) else {
            return;
        };

        let discussion = Discussion {
            id: self.store.next_id(),
            author,
            message,
            timestamp: Local::now().naive_local(),
            replies: Vec::new(),
        };
        info!(project = %project_id, "discussion posted");
        self.store.post_discussion(&project_id, discussion);
        self.set_status("Message posted");
    }
}
