use tracing::debug;

use crate::forms::Form;
use crate::model::Project;

use super::App;

impl App {
    /// Projects matching the current search query, in store order.
    #[must_use]
    pub fn visible_projects(&self) -> Vec<&Project> {
        self.store.search_projects(self.dashboard.search.content())
    }

    fn clamp_dashboard_selection(&mut self) {
        let count = self.visible_projects().len();
        self.dashboard.selected = self.dashboard.selected.min(count.saturating_sub(1));
    }

    pub fn dashboard_move_down(&mut self) {
        let count = self.visible_projects().len();
        if self.dashboard.selected + 1 < count {
            self.dashboard.selected += 1;
        }
    }

    pub fn dashboard_move_up(&mut self) {
        self.dashboard.selected = self.dashboard.selected.saturating_sub(1);
    }

    pub fn dashboard_jump_to_first(&mut self) {
        self.dashboard.selected = 0;
    }

    pub fn dashboard_jump_to_last(&mut self) {
        self.dashboard.selected = self.visible_projects().len().saturating_sub(1);
    }

    pub fn open_selected_project(&mut self) {
        let Some(project) = self
            .visible_projects()
            .get(self.dashboard.selected)
            .map(|p| (*p).clone())
        else {
            debug!("no project under the cursor");
            return;
        };
        self.select_project(project);
    }

    /// Opens a project and resets the project view's cursor, filter, and tab.
    pub fn select_project(&mut self, project: Project) {
        self.nav.select_project(project);
        self.project_view = Default::default();
        self.task_edit = None;
    }

    pub fn back_to_dashboard(&mut self) {
        self.nav.back_to_dashboard();
        self.project_form = None;
        self.task_edit = None;
        self.project_view.compose = None;
        self.clamp_dashboard_selection();
    }

    pub fn open_create_project_form(&mut self) {
        self.project_form = Some(Form::create_project());
        self.nav.open_create_form();
    }

    pub fn enter_search(&mut self) {
        self.dashboard.searching = true;
        self.dashboard.notifications_open = false;
    }

    /// Leaves the prompt but keeps the query applied.
    pub fn submit_search(&mut self) {
        self.dashboard.searching = false;
        self.clamp_dashboard_selection();
    }

    pub fn clear_search(&mut self) {
        self.dashboard.search.clear();
        self.dashboard.searching = false;
        self.clamp_dashboard_selection();
    }

    pub fn search_changed(&mut self) {
        self.clamp_dashboard_selection();
    }

    pub fn toggle_notifications(&mut self) {
        if self.dashboard.notifications_open {
            self.dashboard.notifications_open = false;
            return;
        }
        self.dashboard.notifications_open = true;
        self.dashboard.notification_selected = 0;
        let unread = self.store.unread_notification_count();
        self.set_status(format!("You have {unread} new updates"));
    }

    pub fn notification_move_down(&mut self) {
        let count = self.store.notifications().len();
        if self.dashboard.notification_selected + 1 < count {
            self.dashboard.notification_selected += 1;
        }
    }

    pub fn notification_move_up(&mut self) {
        self.dashboard.notification_selected =
            self.dashboard.notification_selected.saturating_sub(1);
    }

    pub fn mark_selected_notification_read(&mut self) {
        let Some(id) = self
            .store
            .notifications()
            .get(self.dashboard.notification_selected)
            .map(|n| n.id.clone())
        else {
            return;
        };
        self.store.mark_notification_read(&id);
    }
}
