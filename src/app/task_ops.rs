use crate::forms::Form;

use super::App;

impl App {
    pub fn start_task_edit(&mut self) {
        if let Some(task) = self.nav.selected_task() {
            self.task_edit = Some(Form::edit_task(task, &self.config.team_members));
        }
    }

    pub fn back_to_project(&mut self) {
        self.task_edit = None;
        self.nav.back_to_project();
        let count = self.visible_tasks().len();
        self.project_view.selected = self.project_view.selected.min(count.saturating_sub(1));
    }
}
