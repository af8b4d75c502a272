use crate::forms::{Form, FormKind};

use super::{App, DashboardState, ProjectViewState};

impl App {
    /// Switches between the sign-in and sign-up forms.
    pub fn toggle_auth_mode(&mut self) {
        self.auth_form = match self.auth_form.kind {
            FormKind::SignIn => Form::sign_up(),
            _ => Form::sign_in(),
        };
    }

    /// Drops every open form and selection, then asks the provider to end the session.
    pub fn sign_out(&mut self) {
        self.nav.sign_out(&mut self.auth);
        self.project_form = None;
        self.task_form = None;
        self.task_edit = None;
        self.dashboard = DashboardState::default();
        self.project_view = ProjectViewState::default();
        self.auth_form = Form::sign_in();
        self.sidebar_active = 0;
        self.show_help = false;
        self.set_status("Signed out");
    }
}
