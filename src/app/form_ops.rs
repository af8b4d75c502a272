use tracing::debug;

use crate::deferred::Deferred;
use crate::forms::{Form, FormKind, NewProject, NewTask, SignInDraft, SignUpDraft};
use crate::model::TaskPatch;

use super::{App, KeyContext};

/// A submitted form waiting out its simulated latency.
#[derive(Debug)]
pub enum PendingOp {
    CreateProject(Deferred<NewProject>),
    CreateTask(Deferred<NewTask>),
    UpdateTask(Deferred<TaskPatch>),
    SignIn(Deferred<SignInDraft>),
    SignUp(Deferred<SignUpDraft>),
}

impl App {
    /// The form that currently has keyboard focus, if any.
    pub fn active_form_mut(&mut self) -> Option<&mut Form> {
        match self.key_context() {
            KeyContext::Auth => Some(&mut self.auth_form),
            KeyContext::ProjectForm => self.project_form.as_mut(),
            KeyContext::TaskForm => self.task_form.as_mut(),
            KeyContext::EditTask => self.task_edit.as_mut(),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_saving(&self) -> bool {
        self.pending.is_some()
    }

    /// Validates the focused form. Invalid input is reported and nothing else
    /// changes; valid input starts a deferred completion.
    pub fn submit_active_form(&mut self) {
        if self.is_saving() {
            debug!("submit ignored while another submission is pending");
            return;
        }
        let today = self.today;
        let form_latency = self.config.form_latency();
        let auth_latency = self.config.auth_latency();
        let members = self.config.team_members.clone();
        let Some(form) = self.active_form_mut() else {
            return;
        };

        let op = match form.kind {
            FormKind::CreateProject => form
                .project_draft()
                .validate(today)
                .map(|p| PendingOp::CreateProject(Deferred::after(form_latency, p))),
            FormKind::CreateTask => form
                .task_draft(&members)
                .validate(today)
                .map(|t| PendingOp::CreateTask(Deferred::after(form_latency, t))),
            FormKind::EditTask => form
                .task_edit(&members)
                .validate(today)
                .map(|p| PendingOp::UpdateTask(Deferred::after(form_latency, p))),
            FormKind::SignIn => {
                let draft = form.sign_in_draft();
                draft
                    .validate()
                    .map(|()| PendingOp::SignIn(Deferred::after(auth_latency, draft)))
            }
            FormKind::SignUp => {
                let draft = form.sign_up_draft();
                draft
                    .validate()
                    .map(|()| PendingOp::SignUp(Deferred::after(auth_latency, draft)))
            }
        };

        match op {
            Ok(op) => {
                form.saving = true;
                self.pending = Some(op);
                self.poll_pending();
            }
            Err(err) => self.set_error(&err),
        }
    }

    /// Closes the focused form without submitting. Ignored while saving.
    pub fn cancel_active_form(&mut self) {
        if self.is_saving() {
            return;
        }
        match self.key_context() {
            KeyContext::ProjectForm => {
                self.project_form = None;
                self.nav.close_create_form();
            }
            KeyContext::TaskForm => {
                self.task_form = None;
                self.nav.close_task_modal();
            }
            KeyContext::EditTask => self.task_edit = None,
            _ => {}
        }
    }

    /// Applies the pending completion if it has arrived. Returns true when state changed.
    pub fn poll_pending(&mut self) -> bool {
        let Some(mut op) = self.pending.take() else {
            return false;
        };

        let applied = match &mut op {
            PendingOp::CreateProject(d) => d.try_take().map(|p| self.finish_create_project(p)),
            PendingOp::CreateTask(d) => d.try_take().map(|t| self.finish_create_task(t)),
            PendingOp::UpdateTask(d) => d.try_take().map(|p| self.finish_update_task(&p)),
            PendingOp::SignIn(d) => d.try_take().map(|s| self.finish_sign_in(&s)),
            PendingOp::SignUp(d) => d.try_take().map(|s| self.finish_sign_up(&s)),
        };

        if applied.is_none() {
            self.pending = Some(op);
        }
        applied.is_some()
    }

    fn finish_create_project(&mut self, new_project: NewProject) {
        self.nav.project_created(&mut self.store, new_project);
        self.project_form = None;
        self.set_success(
            "Project Created!",
            "Your new project has been created successfully.",
        );
    }

    fn finish_create_task(&mut self, new_task: NewTask) {
        self.task_form = None;
        if self.nav.task_created(&mut self.store, new_task).is_some() {
            self.set_success("Task Created!", "New task has been added to the project.");
        } else {
            self.nav.close_task_modal();
        }
    }

    fn finish_update_task(&mut self, patch: &TaskPatch) {
        self.task_edit = None;
        if self.nav.task_updated(&mut self.store, patch).is_some() {
            self.set_success("Task Updated!", "Task has been updated successfully.");
        }
    }

    fn finish_sign_in(&mut self, draft: &SignInDraft) {
        self.auth.sign_in(draft);
        self.auth_form = Form::sign_in();
        self.set_success("Welcome back!", "You have been successfully logged in.");
    }

    fn finish_sign_up(&mut self, draft: &SignUpDraft) {
        self.auth.sign_up(draft);
        self.auth_form = Form::sign_in();
        self.set_success(
            "Account Created!",
            "Welcome to Synergy! Your account has been created successfully.",
        );
    }
}
