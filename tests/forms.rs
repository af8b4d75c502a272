mod helpers;

use crossterm::event::{KeyCode, KeyModifiers};
use helpers::TestContext;
use synergy::app::KeyContext;
use synergy::model::{ProjectStatus, TaskStatus};
use synergy::navigation::{Screen, ViewName};

#[test]
fn create_project_appends_and_closes_form() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Char('c'));
    assert_eq!(ctx.app.key_context(), KeyContext::ProjectForm);
    assert_eq!(ctx.app.nav.current_screen(), Screen::CreateProjectForm);

    ctx.type_str("Launch Plan");
    ctx.tab(1);
    ctx.type_str("Go to market");
    ctx.tab(1);
    ctx.type_str("web, mobile");
    ctx.press(KeyCode::Enter);

    assert_eq!(ctx.app.store.projects().len(), 4);
    let project = ctx.app.store.projects().last().unwrap();
    assert_eq!(project.name, "Launch Plan");
    assert_eq!(project.progress, 0);
    assert_eq!(project.total_tasks, 0);
    assert_eq!(project.completed_tasks, 0);
    assert_eq!(project.team_size, 1);
    assert_eq!(project.status, ProjectStatus::Active);

    assert!(!ctx.app.nav.create_form_visible());
    assert!(ctx.app.project_form.is_none());
    assert!(ctx.status_contains("Project Created!"));
    assert!(ctx.screen_contains("Launch Plan"));
    ctx.verify_invariants();
}

#[test]
fn missing_fields_leave_everything_unchanged() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Char('c'));
    let nav_before = ctx.app.nav.state().clone();

    ctx.press(KeyCode::Enter);

    assert!(ctx.status_contains("Missing Information"));
    assert!(ctx.status_contains("name, description"));
    assert_eq!(ctx.app.store.projects().len(), 3);
    assert_eq!(ctx.app.nav.state(), &nav_before);
    assert_eq!(ctx.app.key_context(), KeyContext::ProjectForm);
    ctx.verify_invariants();
}

#[test]
fn team_size_must_be_positive() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Char('c'));
    ctx.type_str("Launch Plan");
    ctx.tab(1);
    ctx.type_str("Go to market");
    ctx.tab(5);
    ctx.press(KeyCode::Backspace);
    ctx.type_str("0");
    ctx.press(KeyCode::Enter);

    assert!(ctx.status_contains("Invalid Team Size"));
    assert_eq!(ctx.app.store.projects().len(), 3);
    ctx.verify_invariants();
}

#[test]
fn team_size_field_only_takes_digits() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Char('c'));
    ctx.tab(6);
    ctx.type_str("x5");

    let form = ctx.app.project_form.as_ref().unwrap();
    assert_eq!(form.text("Team Size"), "15");
    ctx.verify_invariants();
}

#[test]
fn typing_q_in_a_form_does_not_quit() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Char('c'));
    ctx.type_str("quarterly");

    assert!(!ctx.app.should_quit);
    assert!(ctx.screen_contains("quarterly"));
    ctx.verify_invariants();
}

#[test]
fn escape_closes_project_form() {
    let mut ctx = TestContext::new();
    ctx.press(KeyCode::Char('c'));
    ctx.type_str("Draft");
    ctx.press(KeyCode::Esc);

    assert!(!ctx.app.nav.create_form_visible());
    assert!(ctx.app.project_form.is_none());
    assert_eq!(ctx.app.store.projects().len(), 3);
    assert_eq!(ctx.app.key_context(), KeyContext::Dashboard);
    ctx.verify_invariants();
}

fn fill_task_form(ctx: &mut TestContext, title: &str, due: &str) {
    ctx.type_str(title);
    ctx.tab(2);
    ctx.press(KeyCode::Right);
    ctx.tab(3);
    ctx.type_str(due);
}

#[test]
fn create_task_appends_to_selected_project() {
    let mut ctx = TestContext::new();
    ctx.open_project(0);
    let project_id = ctx.app.nav.selected_project().unwrap().id.clone();

    ctx.press(KeyCode::Char('a'));
    assert_eq!(ctx.app.key_context(), KeyContext::TaskForm);
    assert!(ctx.screen_contains("Select a team member"));

    fill_task_form(&mut ctx, "Write release notes", "2026-02-01");
    ctx.press(KeyCode::Enter);

    let tasks = ctx.app.store.tasks_for(&project_id);
    assert_eq!(tasks.len(), 5);
    let task = tasks.last().unwrap();
    assert_eq!(task.title, "Write release notes");
    assert_eq!(task.assignee.name, "Alice Johnson");
    assert_eq!(task.status, TaskStatus::Todo);
    assert_eq!(task.project_id, project_id);

    assert!(!ctx.app.nav.task_modal_open());
    assert!(ctx.app.nav.selected_task().is_none());
    assert_eq!(ctx.app.nav.view(), ViewName::Project);
    assert!(ctx.status_contains("Task Created!"));
    assert!(ctx.screen_contains("Write release notes"));
    ctx.verify_invariants();
}

#[test]
fn task_without_assignee_or_date_is_rejected() {
    let mut ctx = TestContext::new();
    ctx.open_project(0);
    let project_id = ctx.app.nav.selected_project().unwrap().id.clone();

    ctx.press(KeyCode::Char('a'));
    ctx.type_str("Half done");
    ctx.press(KeyCode::Enter);

    assert!(ctx.status_contains("assignee, due date"));
    assert_eq!(ctx.app.store.tasks_for(&project_id).len(), 4);
    assert!(ctx.app.nav.task_modal_open());
    ctx.verify_invariants();
}

#[test]
fn task_with_unreadable_date_is_rejected() {
    let mut ctx = TestContext::new();
    ctx.open_project(0);
    ctx.press(KeyCode::Char('a'));
    fill_task_form(&mut ctx, "Retro", "soon");
    ctx.press(KeyCode::Enter);

    assert!(ctx.status_contains("Invalid Date"));
    assert!(ctx.app.nav.task_modal_open());
    ctx.verify_invariants();
}

#[test]
fn escape_closes_task_modal() {
    let mut ctx = TestContext::new();
    ctx.open_project(0);
    ctx.press(KeyCode::Char('a'));
    ctx.press(KeyCode::Esc);

    assert!(!ctx.app.nav.task_modal_open());
    assert!(ctx.app.task_form.is_none());
    assert_eq!(ctx.app.key_context(), KeyContext::Project);
    ctx.verify_invariants();
}

#[test]
fn edit_task_updates_store_and_selection() {
    let mut ctx = TestContext::new();
    ctx.open_project(0);
    ctx.press(KeyCode::Enter);
    let original = ctx.app.nav.selected_task().unwrap().clone();

    ctx.press(KeyCode::Char('e'));
    assert_eq!(ctx.app.key_context(), KeyContext::EditTask);
    assert!(ctx.screen_contains("Design user interface mockups"));

    ctx.press_with_modifiers(KeyCode::Char('u'), KeyModifiers::CONTROL);
    ctx.type_str("Polish mockups");
    ctx.tab(4);
    ctx.press(KeyCode::Left);
    ctx.press(KeyCode::Enter);

    let selected = ctx.app.nav.selected_task().unwrap().clone();
    assert_eq!(selected.title, "Polish mockups");
    assert_eq!(selected.status, TaskStatus::Progress);
    assert_eq!(selected.description, original.description);
    assert_eq!(selected.assignee.name, original.assignee.name);
    assert_eq!(
        ctx.app.store.task(&original.project_id, &original.id),
        Some(&selected)
    );

    assert!(ctx.app.task_edit.is_none());
    assert!(ctx.status_contains("Task Updated!"));
    assert!(ctx.screen_contains("In Progress"));
    ctx.verify_invariants();
}

#[test]
fn edit_with_empty_title_keeps_task() {
    let mut ctx = TestContext::new();
    ctx.open_project(0);
    ctx.press(KeyCode::Enter);
    let original = ctx.app.nav.selected_task().unwrap().clone();

    ctx.press(KeyCode::Char('e'));
    ctx.press_with_modifiers(KeyCode::Char('u'), KeyModifiers::CONTROL);
    ctx.press(KeyCode::Enter);

    assert!(ctx.status_contains("Missing Information"));
    assert_eq!(ctx.app.nav.selected_task(), Some(&original));
    assert_eq!(ctx.app.key_context(), KeyContext::EditTask);

    ctx.press(KeyCode::Esc);
    assert_eq!(ctx.app.key_context(), KeyContext::Task);
    assert_eq!(ctx.app.nav.selected_task(), Some(&original));
    ctx.verify_invariants();
}

/// Text of the detail row under the dashboard card for `name`.
fn card_detail(ctx: &TestContext, name: &str) -> String {
    let lines = ctx.render_current();
    let header = lines
        .iter()
        .position(|line| line.contains(&format!("● {name}")))
        .unwrap_or_else(|| panic!("no card for {name}"));
    lines[header + 1].clone()
}

#[test]
fn new_task_shows_in_card_count() {
    let mut ctx = TestContext::new();
    ctx.create_project("Launch Plan");
    assert!(card_detail(&ctx, "Launch Plan").contains("0/0 tasks"));

    ctx.press(KeyCode::Char('G'));
    ctx.press(KeyCode::Enter);
    ctx.create_task("Kickoff meeting");
    ctx.press(KeyCode::Esc);

    assert_eq!(ctx.app.nav.view(), ViewName::Dashboard);
    let detail = card_detail(&ctx, "Launch Plan");
    assert!(detail.contains("0/1 tasks"), "{detail}");
    assert!(detail.contains("  0%"), "{detail}");
    ctx.verify_invariants();
}

#[test]
fn finishing_a_task_moves_card_progress() {
    let mut ctx = TestContext::new();
    assert!(card_detail(&ctx, "Mobile App Redesign").contains("1/4 tasks"));

    ctx.open_project(0);
    ctx.press(KeyCode::Char('j'));
    ctx.press(KeyCode::Char('j'));
    ctx.press(KeyCode::Enter);
    ctx.press(KeyCode::Char('e'));
    ctx.tab(4);
    ctx.press(KeyCode::Right);
    ctx.press(KeyCode::Right);
    ctx.press(KeyCode::Enter);
    assert_eq!(
        ctx.app.nav.selected_task().map(|t| t.status),
        Some(TaskStatus::Done)
    );

    ctx.press(KeyCode::Esc);
    ctx.press(KeyCode::Esc);
    assert_eq!(ctx.app.nav.view(), ViewName::Dashboard);
    let detail = card_detail(&ctx, "Mobile App Redesign");
    assert!(detail.contains("2/4 tasks"), "{detail}");
    assert!(detail.contains(" 50%"), "{detail}");
    ctx.verify_invariants();
}
