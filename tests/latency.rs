mod helpers;

use std::time::Duration;

use crossterm::event::KeyCode;
use helpers::{TestContext, instant_config};
use synergy::app::KeyContext;
use synergy::auth::AuthProvider;
use synergy::config::Config;

fn slow_config() -> Config {
    Config {
        simulated_latency_ms: 800,
        auth_latency_ms: 1000,
        user_name: Some("Dana Scully".to_string()),
        user_email: Some("dana@example.com".to_string()),
        ..instant_config()
    }
}

async fn settle(ms: u64) {
    tokio::time::sleep(Duration::from_millis(ms)).await;
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn project_form_waits_out_latency() {
    let mut ctx = TestContext::with_config(slow_config());
    ctx.press(KeyCode::Char('c'));
    ctx.type_str("Launch Plan");
    ctx.tab(1);
    ctx.type_str("Go to market");
    ctx.press(KeyCode::Enter);

    assert!(ctx.app.is_saving());
    assert!(ctx.app.project_form.as_ref().unwrap().saving);
    assert!(ctx.footer_text().contains("SAVING"));
    assert_eq!(ctx.app.store.projects().len(), 3);

    settle(400).await;
    assert!(!ctx.app.poll_pending());
    assert_eq!(ctx.app.store.projects().len(), 3);

    settle(500).await;
    assert!(ctx.app.poll_pending());
    assert!(!ctx.app.is_saving());
    assert_eq!(ctx.app.store.projects().len(), 4);
    assert!(!ctx.app.nav.create_form_visible());
    assert!(ctx.status_contains("Project Created!"));
    ctx.verify_invariants();
}

#[tokio::test(start_paused = true)]
async fn escape_is_ignored_while_saving() {
    let mut ctx = TestContext::with_config(slow_config());
    ctx.open_project(0);
    ctx.press(KeyCode::Char('a'));
    ctx.type_str("Retro");
    ctx.tab(2);
    ctx.press(KeyCode::Right);
    ctx.tab(3);
    ctx.type_str("2026-02-01");
    ctx.press(KeyCode::Enter);

    ctx.press(KeyCode::Esc);
    assert_eq!(ctx.app.key_context(), KeyContext::TaskForm);
    assert!(ctx.app.nav.task_modal_open());

    settle(900).await;
    ctx.app.poll_pending();
    assert!(!ctx.app.nav.task_modal_open());
    assert!(ctx.status_contains("Task Created!"));
    ctx.verify_invariants();
}

#[tokio::test(start_paused = true)]
async fn second_submit_is_ignored_while_saving() {
    let mut ctx = TestContext::with_config(slow_config());
    ctx.press(KeyCode::Char('c'));
    ctx.type_str("Launch Plan");
    ctx.tab(1);
    ctx.type_str("Go to market");
    ctx.press(KeyCode::Enter);
    ctx.press(KeyCode::Enter);

    settle(900).await;
    ctx.app.poll_pending();
    assert_eq!(ctx.app.store.projects().len(), 4);
    ctx.verify_invariants();
}

#[tokio::test(start_paused = true)]
async fn sign_in_completes_after_auth_latency() {
    let mut ctx = TestContext::with_config(Config {
        user_name: None,
        user_email: None,
        ..slow_config()
    });
    ctx.type_str("fox@example.com");
    ctx.tab(1);
    ctx.type_str("pw");
    ctx.press(KeyCode::Enter);

    settle(900).await;
    assert!(!ctx.app.poll_pending());
    assert!(!ctx.app.auth.is_signed_in());

    settle(200).await;
    assert!(ctx.app.poll_pending());
    assert!(ctx.app.auth.is_signed_in());
    assert!(ctx.status_contains("Welcome back!"));
    ctx.verify_invariants();
}
