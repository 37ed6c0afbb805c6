use std::io;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::event_loop::handle_key_event;
use super::first_failure;
use super::startup::open_store;
use crate::account::{AccountStore, KeyValueStore, MemoryStore};
use crate::app::App;
use crate::config::{ControlsSettings, Settings};
use crate::progress::ProgressController;
use crate::shell::{NoticeKind, Overlay};
use crate::testing::{FakeMedia, engine_of};

type TestApp = App<FakeMedia, MemoryStore>;

fn app() -> TestApp {
    let mut app = App::new(
        engine_of(3, 9),
        ProgressController::new(0.7),
        AccountStore::new(MemoryStore::default()),
        ControlsSettings::default(),
    );
    app.start();
    app
}

fn press(app: &mut TestApp, code: KeyCode) -> bool {
    handle_key_event(KeyEvent::new(code, KeyModifiers::NONE), app)
}

fn type_text(app: &mut TestApp, text: &str) {
    for c in text.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn notice(app: &TestApp) -> Option<(NoticeKind, &str)> {
    app.shell.notice().map(|n| (n.kind, n.text.as_str()))
}

#[test]
fn q_quits_from_the_player() {
    let mut app = app();
    assert!(press(&mut app, KeyCode::Char('q')));
}

#[test]
fn space_toggles_playback() {
    let mut app = app();
    press(&mut app, KeyCode::Char(' '));
    assert!(app.engine.state().is_playing);
    press(&mut app, KeyCode::Char('p'));
    assert!(!app.engine.state().is_playing);
}

#[test]
fn cursor_and_enter_play_a_row() {
    let mut app = app();
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.engine.state().current_index, 2);
    assert!(app.engine.state().is_playing);
}

#[test]
fn digit_keys_play_featured_slots() {
    let mut app = app();
    press(&mut app, KeyCode::Char('5'));
    assert_eq!(app.engine.state().current_index, 1);
    assert!(app.engine.state().is_playing);

    press(&mut app, KeyCode::Char('0'));
    assert_eq!(app.engine.state().current_index, 1);
}

#[test]
fn toggles_follow_keys() {
    let mut app = app();
    press(&mut app, KeyCode::Char('s'));
    press(&mut app, KeyCode::Char('r'));
    assert!(app.engine.state().is_shuffle);
    assert!(app.engine.state().is_repeat);
}

#[test]
fn volume_keys_step_volume() {
    let mut app = app();
    press(&mut app, KeyCode::Char('-'));
    assert!((app.progress.volume() - 0.65).abs() < 1e-6);
    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Char('+'));
    assert!((app.progress.volume() - 0.75).abs() < 1e-6);
}

#[test]
fn scrubbing_without_duration_reports_error() {
    let mut app = app();
    press(&mut app, KeyCode::Char('L'));
    assert!(matches!(notice(&app), Some((NoticeKind::Error, _))));
}

#[test]
fn form_keys_edit_fields_instead_of_player() {
    let mut app = app();
    press(&mut app, KeyCode::Char('u'));
    assert_eq!(app.shell.overlay(), Overlay::Login);

    assert!(!press(&mut app, KeyCode::Char('q')));
    press(&mut app, KeyCode::Char('x'));
    press(&mut app, KeyCode::Backspace);
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "pw");

    assert_eq!(app.shell.login_form().username, "q");
    assert_eq!(app.shell.login_form().password, "pw");
    assert!(!app.engine.state().is_playing);
}

#[test]
fn signup_then_login_by_keyboard() {
    let mut app = app();
    press(&mut app, KeyCode::Char('u'));
    handle_key_event(
        KeyEvent::new(KeyCode::Char('n'), KeyModifiers::CONTROL),
        &mut app,
    );
    assert_eq!(app.shell.overlay(), Overlay::Signup);

    type_text(&mut app, "erin");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "erin@example.com");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "secret");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.shell.overlay(), Overlay::Login);

    type_text(&mut app, "erin");
    press(&mut app, KeyCode::Tab);
    type_text(&mut app, "secret");
    press(&mut app, KeyCode::Enter);

    assert_eq!(app.shell.overlay(), Overlay::Hidden);
    assert_eq!(app.shell.greeting().as_deref(), Some("Hi, erin"));
}

#[test]
fn esc_closes_form() {
    let mut app = app();
    press(&mut app, KeyCode::Char('u'));
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.shell.overlay(), Overlay::Hidden);
}

#[test]
fn logout_prompt_answers() {
    let mut app = app();
    app.shell.show_user(Some("frank"));

    press(&mut app, KeyCode::Char('o'));
    assert!(app.shell.confirming_logout());
    assert!(!press(&mut app, KeyCode::Char('q')));
    press(&mut app, KeyCode::Char('n'));
    assert!(!app.shell.confirming_logout());
    assert_eq!(app.shell.greeting().as_deref(), Some("Hi, frank"));

    press(&mut app, KeyCode::Char('o'));
    press(&mut app, KeyCode::Char('y'));
    assert_eq!(app.shell.greeting(), None);
}

#[test]
fn open_store_uses_configured_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested").join("storage.json");
    let mut settings = Settings::default();
    settings.storage.path = Some(path.clone());

    let (mut store, warning) = open_store(&settings);
    assert!(warning.is_none());
    store.set("k", "v").unwrap();
    assert!(path.is_file());
}

#[test]
fn open_store_falls_back_to_memory() {
    let dir = tempfile::tempdir().unwrap();
    let mut settings = Settings::default();
    settings.storage.path = Some(dir.path().to_path_buf());

    let (mut store, warning) = open_store(&settings);
    assert!(warning.is_some());
    store.set("k", "v").unwrap();
    assert_eq!(store.get("k").unwrap().as_deref(), Some("v"));
}

#[test]
fn restore_reports_first_failure_after_running_every_step() {
    let result = first_failure([
        ("raw mode", Ok(())),
        ("screen", Err(io::Error::other("screen gone"))),
        ("cursor", Err(io::Error::other("cursor gone"))),
    ]);
    assert_eq!(result.unwrap_err().to_string(), "screen gone");

    assert!(first_failure([("raw mode", Ok(())), ("cursor", Ok(()))]).is_ok());
}
