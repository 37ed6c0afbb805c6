//! Terminal event loop.
//!
//! Each iteration feeds pending media events to the app, redraws, then
//! waits briefly for input. A left click goes to whatever the last frame
//! drew under the pointer.
//!
//! Player keys:
//!
//! | key          | action                          |
//! |--------------|---------------------------------|
//! | `space`/`p`  | play/pause                      |
//! | `h` / `l`    | previous / next track           |
//! | `H` / `L`    | scrub back / forward            |
//! | `j`/`k`      | move the track cursor           |
//! | `enter`      | play the track under the cursor |
//! | `1`-`9`      | play a featured slot            |
//! | `s` / `r`    | toggle shuffle / repeat         |
//! | `+` / `-`    | volume up / down                |
//! | `u`          | open the login form             |
//! | `o`          | log out (asks first)            |
//! | `q`          | quit                            |
//!
//! With a login or signup form open, typing edits the focused field, `tab`
//! and `shift-tab` move between fields, `enter` submits, `ctrl-n` switches
//! between the two forms and `esc` closes. The logout prompt takes `y`/`enter`
//! or `n`/`esc`.

use std::time::Duration;

use crossterm::event::{
    self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::{Terminal, backend::CrosstermBackend};

use crate::account::KeyValueStore;
use crate::app::{App, Element, UiEvent};
use crate::config;
use crate::playback::MediaHandle;
use crate::shell::Overlay;
use crate::ui::{self, HitMap};

use super::startup::Player;

/// Main terminal event loop. Returns `Ok(())` when the user quits.
pub fn run(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    settings: &config::Settings,
    app: &mut Player,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        for media_event in app.engine.media().drain_events() {
            app.on_media_event(media_event);
        }

        let mut hits = HitMap::new();
        terminal.draw(|f| hits = ui::draw(f, app, &settings.ui, &settings.controls))?;

        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if handle_key_event(key, app) {
                        break;
                    }
                }
                Event::Mouse(mouse) => handle_mouse_event(mouse, &hits, app),
                _ => {}
            }
        }
    }

    Ok(())
}

fn handle_mouse_event<M: MediaHandle, S: KeyValueStore>(
    mouse: MouseEvent,
    hits: &HitMap,
    app: &mut App<M, S>,
) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
        return;
    }
    if let Some(ui_event) = hits.hit(mouse.column, mouse.row) {
        app.dispatch(ui_event);
    }
}

/// Apply one key press. Returns `true` when the user asked to quit.
pub(super) fn handle_key_event<M: MediaHandle, S: KeyValueStore>(
    key: KeyEvent,
    app: &mut App<M, S>,
) -> bool {
    if app.shell.confirming_logout() {
        match key.code {
            KeyCode::Char('y') | KeyCode::Enter => app.dispatch(UiEvent::click(Element::ConfirmYes)),
            KeyCode::Char('n') | KeyCode::Esc => app.dispatch(UiEvent::click(Element::ConfirmNo)),
            _ => {}
        }
        return false;
    }

    if app.shell.overlay().is_visible() {
        handle_form_key(key, app);
        return false;
    }

    let click = |element| UiEvent::click(element);
    match key.code {
        KeyCode::Char('q') => return true,
        KeyCode::Char(' ') | KeyCode::Char('p') => app.dispatch(click(Element::Play)),
        KeyCode::Char('h') => app.dispatch(click(Element::Prev)),
        KeyCode::Char('l') => app.dispatch(click(Element::Next)),
        KeyCode::Char('H') | KeyCode::Char('L') => {
            if let Err(e) = app.scrub(key.code == KeyCode::Char('L')) {
                app.report(e);
            }
        }
        KeyCode::Char('j') | KeyCode::Down => app.cursor_down(),
        KeyCode::Char('k') | KeyCode::Up => app.cursor_up(),
        KeyCode::Enter => {
            let row = app.cursor;
            app.dispatch(click(Element::TrackRow(row)));
        }
        KeyCode::Char(c @ '1'..='9') => {
            let slot = c as usize - '1' as usize;
            app.dispatch(click(Element::QuickPick(slot)));
        }
        KeyCode::Char('s') => app.dispatch(click(Element::Shuffle)),
        KeyCode::Char('r') => app.dispatch(click(Element::Repeat)),
        KeyCode::Char('+') | KeyCode::Char('=') => app.nudge_volume(true),
        KeyCode::Char('-') => app.nudge_volume(false),
        KeyCode::Char('u') => app.dispatch(click(Element::UserIcon)),
        KeyCode::Char('o') => app.dispatch(click(Element::Greeting)),
        _ => {}
    }
    false
}

fn handle_form_key<M: MediaHandle, S: KeyValueStore>(key: KeyEvent, app: &mut App<M, S>) {
    let (submit, switch) = match app.shell.overlay() {
        Overlay::Hidden => return,
        Overlay::Login => (Element::LoginSubmit, Element::ShowSignup),
        Overlay::Signup => (Element::SignupSubmit, Element::ShowLogin),
    };

    match key.code {
        KeyCode::Esc => app.dispatch(UiEvent::click(Element::CloseOverlay)),
        KeyCode::Enter => app.dispatch(UiEvent::click(submit)),
        KeyCode::Tab => app.shell.cycle_focus(true),
        KeyCode::BackTab => app.shell.cycle_focus(false),
        KeyCode::Char('n') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch(UiEvent::click(switch));
        }
        KeyCode::Backspace => {
            if let Some(field) = app.shell.focused() {
                app.dispatch(UiEvent::erase(field));
            }
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            if let Some(field) = app.shell.focused() {
                app.dispatch(UiEvent::input(field, c));
            }
        }
        _ => {}
    }
}
