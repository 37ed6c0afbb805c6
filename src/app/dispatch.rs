//! Typed dispatch from (UI element, event kind) to handler.
//!
//! The UI resolves input into a `UiEvent`; nothing here knows about the
//! terminal, so every handler can be driven directly from tests.

use crate::account::KeyValueStore;
use crate::playback::{Direction, MediaHandle};
use crate::progress::Pointer;
use crate::shell::FormField;

use super::model::{App, AppError};

/// Everything a user can interact with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Element {
    Play,
    Prev,
    Next,
    Shuffle,
    Repeat,
    ProgressBar,
    VolumeBar,
    TrackRow(usize),
    /// A featured shortcut slot; slots wrap around the catalog.
    QuickPick(usize),
    /// Opens the login overlay.
    UserIcon,
    /// The "Hi, <user>" label; clicking it offers logout.
    Greeting,
    Field(FormField),
    LoginSubmit,
    SignupSubmit,
    ShowSignup,
    ShowLogin,
    CloseOverlay,
    /// Inside an overlay but not on any control.
    OverlayBody,
    /// Outside the visible overlay.
    Backdrop,
    ConfirmYes,
    ConfirmNo,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum EventKind {
    Click(Pointer),
    Input(char),
    Erase,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiEvent {
    pub element: Element,
    pub kind: EventKind,
}

impl UiEvent {
    /// A click where the pointer position does not matter.
    pub fn click(element: Element) -> Self {
        Self::click_at(element, Pointer::new(0.0, 1.0))
    }

    pub fn click_at(element: Element, pointer: Pointer) -> Self {
        Self {
            element,
            kind: EventKind::Click(pointer),
        }
    }

    pub fn input(field: FormField, c: char) -> Self {
        Self {
            element: Element::Field(field),
            kind: EventKind::Input(c),
        }
    }

    pub fn erase(field: FormField) -> Self {
        Self {
            element: Element::Field(field),
            kind: EventKind::Erase,
        }
    }
}

impl<M: MediaHandle, S: KeyValueStore> App<M, S> {
    /// Route one UI event. Failures become a notice; nothing is fatal.
    pub fn dispatch(&mut self, event: UiEvent) {
        if matches!(event.kind, EventKind::Click(_)) {
            self.shell.clear_notice();
        }
        if let Err(e) = self.route(event) {
            self.report(e);
        }
    }

    fn route(&mut self, event: UiEvent) -> Result<(), AppError> {
        use EventKind::{Click, Erase, Input};

        match (event.element, event.kind) {
            (Element::Play, Click(_)) => self.toggle_play_pause()?,
            (Element::Prev, Click(_)) => self.advance(Direction::Previous),
            (Element::Next, Click(_)) => self.advance(Direction::Next),
            (Element::Shuffle, Click(_)) => {
                self.engine.toggle_shuffle();
            }
            (Element::Repeat, Click(_)) => {
                self.engine.toggle_repeat();
            }
            (Element::ProgressBar, Click(p)) => self.seek_click(p)?,
            (Element::VolumeBar, Click(p)) => self.volume_click(p),
            (Element::TrackRow(i), Click(_)) => self.select_row(i)?,
            (Element::QuickPick(slot), Click(_)) => self.quick_pick(slot)?,
            (Element::UserIcon, Click(_)) => self.shell.open_login(),
            (Element::Greeting, Click(_)) => {
                self.shell.request_logout();
            }
            (Element::Field(f), Click(_)) => self.shell.focus(f),
            (Element::Field(f), Input(c)) => {
                self.shell.focus(f);
                self.shell.input(c);
            }
            (Element::Field(f), Erase) => {
                self.shell.focus(f);
                self.shell.erase();
            }
            (Element::LoginSubmit, Click(_)) => self.submit_login()?,
            (Element::SignupSubmit, Click(_)) => self.submit_signup()?,
            (Element::ShowSignup, Click(_)) => self.shell.open_signup(),
            (Element::ShowLogin, Click(_)) => self.shell.switch_to_login(),
            (Element::CloseOverlay | Element::Backdrop, Click(_)) => self.shell.close(),
            (Element::ConfirmYes, Click(_)) => self.answer_logout(true)?,
            (Element::ConfirmNo, Click(_)) => self.answer_logout(false)?,
            _ => {}
        }
        Ok(())
    }
}
