//! Application model: `App` and its error type.

use std::time::Duration;

use thiserror::Error;
use tracing::debug;

use crate::account::{AccountError, AccountStore, KeyValueStore};
use crate::config::ControlsSettings;
use crate::playback::{Direction, MediaEvent, MediaHandle, PlaybackEngine, PlayerError, TrackEnd};
use crate::progress::{Pointer, ProgressController};
use crate::shell::{NoticeKind, Shell};

#[derive(Debug, Error)]
pub enum AppError {
    #[error(transparent)]
    Player(#[from] PlayerError),
    #[error(transparent)]
    Account(#[from] AccountError),
}

/// The main application model. Owns every piece of mutable state; the
/// runtime only feeds it events and draws it.
pub struct App<M, S> {
    pub engine: PlaybackEngine<M>,
    pub progress: ProgressController,
    pub accounts: AccountStore<S>,
    pub shell: Shell,
    /// Keyboard cursor in the track list.
    pub cursor: usize,
    controls: ControlsSettings,
}

impl<M: MediaHandle, S: KeyValueStore> App<M, S> {
    pub fn new(
        engine: PlaybackEngine<M>,
        progress: ProgressController,
        accounts: AccountStore<S>,
        controls: ControlsSettings,
    ) -> Self {
        Self {
            cursor: engine.state().current_index,
            engine,
            progress,
            accounts,
            shell: Shell::new(),
            controls,
        }
    }

    /// Apply the startup volume and restore a saved session.
    pub fn start(&mut self) {
        self.engine.set_volume(self.progress.volume());
        match self.accounts.current_user() {
            Ok(user) => self.shell.show_user(user.as_deref()),
            Err(e) => self.report(e.into()),
        }
    }

    /// Show `err` on the notice line.
    pub fn report(&mut self, err: AppError) {
        debug!(error = %err, "reporting to user");
        self.shell.notify(NoticeKind::Error, err.to_string());
    }

    fn follow_playback(&mut self) {
        self.cursor = self.engine.state().current_index;
    }

    /// Handle an autonomous notification from the media subsystem.
    pub fn on_media_event(&mut self, event: MediaEvent) {
        match event {
            MediaEvent::DurationKnown(d) => self.progress.on_duration_known(d),
            MediaEvent::TimeUpdate(pos) => self.progress.on_time_update(pos),
            MediaEvent::Ended => match self.engine.on_track_ended() {
                TrackEnd::Restarted => self.progress.on_time_update(Duration::ZERO),
                TrackEnd::Advanced(_) => {
                    self.progress.reset_track();
                    self.follow_playback();
                }
            },
            MediaEvent::LoadError(reason) => {
                self.engine.on_load_error(&reason);
                self.progress.reset_track();
                self.report(PlayerError::MediaLoad(reason).into());
            }
        }
    }

    pub fn toggle_play_pause(&mut self) -> Result<(), AppError> {
        self.engine.toggle_play_pause()?;
        Ok(())
    }

    pub fn advance(&mut self, direction: Direction) {
        self.engine.advance(direction);
        self.progress.reset_track();
        self.follow_playback();
    }

    /// Track-list pick: always loads and plays.
    pub fn select_row(&mut self, index: usize) -> Result<(), AppError> {
        self.engine.select_track(index)?;
        self.progress.reset_track();
        self.follow_playback();
        Ok(())
    }

    /// Featured shortcut: slot `n` plays entry `n % len`.
    pub fn quick_pick(&mut self, slot: usize) -> Result<(), AppError> {
        let index = slot % self.engine.catalog().len();
        self.select_row(index)
    }

    pub fn seek_click(&mut self, pointer: Pointer) -> Result<(), AppError> {
        let target = self.progress.seek_target(pointer)?;
        self.engine.seek(target)?;
        self.progress.on_time_update(target);
        Ok(())
    }

    /// Keyboard scrubbing by the configured number of seconds.
    pub fn scrub(&mut self, forward: bool) -> Result<(), AppError> {
        let secs = i64::try_from(self.controls.scrub_seconds).unwrap_or(i64::MAX);
        let target = self
            .progress
            .scrub_target(if forward { secs } else { -secs })?;
        self.engine.seek(target)?;
        self.progress.on_time_update(target);
        Ok(())
    }

    pub fn volume_click(&mut self, pointer: Pointer) {
        let v = self.progress.volume_from_click(pointer);
        self.engine.set_volume(v);
    }

    pub fn nudge_volume(&mut self, up: bool) {
        let step = self.controls.volume_step;
        let v = self.progress.nudge_volume(if up { step } else { -step });
        self.engine.set_volume(v);
    }

    pub fn cursor_down(&mut self) {
        let len = self.engine.catalog().len();
        self.cursor = (self.cursor + 1) % len;
    }

    pub fn cursor_up(&mut self) {
        let len = self.engine.catalog().len();
        self.cursor = (self.cursor + len - 1) % len;
    }

    pub fn submit_login(&mut self) -> Result<(), AppError> {
        let form = self.shell.login_form().clone();
        let user = self.accounts.login(&form.username, &form.password)?;
        self.shell.show_user(Some(&user));
        self.shell.close();
        self.shell.clear_login();
        self.shell
            .notify(NoticeKind::Info, format!("Login successful! Welcome {user}"));
        Ok(())
    }

    pub fn submit_signup(&mut self) -> Result<(), AppError> {
        let form = self.shell.signup_form().clone();
        self.accounts
            .signup(&form.username, &form.email, &form.password)?;
        self.shell.clear_signup();
        self.shell.switch_to_login();
        self.shell
            .notify(NoticeKind::Info, "Sign up successful! Please login.");
        Ok(())
    }

    pub fn answer_logout(&mut self, confirmed: bool) -> Result<(), AppError> {
        if self.shell.answer_logout(confirmed) {
            self.accounts.logout()?;
            self.shell.show_user(None);
            self.shell.notify(NoticeKind::Info, "Logged out successfully!");
        }
        Ok(())
    }
}
