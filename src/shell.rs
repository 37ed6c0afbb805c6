//! Shell state around the player: login/signup overlays, their form
//! buffers, the logout confirmation, the header greeting and the notice line.

mod form;
mod modal;

pub use form::{FormField, LoginForm, SignupForm};
pub use modal::Overlay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Error,
}

/// A one-line message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub text: String,
}

#[derive(Debug, Clone, Default)]
pub struct Shell {
    overlay: Overlay,
    login: LoginForm,
    signup: SignupForm,
    focus: Option<FormField>,
    confirm_logout: bool,
    user: Option<String>,
    notice: Option<Notice>,
}

impl Shell {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn overlay(&self) -> Overlay {
        self.overlay
    }

    fn set_overlay(&mut self, overlay: Overlay) {
        if overlay != self.overlay {
            self.overlay = overlay;
            self.focus = FormField::of(overlay).first().copied();
        }
    }

    pub fn open_login(&mut self) {
        self.set_overlay(self.overlay.open_login());
    }

    pub fn open_signup(&mut self) {
        self.set_overlay(self.overlay.open_signup());
    }

    pub fn switch_to_login(&mut self) {
        self.set_overlay(self.overlay.switch_to_login());
    }

    pub fn close(&mut self) {
        self.set_overlay(self.overlay.close());
    }

    pub fn login_form(&self) -> &LoginForm {
        &self.login
    }

    pub fn signup_form(&self) -> &SignupForm {
        &self.signup
    }

    pub fn clear_login(&mut self) {
        self.login = LoginForm::default();
    }

    pub fn clear_signup(&mut self) {
        self.signup = SignupForm::default();
    }

    pub fn focused(&self) -> Option<FormField> {
        self.focus
    }

    /// Focus `field` if it belongs to the visible overlay.
    pub fn focus(&mut self, field: FormField) {
        if FormField::of(self.overlay).contains(&field) {
            self.focus = Some(field);
        }
    }

    /// Move focus forward (or back) through the visible form, wrapping.
    pub fn cycle_focus(&mut self, forward: bool) {
        let fields = FormField::of(self.overlay);
        if fields.is_empty() {
            return;
        }
        let pos = self
            .focus
            .and_then(|f| fields.iter().position(|&x| x == f))
            .unwrap_or(0);
        let next = if forward {
            (pos + 1) % fields.len()
        } else {
            (pos + fields.len() - 1) % fields.len()
        };
        self.focus = Some(fields[next]);
    }

    fn field_mut(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::LoginUsername => &mut self.login.username,
            FormField::LoginPassword => &mut self.login.password,
            FormField::SignupUsername => &mut self.signup.username,
            FormField::SignupEmail => &mut self.signup.email,
            FormField::SignupPassword => &mut self.signup.password,
        }
    }

    pub fn field_value(&self, field: FormField) -> &str {
        match field {
            FormField::LoginUsername => &self.login.username,
            FormField::LoginPassword => &self.login.password,
            FormField::SignupUsername => &self.signup.username,
            FormField::SignupEmail => &self.signup.email,
            FormField::SignupPassword => &self.signup.password,
        }
    }

    /// Type into the focused field.
    pub fn input(&mut self, c: char) {
        if let Some(field) = self.focus {
            self.field_mut(field).push(c);
        }
    }

    /// Delete the last character of the focused field.
    pub fn erase(&mut self) {
        if let Some(field) = self.focus {
            self.field_mut(field).pop();
        }
    }

    /// Reflect the logged-in user (or its absence) in the header.
    pub fn show_user(&mut self, user: Option<&str>) {
        self.user = user.map(str::to_string);
    }

    pub fn greeting(&self) -> Option<String> {
        self.user.as_ref().map(|u| format!("Hi, {u}"))
    }

    /// Ask for confirmation before logging out. Only offered while someone
    /// is logged in.
    pub fn request_logout(&mut self) -> bool {
        self.confirm_logout = self.user.is_some();
        self.confirm_logout
    }

    pub fn confirming_logout(&self) -> bool {
        self.confirm_logout
    }

    /// Resolve the pending confirmation. Returns whether logout should go ahead.
    pub fn answer_logout(&mut self, confirmed: bool) -> bool {
        let pending = std::mem::take(&mut self.confirm_logout);
        pending && confirmed
    }

    pub fn notify(&mut self, kind: NoticeKind, text: impl Into<String>) {
        self.notice = Some(Notice {
            kind,
            text: text.into(),
        });
    }

    pub fn notice(&self) -> Option<&Notice> {
        self.notice.as_ref()
    }

    pub fn clear_notice(&mut self) {
        self.notice = None;
    }
}
