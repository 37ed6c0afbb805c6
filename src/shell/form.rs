use super::modal::Overlay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormField {
    LoginUsername,
    LoginPassword,
    SignupUsername,
    SignupEmail,
    SignupPassword,
}

impl FormField {
    /// Fields of `overlay`, in tab order.
    pub fn of(overlay: Overlay) -> &'static [FormField] {
        match overlay {
            Overlay::Hidden => &[],
            Overlay::Login => &[Self::LoginUsername, Self::LoginPassword],
            Overlay::Signup => &[Self::SignupUsername, Self::SignupEmail, Self::SignupPassword],
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::LoginUsername | Self::SignupUsername => "Username",
            Self::LoginPassword | Self::SignupPassword => "Password",
            Self::SignupEmail => "Email",
        }
    }

    pub fn is_secret(self) -> bool {
        matches!(self, Self::LoginPassword | Self::SignupPassword)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SignupForm {
    pub username: String,
    pub email: String,
    pub password: String,
}
