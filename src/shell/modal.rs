/// Which overlay, if any, sits above the player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Overlay {
    #[default]
    Hidden,
    Login,
    Signup,
}

impl Overlay {
    /// hidden -> login
    pub fn open_login(self) -> Self {
        match self {
            Self::Hidden => Self::Login,
            other => other,
        }
    }

    /// login -> signup
    pub fn open_signup(self) -> Self {
        match self {
            Self::Login => Self::Signup,
            other => other,
        }
    }

    /// signup -> login
    pub fn switch_to_login(self) -> Self {
        match self {
            Self::Signup => Self::Login,
            other => other,
        }
    }

    /// any -> hidden
    pub fn close(self) -> Self {
        Self::Hidden
    }

    pub fn is_visible(self) -> bool {
        self != Self::Hidden
    }
}
