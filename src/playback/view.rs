use std::path::PathBuf;

/// Accent color used for active toggle controls.
pub const ACCENT: &str = "#1db954";
/// Fill behind an active toggle control.
pub const ACTIVE_FILL: &str = "#282828";
/// Foreground of an inactive toggle control.
pub const NEUTRAL: &str = "#b3b3b3";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayIcon {
    Play,
    Pause,
}

/// Visual state of the shuffle and repeat buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ControlStyle {
    Active,
    #[default]
    Inactive,
}

impl ControlStyle {
    pub fn from_flag(on: bool) -> Self {
        if on { Self::Active } else { Self::Inactive }
    }

    pub fn color(self) -> &'static str {
        match self {
            Self::Active => ACCENT,
            Self::Inactive => NEUTRAL,
        }
    }

    /// `None` means a transparent background.
    pub fn background(self) -> Option<&'static str> {
        match self {
            Self::Active => Some(ACTIVE_FILL),
            Self::Inactive => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CoverArt {
    File(PathBuf),
    Placeholder(String),
}

/// Title, artist and cover of the loaded track.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NowPlaying {
    pub title: String,
    pub artist: String,
    pub cover: CoverArt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransportView {
    pub play_icon: PlayIcon,
    pub shuffle: ControlStyle,
    pub repeat: ControlStyle,
}

impl Default for TransportView {
    fn default() -> Self {
        Self {
            play_icon: PlayIcon::Play,
            shuffle: ControlStyle::Inactive,
            repeat: ControlStyle::Inactive,
        }
    }
}
