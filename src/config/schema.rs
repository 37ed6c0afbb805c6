use std::path::PathBuf;

use serde::Deserialize;

use crate::catalog::Track;

/// Top-level application settings loaded from `config.toml`.
///
/// File format: TOML
/// Default path (Linux/XDG): `$XDG_CONFIG_HOME/cadenza/config.toml` or `~/.config/cadenza/config.toml`
///
/// Precedence (highest wins):
/// 1) Environment variables (prefix `CADENZA__`, `__` as nested separator)
/// 2) Config file (if present)
/// 3) Struct defaults
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub audio: AudioSettings,
    pub catalog: CatalogSettings,
    pub storage: StorageSettings,
    pub ui: UiSettings,
    pub controls: ControlsSettings,
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    /// Volume applied at startup, as a fraction in `[0, 1]`.
    pub default_volume: f32,
    /// Fade-out duration when quitting (milliseconds).
    /// Set to 0 to stop immediately.
    pub quit_fade_out_ms: u64,
    /// How often the audio thread reports the playback position (milliseconds).
    pub tick_ms: u64,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            default_volume: 0.7,
            quit_fade_out_ms: 300,
            tick_ms: 250,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct CatalogSettings {
    /// Directory that relative track and cover paths are resolved against.
    pub assets_dir: PathBuf,
    /// Replaces the built-in catalog when non-empty.
    ///
    /// Example:
    /// ```toml
    /// [[catalog.tracks]]
    /// title = "rock"
    /// artist = "coastal"
    /// file = "song3.mp3"
    /// cover = "cover3.jpg"
    /// duration = "1:19"
    /// ```
    pub tracks: Vec<Track>,
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            assets_dir: PathBuf::from("assets"),
            tracks: Vec::new(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct StorageSettings {
    /// Location of the key-value file holding accounts and the session.
    /// Defaults to `$XDG_DATA_HOME/cadenza/storage.json`.
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// The text rendered inside the top header box.
    pub header_text: String,
    /// Cover reference shown when a track's cover file cannot be found.
    pub placeholder_cover: String,
    /// Title shown in place of the track when its audio fails to load.
    pub missing_audio_title: String,
    /// Artist line shown in place of the track when its audio fails to load.
    pub missing_audio_artist: String,
    /// Number of featured shortcut slots; slots past the catalog wrap around.
    pub quick_picks: usize,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self {
            header_text: " cadenza ".to_string(),
            placeholder_cover: "https://via.placeholder.com/56/1db954/ffffff?text=♪".to_string(),
            missing_audio_title: "add your own songs!".to_string(),
            missing_audio_artist: "put mp3 files in assets folder".to_string(),
            quick_picks: 6,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ControlsSettings {
    /// Number of seconds to scrub when pressing `H` / `L`.
    pub scrub_seconds: u64,
    /// Volume change applied by `+` / `-`, as a fraction.
    pub volume_step: f32,
}

impl Default for ControlsSettings {
    fn default() -> Self {
        Self {
            scrub_seconds: 5,
            volume_step: 0.05,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct LoggingSettings {
    /// Directory for `cadenza.log`. Defaults to the data directory.
    pub dir: Option<PathBuf>,
    /// `EnvFilter` directive used when `RUST_LOG` is not set.
    pub filter: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            dir: None,
            filter: "info".to_string(),
        }
    }
}
