use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::config::CatalogSettings;

/// A single catalog entry.
///
/// `file` and `cover` are relative to the assets directory until the catalog
/// resolves them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Track {
    pub title: String,
    pub artist: String,
    pub file: PathBuf,
    pub cover: PathBuf,
    /// Human-readable length shown in the track list, e.g. `"3:35"`.
    pub duration: String,
}

impl Track {
    pub fn new(title: &str, artist: &str, file: &str, cover: &str, duration: &str) -> Self {
        Self {
            title: title.to_string(),
            artist: artist.to_string(),
            file: PathBuf::from(file),
            cover: PathBuf::from(cover),
            duration: duration.to_string(),
        }
    }

    fn resolved(mut self, assets_dir: &Path) -> Self {
        if self.file.is_relative() {
            self.file = assets_dir.join(&self.file);
        }
        if self.cover.is_relative() {
            self.cover = assets_dir.join(&self.cover);
        }
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    #[error("the catalog has no tracks")]
    Empty,
}

/// Ordered, non-empty list of tracks.
#[derive(Debug, Clone)]
pub struct Catalog {
    tracks: Vec<Track>,
}

impl Catalog {
    /// Build a catalog from `tracks`. An empty list is rejected so that every
    /// playback index can be assumed valid.
    pub fn new(tracks: Vec<Track>) -> Result<Self, CatalogError> {
        if tracks.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(Self { tracks })
    }

    /// The entries shipped with the player.
    pub fn builtin_tracks() -> Vec<Track> {
        vec![
            Track::new(
                "sunset drive",
                "mountain explorers",
                "song1.mp3",
                "cover1.jpg",
                "2:00",
            ),
            Track::new(
                "spiritual",
                "night travellers",
                "song2.mp3",
                "cover2.jpg",
                "3:35",
            ),
            Track::new("rock", "coastal", "song3.mp3", "cover3.jpg", "1:19"),
        ]
    }

    /// Build the catalog described by `settings`, falling back to the built-in
    /// entries, with every relative reference resolved against `assets_dir`.
    pub fn from_settings(settings: &CatalogSettings) -> Result<Self, CatalogError> {
        let tracks = if settings.tracks.is_empty() {
            Self::builtin_tracks()
        } else {
            settings.tracks.clone()
        };

        Self::new(
            tracks
                .into_iter()
                .map(|t| t.resolved(&settings.assets_dir))
                .collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.tracks.len()
    }

    pub fn get(&self, index: usize) -> Option<&Track> {
        self.tracks.get(index)
    }

    pub fn tracks(&self) -> &[Track] {
        &self.tracks
    }
}
