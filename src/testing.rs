//! Test doubles shared by the module test suites.

use std::path::{Path, PathBuf};
use std::time::Duration;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::catalog::{Catalog, Track};
use crate::playback::{MediaHandle, PlaybackEngine, Placeholders};

#[derive(Debug, Clone, PartialEq)]
pub enum MediaCall {
    Load(PathBuf),
    Play,
    Pause,
    Seek(Duration),
    Volume(f32),
}

/// Records every command instead of producing sound.
#[derive(Debug, Default)]
pub struct FakeMedia {
    pub calls: Vec<MediaCall>,
}

impl FakeMedia {
    pub fn last(&self) -> Option<&MediaCall> {
        self.calls.last()
    }

    pub fn loads(&self) -> Vec<PathBuf> {
        self.calls
            .iter()
            .filter_map(|c| match c {
                MediaCall::Load(p) => Some(p.clone()),
                _ => None,
            })
            .collect()
    }
}

impl MediaHandle for FakeMedia {
    fn load(&mut self, source: &Path) {
        self.calls.push(MediaCall::Load(source.to_path_buf()));
    }

    fn play(&mut self) {
        self.calls.push(MediaCall::Play);
    }

    fn pause(&mut self) {
        self.calls.push(MediaCall::Pause);
    }

    fn seek(&mut self, position: Duration) {
        self.calls.push(MediaCall::Seek(position));
    }

    fn set_volume(&mut self, volume: f32) {
        self.calls.push(MediaCall::Volume(volume));
    }
}

pub fn catalog_of(n: usize) -> Catalog {
    let tracks = (0..n)
        .map(|i| {
            Track::new(
                &format!("track {i}"),
                &format!("artist {i}"),
                &format!("/nonexistent/song{i}.mp3"),
                &format!("/nonexistent/cover{i}.jpg"),
                "1:00",
            )
        })
        .collect();
    Catalog::new(tracks).unwrap()
}

pub fn placeholders() -> Placeholders {
    Placeholders {
        cover: "placeholder.png".to_string(),
        missing_title: "add your own songs!".to_string(),
        missing_artist: "put mp3 files in assets folder".to_string(),
    }
}

pub fn engine_of(n: usize, seed: u64) -> PlaybackEngine<FakeMedia> {
    PlaybackEngine::with_rng(
        catalog_of(n),
        FakeMedia::default(),
        placeholders(),
        StdRng::seed_from_u64(seed),
    )
}
