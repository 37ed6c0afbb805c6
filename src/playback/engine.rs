use std::time::Duration;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, warn};

use crate::catalog::Catalog;
use crate::config::UiSettings;
use crate::tracklist::TrackListView;

use super::error::PlayerError;
use super::media::MediaHandle;
use super::state::{Direction, PlaybackState, random_index_excluding, step_index};
use super::view::{ControlStyle, CoverArt, NowPlaying, PlayIcon, TransportView};

/// Text and artwork shown when a track's assets are missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placeholders {
    pub cover: String,
    pub missing_title: String,
    pub missing_artist: String,
}

impl From<&UiSettings> for Placeholders {
    fn from(ui: &UiSettings) -> Self {
        Self {
            cover: ui.placeholder_cover.clone(),
            missing_title: ui.missing_audio_title.clone(),
            missing_artist: ui.missing_audio_artist.clone(),
        }
    }
}

/// What happened when the media reported end-of-track.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackEnd {
    /// Repeat was on; the same track starts again from zero.
    Restarted,
    /// A new track was loaded and started.
    Advanced(usize),
}

pub struct PlaybackEngine<M, R = StdRng> {
    catalog: Catalog,
    state: PlaybackState,
    media: M,
    rng: R,
    placeholders: Placeholders,
    now_playing: NowPlaying,
    transport: TransportView,
    track_list: TrackListView,
    /// Set by a load error and cleared by the next load.
    source_error: Option<String>,
}

impl<M: MediaHandle> PlaybackEngine<M, StdRng> {
    /// Create an engine and load the first catalog entry (without playing it).
    pub fn new(catalog: Catalog, media: M, placeholders: Placeholders) -> Self {
        Self::with_rng(catalog, media, placeholders, StdRng::from_entropy())
    }
}

impl<M: MediaHandle, R: Rng> PlaybackEngine<M, R> {
    /// Like `new`, with an explicit random source for shuffle picks.
    pub fn with_rng(catalog: Catalog, media: M, placeholders: Placeholders, rng: R) -> Self {
        let track_list = TrackListView::new(&catalog, 0);
        let mut engine = Self {
            catalog,
            state: PlaybackState::default(),
            media,
            rng,
            now_playing: NowPlaying {
                title: String::new(),
                artist: String::new(),
                cover: CoverArt::Placeholder(placeholders.cover.clone()),
            },
            placeholders,
            transport: TransportView::default(),
            track_list,
            source_error: None,
        };
        engine.load_index(0);
        engine
    }

    pub fn state(&self) -> &PlaybackState {
        &self.state
    }

    pub fn now_playing(&self) -> &NowPlaying {
        &self.now_playing
    }

    pub fn transport(&self) -> &TransportView {
        &self.transport
    }

    pub fn track_list(&self) -> &TrackListView {
        &self.track_list
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn media(&self) -> &M {
        &self.media
    }

    /// Reason the current source failed to load, if it did.
    pub fn source_error(&self) -> Option<&str> {
        self.source_error.as_deref()
    }

    /// Point the media at the track at `index` and refresh the display.
    /// Playback is not started.
    pub fn load_track(&mut self, index: usize) -> Result<(), PlayerError> {
        if index >= self.catalog.len() {
            return Err(PlayerError::UnknownTrack(index));
        }
        self.load_index(index);
        Ok(())
    }

    fn load_index(&mut self, index: usize) {
        let Some(track) = self.catalog.get(index) else {
            return;
        };

        self.state.current_index = index;
        self.media.load(&track.file);
        self.source_error = None;

        let cover = if track.cover.is_file() {
            CoverArt::File(track.cover.clone())
        } else {
            debug!(cover = %track.cover.display(), "cover missing, using placeholder");
            CoverArt::Placeholder(self.placeholders.cover.clone())
        };
        self.now_playing = NowPlaying {
            title: track.title.clone(),
            artist: track.artist.clone(),
            cover,
        };
        self.track_list.mark_active(index);
        debug!(index, title = %track.title, "track loaded");
    }

    fn start_playback(&mut self) {
        self.media.play();
        self.state.is_playing = true;
        self.transport.play_icon = PlayIcon::Pause;
    }

    fn stop_playback(&mut self) {
        self.state.is_playing = false;
        self.transport.play_icon = PlayIcon::Play;
    }

    fn ensure_source(&self) -> Result<(), PlayerError> {
        match &self.source_error {
            Some(reason) => Err(PlayerError::MediaLoad(reason.clone())),
            None => Ok(()),
        }
    }

    /// Pause when playing, play otherwise. Returns the new playing flag.
    pub fn toggle_play_pause(&mut self) -> Result<bool, PlayerError> {
        self.ensure_source()?;
        if self.state.is_playing {
            self.media.pause();
            self.stop_playback();
        } else {
            self.start_playback();
        }
        Ok(self.state.is_playing)
    }

    fn pick_following(&mut self, direction: Direction) -> usize {
        let len = self.catalog.len();
        let current = self.state.current_index;
        if self.state.is_shuffle {
            // Direction is ignored under shuffle.
            random_index_excluding(&mut self.rng, current, len)
        } else {
            step_index(current, len, direction)
        }
    }

    /// Move to the next or previous track and start it. Returns the new index.
    pub fn advance(&mut self, direction: Direction) -> usize {
        let next = self.pick_following(direction);
        self.load_index(next);
        self.start_playback();
        info!(?direction, index = next, "advanced");
        next
    }

    pub fn toggle_shuffle(&mut self) -> bool {
        self.state.is_shuffle = !self.state.is_shuffle;
        self.transport.shuffle = ControlStyle::from_flag(self.state.is_shuffle);
        self.state.is_shuffle
    }

    pub fn toggle_repeat(&mut self) -> bool {
        self.state.is_repeat = !self.state.is_repeat;
        self.transport.repeat = ControlStyle::from_flag(self.state.is_repeat);
        self.state.is_repeat
    }

    /// React to the media reaching the end of the current source.
    /// Repeat wins over shuffle.
    pub fn on_track_ended(&mut self) -> TrackEnd {
        if self.state.is_repeat {
            self.media.seek(Duration::ZERO);
            self.start_playback();
            return TrackEnd::Restarted;
        }
        let next = self.pick_following(Direction::Next);
        self.load_index(next);
        self.start_playback();
        TrackEnd::Advanced(next)
    }

    /// Explicit pick from the track list: load and play `index`, regardless
    /// of shuffle and repeat.
    pub fn select_track(&mut self, index: usize) -> Result<(), PlayerError> {
        self.load_track(index)?;
        self.start_playback();
        Ok(())
    }

    /// The media could not open the current source. Swap in the placeholder
    /// text and leave the transport inert until another track is loaded.
    pub fn on_load_error(&mut self, reason: &str) {
        warn!(index = self.state.current_index, %reason, "audio source failed to load");
        self.source_error = Some(reason.to_string());
        self.now_playing.title = self.placeholders.missing_title.clone();
        self.now_playing.artist = self.placeholders.missing_artist.clone();
        self.stop_playback();
    }

    pub fn seek(&mut self, position: Duration) -> Result<(), PlayerError> {
        self.ensure_source()?;
        self.media.seek(position);
        Ok(())
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.media.set_volume(volume.clamp(0.0, 1.0));
    }
}
