use std::path::Path;
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Mutex;
use std::thread::JoinHandle;
use std::time::Duration;

use tracing::warn;

use crate::config::AudioSettings;
use crate::playback::{MediaEvent, MediaHandle};

use super::thread::spawn_audio_thread;
use super::types::{AudioCmd, TaggedEvent};

pub struct AudioPlayer {
    tx: Sender<AudioCmd>,
    events: Receiver<TaggedEvent>,
    /// Generation of the most recent `load`.
    generation: u64,
    join: Mutex<Option<JoinHandle<()>>>,
}

impl AudioPlayer {
    pub fn new(audio_settings: AudioSettings) -> Self {
        let (tx, rx) = mpsc::channel::<AudioCmd>();
        let (event_tx, event_rx) = mpsc::channel::<TaggedEvent>();
        let audio_handle = spawn_audio_thread(rx, event_tx, audio_settings);

        Self {
            tx,
            events: event_rx,
            generation: 0,
            join: Mutex::new(Some(audio_handle)),
        }
    }

    fn send(&self, cmd: AudioCmd) {
        if let Err(e) = self.tx.send(cmd) {
            warn!(cmd = ?e.0, "audio thread is gone");
        }
    }

    /// Pending media events for the current source, oldest first.
    pub fn drain_events(&self) -> Vec<MediaEvent> {
        retain_current(self.generation, self.events.try_iter())
    }

    pub fn quit_softly(&self, fade_out: Duration) {
        self.send(AudioCmd::Quit {
            fade_out_ms: fade_out.as_millis() as u64,
        });

        if let Ok(mut j) = self.join.lock() {
            if let Some(h) = j.take() {
                let _ = h.join();
            }
        }
    }
}

/// Drop events raised for a source that has since been replaced.
pub(super) fn retain_current(
    generation: u64,
    tagged: impl IntoIterator<Item = TaggedEvent>,
) -> Vec<MediaEvent> {
    tagged
        .into_iter()
        .filter(|(g, _)| *g == generation)
        .map(|(_, e)| e)
        .collect()
}

impl MediaHandle for AudioPlayer {
    fn load(&mut self, source: &Path) {
        self.generation += 1;
        self.send(AudioCmd::Load {
            path: source.to_path_buf(),
            generation: self.generation,
        });
    }

    fn play(&mut self) {
        self.send(AudioCmd::Play);
    }

    fn pause(&mut self) {
        self.send(AudioCmd::Pause);
    }

    fn seek(&mut self, position: Duration) {
        self.send(AudioCmd::Seek(position));
    }

    fn set_volume(&mut self, volume: f32) {
        self.send(AudioCmd::SetVolume(volume));
    }
}
