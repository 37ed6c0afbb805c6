use std::path::{Path, PathBuf};
use std::sync::mpsc::{Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::thread::JoinHandle;
use std::time::Duration;

use rodio::{OutputStream, OutputStreamBuilder, Sink};
use tracing::{debug, error, warn};

use crate::config::AudioSettings;
use crate::playback::MediaEvent;

use super::clock::{Clock, clamp_position};
use super::sink::create_sink_at;
use super::types::{AudioCmd, TaggedEvent};

/// Everything the audio thread knows about the current source.
struct Deck {
    stream: Option<OutputStream>,
    events: Sender<TaggedEvent>,
    generation: u64,
    source: Option<PathBuf>,
    sink: Option<Sink>,
    duration: Option<Duration>,
    clock: Clock,
    playing: bool,
    volume: f32,
}

impl Deck {
    fn emit(&self, event: MediaEvent) {
        // The receiver only goes away during shutdown.
        let _ = self.events.send((self.generation, event));
    }

    fn drop_sink(&mut self) {
        if let Some(s) = self.sink.take() {
            s.stop();
        }
    }

    /// Replace the sink with a fresh one for the current source at `at`.
    /// Returns `false` (after reporting) when the source cannot be opened.
    fn rebuild_at(&mut self, path: &Path, at: Duration) -> bool {
        self.drop_sink();
        match create_sink_at(self.stream.as_ref(), path, at) {
            Ok(opened) => {
                opened.sink.set_volume(self.volume);
                self.sink = Some(opened.sink);
                if self.duration.is_none() {
                    self.duration = opened.duration;
                }
                true
            }
            Err(e) => {
                warn!(path = %path.display(), error = %e, "cannot open audio source");
                self.playing = false;
                self.clock.reset(Duration::ZERO);
                self.emit(MediaEvent::LoadError(e.to_string()));
                false
            }
        }
    }

    fn load(&mut self, path: PathBuf, generation: u64) {
        self.generation = generation;
        self.playing = false;
        self.duration = None;
        self.clock.reset(Duration::ZERO);
        if self.rebuild_at(&path, Duration::ZERO) {
            if let Some(d) = self.duration {
                self.emit(MediaEvent::DurationKnown(d));
            }
        }
        self.source = Some(path);
    }

    fn play(&mut self) {
        let Some(path) = self.source.clone() else {
            return;
        };
        let Some(ended) = self.sink.as_ref().map(Sink::empty) else {
            // Failed source: stay inert.
            return;
        };
        if ended {
            self.clock.reset(Duration::ZERO);
            if !self.rebuild_at(&path, Duration::ZERO) {
                return;
            }
        }
        if let Some(s) = self.sink.as_ref() {
            s.play();
        }
        self.clock.resume();
        self.playing = true;
    }

    fn pause(&mut self) {
        if let Some(s) = self.sink.as_ref() {
            s.pause();
        }
        self.clock.pause();
        self.playing = false;
    }

    fn seek(&mut self, position: Duration) {
        let Some(path) = self.source.clone() else {
            return;
        };
        if self.sink.is_none() {
            return;
        }
        let target = clamp_position(position, self.duration);
        if !self.rebuild_at(&path, target) {
            return;
        }
        self.clock.reset(target);
        if self.playing {
            if let Some(s) = self.sink.as_ref() {
                s.play();
            }
            self.clock.resume();
        }
        debug!(?target, "seeked");
    }

    fn set_volume(&mut self, volume: f32) {
        self.volume = volume;
        if let Some(s) = self.sink.as_ref() {
            s.set_volume(volume);
        }
    }

    /// Periodic check: report the position, or end-of-track once the sink
    /// has drained.
    fn tick(&mut self) {
        if !self.playing || !self.clock.is_running() {
            return;
        }
        let Some(ended) = self.sink.as_ref().map(Sink::empty) else {
            return;
        };
        if ended {
            self.clock.pause();
            let end = self.duration.unwrap_or_else(|| self.clock.elapsed());
            self.clock.reset(end);
            self.playing = false;
            self.emit(MediaEvent::TimeUpdate(end));
            self.emit(MediaEvent::Ended);
        } else {
            self.emit(MediaEvent::TimeUpdate(clamp_position(
                self.clock.elapsed(),
                self.duration,
            )));
        }
    }

    fn quit(&mut self, fade_out_ms: u64) {
        if let Some(s) = self.sink.as_ref() {
            if self.playing {
                fade_out_sink(s, self.volume, fade_out_ms);
            }
        }
        self.drop_sink();
        self.playing = false;
    }
}

fn fade_out_sink(sink: &Sink, from: f32, fade_out_ms: u64) {
    if fade_out_ms == 0 {
        sink.set_volume(0.0);
        return;
    }
    let steps: u64 = 20;
    let step_ms = (fade_out_ms / steps).max(1);
    for step in 1..=steps {
        let t = step as f32 / steps as f32;
        sink.set_volume(from * (1.0 - t));
        thread::sleep(Duration::from_millis(step_ms));
    }
    sink.set_volume(0.0);
}

pub(super) fn spawn_audio_thread(
    rx: Receiver<AudioCmd>,
    events: Sender<TaggedEvent>,
    audio_settings: AudioSettings,
) -> JoinHandle<()> {
    thread::spawn(move || {
        let stream = match OutputStreamBuilder::open_default_stream() {
            Ok(mut stream) => {
                // rodio logs to stderr when OutputStream is dropped. That's useful in debugging,
                // but noisy for a TUI app.
                stream.log_on_drop(false);
                Some(stream)
            }
            Err(e) => {
                error!(error = %e, "no audio output device; every load will fail");
                None
            }
        };

        let mut deck = Deck {
            stream,
            events,
            generation: 0,
            source: None,
            sink: None,
            duration: None,
            clock: Clock::default(),
            playing: false,
            volume: audio_settings.default_volume,
        };
        let tick = Duration::from_millis(audio_settings.tick_ms.max(1));

        loop {
            match rx.recv_timeout(tick) {
                Ok(AudioCmd::Load { path, generation }) => deck.load(path, generation),
                Ok(AudioCmd::Play) => deck.play(),
                Ok(AudioCmd::Pause) => deck.pause(),
                Ok(AudioCmd::Seek(position)) => deck.seek(position),
                Ok(AudioCmd::SetVolume(volume)) => deck.set_volume(volume),
                Ok(AudioCmd::Quit { fade_out_ms }) => {
                    deck.quit(fade_out_ms);
                    break;
                }
                Err(RecvTimeoutError::Timeout) => deck.tick(),
                Err(RecvTimeoutError::Disconnected) => break,
            }
        }
        debug!("audio thread finished");
    })
}
