//! Utilities for creating `rodio` sinks from track files.
//!
//! The helper here encapsulates opening/decoding a file and preparing a
//! paused `Sink` at the requested start position.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;
use std::time::Duration;

use lofty::file::AudioFile;
use rodio::decoder::DecoderError;
use rodio::{Decoder, OutputStream, Sink, Source};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("no audio output device")]
    NoDevice,
    #[error("cannot open {path}: {source}")]
    Open {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("cannot decode {path}: {source}")]
    Decode {
        path: String,
        #[source]
        source: DecoderError,
    },
}

pub(super) struct OpenedSource {
    pub(super) sink: Sink,
    pub(super) duration: Option<Duration>,
}

/// Read the track length from the file's tags/headers.
pub(super) fn probe_duration(path: &Path) -> Option<Duration> {
    lofty::read_from_path(path)
        .ok()
        .map(|tagged| tagged.properties().duration())
        .filter(|d| !d.is_zero())
}

/// Create a paused `Sink` for the file at `path` that starts playback at `start_at`.
pub(super) fn create_sink_at(
    stream: Option<&OutputStream>,
    path: &Path,
    start_at: Duration,
) -> Result<OpenedSource, SourceError> {
    let stream = stream.ok_or(SourceError::NoDevice)?;

    let file = File::open(path).map_err(|source| SourceError::Open {
        path: path.display().to_string(),
        source,
    })?;

    let decoder = Decoder::new(BufReader::new(file)).map_err(|source| SourceError::Decode {
        path: path.display().to_string(),
        source,
    })?;
    let duration = probe_duration(path).or_else(|| decoder.total_duration());

    let sink = Sink::connect_new(stream.mixer());
    // `skip_duration` is our seeking primitive; even Duration::ZERO is fine.
    sink.append(decoder.skip_duration(start_at));
    sink.pause();
    Ok(OpenedSource { sink, duration })
}
