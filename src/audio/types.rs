//! Audio-related small types and handles.
//!
//! This module defines the commands understood by the audio thread and the
//! tagged events it sends back.

use std::path::PathBuf;
use std::time::Duration;

use crate::playback::MediaEvent;

#[derive(Debug)]
pub enum AudioCmd {
    /// Replace the current source. `generation` identifies this load.
    Load { path: PathBuf, generation: u64 },
    Play,
    Pause,
    /// Jump to an absolute position in the current source.
    Seek(Duration),
    SetVolume(f32),
    /// Quit the audio thread, optionally fading out over `fade_out_ms` milliseconds.
    Quit { fade_out_ms: u64 },
}

/// A media event plus the load generation that produced it.
pub(crate) type TaggedEvent = (u64, MediaEvent);
