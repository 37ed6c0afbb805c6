//! Playback engine: owns the single media handle and the transport state.
//!
//! All transport operations (play/pause, next/previous, shuffle, repeat,
//! explicit selection) and the autonomous end-of-track reaction live on
//! `PlaybackEngine`. The engine never talks to the terminal; it keeps small
//! view models (`NowPlaying`, `TransportView`, `TrackListView`) that the UI
//! renders.

mod engine;
mod error;
mod media;
mod state;
mod view;

pub use engine::*;
pub use error::PlayerError;
pub use media::{MediaEvent, MediaHandle};
pub use state::*;
pub use view::*;

#[cfg(test)]
mod tests;
