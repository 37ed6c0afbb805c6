//! `rodio` backend for the playback engine's `MediaHandle`.
//!
//! Decoding and output run on a dedicated thread that receives `AudioCmd`s
//! over a channel and reports `MediaEvent`s back. Every event is tagged with
//! the load it belongs to, so events from a superseded source are dropped
//! before the controller sees them.

mod clock;
mod player;
mod sink;
mod thread;
mod types;

pub use player::AudioPlayer;

#[cfg(test)]
mod tests;
