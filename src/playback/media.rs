use std::path::Path;
use std::time::Duration;

/// The host media subsystem, as seen by the engine.
///
/// Commands are fire-and-forget; outcomes come back later as `MediaEvent`s.
pub trait MediaHandle {
    /// Replace the current source. Playback does not start.
    fn load(&mut self, source: &Path);
    fn play(&mut self);
    fn pause(&mut self);
    /// Jump to an absolute position in the current source.
    fn seek(&mut self, position: Duration);
    /// Set output volume as a fraction in `[0, 1]`.
    fn set_volume(&mut self, volume: f32);
}

/// Autonomous notifications raised by the media subsystem.
#[derive(Debug, Clone, PartialEq)]
pub enum MediaEvent {
    DurationKnown(Duration),
    TimeUpdate(Duration),
    Ended,
    LoadError(String),
}
