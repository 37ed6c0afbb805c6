//! Progress and volume bars.
//!
//! Pointer clicks on either bar arrive as a `Pointer` (offset inside the bar
//! plus the bar's width). Playback position flows back the other way through
//! `on_time_update`, which resizes the progress indicator and relabels the
//! elapsed time.

use std::time::Duration;

use crate::playback::PlayerError;

#[cfg(test)]
mod tests;

/// Where a click landed inside a horizontal bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pointer {
    pub offset: f64,
    pub width: f64,
}

impl Pointer {
    pub fn new(offset: f64, width: f64) -> Self {
        Self { offset, width }
    }

    /// Fraction of the bar left of the pointer, clamped to `[0, 1]`.
    pub fn fraction(&self) -> f64 {
        if self.width <= 0.0 || !self.offset.is_finite() {
            return 0.0;
        }
        (self.offset / self.width).clamp(0.0, 1.0)
    }
}

/// Render seconds as `m:ss`. Anything that is not a finite number renders as
/// `0:00`.
pub fn format_time(seconds: f64) -> String {
    if !seconds.is_finite() {
        return "0:00".to_string();
    }
    let total = seconds.max(0.0).floor() as u64;
    format!("{}:{:02}", total / 60, total % 60)
}

#[derive(Debug, Clone)]
pub struct ProgressController {
    duration: Option<Duration>,
    position: Duration,
    progress_percent: f64,
    elapsed_label: String,
    duration_label: String,
    volume: f32,
}

impl ProgressController {
    pub fn new(default_volume: f32) -> Self {
        Self {
            duration: None,
            position: Duration::ZERO,
            progress_percent: 0.0,
            elapsed_label: format_time(0.0),
            duration_label: format_time(0.0),
            volume: default_volume.clamp(0.0, 1.0),
        }
    }

    pub fn duration(&self) -> Option<Duration> {
        self.duration
    }

    /// Width of the progress indicator, in percent.
    pub fn progress_percent(&self) -> f64 {
        self.progress_percent
    }

    pub fn elapsed_label(&self) -> &str {
        &self.elapsed_label
    }

    pub fn duration_label(&self) -> &str {
        &self.duration_label
    }

    pub fn volume(&self) -> f32 {
        self.volume
    }

    /// Width of the volume indicator, in percent.
    pub fn volume_percent(&self) -> f64 {
        f64::from(self.volume) * 100.0
    }

    /// Forget everything about the previous source.
    pub fn reset_track(&mut self) {
        self.duration = None;
        self.position = Duration::ZERO;
        self.progress_percent = 0.0;
        self.elapsed_label = format_time(0.0);
        self.duration_label = format_time(0.0);
    }

    pub fn on_duration_known(&mut self, duration: Duration) {
        self.duration = Some(duration);
        self.duration_label = format_time(duration.as_secs_f64());
    }

    /// Mirror the media position into the indicator. Ignored until the
    /// duration is known.
    pub fn on_time_update(&mut self, position: Duration) {
        let Some(total) = self.known_duration() else {
            return;
        };
        self.position = position.min(total);
        self.progress_percent = self.position.as_secs_f64() / total.as_secs_f64() * 100.0;
        self.elapsed_label = format_time(self.position.as_secs_f64());
    }

    fn known_duration(&self) -> Option<Duration> {
        self.duration.filter(|d| !d.is_zero())
    }

    /// Absolute position for a click on the progress bar.
    pub fn seek_target(&self, pointer: Pointer) -> Result<Duration, PlayerError> {
        let total = self
            .known_duration()
            .ok_or(PlayerError::MediaPositionUnknown)?;
        Ok(total.mul_f64(pointer.fraction()))
    }

    /// Position `delta_secs` away from the current one, kept inside the track.
    pub fn scrub_target(&self, delta_secs: i64) -> Result<Duration, PlayerError> {
        let total = self
            .known_duration()
            .ok_or(PlayerError::MediaPositionUnknown)?;
        let delta = Duration::from_secs(delta_secs.unsigned_abs());
        let target = if delta_secs < 0 {
            self.position.saturating_sub(delta)
        } else {
            self.position.saturating_add(delta)
        };
        Ok(target.min(total))
    }

    /// Apply a click on the volume bar. Returns the new volume fraction.
    pub fn volume_from_click(&mut self, pointer: Pointer) -> f32 {
        self.volume = pointer.fraction() as f32;
        self.volume
    }

    /// Shift the volume by `delta`, clamped to `[0, 1]`.
    pub fn nudge_volume(&mut self, delta: f32) -> f32 {
        self.volume = (self.volume + delta).clamp(0.0, 1.0);
        self.volume
    }
}
