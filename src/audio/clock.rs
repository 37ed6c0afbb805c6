use std::time::{Duration, Instant};

/// Wall-clock position tracking for a sink that can be paused and resumed.
#[derive(Debug, Default, Clone, Copy)]
pub(super) struct Clock {
    started_at: Option<Instant>,
    accumulated: Duration,
}

impl Clock {
    /// Stop the clock and set its position to `at`.
    pub(super) fn reset(&mut self, at: Duration) {
        self.started_at = None;
        self.accumulated = at;
    }

    pub(super) fn resume(&mut self) {
        if self.started_at.is_none() {
            self.started_at = Some(Instant::now());
        }
    }

    pub(super) fn pause(&mut self) {
        if let Some(st) = self.started_at.take() {
            self.accumulated += st.elapsed();
        }
    }

    pub(super) fn is_running(&self) -> bool {
        self.started_at.is_some()
    }

    pub(super) fn elapsed(&self) -> Duration {
        self.accumulated + self.started_at.map_or(Duration::ZERO, |st| st.elapsed())
    }
}

/// Keep `position` inside the source when its length is known.
pub(super) fn clamp_position(position: Duration, duration: Option<Duration>) -> Duration {
    match duration {
        Some(total) => position.min(total),
        None => position,
    }
}
