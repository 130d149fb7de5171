//! Frame timing for the FPS readout in the window title.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

const DEFAULT_WINDOW: usize = 120;

/// Rolling window of frame intervals.
pub struct FrameTimer {
    intervals: VecDeque<Duration>,
    last_frame: Option<Instant>,
    capacity: usize,
}

impl FrameTimer {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_WINDOW)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            intervals: VecDeque::with_capacity(capacity),
            last_frame: None,
            capacity: capacity.max(1),
        }
    }

    /// Record a frame presented now.
    pub fn begin_frame(&mut self) {
        self.record(Instant::now());
    }

    /// Record a frame presented at `now`. The first call only sets the baseline.
    pub fn record(&mut self, now: Instant) {
        if let Some(last) = self.last_frame {
            self.intervals.push_back(now.saturating_duration_since(last));
            if self.intervals.len() > self.capacity {
                self.intervals.pop_front();
            }
        }
        self.last_frame = Some(now);
    }

    fn total_seconds(&self) -> f64 {
        self.intervals.iter().map(Duration::as_secs_f64).sum()
    }

    /// Average frames per second over the window.
    pub fn fps(&self) -> f64 {
        let total = self.total_seconds();
        if total <= 0.0 {
            return 0.0;
        }
        self.intervals.len() as f64 / total
    }

    /// Average frame interval in milliseconds.
    pub fn frame_time_ms(&self) -> f64 {
        if self.intervals.is_empty() {
            return 0.0;
        }
        self.total_seconds() / self.intervals.len() as f64 * 1000.0
    }

    pub fn sample_count(&self) -> usize {
        self.intervals.len()
    }
}

impl Default for FrameTimer {
    fn default() -> Self {
        Self::new()
    }
}
