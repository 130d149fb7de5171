//! Elapsed-time source for the frame loop.

use std::time::{Duration, Instant};

/// Monotonic clock reporting seconds since it was started.
#[derive(Debug, Clone, Copy)]
pub struct AnimationClock {
    start: Instant,
}

impl AnimationClock {
    pub fn start() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_seconds(&self) -> f64 {
        self.elapsed().as_secs_f64()
    }
}

impl Default for AnimationClock {
    fn default() -> Self {
        Self::start()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elapsed_is_monotonic() {
        let clock = AnimationClock::start();
        let a = clock.elapsed_seconds();
        std::thread::sleep(Duration::from_millis(2));
        let b = clock.elapsed_seconds();
        assert!(a >= 0.0);
        assert!(b > a);
    }
}
