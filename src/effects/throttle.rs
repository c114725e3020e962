//! High-frequency input throttling.
//!
//! Pointer-move and scroll streams arrive far faster than the display
//! refreshes; hosts gate them through a `FrameThrottle` so downstream work is
//! bounded to one reaction per refresh interval. Dropped events carry no
//! state.

use std::time::{Duration, Instant};

/// Accepts at most one event per interval.
#[derive(Debug, Clone)]
pub struct FrameThrottle {
    interval: Duration,
    last_accepted: Option<Instant>,
}

impl FrameThrottle {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_accepted: None,
        }
    }

    /// Whether an event at `now` should be processed. Accepting records the
    /// timestamp; rejected events leave the window untouched.
    pub fn accept(&mut self, now: Instant) -> bool {
        match self.last_accepted {
            Some(last) if now.duration_since(last) < self.interval => false,
            _ => {
                self.last_accepted = Some(now);
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_event_always_accepted() {
        let mut throttle = FrameThrottle::new(Duration::from_millis(16));
        assert!(throttle.accept(Instant::now()));
    }

    #[test]
    fn test_rejects_within_interval_accepts_after() {
        let mut throttle = FrameThrottle::new(Duration::from_millis(16));
        let start = Instant::now();

        assert!(throttle.accept(start));
        assert!(!throttle.accept(start + Duration::from_millis(5)));
        assert!(!throttle.accept(start + Duration::from_millis(15)));
        assert!(throttle.accept(start + Duration::from_millis(16)));
    }

    #[test]
    fn test_rejection_does_not_slide_window() {
        let mut throttle = FrameThrottle::new(Duration::from_millis(16));
        let start = Instant::now();

        assert!(throttle.accept(start));
        // A burst of rejected events must not push the next acceptance out
        for ms in 1..16 {
            assert!(!throttle.accept(start + Duration::from_millis(ms)));
        }
        assert!(throttle.accept(start + Duration::from_millis(16)));
    }
}
