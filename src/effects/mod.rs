//! Decorative input effects — throttling, cursor trail, scroll affordance.
//!
//! Everything here is cosmetic glue around the core pipeline: hosts may skip
//! the whole module without affecting browsing behavior.

pub mod throttle;
pub mod trail;

pub use throttle::FrameThrottle;
pub use trail::{TrailDot, TrailEffect};

/// Whether the scroll-to-top affordance should be visible at this offset.
pub fn scroll_top_visible(scroll_y: f64, threshold: f64) -> bool {
    scroll_y > threshold
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scroll_top_threshold() {
        assert!(!scroll_top_visible(0.0, 300.0));
        assert!(!scroll_top_visible(300.0, 300.0));
        assert!(scroll_top_visible(301.0, 300.0));
    }
}
