//! Horizontal swipe classification for carousel navigation.
//!
//! A gesture is one touch interaction: `begin(x)` at contact, any number of
//! `update(x)` while dragging, `end(x)` at release. The tracker only records
//! the start abscissa; classification happens at release from the total
//! displacement. The sample is discarded once the interaction resolves.
//!
//! Sign convention: dragging the finger LEFT (negative displacement) reveals
//! the NEXT item. This is inverted relative to the cursor direction on
//! purpose and has regressed before - tests pin it down.

/// Minimum horizontal displacement (px) for a release to count as a swipe.
/// A displacement of exactly this value is still a tap.
pub const SWIPE_THRESHOLD: f32 = 50.0;

/// Running displacement (px) past which vertical scrolling gets suppressed
/// for the remainder of the gesture (gallery variant only).
pub const SCROLL_LOCK_THRESHOLD: f32 = 10.0;

/// How a finished gesture resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeOutcome {
    /// Displacement within the threshold - no navigation.
    Tap,
    /// Leftward swipe - advance to the next item.
    Advance,
    /// Rightward swipe - retreat to the previous item.
    Retreat,
}

/// Tracks one horizontal touch interaction at a time.
#[derive(Debug, Default)]
pub struct SwipeTracker {
    start_x: Option<f32>,
    scroll_locked: bool,
    latch_enabled: bool,
}

impl SwipeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable the scroll-suppression latch (product gallery variant).
    pub fn with_scroll_latch(mut self) -> Self {
        self.latch_enabled = true;
        self
    }

    /// Start of a touch interaction. Resets any previous latch.
    pub fn begin(&mut self, x: f32) {
        self.start_x = Some(x);
        self.scroll_locked = false;
    }

    /// Mid-gesture position update.
    ///
    /// Returns true while vertical scrolling should be suppressed. The latch
    /// is one-way per gesture: once the running displacement exceeds
    /// [`SCROLL_LOCK_THRESHOLD`] it stays set until the next `begin`.
    pub fn update(&mut self, x: f32) -> bool {
        if let Some(start) = self.start_x
            && self.latch_enabled
            && !self.scroll_locked
            && (x - start).abs() > SCROLL_LOCK_THRESHOLD
        {
            self.scroll_locked = true;
        }
        self.scroll_locked
    }

    /// End of the interaction. Classifies the gesture and discards the sample.
    ///
    /// Without a preceding `begin` this is a no-op tap (stray release events
    /// from the window system must never navigate).
    pub fn end(&mut self, x: f32) -> SwipeOutcome {
        self.scroll_locked = false;
        let Some(start) = self.start_x.take() else {
            return SwipeOutcome::Tap;
        };

        let diff = x - start;
        if diff.abs() <= SWIPE_THRESHOLD {
            SwipeOutcome::Tap
        } else if diff < 0.0 {
            SwipeOutcome::Advance
        } else {
            SwipeOutcome::Retreat
        }
    }

    /// True while the current gesture has latched scroll suppression.
    pub fn scroll_locked(&self) -> bool {
        self.scroll_locked
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_threshold_boundary_is_a_tap() {
        let mut tracker = SwipeTracker::new();

        tracker.begin(100.0);
        assert_eq!(tracker.end(150.0), SwipeOutcome::Tap); // diff = 50 exactly

        tracker.begin(100.0);
        assert_eq!(tracker.end(49.0), SwipeOutcome::Advance); // diff = -51

        tracker.begin(100.0);
        assert_eq!(tracker.end(151.0), SwipeOutcome::Retreat); // diff = +51
    }

    #[test]
    fn test_leftward_swipe_advances() {
        // Start at x=200, release at x=140: diff = -60
        let mut tracker = SwipeTracker::new();
        tracker.begin(200.0);
        assert_eq!(tracker.end(140.0), SwipeOutcome::Advance);
    }

    #[test]
    fn test_rightward_swipe_retreats() {
        // Start at x=100, release at x=160: diff = +60
        let mut tracker = SwipeTracker::new();
        tracker.begin(100.0);
        assert_eq!(tracker.end(160.0), SwipeOutcome::Retreat);
    }

    #[test]
    fn test_end_without_begin_is_noop() {
        let mut tracker = SwipeTracker::new();
        assert_eq!(tracker.end(500.0), SwipeOutcome::Tap);
    }

    #[test]
    fn test_sample_discarded_after_resolution() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(0.0);
        assert_eq!(tracker.end(-100.0), SwipeOutcome::Advance);
        // Second release with no new begin must not reuse the old sample
        assert_eq!(tracker.end(-200.0), SwipeOutcome::Tap);
    }

    #[test]
    fn test_scroll_latch_is_one_way() {
        let mut tracker = SwipeTracker::new().with_scroll_latch();

        tracker.begin(100.0);
        assert!(!tracker.update(105.0)); // 5 px, under the latch threshold
        assert!(tracker.update(115.0)); // 15 px, latched
        assert!(tracker.update(100.0)); // back to origin, still latched
        tracker.end(100.0);

        // Next gesture starts unlatched
        tracker.begin(100.0);
        assert!(!tracker.update(102.0));
    }

    #[test]
    fn test_latch_disabled_for_slider_variant() {
        let mut tracker = SwipeTracker::new();
        tracker.begin(100.0);
        assert!(!tracker.update(300.0));
        assert!(!tracker.scroll_locked());
    }
}
