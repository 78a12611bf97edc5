//! Carousel engine with wrap-around navigation and swipe input
//!
//! **Why**: The hero slider and the product gallery are the same state
//! machine: a cursor into a fixed item sequence, moved by buttons, swipes and
//! (slider only) a periodic auto-advance. One parametrized controller instead
//! of two near-copies.
//!
//! **Used by**: Hero widget (auto-advance + swipe), gallery widget
//! (thumbnail clicks + swipe + scroll latch + preview mirroring)
//!
//! # State Model
//!
//! The item sequence is a snapshot taken at construction: only its length is
//! captured, items appearing later are not tracked. Exactly one item is
//! active at all times while `len > 0`; a zero-length carousel is permanently
//! inert and every operation no-ops silently.
//!
//! # Threading
//!
//! The controller is owned by the UI thread. The auto-advance timer and
//! manual navigation mutate the cursor without synchronization - safe only
//! because egui's update loop is the single mutator. Porting this to real
//! parallelism would require a lock or a single-writer channel.
//!
//! # Timing Model
//!
//! `update()` is called every frame and advances by wall-clock comparison.
//! The period is fixed and is NOT rearmed by manual navigation: pressing
//! "next" right before a tick still yields the tick on schedule. That is the
//! shipped storefront behavior, kept as-is rather than debounced.

use std::time::{Duration, Instant};

use log::debug;

use crate::core::events::{CarouselId, UiEvent, UiEventSender};
use crate::core::gesture::{SwipeOutcome, SwipeTracker};

/// Default auto-advance period for the hero slider.
pub const AUTO_ADVANCE_PERIOD: Duration = Duration::from_secs(5);

/// Periodic auto-advance clock.
///
/// Armed on the first `update()` call, then fires once per period. There is
/// no teardown: the clock runs for the lifetime of the app (documented
/// limitation of the storefront, not a bug).
#[derive(Debug)]
struct AutoAdvance {
    period: Duration,
    last_tick: Option<Instant>,
}

impl AutoAdvance {
    fn new(period: Duration) -> Self {
        Self {
            period,
            last_tick: None,
        }
    }

    /// Returns true when a period elapsed since the last tick.
    fn tick(&mut self, now: Instant) -> bool {
        match self.last_tick {
            Some(last) if now.duration_since(last) >= self.period => {
                self.last_tick = Some(now);
                true
            }
            Some(_) => false,
            None => {
                self.last_tick = Some(now);
                false
            }
        }
    }

    /// Time until the next tick fires (for repaint scheduling).
    fn time_to_next(&self, now: Instant) -> Duration {
        match self.last_tick {
            Some(last) => self.period.saturating_sub(now.duration_since(last)),
            None => self.period,
        }
    }
}

/// Cursor state machine over a fixed sequence of display items.
pub struct Carousel {
    id: CarouselId,
    cursor: usize,
    len: usize,
    swipe: SwipeTracker,
    auto: Option<AutoAdvance>,
    events: UiEventSender,
}

impl Default for Carousel {
    /// Inert placeholder; real controllers are wired up from the catalog.
    fn default() -> Self {
        Self::new(CarouselId::Hero, 0, UiEventSender::dummy())
    }
}

impl Carousel {
    /// Create a controller over `len` items. `len == 0` yields a permanently
    /// inert controller: all operations no-op, none of them error.
    pub fn new(id: CarouselId, len: usize, events: UiEventSender) -> Self {
        if len == 0 {
            debug!("{:?}: no items, carousel inert", id);
        }
        Self {
            id,
            cursor: 0,
            len,
            swipe: SwipeTracker::new(),
            auto: None,
            events,
        }
    }

    /// Enable periodic auto-advance (hero slider variant).
    pub fn with_auto_advance(mut self, period: Duration) -> Self {
        self.auto = Some(AutoAdvance::new(period));
        self
    }

    /// Enable the vertical-scroll suppression latch (gallery variant).
    pub fn with_scroll_latch(mut self) -> Self {
        self.swipe = SwipeTracker::new().with_scroll_latch();
        self
    }

    pub fn id(&self) -> CarouselId {
        self.id
    }

    /// Index of the currently active item. Meaningless when inert.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jump to an absolute index.
    ///
    /// Callers normalize through modulo before getting here ([`Self::step`]),
    /// so `index < len` holds by construction; an out-of-range index on an
    /// active carousel is a caller bug and is clamped defensively. Re-selecting
    /// the current index still re-emits the marker move (clicking the active
    /// thumbnail re-applies it, matching the storefront).
    pub fn go_to(&mut self, index: usize) {
        if self.len == 0 {
            return;
        }
        let index = index.min(self.len - 1);
        let old = self.cursor;
        self.cursor = index;
        debug!("{:?}: active {} -> {}", self.id, old, index);
        self.events.emit(UiEvent::ActiveChanged {
            widget: self.id,
            old,
            new: index,
        });
    }

    /// Move the cursor by `delta` items with wrap-around. Correct for any
    /// negative delta and any `len > 0`.
    pub fn step(&mut self, delta: i64) {
        if self.len == 0 {
            return;
        }
        let next = (self.cursor as i64 + delta).rem_euclid(self.len as i64) as usize;
        self.go_to(next);
    }

    pub fn next(&mut self) {
        self.step(1);
    }

    pub fn prev(&mut self) {
        self.step(-1);
    }

    /// Drive the auto-advance clock. Called once per frame with the current
    /// wall clock. Returns the delay until the next tick so the caller can
    /// schedule a repaint, or None when this variant has no clock or no items.
    pub fn update(&mut self, now: Instant) -> Option<Duration> {
        if self.len == 0 {
            return None;
        }
        let auto = self.auto.as_mut()?;
        let fired = auto.tick(now);
        let delay = auto.time_to_next(now);
        if fired {
            // Same path as the "next" button; deliberately does not rearm
            // anything, manual steps share the cursor with this tick.
            self.step(1);
        }
        Some(delay)
    }

    /// Touch contact at abscissa `x`.
    pub fn touch_start(&mut self, x: f32) {
        if self.len == 0 {
            return;
        }
        self.swipe.begin(x);
    }

    /// Touch drag to `x`. Returns true while the enclosing view should
    /// suppress vertical scrolling (gallery variant, one-way per gesture).
    pub fn touch_move(&mut self, x: f32) -> bool {
        if self.len == 0 {
            return false;
        }
        self.swipe.update(x)
    }

    /// Touch release at `x`; resolves the gesture into a navigation step.
    pub fn touch_end(&mut self, x: f32) {
        if self.len == 0 {
            return;
        }
        match self.swipe.end(x) {
            SwipeOutcome::Advance => self.step(1),
            SwipeOutcome::Retreat => self.step(-1),
            SwipeOutcome::Tap => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossbeam_channel::unbounded;

    fn hero(len: usize) -> Carousel {
        Carousel::new(CarouselId::Hero, len, UiEventSender::dummy())
    }

    #[test]
    fn test_step_wraps_in_both_directions() {
        let mut c = hero(4);
        c.step(-1);
        assert_eq!(c.cursor(), 3);
        c.step(1);
        assert_eq!(c.cursor(), 0);
        c.step(-9); // arbitrary large negative delta
        assert_eq!(c.cursor(), 3);
        c.step(10);
        assert_eq!(c.cursor(), 1);
    }

    #[test]
    fn test_cursor_stays_in_range_under_arbitrary_steps() {
        let mut c = hero(5);
        for delta in [3, -7, 11, -1, -5, 100, -99, 2] {
            c.step(delta);
            assert!(c.cursor() < c.len());
        }
    }

    #[test]
    fn test_n_forward_steps_return_to_start() {
        for n in 1..6 {
            let mut c = hero(n);
            c.go_to(0);
            for _ in 0..n {
                c.step(1);
            }
            assert_eq!(c.cursor(), 0, "cycle of length {} broken", n);
        }
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = hero(0);
        c.step(1);
        c.step(-3);
        c.go_to(2);
        c.next();
        c.prev();
        c.touch_start(0.0);
        c.touch_end(-200.0);
        assert_eq!(c.cursor(), 0);
        assert_eq!(c.update(Instant::now()), None);
    }

    #[test]
    fn test_swipe_resolution_moves_cursor() {
        let mut c = hero(3);

        // diff = -60: leftward swipe advances
        c.touch_start(200.0);
        c.touch_end(140.0);
        assert_eq!(c.cursor(), 1);

        // diff = +60: rightward swipe retreats
        c.touch_start(100.0);
        c.touch_end(160.0);
        assert_eq!(c.cursor(), 0);

        // diff = 50 exactly: tap, no change
        c.touch_start(100.0);
        c.touch_end(150.0);
        assert_eq!(c.cursor(), 0);

        // diff = 51: past the boundary, navigates
        c.touch_start(100.0);
        c.touch_end(49.0);
        assert_eq!(c.cursor(), 1);
    }

    #[test]
    fn test_auto_advance_fires_each_period() {
        let mut c = hero(3).with_auto_advance(Duration::from_secs(5));
        let t0 = Instant::now();

        c.update(t0); // arms the clock
        assert_eq!(c.cursor(), 0);

        c.update(t0 + Duration::from_secs(4));
        assert_eq!(c.cursor(), 0);

        c.update(t0 + Duration::from_secs(5));
        assert_eq!(c.cursor(), 1);

        c.update(t0 + Duration::from_secs(10));
        assert_eq!(c.cursor(), 2);
    }

    #[test]
    fn test_manual_step_does_not_delay_auto_tick() {
        let mut c = hero(4).with_auto_advance(Duration::from_secs(5));
        let t0 = Instant::now();
        c.update(t0);

        // Manual navigation right before the tick
        c.update(t0 + Duration::from_secs(4));
        c.next();
        assert_eq!(c.cursor(), 1);

        // The scheduled tick still fires on time
        c.update(t0 + Duration::from_secs(5));
        assert_eq!(c.cursor(), 2);
    }

    #[test]
    fn test_one_marker_move_per_transition() {
        let (tx, rx) = unbounded();
        let mut c = Carousel::new(CarouselId::ProductGallery, 3, UiEventSender::new(tx));

        c.step(1);
        c.step(-1);

        let events: Vec<UiEvent> = rx.try_iter().collect();
        assert_eq!(events.len(), 2);
        match &events[0] {
            UiEvent::ActiveChanged { widget, old, new } => {
                assert_eq!(*widget, CarouselId::ProductGallery);
                assert_eq!((*old, *new), (0, 1));
            }
            other => panic!("unexpected event {:?}", other),
        }
    }
}
