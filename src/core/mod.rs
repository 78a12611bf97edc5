//! Core engine: carousel state machine, gesture classification, input
//! validation, and the event seam between widget logic and the UI.

pub mod carousel;
pub mod events;
pub mod gesture;
pub mod quantity;

pub use carousel::{AUTO_ADVANCE_PERIOD, Carousel};
pub use events::{CarouselId, UiEvent, UiEventSender};
pub use gesture::{SCROLL_LOCK_THRESHOLD, SWIPE_THRESHOLD, SwipeOutcome, SwipeTracker};
pub use quantity::QuantityField;
