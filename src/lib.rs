//! VITRINE - Storefront showcase library
//!
//! Re-exports all modules for use by binary targets.

// Core engine (carousel, gestures, validation, events)
pub mod core;

// App modules
pub mod app;
pub mod cli;
pub mod entities;
pub mod paths;
pub mod settings;
pub mod widgets;

// Re-export commonly used types from core
pub use crate::core::carousel::{AUTO_ADVANCE_PERIOD, Carousel};
pub use crate::core::events::{CarouselId, UiEvent, UiEventSender};
pub use crate::core::gesture::{SwipeOutcome, SwipeTracker};
pub use crate::core::quantity::QuantityField;

// Re-export entities
pub use crate::entities::{Cart, Catalog, HeroSlide, Order, Product, Wishlist};
