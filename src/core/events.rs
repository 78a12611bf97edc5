//! Event system for widget state changes and status-bar coordination.
//!
//! Events are emitted when significant state changes occur (active item moved,
//! cart modified) and handled by the main application to trigger side effects
//! (status messages, preview refresh) without the core widgets touching the UI.

use crossbeam_channel::Sender;

/// Which carousel instance emitted an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarouselId {
    /// Auto-advancing hero slider on the home page.
    Hero,
    /// Product image gallery with thumbnail strip and preview surface.
    ProductGallery,
}

/// Events related to storefront widget state changes
#[derive(Debug, Clone)]
pub enum UiEvent {
    /// Active item moved in a carousel (exactly one marker move per transition)
    ActiveChanged {
        widget: CarouselId,
        old: usize,
        new: usize,
    },

    /// A product was added to the cart
    AddedToCart { product: String, quantity: u32 },

    /// A cart line was removed
    RemovedFromCart { product: String },

    /// Wishlist membership flipped for a product
    WishlistToggled { product: String, added: bool },

    /// Quantity input was reset to the floor value of 1
    QuantityClamped { requested: String },
}

/// Event sender wrapper for storefront widgets
///
/// Widgets hold this sender to emit events when their state changes.
#[derive(Clone, Debug)]
pub struct UiEventSender {
    sender: Option<Sender<UiEvent>>,
}

impl UiEventSender {
    /// Create event sender (connected to channel)
    pub fn new(sender: Sender<UiEvent>) -> Self {
        Self {
            sender: Some(sender),
        }
    }

    /// Create dummy sender (for tests or when events not needed)
    pub fn dummy() -> Self {
        Self { sender: None }
    }

    /// Emit event (silent if no receiver)
    pub fn emit(&self, event: UiEvent) {
        if let Some(ref tx) = self.sender {
            let _ = tx.send(event); // Ignore send errors (receiver might be dropped)
        }
    }
}

impl Default for UiEventSender {
    fn default() -> Self {
        Self::dummy()
    }
}
