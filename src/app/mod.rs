//! Application module - VitrineApp and related functionality.
//!
//! This module organizes the main application logic into focused submodules:
//! - `events` - Draining the UI event channel into status/side effects
//! - `run` - eframe::App implementation (per-frame update loop)
//! - `assets` - Texture store for product and hero images

pub mod assets;
mod events;
mod run;

use std::collections::HashMap;
use std::path::PathBuf;

use crossbeam_channel::{Receiver, unbounded};
use log::info;

use crate::core::{Carousel, CarouselId, QuantityField, UiEvent, UiEventSender};
use crate::entities::order::OrderId;
use crate::entities::{Cart, Catalog, Order, ProductId, Wishlist};
use crate::settings::AppSettings;
use crate::widgets::status::StatusBar;
use assets::Assets;

/// Which page the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Page {
    #[default]
    Home,
    Product(ProductId),
    Cart,
    Orders,
}

/// Main application state.
///
/// Only `settings` persists across runs; cart, wishlist and all navigation
/// state are session-scoped on purpose.
#[derive(serde::Deserialize, serde::Serialize)]
#[serde(default)]
pub struct VitrineApp {
    pub settings: AppSettings,

    #[serde(skip)]
    pub catalog: Catalog,
    #[serde(skip)]
    pub orders: Vec<Order>,
    #[serde(skip)]
    pub page: Page,

    /// Hero slider controller (auto-advance variant)
    #[serde(skip)]
    pub hero: Carousel,
    /// Gallery controller for the currently open product, if any
    #[serde(skip)]
    pub gallery: Option<(ProductId, Carousel)>,
    /// Scroll suppression latched by the gallery gesture last frame
    #[serde(skip)]
    pub gallery_scroll_locked: bool,

    #[serde(skip)]
    pub quantity: QuantityField,
    #[serde(skip)]
    pub cart: Cart,
    #[serde(skip)]
    pub wishlist: Wishlist,

    // Visibility flags (idempotent toggle pairs)
    #[serde(skip)]
    pub show_menu: bool,
    #[serde(skip)]
    pub show_search: bool,
    #[serde(skip)]
    pub review_open: HashMap<OrderId, bool>,
    #[serde(skip)]
    pub review_drafts: HashMap<OrderId, String>,

    #[serde(skip)]
    pub search_query: String,
    #[serde(skip)]
    pub category_filter: Option<String>,

    #[serde(skip)]
    pub status_bar: StatusBar,
    #[serde(skip)]
    pub assets: Assets,
    #[serde(skip)]
    pub assets_dir: Option<PathBuf>,

    /// Event emitter handed to widgets (shared with both carousels)
    #[serde(skip)]
    pub events: UiEventSender,
    /// Event receiver drained once per frame
    #[serde(skip)]
    pub event_rx: Option<Receiver<UiEvent>>,
}

impl Default for VitrineApp {
    fn default() -> Self {
        Self {
            settings: AppSettings::default(),
            catalog: Catalog::default(),
            orders: Vec::new(),
            page: Page::Home,
            hero: Carousel::default(),
            gallery: None,
            gallery_scroll_locked: false,
            quantity: QuantityField::new(),
            cart: Cart::new(),
            wishlist: Wishlist::new(),
            show_menu: false,
            show_search: false,
            review_open: HashMap::new(),
            review_drafts: HashMap::new(),
            search_query: String::new(),
            category_filter: None,
            status_bar: StatusBar::new(),
            assets: Assets::new(),
            assets_dir: None,
            events: UiEventSender::dummy(),
            event_rx: None,
        }
    }
}

impl VitrineApp {
    /// Wire up runtime state after construction or after loading persisted
    /// settings (channels and controllers do not survive serialization).
    pub fn rebuild_runtime(
        &mut self,
        catalog: Catalog,
        orders: Vec<Order>,
        assets_dir: Option<PathBuf>,
    ) {
        let (tx, rx) = unbounded();
        self.events = UiEventSender::new(tx);
        self.event_rx = Some(rx);

        self.hero = Carousel::new(CarouselId::Hero, catalog.hero.len(), self.events.clone())
            .with_auto_advance(self.settings.auto_advance_period());
        self.gallery = None;
        self.gallery_scroll_locked = false;

        info!(
            "Runtime rebuilt: {} product(s), {} hero slide(s)",
            catalog.products.len(),
            catalog.hero.len()
        );

        self.catalog = catalog;
        self.orders = orders;
        self.assets = Assets::new();
        self.assets_dir = assets_dir;
        self.page = Page::Home;
    }

    /// Open a product page: fresh gallery controller over the product's
    /// image snapshot, quantity back to the floor value.
    pub fn open_product(&mut self, id: ProductId) {
        let image_count = self.catalog.get(id).map(|p| p.images.len()).unwrap_or(0);
        self.gallery = Some((
            id,
            Carousel::new(CarouselId::ProductGallery, image_count, self.events.clone())
                .with_scroll_latch(),
        ));
        self.gallery_scroll_locked = false;
        self.quantity.reset();
        self.page = Page::Product(id);
    }

    pub fn toggle_menu(&mut self) {
        self.show_menu = !self.show_menu;
    }

    pub fn toggle_search(&mut self) {
        self.show_search = !self.show_search;
    }

    pub fn toggle_review(&mut self, order: OrderId) {
        let open = self.review_open.entry(order).or_insert(false);
        *open = !*open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_app() -> VitrineApp {
        let mut app = VitrineApp::default();
        app.rebuild_runtime(Catalog::demo(), Order::demo_history(), None);
        app
    }

    #[test]
    fn test_toggle_pairs_return_to_original_state() {
        let mut app = demo_app();

        app.toggle_menu();
        assert!(app.show_menu);
        app.toggle_menu();
        assert!(!app.show_menu);

        app.toggle_search();
        app.toggle_search();
        assert!(!app.show_search);

        app.toggle_review(101);
        assert!(app.review_open[&101]);
        app.toggle_review(101);
        assert!(!app.review_open[&101]);
    }

    #[test]
    fn test_open_product_builds_gallery_snapshot() {
        let mut app = demo_app();
        app.open_product(1);

        assert_eq!(app.page, Page::Product(1));
        let (id, gallery) = app.gallery.as_ref().expect("gallery built");
        assert_eq!(*id, 1);
        assert_eq!(gallery.len(), 3);
        assert_eq!(gallery.cursor(), 0);
        assert_eq!(app.quantity.value(), 1);
    }

    #[test]
    fn test_open_product_without_images_is_inert() {
        let mut app = demo_app();
        app.open_product(5); // Wool Beanie has no images

        let (_, gallery) = app.gallery.as_mut().expect("gallery built");
        assert!(gallery.is_empty());
        gallery.step(1);
        assert_eq!(gallery.cursor(), 0);
    }

    #[test]
    fn test_hero_controller_matches_slide_count() {
        let app = demo_app();
        assert_eq!(app.hero.len(), 3);
    }
}
