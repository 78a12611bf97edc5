//! Main application loop - eframe::App implementation.
//!
//! Flow per frame:
//! 1. Apply theme and font settings
//! 2. Lazy-load textures (first frame only)
//! 3. Drive the hero auto-advance clock
//! 4. Drain widget events
//! 5. Render UI (top bar, page, status bar)
//!
//! Everything below runs on the single UI thread; button clicks, the
//! auto-advance tick and gesture resolution all mutate carousel cursors
//! from here and nowhere else.

use std::time::Instant;

use eframe::egui;
use log::trace;

use crate::app::{Page, VitrineApp};
use crate::widgets::shop;

impl eframe::App for VitrineApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Apply theme based on settings
        if self.settings.dark_mode {
            ctx.set_visuals(egui::Visuals::dark());
        } else {
            ctx.set_visuals(egui::Visuals::light());
        }

        // Apply font size from settings
        let mut style = (*ctx.style()).clone();
        for (_, font_id) in style.text_styles.iter_mut() {
            font_id.size = self.settings.font_size;
        }
        ctx.set_style(style);

        // Texture upload needs a live context, so it happens here, once
        let assets_dir = self.assets_dir.clone();
        self.assets.ensure_loaded(ctx, assets_dir.as_deref());

        // Hero auto-advance; schedule a repaint for the next tick so the
        // slider moves even while the user is idle
        if let Some(delay) = self.hero.update(Instant::now()) {
            ctx.request_repaint_after(delay);
        }

        // Apply widget events (status messages etc.)
        self.handle_events();

        self.render_top_bar(ctx);

        self.status_bar.update();
        self.status_bar
            .render(ctx, self.cart.unit_count(), self.wishlist.len());

        egui::CentralPanel::default().show(ctx, |ui| match self.page {
            Page::Home => shop::show_home(ui, self),
            Page::Product(id) => shop::show_product(ui, self, id),
            Page::Cart => shop::show_cart(ui, self),
            Page::Orders => shop::show_orders(ui, self),
        });
    }

    /// Save app state to persistent storage (settings only; cart and
    /// wishlist are deliberately session-scoped).
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        if let Ok(json) = serde_json::to_string(self) {
            storage.set_string(eframe::APP_KEY, json);
            trace!(
                "App state saved: period={}s, dark={}",
                self.settings.auto_advance_secs, self.settings.dark_mode
            );
        }
    }
}

impl VitrineApp {
    /// Top navigation bar: brand, menu toggle, nav links, search toggle.
    fn render_top_bar(&mut self, ctx: &egui::Context) {
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if ui
                    .button(egui::RichText::new("VITRINE").strong())
                    .clicked()
                {
                    self.page = Page::Home;
                }

                if ui.button("☰").clicked() {
                    self.toggle_menu();
                }

                if self.show_menu {
                    if ui.link("Home").clicked() {
                        self.page = Page::Home;
                    }
                    if ui.link("Cart").clicked() {
                        self.page = Page::Cart;
                    }
                    if ui.link("Orders").clicked() {
                        self.page = Page::Orders;
                    }
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    if ui.button(format!("🛒 {}", self.cart.unit_count())).clicked() {
                        self.page = Page::Cart;
                    }

                    if ui.button("🔍").clicked() {
                        self.toggle_search();
                    }
                    if self.show_search {
                        ui.add(
                            egui::TextEdit::singleline(&mut self.search_query)
                                .hint_text("Search products...")
                                .desired_width(180.0),
                        );
                    }
                });
            });
        });
    }
}
