//! Shop pages: home grid, product detail, cart, order history.

use eframe::egui::{self, RichText, TextEdit, vec2};

use crate::app::{Page, VitrineApp};
use crate::core::UiEvent;
use crate::entities::{ProductId, format_cents};
use crate::widgets::{gallery, hero};

/// Home page: hero slider, category chips, product grid.
pub fn show_home(ui: &mut egui::Ui, app: &mut VitrineApp) {
    hero::show(ui, &mut app.hero, &app.catalog.hero, &app.assets);
    ui.add_space(10.0);

    // Category chips
    ui.horizontal_wrapped(|ui| {
        let mut selection: Option<Option<String>> = None;
        if ui
            .selectable_label(app.category_filter.is_none(), "All")
            .clicked()
        {
            selection = Some(None);
        }
        for category in app.catalog.categories() {
            let active = app.category_filter.as_deref() == Some(category);
            if ui.selectable_label(active, category).clicked() {
                selection = Some(Some(category.to_string()));
            }
        }
        if let Some(filter) = selection {
            app.category_filter = filter;
        }
    });
    ui.separator();

    // Snapshot card data so the loop below can mutate cart/wishlist freely
    struct Card {
        id: ProductId,
        name: String,
        price: String,
        image: Option<String>,
        wished: bool,
    }
    let cards: Vec<Card> = app
        .catalog
        .search(&app.search_query, app.category_filter.as_deref())
        .into_iter()
        .map(|p| Card {
            id: p.id,
            name: p.name.clone(),
            price: p.price_label(),
            image: p.images.first().cloned(),
            wished: app.wishlist.contains(p.id),
        })
        .collect();

    if cards.is_empty() {
        ui.label("No products match your search.");
        return;
    }

    let mut open_product: Option<ProductId> = None;

    egui::ScrollArea::vertical().show(ui, |ui| {
        ui.horizontal_wrapped(|ui| {
            for card in &cards {
                egui::Frame::group(ui.style()).show(ui, |ui| {
                    ui.set_width(180.0);
                    ui.vertical(|ui| {
                        let image_response = gallery::card_image(
                            ui,
                            &app.assets,
                            card.image.as_deref(),
                            &card.name,
                            card.id as usize,
                            vec2(172.0, 120.0),
                        );
                        if image_response.clicked() {
                            open_product = Some(card.id);
                        }

                        if ui.link(RichText::new(&card.name).strong()).clicked() {
                            open_product = Some(card.id);
                        }
                        ui.label(&card.price);

                        ui.horizontal(|ui| {
                            let heart = if card.wished { "❤" } else { "♡" };
                            if ui.button(heart).clicked() {
                                let added = app.wishlist.toggle(card.id);
                                app.events.emit(UiEvent::WishlistToggled {
                                    product: card.name.clone(),
                                    added,
                                });
                            }
                            if ui.button("Add to cart").clicked() {
                                app.cart.add(card.id, 1);
                                app.events.emit(UiEvent::AddedToCart {
                                    product: card.name.clone(),
                                    quantity: 1,
                                });
                            }
                        });
                    });
                });
            }
        });
    });

    if let Some(id) = open_product {
        app.open_product(id);
    }
}

/// Product detail page: gallery, quantity field, cart/wishlist actions.
pub fn show_product(ui: &mut egui::Ui, app: &mut VitrineApp, id: ProductId) {
    if ui.link("← All products").clicked() {
        app.page = Page::Home;
        return;
    }
    ui.add_space(6.0);

    let Some(product) = app.catalog.get(id).cloned() else {
        ui.label("Product not found.");
        return;
    };

    // The scroll latch from the previous frame's gesture state disables the
    // scroll area; immediate mode cannot retune a container mid-frame.
    let scrolling_enabled = !app.gallery_scroll_locked;
    let mut latch = false;

    egui::ScrollArea::vertical()
        .enable_scrolling(scrolling_enabled)
        .show(ui, |ui| {
            ui.heading(&product.name);
            ui.label(RichText::new(&product.category).weak());
            ui.add_space(4.0);

            if let Some((gallery_id, gallery_state)) = &mut app.gallery
                && *gallery_id == id
            {
                latch = gallery::show(ui, gallery_state, &product, &app.assets);
            }

            ui.add_space(8.0);
            ui.label(RichText::new(product.price_label()).heading());
            ui.label(&product.description);
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                ui.label("Quantity:");
                let response = ui.add(
                    TextEdit::singleline(app.quantity.buffer_mut()).desired_width(48.0),
                );
                if response.changed()
                    && let Some(rejected) = app.quantity.sanitize()
                {
                    app.events
                        .emit(UiEvent::QuantityClamped { requested: rejected });
                }

                if ui.button("🛒 Add to cart").clicked() {
                    let quantity = app.quantity.value();
                    app.cart.add(id, quantity);
                    app.events.emit(UiEvent::AddedToCart {
                        product: product.name.clone(),
                        quantity,
                    });
                    app.quantity.reset();
                }

                let heart = if app.wishlist.contains(id) { "❤" } else { "♡" };
                if ui.button(heart).clicked() {
                    let added = app.wishlist.toggle(id);
                    app.events.emit(UiEvent::WishlistToggled {
                        product: product.name.clone(),
                        added,
                    });
                }
            });
        });

    app.gallery_scroll_locked = latch;
}

/// Cart page: line items with quantity controls and totals.
pub fn show_cart(ui: &mut egui::Ui, app: &mut VitrineApp) {
    ui.heading("Your cart");
    ui.add_space(6.0);

    if app.cart.is_empty() {
        ui.label("Your cart is empty.");
        return;
    }

    // Snapshot: the grid body mutates the cart
    let lines: Vec<(ProductId, u32, String, String)> = app
        .cart
        .lines()
        .map(|(id, qty)| {
            let name = app
                .catalog
                .get(id)
                .map(|p| p.name.clone())
                .unwrap_or_else(|| format!("Product #{}", id));
            let subtotal = format_cents(app.cart.subtotal_cents(&app.catalog, id));
            (id, qty, name, subtotal)
        })
        .collect();

    egui::Grid::new("cart_grid")
        .num_columns(4)
        .spacing([18.0, 6.0])
        .striped(true)
        .show(ui, |ui| {
            ui.label(RichText::new("Product").strong());
            ui.label(RichText::new("Qty").strong());
            ui.label(RichText::new("Subtotal").strong());
            ui.label("");
            ui.end_row();

            for (id, qty, name, subtotal) in &lines {
                ui.label(name);
                ui.horizontal(|ui| {
                    if ui.button("−").clicked() {
                        // Dropping below 1 removes the line
                        app.cart.set_quantity(*id, i64::from(*qty) - 1);
                    }
                    ui.monospace(format!("{}", qty));
                    if ui.button("＋").clicked() {
                        app.cart.add(*id, 1);
                    }
                });
                ui.label(subtotal);
                if ui.button("Remove").clicked() {
                    app.cart.remove(*id);
                    app.events.emit(UiEvent::RemovedFromCart {
                        product: name.clone(),
                    });
                }
                ui.end_row();
            }
        });

    ui.separator();
    ui.label(
        RichText::new(format!(
            "Total: {}",
            format_cents(app.cart.total_cents(&app.catalog))
        ))
        .heading(),
    );
}

/// Order history page with collapsible per-order review forms.
pub fn show_orders(ui: &mut egui::Ui, app: &mut VitrineApp) {
    ui.heading("Order history");
    ui.add_space(6.0);

    let orders = app.orders.clone();
    for order in &orders {
        egui::Frame::group(ui.style()).show(ui, |ui| {
            ui.horizontal(|ui| {
                ui.label(RichText::new(format!("#{}", order.id)).monospace());
                ui.label(format!("{} × {}", order.product_name, order.quantity));
                ui.label(order.total_label());
                ui.label(RichText::new(&order.placed_on).weak());
            });

            if ui.button("Write a review").clicked() {
                app.toggle_review(order.id);
            }

            if app.review_open.get(&order.id).copied().unwrap_or(false) {
                let draft = app.review_drafts.entry(order.id).or_default();
                ui.add(
                    TextEdit::multiline(draft)
                        .hint_text("Share your thoughts...")
                        .desired_rows(3),
                );
                if ui.button("Submit review").clicked() {
                    app.review_drafts.remove(&order.id);
                    app.review_open.insert(order.id, false);
                    app.status_bar
                        .set(format!("Review submitted for {}.", order.product_name));
                }
            }
        });
        ui.add_space(6.0);
    }
}
