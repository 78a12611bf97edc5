//! Product image gallery: preview surface plus thumbnail strip.
//!
//! The preview mirrors whichever thumbnail is active - in immediate mode the
//! mirroring is a read of the cursor each frame, there is no second copy of
//! the index to keep in sync.

use eframe::egui::{self, Sense, Stroke, vec2};
use eframe::egui::epaint::StrokeKind;

use crate::app::assets::Assets;
use crate::core::Carousel;
use crate::entities::Product;
use crate::widgets::image_or_placeholder;

const PREVIEW_HEIGHT: f32 = 300.0;
const THUMB_SIZE: f32 = 64.0;

/// Render the gallery. Returns true while the current swipe gesture has
/// latched vertical-scroll suppression (the caller disables the enclosing
/// scroll area for the next frame).
pub fn show(
    ui: &mut egui::Ui,
    gallery: &mut Carousel,
    product: &Product,
    assets: &Assets,
) -> bool {
    let mut scroll_locked = false;
    let width = ui.available_width().min(480.0);

    // Preview surface with swipe navigation
    let (rect, response) = ui.allocate_exact_size(vec2(width, PREVIEW_HEIGHT), Sense::click_and_drag());

    if let Some(pos) = response.interact_pointer_pos() {
        if response.drag_started() {
            gallery.touch_start(pos.x);
        } else if response.dragged() {
            scroll_locked = gallery.touch_move(pos.x);
        }
    }
    if response.drag_stopped()
        && let Some(pos) = ui.input(|i| i.pointer.latest_pos())
    {
        gallery.touch_end(pos.x);
    }

    let painter = ui.painter_at(rect);
    if product.images.is_empty() {
        // Inert gallery still shows one placeholder card
        image_or_placeholder(&painter, rect, assets, "", &product.name, product.id as usize);
        return false;
    }

    let active_key = &product.images[gallery.cursor()];
    image_or_placeholder(
        &painter,
        rect,
        assets,
        active_key,
        &format!("{} ({})", product.name, gallery.cursor() + 1),
        product.id as usize,
    );

    // Thumbnail strip; clicking a thumbnail jumps straight to it
    ui.add_space(6.0);
    ui.horizontal(|ui| {
        for (i, key) in product.images.iter().enumerate() {
            let (thumb_rect, thumb_response) =
                ui.allocate_exact_size(vec2(THUMB_SIZE, THUMB_SIZE), Sense::click());
            let thumb_painter = ui.painter_at(thumb_rect);
            image_or_placeholder(
                &thumb_painter,
                thumb_rect,
                assets,
                key,
                &format!("{}", i + 1),
                product.id as usize,
            );
            if i == gallery.cursor() {
                thumb_painter.rect_stroke(
                    thumb_rect,
                    2.0,
                    Stroke::new(2.0, ui.visuals().selection.stroke.color),
                    StrokeKind::Inside,
                );
            }
            if thumb_response.clicked() {
                gallery.go_to(i);
            }
        }
    });

    scroll_locked
}

/// Compact gallery rect helper for grid cards (image area only, no strip).
pub fn card_image(
    ui: &mut egui::Ui,
    assets: &Assets,
    key: Option<&str>,
    label: &str,
    seed: usize,
    size: egui::Vec2,
) -> egui::Response {
    let (rect, response) = ui.allocate_exact_size(size, Sense::click());
    let painter = ui.painter_at(rect);
    image_or_placeholder(&painter, rect, assets, key.unwrap_or(""), label, seed);
    response
}
