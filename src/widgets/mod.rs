//! UI widgets: hero slider, product gallery, shop pages, status bar.

pub mod gallery;
pub mod hero;
pub mod shop;
pub mod status;

use eframe::egui::{self, Align2, Color32, FontId, Rect};

use crate::app::assets::Assets;

/// Flat card colors cycled by seed when no texture exists for a key.
const PLACEHOLDER_COLORS: &[Color32] = &[
    Color32::from_rgb(0x3a, 0x5a, 0x78),
    Color32::from_rgb(0x6b, 0x4f, 0x8a),
    Color32::from_rgb(0x2f, 0x6f, 0x5f),
    Color32::from_rgb(0x8a, 0x5a, 0x3a),
    Color32::from_rgb(0x75, 0x3a, 0x52),
];

/// Draw the texture for `key` into `rect`, or a labeled placeholder card.
pub fn image_or_placeholder(
    painter: &egui::Painter,
    rect: Rect,
    assets: &Assets,
    key: &str,
    label: &str,
    seed: usize,
) {
    if let Some(texture) = assets.get(key) {
        let uv = Rect::from_min_max(egui::pos2(0.0, 0.0), egui::pos2(1.0, 1.0));
        painter.image(texture.id(), rect, uv, Color32::WHITE);
    } else {
        let color = PLACEHOLDER_COLORS[seed % PLACEHOLDER_COLORS.len()];
        painter.rect_filled(rect, 4.0, color);
        painter.text(
            rect.center(),
            Align2::CENTER_CENTER,
            label,
            FontId::proportional(14.0),
            Color32::WHITE,
        );
    }
}
