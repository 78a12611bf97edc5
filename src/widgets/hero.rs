//! Home-page hero banner: auto-advancing slider with swipe and buttons.

use eframe::egui::{self, Align2, Color32, FontId, Rect, Sense, Stroke, vec2};

use crate::app::assets::Assets;
use crate::core::Carousel;
use crate::entities::HeroSlide;
use crate::widgets::image_or_placeholder;

const HERO_HEIGHT: f32 = 240.0;
const NAV_BUTTON_SIZE: f32 = 28.0;

/// Render the hero slider. With no slides the section is simply absent,
/// mirroring the inert controller.
pub fn show(ui: &mut egui::Ui, hero: &mut Carousel, slides: &[HeroSlide], assets: &Assets) {
    if slides.is_empty() {
        return;
    }

    let width = ui.available_width();
    let (rect, response) = ui.allocate_exact_size(vec2(width, HERO_HEIGHT), Sense::click_and_drag());

    // Swipe input. The pointer abscissa feeds the gesture tracker; the
    // classification (threshold, direction) lives in the core.
    if let Some(pos) = response.interact_pointer_pos() {
        if response.drag_started() {
            hero.touch_start(pos.x);
        } else if response.dragged() {
            hero.touch_move(pos.x);
        }
    }
    if response.drag_stopped()
        && let Some(pos) = ui.input(|i| i.pointer.latest_pos())
    {
        hero.touch_end(pos.x);
    }

    let painter = ui.painter_at(rect);
    let slide = &slides[hero.cursor()];
    image_or_placeholder(&painter, rect, assets, &slide.asset, &slide.caption, hero.cursor());

    // Caption banner along the bottom edge
    let caption_rect = Rect::from_min_max(
        egui::pos2(rect.left(), rect.bottom() - 36.0),
        rect.max,
    );
    painter.rect_filled(caption_rect, 0.0, Color32::from_black_alpha(140));
    painter.text(
        egui::pos2(caption_rect.left() + 12.0, caption_rect.center().y),
        Align2::LEFT_CENTER,
        &slide.caption,
        FontId::proportional(16.0),
        Color32::WHITE,
    );

    // Prev/next buttons overlaid on the slide edges
    let prev_rect = Rect::from_center_size(
        egui::pos2(rect.left() + 26.0, rect.center().y),
        vec2(NAV_BUTTON_SIZE, NAV_BUTTON_SIZE),
    );
    let next_rect = Rect::from_center_size(
        egui::pos2(rect.right() - 26.0, rect.center().y),
        vec2(NAV_BUTTON_SIZE, NAV_BUTTON_SIZE),
    );
    if ui.put(prev_rect, egui::Button::new("◀")).clicked() {
        hero.prev();
    }
    if ui.put(next_rect, egui::Button::new("▶")).clicked() {
        hero.next();
    }

    // Position dots
    let dot_spacing = 14.0;
    let dots_width = dot_spacing * (slides.len().saturating_sub(1)) as f32;
    let mut x = rect.center().x - dots_width / 2.0;
    let y = rect.bottom() - 48.0;
    for i in 0..slides.len() {
        let center = egui::pos2(x, y);
        if i == hero.cursor() {
            painter.circle_filled(center, 4.0, Color32::WHITE);
        } else {
            painter.circle_stroke(center, 4.0, Stroke::new(1.0, Color32::from_white_alpha(180)));
        }
        x += dot_spacing;
    }
}
