//! Status bar component: transient messages plus cart/wishlist badges.

use std::time::{Duration, Instant};

use eframe::egui;

/// How long a status message stays visible.
const MESSAGE_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Default)]
pub struct StatusBar {
    message: Option<(String, Instant)>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the current message and restart its timeout.
    pub fn set(&mut self, message: impl Into<String>) {
        self.message = Some((message.into(), Instant::now()));
    }

    /// Currently displayed message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_ref().map(|(m, _)| m.as_str())
    }

    /// Expire stale messages. Called once per frame before rendering.
    pub fn update(&mut self) {
        if let Some((_, set_at)) = &self.message
            && set_at.elapsed() > MESSAGE_TIMEOUT
        {
            self.message = None;
        }
    }

    /// Render status bar at bottom of screen
    pub fn render(&self, ctx: &egui::Context, cart_units: u32, wishlist_len: usize) {
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                if let Some((message, _)) = &self.message {
                    ui.label(message);
                }

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    ui.monospace(format!("v{}", env!("CARGO_PKG_VERSION")));
                    ui.separator();
                    ui.monospace(format!("❤ {}", wishlist_len));
                    ui.separator();
                    ui.monospace(format!("🛒 {}", cart_units));
                });
            });
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_read_message() {
        let mut bar = StatusBar::new();
        assert_eq!(bar.message(), None);
        bar.set("🛒 Item added to cart!");
        assert_eq!(bar.message(), Some("🛒 Item added to cart!"));
        bar.update(); // fresh message survives an update
        assert!(bar.message().is_some());
    }
}
