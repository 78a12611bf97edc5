//! Persistent application settings (stored via eframe storage as JSON).
//!
//! Cart and wishlist contents are deliberately NOT here: session state does
//! not survive a restart.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AppSettings {
    // Hero slider
    pub auto_advance_secs: f32, // Auto-advance period (persistent)

    // UI
    pub dark_mode: bool,
    pub font_size: f32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            auto_advance_secs: 5.0,
            dark_mode: true,
            font_size: 14.0,
        }
    }
}

impl AppSettings {
    /// Period clamped to something sane; a zero or negative override would
    /// otherwise spin the slider every frame.
    pub fn auto_advance_period(&self) -> std::time::Duration {
        std::time::Duration::from_secs_f32(self.auto_advance_secs.max(0.25))
    }
}
