//! Texture store for product and hero images.
//!
//! The assets directory is scanned once, on the first frame (texture upload
//! needs a live egui context). Every decodable PNG/JPEG becomes a texture
//! keyed by its file stem; widgets paint flat placeholder cards for keys
//! that have no texture, so a missing or partial assets directory is never
//! an error.

use std::collections::HashMap;
use std::path::Path;

use anyhow::{Context, Result};
use eframe::egui;
use log::{info, warn};

#[derive(Default)]
pub struct Assets {
    textures: HashMap<String, egui::TextureHandle>,
    scanned: bool,
}

impl Assets {
    pub fn new() -> Self {
        Self::default()
    }

    /// Scan the assets directory once and upload everything decodable.
    pub fn ensure_loaded(&mut self, ctx: &egui::Context, dir: Option<&Path>) {
        if self.scanned {
            return;
        }
        self.scanned = true;

        let Some(dir) = dir else {
            info!("No assets directory given, using painted placeholders");
            return;
        };

        match self.load_dir(ctx, dir) {
            Ok(count) => info!("Loaded {} texture(s) from {}", count, dir.display()),
            Err(e) => warn!("Asset scan failed: {:#}", e),
        }
    }

    fn load_dir(&mut self, ctx: &egui::Context, dir: &Path) -> Result<usize> {
        let entries = std::fs::read_dir(dir)
            .with_context(|| format!("Failed to read assets directory: {}", dir.display()))?;

        let mut loaded = 0;
        for entry in entries {
            let path = entry?.path();
            let is_image = path
                .extension()
                .and_then(|e| e.to_str())
                .is_some_and(|e| matches!(e.to_ascii_lowercase().as_str(), "png" | "jpg" | "jpeg"));
            if !is_image {
                continue;
            }

            match load_texture(ctx, &path) {
                Ok((key, texture)) => {
                    self.textures.insert(key, texture);
                    loaded += 1;
                }
                Err(e) => warn!("Skipping {}: {:#}", path.display(), e),
            }
        }
        Ok(loaded)
    }

    pub fn get(&self, key: &str) -> Option<&egui::TextureHandle> {
        self.textures.get(key)
    }
}

fn load_texture(ctx: &egui::Context, path: &Path) -> Result<(String, egui::TextureHandle)> {
    let key = path
        .file_stem()
        .and_then(|s| s.to_str())
        .context("Non-UTF8 file name")?
        .to_string();

    let decoded = image::open(path)
        .with_context(|| format!("Failed to decode {}", path.display()))?
        .to_rgba8();
    let size = [decoded.width() as usize, decoded.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, decoded.as_raw());

    let texture = ctx.load_texture(&key, color_image, egui::TextureOptions::LINEAR);
    Ok((key, texture))
}
