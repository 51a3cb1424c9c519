use std::path::PathBuf;

use eframe::egui::{self, TextureOptions};

use crate::config::ViewerConfig;
use crate::state::AppState;
use crate::ui::texture::TextureCache;
use crate::ui::{canvas, fourier, notice, panels};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

pub struct ImageViewerApp {
    pub state: AppState,
    image_texture: TextureCache,
    spectrum_texture: TextureCache,
}

impl ImageViewerApp {
    pub fn new(config: ViewerConfig, initial_image: Option<PathBuf>) -> Self {
        let mut state = AppState::new(config);
        if let Some(path) = initial_image {
            state.open_path(&path);
        }
        Self {
            state,
            // Nearest filtering keeps pixels crisp for measuring.
            image_texture: TextureCache::new("current_image", TextureOptions::NEAREST),
            spectrum_texture: TextureCache::new("fourier_spectrum", TextureOptions::LINEAR),
        }
    }
}

impl eframe::App for ImageViewerApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Bottom panel: status line ----
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            panels::status_bar(ui, &self.state);
        });

        // ---- Central panel: image ----
        egui::CentralPanel::default().show(ctx, |ui| {
            canvas::image_canvas(ui, &mut self.state, &mut self.image_texture);
        });

        fourier::spectrum_window(ctx, &mut self.state, &mut self.spectrum_texture);
        notice::notice_window(ctx, &mut self.state);
    }
}
