use eframe::egui::{self, Context};
use egui_plot::{Plot, PlotImage, PlotPoint};

use crate::state::AppState;
use crate::ui::texture::TextureCache;

// ---------------------------------------------------------------------------
// Fourier spectrum window
// ---------------------------------------------------------------------------

/// Floating "Fourier Transform" window with the log-magnitude spectrum
/// plotted on frequency-index axes.
pub fn spectrum_window(ctx: &Context, state: &mut AppState, cache: &mut TextureCache) {
    let Some(spectrum) = &state.spectrum else {
        return;
    };

    let texture = cache.get(ctx, state.spectrum_revision, || spectrum.to_color_image());
    let (w, h) = (spectrum.width as f64, spectrum.height as f64);
    let (min, max) = spectrum.range();

    let mut open = true;
    egui::Window::new("Fourier Transform")
        .open(&mut open)
        .default_size([480.0, 480.0])
        .resizable(true)
        .show(ctx, |ui| {
            ui.label(format!("ln(1 + |F|)  range {min:.2} … {max:.2}"));
            Plot::new("fourier_plot")
                .data_aspect(1.0)
                .x_axis_label("u")
                .y_axis_label("v")
                .allow_boxed_zoom(true)
                .allow_drag(true)
                .allow_scroll(true)
                .allow_zoom(true)
                .show(ui, |plot_ui| {
                    plot_ui.image(PlotImage::new(
                        texture.id(),
                        PlotPoint::new(w / 2.0, h / 2.0),
                        [w as f32, h as f32],
                    ));
                });
        });

    if !open {
        state.spectrum = None;
    }
}
