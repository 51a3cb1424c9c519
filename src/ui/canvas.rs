use eframe::egui::{self, Color32, CursorIcon, ScrollArea, Sense, Stroke, Ui};

use crate::imaging::measure::PixelPoint;
use crate::state::AppState;
use crate::ui::texture::TextureCache;

// ---------------------------------------------------------------------------
// Image canvas (central panel)
// ---------------------------------------------------------------------------

/// Show the current image at one texel per point and feed clicks to the
/// distance tool.
pub fn image_canvas(ui: &mut Ui, state: &mut AppState, cache: &mut TextureCache) {
    let Some(image) = &state.image else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("Open an image to view it  (File → Open…)");
        });
        return;
    };

    let (width, height) = image.dimensions();
    let texture = cache.get(ui.ctx(), state.image_revision, || image.to_color_image());
    let sense = if state.measuring {
        Sense::click()
    } else {
        Sense::hover()
    };

    ScrollArea::both()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| {
            let response = ui.add(
                egui::Image::new((texture.id(), texture.size_vec2()))
                    .fit_to_exact_size(texture.size_vec2())
                    .sense(sense),
            );
            let origin = response.rect.min;

            if response.clicked() {
                let clicked = response
                    .interact_pointer_pos()
                    .and_then(|pos| PixelPoint::from_offset(pos.x - origin.x, pos.y - origin.y, width, height));
                if let Some(point) = clicked {
                    state.record_click(point);
                }
            }

            // Markers sit on pixel centres.
            let painter = ui.painter_at(response.rect);
            let stroke = Stroke::new(state.config.marker_stroke, Color32::RED);
            for point in state.measurement.markers() {
                let centre = origin + egui::vec2(point.x as f32 + 0.5, point.y as f32 + 0.5);
                painter.circle_stroke(centre, state.config.marker_radius, stroke);
            }

            if state.measuring {
                response.on_hover_cursor(CursorIcon::Crosshair);
            }
        });
}
