use eframe::egui::{self, RichText, Ui};

use crate::imaging::loader::SUPPORTED_EXTENSIONS;
use crate::state::AppState;

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the File / Edit / Measure menus.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                ui.close_menu();
                open_file_dialog(state);
            }
            if ui.button("Save…").clicked() {
                ui.close_menu();
                save_file_dialog(state);
            }
            ui.separator();
            if ui.button("Exit").clicked() {
                ui.close_menu();
                log::info!("Exit requested");
                ui.ctx().send_viewport_cmd(egui::ViewportCommand::Close);
            }
        });

        ui.menu_button("Edit", |ui: &mut Ui| {
            if ui.button("Copy").clicked() {
                ui.close_menu();
                if let Some(pixels) = state.copy_pixels() {
                    ui.ctx().copy_image(pixels);
                }
            }
            if ui.button("Convert to 8-bit").clicked() {
                ui.close_menu();
                state.convert_to_grayscale();
            }
            if ui.button("Calculate Fourier Transform").clicked() {
                ui.close_menu();
                state.compute_fourier();
            }
        });

        ui.menu_button("Measure", |ui: &mut Ui| {
            if ui
                .selectable_label(state.measuring, "Measure Distance")
                .clicked()
            {
                ui.close_menu();
                state.toggle_measuring();
            }
        });
    });
}

// ---------------------------------------------------------------------------
// Status bar
// ---------------------------------------------------------------------------

/// One-line summary of the current image and tool.
pub fn status_bar(ui: &mut Ui, state: &AppState) {
    ui.horizontal(|ui: &mut Ui| {
        match &state.image {
            Some(image) => {
                let (w, h) = image.dimensions();
                ui.label(format!("{}  {w} × {h}  {}", image.file_name(), image.color_label()));
            }
            None => {
                ui.label("No image loaded");
            }
        }

        if state.measuring {
            ui.separator();
            let hint = match state.measurement.pending().len() {
                0 => "Measuring: click the first point",
                _ => "Measuring: click the second point",
            };
            ui.label(RichText::new(hint).italics());
        }
    });
}

// ---------------------------------------------------------------------------
// File dialogs
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open image")
        .add_filter("Image files", SUPPORTED_EXTENSIONS)
        .pick_file();

    if let Some(path) = file {
        state.open_path(&path);
    }
}

pub fn save_file_dialog(state: &mut AppState) {
    if !state.can_save() {
        return;
    }

    let suggested = state
        .image
        .as_ref()
        .and_then(|img| img.path().file_stem())
        .map(|stem| format!("{}.png", stem.to_string_lossy()))
        .unwrap_or_else(|| "image.png".to_string());

    let file = rfd::FileDialog::new()
        .set_title("Save image")
        .set_file_name(suggested)
        .add_filter("PNG files", &["png"])
        .add_filter("JPEG files", &["jpg", "jpeg"])
        .add_filter("All files", &["*"])
        .save_file();

    if let Some(path) = file {
        state.save_to(&path);
    }
}
