use std::path::Path;

use eframe::egui::ColorImage;

use crate::config::ViewerConfig;
use crate::imaging::fourier::{log_magnitude_spectrum, Spectrum};
use crate::imaging::loader::{load_file, save_file};
use crate::imaging::measure::{describe_distance, Measurement, PixelPoint};
use crate::imaging::model::ViewerImage;
use crate::imaging::ops::to_grayscale;

// ---------------------------------------------------------------------------
// Notices (info / warning / error pop-ups)
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Info,
    Warning,
    Error,
    /// Result of a completed measurement; its markers live as long as it does.
    Distance,
}

/// A message waiting to be acknowledged by the user.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub title: String,
    pub text: String,
}

impl Notice {
    pub fn info(text: impl Into<String>) -> Self {
        Self::titled(NoticeKind::Info, "Info", text)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::titled(NoticeKind::Warning, "Warning", text)
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self::titled(NoticeKind::Error, "Error", text)
    }

    pub fn titled(kind: NoticeKind, title: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            kind,
            title: title.into(),
            text: text.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// The full UI state, independent of rendering.
pub struct AppState {
    pub config: ViewerConfig,

    /// Image being viewed (None until the user opens a file).
    pub image: Option<ViewerImage>,

    /// Bumped whenever the pixels of `image` change so textures get re-uploaded.
    pub image_revision: u64,

    /// Clicked points of the distance tool.
    pub measurement: Measurement,

    /// Whether clicks on the image record measurement points.
    pub measuring: bool,

    /// Last computed Fourier spectrum, shown in its own window.
    pub spectrum: Option<Spectrum>,
    pub spectrum_revision: u64,

    /// Pop-up waiting for acknowledgement.
    pub notice: Option<Notice>,
}

impl AppState {
    pub fn new(config: ViewerConfig) -> Self {
        Self {
            config,
            image: None,
            image_revision: 0,
            measurement: Measurement::default(),
            measuring: false,
            spectrum: None,
            spectrum_revision: 0,
            notice: None,
        }
    }

    /// Warn and return `None` when there is nothing to operate on.
    fn require_image(&mut self, refusal: &str) -> Option<&ViewerImage> {
        if self.image.is_none() {
            log::warn!("{refusal}");
            self.show_notice(Notice::warning(refusal));
        }
        self.image.as_ref()
    }

    fn replace_image(&mut self, image: ViewerImage) {
        self.image = Some(image);
        self.image_revision += 1;
        self.measurement.clear();
    }

    // ---- File menu ----

    /// Open `path` as the current image. On failure the previous image stays.
    pub fn open_path(&mut self, path: &Path) {
        match load_file(path, self.config.max_display_size) {
            Ok(image) => {
                let (w, h) = image.dimensions();
                log::info!("Opened {} ({w}x{h}, {})", path.display(), image.color_label());
                self.replace_image(image);
                self.spectrum = None;
            }
            Err(e) => {
                log::error!("Failed to open {}: {e:#}", path.display());
                self.show_notice(Notice::error(format!("Could not open image: {e:#}")));
            }
        }
    }

    /// Whether Save has something to write; warns otherwise.
    pub fn can_save(&mut self) -> bool {
        self.require_image("No image to save").is_some()
    }

    /// Write the current image to `path`.
    pub fn save_to(&mut self, path: &Path) {
        let Some(image) = self.require_image("No image to save") else {
            return;
        };
        match save_file(&image.image, path) {
            Ok(written) => {
                log::info!("Saved image to {}", written.display());
                self.show_notice(Notice::info("Image saved successfully"));
            }
            Err(e) => {
                log::error!("Failed to save {}: {e:#}", path.display());
                self.show_notice(Notice::error(format!("Could not save image: {e:#}")));
            }
        }
    }

    // ---- Edit menu ----

    /// Pixels to put on the clipboard, or `None` (with a warning) if no image.
    pub fn copy_pixels(&mut self) -> Option<ColorImage> {
        let pixels = self.require_image("No image to copy")?.to_color_image();
        log::info!("Copied {}x{} image to clipboard", pixels.size[0], pixels.size[1]);
        self.show_notice(Notice::info("Image copied to clipboard"));
        Some(pixels)
    }

    /// Replace the current image by its 8-bit grayscale version.
    pub fn convert_to_grayscale(&mut self) {
        let Some(image) = self.require_image("No image to convert") else {
            return;
        };
        let gray = ViewerImage::new(to_grayscale(&image.image), image.path.clone());
        log::info!("Converted {} to 8-bit grayscale", gray.file_name());
        self.replace_image(gray);
    }

    /// Compute the Fourier spectrum of the current image for display.
    pub fn compute_fourier(&mut self) {
        let Some(image) = self.require_image("No image to perform Fourier transform on") else {
            return;
        };
        match log_magnitude_spectrum(&image.image) {
            Ok(spectrum) => {
                log::info!("Fourier transform of {}x{} image", spectrum.width, spectrum.height);
                self.spectrum = Some(spectrum);
                self.spectrum_revision += 1;
            }
            Err(e) => {
                log::error!("Fourier transform failed: {e}");
                self.show_notice(Notice::error(e.to_string()));
            }
        }
    }

    // ---- Measure menu ----

    pub fn toggle_measuring(&mut self) {
        self.measuring = !self.measuring;
        if !self.measuring {
            self.measurement.clear();
        }
        log::info!("Distance measurement {}", if self.measuring { "on" } else { "off" });
    }

    /// Handle a click on the image at `point`.
    pub fn record_click(&mut self, point: PixelPoint) {
        if !self.measuring || self.image.is_none() {
            return;
        }
        log::debug!("Measurement point ({}, {})", point.x, point.y);
        if let Some(distance) = self.measurement.record(point) {
            log::info!("Measured distance {distance:.2} px");
            self.show_notice(Notice::titled(
                NoticeKind::Distance,
                "Distance",
                describe_distance(distance),
            ));
        }
    }

    /// Replace the pending pop-up. A superseded distance result takes its
    /// markers with it.
    fn show_notice(&mut self, notice: Notice) {
        if notice.kind != NoticeKind::Distance {
            self.end_distance_notice();
        }
        self.notice = Some(notice);
    }

    fn end_distance_notice(&mut self) {
        if self.notice.as_ref().map(|n| n.kind) == Some(NoticeKind::Distance) {
            self.measurement.acknowledge();
        }
    }

    /// Close the pop-up; a completed measurement loses its markers with it.
    pub fn dismiss_notice(&mut self) {
        self.end_distance_notice();
        self.notice = None;
    }
}
