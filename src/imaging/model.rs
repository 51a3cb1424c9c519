use std::path::{Path, PathBuf};

use eframe::egui::ColorImage;
use image::{ColorType, DynamicImage, GenericImageView};

// ---------------------------------------------------------------------------
// ViewerImage – the image currently shown in the window
// ---------------------------------------------------------------------------

/// The working image together with the file it was opened from.
///
/// `image` is what every operation reads and what Save writes, so after a
/// grayscale conversion it holds the converted pixels.
#[derive(Debug, Clone)]
pub struct ViewerImage {
    pub image: DynamicImage,
    pub path: PathBuf,
}

impl ViewerImage {
    pub fn new(image: DynamicImage, path: impl Into<PathBuf>) -> Self {
        Self {
            image,
            path: path.into(),
        }
    }

    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// File name for the status line, falling back to the full path.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| self.path.display().to_string())
    }

    /// Short human label of the pixel layout, e.g. `RGB 8-bit`.
    pub fn color_label(&self) -> &'static str {
        match self.image.color() {
            ColorType::L8 => "Grayscale 8-bit",
            ColorType::La8 => "Grayscale + alpha 8-bit",
            ColorType::Rgb8 => "RGB 8-bit",
            ColorType::Rgba8 => "RGBA 8-bit",
            ColorType::L16 | ColorType::La16 => "Grayscale 16-bit",
            ColorType::Rgb16 | ColorType::Rgba16 => "RGB 16-bit",
            ColorType::Rgb32F | ColorType::Rgba32F => "RGB float",
            _ => "Other",
        }
    }

    /// Upload-ready pixels for an egui texture or the clipboard.
    pub fn to_color_image(&self) -> ColorImage {
        let rgba = self.image.to_rgba8();
        ColorImage::from_rgba_unmultiplied(
            [rgba.width() as usize, rgba.height() as usize],
            rgba.as_raw(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Luma, Rgb};

    #[test]
    fn color_image_matches_dimensions() {
        let img = ImageBuffer::from_fn(7, 3, |x, _| Rgb([x as u8 * 10, 0, 0]));
        let viewer = ViewerImage::new(DynamicImage::ImageRgb8(img), "red.png");

        let color = viewer.to_color_image();
        assert_eq!(color.size, [7, 3]);
        assert_eq!(color.pixels[6].r(), 60);
        assert_eq!(color.pixels[6].a(), 255);
    }

    #[test]
    fn labels_describe_color_type() {
        let gray = DynamicImage::ImageLuma8(ImageBuffer::from_pixel(2, 2, Luma([1u8])));
        let viewer = ViewerImage::new(gray, "/tmp/photos/gray.bmp");
        assert_eq!(viewer.color_label(), "Grayscale 8-bit");
        assert_eq!(viewer.file_name(), "gray.bmp");
        assert_eq!(viewer.dimensions(), (2, 2));
    }
}
