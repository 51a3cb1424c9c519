use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use image::{DynamicImage, ImageFormat};

use super::model::ViewerImage;
use crate::error::ViewerError;

// ---------------------------------------------------------------------------
// Supported formats
// ---------------------------------------------------------------------------

/// Extensions offered by the open dialog and accepted on save.
pub const SUPPORTED_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "bmp", "gif"];

/// Extension appended when the user saves without one.
pub const DEFAULT_SAVE_EXTENSION: &str = "png";

fn extension_of(path: &Path) -> Option<String> {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase())
}

fn format_for(extension: &str) -> Result<ImageFormat, ViewerError> {
    if !SUPPORTED_EXTENSIONS.contains(&extension) {
        return Err(ViewerError::UnsupportedExtension {
            extension: extension.to_string(),
        });
    }
    ImageFormat::from_extension(extension).ok_or_else(|| ViewerError::UnsupportedExtension {
        extension: extension.to_string(),
    })
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Decode an image file and shrink it to fit within `max_size` × `max_size`.
///
/// The format is sniffed from the file content, so the extension does not
/// matter here.
pub fn load_file(path: &Path, max_size: u32) -> Result<ViewerImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("reading {}", path.display()))?;
    let image = image::load_from_memory(&bytes).map_err(|source| ViewerError::Decode {
        path: path.to_path_buf(),
        source,
    })?;

    Ok(ViewerImage::new(fit_within(image, max_size), path))
}

/// Shrink so neither side exceeds `max_size`, keeping the aspect ratio.
/// Images that already fit are returned untouched, never enlarged.
pub fn fit_within(image: DynamicImage, max_size: u32) -> DynamicImage {
    if image.width() <= max_size && image.height() <= max_size {
        return image;
    }
    image.thumbnail(max_size, max_size)
}

// ---------------------------------------------------------------------------
// Saving
// ---------------------------------------------------------------------------

/// Encode `image` at `path`, choosing the format from the extension.
///
/// A path without an extension gets [`DEFAULT_SAVE_EXTENSION`]. Returns the
/// path that was actually written.
pub fn save_file(image: &DynamicImage, path: &Path) -> Result<PathBuf> {
    let path = match extension_of(path) {
        Some(_) => path.to_path_buf(),
        None => path.with_extension(DEFAULT_SAVE_EXTENSION),
    };
    let extension = extension_of(&path).unwrap_or_default();
    let format = format_for(&extension)?;

    let encodable = match format {
        // JPEG has no alpha channel.
        ImageFormat::Jpeg if image.color().has_alpha() => DynamicImage::ImageRgb8(image.to_rgb8()),
        ImageFormat::Gif => DynamicImage::ImageRgba8(image.to_rgba8()),
        _ => image.clone(),
    };

    encodable
        .save_with_format(&path, format)
        .map_err(|source| ViewerError::Encode {
            path: path.clone(),
            source,
        })?;

    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GenericImageView, ImageBuffer, Rgb, Rgba};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        let img = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x % 256) as u8, (y % 256) as u8, 128])
        });
        DynamicImage::ImageRgb8(img)
    }

    #[test]
    fn large_image_is_shrunk_keeping_aspect() {
        let shrunk = fit_within(gradient(1000, 500), 500);
        assert_eq!(shrunk.dimensions(), (500, 250));
    }

    #[test]
    fn small_image_is_not_enlarged() {
        let kept = fit_within(gradient(120, 80), 500);
        assert_eq!(kept.dimensions(), (120, 80));
    }

    #[test]
    fn load_shrinks_saved_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("wide.png");
        gradient(800, 200).save(&path).unwrap();

        let loaded = load_file(&path, 400).unwrap();
        assert_eq!(loaded.dimensions(), (400, 100));
        assert_eq!(loaded.path(), path.as_path());
    }

    #[test]
    fn load_sniffs_format_from_content() {
        let dir = tempfile::tempdir().unwrap();
        let bare = dir.path().join("snapshot");
        let odd = dir.path().join("snapshot.data");
        gradient(30, 20).save_with_format(&bare, ImageFormat::Png).unwrap();
        std::fs::copy(&bare, &odd).unwrap();

        assert_eq!(load_file(&bare, 500).unwrap().dimensions(), (30, 20));
        assert_eq!(load_file(&odd, 500).unwrap().dimensions(), (30, 20));
    }

    #[test]
    fn load_rejects_non_image_content() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "hello").unwrap();

        let err = load_file(&path, 500).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ViewerError>(),
            Some(ViewerError::Decode { .. })
        ));
    }

    #[test]
    fn load_reports_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        std::fs::write(&path, b"not really a png").unwrap();

        let err = load_file(&path, 500).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ViewerError>(),
            Some(ViewerError::Decode { .. })
        ));
    }

    #[test]
    fn save_without_extension_writes_png() {
        let dir = tempfile::tempdir().unwrap();
        let written = save_file(&gradient(10, 10), &dir.path().join("plain")).unwrap();

        assert_eq!(written.extension().and_then(|e| e.to_str()), Some("png"));
        assert_eq!(image::open(&written).unwrap().dimensions(), (10, 10));
    }

    #[test]
    fn save_jpeg_drops_alpha() {
        let dir = tempfile::tempdir().unwrap();
        let rgba = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(8, 8, Rgba([10, 20, 30, 40])));

        let written = save_file(&rgba, &dir.path().join("photo.JPG")).unwrap();
        let reread = image::open(&written).unwrap();
        assert!(!reread.color().has_alpha());
    }

    #[test]
    fn save_rejects_unknown_extension() {
        let dir = tempfile::tempdir().unwrap();
        let err = save_file(&gradient(4, 4), &dir.path().join("out.tiff")).unwrap_err();
        assert!(err.to_string().contains("tiff"));
    }
}
