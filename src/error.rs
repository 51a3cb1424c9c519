use std::path::PathBuf;

use thiserror::Error;

/// Failures of the image operations behind the menu entries.
#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("Unsupported image extension: .{extension}")]
    UnsupportedExtension { extension: String },

    #[error("Failed to decode {path}: {source}")]
    Decode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Failed to encode {path}: {source}")]
    Encode {
        path: PathBuf,
        #[source]
        source: image::ImageError,
    },

    #[error("Image has no pixels")]
    EmptyImage,
}
