/// Imaging layer: the current image, file I/O and the pixel operations
/// behind the menu entries.
///
/// Architecture:
/// ```text
///  .jpg / .png / .bmp / .gif
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  decode + shrink → ViewerImage, encode on save
///   └──────────┘
///        │
///        ▼
///   ┌─────────────┐
///   │ ViewerImage  │  DynamicImage + source path
///   └─────────────┘
///        │
///        ├──▶ ops      grayscale (8-bit luma)
///        ├──▶ fourier  centred log-magnitude spectrum
///        └──▶ measure  two-click pixel distance
/// ```

pub mod fourier;
pub mod loader;
pub mod measure;
pub mod model;
pub mod ops;
