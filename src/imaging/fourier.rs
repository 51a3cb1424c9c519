use eframe::egui::{Color32, ColorImage};
use image::DynamicImage;
use rustfft::num_complex::Complex;
use rustfft::FftPlanner;

use super::ops::luminance;
use crate::error::ViewerError;

// ---------------------------------------------------------------------------
// Spectrum – centred log-magnitude of the 2D DFT
// ---------------------------------------------------------------------------

/// `ln(1 + |F(u, v)|)` of an image's luminance, zero frequency at the centre.
#[derive(Debug, Clone)]
pub struct Spectrum {
    pub width: usize,
    pub height: usize,
    /// Row-major, `width * height` values.
    pub values: Vec<f64>,
}

impl Spectrum {
    /// `(min, max)` over all values.
    pub fn range(&self) -> (f64, f64) {
        self.values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            })
    }

    /// Gray rendering scaled linearly from min (black) to max (white).
    /// A flat spectrum renders black.
    pub fn to_color_image(&self) -> ColorImage {
        let (min, max) = self.range();
        let span = max - min;
        let pixels = self
            .values
            .iter()
            .map(|&v| {
                let level = if span.abs() < f64::EPSILON {
                    0
                } else {
                    (((v - min) / span) * 255.0).round() as u8
                };
                Color32::from_gray(level)
            })
            .collect();
        ColorImage {
            size: [self.width, self.height],
            pixels,
        }
    }
}

/// Compute the centred log-magnitude spectrum of `image`.
pub fn log_magnitude_spectrum(image: &DynamicImage) -> Result<Spectrum, ViewerError> {
    let gray = luminance(image);
    let (width, height) = (gray.width() as usize, gray.height() as usize);
    if width == 0 || height == 0 {
        return Err(ViewerError::EmptyImage);
    }

    let mut buffer: Vec<Complex<f64>> = gray
        .pixels()
        .map(|p| Complex::new(p.0[0] as f64, 0.0))
        .collect();
    fft_2d(&mut buffer, width, height);

    let magnitudes: Vec<f64> = buffer.iter().map(|c| (1.0 + c.norm()).ln()).collect();
    log::debug!("computed {width}x{height} spectrum");

    Ok(Spectrum {
        width,
        height,
        values: fft_shift(&magnitudes, width, height),
    })
}

/// In-place forward 2D DFT of a row-major `width` × `height` buffer.
pub fn fft_2d(buffer: &mut Vec<Complex<f64>>, width: usize, height: usize) {
    let mut planner = FftPlanner::<f64>::new();

    // Rows: the buffer is `height` back-to-back transforms of length `width`.
    planner.plan_fft_forward(width).process(buffer);

    let mut columns = transpose(buffer, width, height);
    planner.plan_fft_forward(height).process(&mut columns);
    *buffer = transpose(&columns, height, width);
}

fn transpose<T: Copy>(data: &[T], width: usize, height: usize) -> Vec<T> {
    let mut out = Vec::with_capacity(data.len());
    for x in 0..width {
        for y in 0..height {
            out.push(data[y * width + x]);
        }
    }
    out
}

/// Roll both axes by half their length so the zero frequency sits at
/// `(width / 2, height / 2)`.
pub fn fft_shift<T: Copy + Default>(data: &[T], width: usize, height: usize) -> Vec<T> {
    let mut out = vec![T::default(); data.len()];
    for y in 0..height {
        let sy = (y + height / 2) % height;
        for x in 0..width {
            let sx = (x + width / 2) % width;
            out[sy * width + sx] = data[y * width + x];
        }
    }
    out
}
