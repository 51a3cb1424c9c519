use image::{DynamicImage, GrayImage, Luma};

/// ITU-R 601-2 luma of one RGB pixel, rounded to the nearest level.
pub fn luma_601(r: u8, g: u8, b: u8) -> u8 {
    let weighted = r as u32 * 299 + g as u32 * 587 + b as u32 * 114;
    ((weighted + 500) / 1000) as u8
}

/// 8-bit single-channel luminance of any image. Alpha is discarded.
pub fn luminance(image: &DynamicImage) -> GrayImage {
    if let DynamicImage::ImageLuma8(gray) = image {
        return gray.clone();
    }
    let rgb = image.to_rgb8();
    GrayImage::from_fn(rgb.width(), rgb.height(), |x, y| {
        let [r, g, b] = rgb.get_pixel(x, y).0;
        Luma([luma_601(r, g, b)])
    })
}

/// Convert to an 8-bit grayscale image ("Convert to 8-bit").
pub fn to_grayscale(image: &DynamicImage) -> DynamicImage {
    DynamicImage::ImageLuma8(luminance(image))
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ColorType, ImageBuffer, Rgb, Rgba};

    #[test]
    fn luma_weights_primaries() {
        assert_eq!(luma_601(255, 255, 255), 255);
        assert_eq!(luma_601(0, 0, 0), 0);
        assert_eq!(luma_601(255, 0, 0), 76);
        assert_eq!(luma_601(0, 255, 0), 150);
        assert_eq!(luma_601(0, 0, 255), 29);
    }

    #[test]
    fn grayscale_is_single_channel_8bit() {
        let img = DynamicImage::ImageRgb8(ImageBuffer::from_fn(4, 2, |x, _| {
            if x < 2 {
                Rgb([255, 0, 0])
            } else {
                Rgb([0, 0, 255])
            }
        }));

        let gray = to_grayscale(&img);
        assert_eq!(gray.color(), ColorType::L8);
        let luma = gray.to_luma8();
        assert_eq!(luma.get_pixel(0, 0).0, [76]);
        assert_eq!(luma.get_pixel(3, 1).0, [29]);
    }

    #[test]
    fn grayscale_discards_alpha() {
        let img = DynamicImage::ImageRgba8(ImageBuffer::from_pixel(3, 3, Rgba([100, 100, 100, 0])));
        let gray = to_grayscale(&img);
        assert_eq!(gray.color(), ColorType::L8);
        assert_eq!(gray.to_luma8().get_pixel(1, 1).0, [100]);
    }

    #[test]
    fn grayscale_of_grayscale_is_identity() {
        let img = DynamicImage::ImageLuma8(GrayImage::from_fn(5, 5, |x, y| Luma([(x * 10 + y) as u8])));
        let again = to_grayscale(&img);
        assert_eq!(again.to_luma8(), img.to_luma8());
    }
}
