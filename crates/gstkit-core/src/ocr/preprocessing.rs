//! Image binarization applied before OCR.
//!
//! Scanned invoices recognize noticeably better after thresholding, so
//! the pipeline runs grayscale -> adaptive threshold -> median denoise
//! and falls back to the raw decoded image if any step fails.

use image::{DynamicImage, GrayImage, Luma};
use tracing::debug;

use crate::error::OcrError;

const THRESHOLD_BLOCK_SIZE: u32 = 15;
const THRESHOLD_OFFSET: i32 = 5;

/// Binarize an image for OCR.
pub fn binarize(image: &DynamicImage) -> Result<GrayImage, OcrError> {
    let gray = image.to_luma8();
    let (width, height) = gray.dimensions();

    if width == 0 || height == 0 {
        return Err(OcrError::Preprocessing(format!(
            "degenerate image dimensions {}x{}",
            width, height
        )));
    }

    debug!("binarizing {}x{} image", width, height);

    let thresholded = adaptive_threshold(&gray, THRESHOLD_BLOCK_SIZE, THRESHOLD_OFFSET);
    Ok(median_filter(&thresholded))
}

/// Local-mean adaptive threshold: a pixel turns white when it is brighter
/// than the mean of its block minus a fixed offset.
fn adaptive_threshold(image: &GrayImage, block_size: u32, offset: i32) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut result = GrayImage::new(width, height);

    let half_block = block_size / 2;

    for y in 0..height {
        for x in 0..width {
            let mut sum = 0u32;
            let mut count = 0u32;

            let y_start = y.saturating_sub(half_block);
            let y_end = (y + half_block + 1).min(height);
            let x_start = x.saturating_sub(half_block);
            let x_end = (x + half_block + 1).min(width);

            for ly in y_start..y_end {
                for lx in x_start..x_end {
                    sum += image.get_pixel(lx, ly)[0] as u32;
                    count += 1;
                }
            }

            let mean = (sum / count) as i32;
            let threshold = mean - offset;
            let pixel_value = image.get_pixel(x, y)[0] as i32;

            let output = if pixel_value > threshold { 255 } else { 0 };
            result.put_pixel(x, y, Luma([output]));
        }
    }

    result
}

/// 3x3 median filter to knock out salt-and-pepper noise left by
/// thresholding.
fn median_filter(image: &GrayImage) -> GrayImage {
    let (width, height) = image.dimensions();
    let mut result = GrayImage::new(width, height);

    for y in 0..height {
        for x in 0..width {
            let y_start = y.saturating_sub(1);
            let y_end = (y + 2).min(height);
            let x_start = x.saturating_sub(1);
            let x_end = (x + 2).min(width);

            let mut neighborhood = Vec::with_capacity(9);
            for ly in y_start..y_end {
                for lx in x_start..x_end {
                    neighborhood.push(image.get_pixel(lx, ly)[0]);
                }
            }

            neighborhood.sort_unstable();
            let median = neighborhood[neighborhood.len() / 2];
            result.put_pixel(x, y, Luma([median]));
        }
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_image(width: u32, height: u32) -> GrayImage {
        GrayImage::from_fn(width, height, |x, _| Luma([(x * 255 / width) as u8]))
    }

    #[test]
    fn test_binarize_output_is_binary() {
        let image = DynamicImage::ImageLuma8(gradient_image(32, 32));
        let binary = binarize(&image).unwrap();

        assert!(binary.pixels().all(|p| p[0] == 0 || p[0] == 255));
    }

    #[test]
    fn test_adaptive_threshold_uniform_image_goes_white() {
        // Every pixel equals the local mean, so mean - offset is always
        // below the pixel value.
        let uniform = GrayImage::from_pixel(16, 16, Luma([128]));
        let result = adaptive_threshold(&uniform, 15, 5);

        assert!(result.pixels().all(|p| p[0] == 255));
    }

    #[test]
    fn test_median_filter_removes_lone_speck() {
        let mut image = GrayImage::from_pixel(9, 9, Luma([255]));
        image.put_pixel(4, 4, Luma([0]));

        let filtered = median_filter(&image);
        assert_eq!(filtered.get_pixel(4, 4)[0], 255);
    }
}
