//! OCR pipeline over an external recognition engine.

mod preprocessing;
mod tesseract;

pub use preprocessing::binarize;
pub use tesseract::TesseractEngine;

use image::DynamicImage;

use crate::error::OcrError;

/// A text recognition engine.
///
/// Implementations turn one image into one plain-text transcript. The
/// engine is a black box: no layout, no confidence scores, just text.
pub trait OcrEngine {
    /// Recognize all text in the image.
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError>;
}
