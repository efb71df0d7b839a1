//! File-to-transcript pipeline shared by both extractors.

use std::fs;
use std::path::Path;

use image::DynamicImage;
use tracing::{debug, warn};

use crate::error::{GstkitError, OcrError, PdfError, Result};
use crate::ocr::{binarize, OcrEngine};
use crate::pdf::{is_pdf, PdfRasterizer};

/// How a PDF input is handled when the external rasterizer is missing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PdfFallback {
    /// Report a dependency error (sales extractor).
    Report,
    /// Silently try to decode the file as an image instead (purchase
    /// extractor); a real PDF then fails as an unreadable image.
    DecodeAsImage,
}

/// Turns an input file (image or PDF) into an OCR transcript.
pub struct DocumentReader<'a> {
    engine: &'a dyn OcrEngine,
    rasterizer: PdfRasterizer,
}

impl<'a> DocumentReader<'a> {
    pub fn new(engine: &'a dyn OcrEngine, rasterizer: PdfRasterizer) -> Self {
        Self { engine, rasterizer }
    }

    /// Produce the transcript for a file.
    ///
    /// PDFs are validated, rendered (first page only) to a sibling image,
    /// recognized, and the rendered image removed. An empty transcript is
    /// an input error.
    pub fn transcribe(&self, path: &Path, fallback: PdfFallback) -> Result<String> {
        if !path.exists() {
            return Err(GstkitError::Input(format!(
                "file not found: {}",
                path.display()
            )));
        }

        let text = if is_pdf(path) {
            match fallback {
                PdfFallback::Report if !self.rasterizer.is_available() => {
                    return Err(PdfError::Unsupported(
                        "pdftoppm not installed - cannot read PDF".to_string(),
                    )
                    .into());
                }
                PdfFallback::DecodeAsImage if !self.rasterizer.is_available() => {
                    self.ocr_image(path)?
                }
                _ => self.ocr_pdf_page(path)?,
            }
        } else {
            self.ocr_image(path)?
        };

        if text.trim().is_empty() {
            return Err(OcrError::EmptyTranscript.into());
        }

        Ok(text)
    }

    fn ocr_pdf_page(&self, path: &Path) -> Result<String> {
        let page = self.rasterizer.rasterize_first_page(path)?;
        let text = self.ocr_image(&page);

        // The rendered page is removed only once recognition succeeded;
        // a failed run leaves it behind.
        if text.is_ok() {
            fs::remove_file(&page)?;
            debug!("removed rendered page {}", page.display());
        }

        text
    }

    fn ocr_image(&self, path: &Path) -> Result<String> {
        let decoded = image::open(path)?;

        let prepared = match binarize(&decoded) {
            Ok(binary) => DynamicImage::ImageLuma8(binary),
            Err(e) => {
                warn!("preprocessing failed, using raw image: {}", e);
                decoded
            }
        };

        Ok(self.engine.recognize(&prepared)?)
    }
}
