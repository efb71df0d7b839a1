//! Tesseract-backed implementation of [`OcrEngine`].
//!
//! The engine is invoked as an external process: the image is written to
//! a scratch PNG and `tesseract <image> stdout -l <lang>` is captured.

use std::io::ErrorKind;
use std::process::Command;

use image::DynamicImage;
use tracing::debug;

use super::OcrEngine;
use crate::error::OcrError;
use crate::models::config::OcrConfig;

/// External Tesseract engine with a fixed recognition language.
pub struct TesseractEngine {
    binary: String,
    language: String,
}

impl TesseractEngine {
    /// Create an engine using the `tesseract` binary on PATH and English.
    pub fn new() -> Self {
        Self::from_config(&OcrConfig::default())
    }

    /// Create an engine from configuration.
    pub fn from_config(config: &OcrConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            language: config.language.clone(),
        }
    }
}

impl Default for TesseractEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl OcrEngine for TesseractEngine {
    fn recognize(&self, image: &DynamicImage) -> Result<String, OcrError> {
        let scratch = tempfile::Builder::new()
            .prefix("gstkit-ocr-")
            .suffix(".png")
            .tempfile()
            .map_err(|e| OcrError::Recognition(format!("scratch file: {}", e)))?;

        image
            .save(scratch.path())
            .map_err(|e| OcrError::Recognition(format!("scratch image: {}", e)))?;

        debug!(
            "running {} on {} (lang={})",
            self.binary,
            scratch.path().display(),
            self.language
        );

        let output = Command::new(&self.binary)
            .arg(scratch.path())
            .arg("stdout")
            .arg("-l")
            .arg(&self.language)
            .output()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    OcrError::EngineUnavailable(format!("{} not installed", self.binary))
                } else {
                    OcrError::Recognition(e.to_string())
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(OcrError::Recognition(format!(
                "{} exited with {}: {}",
                self.binary,
                output.status,
                stderr.trim()
            )));
        }

        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{GrayImage, Luma};

    #[test]
    fn test_missing_binary_is_a_dependency_error() {
        let engine = TesseractEngine::from_config(&OcrConfig {
            binary: "definitely-not-a-real-ocr-binary".to_string(),
            language: "eng".to_string(),
        });
        let image = DynamicImage::ImageLuma8(GrayImage::from_pixel(8, 8, Luma([255])));

        match engine.recognize(&image) {
            Err(OcrError::EngineUnavailable(_)) => {}
            other => panic!("expected EngineUnavailable, got {:?}", other.map(|_| ())),
        }
    }
}
