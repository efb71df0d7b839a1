//! PDF validation and first-page rasterization.
//!
//! Documents are parsed with lopdf to reject broken, encrypted, or empty
//! files up front; the actual rendering is delegated to the external
//! Poppler `pdftoppm` binary at a fixed DPI. Only the first page is ever
//! rendered.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::process::Command;

use lopdf::Document;
use tracing::debug;

use crate::error::PdfError;
use crate::models::config::PdfConfig;

/// Result type for PDF operations.
pub type Result<T> = std::result::Result<T, PdfError>;

/// Renders the first page of a PDF to a sibling JPEG.
pub struct PdfRasterizer {
    binary: String,
    dpi: u32,
}

impl PdfRasterizer {
    /// Create a rasterizer using `pdftoppm` on PATH at 300 DPI.
    pub fn new() -> Self {
        Self::from_config(&PdfConfig::default())
    }

    /// Create a rasterizer from configuration.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self {
            binary: config.binary.clone(),
            dpi: config.render_dpi,
        }
    }

    /// Whether the external rasterizer binary can be spawned.
    pub fn is_available(&self) -> bool {
        Command::new(&self.binary).arg("-v").output().is_ok()
    }

    /// Render page 1 to `<stem>_page1.jpg` next to the input file and
    /// return that path.
    ///
    /// The caller owns the returned file and is responsible for removing
    /// it once the page has been consumed.
    pub fn rasterize_first_page(&self, pdf_path: &Path) -> Result<PathBuf> {
        let document =
            Document::load(pdf_path).map_err(|e| PdfError::Parse(e.to_string()))?;

        if document.is_encrypted() {
            return Err(PdfError::Encrypted);
        }
        if document.get_pages().is_empty() {
            return Err(PdfError::NoPages);
        }

        let prefix = page_image_prefix(pdf_path);
        debug!(
            "rendering page 1 of {} at {} dpi",
            pdf_path.display(),
            self.dpi
        );

        let output = Command::new(&self.binary)
            .arg("-jpeg")
            .arg("-r")
            .arg(self.dpi.to_string())
            .arg("-f")
            .arg("1")
            .arg("-l")
            .arg("1")
            .arg("-singlefile")
            .arg(pdf_path)
            .arg(&prefix)
            .output()
            .map_err(|e| {
                if e.kind() == ErrorKind::NotFound {
                    PdfError::Unsupported(format!("{} not installed", self.binary))
                } else {
                    PdfError::Render {
                        page: 1,
                        reason: e.to_string(),
                    }
                }
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(PdfError::Render {
                page: 1,
                reason: stderr.trim().to_string(),
            });
        }

        let rendered = prefix.with_extension("jpg");
        if !rendered.exists() {
            return Err(PdfError::Render {
                page: 1,
                reason: format!("{} produced no output image", self.binary),
            });
        }

        Ok(rendered)
    }
}

impl Default for PdfRasterizer {
    fn default() -> Self {
        Self::new()
    }
}

/// `invoice.pdf` renders through the prefix `invoice_page1`, which
/// pdftoppm turns into `invoice_page1.jpg`.
fn page_image_prefix(pdf_path: &Path) -> PathBuf {
    let stem = pdf_path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "page".to_string());

    pdf_path.with_file_name(format!("{}_page1", stem))
}

/// Whether the path looks like a PDF by extension.
pub fn is_pdf(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("pdf"))
}
