//! Configuration structures for the gstkit pipelines.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Main configuration for the gstkit tool.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct GstkitConfig {
    /// OCR engine configuration.
    pub ocr: OcrConfig,

    /// PDF rasterization configuration.
    pub pdf: PdfConfig,

    /// GSTR-1 report configuration.
    pub report: ReportConfig,
}

/// External OCR engine configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcrConfig {
    /// Name or path of the Tesseract binary.
    pub binary: String,

    /// Recognition language passed to the engine.
    pub language: String,
}

impl Default for OcrConfig {
    fn default() -> Self {
        Self {
            binary: "tesseract".to_string(),
            language: "eng".to_string(),
        }
    }
}

/// PDF rasterization configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Name or path of the pdftoppm binary.
    pub binary: String,

    /// DPI for rendering the first PDF page to an image.
    pub render_dpi: u32,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            binary: "pdftoppm".to_string(),
            render_dpi: 300,
        }
    }
}

/// GSTR-1 report configuration.
///
/// The filer GSTIN and the synthetic line-item tax rate default to
/// placeholders and must be supplied by the deployment.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Postgres connection string. Falls back to the DATABASE_URL
    /// environment variable when unset.
    pub database_url: Option<String>,

    /// GSTIN of the filing entity.
    pub gstin: String,

    /// Tax rate reported on the synthetic per-invoice line item.
    pub default_rate: u32,

    /// Invoice category included in the return.
    pub invoice_category: String,

    /// Output path for the flat CSV.
    pub csv_path: PathBuf,

    /// Output path for the grouped JSON document.
    pub json_path: PathBuf,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            database_url: None,
            gstin: "YOUR_GSTIN_HERE".to_string(),
            default_rate: 0,
            invoice_category: "GST".to_string(),
            csv_path: PathBuf::from("gstr1.csv"),
            json_path: PathBuf::from("gstr1.json"),
        }
    }
}

impl GstkitConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, std::io::Error> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<(), std::io::Error> {
        let content = serde_json::to_string_pretty(self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string()))?;
        std::fs::write(path, content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = GstkitConfig::default();
        assert_eq!(config.ocr.language, "eng");
        assert_eq!(config.pdf.render_dpi, 300);
        assert_eq!(config.report.default_rate, 0);
        assert_eq!(config.report.csv_path, PathBuf::from("gstr1.csv"));
    }

    #[test]
    fn test_partial_file_round_trip() {
        let partial = r#"{"report": {"gstin": "27AAPFU0939F1ZV"}}"#;
        let config: GstkitConfig = serde_json::from_str(partial).unwrap();
        assert_eq!(config.report.gstin, "27AAPFU0939F1ZV");
        // Unlisted sections keep their defaults.
        assert_eq!(config.ocr.binary, "tesseract");
    }
}
