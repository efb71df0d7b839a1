//! Error types for the gstkit-core library.

use thiserror::Error;

/// Main error type for the gstkit library.
#[derive(Error, Debug)]
pub enum GstkitError {
    /// PDF processing error.
    #[error("PDF error: {0}")]
    Pdf(#[from] PdfError),

    /// OCR processing error.
    #[error("OCR error: {0}")]
    Ocr(#[from] OcrError),

    /// Report generation error.
    #[error("report error: {0}")]
    Report(#[from] ReportError),

    /// Image decoding error.
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),

    /// Invalid caller input.
    #[error("{0}")]
    Input(String),
}

/// Errors related to PDF handling.
#[derive(Error, Debug)]
pub enum PdfError {
    /// Failed to open/parse the PDF file.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be processed.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF is empty or has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The external rasterizer is not installed.
    #[error("PDF support unavailable: {0}")]
    Unsupported(String),

    /// Page rasterization failed.
    #[error("failed to render page {page}: {reason}")]
    Render { page: u32, reason: String },
}

/// Errors related to OCR processing.
#[derive(Error, Debug)]
pub enum OcrError {
    /// The external recognition engine is not installed.
    #[error("OCR engine unavailable: {0}")]
    EngineUnavailable(String),

    /// Text recognition failed.
    #[error("text recognition failed: {0}")]
    Recognition(String),

    /// Image preprocessing failed.
    #[error("preprocessing failed: {0}")]
    Preprocessing(String),

    /// The engine produced no text for the input.
    #[error("no text extracted from the file")]
    EmptyTranscript,
}

/// Errors related to GSTR-1 report generation.
#[derive(Error, Debug)]
pub enum ReportError {
    /// The date-range payload on stdin could not be parsed.
    #[error("malformed input: {0}")]
    MalformedInput(#[from] serde_json::Error),

    /// Database connection or query failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// CSV output failure.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Result type for the gstkit library.
pub type Result<T> = std::result::Result<T, GstkitError>;
