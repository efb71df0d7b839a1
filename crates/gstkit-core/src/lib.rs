//! Core library for GST invoice tooling.
//!
//! This crate provides:
//! - An OCR pipeline over an external Tesseract engine (image binarization,
//!   first-page PDF rasterization)
//! - Rule-based field extraction for sales invoices and purchase bills
//! - GSTR-1 report generation from the invoice store

pub mod error;
pub mod extract;
pub mod models;
pub mod ocr;
pub mod pdf;
pub mod pipeline;
pub mod report;

pub use error::{GstkitError, Result};
pub use extract::{FieldExtractor, PurchaseBillExtractor, SalesInvoiceExtractor};
pub use models::config::GstkitConfig;
pub use models::fields::{PurchaseBillFields, PurchaseLineItem, SalesInvoiceFields, SalesLineItem};
pub use models::report::{DateRange, Gstr1Document, InvoiceRow, ReportSummary};
pub use ocr::{OcrEngine, TesseractEngine};
pub use pdf::PdfRasterizer;
pub use pipeline::{DocumentReader, PdfFallback};
pub use report::Gstr1Generator;
