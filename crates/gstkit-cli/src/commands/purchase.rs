//! Purchase command - extract fields from a purchase bill file.

use std::path::PathBuf;

use clap::Args;
use tracing::debug;

use gstkit_core::{
    DocumentReader, GstkitConfig, PdfFallback, PdfRasterizer, PurchaseBillExtractor,
    PurchaseBillFields, TesseractEngine,
};

use super::{emit_error, load_config};

/// Arguments for the purchase command.
#[derive(Args)]
pub struct PurchaseArgs {
    /// Path to bill image or PDF
    #[arg(required = true)]
    input: PathBuf,
}

pub async fn run(args: PurchaseArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    match extract(&args, &config) {
        Ok(fields) => {
            println!("{}", serde_json::to_string(&fields)?);
            Ok(())
        }
        Err(e) => emit_error(&e),
    }
}

fn extract(args: &PurchaseArgs, config: &GstkitConfig) -> gstkit_core::Result<PurchaseBillFields> {
    let engine = TesseractEngine::from_config(&config.ocr);
    let reader = DocumentReader::new(&engine, PdfRasterizer::from_config(&config.pdf));

    // Purchase bills fall back to a plain image decode when the PDF
    // rasterizer is missing instead of reporting it.
    let transcript = reader.transcribe(&args.input, PdfFallback::DecodeAsImage)?;
    debug!("transcript has {} characters", transcript.len());

    Ok(PurchaseBillExtractor::new().extract(&transcript))
}
