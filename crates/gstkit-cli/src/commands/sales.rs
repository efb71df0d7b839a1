//! Sales command - extract fields from a sales invoice file.

use std::fs;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::debug;

use gstkit_core::{
    DocumentReader, GstkitConfig, PdfFallback, PdfRasterizer, SalesInvoiceExtractor,
    SalesInvoiceFields, TesseractEngine,
};

use super::{emit_error, load_config};

/// Arguments for the sales command.
#[derive(Args)]
pub struct SalesArgs {
    /// Path to invoice image or PDF
    #[arg(required = true)]
    input: PathBuf,

    /// Save extracted JSON to this file
    #[arg(long = "json")]
    json: Option<PathBuf>,
}

pub async fn run(args: SalesArgs, config_path: Option<&str>) -> anyhow::Result<()> {
    let config = load_config(config_path)?;

    match extract(&args, &config) {
        Ok(fields) => {
            // The calling process parses this line.
            println!("{}", serde_json::to_string(&fields)?);
            Ok(())
        }
        Err(e) => emit_error(&e),
    }
}

fn extract(args: &SalesArgs, config: &GstkitConfig) -> gstkit_core::Result<SalesInvoiceFields> {
    let engine = TesseractEngine::from_config(&config.ocr);
    let reader = DocumentReader::new(&engine, PdfRasterizer::from_config(&config.pdf));

    let transcript = reader.transcribe(&args.input, PdfFallback::Report)?;
    debug!("transcript has {} characters", transcript.len());

    let fields = SalesInvoiceExtractor::new().extract(&transcript);

    if let Some(path) = &args.json {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, serde_json::to_string_pretty(&fields)?)?;
        eprintln!("{} JSON saved to {}", style("✓").green(), path.display());
    }

    Ok(fields)
}
