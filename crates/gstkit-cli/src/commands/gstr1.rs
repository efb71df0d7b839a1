//! Gstr1 command - generate the GSTR-1 return for a date range.
//!
//! The range arrives as a JSON object on stdin; the CSV and JSON
//! artifacts land on disk and the summary goes to stdout.

use std::io::Read;
use std::path::PathBuf;

use clap::Args;
use console::style;
use tracing::info;

use gstkit_core::error::ReportError;
use gstkit_core::report::{self, filing_period_now, Gstr1Generator};
use gstkit_core::{DateRange, GstkitConfig, GstkitError, ReportSummary};

use super::{emit_error, load_config};

/// Arguments for the gstr1 command.
#[derive(Args)]
pub struct Gstr1Args {
    /// Override the CSV output path
    #[arg(long)]
    csv: Option<PathBuf>,

    /// Override the JSON output path
    #[arg(long)]
    json: Option<PathBuf>,
}

pub async fn run(args: Gstr1Args, config_path: Option<&str>) -> anyhow::Result<()> {
    let mut config = load_config(config_path)?;

    if let Some(csv) = args.csv {
        config.report.csv_path = csv;
    }
    if let Some(json) = args.json {
        config.report.json_path = json;
    }

    match generate(&config).await {
        Ok(summary) => {
            println!("{}", serde_json::to_string(&summary)?);
            Ok(())
        }
        Err(e) => emit_error(&e),
    }
}

async fn generate(config: &GstkitConfig) -> gstkit_core::Result<ReportSummary> {
    let mut input = String::new();
    std::io::stdin().read_to_string(&mut input)?;

    let range: DateRange =
        serde_json::from_str(&input).map_err(ReportError::MalformedInput)?;

    let database_url = config
        .report
        .database_url
        .clone()
        .or_else(|| std::env::var("DATABASE_URL").ok())
        .ok_or_else(|| {
            GstkitError::Config(
                "no database URL configured (set report.database_url or DATABASE_URL)".to_string(),
            )
        })?;

    let pool = report::db::connect(&database_url).await?;
    let rows = report::db::fetch_invoices(&pool, &range, &config.report.invoice_category).await?;
    info!("fetched {} invoices", rows.len());

    let generator = Gstr1Generator::new(&config.report);

    generator.write_csv(&rows, &config.report.csv_path)?;
    eprintln!(
        "{} CSV written to {}",
        style("✓").green(),
        config.report.csv_path.display()
    );

    let document = generator.build(&rows, &filing_period_now());
    generator.write_json(&document, &config.report.json_path)?;
    eprintln!(
        "{} Return document written to {}",
        style("✓").green(),
        config.report.json_path.display()
    );

    Ok(Gstr1Generator::summarize(&document, &rows))
}
