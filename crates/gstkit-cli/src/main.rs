//! CLI application for GST invoice OCR extraction and GSTR-1 reporting.

mod commands;

use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use commands::{config, gstr1, purchase, sales};

/// GST invoice tooling - extract fields from scanned invoices and
/// generate GSTR-1 returns
#[derive(Parser)]
#[command(name = "gstkit")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Path to config file
    #[arg(short, long, global = true)]
    config: Option<String>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a GSTR-1 return for a date range read from stdin
    Gstr1(gstr1::Gstr1Args),

    /// Extract fields from a sales invoice image or PDF
    Sales(sales::SalesArgs),

    /// Extract fields from a purchase bill image or PDF
    Purchase(purchase::PurchaseArgs),

    /// Manage configuration
    Config(config::ConfigArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Diagnostics go to stderr; stdout is reserved for the JSON payloads
    // the calling process parses.
    let level = match cli.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();

    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Commands::Gstr1(args) => gstr1::run(args, cli.config.as_deref()).await,
        Commands::Sales(args) => sales::run(args, cli.config.as_deref()).await,
        Commands::Purchase(args) => purchase::run(args, cli.config.as_deref()).await,
        Commands::Config(args) => config::run(args).await,
    }
}
