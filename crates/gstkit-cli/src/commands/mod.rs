//! Subcommand implementations.

pub mod config;
pub mod gstr1;
pub mod purchase;
pub mod sales;

use std::path::Path;

use gstkit_core::GstkitConfig;

/// Load the config file when one was given, defaults otherwise.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<GstkitConfig> {
    match config_path {
        Some(path) => Ok(GstkitConfig::from_file(Path::new(path))?),
        None => Ok(GstkitConfig::default()),
    }
}

/// Report a pipeline failure the way the calling process expects it:
/// a JSON `{"error": ...}` object on stdout and a non-zero exit code.
/// Never returns.
pub fn emit_error(err: &dyn std::fmt::Display) -> ! {
    println!("{}", serde_json::json!({ "error": err.to_string() }));
    std::process::exit(1);
}
