//! Status command implementation

use std::path::Path;

use colored::Colorize;

use crate::cli::GlobalOptions;
use crate::cli::context::resolve_config;
use crate::config::Config;
use crate::error::Result;

/// Show the resolved configuration and whether its files are readable.
///
/// Never contacts either service.
pub fn run(opts: &GlobalOptions) -> Result<()> {
    println!("{}\n", "gpsr Configuration Status".bold());

    let config_path = Config::resolve_path(opts.config_ref())?;
    if config_path.exists() {
        println!("Config file: {}", config_path.display().to_string().cyan());
    } else {
        println!(
            "Config file: {} {}",
            config_path.display().to_string().cyan(),
            "(not present, using defaults)".dimmed()
        );
    }
    println!();

    let config = resolve_config(opts)?;

    file_status("Client certificate", &config.cert_file);
    file_status("Client key", &config.key_file);
    match config.ca_bundle {
        Some(ref path) => file_status("CA bundle", path),
        None => println!("{} CA bundle: system roots", "○".dimmed()),
    }

    println!();
    println!("{}", "Resolved settings".bold());
    print!("{}", config.to_yaml()?);
    println!();

    Ok(())
}

fn file_status(label: &str, path: &Path) {
    if path.is_file() {
        println!("{} {}: {}", "✓".green(), label, path.display());
    } else {
        println!("{} {}: {} (missing)", "✗".red(), label, path.display());
    }
}
