//! gpsr - Group sponsor report for the Hyak research computing groups
//!
//! Lists every direct sub-group of a top-level UW group with its member
//! count, its manager and the manager's home department.

use std::io::Write;

use clap::Parser;

mod cli;
mod client;
mod config;
mod error;
mod models;
mod output;
mod report;

use cli::{Cli, Commands, GlobalOptions};
use error::Result;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    if let Err(err) = run(cli).await {
        eprintln!("Error: {}", err);
        std::process::exit(1);
    }
}

/// Log to stderr so stdout carries only the report.
///
/// `--debug` forces debug level; otherwise `RUST_LOG` applies, defaulting
/// to warnings.
fn init_logging(debug: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));
    if debug {
        builder.filter_level(log::LevelFilter::Debug);
    }
    builder
        .target(env_logger::Target::Stderr)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let opts = GlobalOptions::from_cli(&cli);

    match cli.command.unwrap_or(Commands::Report) {
        Commands::Report => cli::report::run(&opts).await,
        Commands::Members { group_id } => cli::lookup::members(&opts, &group_id).await,
        Commands::Updaters { group_id } => cli::lookup::updaters(&opts, &group_id).await,
        Commands::Department { account_id } => {
            cli::lookup::department(&opts, &account_id).await
        }
        Commands::Status => cli::status::run(&opts),
    }
}
