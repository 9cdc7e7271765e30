//! CLI command definitions and handlers

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub mod args;
pub mod context;
pub mod lookup;
pub mod report;
pub mod status;

pub use args::{GlobalOptions, OutputFormat};
pub use context::CommandContext;

/// gpsr - sub-group membership, manager and department report
#[derive(Parser, Debug)]
#[command(name = "gpsr")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute (defaults to `report`)
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output format (csv, table, json)
    #[arg(
        long,
        global = true,
        env = "GPSR_FORMAT",
        default_value = "csv",
        hide_env = true,
        hide_possible_values = true
    )]
    pub format: OutputFormat,

    /// Override config file location
    #[arg(long, global = true, env = "GPSR_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Client certificate (PEM)
    #[arg(long, global = true, env = "GPSR_CERT", hide_env = true)]
    pub cert: Option<PathBuf>,

    /// Client private key (PEM)
    #[arg(long, global = true, env = "GPSR_KEY", hide_env = true)]
    pub key: Option<PathBuf>,

    /// Additional CA certificates to trust (PEM bundle)
    #[arg(long, global = true, env = "GPSR_CA_BUNDLE", hide_env = true)]
    pub ca_bundle: Option<PathBuf>,

    /// Group service base URL
    #[arg(long, global = true, env = "GPSR_GROUPS_URL", hide_env = true)]
    pub groups_url: Option<String>,

    /// Person directory base URL
    #[arg(long, global = true, env = "GPSR_DIRECTORY_URL", hide_env = true)]
    pub directory_url: Option<String>,

    /// Top-level group whose sub-groups are reported
    #[arg(long, global = true, env = "GPSR_GROUP", hide_env = true)]
    pub group: Option<String>,

    /// Prefix stripped from sub-group ids to form account names
    #[arg(long, global = true, env = "GPSR_PREFIX", hide_env = true)]
    pub prefix: Option<String>,

    /// Number of sub-groups resolved at once
    #[arg(long, global = true, env = "GPSR_CONCURRENCY", hide_env = true)]
    pub concurrency: Option<usize>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GPSR_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Report every direct sub-group of the top-level group
    Report,

    /// List the direct members of a group
    Members {
        /// Group id, e.g. u_hyak_compute
        #[arg(value_name = "GROUP")]
        group_id: String,
    },

    /// List a group's updaters in service order
    Updaters {
        /// Group id, e.g. u_hyak_compute
        #[arg(value_name = "GROUP")]
        group_id: String,
    },

    /// Look up an account's home department
    Department {
        /// UW NetID
        #[arg(value_name = "ACCOUNT")]
        account_id: String,
    },

    /// Show the resolved configuration without contacting any service
    Status,
}
